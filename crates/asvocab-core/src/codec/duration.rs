//! `xsd:duration` values.
//!
//! xsd:duration cannot express calendar lengths, so a year is taken as 365 days
//! and a month as 30 days in both directions.

use chrono::TimeDelta;
use serde_json::Value;

use super::{CodecError, expect_str};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_MONTH: i64 = 30 * SECS_PER_DAY;
const SECS_PER_YEAR: i64 = 365 * SECS_PER_DAY;

const DATE_UNITS: [(char, i64); 3] = [('Y', SECS_PER_YEAR), ('M', SECS_PER_MONTH), ('D', SECS_PER_DAY)];
const TIME_UNITS: [(char, i64); 3] = [('H', SECS_PER_HOUR), ('M', SECS_PER_MINUTE), ('S', 1)];

pub fn decode_duration(raw: &Value) -> Result<TimeDelta, CodecError> {
    let text = expect_str(raw, "xsd:duration")?;
    parse_duration(text).ok_or_else(|| CodecError::InvalidDuration(text.to_string()))
}

fn parse_duration(text: &str) -> Option<TimeDelta> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let rest = rest.strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) if !time.is_empty() => (date, time),
        Some(_) => return None,
        None => (rest, ""),
    };
    let date = components(date_part, &DATE_UNITS)?;
    let time = components(time_part, &TIME_UNITS)?;
    if date.is_empty() && time.is_empty() {
        return None;
    }

    let mut total = TimeDelta::zero();
    for (number, unit_secs) in date.into_iter().chain(time) {
        let part = if unit_secs == 1 {
            parse_seconds(number)?
        } else {
            let amount: i64 = number.parse().ok()?;
            TimeDelta::try_seconds(amount.checked_mul(unit_secs)?)?
        };
        total = total.checked_add(&part)?;
    }
    Some(if negative { -total } else { total })
}

/// Splits `5Y3D` into `[("5", year), ("3", day)]`, enforcing designator order.
fn components<'a>(part: &'a str, units: &[(char, i64)]) -> Option<Vec<(&'a str, i64)>> {
    let mut out = Vec::new();
    let mut next_unit = 0;
    let mut start = 0;
    for (index, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        let offset = units[next_unit..].iter().position(|(unit, _)| *unit == c)?;
        let number = &part[start..index];
        if number.is_empty() {
            return None;
        }
        out.push((number, units[next_unit + offset].1));
        next_unit += offset + 1;
        start = index + c.len_utf8();
    }
    if start != part.len() {
        return None;
    }
    Some(out)
}

fn parse_seconds(number: &str) -> Option<TimeDelta> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if fraction.len() > 9 || fraction.contains('.') {
        return None;
    }
    let secs: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let nanos: i64 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<9}").parse().ok()?
    };
    TimeDelta::try_seconds(secs)?.checked_add(&TimeDelta::nanoseconds(nanos))
}

/// Largest units first, e.g. `P1Y2M3DT4H5M6S`; zero is `PT0S`.
pub fn encode_duration(value: &TimeDelta) -> Value {
    let mut out = String::new();
    let mut remaining = *value;
    if remaining < TimeDelta::zero() {
        out.push('-');
        remaining = -remaining;
    }
    out.push('P');

    let mut secs = remaining.num_seconds();
    let nanos = remaining.subsec_nanos();
    let mut date_written = false;
    for (unit, unit_secs) in DATE_UNITS {
        let amount = secs / unit_secs;
        if amount > 0 {
            out.push_str(&format!("{amount}{unit}"));
            secs %= unit_secs;
            date_written = true;
        }
    }

    if secs > 0 || nanos > 0 || !date_written {
        out.push('T');
        let hours = secs / SECS_PER_HOUR;
        let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = secs % SECS_PER_MINUTE;
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if seconds > 0 || nanos > 0 || (hours == 0 && minutes == 0) {
            if nanos > 0 {
                let fraction = format!("{nanos:09}");
                out.push_str(&format!("{seconds}.{}S", fraction.trim_end_matches('0')));
            } else {
                out.push_str(&format!("{seconds}S"));
            }
        }
    }
    Value::String(out)
}
