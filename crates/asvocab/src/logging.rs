//! Log output for the CLI.
//!
//! Logs go to stderr so that normalized documents on stdout stay clean. The
//! filter comes from `ASVOCAB_LOG` when set, else from the config file.

use asvocab_common::config::{LogFormat, LoggingSection};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "ASVOCAB_LOG";

/// Builds the filter: `override_level`, then `ASVOCAB_LOG`, then the config.
pub fn build_filter(logging: &LoggingSection, override_level: Option<&str>) -> EnvFilter {
    if let Some(level) = override_level {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(
    logging: &LoggingSection,
    override_level: Option<&str>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = build_filter(logging, override_level);
    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let filter = build_filter(&LoggingSection::default(), Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_config_level_used_without_env() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        let logging = LoggingSection {
            level: "asvocab_core=trace".to_string(),
            format: LogFormat::Text,
        };
        assert_eq!(build_filter(&logging, None).to_string(), "asvocab_core=trace");
    }
}
