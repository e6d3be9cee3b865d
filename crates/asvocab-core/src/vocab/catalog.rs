//! ActivityStreams 2.0 property and type catalog.
//!
//! Properties are grouped the way the vocabulary inherits them (Object,
//! Activity, Actor, Collection, Link, ...). A type's layout is the ordered list
//! of its groups, and that order is the order properties are encoded in.

use super::node::{TypeKind, VocabType};
use super::shape::Shape;
use super::slot::PropertySpec;

use Shape::{
    Collection, DateTime, Duration, Float, Iri, LangString, Link, MediaType, NonNegativeInteger,
    Object,
};

const OBJECT_LINK_IRI: &[Shape] = &[Object, Link, Iri];
const TEXT: &[Shape] = &[Shape::String, LangString];
const COLLECTION_IRI: &[Shape] = &[Collection, Iri];

// =============================================================================
// Activity
// =============================================================================

pub const ACTOR: PropertySpec = PropertySpec::repeatable("actor", OBJECT_LINK_IRI);
pub const OBJECT: PropertySpec = PropertySpec::repeatable("object", OBJECT_LINK_IRI);
pub const TARGET: PropertySpec = PropertySpec::repeatable("target", OBJECT_LINK_IRI);
pub const RESULT: PropertySpec = PropertySpec::repeatable("result", OBJECT_LINK_IRI);
pub const ORIGIN: PropertySpec = PropertySpec::repeatable("origin", OBJECT_LINK_IRI);
pub const INSTRUMENT: PropertySpec = PropertySpec::repeatable("instrument", OBJECT_LINK_IRI);

// =============================================================================
// Object
// =============================================================================

pub const ALTITUDE: PropertySpec = PropertySpec::functional("altitude", &[Float]);
pub const ATTACHMENT: PropertySpec = PropertySpec::repeatable("attachment", OBJECT_LINK_IRI);
pub const ATTRIBUTED_TO: PropertySpec = PropertySpec::repeatable("attributedTo", OBJECT_LINK_IRI);
pub const AUDIENCE: PropertySpec = PropertySpec::repeatable("audience", OBJECT_LINK_IRI);
pub const CONTENT: PropertySpec = PropertySpec::repeatable("content", TEXT);
pub const CONTENT_MAP: PropertySpec = PropertySpec::language_map("contentMap");
pub const CONTEXT: PropertySpec = PropertySpec::repeatable("context", OBJECT_LINK_IRI);
pub const NAME: PropertySpec = PropertySpec::repeatable("name", TEXT);
pub const NAME_MAP: PropertySpec = PropertySpec::language_map("nameMap");
pub const END_TIME: PropertySpec = PropertySpec::functional("endTime", &[DateTime]);
pub const GENERATOR: PropertySpec = PropertySpec::repeatable("generator", OBJECT_LINK_IRI);
pub const ICON: PropertySpec = PropertySpec::repeatable("icon", OBJECT_LINK_IRI);
pub const IMAGE: PropertySpec = PropertySpec::repeatable("image", OBJECT_LINK_IRI);
pub const IN_REPLY_TO: PropertySpec = PropertySpec::repeatable("inReplyTo", OBJECT_LINK_IRI);
pub const LOCATION: PropertySpec = PropertySpec::repeatable("location", OBJECT_LINK_IRI);
/// Link is tried before Object here.
pub const PREVIEW: PropertySpec = PropertySpec::repeatable("preview", &[Link, Object, Iri]);
pub const PUBLISHED: PropertySpec = PropertySpec::functional("published", &[DateTime]);
pub const REPLIES: PropertySpec = PropertySpec::functional("replies", COLLECTION_IRI);
pub const LIKES: PropertySpec = PropertySpec::functional("likes", COLLECTION_IRI);
pub const SHARES: PropertySpec = PropertySpec::functional("shares", COLLECTION_IRI);
pub const START_TIME: PropertySpec = PropertySpec::functional("startTime", &[DateTime]);
pub const SUMMARY: PropertySpec = PropertySpec::repeatable("summary", TEXT);
pub const SUMMARY_MAP: PropertySpec = PropertySpec::language_map("summaryMap");
pub const TAG: PropertySpec = PropertySpec::repeatable("tag", OBJECT_LINK_IRI);
pub const UPDATED: PropertySpec = PropertySpec::functional("updated", &[DateTime]);
pub const URL: PropertySpec = PropertySpec::repeatable("url", &[Iri, Link]);
pub const TO: PropertySpec = PropertySpec::repeatable("to", OBJECT_LINK_IRI);
pub const BTO: PropertySpec = PropertySpec::repeatable("bto", OBJECT_LINK_IRI);
pub const CC: PropertySpec = PropertySpec::repeatable("cc", OBJECT_LINK_IRI);
pub const BCC: PropertySpec = PropertySpec::repeatable("bcc", OBJECT_LINK_IRI);
pub const MEDIA_TYPE: PropertySpec = PropertySpec::functional("mediaType", &[MediaType]);
pub const DURATION: PropertySpec = PropertySpec::functional("duration", &[Duration]);
pub const SOURCE: PropertySpec = PropertySpec::functional("source", &[Object, Iri]);

// =============================================================================
// Actor
// =============================================================================

pub const INBOX: PropertySpec = PropertySpec::functional("inbox", COLLECTION_IRI);
pub const OUTBOX: PropertySpec = PropertySpec::functional("outbox", COLLECTION_IRI);
pub const FOLLOWING: PropertySpec = PropertySpec::functional("following", COLLECTION_IRI);
pub const FOLLOWERS: PropertySpec = PropertySpec::functional("followers", COLLECTION_IRI);
pub const LIKED: PropertySpec = PropertySpec::functional("liked", COLLECTION_IRI);
pub const STREAMS: PropertySpec = PropertySpec::repeatable("streams", COLLECTION_IRI);
pub const PREFERRED_USERNAME: PropertySpec =
    PropertySpec::functional("preferredUsername", TEXT);
pub const PREFERRED_USERNAME_MAP: PropertySpec =
    PropertySpec::language_map("preferredUsernameMap");
pub const ENDPOINTS: PropertySpec = PropertySpec::functional("endpoints", &[Object, Iri]);

// Endpoint IRIs carry no polymorphism.
pub const PROXY_URL: PropertySpec = PropertySpec::functional("proxyUrl", &[Iri]);
pub const OAUTH_AUTHORIZATION_ENDPOINT: PropertySpec =
    PropertySpec::functional("oauthAuthorizationEndpoint", &[Iri]);
pub const OAUTH_TOKEN_ENDPOINT: PropertySpec =
    PropertySpec::functional("oauthTokenEndpoint", &[Iri]);
pub const PROVIDE_CLIENT_KEY: PropertySpec = PropertySpec::functional("provideClientKey", &[Iri]);
pub const SIGN_CLIENT_KEY: PropertySpec = PropertySpec::functional("signClientKey", &[Iri]);
pub const SHARED_INBOX: PropertySpec = PropertySpec::functional("sharedInbox", &[Iri]);

// =============================================================================
// Collection
// =============================================================================

pub const TOTAL_ITEMS: PropertySpec =
    PropertySpec::functional("totalItems", &[NonNegativeInteger]);
pub const CURRENT: PropertySpec = PropertySpec::functional("current", &[Collection, Link, Iri]);
pub const FIRST: PropertySpec = PropertySpec::functional("first", &[Collection, Link, Iri]);
pub const LAST: PropertySpec = PropertySpec::functional("last", &[Collection, Link, Iri]);
pub const ITEMS: PropertySpec = PropertySpec::repeatable("items", OBJECT_LINK_IRI);
pub const ORDERED_ITEMS: PropertySpec = PropertySpec::repeatable("orderedItems", OBJECT_LINK_IRI);
pub const PART_OF: PropertySpec = PropertySpec::functional("partOf", &[Link, Collection, Iri]);
pub const NEXT: PropertySpec = PropertySpec::functional("next", &[Collection, Link, Iri]);
pub const PREV: PropertySpec = PropertySpec::functional("prev", &[Collection, Link, Iri]);
pub const START_INDEX: PropertySpec =
    PropertySpec::functional("startIndex", &[NonNegativeInteger]);

// =============================================================================
// Extended object types
// =============================================================================

pub const ACCURACY: PropertySpec = PropertySpec::functional("accuracy", &[Float]);
pub const LATITUDE: PropertySpec = PropertySpec::functional("latitude", &[Float]);
pub const LONGITUDE: PropertySpec = PropertySpec::functional("longitude", &[Float]);
pub const RADIUS: PropertySpec = PropertySpec::functional("radius", &[Float]);
pub const UNITS: PropertySpec = PropertySpec::functional("units", &[Iri, Shape::String]);
pub const SUBJECT: PropertySpec = PropertySpec::functional("subject", &[Object, Link, Iri]);
pub const RELATIONSHIP: PropertySpec = PropertySpec::repeatable("relationship", &[Object, Iri]);
pub const DESCRIBES: PropertySpec = PropertySpec::functional("describes", &[Object, Iri]);
pub const FORMER_TYPE: PropertySpec = PropertySpec::repeatable("formerType", &[Object, Shape::String]);
pub const DELETED: PropertySpec = PropertySpec::functional("deleted", &[DateTime]);
pub const ONE_OF: PropertySpec = PropertySpec::repeatable("oneOf", OBJECT_LINK_IRI);
pub const ANY_OF: PropertySpec = PropertySpec::repeatable("anyOf", OBJECT_LINK_IRI);
pub const CLOSED: PropertySpec = PropertySpec::repeatable("closed", &[Object, Link, DateTime, Iri]);

// =============================================================================
// Link
// =============================================================================

pub const HREF: PropertySpec = PropertySpec::functional("href", &[Iri]);
pub const HREFLANG: PropertySpec = PropertySpec::functional("hreflang", &[Shape::String]);
pub const REL: PropertySpec = PropertySpec::repeatable("rel", &[Shape::String]);
pub const HEIGHT: PropertySpec = PropertySpec::functional("height", &[NonNegativeInteger]);
pub const WIDTH: PropertySpec = PropertySpec::functional("width", &[NonNegativeInteger]);

// =============================================================================
// Groups
// =============================================================================

pub const ACTIVITY_PROPERTIES: &[PropertySpec] =
    &[ACTOR, OBJECT, TARGET, RESULT, ORIGIN, INSTRUMENT];

pub const INTRANSITIVE_PROPERTIES: &[PropertySpec] = &[ACTOR, TARGET, RESULT, ORIGIN, INSTRUMENT];

pub const OBJECT_PROPERTIES: &[PropertySpec] = &[
    ALTITUDE,
    ATTACHMENT,
    ATTRIBUTED_TO,
    AUDIENCE,
    CONTENT,
    CONTENT_MAP,
    CONTEXT,
    NAME,
    NAME_MAP,
    END_TIME,
    GENERATOR,
    ICON,
    IMAGE,
    IN_REPLY_TO,
    LOCATION,
    PREVIEW,
    PUBLISHED,
    REPLIES,
    START_TIME,
    SUMMARY,
    SUMMARY_MAP,
    TAG,
    UPDATED,
    URL,
    TO,
    BTO,
    CC,
    BCC,
    MEDIA_TYPE,
    DURATION,
    SOURCE,
    LIKES,
    SHARES,
];

pub const ACTOR_PROPERTIES: &[PropertySpec] = &[
    INBOX,
    OUTBOX,
    FOLLOWING,
    FOLLOWERS,
    LIKED,
    STREAMS,
    PREFERRED_USERNAME,
    PREFERRED_USERNAME_MAP,
    ENDPOINTS,
];

pub const ENDPOINTS_PROPERTIES: &[PropertySpec] = &[
    PROXY_URL,
    OAUTH_AUTHORIZATION_ENDPOINT,
    OAUTH_TOKEN_ENDPOINT,
    PROVIDE_CLIENT_KEY,
    SIGN_CLIENT_KEY,
    SHARED_INBOX,
];

pub const COLLECTION_PROPERTIES: &[PropertySpec] = &[TOTAL_ITEMS, CURRENT, FIRST, LAST, ITEMS];

pub const ORDERED_COLLECTION_PROPERTIES: &[PropertySpec] =
    &[TOTAL_ITEMS, CURRENT, FIRST, LAST, ORDERED_ITEMS];

pub const COLLECTION_PAGE_PROPERTIES: &[PropertySpec] = &[PART_OF, NEXT, PREV];

pub const ORDERED_COLLECTION_PAGE_PROPERTIES: &[PropertySpec] = &[START_INDEX];

pub const PLACE_PROPERTIES: &[PropertySpec] = &[ACCURACY, LATITUDE, LONGITUDE, RADIUS, UNITS];

pub const PROFILE_PROPERTIES: &[PropertySpec] = &[DESCRIBES];

pub const RELATIONSHIP_PROPERTIES: &[PropertySpec] = &[SUBJECT, OBJECT, RELATIONSHIP];

pub const TOMBSTONE_PROPERTIES: &[PropertySpec] = &[FORMER_TYPE, DELETED];

pub const QUESTION_PROPERTIES: &[PropertySpec] = &[ONE_OF, ANY_OF, CLOSED];

pub const LINK_PROPERTIES: &[PropertySpec] = &[
    HREF, HREFLANG, MEDIA_TYPE, NAME, NAME_MAP, PREVIEW, REL, HEIGHT, WIDTH,
];

// =============================================================================
// Types
// =============================================================================

const OBJECT_LAYOUT: &[&[PropertySpec]] = &[OBJECT_PROPERTIES];
const ACTIVITY_LAYOUT: &[&[PropertySpec]] = &[ACTIVITY_PROPERTIES, OBJECT_PROPERTIES];
const INTRANSITIVE_LAYOUT: &[&[PropertySpec]] = &[INTRANSITIVE_PROPERTIES, OBJECT_PROPERTIES];
const ACTOR_LAYOUT: &[&[PropertySpec]] =
    &[OBJECT_PROPERTIES, ACTOR_PROPERTIES, ENDPOINTS_PROPERTIES];
const LINK_LAYOUT: &[&[PropertySpec]] = &[LINK_PROPERTIES];
const PLACE_LAYOUT: &[&[PropertySpec]] = &[OBJECT_PROPERTIES, PLACE_PROPERTIES];
const PROFILE_LAYOUT: &[&[PropertySpec]] = &[OBJECT_PROPERTIES, PROFILE_PROPERTIES];
const RELATIONSHIP_LAYOUT: &[&[PropertySpec]] = &[OBJECT_PROPERTIES, RELATIONSHIP_PROPERTIES];
const TOMBSTONE_LAYOUT: &[&[PropertySpec]] = &[OBJECT_PROPERTIES, TOMBSTONE_PROPERTIES];
const QUESTION_LAYOUT: &[&[PropertySpec]] =
    &[INTRANSITIVE_PROPERTIES, QUESTION_PROPERTIES, OBJECT_PROPERTIES];
const COLLECTION_LAYOUT: &[&[PropertySpec]] = &[OBJECT_PROPERTIES, COLLECTION_PROPERTIES];
const ORDERED_COLLECTION_LAYOUT: &[&[PropertySpec]] =
    &[OBJECT_PROPERTIES, ORDERED_COLLECTION_PROPERTIES];
const COLLECTION_PAGE_LAYOUT: &[&[PropertySpec]] = &[
    OBJECT_PROPERTIES,
    COLLECTION_PROPERTIES,
    COLLECTION_PAGE_PROPERTIES,
];
const ORDERED_COLLECTION_PAGE_LAYOUT: &[&[PropertySpec]] = &[
    OBJECT_PROPERTIES,
    ORDERED_COLLECTION_PROPERTIES,
    COLLECTION_PAGE_PROPERTIES,
    ORDERED_COLLECTION_PAGE_PROPERTIES,
];

/// Activity, Object, Actor and Endpoints properties, in that order.
pub const TENTATIVE_REJECT_LAYOUT: &[&[PropertySpec]] = &[
    ACTIVITY_PROPERTIES,
    OBJECT_PROPERTIES,
    ACTOR_PROPERTIES,
    ENDPOINTS_PROPERTIES,
];

pub const TENTATIVE_REJECT: VocabType =
    VocabType::new("TentativeReject", TypeKind::Object, false, TENTATIVE_REJECT_LAYOUT);

const OBJECT_TYPES: &[&str] = &[
    "Object", "Article", "Audio", "Document", "Event", "Image", "Note", "Page", "Video",
];

const ACTOR_TYPES: &[&str] = &["Application", "Group", "Organization", "Person", "Service"];

const ACTIVITY_TYPES: &[&str] = &[
    "Activity",
    "Accept",
    "Add",
    "Announce",
    "Block",
    "Create",
    "Delete",
    "Dislike",
    "Flag",
    "Follow",
    "Ignore",
    "Invite",
    "Join",
    "Leave",
    "Like",
    "Listen",
    "Move",
    "Offer",
    "Read",
    "Reject",
    "Remove",
    "TentativeAccept",
    "Undo",
    "Update",
    "View",
];

const INTRANSITIVE_TYPES: &[&str] = &["IntransitiveActivity", "Arrive", "Travel"];

const LINK_TYPES: &[&str] = &["Link", "Mention"];

/// Every catalog type.
pub fn types() -> Vec<VocabType> {
    let object = |name| VocabType::new(name, TypeKind::Object, false, OBJECT_LAYOUT);
    let actor = |name| VocabType::new(name, TypeKind::Object, false, ACTOR_LAYOUT);
    let activity = |name| VocabType::new(name, TypeKind::Object, false, ACTIVITY_LAYOUT);
    let intransitive = |name| VocabType::new(name, TypeKind::Object, false, INTRANSITIVE_LAYOUT);
    let link = |name| VocabType::new(name, TypeKind::Link, false, LINK_LAYOUT);

    let mut types: Vec<VocabType> = OBJECT_TYPES.iter().copied().map(object).collect();
    types.extend(ACTOR_TYPES.iter().copied().map(actor));
    types.extend(ACTIVITY_TYPES.iter().copied().map(activity));
    types.extend(INTRANSITIVE_TYPES.iter().copied().map(intransitive));
    types.extend(LINK_TYPES.iter().copied().map(link));
    types.extend([
        TENTATIVE_REJECT,
        VocabType::new("Place", TypeKind::Object, false, PLACE_LAYOUT),
        VocabType::new("Profile", TypeKind::Object, false, PROFILE_LAYOUT),
        VocabType::new("Relationship", TypeKind::Object, false, RELATIONSHIP_LAYOUT),
        VocabType::new("Tombstone", TypeKind::Object, false, TOMBSTONE_LAYOUT),
        VocabType::new("Question", TypeKind::Object, false, QUESTION_LAYOUT),
        VocabType::new("Collection", TypeKind::Object, true, COLLECTION_LAYOUT),
        VocabType::new("OrderedCollection", TypeKind::Object, true, ORDERED_COLLECTION_LAYOUT),
        VocabType::new("CollectionPage", TypeKind::Object, true, COLLECTION_PAGE_LAYOUT),
        VocabType::new(
            "OrderedCollectionPage",
            TypeKind::Object,
            true,
            ORDERED_COLLECTION_PAGE_LAYOUT,
        ),
    ]);
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layouts_have_no_duplicate_keys() {
        for vocab in types() {
            let mut seen = HashSet::new();
            for spec in vocab.properties() {
                assert!(seen.insert(spec.name), "{} repeats {}", vocab.name(), spec.name);
            }
        }
    }

    #[test]
    fn test_type_names_are_unique() {
        let mut seen = HashSet::new();
        for vocab in types() {
            assert!(seen.insert(vocab.name().to_string()), "{}", vocab.name());
        }
    }

    #[test]
    fn test_tentative_reject_layout_order() {
        let names: Vec<_> = TENTATIVE_REJECT.properties().map(|spec| spec.name).collect();
        assert_eq!(&names[..6], ["actor", "object", "target", "result", "origin", "instrument"]);
        assert_eq!(names[6], "altitude");
        assert_eq!(names.last(), Some(&"sharedInbox"));
        assert!(!names.contains(&"totalItems"));
    }

    #[test]
    fn test_language_maps_follow_their_property() {
        for (plain, map) in [("content", "contentMap"), ("name", "nameMap"), ("summary", "summaryMap")] {
            assert!(TENTATIVE_REJECT.property(plain).is_some());
            assert!(TENTATIVE_REJECT.property(map).is_some());
        }
    }
}
