//! The `TentativeReject` activity.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Map, Value};

use super::catalog;
use super::node::{NodeBase, VocabType, VocabularyNode};
use super::registry::{TypeRegistry, default_registry};
use super::slot::{Functional, LanguageSlot, PropertySlot, Repeatable};
use crate::codec;
use crate::error::{Error, Result};

/// Declares a node type as a struct with one named slot per property.
///
/// Each entry is `field, field_mut: SlotType = CATALOG_SPEC;`. Entries must be
/// listed in the type's catalog layout order, which is the encode order.
macro_rules! vocabulary_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($type_name:literal, $vocab:expr) {
            $( $field:ident, $field_mut:ident: $slot:ty = $spec:ident; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            base: NodeBase,
            $( $field: $slot, )*
        }

        impl $name {
            pub const TYPE_NAME: &'static str = $type_name;

            pub fn new() -> Self {
                Self {
                    base: NodeBase::default(),
                    $( $field: <$slot>::new(&catalog::$spec), )*
                }
            }

            pub fn vocab_type() -> VocabType {
                $vocab
            }

            $(
                pub fn $field(&self) -> &$slot {
                    &self.$field
                }

                pub fn $field_mut(&mut self) -> &mut $slot {
                    &mut self.$field
                }
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl VocabularyNode for $name {
            fn type_name(&self) -> &str {
                Self::TYPE_NAME
            }

            fn base(&self) -> &NodeBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut NodeBase {
                &mut self.base
            }

            fn property(&self, name: &str) -> Option<&dyn PropertySlot> {
                $(
                    if name == catalog::$spec.name {
                        return Some(&self.$field);
                    }
                )*
                None
            }

            fn property_mut(&mut self, name: &str) -> Option<&mut dyn PropertySlot> {
                $(
                    if name == catalog::$spec.name {
                        return Some(&mut self.$field);
                    }
                )*
                None
            }

            fn properties(&self) -> Vec<&dyn PropertySlot> {
                vec![$( &self.$field as &dyn PropertySlot, )*]
            }
        }
    };
}

vocabulary_node! {
    /// A `TentativeReject` activity: the actor tentatively rejects the object.
    ///
    /// Carries the Activity, Object, Actor and Endpoints properties. Anything
    /// else found on the wire is kept in the node's unknown map and re-emitted.
    pub struct TentativeReject("TentativeReject", catalog::TENTATIVE_REJECT) {
        actor, actor_mut: Repeatable = ACTOR;
        object, object_mut: Repeatable = OBJECT;
        target, target_mut: Repeatable = TARGET;
        result, result_mut: Repeatable = RESULT;
        origin, origin_mut: Repeatable = ORIGIN;
        instrument, instrument_mut: Repeatable = INSTRUMENT;
        altitude, altitude_mut: Functional = ALTITUDE;
        attachment, attachment_mut: Repeatable = ATTACHMENT;
        attributed_to, attributed_to_mut: Repeatable = ATTRIBUTED_TO;
        audience, audience_mut: Repeatable = AUDIENCE;
        content, content_mut: Repeatable = CONTENT;
        content_map, content_map_mut: LanguageSlot = CONTENT_MAP;
        context, context_mut: Repeatable = CONTEXT;
        name, name_mut: Repeatable = NAME;
        name_map, name_map_mut: LanguageSlot = NAME_MAP;
        end_time, end_time_mut: Functional = END_TIME;
        generator, generator_mut: Repeatable = GENERATOR;
        icon, icon_mut: Repeatable = ICON;
        image, image_mut: Repeatable = IMAGE;
        in_reply_to, in_reply_to_mut: Repeatable = IN_REPLY_TO;
        location, location_mut: Repeatable = LOCATION;
        preview, preview_mut: Repeatable = PREVIEW;
        published, published_mut: Functional = PUBLISHED;
        replies, replies_mut: Functional = REPLIES;
        start_time, start_time_mut: Functional = START_TIME;
        summary, summary_mut: Repeatable = SUMMARY;
        summary_map, summary_map_mut: LanguageSlot = SUMMARY_MAP;
        tag, tag_mut: Repeatable = TAG;
        updated, updated_mut: Functional = UPDATED;
        url, url_mut: Repeatable = URL;
        to, to_mut: Repeatable = TO;
        bto, bto_mut: Repeatable = BTO;
        cc, cc_mut: Repeatable = CC;
        bcc, bcc_mut: Repeatable = BCC;
        media_type, media_type_mut: Functional = MEDIA_TYPE;
        duration, duration_mut: Functional = DURATION;
        source, source_mut: Functional = SOURCE;
        likes, likes_mut: Functional = LIKES;
        shares, shares_mut: Functional = SHARES;
        inbox, inbox_mut: Functional = INBOX;
        outbox, outbox_mut: Functional = OUTBOX;
        following, following_mut: Functional = FOLLOWING;
        followers, followers_mut: Functional = FOLLOWERS;
        liked, liked_mut: Functional = LIKED;
        streams, streams_mut: Repeatable = STREAMS;
        preferred_username, preferred_username_mut: Functional = PREFERRED_USERNAME;
        preferred_username_map, preferred_username_map_mut: LanguageSlot = PREFERRED_USERNAME_MAP;
        endpoints, endpoints_mut: Functional = ENDPOINTS;
        proxy_url, proxy_url_mut: Functional = PROXY_URL;
        oauth_authorization_endpoint, oauth_authorization_endpoint_mut: Functional = OAUTH_AUTHORIZATION_ENDPOINT;
        oauth_token_endpoint, oauth_token_endpoint_mut: Functional = OAUTH_TOKEN_ENDPOINT;
        provide_client_key, provide_client_key_mut: Functional = PROVIDE_CLIENT_KEY;
        sign_client_key, sign_client_key_mut: Functional = SIGN_CLIENT_KEY;
        shared_inbox, shared_inbox_mut: Functional = SHARED_INBOX;
    }
}

impl TentativeReject {
    /// Decodes a wire object. The `type` field is kept as given and not checked.
    pub fn from_value(raw: &Value, registry: &dyn TypeRegistry) -> Result<Self> {
        let Value::Object(map) = raw else {
            return Err(Error::NotAnObject {
                type_name: Self::TYPE_NAME.to_string(),
                found: codec::json_kind(raw),
            });
        };
        let mut node = Self::new();
        node.decode_fields(map, registry)?;
        Ok(node)
    }

    pub fn to_map(&self) -> Result<Map<String, Value>> {
        self.encode()
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(Value::Object(self.encode()?))
    }
}

impl Serialize for TentativeReject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

/// Decodes through [`default_registry`].
impl<'de> Deserialize<'de> for TentativeReject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(&raw, default_registry()).map_err(de::Error::custom)
    }
}
