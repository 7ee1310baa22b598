//! Type-safe identifier wrappers around [`String`].
//!
//! The polled endpoint keys entities and achievements by plain strings.
//! Wrapping them keeps an entity id from being used where an achievement
//! id is expected. Both serialize transparently as the bare string.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from anything convertible into a [`String`].
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Identifier of a tracked entity (a top-level key of a snapshot).
    EntityId
}

define_id! {
    /// Identifier of a single achievement within an entity record.
    AchievementId
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = EntityId::new("e1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"e1\"");

        let back: AchievementId = serde_json::from_str("\"a7\"").unwrap();
        assert_eq!(back.as_str(), "a7");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(AchievementId::from("a1"), 1);
        // Borrow<str> lets callers look up without allocating an id.
        assert_eq!(map.get("a1"), Some(&1));
        assert_eq!(map.get("a2"), None);
    }

    #[test]
    fn display_is_the_raw_id() {
        assert_eq!(EntityId::from("player-42").to_string(), "player-42");
        assert_eq!(String::from(AchievementId::new("x")), "x");
    }
}
