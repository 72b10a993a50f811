//! Opaque identifiers for tabs and tab groups.
//!
//! Both are string newtypes backed by UUIDv4 when freshly allocated. They
//! serialize transparently as plain strings, which is also how layout tree
//! leaves appear on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(new_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifies one pane (tab) and, through the registry, its surface.
    TabId
);

string_id!(
    /// Identifies one tileable workspace.
    GroupId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(TabId::new(), TabId::new());
        assert_ne!(GroupId::new(), GroupId::new());
    }

    #[test]
    fn tab_id_display_is_raw_string() {
        let id = TabId::from("A");
        assert_eq!(id.to_string(), "A");
        assert_eq!(id.as_str(), "A");
    }

    #[test]
    fn tab_id_serializes_as_plain_string() {
        let id = TabId::from("pane-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"pane-1\"");
        let back: TabId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn group_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let g = GroupId::new();
        set.insert(g.clone());
        set.insert(g);
        assert_eq!(set.len(), 1);
    }
}
