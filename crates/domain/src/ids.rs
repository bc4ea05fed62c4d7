use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(SessionId);

/// Identifier of an evidence entry, unique within one case.
///
/// Ids are stable strings so that clients can address evidence across
/// requests: `crime`, `access`, `cameras`, `alibis`, `evidence-N`, `hidden-N`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceId(String);

impl EvidenceId {
    pub const CRIME: &'static str = "crime";
    pub const ACCESS: &'static str = "access";
    pub const CAMERAS: &'static str = "cameras";
    pub const ALIBIS: &'static str = "alibis";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the Nth scenario-generated detailed evidence string.
    pub fn detailed(index: usize) -> Self {
        Self(format!("evidence-{index}"))
    }

    /// Id of the Nth hidden evidence entry.
    pub fn hidden(index: usize) -> Self {
        Self(format!("hidden-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EvidenceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn evidence_ids_follow_naming_scheme() {
        assert_eq!(EvidenceId::detailed(2).as_str(), "evidence-2");
        assert_eq!(EvidenceId::hidden(0).as_str(), "hidden-0");
        assert_eq!(EvidenceId::from("alibis").to_string(), "alibis");
    }

    #[test]
    fn evidence_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&EvidenceId::hidden(1)).unwrap();
        assert_eq!(json, "\"hidden-1\"");
    }
}
