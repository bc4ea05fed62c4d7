//! Crew capabilities used to gate evidence disclosure.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A professional capability a crew member holds.
///
/// Assigned when the roster is defined; disclosure gates check membership
/// instead of searching role titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Security,
    Engineering,
    Medical,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Engineering => "engineering",
            Self::Medical => "medical",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "security" => Ok(Self::Security),
            "engineering" | "engineer" => Ok(Self::Engineering),
            "medical" => Ok(Self::Medical),
            other => Err(DomainError::parse(format!("Unknown capability: {other}"))),
        }
    }
}

/// The set of capabilities held by one suspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(capabilities: &[Capability]) -> Self {
        Self(capabilities.iter().copied().collect())
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gate_vocabulary() {
        assert_eq!("Engineer".parse::<Capability>().unwrap(), Capability::Engineering);
        assert_eq!("Security".parse::<Capability>().unwrap(), Capability::Security);
        assert_eq!("medical".parse::<Capability>().unwrap(), Capability::Medical);
        assert!("Pilot".parse::<Capability>().is_err());
    }

    #[test]
    fn set_membership() {
        let set = CapabilitySet::of(&[Capability::Security, Capability::Security]);
        assert!(set.contains(Capability::Security));
        assert!(!set.contains(Capability::Medical));
        assert_eq!(set.iter().count(), 1);
        assert!(CapabilitySet::none().is_empty());
    }

    #[test]
    fn serializes_as_list() {
        let set = CapabilitySet::of(&[Capability::Medical, Capability::Engineering]);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            "[\"engineering\",\"medical\"]"
        );
    }
}
