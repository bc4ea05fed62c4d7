//! Unlock gates for hidden evidence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::capability::{Capability, CapabilitySet};
use crate::error::DomainError;

/// Rule restricting which suspect's answer can disclose a hidden evidence item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UnlockGate {
    /// Any suspect qualifies.
    Any,
    /// The answering suspect must hold this capability.
    Capability(Capability),
    /// Only the named suspect qualifies (exact name match).
    Suspect(String),
}

impl UnlockGate {
    /// Whether a suspect with this name and capability set satisfies the gate.
    pub fn admits(&self, suspect_name: &str, capabilities: &CapabilitySet) -> bool {
        match self {
            Self::Any => true,
            Self::Capability(required) => capabilities.contains(*required),
            Self::Suspect(name) => name == suspect_name,
        }
    }
}

impl fmt::Display for UnlockGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Capability(Capability::Security) => f.write_str("Security"),
            Self::Capability(Capability::Engineering) => f.write_str("Engineer"),
            Self::Capability(Capability::Medical) => f.write_str("Medical"),
            Self::Suspect(name) => f.write_str(name),
        }
    }
}

/// Parses the catalog vocabulary: `Any`, `Security`, `Engineer`, `Medical`,
/// or anything else as a suspect name.
impl FromStr for UnlockGate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::parse("Unlock gate cannot be empty"));
        }
        Ok(match trimmed {
            "Any" => Self::Any,
            "Security" => Self::Capability(Capability::Security),
            "Engineer" => Self::Capability(Capability::Engineering),
            "Medical" => Self::Capability(Capability::Medical),
            name => Self::Suspect(name.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_vocabulary() {
        assert_eq!("Any".parse::<UnlockGate>().unwrap(), UnlockGate::Any);
        assert_eq!(
            "Engineer".parse::<UnlockGate>().unwrap(),
            UnlockGate::Capability(Capability::Engineering)
        );
        assert_eq!(
            "Morgan Blake".parse::<UnlockGate>().unwrap(),
            UnlockGate::Suspect("Morgan Blake".into())
        );
        assert!("  ".parse::<UnlockGate>().is_err());
    }

    #[test]
    fn capability_gate_requires_membership() {
        let gate = UnlockGate::Capability(Capability::Engineering);
        let engineer = CapabilitySet::of(&[Capability::Engineering]);
        let comms = CapabilitySet::of(&[Capability::Security]);
        assert!(gate.admits("Alex Chen", &engineer));
        assert!(!gate.admits("Riley Moore", &comms));
    }

    #[test]
    fn suspect_gate_matches_exact_name() {
        let gate = UnlockGate::Suspect("Jamie Park".into());
        assert!(gate.admits("Jamie Park", &CapabilitySet::none()));
        assert!(!gate.admits("jamie park", &CapabilitySet::none()));
    }

    #[test]
    fn any_gate_admits_everyone() {
        assert!(UnlockGate::Any.admits("Sam Rivera", &CapabilitySet::none()));
    }

    #[test]
    fn display_round_trips_vocabulary() {
        for raw in ["Any", "Security", "Engineer", "Medical", "Riley Moore"] {
            assert_eq!(raw.parse::<UnlockGate>().unwrap().to_string(), raw);
        }
    }
}
