//! The station crew available as suspects.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Capability, CapabilitySet};

/// A crew member as declared before any case exists.
///
/// Every profile is truthful: the claimed alibi is also where the crew
/// member really was. Case assembly overrides the true location of the
/// one crew member chosen as impostor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectProfile {
    pub name: String,
    pub role: String,
    pub emoji: String,
    pub personality: String,
    pub alibi: String,
    /// Clearances that gate which hidden evidence this crew member can reveal.
    pub capabilities: CapabilitySet,
}

impl SuspectProfile {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        emoji: impl Into<String>,
        personality: impl Into<String>,
        alibi: impl Into<String>,
        capabilities: CapabilitySet,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            emoji: emoji.into(),
            personality: personality.into(),
            alibi: alibi.into(),
            capabilities,
        }
    }
}

/// The full five-person crew, in briefing order.
///
/// Smaller cases take a prefix of this list.
pub fn default_roster() -> Vec<SuspectProfile> {
    vec![
        SuspectProfile::new(
            "Alex Chen",
            "Engineer",
            "👨‍🔧",
            "confident and straightforward",
            "Engine Room",
            CapabilitySet::of(&[Capability::Engineering]),
        ),
        SuspectProfile::new(
            "Sam Rivera",
            "Pilot",
            "👨‍✈️",
            "nervous and defensive",
            "Cockpit",
            CapabilitySet::none(),
        ),
        SuspectProfile::new(
            "Jamie Park",
            "Scientist",
            "👩‍🔬",
            "analytical and precise",
            "Research Lab",
            CapabilitySet::of(&[Capability::Medical]),
        ),
        SuspectProfile::new(
            "Riley Moore",
            "Communications Officer",
            "👩‍💼",
            "friendly and talkative",
            "Communications Bay",
            CapabilitySet::of(&[Capability::Security]),
        ),
        SuspectProfile::new(
            "Morgan Blake",
            "Security Officer",
            "👮",
            "suspicious and interrogative",
            "Security Office",
            CapabilitySet::of(&[Capability::Security]),
        ),
    ]
}
