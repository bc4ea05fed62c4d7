//! Domain entities - scenario ground truth, suspects and evidence

mod evidence;
mod scenario;
mod suspect;

pub use evidence::{disclosure_haystack, Evidence, EvidenceKind};
pub use scenario::{
    generate_scenario, CrimeScenario, HiddenEvidenceSelection, HiddenEvidenceSpec,
    DISCOVERY_QUESTION, HIDDEN_EVIDENCE_COUNT,
};
pub use suspect::{ConversationEntry, Suspect};
