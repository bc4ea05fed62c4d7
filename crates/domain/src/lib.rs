//! Impostor domain: case generation, interrogation bookkeeping, evidence
//! disclosure and the accusation verdict.
//!
//! Everything here is synchronous and free of I/O. Randomness arrives as an
//! injected [`random::Pick`] closure and time as explicit `DateTime<Utc>`
//! arguments, so every rule is reproducible under test.

pub mod aggregates;
pub mod assembly;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod ids;
pub mod knowledge;
pub mod random;
pub mod stats;
pub mod value_objects;

pub use aggregates::{
    CaseFile, EvidenceNotice, GamePhase, GameSession, TurnOutcome, NOTICE_WINDOW_MS,
};
pub use assembly::{assemble_case, generate_case, AssembledCase, MAX_GENERATION_ATTEMPTS};
pub use catalog::{
    adjacent_locations, default_roster, find_location, is_adjacent, station_locations,
    AccessLevel, CrimeType, Location, SuspectProfile,
};
pub use entities::{
    disclosure_haystack, generate_scenario, ConversationEntry, CrimeScenario, Evidence,
    EvidenceKind, HiddenEvidenceSelection, HiddenEvidenceSpec, Suspect, DISCOVERY_QUESTION,
    HIDDEN_EVIDENCE_COUNT,
};
pub use error::DomainError;
pub use ids::{EvidenceId, SessionId};
pub use knowledge::{check_answer, knowledge_summary, witness_statements, ConsistencyReport};
pub use random::Pick;
pub use stats::GameStats;
pub use value_objects::{
    Capability, CapabilitySet, Difficulty, DifficultyConfig, StationTime, UnlockGate,
};
