//! Value objects - Immutable objects defined by their attributes

mod capability;
mod difficulty;
mod station_time;
mod unlock_gate;

pub use capability::{Capability, CapabilitySet};
pub use difficulty::{Difficulty, DifficultyConfig};
pub use station_time::StationTime;
pub use unlock_gate::UnlockGate;
