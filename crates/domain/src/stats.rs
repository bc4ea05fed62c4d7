//! End-of-case statistics.

use serde::{Deserialize, Serialize};

use crate::value_objects::Difficulty;

/// Outcome of a case, produced exactly once by the accusation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub won: bool,
    pub difficulty: Difficulty,
    pub questions_used: u32,
    pub questions_available: u32,
    pub suspects_interrogated: usize,
    pub total_suspects: usize,
    pub evidence_discovered: usize,
    pub solve_time_seconds: i64,
    pub impostor_name: String,
    pub accused_name: String,
    pub correct_accusation: bool,
}
