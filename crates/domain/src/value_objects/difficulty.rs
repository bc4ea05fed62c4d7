//! Difficulty levels and their fixed parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Roster size and question allowance for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyConfig {
    pub suspects: usize,
    pub questions: u32,
}

impl Difficulty {
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig {
                suspects: 3,
                questions: 15,
            },
            Self::Medium => DifficultyConfig {
                suspects: 5,
                questions: 12,
            },
            Self::Hard => DifficultyConfig {
                suspects: 5,
                questions: 8,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(DomainError::parse(format!("Unknown difficulty: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_table() {
        assert_eq!(Difficulty::Easy.config(), DifficultyConfig { suspects: 3, questions: 15 });
        assert_eq!(Difficulty::Medium.config(), DifficultyConfig { suspects: 5, questions: 12 });
        assert_eq!(Difficulty::Hard.config(), DifficultyConfig { suspects: 5, questions: 8 });
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
