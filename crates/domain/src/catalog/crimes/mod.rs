//! Crime types and their narrative templates.
//!
//! Each crime type owns a [`CrimeTemplate`]: how to describe the incident,
//! which narrative details and motives are possible, how to render the
//! detailed evidence file, and which hidden evidence can surface during
//! interrogation (with trigger keywords and capability gates).

mod arson;
mod espionage;
mod murder;
mod poisoning;
mod sabotage;
mod smuggling;
mod theft;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime, UnlockGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrimeType {
    Murder,
    Sabotage,
    Theft,
    Smuggling,
    Espionage,
    Poisoning,
    Arson,
}

impl CrimeType {
    pub const ALL: [CrimeType; 7] = [
        CrimeType::Murder,
        CrimeType::Sabotage,
        CrimeType::Theft,
        CrimeType::Smuggling,
        CrimeType::Espionage,
        CrimeType::Poisoning,
        CrimeType::Arson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Murder => "murder",
            Self::Sabotage => "sabotage",
            Self::Theft => "theft",
            Self::Smuggling => "smuggling",
            Self::Espionage => "espionage",
            Self::Poisoning => "poisoning",
            Self::Arson => "arson",
        }
    }

    /// Headline label for briefings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Murder => "MURDER",
            Self::Sabotage => "SABOTAGE",
            Self::Theft => "THEFT",
            Self::Smuggling => "SMUGGLING",
            Self::Espionage => "ESPIONAGE",
            Self::Poisoning => "POISONING",
            Self::Arson => "ARSON",
        }
    }

    /// Noun phrase used when telling a suspect what they are questioned about.
    pub fn summary_phrase(&self) -> &'static str {
        match self {
            Self::Murder => "a murder",
            Self::Sabotage => "an act of sabotage",
            Self::Theft => "a theft",
            Self::Smuggling => "smuggling contraband",
            Self::Espionage => "espionage and data leaking",
            Self::Poisoning => "a poisoning",
            Self::Arson => "arson",
        }
    }

    /// What the impostor actually did, in the impostor's own briefing.
    pub fn impostor_action(&self) -> &'static str {
        match self {
            Self::Murder => "killed the crew member",
            Self::Sabotage => "sabotaged the critical systems",
            Self::Theft => "stole the valuable item",
            Self::Smuggling => "smuggled the contraband",
            Self::Espionage => "leaked the classified information",
            Self::Poisoning => "poisoned the crew member",
            Self::Arson => "started the fire",
        }
    }

    /// Crimes whose narrative detail names the missing goods.
    pub fn has_stolen_item(&self) -> bool {
        matches!(self, Self::Theft | Self::Smuggling)
    }

    /// Crimes with a named victim.
    pub fn has_victim(&self) -> bool {
        matches!(self, Self::Murder | Self::Poisoning)
    }

    pub fn template(&self) -> &'static CrimeTemplate {
        match self {
            Self::Murder => &murder::TEMPLATE,
            Self::Sabotage => &sabotage::TEMPLATE,
            Self::Theft => &theft::TEMPLATE,
            Self::Smuggling => &smuggling::TEMPLATE,
            Self::Espionage => &espionage::TEMPLATE,
            Self::Poisoning => &poisoning::TEMPLATE,
            Self::Arson => &arson::TEMPLATE,
        }
    }
}

impl fmt::Display for CrimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrimeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| DomainError::parse(format!("Unknown crime type: {s}")))
    }
}

/// Inputs to a crime's evidence file renderer.
#[derive(Debug, Clone, Copy)]
pub struct EvidenceContext<'a> {
    pub location: &'a str,
    pub time: StationTime,
    pub detail: &'a str,
    pub victim: Option<&'a str>,
}

/// A hidden evidence candidate as written in the catalog.
#[derive(Debug)]
pub struct HiddenEvidenceDef {
    pub description: &'static str,
    /// Trigger terms; matched case-insensitively.
    pub keywords: &'static [&'static str],
    /// `None` means any suspect may disclose it.
    pub unlocked_by: Option<Capability>,
}

impl HiddenEvidenceDef {
    pub fn gate(&self) -> UnlockGate {
        self.unlocked_by.map_or(UnlockGate::Any, UnlockGate::Capability)
    }
}

/// Static narrative template for one crime type.
pub struct CrimeTemplate {
    pub describe: fn(location: &str, time: StationTime, detail: &str) -> String,
    pub details: &'static [&'static str],
    /// Renders the detailed evidence file; flavor variants are drawn from `pick`.
    pub evidence: fn(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String>,
    pub evidence_types: &'static [&'static str],
    pub hidden_evidence: &'static [HiddenEvidenceDef],
    pub motives: &'static [&'static str],
}

/// Every evidence section offers four flavor variants.
fn variant(pick: Pick<'_>) -> usize {
    crate::random::pick_index(4, pick)
}

pub const VICTIMS: &[&str] = &[
    "Lieutenant Sarah Martinez",
    "Chief Engineer David Kim",
    "Dr. Rebecca Foster",
    "Security Officer Marcus Chen",
    "Pilot Jackson Reed",
    "Technician Anna Volkov",
];

/// Plausible station-clock times for an incident.
pub const CRIME_TIMES: [StationTime; 13] = [
    StationTime::fixed(2, 15),
    StationTime::fixed(3, 30),
    StationTime::fixed(6, 45),
    StationTime::fixed(8, 20),
    StationTime::fixed(10, 15),
    StationTime::fixed(11, 45),
    StationTime::fixed(13, 30),
    StationTime::fixed(14, 45),
    StationTime::fixed(16, 20),
    StationTime::fixed(18, 0),
    StationTime::fixed(20, 30),
    StationTime::fixed(22, 15),
    StationTime::fixed(23, 45),
];
