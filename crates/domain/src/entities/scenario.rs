//! Crime scenario generation.
//!
//! A [`CrimeScenario`] is the ground truth of one case: what happened, where,
//! and when. It is generated once and never modified afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{station_locations, CrimeType, EvidenceContext, Location, CRIME_TIMES, VICTIMS};
use crate::error::DomainError;
use crate::ids::EvidenceId;
use crate::random::{choose_text, pick_index, sample_indices, Pick};
use crate::value_objects::{StationTime, UnlockGate};

/// Hidden evidence entries carried by every scenario.
pub const HIDDEN_EVIDENCE_COUNT: usize = 3;

/// Prompt offered to the detective for every hidden evidence entry.
pub const DISCOVERY_QUESTION: &str = "Can you tell me more about what you saw or found?";

/// How hidden evidence is chosen from a crime template's candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HiddenEvidenceSelection {
    /// Always the first candidates, in catalog order.
    #[default]
    Leading,
    /// Distinct candidates drawn from the injected source.
    Sampled,
}

impl fmt::Display for HiddenEvidenceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Leading => "leading",
            Self::Sampled => "sampled",
        })
    }
}

impl FromStr for HiddenEvidenceSelection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leading" | "first" => Ok(Self::Leading),
            "sampled" | "random" => Ok(Self::Sampled),
            other => Err(DomainError::parse(format!(
                "Unknown hidden evidence selection: {other}"
            ))),
        }
    }
}

/// A hidden evidence entry as chosen for this scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenEvidenceSpec {
    pub id: EvidenceId,
    pub description: String,
    pub keywords: Vec<String>,
    pub unlocked_by: UnlockGate,
    pub discovery_question: String,
}

/// One generated crime.
///
/// # Invariants
///
/// - `description`, `location` and `time` are always populated
/// - Exactly [`HIDDEN_EVIDENCE_COUNT`] hidden evidence entries, ids `hidden-0..`
/// - `victim` is set only for murder and poisoning, `stolen_item` only for
///   theft and smuggling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeScenario {
    crime_type: CrimeType,
    location: Location,
    time: StationTime,
    victim: Option<String>,
    stolen_item: Option<String>,
    description: String,
    initial_clues: Vec<String>,
    detailed_evidence: Vec<String>,
    hidden_evidence: Vec<HiddenEvidenceSpec>,
    motive: String,
}

impl CrimeScenario {
    pub fn crime_type(&self) -> CrimeType {
        self.crime_type
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Name of the crime scene.
    pub fn scene(&self) -> &str {
        &self.location.name
    }

    pub fn time(&self) -> StationTime {
        self.time
    }

    pub fn victim(&self) -> Option<&str> {
        self.victim.as_deref()
    }

    pub fn stolen_item(&self) -> Option<&str> {
        self.stolen_item.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn initial_clues(&self) -> &[String] {
        &self.initial_clues
    }

    pub fn detailed_evidence(&self) -> &[String] {
        &self.detailed_evidence
    }

    pub fn hidden_evidence(&self) -> &[HiddenEvidenceSpec] {
        &self.hidden_evidence
    }

    pub fn motive(&self) -> &str {
        &self.motive
    }

    /// When the security cameras at the scene went dark.
    pub fn cameras_offline_at(&self) -> StationTime {
        self.time.minus_minutes(2)
    }
}

/// Generate a complete scenario from the static catalog.
///
/// Draw order is fixed (crime type, location, time, detail, victim, evidence
/// flavor, hidden evidence, motive) so a seeded source reproduces a scenario.
pub fn generate_scenario(pick: Pick<'_>, selection: HiddenEvidenceSelection) -> CrimeScenario {
    let crime_type = CrimeType::ALL[pick_index(CrimeType::ALL.len(), pick)];
    let locations = station_locations();
    let location = locations[pick_index(locations.len(), pick)].clone();
    let time = CRIME_TIMES[pick_index(CRIME_TIMES.len(), pick)];
    let template = crime_type.template();

    let detail = choose_text(template.details, pick);
    let description = (template.describe)(&location.name, time, detail);

    let victim = if crime_type.has_victim() {
        Some(choose_text(VICTIMS, pick).to_string())
    } else {
        None
    };
    let stolen_item = crime_type.has_stolen_item().then(|| detail.to_string());

    let context = EvidenceContext {
        location: &location.name,
        time,
        detail,
        victim: victim.as_deref(),
    };
    let detailed_evidence = (template.evidence)(&context, pick);

    let candidates = template.hidden_evidence;
    let chosen: Vec<usize> = match selection {
        HiddenEvidenceSelection::Leading => {
            (0..candidates.len().min(HIDDEN_EVIDENCE_COUNT)).collect()
        }
        HiddenEvidenceSelection::Sampled => {
            sample_indices(candidates.len(), HIDDEN_EVIDENCE_COUNT, pick)
        }
    };
    let hidden_evidence = chosen
        .into_iter()
        .enumerate()
        .map(|(slot, candidate)| {
            let def = &candidates[candidate];
            HiddenEvidenceSpec {
                id: EvidenceId::hidden(slot),
                description: def.description.to_string(),
                keywords: def.keywords.iter().map(|k| k.to_lowercase()).collect(),
                unlocked_by: def.gate(),
                discovery_question: DISCOVERY_QUESTION.to_string(),
            }
        })
        .collect();

    let motive = choose_text(template.motives, pick).to_string();

    let initial_clues = vec![
        format!("Time of Incident: {time}"),
        format!("Location: {}", location.name),
        format!("Access Level: {}", location.access_level.clue_text()),
    ];

    CrimeScenario {
        crime_type,
        location,
        time,
        victim,
        stolen_item,
        description,
        initial_clues,
        detailed_evidence,
        hidden_evidence,
        motive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn seeded(seed: u64) -> impl FnMut(usize) -> usize {
        let mut rng = StdRng::seed_from_u64(seed);
        move |len| rng.gen_range(0..len)
    }

    #[test]
    fn thousand_scenarios_are_complete() {
        let mut pick = seeded(7);
        for _ in 0..1000 {
            for selection in [HiddenEvidenceSelection::Leading, HiddenEvidenceSelection::Sampled] {
                let scenario = generate_scenario(&mut pick, selection);
                assert!(!scenario.description().is_empty());
                assert!(!scenario.scene().is_empty());
                assert!(scenario.description().contains(scenario.scene()));
                assert!(scenario.description().contains(&scenario.time().to_string()));
                assert_eq!(scenario.detailed_evidence().len(), 4);
                assert_eq!(scenario.hidden_evidence().len(), HIDDEN_EVIDENCE_COUNT);
                assert_eq!(scenario.initial_clues().len(), 3);
                assert!(!scenario.motive().is_empty());
                for (slot, hidden) in scenario.hidden_evidence().iter().enumerate() {
                    assert_eq!(hidden.id, EvidenceId::hidden(slot));
                    assert!(!hidden.keywords.is_empty());
                }
                assert_eq!(scenario.victim().is_some(), scenario.crime_type().has_victim());
                assert_eq!(
                    scenario.stolen_item().is_some(),
                    scenario.crime_type().has_stolen_item()
                );
            }
        }
    }

    #[test]
    fn same_seed_same_scenario() {
        let a = generate_scenario(&mut seeded(42), HiddenEvidenceSelection::Sampled);
        let b = generate_scenario(&mut seeded(42), HiddenEvidenceSelection::Sampled);
        assert_eq!(a, b);
    }

    #[test]
    fn leading_selection_takes_catalog_order() {
        // Always index zero: murder in the first catalog location.
        let scenario = generate_scenario(&mut |_: usize| 0, HiddenEvidenceSelection::Leading);
        assert_eq!(scenario.crime_type(), CrimeType::Murder);
        let expected: Vec<&str> = CrimeType::Murder.template().hidden_evidence[..HIDDEN_EVIDENCE_COUNT]
            .iter()
            .map(|d| d.description)
            .collect();
        let actual: Vec<&str> = scenario
            .hidden_evidence()
            .iter()
            .map(|h| h.description.as_str())
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(scenario.victim(), Some(VICTIMS[0]));
        assert!(scenario.detailed_evidence()[0].contains(VICTIMS[0]));
    }

    #[test]
    fn sampled_selection_is_distinct() {
        let mut pick = seeded(3);
        for _ in 0..200 {
            let scenario = generate_scenario(&mut pick, HiddenEvidenceSelection::Sampled);
            let mut texts: Vec<&str> = scenario
                .hidden_evidence()
                .iter()
                .map(|h| h.description.as_str())
                .collect();
            texts.sort_unstable();
            texts.dedup();
            assert_eq!(texts.len(), HIDDEN_EVIDENCE_COUNT);
        }
    }

    #[test]
    fn initial_clues_describe_scene() {
        let scenario = generate_scenario(&mut seeded(11), HiddenEvidenceSelection::Leading);
        assert_eq!(
            scenario.initial_clues()[0],
            format!("Time of Incident: {}", scenario.time())
        );
        assert!(scenario.initial_clues()[2].starts_with("Access Level: "));
    }

    #[test]
    fn selection_parses() {
        assert_eq!(
            "Sampled".parse::<HiddenEvidenceSelection>().unwrap(),
            HiddenEvidenceSelection::Sampled
        );
        assert!("shuffle".parse::<HiddenEvidenceSelection>().is_err());
    }
}
