//! What each suspect could plausibly know about the others.
//!
//! Knowledge follows from true locations and station adjacency: a suspect
//! next door may have seen someone, the security office watched the cameras
//! until they went dark, and anyone adjacent to the scene may have heard it.

use crate::catalog::{adjacent_locations, is_adjacent};
use crate::entities::{CrimeScenario, Suspect};

const SECURITY_OFFICE: &str = "Security Office";

/// One witness's account of one other suspect, if any.
///
/// The first matching rule wins: direct sighting, camera feed, sounds from
/// the scene.
pub fn witness_statement(
    witness: &Suspect,
    subject: &Suspect,
    scenario: &CrimeScenario,
) -> Option<String> {
    let time = scenario.time();
    let scene = scenario.scene();
    let here = witness.true_location();
    let there = subject.true_location();

    if is_adjacent(here, there) {
        return Some(format!(
            "You saw {} in the {there} around {}",
            subject.name(),
            time.minus_minutes(5)
        ));
    }

    if here == SECURITY_OFFICE && there != scene {
        return Some(format!(
            "You saw {} on cameras in the {there} until the cameras went offline at {}",
            subject.name(),
            scenario.cameras_offline_at()
        ));
    }

    if adjacent_locations(here).contains(&scene) && there == scene {
        return Some(format!(
            "You heard suspicious sounds coming from the {scene} at {}",
            time.minus_minutes(1)
        ));
    }

    None
}

/// Every statement `witness` can make about the rest of the crew.
pub fn witness_statements(
    witness: &Suspect,
    suspects: &[Suspect],
    scenario: &CrimeScenario,
) -> Vec<String> {
    suspects
        .iter()
        .filter(|other| other.name() != witness.name())
        .filter_map(|other| witness_statement(witness, other, scenario))
        .collect()
}

/// Bullet list of the witness's knowledge, for a dialogue prompt.
pub fn knowledge_summary(witness: &Suspect, suspects: &[Suspect], scenario: &CrimeScenario) -> String {
    let statements = witness_statements(witness, suspects, scenario);
    if statements.is_empty() {
        return format!(
            "- You did not see any other crew members around {}",
            scenario.time()
        );
    }
    statements
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Problems spotted in a suspect's answer. Advisory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub issues: Vec<String>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check an answer against the suspect's role in the case.
///
/// Flags an impostor who places themselves at the crime scene, and an
/// innocent whose claimed alibi differs from where they really were.
pub fn check_answer(suspect: &Suspect, answer: &str, scenario: &CrimeScenario) -> ConsistencyReport {
    let mut issues = Vec::new();

    if suspect.is_impostor() {
        let lowered = answer.to_lowercase();
        let scene = scenario.scene();
        if lowered.contains(&scene.to_lowercase()) && lowered.contains("was in") {
            issues.push(format!(
                "Impostor mentioned being in {scene} - should maintain false alibi"
            ));
        }
    } else if !suspect.alibi().eq_ignore_ascii_case(suspect.true_location()) {
        issues.push(format!(
            "Innocent suspect should claim their actual location ({}), not a false alibi",
            suspect.true_location()
        ));
    }

    ConsistencyReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::assemble_case;
    use crate::catalog::{default_roster, station_locations, SuspectProfile};
    use crate::entities::{generate_scenario, HiddenEvidenceSelection};
    use crate::value_objects::CapabilitySet;

    fn scenario_in(scene: &str) -> CrimeScenario {
        let idx = station_locations()
            .iter()
            .position(|l| l.name == scene)
            .unwrap();
        let mut draws = vec![0, idx].into_iter();
        let mut pick = move |_len: usize| draws.next().unwrap_or(0);
        generate_scenario(&mut pick, HiddenEvidenceSelection::Leading)
    }

    fn crew(members: &[(&str, &str)]) -> Vec<SuspectProfile> {
        members
            .iter()
            .map(|(name, alibi)| {
                SuspectProfile::new(*name, "Crew", "", "calm", *alibi, CapabilitySet::none())
            })
            .collect()
    }

    #[test]
    fn adjacent_witness_sees_subject() {
        let scenario = scenario_in("Armory");
        // First eligible is Ada (index 0) with an always-zero draw.
        let roster = crew(&[("Ada", "Cafeteria"), ("Ben", "Research Lab"), ("Cy", "Engineering")]);
        let case = assemble_case(&scenario, &roster, &mut |_: usize| 0).unwrap();
        let ben = &case.suspects[1];
        let cy = &case.suspects[2];

        let seen = witness_statement(ben, cy, &scenario).unwrap();
        let expected = format!(
            "You saw Cy in the Engineering around {}",
            scenario.time().minus_minutes(5)
        );
        assert_eq!(seen, expected);
    }

    #[test]
    fn security_office_watches_cameras_except_at_scene() {
        let scenario = scenario_in("Cargo Hold");
        let roster = crew(&[("Ada", "Quarters"), ("Mo", "Security Office"), ("Cy", "Cafeteria")]);
        let case = assemble_case(&scenario, &roster, &mut |_: usize| 0).unwrap();
        let ada = &case.suspects[0];
        let mo = &case.suspects[1];
        let cy = &case.suspects[2];
        assert!(ada.is_impostor());

        let on_camera = witness_statement(mo, cy, &scenario).unwrap();
        assert!(on_camera.contains("on cameras in the Cafeteria"));
        assert!(on_camera.ends_with(&scenario.cameras_offline_at().to_string()));
        assert!(witness_statement(mo, ada, &scenario).is_none());
    }

    #[test]
    fn sighting_takes_precedence_over_sounds() {
        let scenario = scenario_in("Med Bay");
        let roster = crew(&[("Ada", "Cockpit"), ("Lee", "Life Support")]);
        let case = assemble_case(&scenario, &roster, &mut |_: usize| 0).unwrap();
        let ada = &case.suspects[0];
        let lee = &case.suspects[1];
        assert_eq!(ada.true_location(), "Med Bay");

        // Life Support lists Med Bay as adjacent, so the sighting rule fires first.
        let statement = witness_statement(lee, ada, &scenario).unwrap();
        assert!(statement.starts_with("You saw Ada in the Med Bay"));
    }

    #[test]
    fn summary_falls_back_when_nothing_seen() {
        let scenario = scenario_in("Cafeteria");
        let case = assemble_case(&scenario, &default_roster()[..3], &mut |_: usize| 0).unwrap();
        let summary = knowledge_summary(&case.suspects[1], &case.suspects, &scenario);
        assert_eq!(
            summary,
            format!("- You did not see any other crew members around {}", scenario.time())
        );
    }

    #[test]
    fn consistency_flags_impostor_at_scene() {
        let scenario = scenario_in("Armory");
        let case = assemble_case(&scenario, &default_roster()[..3], &mut |_: usize| 0).unwrap();
        let impostor = case.suspects.iter().find(|s| s.is_impostor()).unwrap();
        let innocent = case.suspects.iter().find(|s| !s.is_impostor()).unwrap();

        let slip = check_answer(impostor, "Fine, I was in the armory for a minute.", &scenario);
        assert!(!slip.is_consistent());

        let cover = check_answer(impostor, "I was in the Engine Room the whole time.", &scenario);
        assert!(cover.is_consistent());

        let honest = check_answer(innocent, "I was in the armory? No.", &scenario);
        assert!(honest.is_consistent());
    }
}
