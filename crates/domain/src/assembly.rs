//! Case assembly: turning a scenario and a crew roster into a case file.
//!
//! Picks the impostor, moves them to the crime scene, and lays out the
//! evidence set. The impostor is only ever drawn from crew members whose
//! claimed alibi differs from the crime scene, so the lie can't be exposed by
//! the alibi sheet alone.

use crate::catalog::SuspectProfile;
use crate::entities::{
    generate_scenario, CrimeScenario, Evidence, EvidenceKind, HiddenEvidenceSelection, Suspect,
};
use crate::error::DomainError;
use crate::ids::EvidenceId;
use crate::random::{pick_index, Pick};

/// Scenario draws allowed before giving up on finding an eligible impostor.
pub const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Suspects and evidence for one case, ready to seed a session.
#[derive(Debug, Clone)]
pub struct AssembledCase {
    pub suspects: Vec<Suspect>,
    pub impostor: String,
    /// Ordered: crime, access, cameras, alibis, detailed, hidden.
    pub evidence: Vec<Evidence>,
}

/// Assemble a case for `scenario` from an ordered roster.
///
/// # Errors
///
/// - `Validation` if the roster is empty
/// - `Constraint` if every roster member claims the crime scene as alibi
pub fn assemble_case(
    scenario: &CrimeScenario,
    roster: &[SuspectProfile],
    pick: Pick<'_>,
) -> Result<AssembledCase, DomainError> {
    if roster.is_empty() {
        return Err(DomainError::validation("Suspect roster cannot be empty"));
    }

    let scene = scenario.scene();
    let eligible: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, profile)| profile.alibi != scene)
        .map(|(idx, _)| idx)
        .collect();
    if eligible.is_empty() {
        return Err(DomainError::constraint(format!(
            "Every suspect claims {scene} as alibi; no impostor can be chosen"
        )));
    }
    let impostor_idx = eligible[pick_index(eligible.len(), pick)];

    let suspects: Vec<Suspect> = roster
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, profile)| {
            if idx == impostor_idx {
                Suspect::impostor(profile, scene)
            } else {
                Suspect::innocent(profile)
            }
        })
        .collect();
    let impostor = roster[impostor_idx].name.clone();

    let evidence = build_evidence(scenario, &suspects);

    Ok(AssembledCase {
        suspects,
        impostor,
        evidence,
    })
}

/// Generate a scenario and assemble it, redrawing the scenario when no roster
/// member can be the impostor.
pub fn generate_case(
    roster: &[SuspectProfile],
    selection: HiddenEvidenceSelection,
    pick: Pick<'_>,
) -> Result<(CrimeScenario, AssembledCase), DomainError> {
    let mut last_error = DomainError::constraint("No case generated");
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let scenario = generate_scenario(pick, selection);
        match assemble_case(&scenario, roster, pick) {
            Ok(case) => return Ok((scenario, case)),
            Err(err @ DomainError::Constraint(_)) => last_error = err,
            Err(err) => return Err(err),
        }
    }
    Err(last_error)
}

fn build_evidence(scenario: &CrimeScenario, suspects: &[Suspect]) -> Vec<Evidence> {
    let scene = scenario.scene();
    let time = scenario.time();
    let location = scenario.location();

    let alibis = suspects
        .iter()
        .map(|s| format!("{} claims: {}", s.name(), s.alibi()))
        .collect::<Vec<_>>()
        .join("; ");

    let mut evidence = vec![
        Evidence::visible(
            EvidenceId::new(EvidenceId::CRIME),
            EvidenceKind::CrimeSummary,
            scenario.description(),
        ),
        Evidence::visible(
            EvidenceId::new(EvidenceId::ACCESS),
            EvidenceKind::AccessLevel,
            format!(
                "{scene} access level: {}",
                location.access_level.clue_text()
            ),
        ),
        Evidence::visible(
            EvidenceId::new(EvidenceId::CAMERAS),
            EvidenceKind::CameraWindow,
            format!(
                "Security cameras in the {scene} were disabled for 2 minutes ({}-{time})",
                scenario.cameras_offline_at()
            ),
        ),
        Evidence::visible(
            EvidenceId::new(EvidenceId::ALIBIS),
            EvidenceKind::Alibis,
            format!("SUSPECT ALIBIS (What they claim): {alibis}"),
        ),
    ];

    let crime_keyword = scenario.crime_type().as_str();
    let scene_keyword = scene.to_lowercase();
    evidence.extend(
        scenario
            .detailed_evidence()
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                Evidence::visible(EvidenceId::detailed(idx), EvidenceKind::Detailed, text)
                    .with_keywords([scene_keyword.as_str(), crime_keyword])
            }),
    );

    evidence.extend(scenario.hidden_evidence().iter().map(|spec| {
        Evidence::hidden(
            spec.id.clone(),
            &spec.description,
            &spec.keywords,
            Some(spec.unlocked_by.clone()),
        )
    }));

    evidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_roster, CrimeType};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn seeded(seed: u64) -> impl FnMut(usize) -> usize {
        let mut rng = StdRng::seed_from_u64(seed);
        move |len| rng.gen_range(0..len)
    }

    fn scenario_at(scene_index: usize) -> CrimeScenario {
        // crime type, then location; everything else index zero
        let mut draws = vec![0, scene_index].into_iter();
        let mut pick = move |_len: usize| draws.next().unwrap_or(0);
        generate_scenario(&mut pick, HiddenEvidenceSelection::Leading)
    }

    #[test]
    fn five_hundred_cases_hold_invariants() {
        let roster = default_roster();
        let mut pick = seeded(99);
        for round in 0..500 {
            let size = if round % 2 == 0 { 3 } else { 5 };
            let (scenario, case) =
                generate_case(&roster[..size], HiddenEvidenceSelection::Sampled, &mut pick)
                    .unwrap();

            let impostors: Vec<_> = case.suspects.iter().filter(|s| s.is_impostor()).collect();
            assert_eq!(impostors.len(), 1);
            let impostor = impostors[0];
            assert_eq!(impostor.name(), case.impostor);
            assert_eq!(impostor.true_location(), scenario.scene());
            assert_ne!(impostor.alibi(), scenario.scene());

            for innocent in case.suspects.iter().filter(|s| !s.is_impostor()) {
                assert_eq!(innocent.true_location(), innocent.alibi());
            }
            assert_eq!(case.suspects.len(), size);
        }
    }

    #[test]
    fn evidence_layout() {
        let roster = default_roster();
        let scenario = scenario_at(3);
        let case = assemble_case(&scenario, &roster[..3], &mut |_: usize| 0).unwrap();

        let ids: Vec<&str> = case.evidence.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(
            ids,
            [
                "crime", "access", "cameras", "alibis", "evidence-0", "evidence-1", "evidence-2",
                "evidence-3", "hidden-0", "hidden-1", "hidden-2",
            ]
        );

        let discovered = case.evidence.iter().filter(|e| e.is_discovered()).count();
        assert_eq!(discovered, 8);
        assert!(case
            .evidence
            .iter()
            .filter(|e| e.kind() == EvidenceKind::Hidden)
            .all(|e| !e.is_discovered() && !e.keywords().is_empty()));

        let alibis = case.evidence[3].text();
        assert!(alibis.starts_with("SUSPECT ALIBIS (What they claim): "));
        assert!(alibis.contains("Alex Chen claims: Engine Room"));
        assert!(alibis.contains("Jamie Park claims: Research Lab"));
    }

    #[test]
    fn camera_window_ends_at_crime_time() {
        let scenario = scenario_at(0);
        let case = assemble_case(&scenario, &default_roster(), &mut |_: usize| 0).unwrap();
        let cameras = case.evidence[2].text();
        let window = format!("({}-{})", scenario.cameras_offline_at(), scenario.time());
        assert!(cameras.contains(&window), "{cameras}");
    }

    #[test]
    fn impostor_never_claims_the_crime_scene() {
        let roster = default_roster();
        let research_lab = crate::catalog::station_locations()
            .iter()
            .position(|l| l.name == "Research Lab")
            .unwrap();
        let scenario = scenario_at(research_lab);
        assert_eq!(scenario.crime_type(), CrimeType::Murder);

        // Every draw points at Jamie Park's slot; the guard must skip them.
        for draw in 0..5 {
            let case = assemble_case(&scenario, &roster, &mut |_: usize| draw).unwrap();
            assert_ne!(case.impostor, "Jamie Park");
        }
    }

    #[test]
    fn roster_of_only_colliding_alibis_is_a_constraint_error() {
        let research_lab = crate::catalog::station_locations()
            .iter()
            .position(|l| l.name == "Research Lab")
            .unwrap();
        let scenario = scenario_at(research_lab);
        let jamie: Vec<_> = default_roster()
            .into_iter()
            .filter(|p| p.name == "Jamie Park")
            .collect();

        let err = assemble_case(&scenario, &jamie, &mut |_: usize| 0).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn empty_roster_is_rejected() {
        let scenario = scenario_at(0);
        let err = assemble_case(&scenario, &[], &mut |_: usize| 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
