use super::{variant, CrimeTemplate, EvidenceContext, HiddenEvidenceDef};
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime};

pub(super) static TEMPLATE: CrimeTemplate = CrimeTemplate {
    describe,
    details: &[
        "Cause of death appears to be blunt force trauma to the skull.",
        "The victim was strangled with a power cable - marks visible on neck.",
        "Multiple stab wounds found on the torso.",
        "The body shows extensive evidence of a violent struggle.",
        "Fatal blow to the head with a heavy maintenance tool.",
    ],
    evidence,
    evidence_types: &[
        "bloody fingerprints on the door panel",
        "strands of hair found at the scene",
        "a torn piece of uniform fabric",
        "muddy footprints leading away from the scene",
        "a missing access keycard found nearby",
    ],
    hidden_evidence: &[
        HiddenEvidenceDef {
            description: "Bloody fingerprints found on door panel - forensics analyzing for DNA match",
            keywords: &[
                "blood", "bloody", "fingerprint", "fingerprints", "print", "prints", "touch",
                "touched", "door", "panel", "DNA", "hands", "hand",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Torn fabric from crew uniform caught in victim's hand - dark blue with red threading",
            keywords: &[
                "fabric", "cloth", "torn", "ripped", "clothes", "clothing", "uniform", "struggle",
                "fought", "fight", "blue", "thread",
            ],
            unlocked_by: None,
        },
        HiddenEvidenceDef {
            description: "Strands of hair and skin cells recovered from scene - DNA analysis in progress",
            keywords: &[
                "hair", "DNA", "strand", "strands", "sample", "samples", "genetic", "forensic",
                "evidence", "biological",
            ],
            unlocked_by: Some(Capability::Medical),
        },
        HiddenEvidenceDef {
            description: "Muddy boot prints (size 10) leading away from scene toward maintenance corridor",
            keywords: &[
                "boot", "boots", "footprint", "footprints", "prints", "muddy", "mud", "tracks",
                "trail", "walked", "left", "corridor",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Blunt object with blood residue found hidden nearby - probable murder weapon",
            keywords: &[
                "weapon", "object", "heavy", "struck", "hit", "blunt", "tool", "metal", "blood",
                "used", "killed", "murder",
            ],
            unlocked_by: None,
        },
    ],
    motives: &[
        "revenge for a past incident",
        "to cover up their real criminal activity",
        "they were discovered during another crime",
        "personal vendetta and grudge",
        "the victim knew their secret identity",
    ],
};

fn describe(location: &str, time: StationTime, detail: &str) -> String {
    format!(
        "A crew member has been found dead in the {location} at {time}. {detail} \
         The entire station is on lockdown until the killer is identified."
    )
}

fn evidence(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String> {
    let EvidenceContext {
        location, time, detail, ..
    } = *ctx;
    let victim = ctx.victim.unwrap_or("Lieutenant Sarah Martinez");
    let lowered = detail.to_lowercase();
    let cause = if lowered.contains("stab") {
        "multiple penetrating wounds"
    } else if lowered.contains("strangled") {
        "asphyxiation via ligature strangulation"
    } else {
        "severe cranial trauma"
    };

    let physical = match variant(pick) {
        0 => "Blood spatter pattern suggests attack came from behind. Defensive wounds on victim's forearms indicate they tried to fight back.".to_string(),
        1 => format!("Bloody fingerprints found on the {location} door panel - partial match in forensics database."),
        2 => "Torn fabric from a standard crew uniform caught in victim's hand. Fibers are dark blue with red threading.".to_string(),
        _ => "Muddy boot prints (size 10) leading away from the scene toward the maintenance corridor.".to_string(),
    };

    let scene = match variant(pick) {
        0 => "Victim's personal datapad was accessed 2 minutes before death - someone searched their files.".to_string(),
        1 => format!(
            "Security access log shows victim entered {location} at {}. One other crew member accessed the area shortly after.",
            time.minus_minutes(12)
        ),
        2 => format!(
            "Surveillance cameras in {location} were disabled at {} - 8 minutes before the murder.",
            time.minus_minutes(8)
        ),
        _ => "Victim's keycard found 3 meters from body, suggesting it was removed by the killer.".to_string(),
    };

    vec![
        format!("VICTIM: The deceased has been identified as {victim}. Body discovered by crew at {time}."),
        format!(
            "CAUSE OF DEATH: Medical scan indicates {cause}. Death occurred approximately {} (5 minutes before discovery).",
            time.minus_minutes(5)
        ),
        format!("PHYSICAL EVIDENCE: {physical}"),
        format!("SCENE ANALYSIS: {scene}"),
    ]
}
