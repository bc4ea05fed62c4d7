use super::{variant, CrimeTemplate, EvidenceContext, HiddenEvidenceDef};
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime};

pub(super) static TEMPLATE: CrimeTemplate = CrimeTemplate {
    describe,
    details: &[
        "Medical analysis confirms acute toxin exposure - victim in critical condition.",
        "Food supplies in the galley were tampered with neurotoxin.",
        "Hazardous industrial solvent introduced to ventilation system.",
        "Prescription medication replaced with lethal chemical compound.",
        "Water supply contaminated with biological agent.",
    ],
    evidence,
    evidence_types: &[
        "empty vial of toxic substance",
        "tampered food containers",
        "contaminated medical supplies",
        "traces of poison on surfaces",
        "suspicious chemical residue",
    ],
    hidden_evidence: &[
        HiddenEvidenceDef {
            description: "Empty toxin vial (5ml capacity) recovered from waste chute - partial fingerprint on glass",
            keywords: &[
                "vial", "bottle", "container", "toxin", "poison", "empty", "glass", "fingerprint",
                "fingerprints", "found",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Tampered food containers discovered - microscopic injection marks on sealed packaging",
            keywords: &[
                "food", "tampered", "contaminated", "container", "containers", "packaging", "sealed",
                "injection", "changed", "modified",
            ],
            unlocked_by: None,
        },
        HiddenEvidenceDef {
            description: "Contaminated medical supplies found - prescription medication replaced with toxic lookalike",
            keywords: &[
                "medical", "supplies", "medication", "medicine", "pills", "contaminated", "replaced",
                "toxic", "substituted", "cabinet",
            ],
            unlocked_by: Some(Capability::Medical),
        },
        HiddenEvidenceDef {
            description: "Traces of poison detected on surfaces - chemical residue found on door handle and cabinet",
            keywords: &[
                "traces", "poison", "residue", "chemical", "substance", "surface", "surfaces", "door",
                "handle", "cabinet", "detected",
            ],
            unlocked_by: Some(Capability::Medical),
        },
        HiddenEvidenceDef {
            description: "Suspicious chemical residue and latex glove traces indicate poisoner used protective equipment",
            keywords: &[
                "chemical", "residue", "suspicious", "latex", "glove", "gloves", "protective",
                "equipment", "wore", "traces",
            ],
            unlocked_by: Some(Capability::Medical),
        },
    ],
    motives: &[
        "eliminating a threat to their operation",
        "testing biological weapons",
        "creating medical emergencies as cover",
        "targeting a specific individual",
        "demonstrating their power and control",
    ],
};

fn describe(location: &str, time: StationTime, detail: &str) -> String {
    format!(
        "A crew member has fallen critically ill from poisoning traced to the {location} at {time}. \
         {detail} The toxin was deliberately administered."
    )
}

fn evidence(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String> {
    let EvidenceContext { location, time, .. } = *ctx;

    let status = match variant(pick) {
        0 => format!("Lieutenant Chen collapsed in {location} at {time}. Symptoms: severe convulsions, respiratory distress, dilated pupils. Med Bay reports critical condition - 68% survival probability."),
        1 => format!("Engineer Foster found unconscious in {location}. Toxicology scan shows neurotoxin in bloodstream. Antidote administered - victim stable but incapacitated for 48 hours."),
        2 => format!("Dr. Martinez reported severe nausea and cardiac arrhythmia at {time}. Blood analysis confirms synthetic poison - not found in standard medical database."),
        _ => format!("Security Officer Blake rushed to Med Bay from {location} with acute poisoning symptoms. Doctor confirms deliberate toxin exposure - investigating source."),
    };

    let toxin = match variant(pick) {
        0 => "Chemical analysis identifies compound as Tetrodotoxin derivative (TTX-7) - lethal in doses above 2mg. Requires specialized chemistry knowledge to synthesize.".to_string(),
        1 => format!("Biological toxin matches Ricin protein structure. Found in 3 locations: victim's coffee cup, {location} water dispenser, and break room sink."),
        2 => "Industrial solvent Methyl Ethyl Ketone detected in air filters. NOT standard station chemical - someone smuggled it aboard specifically for this purpose.".to_string(),
        _ => "Toxicology identifies rare botanical poison from off-world plant species. Only source on station: xenobiology lab secured samples.".to_string(),
    };

    let method = match variant(pick) {
        0 => format!("Poison found in victim's personal coffee mug in {location}. Residue on cup rim - administered within 15 minutes of symptoms. Security checking who had access to victim's locker."),
        1 => format!(
            "Contaminated food discovered in sealed container in {location} refrigeration unit. Tampering occurred between {} and {} based on preservation analysis.",
            time.minus_minutes(90),
            time.minus_minutes(45)
        ),
        2 => format!(
            "Ventilation panel in {location} shows signs of forced entry. Toxin dispersal device found hidden in ductwork - timer set for {}.",
            time.minus_minutes(8)
        ),
        _ => format!("Victim's prescription medication bottle from {location} med cabinet contains substituted pills. Original medication replaced with toxic lookalike - required medical storage access."),
    };

    let forensic = match variant(pick) {
        0 => format!("Empty toxin vial (5ml capacity) recovered from {location} waste chute. Partial fingerprint on glass - running through crew database."),
        1 => format!("Chemical trace analysis shows poisoner wore latex gloves - found residue on {location} door handle and storage cabinet."),
        2 => format!(
            "Security footage shows person in medical scrubs entering {location} at {}. Face partially obscured - appears to be approximately 5'8\" tall.",
            time.minus_minutes(30)
        ),
        _ => "Syringe mark found on victim's food package seal - microscopic puncture consistent with injection method. Poisoner had steady hand and medical training.".to_string(),
    };

    vec![
        format!("VICTIM STATUS: {status}"),
        format!("TOXIN IDENTIFIED: {toxin}"),
        format!("ADMINISTRATION METHOD: {method}"),
        format!("FORENSIC EVIDENCE: {forensic}"),
    ]
}
