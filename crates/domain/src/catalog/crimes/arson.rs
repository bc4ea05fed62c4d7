use super::{variant, CrimeTemplate, EvidenceContext, HiddenEvidenceDef};
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime};

pub(super) static TEMPLATE: CrimeTemplate = CrimeTemplate {
    describe,
    details: &[
        "Chemical accelerants were used to rapidly spread the fire.",
        "Fire suppression systems were manually shut down 10 minutes before ignition.",
        "Three separate ignition points detected - clear evidence of premeditation.",
        "Critical data servers and backup systems specifically targeted for destruction.",
        "Forensic analysis confirms fire was intentionally set with incendiary device.",
    ],
    evidence,
    evidence_types: &[
        "traces of accelerant",
        "disabled fire suppression controls",
        "burnt matchsticks or ignition device",
        "tampered smoke detectors",
        "suspicious burn patterns",
    ],
    hidden_evidence: &[
        HiddenEvidenceDef {
            description: "Traces of accelerant detected in burn residue - military-grade fire starter identified",
            keywords: &[
                "accelerant", "traces", "residue", "chemical", "fuel", "starter", "fire", "burn",
                "detected", "found",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Fire suppression system manually disabled - override command entered from maintenance terminal",
            keywords: &[
                "suppression", "fire", "system", "disabled", "shut", "down", "override",
                "maintenance", "terminal", "halon", "sprinkler",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Partially melted timing device found in debris - military-spec remote detonator",
            keywords: &[
                "device", "timer", "timing", "detonator", "ignition", "remote", "melted", "burnt",
                "found", "debris",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Tampered smoke detectors with disconnected power supplies found throughout area",
            keywords: &[
                "smoke", "detector", "detectors", "alarm", "alarms", "tampered", "disabled",
                "disconnected", "power", "safety",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Suspicious burn patterns indicate multiple ignition points - evidence of deliberate arson",
            keywords: &[
                "burn", "pattern", "patterns", "suspicious", "multiple", "ignition", "points",
                "arson", "deliberate", "intentional", "fire",
            ],
            unlocked_by: None,
        },
    ],
    motives: &[
        "destroying evidence of their crimes",
        "creating chaos and distraction",
        "sabotaging the station's operations",
        "insurance fraud scheme",
        "personal vendetta against the facility",
    ],
};

fn describe(location: &str, time: StationTime, detail: &str) -> String {
    format!(
        "A fire was deliberately started in the {location} at {time}. {detail} \
         Fire suppression systems were disabled before the incident."
    )
}

fn evidence(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String> {
    let EvidenceContext { location, time, .. } = *ctx;

    let analysis = match variant(pick) {
        0 => format!("Fire originated in {location} at precisely {time}. Three distinct ignition points detected: electrical panel, storage area, ventilation duct. Synchronized timing indicates deliberate planning."),
        1 => "Burn pattern analysis shows fire spread unusually fast - consistent with accelerant use. Temperature readings peaked at 1,400°C, far exceeding normal combustion.".to_string(),
        2 => "Fire marshal reports damage concentrated on critical systems: main data core, backup servers, communication relay. Strategic targeting evident - not random arson.".to_string(),
        _ => format!("Forensics confirms fire started simultaneously at multiple locations in {location}. Used timed incendiary devices set for {time} detonation."),
    };

    let accelerant = match variant(pick) {
        0 => "Chemical analysis of burn residue identifies tri-methyl accelerant - military-grade fire starter. Not available in civilian markets. Requires specialized procurement.".to_string(),
        1 => format!("Traces of plasma gel found at ignition sites in {location}. This accelerant burns at extreme temperatures and cannot be extinguished with standard fire suppression."),
        2 => "Lab confirms presence of thermite compound mixed with oxidizers. Professional arson technique - designed to destroy evidence and maximize damage.".to_string(),
        _ => "Residue analysis shows combination of liquid accelerant and solid fuel tablets. Arsonist had chemistry knowledge to create custom burn mixture.".to_string(),
    };

    let suppression = match variant(pick) {
        0 => format!(
            "Fire suppression system in {location} manually disabled at {}. Override command entered from maintenance terminal using Engineer credentials.",
            time.minus_minutes(10)
        ),
        1 => format!("Halon gas canisters in {location} were deliberately emptied 2 hours before fire. Saboteur knew fire suppression system operation intimately."),
        2 => format!("Smoke detectors in {location} found with disconnected power supplies. Arsonist systematically disabled all fire safety systems before ignition."),
        _ => "Emergency bulkheads programmed to remain open during fire - normally they seal automatically. System override required admin-level security access.".to_string(),
    };

    let recovered = match variant(pick) {
        0 => format!("Partially melted timing device found in {location} debris. Electronic signature matches military-spec remote detonator. Serial number traced to Station armory inventory."),
        1 => format!("Boot prints in soot leading away from {location} toward maintenance tunnels. Tread pattern matches standard-issue engineering boots (size 9)."),
        2 => format!(
            "Surveillance shows crew member in fireproof suit entering {location} at {}. Left carrying equipment case 4 minutes later.",
            time.minus_minutes(18)
        ),
        _ => "Arsonist left behind empty accelerant containers in air duct. Partial fingerprint recovered from container seal - matches crew database profile.".to_string(),
    };

    vec![
        format!("FIRE ANALYSIS: {analysis}"),
        format!("ACCELERANT DETECTED: {accelerant}"),
        format!("SUPPRESSION SABOTAGE: {suppression}"),
        format!("EVIDENCE RECOVERED: {recovered}"),
    ]
}
