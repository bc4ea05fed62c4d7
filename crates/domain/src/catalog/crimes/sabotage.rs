use super::{variant, CrimeTemplate, EvidenceContext, HiddenEvidenceDef};
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime};

pub(super) static TEMPLATE: CrimeTemplate = CrimeTemplate {
    describe,
    details: &[
        "Main power conduits have been severed with a plasma cutter.",
        "Control panels show signs of forced tampering and circuit overrides.",
        "Vital life support equipment has been destroyed with heavy tools.",
        "Someone disabled the safety protocols through manual bypass.",
        "Critical circuits were deliberately overloaded causing system failure.",
    ],
    evidence,
    evidence_types: &[
        "tool marks on damaged equipment",
        "access logs showing unauthorized entry",
        "disabled security cameras in the area",
        "a wrench with suspicious markings",
        "sabotaged wiring still sparking",
    ],
    hidden_evidence: &[
        HiddenEvidenceDef {
            description: "Deep tool marks on conduits - industrial plasma cutter used, requires engineering certification",
            keywords: &[
                "tool", "tools", "marks", "cut", "cutter", "plasma", "equipment", "damage",
                "damaged", "engineering", "tamper", "tampering",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Cut wires and severed cables show deliberate sabotage pattern",
            keywords: &[
                "wire", "wires", "cable", "cables", "cut", "severed", "electrical", "power",
                "sabotage", "deliberate", "intentional",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Safety protocols manually disabled through maintenance console - required admin access",
            keywords: &[
                "safety", "protocol", "protocols", "disabled", "shut", "down", "manual", "override",
                "access", "console", "admin",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Wrench with suspicious markings left at scene - serial number traces to engineering department",
            keywords: &[
                "wrench", "tool", "left", "behind", "serial", "number", "engineering", "department",
                "equipment", "suspicious",
            ],
            unlocked_by: None,
        },
        HiddenEvidenceDef {
            description: "Access logs show unauthorized entry using forged credentials 20 minutes before sabotage",
            keywords: &[
                "access", "log", "logs", "entry", "unauthorized", "forged", "credentials", "keycard",
                "bypass", "security", "before",
            ],
            unlocked_by: Some(Capability::Security),
        },
    ],
    motives: &[
        "to create a distraction for their other activities",
        "to delay the station's mission",
        "revenge against the station administration",
        "to cause chaos and facilitate escape",
        "following orders from an external party",
    ],
};

fn describe(location: &str, time: StationTime, detail: &str) -> String {
    format!(
        "Critical systems in the {location} have been deliberately damaged at {time}. {detail} \
         This could endanger the entire station if not resolved."
    )
}

fn evidence(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String> {
    let EvidenceContext { location, time, .. } = *ctx;

    let damaged = match variant(pick) {
        0 => format!("Primary power relay in {location} destroyed - station running on backup power at 40% capacity."),
        1 => format!("Oxygen recycling system sabotaged - {location} atmospheric controls offline. Emergency reserves engaged."),
        2 => format!("Navigation computer in {location} corrupted - all flight data erased. Backup systems compromised."),
        _ => format!("Communication array in {location} severed - external transmissions blocked for 6 hours."),
    };

    let method = match variant(pick) {
        0 => "Deep tool marks on critical conduits - industrial plasma cutter used. Requires engineering certification to operate.",
        1 => "Control panel circuit boards physically smashed with heavy object. Forced entry through access hatch detected.",
        2 => "Safety interlocks manually disabled through maintenance console. Required admin-level credentials and technical knowledge.",
        _ => "Wiring intentionally crossed to cause power surge. Deliberate rewiring took 10-15 minutes of uninterrupted work.",
    };

    let technical = match variant(pick) {
        0 => format!(
            "Security access log shows {location} maintenance hatch opened at {} using Engineer keycard #7.",
            time.minus_minutes(18)
        ),
        1 => format!(
            "Surveillance footage shows someone in maintenance suit entering {location} at {}. Face obscured by helmet.",
            time.minus_minutes(25)
        ),
        2 => "Tool kit found at scene contains plasma cutter (serial #ENG-442) - issued to Engineering department.".to_string(),
        _ => "Saboteur left behind industrial-grade wire cutters with partial fingerprint on handle.".to_string(),
    };

    let impact = match variant(pick) {
        0 => "Station emergency systems activated. All non-essential personnel ordered to shelters. Repair time: 4-6 hours.",
        1 => "Critical systems failure could lead to catastrophic decompression if not repaired within 8 hours.",
        2 => "Backup generators straining under load - if saboteur strikes again, complete system failure imminent.",
        _ => "Mission timeline delayed by minimum 48 hours. Command has authorized full investigation.",
    };

    vec![
        format!("SYSTEMS DAMAGED: {damaged}"),
        format!("METHOD OF SABOTAGE: {method}"),
        format!("TECHNICAL EVIDENCE: {technical}"),
        format!("IMMEDIATE IMPACT: {impact}"),
    ]
}
