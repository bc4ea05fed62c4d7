use super::{variant, CrimeTemplate, EvidenceContext, HiddenEvidenceDef};
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime};

pub(super) static TEMPLATE: CrimeTemplate = CrimeTemplate {
    describe,
    details: &[
        "Banned narcotics worth 500K credits were found hidden in maintenance panels.",
        "Illegal weapons cache including 8 plasma rifles was uncovered.",
        "Unauthorized experimental bio-samples detected in cryo-storage.",
        "Stolen military-grade equipment from Mars Station discovered.",
        "Prohibited AI core processor found in concealed floor compartment.",
    ],
    evidence,
    evidence_types: &[
        "hidden storage compartment",
        "false shipping manifests",
        "coded communication logs",
        "suspicious packaging materials",
        "traces of prohibited substances",
    ],
    hidden_evidence: &[
        HiddenEvidenceDef {
            description: "Hidden storage compartment with false bottom discovered - accessed via magnetic release",
            keywords: &[
                "hidden", "compartment", "storage", "false", "bottom", "secret", "concealed",
                "magnetic", "release", "panel",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "False shipping manifests found - containers logged as delivered but never scanned into inventory",
            keywords: &[
                "manifest", "manifests", "shipping", "false", "forged", "fake", "documents", "cargo",
                "containers", "inventory",
            ],
            unlocked_by: None,
        },
        HiddenEvidenceDef {
            description: "Encrypted communication logs reference \"shipment arriving\" and coordinates for dead-drop",
            keywords: &[
                "communication", "communications", "logs", "messages", "encrypted", "coded",
                "transmissions", "datapad", "shipment",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "X-ray shielding material found - designed to hide contraband from security scans",
            keywords: &[
                "shield", "shielding", "xray", "x-ray", "scan", "scanner", "security", "hide",
                "avoid", "detection",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Traces of prohibited substances detected on packaging materials and containers",
            keywords: &[
                "traces", "residue", "substance", "substances", "prohibited", "illegal",
                "contraband", "packaging", "detected",
            ],
            unlocked_by: Some(Capability::Medical),
        },
    ],
    motives: &[
        "running a profitable black market operation",
        "supplying illegal items to other stations",
        "building a personal arsenal",
        "financing their real agenda",
        "preparing for a larger criminal operation",
    ],
};

fn describe(location: &str, time: StationTime, detail: &str) -> String {
    format!(
        "Contraband has been discovered in the {location} at {time}. {detail} \
         Someone has been trafficking illegal materials aboard the station."
    )
}

fn evidence(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String> {
    let EvidenceContext { location, time, .. } = *ctx;

    let contraband = match variant(pick) {
        0 => format!("Narcotics cache (est. 12kg of Hyper-Stim) hidden behind false wall panel in {location}. Street value: 500,000 credits. Packaging indicates off-world origin."),
        1 => format!("Weapons arsenal discovered in {location} storage crate marked \"Medical Supplies.\" Contents: 8 plasma rifles, 40 energy cells, 2 EMP grenades. All serial numbers filed off."),
        2 => format!("Illegal bio-samples (xenomorph genetic material) found in unauthorized cryo-unit in {location}. Galactic Health Code violation - Class A felony."),
        _ => format!("Stolen military communication equipment (Project Blackout encryption system) recovered from hidden compartment in {location}. Reported missing from Mars Base 3 months ago."),
    };

    let concealment = match variant(pick) {
        0 => format!("False bottom discovered in {location} storage locker #47. Compartment accessed via hidden magnetic release. Required insider knowledge of station layout."),
        1 => "Contraband hidden inside hollowed-out equipment containers. Shipping manifest lists contents as \"Replacement Parts\" - weight discrepancy of 47kg not flagged.".to_string(),
        2 => format!("Secret compartment built into {location} wall structure during recent renovation. Construction records show unauthorized modifications by unknown crew member."),
        _ => "Items concealed in standard supply crates with legitimate goods on top. X-ray shielding material detected - designed to avoid security scans.".to_string(),
    };

    let trafficking = match variant(pick) {
        0 => format!("Encrypted communication logs found on datapad in {location}. Decoded messages reference \"shipment arriving Tuesday\" and coordinates for dead-drop location."),
        1 => format!(
            "Forged shipping manifests discovered - 6 supply containers logged as \"delivered\" but never scanned into station inventory. Records altered in system at {}.",
            time.minus_minutes(120)
        ),
        2 => "Hidden ledger found detailing transactions worth 2.3 million credits over 8 months. Codenames used: \"Phantom,\" \"Echo-6,\" \"Nightfall.\"".to_string(),
        _ => format!(
            "Security footage from Cargo Bay shows crew member moving unmarked crates to {location} at {}. Face partially visible - matches physical description of 2 crew members.",
            time.minus_minutes(180)
        ),
    };

    let scope = match variant(pick) {
        0 => "Intelligence suggests this is part of larger smuggling ring operating across 4 stations. Our station identified as distribution hub.",
        1 => "Financial records show irregular payments to crew member's off-station account - total: 340,000 credits deposited over 6 months.",
        2 => "Evidence indicates smuggler has accomplice who handles security system bypasses. Two-person operation minimum.",
        _ => "Analysis shows trafficking operation required access to: Cargo manifests, Security schedules, Docking bay codes. Suggests crew member with elevated clearance.",
    };

    vec![
        format!("CONTRABAND DISCOVERED: {contraband}"),
        format!("CONCEALMENT METHOD: {concealment}"),
        format!("TRAFFICKING EVIDENCE: {trafficking}"),
        format!("OPERATIONAL SCOPE: {scope}"),
    ]
}
