use super::{variant, CrimeTemplate, EvidenceContext, HiddenEvidenceDef};
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime};

pub(super) static TEMPLATE: CrimeTemplate = CrimeTemplate {
    describe,
    details: &[
        "A classified data drive containing mission-critical intel is missing.",
        "Prototype quantum processor worth 2.4 million credits has been taken.",
        "Classified navigation codes for secure routes were copied.",
        "Rare xenobiological samples worth millions have vanished.",
        "Commander's personal safe containing classified documents was cracked.",
    ],
    evidence,
    evidence_types: &[
        "pry marks on the storage container",
        "a disabled alarm system",
        "forged access credentials",
        "tampered lock mechanism",
        "security footage gap during the theft",
    ],
    hidden_evidence: &[
        HiddenEvidenceDef {
            description: "Pry marks on storage container - industrial lock pick set used to breach security",
            keywords: &[
                "pry", "marks", "forced", "lock", "pick", "breach", "container", "storage",
                "opened", "broken", "jimmied",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Alarm system disabled from maintenance panel 6 minutes before theft",
            keywords: &[
                "alarm", "alarms", "disabled", "turned off", "deactivated", "maintenance", "panel",
                "security", "system", "bypassed",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Forged security credentials used - keycard shows \"Chief Engineer\" but chief was elsewhere",
            keywords: &[
                "forged", "fake", "credentials", "keycard", "badge", "access", "card", "security",
                "bypassed", "stolen", "cloned",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Lock mechanism hacked - micro-computer splice attached to security circuit",
            keywords: &[
                "lock", "hacked", "computer", "splice", "circuit", "electronic", "technical",
                "bypass", "tamper", "device",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Security footage shows 4-minute gap - video feed looped using maintenance override",
            keywords: &[
                "footage", "video", "gap", "missing", "looped", "camera", "cameras", "surveillance",
                "disabled", "override",
            ],
            unlocked_by: Some(Capability::Security),
        },
    ],
    motives: &[
        "selling secrets to rival organizations",
        "personal financial gain",
        "blackmail material against crew",
        "completing a hired mission",
        "stealing technology for their own use",
    ],
};

fn describe(location: &str, time: StationTime, detail: &str) -> String {
    format!(
        "A valuable item has been stolen from the {location} at {time}. {detail} \
         Security protocols were bypassed during the theft."
    )
}

fn evidence(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String> {
    let EvidenceContext { location, time, .. } = *ctx;

    let item = match variant(pick) {
        0 => "Classified data drive (ID: SEC-7742) containing station defense protocols and crew personnel files. Value: Priceless - contents could compromise entire operation.",
        1 => "Experimental quantum processor prototype (Project Helix). Only 3 units exist. Black market value estimated at 2.4 million credits.",
        2 => "Medical nanite samples (Batch MED-991) - unauthorized use could create biological weapons. Stored under triple-lock security.",
        _ => "Navigation data core containing classified jump coordinates. Unauthorized possession is treason under Galactic Law Article 47.",
    };

    let access = match variant(pick) {
        0 => format!(
            "Security vault in {location} shows pry marks - breached using industrial lock pick set. Alarm system disabled from maintenance panel at {}.",
            time.minus_minutes(6)
        ),
        1 => "Biometric scanner bypassed using forged security credentials. Access log shows \"Chief Engineer\" keycard used, but chief was in Med Bay at the time.".to_string(),
        2 => "Electronic lock on storage container hacked - found micro-computer splice attached to security circuit. Required advanced technical knowledge.".to_string(),
        _ => format!(
            "Safe combination cracked through brute force method. Lock mechanism shows repeated entry attempts starting at {}.",
            time.minus_minutes(35)
        ),
    };

    let breach = match variant(pick) {
        0 => format!(
            "Surveillance cameras in {location} experienced 4-minute gap from {} to {time} - video feed looped using maintenance override code.",
            time.minus_minutes(4)
        ),
        1 => format!(
            "Motion sensors in {location} were deactivated at {}. Reactivation log shows manual reset from inside the room.",
            time.minus_minutes(8)
        ),
        2 => format!(
            "Pressure-sensitive floor alarm disabled. Security log shows system diagnostics run from terminal outside {location} at {}.",
            time.minus_minutes(12)
        ),
        _ => "Anti-tamper seal on vault broken. Forensics found tool marks matching standard engineering kit wrench (15mm).".to_string(),
    };

    let notes = match variant(pick) {
        0 => "Thief knew exact location of target - suggests inside knowledge. Only 6 crew members had access to storage manifest.",
        1 => "Estimated time to complete theft: 3-4 minutes. Perpetrator moved quickly and knew exactly what they were looking for.",
        2 => "No forced entry on main door - thief had valid access credentials or was let in by accomplice.",
        _ => "Security Chief confirms this level of security breach requires engineering AND security clearance knowledge.",
    };

    vec![
        format!("STOLEN ITEM: {item}"),
        format!("ACCESS METHOD: {access}"),
        format!("SECURITY BREACH: {breach}"),
        format!("INVESTIGATION NOTES: {notes}"),
    ]
}
