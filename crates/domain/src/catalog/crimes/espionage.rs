use super::{variant, CrimeTemplate, EvidenceContext, HiddenEvidenceDef};
use crate::random::Pick;
use crate::value_objects::{Capability, StationTime};

pub(super) static TEMPLATE: CrimeTemplate = CrimeTemplate {
    describe,
    details: &[
        "Encrypted quantum messages to enemy faction were intercepted by signals intelligence.",
        "Level-5 classified files were accessed without proper authorization codes.",
        "Station defense protocols and security systems were compromised.",
        "Someone copied all classified research data to external drive.",
        "Communication arrays detected unauthorized high-frequency transmissions.",
    ],
    evidence,
    evidence_types: &[
        "unauthorized data transfers",
        "hidden communication device",
        "encrypted files on a personal terminal",
        "suspicious access patterns",
        "coded messages in personal logs",
    ],
    hidden_evidence: &[
        HiddenEvidenceDef {
            description: "Unauthorized data transfers detected - 12.4TB copied to external drive then transmitted off-station",
            keywords: &[
                "data", "transfer", "transfers", "download", "downloaded", "copied", "external",
                "drive", "files", "transmitted",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Hidden micro-transmitter embedded in wall panel - active for 6 weeks transmitting data bursts",
            keywords: &[
                "transmitter", "device", "hidden", "embedded", "wall", "panel", "transmit",
                "transmitting", "signal", "communication",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Encrypted files on personal terminal - military-grade encryption with off-station contact logs",
            keywords: &[
                "encrypted", "files", "encryption", "terminal", "computer", "datapad", "logs",
                "classified", "secret", "coded",
            ],
            unlocked_by: Some(Capability::Engineering),
        },
        HiddenEvidenceDef {
            description: "Suspicious access patterns show repeated late-night database queries for classified information",
            keywords: &[
                "access", "pattern", "patterns", "suspicious", "unusual", "database", "queries",
                "classified", "logs", "unauthorized",
            ],
            unlocked_by: Some(Capability::Security),
        },
        HiddenEvidenceDef {
            description: "Coded messages in personal logs reference Handler-9 and intelligence dead-drops",
            keywords: &[
                "coded", "messages", "logs", "personal", "handler", "contact", "intelligence",
                "spy", "agent", "communication",
            ],
            unlocked_by: None,
        },
    ],
    motives: &[
        "working as a double agent",
        "selling secrets to the highest bidder",
        "gathering intelligence for a rival faction",
        "attempting corporate espionage",
        "political sabotage mission",
    ],
};

fn describe(location: &str, time: StationTime, detail: &str) -> String {
    format!(
        "Classified information has been leaked from the {location} at {time}. {detail} \
         A spy has been transmitting sensitive data off-station."
    )
}

fn evidence(ctx: &EvidenceContext<'_>, pick: Pick<'_>) -> Vec<String> {
    let EvidenceContext { location, time, .. } = *ctx;

    let leaked = match variant(pick) {
        0 => format!(
            "Classified defense protocols (Code Omega-7) accessed from {location} terminal at {}. Data includes: shield frequencies, weapons systems, crew deployment. Downloaded to external device.",
            time.minus_minutes(35)
        ),
        1 => format!("Research data on experimental propulsion system (Project Lightspeed) copied from secured {location} database. 847 files totaling 12.4TB transferred to unknown recipient."),
        2 => "Personnel files for all crew members accessed - medical records, psychological evaluations, family details. Clear intelligence gathering operation targeting crew vulnerabilities.".to_string(),
        _ => "Station security codes, patrol schedules, and camera blind spots compiled into comprehensive dossier. Intelligence package transmitted off-station via encrypted burst transmission.".to_string(),
    };

    let transmission = match variant(pick) {
        0 => format!("Communications array in {location} used to send encrypted quantum transmission at {time}. Signal traced to coordinates in neutral space - suspected enemy rendezvous point."),
        1 => format!("Hidden micro-transmitter discovered embedded in {location} wall panel. Device active for 6 weeks, transmitting data bursts during crew sleep cycles."),
        2 => format!(
            "Unauthorized satellite uplink detected from {location} at {}. 2.3GB encrypted data package sent before security lockout engaged.",
            time.minus_minutes(15)
        ),
        _ => format!("Modified personal datapad found in {location} with military-grade encryption module. Communication logs show 47 transmissions to off-station contact \"Handler-9.\""),
    };

    let access = match variant(pick) {
        0 => format!("Spy used stolen admin credentials (Captain's access code) to bypass {location} security. Credentials obtained via keylogger installed 3 weeks ago."),
        1 => format!("Biometric scanner in {location} shows 3 failed access attempts followed by successful entry using forged retinal pattern. Advanced counterintelligence training evident."),
        2 => format!(
            "Security footage from {location} shows crew member accessing classified terminal at {}. They knew exact location of surveillance blind spot.",
            time.minus_minutes(42)
        ),
        _ => format!("System logs reveal backdoor installed in {location} network 8 months ago. Allowed spy remote access to all classified databases without triggering alarms."),
    };

    let analysis = match variant(pick) {
        0 => "Intelligence assessment: This is professional espionage operation. Spy has tradecraft training - operational security, countersurveillance, dead drops.",
        1 => "Financial investigation reveals crew member received 6 wire transfers (total 750K credits) from shell company linked to hostile foreign power.",
        2 => "Behavioral analysis indicates spy has been deep cover for months. Built trusted relationships, gained security clearances, avoided suspicion.",
        _ => "Evidence suggests spy recruited by enemy intelligence service. Mission objectives: gather military secrets, identify station weaknesses, report crew movements.",
    };

    vec![
        format!("LEAKED INTELLIGENCE: {leaked}"),
        format!("TRANSMISSION DETECTED: {transmission}"),
        format!("ACCESS METHOD: {access}"),
        format!("OPERATIONAL ANALYSIS: {analysis}"),
    ]
}
