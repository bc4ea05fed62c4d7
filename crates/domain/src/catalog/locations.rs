//! Station locations and the adjacency map used by the witness model.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Who may legitimately enter a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Public,
    Restricted,
    Secure,
}

impl AccessLevel {
    /// Briefing text shown for the crime scene.
    pub fn clue_text(&self) -> &'static str {
        match self {
            Self::Secure => "SECURE - Restricted to authorized personnel only",
            Self::Restricted => "RESTRICTED - Limited crew access",
            Self::Public => "PUBLIC - Accessible to all crew members",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Restricted => "restricted",
            Self::Secure => "secure",
        })
    }
}

/// A place on the station where a crime can happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub access_level: AccessLevel,
    /// Roles with a plausible legitimate reason to be there.
    pub relevant_roles: Vec<String>,
}

fn location(
    name: &str,
    description: &str,
    access_level: AccessLevel,
    relevant_roles: &[&str],
) -> Location {
    Location {
        name: name.to_string(),
        description: description.to_string(),
        access_level,
        relevant_roles: relevant_roles.iter().map(|r| r.to_string()).collect(),
    }
}

static LOCATIONS: Lazy<Vec<Location>> = Lazy::new(|| {
    vec![
        location(
            "Med Bay",
            "Medical facility with treatment rooms and pharmaceutical storage",
            AccessLevel::Restricted,
            &["Doctor", "Medic", "Chief Medical Officer"],
        ),
        location(
            "Engineering",
            "Power systems, reactor controls, and maintenance equipment",
            AccessLevel::Restricted,
            &["Engineer", "Chief Engineer", "Technician"],
        ),
        location(
            "Cargo Hold",
            "Storage area for supplies, equipment, and incoming shipments",
            AccessLevel::Public,
            &["Cargo Specialist", "Logistics Officer", "Security"],
        ),
        location(
            "Command Center",
            "Bridge with navigation controls and communication systems",
            AccessLevel::Secure,
            &["Captain", "Commander", "Navigator", "Communications Officer"],
        ),
        location(
            "Life Support",
            "Oxygen generation, water recycling, and atmospheric controls",
            AccessLevel::Secure,
            &["Engineer", "Environmental Specialist", "Technician"],
        ),
        location(
            "Armory",
            "Weapons storage and security equipment locker",
            AccessLevel::Secure,
            &["Security Chief", "Security Officer", "Commander"],
        ),
        location(
            "Research Lab",
            "Scientific equipment and experimental specimens",
            AccessLevel::Restricted,
            &["Scientist", "Research Director", "Lab Technician"],
        ),
        location(
            "Server Room",
            "Data systems, mainframe computers, and network infrastructure",
            AccessLevel::Secure,
            &["IT Specialist", "Systems Administrator", "Security Chief"],
        ),
        location(
            "Cafeteria",
            "Dining area with food preparation and storage facilities",
            AccessLevel::Public,
            &["Chef", "Cook", "Supply Officer"],
        ),
        location(
            "Quarters",
            "Living spaces and personal crew accommodations",
            AccessLevel::Restricted,
            &["All crew members"],
        ),
    ]
});

/// Every location a crime can be staged in.
pub fn station_locations() -> &'static [Location] {
    &LOCATIONS
}

/// Look up a catalog location by exact name.
pub fn find_location(name: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.name == name)
}

// Not symmetric: a location lists what can be observed from it.
const ADJACENCY: &[(&str, &[&str])] = &[
    ("Research Lab", &["Engineering", "Med Bay"]),
    ("Engineering", &["Research Lab", "Life Support"]),
    ("Med Bay", &["Research Lab", "Quarters"]),
    ("Communications Bay", &["Command Center", "Server Room"]),
    ("Security Office", &["Armory", "Command Center"]),
    ("Cargo Hold", &["Armory", "Engineering"]),
    ("Life Support", &["Engineering", "Med Bay"]),
];

/// Locations observable from `location`. Unknown locations see nothing.
pub fn adjacent_locations(location: &str) -> &'static [&'static str] {
    ADJACENCY
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, near)| *near)
        .unwrap_or(&[])
}

pub fn is_adjacent(from: &str, to: &str) -> bool {
    adjacent_locations(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_unique_locations() {
        let locations = station_locations();
        assert_eq!(locations.len(), 10);
        for (i, a) in locations.iter().enumerate() {
            assert!(!a.relevant_roles.is_empty());
            for b in &locations[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn find_location_by_name() {
        let armory = find_location("Armory").unwrap();
        assert_eq!(armory.access_level, AccessLevel::Secure);
        assert!(find_location("Cockpit").is_none());
    }

    #[test]
    fn adjacency_is_directional() {
        assert!(is_adjacent("Security Office", "Armory"));
        assert!(!is_adjacent("Armory", "Security Office"));
        assert!(adjacent_locations("Cockpit").is_empty());
    }

    #[test]
    fn access_clue_texts() {
        assert_eq!(
            AccessLevel::Public.clue_text(),
            "PUBLIC - Accessible to all crew members"
        );
        assert!(AccessLevel::Secure.clue_text().starts_with("SECURE"));
    }
}
