//! Static game content: station locations, crime templates and the crew.

pub mod crimes;
pub mod locations;
pub mod roster;

pub use crimes::{
    CrimeTemplate, CrimeType, EvidenceContext, HiddenEvidenceDef, CRIME_TIMES, VICTIMS,
};
pub use locations::{
    adjacent_locations, find_location, is_adjacent, station_locations, AccessLevel, Location,
};
pub use roster::{default_roster, SuspectProfile};
