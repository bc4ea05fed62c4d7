//! Station clock time (24-hour `HH:MM`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// A wall-clock time on the station, without a date.
///
/// # Invariants
///
/// - `hour < 24` and `minute < 60`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationTime {
    hour: u8,
    minute: u8,
}

impl StationTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour >= 24 || minute >= 60 {
            return Err(DomainError::validation(format!(
                "Station time out of range: {hour}:{minute}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Compile-time constructor for catalog tables.
    pub(crate) const fn fixed(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60);
        Self { hour, minute }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The time `minutes` earlier, wrapping across midnight.
    pub fn minus_minutes(&self, minutes: u32) -> Self {
        let total = i32::from(self.hour) * 60 + i32::from(self.minute);
        let offset = (minutes % MINUTES_PER_DAY as u32) as i32;
        let shifted = (total - offset).rem_euclid(MINUTES_PER_DAY);
        Self {
            hour: (shifted / 60) as u8,
            minute: (shifted % 60) as u8,
        }
    }
}

impl fmt::Display for StationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for StationTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| DomainError::parse(format!("Invalid station time: {s}")))?;
        let hour = hours
            .parse::<u8>()
            .map_err(|_| DomainError::parse(format!("Invalid hour in station time: {s}")))?;
        let minute = minutes
            .parse::<u8>()
            .map_err(|_| DomainError::parse(format!("Invalid minute in station time: {s}")))?;
        Self::new(hour, minute).map_err(|e| DomainError::parse(e.to_string()))
    }
}

impl Serialize for StationTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StationTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> StationTime {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_displays_zero_padded() {
        assert_eq!(at("02:15").to_string(), "02:15");
        assert_eq!(at("23:45").hour(), 23);
    }

    #[test]
    fn rejects_malformed_times() {
        assert!("24:00".parse::<StationTime>().is_err());
        assert!("12:60".parse::<StationTime>().is_err());
        assert!("noon".parse::<StationTime>().is_err());
    }

    #[test]
    fn minus_minutes_within_the_hour() {
        assert_eq!(at("14:45").minus_minutes(2).to_string(), "14:43");
        assert_eq!(at("14:45").minus_minutes(5).to_string(), "14:40");
    }

    #[test]
    fn minus_minutes_crosses_hour_boundary() {
        assert_eq!(at("18:00").minus_minutes(1).to_string(), "17:59");
        assert_eq!(at("10:15").minus_minutes(90).to_string(), "08:45");
    }

    #[test]
    fn minus_minutes_wraps_past_midnight() {
        assert_eq!(at("02:15").minus_minutes(180).to_string(), "23:15");
        assert_eq!(at("00:00").minus_minutes(1).to_string(), "23:59");
    }

    #[test]
    fn serde_uses_clock_string() {
        let json = serde_json::to_string(&at("06:45")).unwrap();
        assert_eq!(json, "\"06:45\"");
        let back: StationTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, at("06:45"));
    }
}
