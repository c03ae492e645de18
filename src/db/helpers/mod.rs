//! Parsing of stored text columns back into typed values.
//!
//! Unknown enumeration values are data-integrity errors and are rejected,
//! never coerced to a default.

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveTime};

use crate::models::{BleedingType, MucusColor, MucusConsistency, MucusType};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Fraction is written only when non-zero, so whole-second times stay `HH:MM:SS`.
pub const TIME_FORMAT: &str = "%H:%M:%S%.f";

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("failed to parse {field} '{value}'"))
}

/// Accepts `HH:MM:SS` with an optional fraction, and the `HH:MM` form that
/// time inputs produce.
pub fn parse_time(value: &str, field: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .with_context(|| format!("failed to parse {field} '{value}'"))
}

pub fn parse_bleeding(value: &str) -> Result<BleedingType> {
    BleedingType::ALL
        .into_iter()
        .find(|b| b.as_str() == value)
        .ok_or_else(|| anyhow!("unknown bleeding type '{value}'"))
}

pub fn parse_mucus_type(value: &str) -> Result<MucusType> {
    MucusType::ALL
        .into_iter()
        .find(|k| k.as_str() == value)
        .ok_or_else(|| anyhow!("unknown mucus type '{value}'"))
}

pub fn parse_mucus_color(value: &str) -> Result<MucusColor> {
    if value.is_empty() {
        return Ok(MucusColor::None);
    }
    MucusColor::ALL
        .into_iter()
        .find(|c| c.as_str() == value)
        .ok_or_else(|| anyhow!("unknown mucus color '{value}'"))
}

pub fn parse_mucus_consistency(value: &str) -> Result<MucusConsistency> {
    if value.is_empty() {
        return Ok(MucusConsistency::None);
    }
    MucusConsistency::ALL
        .into_iter()
        .find(|c| c.as_str() == value)
        .ok_or_else(|| anyhow!("unknown mucus consistency '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_values_survive_their_text_form() {
        for kind in MucusType::ALL {
            assert_eq!(parse_mucus_type(kind.as_str()).unwrap(), kind);
        }
        for bleeding in BleedingType::ALL {
            assert_eq!(parse_bleeding(bleeding.as_str()).unwrap(), bleeding);
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(parse_mucus_type("eggwhite").is_err());
        assert!(parse_bleeding("spotting").is_err());
        assert!(parse_mucus_color("green").is_err());
        assert!(parse_mucus_consistency("stretchy").is_err());
    }

    #[test]
    fn empty_modifiers_mean_none() {
        assert_eq!(parse_mucus_color("").unwrap(), MucusColor::None);
        assert_eq!(parse_mucus_consistency("").unwrap(), MucusConsistency::None);
    }

    #[test]
    fn time_accepts_minutes_precision() {
        let time = parse_time("07:30", "time").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert!(parse_time("7h30", "time").is_err());
    }

    #[test]
    fn time_keeps_fractional_seconds() {
        let time = NaiveTime::from_hms_milli_opt(7, 45, 0, 500).unwrap();
        let stored = time.format(TIME_FORMAT).to_string();
        assert_eq!(stored, "07:45:00.500");
        assert_eq!(parse_time(&stored, "time").unwrap(), time);

        let whole = NaiveTime::from_hms_opt(7, 45, 0).unwrap();
        assert_eq!(whole.format(TIME_FORMAT).to_string(), "07:45:00");
        assert_eq!(parse_time("07:45:00", "time").unwrap(), whole);
    }
}
