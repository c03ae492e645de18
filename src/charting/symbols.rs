//! Creighton symbol tables.
//!
//! One authoritative attribute -> code mapping per enumeration. `None`
//! values map to the empty string.

use crate::models::{BleedingType, Frequency, MucusColor, MucusConsistency, MucusType};

pub fn mucus_type_code(kind: MucusType) -> &'static str {
    match kind {
        MucusType::Dry => "0",
        MucusType::MoistNoLubrication => "2",
        MucusType::WetNoLubrication => "2W",
        MucusType::ShinyNoLubrication => "4",
        MucusType::LowStretch => "6",
        MucusType::MediumStretch => "8",
        MucusType::HighStretch => "10",
        MucusType::MoistWithLubrication => "10DL",
        MucusType::ShinyWithLubrication => "10SL",
        MucusType::WetWithLubrication => "10WL",
    }
}

pub fn mucus_color_code(color: MucusColor) -> &'static str {
    match color {
        MucusColor::None => "",
        MucusColor::Clear => "K",
        MucusColor::White => "C",
        MucusColor::CloudyClear => "C/K",
        MucusColor::Yellow => "Y",
        MucusColor::Brown => "B",
    }
}

pub fn mucus_consistency_code(consistency: MucusConsistency) -> &'static str {
    match consistency {
        MucusConsistency::None => "",
        MucusConsistency::Pasty => "P",
        MucusConsistency::Gummy => "G",
    }
}

pub fn bleeding_code(bleeding: BleedingType) -> &'static str {
    match bleeding {
        BleedingType::None => "",
        BleedingType::VeryLight => "VL",
        BleedingType::Light => "L",
        BleedingType::Moderate => "M",
        BleedingType::Heavy => "H",
        BleedingType::Brown => "B",
    }
}

pub fn frequency_code(frequency: Frequency) -> &'static str {
    match frequency {
        Frequency::Once => "X1",
        Frequency::Twice => "X2",
        Frequency::Three => "X3",
        Frequency::AllDay => "AD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_values_map_to_empty_codes() {
        assert_eq!(bleeding_code(BleedingType::None), "");
        assert_eq!(mucus_color_code(MucusColor::None), "");
        assert_eq!(mucus_consistency_code(MucusConsistency::None), "");
    }

    #[test]
    fn every_mucus_type_has_a_code() {
        for kind in MucusType::ALL {
            assert!(!mucus_type_code(kind).is_empty(), "{kind:?} has no code");
        }
    }

    #[test]
    fn lubrication_is_folded_into_the_base_code() {
        assert_eq!(mucus_type_code(MucusType::MoistWithLubrication), "10DL");
        assert_eq!(mucus_type_code(MucusType::ShinyWithLubrication), "10SL");
        assert_eq!(mucus_type_code(MucusType::WetWithLubrication), "10WL");
    }

    #[test]
    fn bleeding_and_modifier_codes() {
        assert_eq!(bleeding_code(BleedingType::Light), "L");
        assert_eq!(bleeding_code(BleedingType::Heavy), "H");
        assert_eq!(mucus_color_code(MucusColor::Clear), "K");
        assert_eq!(mucus_color_code(MucusColor::CloudyClear), "C/K");
        assert_eq!(mucus_consistency_code(MucusConsistency::Gummy), "G");
        assert_eq!(frequency_code(Frequency::AllDay), "AD");
    }
}
