use crate::charting::symbols::{
    bleeding_code, mucus_color_code, mucus_consistency_code, mucus_type_code,
};
use crate::models::{Mucus, Observation};

/// Encode one observation as its Creighton symbol.
///
/// Bleeding masks the mucus fields entirely. Otherwise the code is the
/// mucus base code followed directly by the color and consistency codes.
pub fn encode_observation(observation: &Observation) -> String {
    if observation.bleeding.is_bleeding() {
        return bleeding_code(observation.bleeding).to_string();
    }

    encode_mucus(&observation.mucus)
}

pub fn encode_mucus(mucus: &Mucus) -> String {
    let mut code = String::from(mucus_type_code(mucus.kind));
    code.push_str(mucus_color_code(mucus.color));
    code.push_str(mucus_consistency_code(mucus.consistency));
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charting::test_support::{observation, observation_with};
    use crate::models::{BleedingType, MucusColor, MucusConsistency, MucusType};

    #[test]
    fn dry_without_modifiers_is_zero() {
        let obs = observation("a", BleedingType::None, MucusType::Dry);
        assert_eq!(encode_observation(&obs), "0");
    }

    #[test]
    fn bare_mucus_types_encode_to_their_base_code() {
        let expected = [
            (MucusType::MoistNoLubrication, "2"),
            (MucusType::WetNoLubrication, "2W"),
            (MucusType::ShinyNoLubrication, "4"),
            (MucusType::LowStretch, "6"),
            (MucusType::MediumStretch, "8"),
            (MucusType::HighStretch, "10"),
            (MucusType::MoistWithLubrication, "10DL"),
            (MucusType::ShinyWithLubrication, "10SL"),
            (MucusType::WetWithLubrication, "10WL"),
        ];
        for (kind, code) in expected {
            let obs = observation("a", BleedingType::None, kind);
            assert_eq!(encode_observation(&obs), code, "{kind:?}");
        }
    }

    #[test]
    fn bleeding_masks_mucus() {
        let mucus = Mucus::new(MucusType::HighStretch)
            .with_color(MucusColor::Clear)
            .with_consistency(MucusConsistency::Gummy);
        let obs = observation_with("a", BleedingType::Light, mucus);
        assert_eq!(encode_observation(&obs), "L");
    }

    #[test]
    fn color_is_appended_without_separator() {
        let mucus = Mucus::new(MucusType::HighStretch).with_color(MucusColor::Clear);
        let obs = observation_with("a", BleedingType::None, mucus);
        assert_eq!(encode_observation(&obs), "10K");
    }

    #[test]
    fn color_precedes_consistency() {
        let mucus = Mucus::new(MucusType::MediumStretch)
            .with_color(MucusColor::CloudyClear)
            .with_consistency(MucusConsistency::Pasty);
        assert_eq!(encode_mucus(&mucus), "8C/KP");

        let mucus = Mucus::new(MucusType::LowStretch).with_consistency(MucusConsistency::Gummy);
        assert_eq!(encode_mucus(&mucus), "6G");
    }

    #[test]
    fn never_empty() {
        for bleeding in BleedingType::ALL {
            for kind in MucusType::ALL {
                let obs = observation("a", bleeding, kind);
                assert!(!encode_observation(&obs).is_empty());
            }
        }
    }
}
