use crate::charting::encoder::encode_observation;
use crate::charting::symbols::{bleeding_code, mucus_type_code};
use crate::models::{MucusType, Observation, Stamp, StampColor};

/// Map a day's dominant observation to its chart stamp. Peak markers start
/// cleared; the peak-day scan fills them in.
pub fn map_stamp(dominant: &Observation) -> Stamp {
    let (symbolic_code, color, fertile_marker) = if dominant.bleeding.is_bleeding() {
        (
            bleeding_code(dominant.bleeding).to_string(),
            StampColor::Red,
            false,
        )
    } else {
        match dominant.mucus.kind {
            MucusType::Dry => (
                mucus_type_code(MucusType::Dry).to_string(),
                StampColor::Green,
                false,
            ),
            MucusType::MoistNoLubrication
            | MucusType::WetNoLubrication
            | MucusType::ShinyNoLubrication
            | MucusType::LowStretch
            | MucusType::MediumStretch
            | MucusType::HighStretch
            | MucusType::MoistWithLubrication
            | MucusType::ShinyWithLubrication
            | MucusType::WetWithLubrication => {
                (encode_observation(dominant), StampColor::White, true)
            }
        }
    };

    Stamp {
        symbolic_code,
        color,
        fertile_marker,
        is_peak_day: false,
        post_peak_offset: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charting::test_support::{observation, observation_with};
    use crate::models::{BleedingType, Mucus, MucusColor};

    #[test]
    fn bleeding_day_is_red_and_not_fertile() {
        let stamp = map_stamp(&observation("a", BleedingType::Heavy, MucusType::HighStretch));
        assert_eq!(stamp.symbolic_code, "H");
        assert_eq!(stamp.color, StampColor::Red);
        assert!(!stamp.fertile_marker);
    }

    #[test]
    fn dry_day_is_green_zero() {
        let mucus = Mucus::new(MucusType::Dry).with_color(MucusColor::White);
        let stamp = map_stamp(&observation_with("a", BleedingType::None, mucus));
        assert_eq!(stamp.symbolic_code, "0");
        assert_eq!(stamp.color, StampColor::Green);
        assert!(!stamp.fertile_marker);
    }

    #[test]
    fn mucus_day_is_white_and_fertile() {
        let mucus = Mucus::new(MucusType::MediumStretch).with_color(MucusColor::Yellow);
        let stamp = map_stamp(&observation_with("a", BleedingType::None, mucus));
        assert_eq!(stamp.symbolic_code, "8Y");
        assert_eq!(stamp.color, StampColor::White);
        assert!(stamp.fertile_marker);
        assert!(!stamp.is_peak_day);
        assert_eq!(stamp.post_peak_offset, None);
    }
}
