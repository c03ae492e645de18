use std::cmp::Ordering;

use crate::models::{BleedingType, MucusType, Observation};

/// Mucus types from least to most fertile.
pub const MUCUS_PRIORITY: [MucusType; 10] = [
    MucusType::Dry,
    MucusType::MoistNoLubrication,
    MucusType::WetNoLubrication,
    MucusType::ShinyNoLubrication,
    MucusType::LowStretch,
    MucusType::MediumStretch,
    MucusType::HighStretch,
    MucusType::MoistWithLubrication,
    MucusType::ShinyWithLubrication,
    MucusType::WetWithLubrication,
];

/// Bleeding types from least to most significant.
pub const BLEEDING_PRIORITY: [BleedingType; 6] = [
    BleedingType::None,
    BleedingType::VeryLight,
    BleedingType::Light,
    BleedingType::Moderate,
    BleedingType::Heavy,
    BleedingType::Brown,
];

/// Index of `kind` in [`MUCUS_PRIORITY`].
pub fn mucus_rank(kind: MucusType) -> usize {
    match kind {
        MucusType::Dry => 0,
        MucusType::MoistNoLubrication => 1,
        MucusType::WetNoLubrication => 2,
        MucusType::ShinyNoLubrication => 3,
        MucusType::LowStretch => 4,
        MucusType::MediumStretch => 5,
        MucusType::HighStretch => 6,
        MucusType::MoistWithLubrication => 7,
        MucusType::ShinyWithLubrication => 8,
        MucusType::WetWithLubrication => 9,
    }
}

/// Index of `bleeding` in [`BLEEDING_PRIORITY`].
pub fn bleeding_rank(bleeding: BleedingType) -> usize {
    match bleeding {
        BleedingType::None => 0,
        BleedingType::VeryLight => 1,
        BleedingType::Light => 2,
        BleedingType::Moderate => 3,
        BleedingType::Heavy => 4,
        BleedingType::Brown => 5,
    }
}

/// Compare two observations by significance: mucus rank first, bleeding
/// rank on ties. Mucus always dominates, so a bleeding observation can rank
/// below a mucus one.
pub fn compare_significance(a: &Observation, b: &Observation) -> Ordering {
    mucus_rank(a.mucus.kind)
        .cmp(&mucus_rank(b.mucus.kind))
        .then_with(|| bleeding_rank(a.bleeding).cmp(&bleeding_rank(b.bleeding)))
}

/// Most significant observation in `observations`. Ties keep the earlier one.
pub fn most_significant(observations: &[Observation]) -> Option<&Observation> {
    observations.iter().reduce(|most, current| {
        if compare_significance(current, most) == Ordering::Greater {
            current
        } else {
            most
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charting::test_support::observation;

    #[test]
    fn priority_tables_cover_every_variant() {
        for kind in MucusType::ALL {
            assert!(MUCUS_PRIORITY.contains(&kind));
        }
        for bleeding in BleedingType::ALL {
            assert!(BLEEDING_PRIORITY.contains(&bleeding));
        }
    }

    #[test]
    fn ranks_match_priority_table_positions() {
        for (index, kind) in MUCUS_PRIORITY.into_iter().enumerate() {
            assert_eq!(mucus_rank(kind), index, "{kind:?}");
        }
        for (index, bleeding) in BLEEDING_PRIORITY.into_iter().enumerate() {
            assert_eq!(bleeding_rank(bleeding), index, "{bleeding:?}");
        }
    }

    #[test]
    fn ranks_follow_table_order() {
        assert_eq!(mucus_rank(MucusType::Dry), 0);
        assert_eq!(mucus_rank(MucusType::HighStretch), 6);
        assert_eq!(mucus_rank(MucusType::WetWithLubrication), 9);
        assert_eq!(bleeding_rank(BleedingType::None), 0);
        assert_eq!(bleeding_rank(BleedingType::Brown), 5);
    }

    #[test]
    fn mucus_rank_dominates_bleeding() {
        let bleeding = observation("a", BleedingType::Heavy, MucusType::Dry);
        let stretchy = observation("b", BleedingType::None, MucusType::LowStretch);
        assert_eq!(compare_significance(&stretchy, &bleeding), Ordering::Greater);
    }

    #[test]
    fn bleeding_breaks_mucus_ties() {
        let light = observation("a", BleedingType::Light, MucusType::Dry);
        let heavy = observation("b", BleedingType::Heavy, MucusType::Dry);
        let list = vec![light, heavy];
        assert_eq!(most_significant(&list).map(|o| o.id.as_str()), Some("b"));
    }

    #[test]
    fn earlier_observation_wins_full_ties() {
        let first = observation("first", BleedingType::None, MucusType::MediumStretch);
        let second = observation("second", BleedingType::None, MucusType::MediumStretch);
        let list = vec![first, second];
        assert_eq!(
            most_significant(&list).map(|o| o.id.as_str()),
            Some("first")
        );
    }

    #[test]
    fn empty_list_has_no_dominant() {
        assert!(most_significant(&[]).is_none());
    }
}
