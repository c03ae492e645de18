use crate::models::{BleedingType, Frequency, MucusColor, MucusConsistency, MucusType};

use super::Labels;

pub struct English;

impl Labels for English {
    fn bleeding(&self, bleeding: BleedingType) -> &'static str {
        match bleeding {
            BleedingType::None => "None",
            BleedingType::VeryLight => "Very light (spotting)",
            BleedingType::Light => "Light",
            BleedingType::Moderate => "Moderate",
            BleedingType::Heavy => "Heavy",
            BleedingType::Brown => "Brown/Black",
        }
    }

    fn mucus_type(&self, kind: MucusType) -> &'static str {
        match kind {
            MucusType::Dry => "Dry",
            MucusType::MoistNoLubrication => "Moist without lubrication",
            MucusType::WetNoLubrication => "Wet without lubrication",
            MucusType::ShinyNoLubrication => "Shiny without lubrication",
            MucusType::LowStretch => "Sticky",
            MucusType::MediumStretch => "Tacky",
            MucusType::HighStretch => "Stretchy",
            MucusType::MoistWithLubrication => "Damp with lubrication",
            MucusType::ShinyWithLubrication => "Shiny with lubrication",
            MucusType::WetWithLubrication => "Wet with lubrication",
        }
    }

    fn mucus_color(&self, color: MucusColor) -> &'static str {
        match color {
            MucusColor::None => "",
            MucusColor::Clear => "Clear",
            MucusColor::White => "Cloudy (white)",
            MucusColor::CloudyClear => "Cloudy/clear",
            MucusColor::Yellow => "Yellow (even pale yellow)",
            MucusColor::Brown => "Brown (or black)",
        }
    }

    fn mucus_consistency(&self, consistency: MucusConsistency) -> &'static str {
        match consistency {
            MucusConsistency::None => "",
            MucusConsistency::Pasty => "Pasty (creamy)",
            MucusConsistency::Gummy => "Gummy (gluey)",
        }
    }

    fn frequency(&self, frequency: Frequency) -> &'static str {
        match frequency {
            Frequency::Once => "Seen only once that day",
            Frequency::Twice => "Seen twice that day",
            Frequency::Three => "Seen three times that day",
            Frequency::AllDay => "Seen all day",
        }
    }

    fn intercourse(&self) -> &'static str {
        "Intercourse"
    }
}
