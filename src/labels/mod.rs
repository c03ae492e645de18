//! Human-readable labels for observation attributes.
//!
//! Presentation only: nothing in `charting` reads these, so a label set can
//! be swapped or translated without touching classification.

mod english;
mod portuguese;

use serde::{Deserialize, Serialize};

use crate::charting::symbols::{
    bleeding_code, frequency_code, mucus_color_code, mucus_consistency_code, mucus_type_code,
};
use crate::models::{BleedingType, DayRecord, Frequency, MucusColor, MucusConsistency, MucusType};

pub use english::English;
pub use portuguese::Portuguese;

pub trait Labels: Send + Sync {
    fn bleeding(&self, bleeding: BleedingType) -> &'static str;
    fn mucus_type(&self, kind: MucusType) -> &'static str;
    fn mucus_color(&self, color: MucusColor) -> &'static str;
    fn mucus_consistency(&self, consistency: MucusConsistency) -> &'static str;
    fn frequency(&self, frequency: Frequency) -> &'static str;
    fn intercourse(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub fn labels(&self) -> &'static dyn Labels {
        match self {
            Locale::Pt => &Portuguese,
            Locale::En => &English,
        }
    }
}

/// `"<label> [<code>]"`, or the bare label when there is no code.
pub fn describe(label: &str, code: &str) -> String {
    if code.is_empty() {
        label.to_string()
    } else {
        format!("{label} [{code}]")
    }
}

pub fn describe_bleeding(labels: &dyn Labels, bleeding: BleedingType) -> String {
    describe(labels.bleeding(bleeding), bleeding_code(bleeding))
}

pub fn describe_mucus_type(labels: &dyn Labels, kind: MucusType) -> String {
    describe(labels.mucus_type(kind), mucus_type_code(kind))
}

pub fn describe_mucus_color(labels: &dyn Labels, color: MucusColor) -> String {
    describe(labels.mucus_color(color), mucus_color_code(color))
}

pub fn describe_mucus_consistency(labels: &dyn Labels, consistency: MucusConsistency) -> String {
    describe(
        labels.mucus_consistency(consistency),
        mucus_consistency_code(consistency),
    )
}

pub fn describe_frequency(labels: &dyn Labels, frequency: Frequency) -> String {
    describe(labels.frequency(frequency), frequency_code(frequency))
}

/// Notes for a day: every non-blank user note in insertion order, preceded
/// by the intercourse label when any observation of the day has the flag.
pub fn day_notes(day: &DayRecord, labels: &dyn Labels) -> Vec<String> {
    let mut notes: Vec<String> = day
        .observations
        .iter()
        .filter_map(|o| o.notes.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect();

    if day.has_intercourse() {
        notes.insert(0, labels.intercourse().to_string());
    }

    notes
}
