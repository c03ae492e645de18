use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Frequency, Observation, Stamp};

/// All observations recorded for one calendar date plus the values derived
/// from them. The derived fields are `None` only when `observations` is
/// empty, which a chart never keeps around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    pub observations: Vec<Observation>,
    pub dominant: Option<Observation>,
    #[serde(rename = "frequencyCode")]
    pub frequency: Option<Frequency>,
    pub display_code: String,
    pub stamp: Option<Stamp>,
}

impl DayRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            observations: Vec::new(),
            dominant: None,
            frequency: None,
            display_code: String::new(),
            stamp: None,
        }
    }

    pub fn is_peak_day(&self) -> bool {
        self.stamp.as_ref().is_some_and(|s| s.is_peak_day)
    }

    pub fn post_peak_offset(&self) -> Option<u8> {
        self.stamp.as_ref().and_then(|s| s.post_peak_offset)
    }

    pub fn has_intercourse(&self) -> bool {
        self.observations.iter().any(|o| o.intercourse)
    }
}
