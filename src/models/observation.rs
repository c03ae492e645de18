//! Observation data models.
//!
//! - `Observation`: one stored record, immutable once created.
//! - `ObservationInput`: the same record before it has been assigned an id.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{BleedingType, Mucus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub bleeding: BleedingType,
    pub mucus: Mucus,
    #[serde(default)]
    pub intercourse: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Observation {
    /// Two observations are equivalent when every classified attribute
    /// matches. Time, notes and the intercourse flag are ignored.
    pub fn is_equivalent(&self, other: &Observation) -> bool {
        self.bleeding == other.bleeding && self.mucus == other.mucus
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub bleeding: BleedingType,
    pub mucus: Mucus,
    #[serde(default)]
    pub intercourse: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ObservationInput {
    pub fn into_observation(self, id: String) -> Observation {
        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Observation {
            id,
            date: self.date,
            time: self.time,
            bleeding: self.bleeding,
            mucus: self.mucus,
            intercourse: self.intercourse,
            notes,
        }
    }
}
