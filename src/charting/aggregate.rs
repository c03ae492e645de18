use chrono::NaiveDate;
use serde::Serialize;

use crate::charting::{
    encoder::encode_observation, ranking::most_significant, stamp::map_stamp,
    symbols::frequency_code,
};
use crate::models::{DayRecord, Frequency, Observation};

/// Summary of one calendar day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayAggregate {
    pub dominant: Observation,
    #[serde(rename = "frequencyCode")]
    pub frequency: Frequency,
    pub display_code: String,
}

/// Map a count of equivalent observations to a frequency.
pub fn frequency_for_count(count: usize) -> Frequency {
    match count {
        0 | 1 => Frequency::Once,
        2 => Frequency::Twice,
        3 => Frequency::Three,
        _ => Frequency::AllDay,
    }
}

/// Select the dominant observation of a day and derive its frequency and
/// display code. Returns `None` for an empty day.
pub fn aggregate_day(observations: &[Observation]) -> Option<DayAggregate> {
    let dominant = most_significant(observations)?;

    let equivalent_count = observations
        .iter()
        .filter(|o| o.is_equivalent(dominant))
        .count();
    let frequency = frequency_for_count(equivalent_count);

    let display_code = format!(
        "{} {}",
        encode_observation(dominant),
        frequency_code(frequency)
    );

    Some(DayAggregate {
        dominant: dominant.clone(),
        frequency,
        display_code,
    })
}

/// Build a day record with every per-day derived field filled in. Peak
/// markers stay cleared until the sequence is scanned.
pub fn build_day_record(date: NaiveDate, observations: Vec<Observation>) -> DayRecord {
    let Some(aggregate) = aggregate_day(&observations) else {
        return DayRecord::empty(date);
    };

    let stamp = map_stamp(&aggregate.dominant);
    DayRecord {
        date,
        observations,
        dominant: Some(aggregate.dominant),
        frequency: Some(aggregate.frequency),
        display_code: aggregate.display_code,
        stamp: Some(stamp),
    }
}
