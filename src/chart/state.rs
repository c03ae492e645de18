use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::charting::{build_day_record, scan_peak_days, ChartingConfig};
use crate::models::{DayRecord, Observation};

/// In-memory chart: one day record per date plus the scanned cycle view.
///
/// Every mutation recomputes the touched day and then rescans the whole
/// sequence, since adding or removing one observation can move a peak.
#[derive(Debug, Clone)]
pub struct Chart {
    config: ChartingConfig,
    days: BTreeMap<NaiveDate, DayRecord>,
    view: Vec<DayRecord>,
}

impl Chart {
    pub fn new(config: ChartingConfig) -> Self {
        Self {
            config,
            days: BTreeMap::new(),
            view: Vec::new(),
        }
    }

    /// Build a chart from observations in insertion order.
    pub fn from_observations(
        observations: impl IntoIterator<Item = Observation>,
        config: ChartingConfig,
    ) -> Self {
        let mut grouped: BTreeMap<NaiveDate, Vec<Observation>> = BTreeMap::new();
        for observation in observations {
            grouped.entry(observation.date).or_default().push(observation);
        }

        let days = grouped
            .into_iter()
            .map(|(date, list)| (date, build_day_record(date, list)))
            .collect();

        let mut chart = Self {
            config,
            days,
            view: Vec::new(),
        };
        chart.rescan();
        chart
    }

    pub fn config(&self) -> &ChartingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartingConfig) {
        self.config = config;
        self.rescan();
    }

    pub fn add(&mut self, observation: Observation) {
        let date = observation.date;
        let mut list = self
            .days
            .remove(&date)
            .map(|day| day.observations)
            .unwrap_or_default();
        list.push(observation);

        self.days.insert(date, build_day_record(date, list));
        self.rescan();
    }

    /// Remove an observation by id. The day disappears with its last
    /// observation.
    pub fn remove(&mut self, id: &str) -> Option<Observation> {
        let date = self
            .days
            .values()
            .find(|day| day.observations.iter().any(|o| o.id == id))
            .map(|day| day.date)?;

        let mut list = self.days.remove(&date)?.observations;
        let index = list.iter().position(|o| o.id == id)?;
        let removed = list.remove(index);

        if !list.is_empty() {
            self.days.insert(date, build_day_record(date, list));
        }
        self.rescan();

        Some(removed)
    }

    /// Chronologically sorted days with peak markers filled in.
    pub fn days(&self) -> &[DayRecord] {
        &self.view
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.view.iter().find(|d| d.date == date)
    }

    pub fn observations_on(&self, date: NaiveDate) -> &[Observation] {
        self.day(date)
            .map(|d| d.observations.as_slice())
            .unwrap_or_default()
    }

    /// Days of one calendar month. Peak markers come from the full
    /// sequence, so a peak at the end of the previous month still marks
    /// the first days of this one.
    pub fn month(&self, year: i32, month: u32) -> Vec<DayRecord> {
        self.view
            .iter()
            .filter(|d| d.date.year() == year && d.date.month() == month)
            .cloned()
            .collect()
    }

    pub fn observation_count(&self) -> usize {
        self.days.values().map(|d| d.observations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn rescan(&mut self) {
        let days = self.days.values().cloned().collect();
        self.view = scan_peak_days(days, &self.config);
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartingConfig::default())
    }
}
