//! Creighton Model charting engine.
//!
//! Raw observations go in; each day comes out with its dominant
//! observation, Creighton display code, chart stamp and peak-day markers.
//!
//! - [`charting`]: the pure classification engine.
//! - [`chart`]: the day-record lifecycle over a mutable set of observations,
//!   in memory ([`Chart`]) or persisted ([`ChartController`]).
//! - [`labels`]: swappable human-readable labels.

pub mod chart;
pub mod charting;
pub mod db;
pub mod labels;
pub mod models;
pub mod settings;
mod utils;

pub use chart::{Chart, ChartController};
pub use charting::{
    aggregate_day, encode_observation, map_stamp, scan_peak_days, ChartingConfig, DayAggregate,
};
pub use db::Database;
pub use labels::{Labels, Locale};
pub use models::{
    BleedingType, DayRecord, Frequency, Mucus, MucusColor, MucusConsistency, MucusType,
    Observation, ObservationInput, Stamp, StampColor,
};
pub use settings::{SettingsStore, UserSettings};
pub use utils::logging::init_logging;
