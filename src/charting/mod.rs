//! Observation classification and cycle analysis.
//!
//! Data flows one way: each observation is encoded, each day is aggregated
//! to its dominant observation and stamp, and the ordered day sequence is
//! scanned for peak days.

pub mod aggregate;
pub mod config;
pub mod encoder;
pub mod peak;
pub mod ranking;
pub mod stamp;
pub mod symbols;

pub use aggregate::{aggregate_day, build_day_record, DayAggregate};
pub use config::ChartingConfig;
pub use encoder::encode_observation;
pub use peak::scan_peak_days;
pub use stamp::map_stamp;
