use serde::{Deserialize, Serialize};

/// Tunable thresholds for the peak-day scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartingConfig {
    /// Number of days after a peak day that receive a post-peak offset
    pub post_peak_days: u8,
}

impl Default for ChartingConfig {
    fn default() -> Self {
        Self {
            post_peak_days: 3,
        }
    }
}
