use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StampColor {
    Red,
    Green,
    White,
}

impl StampColor {
    pub fn hex(&self) -> &'static str {
        match self {
            StampColor::Red => "#dc3545",
            StampColor::Green => "#28a745",
            StampColor::White => "#ffffff",
        }
    }

    /// Foreground color that stays readable on top of this stamp.
    pub fn text_color(&self) -> &'static str {
        match self {
            StampColor::White => "#000000",
            StampColor::Red | StampColor::Green => "#ffffff",
        }
    }
}

/// Chart marker for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub symbolic_code: String,
    pub color: StampColor,
    pub fertile_marker: bool,
    pub is_peak_day: bool,
    pub post_peak_offset: Option<u8>,
}
