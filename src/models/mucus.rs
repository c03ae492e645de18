//! Cervical mucus attributes.
//!
//! `color` and `consistency` only carry information for stretch and
//! lubrication categories, but every combination is representable and the
//! encoder accepts all of them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MucusType {
    #[default]
    Dry,
    MoistNoLubrication,
    WetNoLubrication,
    ShinyNoLubrication,
    LowStretch,
    MediumStretch,
    HighStretch,
    MoistWithLubrication,
    ShinyWithLubrication,
    WetWithLubrication,
}

impl MucusType {
    pub const ALL: [MucusType; 10] = [
        MucusType::Dry,
        MucusType::MoistNoLubrication,
        MucusType::WetNoLubrication,
        MucusType::ShinyNoLubrication,
        MucusType::LowStretch,
        MucusType::MediumStretch,
        MucusType::HighStretch,
        MucusType::MoistWithLubrication,
        MucusType::ShinyWithLubrication,
        MucusType::WetWithLubrication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MucusType::Dry => "dry",
            MucusType::MoistNoLubrication => "moist-no-lubrication",
            MucusType::WetNoLubrication => "wet-no-lubrication",
            MucusType::ShinyNoLubrication => "shiny-no-lubrication",
            MucusType::LowStretch => "low-stretch",
            MucusType::MediumStretch => "medium-stretch",
            MucusType::HighStretch => "high-stretch",
            MucusType::MoistWithLubrication => "moist-with-lubrication",
            MucusType::ShinyWithLubrication => "shiny-with-lubrication",
            MucusType::WetWithLubrication => "wet-with-lubrication",
        }
    }

    /// Stretch and lubrication categories, the ones that can open a peak.
    pub fn is_stretch_or_lubrication(&self) -> bool {
        matches!(
            self,
            MucusType::LowStretch
                | MucusType::MediumStretch
                | MucusType::HighStretch
                | MucusType::MoistWithLubrication
                | MucusType::ShinyWithLubrication
                | MucusType::WetWithLubrication
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MucusColor {
    #[default]
    #[serde(alias = "")]
    None,
    Clear,
    White,
    CloudyClear,
    Yellow,
    Brown,
}

impl MucusColor {
    pub const ALL: [MucusColor; 6] = [
        MucusColor::None,
        MucusColor::Clear,
        MucusColor::White,
        MucusColor::CloudyClear,
        MucusColor::Yellow,
        MucusColor::Brown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MucusColor::None => "none",
            MucusColor::Clear => "clear",
            MucusColor::White => "white",
            MucusColor::CloudyClear => "cloudy-clear",
            MucusColor::Yellow => "yellow",
            MucusColor::Brown => "brown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MucusConsistency {
    #[default]
    #[serde(alias = "")]
    None,
    Pasty,
    Gummy,
}

impl MucusConsistency {
    pub const ALL: [MucusConsistency; 3] = [
        MucusConsistency::None,
        MucusConsistency::Pasty,
        MucusConsistency::Gummy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MucusConsistency::None => "none",
            MucusConsistency::Pasty => "pasty",
            MucusConsistency::Gummy => "gummy",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Mucus {
    #[serde(rename = "type")]
    pub kind: MucusType,
    #[serde(default)]
    pub color: MucusColor,
    #[serde(default)]
    pub consistency: MucusConsistency,
}

impl Mucus {
    pub fn new(kind: MucusType) -> Self {
        Self {
            kind,
            color: MucusColor::None,
            consistency: MucusConsistency::None,
        }
    }

    pub fn with_color(mut self, color: MucusColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_consistency(mut self, consistency: MucusConsistency) -> Self {
        self.consistency = consistency;
        self
    }
}
