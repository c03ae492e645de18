use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BleedingType {
    #[default]
    None,
    VeryLight,
    Light,
    Moderate,
    Heavy,
    Brown,
}

impl BleedingType {
    pub const ALL: [BleedingType; 6] = [
        BleedingType::None,
        BleedingType::VeryLight,
        BleedingType::Light,
        BleedingType::Moderate,
        BleedingType::Heavy,
        BleedingType::Brown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BleedingType::None => "none",
            BleedingType::VeryLight => "very-light",
            BleedingType::Light => "light",
            BleedingType::Moderate => "moderate",
            BleedingType::Heavy => "heavy",
            BleedingType::Brown => "brown",
        }
    }

    pub fn is_bleeding(&self) -> bool {
        *self != BleedingType::None
    }
}
