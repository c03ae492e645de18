use serde::{Deserialize, Serialize};

/// How many times per day the dominant observation pattern recurred.
///
/// Serialized as the chart notation code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Frequency {
    #[serde(rename = "X1")]
    Once,
    #[serde(rename = "X2")]
    Twice,
    #[serde(rename = "X3")]
    Three,
    #[serde(rename = "AD")]
    AllDay,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Once,
        Frequency::Twice,
        Frequency::Three,
        Frequency::AllDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Once => "once",
            Frequency::Twice => "twice",
            Frequency::Three => "three",
            Frequency::AllDay => "all_day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charting::symbols::frequency_code;

    #[test]
    fn serializes_as_the_chart_code() {
        for frequency in Frequency::ALL {
            let json = serde_json::to_value(frequency).unwrap();
            assert_eq!(json, frequency_code(frequency));
            let back: Frequency = serde_json::from_value(json).unwrap();
            assert_eq!(back, frequency);
        }
    }
}
