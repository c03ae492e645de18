use crate::models::{BleedingType, Frequency, MucusColor, MucusConsistency, MucusType};

use super::Labels;

pub struct Portuguese;

impl Labels for Portuguese {
    fn bleeding(&self, bleeding: BleedingType) -> &'static str {
        match bleeding {
            BleedingType::None => "Nenhum",
            BleedingType::VeryLight => "Muito ligeiro (spotting)",
            BleedingType::Light => "Ligeiro",
            BleedingType::Moderate => "Moderado",
            BleedingType::Heavy => "Abundante",
            BleedingType::Brown => "Castanho/Preto",
        }
    }

    fn mucus_type(&self, kind: MucusType) -> &'static str {
        match kind {
            MucusType::Dry => "Seco",
            MucusType::MoistNoLubrication => "Húmido sem lubrificação",
            MucusType::WetNoLubrication => "Molhado sem lubrificação",
            MucusType::ShinyNoLubrication => "Brilhante sem lubrificação",
            MucusType::LowStretch => "Elasticidade pequena",
            MucusType::MediumStretch => "Elasticidade média",
            MucusType::HighStretch => "Elasticidade alta",
            MucusType::MoistWithLubrication => "Húmido com lubrificação",
            MucusType::ShinyWithLubrication => "Brilhante com lubrificação",
            MucusType::WetWithLubrication => "Molhado com lubrificação",
        }
    }

    fn mucus_color(&self, color: MucusColor) -> &'static str {
        match color {
            MucusColor::None => "",
            MucusColor::Clear => "Transparente",
            MucusColor::White => "Opaco (branco)",
            MucusColor::CloudyClear => "Opaco e transparente",
            MucusColor::Yellow => "Amarelo (ou amarelo claro)",
            MucusColor::Brown => "Castanho (ou negro)",
        }
    }

    fn mucus_consistency(&self, consistency: MucusConsistency) -> &'static str {
        match consistency {
            MucusConsistency::None => "",
            MucusConsistency::Pasty => "Pastoso",
            MucusConsistency::Gummy => "Goma",
        }
    }

    fn frequency(&self, frequency: Frequency) -> &'static str {
        match frequency {
            Frequency::Once => "Uma vez no dia",
            Frequency::Twice => "Duas vezes no dia",
            Frequency::Three => "Três vezes no dia",
            Frequency::AllDay => "Todo o dia",
        }
    }

    fn intercourse(&self) -> &'static str {
        "Contacto sexual"
    }
}
