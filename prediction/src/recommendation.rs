use serde::Serialize;

use crate::model::TrendLabel;

/// Procurement guidance derived from a predicted trend. Total over
/// every label, including unrecognized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    BuyNow,
    Wait,
    ProceedNormally,
}

impl Recommendation {
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::BuyNow => "Prices are expected to rise. Recommendation: buy now to reduce costs.",
            Self::Wait => {
                "Prices are expected to drop. Recommendation: wait before making large purchases."
            }
            Self::ProceedNormally => {
                "Prices are stable. Recommendation: proceed with normal procurement."
            }
        }
    }
}

pub fn recommend(label: &TrendLabel) -> Recommendation {
    match label {
        TrendLabel::High | TrendLabel::VeryHigh => Recommendation::BuyNow,
        TrendLabel::Low | TrendLabel::VeryLow => Recommendation::Wait,
        _ => Recommendation::ProceedNormally,
    }
}
