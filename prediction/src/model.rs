use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub type GenericError = Box<dyn Error + Send + Sync>;

/// Fixed prefix carried by every rule block annotation on disk,
/// e.g. "price:High". Stripped before the label reaches callers.
pub const ANNOTATION_PREFIX: &str = "price:";

/// Per-material collection of precomputed scoring rules, loaded once
/// at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleModel {
    #[serde(rename = "AggregatedRules")]
    pub aggregated_rules: Vec<RuleBlock>,
}

/// One candidate outcome: a prefixed label plus the rules that vote
/// for it. `rules` is non-empty by contract; the scorer rejects
/// blocks that violate this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBlock {
    #[serde(rename = "Annotation")]
    pub annotation: String,
    #[serde(rename = "Rules")]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "Score")]
    pub score: f64,
}

/// Categorical price-trend outcome. The five known labels form a
/// closed set; anything else is carried through unmodified so the
/// display layer can still render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrendLabel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Other(String),
}

impl TrendLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::VeryLow => "Very_Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very_High",
            Self::Other(label) => label,
        }
    }

    /// Human-readable form for the UI layer.
    pub fn display_name(&self) -> String {
        match self {
            Self::VeryLow => "Very Low".to_string(),
            Self::Low => "Low".to_string(),
            Self::Medium => "Medium".to_string(),
            Self::High => "High".to_string(),
            Self::VeryHigh => "Very High".to_string(),
            Self::Other(label) => label.clone(),
        }
    }
}

impl From<&str> for TrendLabel {
    fn from(value: &str) -> Self {
        match value {
            "Very_Low" => Self::VeryLow,
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Very_High" => Self::VeryHigh,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TrendLabel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TrendLabel> for String {
    fn from(value: TrendLabel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username/password pair for the remote prediction service. Used
/// once per prediction request; never stored beyond the call.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One entry of a remote prediction result. The service defines the
/// full shape; only `label` is interpreted locally, everything else
/// rides along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
