use serde::{Deserialize, Serialize};

/// Sales prospect as uploaded. Every attribute is present after decode, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub role: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub bio: String,
}

/// Product being sold, used as scoring context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    #[serde(alias = "valueProps", default)]
    pub value_props: Vec<String>,
    #[serde(alias = "idealUseCases")]
    pub ideal_use_cases: String,
}

/// Intent bucket derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentLabel {
    High,
    Medium,
    Low,
}

impl IntentLabel {
    pub const HIGH_THRESHOLD: u32 = 80;
    pub const MEDIUM_THRESHOLD: u32 = 50;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntentLabel::High => "High",
            IntentLabel::Medium => "Medium",
            IntentLabel::Low => "Low",
        }
    }
}

/// Score contribution produced by the external classifier for a single lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierScore {
    High,
    Medium,
    Low,
}

impl ClassifierScore {
    /// Substituted whenever the classifier gave no usable signal.
    pub const FALLBACK: ClassifierScore = ClassifierScore::Medium;

    pub fn points(&self) -> u32 {
        match self {
            ClassifierScore::High => 50,
            ClassifierScore::Medium => 30,
            ClassifierScore::Low => 10,
        }
    }
}

/// Final, immutable scoring output for one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub name: String,
    pub role: String,
    pub company: String,
    pub score: u32,
    pub intent: IntentLabel,
    pub reasoning: String,
}
