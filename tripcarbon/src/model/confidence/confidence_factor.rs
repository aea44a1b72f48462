use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

/// one contributor to the confidence score. the list order in a score
/// reflects evaluation order, not importance.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfidenceFactor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

impl ConfidenceFactor {
    pub fn new<F: ToString, D: ToString>(
        factor: F,
        impact: Impact,
        description: D,
    ) -> ConfidenceFactor {
        ConfidenceFactor {
            factor: factor.to_string(),
            impact,
            description: description.to_string(),
        }
    }
}
