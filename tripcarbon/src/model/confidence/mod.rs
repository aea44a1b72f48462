pub mod confidence_factor;
pub mod confidence_scorer;

pub use confidence_factor::{ConfidenceFactor, Impact};
pub use confidence_scorer::{
    calculate_confidence_score, ConfidenceLevel, ConfidenceScore, ScoreInputs,
};
