use crate::model::assess::EmissionBreakdown;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeStrategy {
    RailSubstitution,
    EcoHotel,
    Combined,
}

impl AlternativeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlternativeStrategy::RailSubstitution => "rail_substitution",
            AlternativeStrategy::EcoHotel => "eco_hotel",
            AlternativeStrategy::Combined => "combined",
        }
    }
}

/// a candidate substitute itinerary. only candidates strictly below the
/// original total survive generation, so `savings.absolute_kg > 0`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Alternative {
    pub alternative_id: String,
    pub strategy: AlternativeStrategy,
    pub total: AlternativeTotal,
    pub savings: Savings,
    pub segments: Vec<AlternativeSegment>,
    pub tradeoffs: Tradeoffs,
    pub recommendation_reason: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AlternativeTotal {
    pub co2e_kg: f64,
    pub breakdown: EmissionBreakdown,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Savings {
    pub absolute_kg: f64,
    pub percentage: f64,
    pub label: String,
}

impl Savings {
    pub fn label_for_percentage(percentage: f64) -> &'static str {
        if percentage >= 50.0 {
            "high"
        } else if percentage >= 20.0 {
            "medium"
        } else {
            "low"
        }
    }
}

/// one replaced segment inside a candidate.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AlternativeSegment {
    pub segment_index: usize,
    pub change: String,
    pub description: String,
    pub original_kg: f64,
    pub alternative_kg: f64,
}

/// fixed-formula heuristics, not quotes. comfort is a 0-5 rating.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct Tradeoffs {
    pub time_difference_minutes: i64,
    pub estimated_cost_difference_eur: f64,
    pub comfort_score: f64,
}

impl Tradeoffs {
    /// ranking tiebreaker; lower means less disruptive.
    pub fn comfort_penalty(&self) -> f64 {
        5.0 - self.comfort_score
    }
}
