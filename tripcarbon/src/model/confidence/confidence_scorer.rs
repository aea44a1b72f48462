use super::confidence_factor::{ConfidenceFactor, Impact};
use crate::model::factors::grid::GridQuality;
use crate::model::flight::HaulType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BASE_SCORE: f64 = 0.65;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> ConfidenceLevel {
        if score >= 0.80 {
            ConfidenceLevel::High
        } else if score >= 0.60 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConfidenceScore {
    pub score: f64,
    pub level: ConfidenceLevel,
    pub factors: Vec<ConfidenceFactor>,
}

/// data-quality signals gathered while the calculators ran. everything
/// here is resolved by the orchestrator; the scorer itself reads no
/// clock and traverses nothing unordered, so scoring is reproducible.
#[derive(Debug, Clone, Default)]
pub struct ScoreInputs {
    /// factors already recorded by the per-segment calculators, in
    /// segment order
    pub segment_factors: Vec<ConfidenceFactor>,
    pub has_carrier_data: bool,
    pub has_aircraft_data: bool,
    pub has_hotel_chain_data: bool,
    /// best grid-data quality seen across hotel segments; None when the
    /// itinerary has no hotels, in which case grid quality is not scored
    pub grid_quality: Option<GridQuality>,
    /// haul type of the first flight segment
    pub primary_haul: Option<HaulType>,
    /// any travel date more than ~11 months out, where factor tables
    /// are least reliable
    pub has_far_future_date: bool,
}

/// weighted additive score over the evaluated data-quality factors,
/// clamped to [0, 1]. factor evaluation order is fixed.
pub fn calculate_confidence_score(inputs: &ScoreInputs) -> ConfidenceScore {
    let mut factors = inputs.segment_factors.clone();
    let mut adjustment = 0.0;

    if inputs.has_carrier_data {
        adjustment += 0.05;
        factors.push(ConfidenceFactor::new(
            "airline_specific_data",
            Impact::Positive,
            "Carrier-specific fuel efficiency data used",
        ));
    }

    if inputs.has_aircraft_data {
        adjustment += 0.05;
        factors.push(ConfidenceFactor::new(
            "aircraft_type_known",
            Impact::Positive,
            "Specific aircraft type improves accuracy",
        ));
    }

    match inputs.grid_quality {
        Some(GridQuality::Measured) => {
            adjustment += 0.10;
            factors.push(ConfidenceFactor::new(
                "measured_grid_intensity",
                Impact::Positive,
                "Country has measured grid carbon intensity data",
            ));
        }
        Some(GridQuality::Estimated) => {
            adjustment += 0.03;
            factors.push(ConfidenceFactor::new(
                "estimated_grid_intensity",
                Impact::Neutral,
                "Grid intensity based on regional estimates",
            ));
        }
        Some(GridQuality::Default) => {
            adjustment -= 0.10;
            factors.push(ConfidenceFactor::new(
                "default_grid_intensity",
                Impact::Negative,
                "Using global default for grid intensity",
            ));
        }
        None => {}
    }

    match inputs.primary_haul {
        Some(HaulType::Short) => {
            adjustment += 0.05;
            factors.push(ConfidenceFactor::new(
                "short_haul_accuracy",
                Impact::Positive,
                "Short-haul routes have highest data accuracy",
            ));
        }
        Some(HaulType::Long) => {
            adjustment += 0.02;
            factors.push(ConfidenceFactor::new(
                "long_haul_route",
                Impact::Neutral,
                "Long-haul routes use averaged factors",
            ));
        }
        _ => {}
    }

    if inputs.has_hotel_chain_data {
        adjustment += 0.08;
        factors.push(ConfidenceFactor::new(
            "hotel_chain_data",
            Impact::Positive,
            "Hotel chain-specific sustainability data available",
        ));
    }

    if inputs.has_far_future_date {
        adjustment -= 0.05;
        factors.push(ConfidenceFactor::new(
            "far_future_travel_date",
            Impact::Negative,
            "Travel date beyond factor table forecast horizon",
        ));
    }

    // round before classifying so the reported score and level agree
    // at the thresholds
    let score = ((BASE_SCORE + adjustment).clamp(0.0, 1.0) * 100.0).round() / 100.0;

    ConfidenceScore {
        score,
        level: ConfidenceLevel::from_score(score),
        factors: dedup_by_name(factors),
    }
}

/// keeps the first occurrence of each factor name, preserving order.
fn dedup_by_name(factors: Vec<ConfidenceFactor>) -> Vec<ConfidenceFactor> {
    let mut seen = HashSet::new();
    factors
        .into_iter()
        .filter(|f| seen.insert(f.factor.clone()))
        .collect()
}
