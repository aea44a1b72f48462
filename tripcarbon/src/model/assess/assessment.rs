use crate::model::alternatives::Alternative;
use crate::model::confidence::ConfidenceScore;
use crate::model::flight::FlightEmissionDetails;
use crate::model::hotel::HotelEmissionDetails;
use crate::util::round_ops;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// kg CO₂ absorbed by one mature tree per year
const TREE_KG_PER_YEAR: f64 = 22.0;
/// kg CO₂e per km in an average passenger car
const DRIVING_KG_PER_KM: f64 = 0.1;
/// kg CO₂e per hour of video streaming
const STREAMING_KG_PER_HOUR: f64 = 0.06;

/// the complete result for one itinerary. immutable once built; every
/// emissions figure is rounded to one decimal place here, at the
/// response boundary, while the calculators retain full precision.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Assessment {
    pub assessment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub total_emissions: EmissionsTotal,
    pub confidence_score: ConfidenceScore,
    pub segments: Vec<SegmentResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_impact_alternatives: Option<Vec<Alternative>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<Methodology>,
    pub created_at: DateTime<Utc>,
    /// after this, factor tables should be considered stale
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EmissionsTotal {
    pub co2e_kg: f64,
    /// always "kg_co2e"
    pub unit: String,
    pub breakdown: EmissionBreakdown,
    pub per_traveler_kg: f64,
    pub equivalent: Equivalents,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct EmissionBreakdown {
    pub flights_kg: f64,
    pub hotels_kg: f64,
    pub ground_kg: f64,
    /// nonzero only inside alternative candidate totals
    pub trains_kg: f64,
}

impl EmissionBreakdown {
    pub fn total(&self) -> f64 {
        self.flights_kg + self.hotels_kg + self.ground_kg + self.trains_kg
    }

    pub fn rounded(&self) -> EmissionBreakdown {
        EmissionBreakdown {
            flights_kg: round_ops::round1(self.flights_kg),
            hotels_kg: round_ops::round1(self.hotels_kg),
            ground_kg: round_ops::round1(self.ground_kg),
            trains_kg: round_ops::round1(self.trains_kg),
        }
    }
}

/// relatable yardsticks for a total, from fixed public conversion
/// constants.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct Equivalents {
    pub trees_to_offset: f64,
    pub driving_km: f64,
    pub streaming_hours: f64,
}

impl Equivalents {
    pub fn for_total_kg(total_kg: f64) -> Equivalents {
        Equivalents {
            trees_to_offset: round_ops::round1(total_kg / TREE_KG_PER_YEAR),
            driving_km: round_ops::round0(total_kg / DRIVING_KG_PER_KM),
            streaming_hours: round_ops::round0(total_kg / STREAMING_KG_PER_HOUR),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SegmentResult {
    pub segment_index: usize,
    #[serde(rename = "type")]
    pub segment_type: String,
    pub emissions_kg: f64,
    pub details: SegmentDetails,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum SegmentDetails {
    Flight(FlightEmissionDetails),
    Hotel(HotelEmissionDetails),
}

/// citations for the factor tables behind an assessment.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Methodology {
    pub factors_version: String,
    pub flight: String,
    pub hotel: String,
    pub ground: String,
    pub rail: String,
    pub grid_fallback: String,
    pub radiative_forcing: String,
}

impl Methodology {
    pub fn current(flight_factor_source: &str, factors_version: &str) -> Methodology {
        Methodology {
            factors_version: factors_version.to_string(),
            flight: flight_factor_source.to_string(),
            hotel: String::from("Cornell Hotel Sustainability Benchmarking Index"),
            ground: String::from("DEFRA 2024 greenhouse gas conversion factors"),
            rail: String::from("UIC Railway Handbook and operator sustainability reports"),
            grid_fallback: String::from("IPCC 2024 global average, 475 gCO2/kWh"),
            radiative_forcing: String::from(
                "1.9x multiplier for non-CO2 high-altitude effects",
            ),
        }
    }
}
