use crate::model::segment::Segment;
use serde::{Deserialize, Serialize};

/// which factor variant the calculators apply.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// industry-average factors
    #[default]
    Standard,
    /// carrier fleet-efficiency adjustments where available
    Detailed,
    /// upper-bound factors for worst-case reporting
    Conservative,
}

/// one itinerary to assess.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AssessRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    #[serde(default = "default_traveler_count")]
    pub traveler_count: u32,
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub options: AssessOptions,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AssessOptions {
    #[serde(default)]
    pub include_alternatives: bool,
    #[serde(default = "default_alternative_count")]
    pub alternative_count: u32,
    #[serde(default)]
    pub include_methodology: bool,
    /// when set, hotels in countries without grid data are an error
    /// instead of falling back to the global average
    #[serde(default)]
    pub strict_grid_data: bool,
    #[serde(default)]
    pub calculation_method: CalculationMethod,
}

impl Default for AssessOptions {
    fn default() -> AssessOptions {
        AssessOptions {
            include_alternatives: false,
            alternative_count: default_alternative_count(),
            include_methodology: false,
            strict_grid_data: false,
            calculation_method: CalculationMethod::default(),
        }
    }
}

fn default_traveler_count() -> u32 {
    1
}

fn default_alternative_count() -> u32 {
    3
}
