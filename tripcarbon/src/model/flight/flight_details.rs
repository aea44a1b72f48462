use super::haul_type::HaulType;
use serde::{Deserialize, Serialize};

/// calculation trail attached to a flight segment result. distances and
/// masses are rounded for display at the response boundary.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FlightEmissionDetails {
    pub distance_km: f64,
    pub haul_type: HaulType,
    pub radiative_forcing_multiplier: f64,
    /// whole-aircraft fuel burn proxy, not per passenger
    pub fuel_burn_kg: f64,
    pub load_factor: f64,
    pub emission_factor_source: String,
    /// carrier fleet-efficiency multiplier, present only when the
    /// detailed method matched the carrier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_adjustment: Option<f64>,
}
