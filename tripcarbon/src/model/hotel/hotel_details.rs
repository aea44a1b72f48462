use serde::{Deserialize, Serialize};

/// calculation trail attached to a hotel segment result.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HotelEmissionDetails {
    pub nights: i64,
    pub rooms: u32,
    pub star_rating: u8,
    pub emissions_per_night_kg: f64,
    pub energy_consumption_kwh: f64,
    pub grid_carbon_intensity: GridIntensityDetail,
    pub emission_factor_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<BreakfastDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_transfer: Option<TransferDetail>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GridIntensityDetail {
    pub country: String,
    pub value_g_per_kwh: f64,
    pub source: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BreakfastDetail {
    pub breakfast_type: String,
    pub emissions_kg: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TransferDetail {
    pub airport: String,
    pub city: String,
    pub vehicle_type: String,
    pub distance_km: f64,
    pub round_trip: bool,
    pub shared: bool,
    pub emissions_kg: f64,
}
