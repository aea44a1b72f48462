use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// one leg of an itinerary. the discriminator is closed: adding a new
/// segment kind requires extending this enum and every dispatch site.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Flight(FlightSegment),
    Hotel(HotelSegment),
}

impl Segment {
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Flight(_) => "flight",
            Segment::Hotel(_) => "hotel",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FlightSegment {
    /// IATA code, e.g. "LHR"
    pub origin: String,
    /// IATA code, e.g. "CDG"
    pub destination: String,
    pub departure_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin_class: Option<CabinClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub return_trip: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HotelSegment {
    pub location: HotelLocation,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_chain: Option<String>,
    #[serde(default = "default_room_count")]
    pub room_count: u32,
    #[serde(default)]
    pub sustainability_certified: bool,
    #[serde(default)]
    pub breakfast: BreakfastType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_transfer: Option<TransferAddon>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HotelLocation {
    /// ISO 3166-1 alpha-2, e.g. "FR"
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLon>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// ground shuttle between the airport and the hotel, priced from the
/// ground-transport factor table.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TransferAddon {
    /// IATA code of the airport served by the transfer
    pub airport: String,
    #[serde(default)]
    pub vehicle_type: VehicleType,
    #[serde(default = "default_true")]
    pub round_trip: bool,
    /// shared rides are not multiplied by traveler count
    #[serde(default)]
    pub shared: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    /// floor-space allocation multiplier relative to economy.
    pub fn multiplier(&self) -> f64 {
        match self {
            CabinClass::Economy => 1.0,
            CabinClass::PremiumEconomy => 1.5,
            CabinClass::Business => 3.0,
            CabinClass::First => 4.0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BreakfastType {
    #[default]
    None,
    Continental,
    Buffet,
    FullEnglish,
    Vegan,
}

impl BreakfastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakfastType::None => "none",
            BreakfastType::Continental => "continental",
            BreakfastType::Buffet => "buffet",
            BreakfastType::FullEnglish => "full_english",
            BreakfastType::Vegan => "vegan",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    #[default]
    Taxi,
    UberX,
    UberXl,
    UberBlack,
    PrivateCarPetrol,
    PrivateCarDiesel,
    PrivateCarHybrid,
    ElectricCar,
    Bus,
    Coach,
    Metro,
    Tram,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Taxi => "taxi",
            VehicleType::UberX => "uber_x",
            VehicleType::UberXl => "uber_xl",
            VehicleType::UberBlack => "uber_black",
            VehicleType::PrivateCarPetrol => "private_car_petrol",
            VehicleType::PrivateCarDiesel => "private_car_diesel",
            VehicleType::PrivateCarHybrid => "private_car_hybrid",
            VehicleType::ElectricCar => "electric_car",
            VehicleType::Bus => "bus",
            VehicleType::Coach => "coach",
            VehicleType::Metro => "metro",
            VehicleType::Tram => "tram",
        }
    }
}

fn default_room_count() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
