pub mod flight_calculator;
pub mod flight_details;
pub mod haul_type;

pub use flight_calculator::{calculate_flight_emissions, FlightEmissions};
pub use flight_details::FlightEmissionDetails;
pub use haul_type::HaulType;
