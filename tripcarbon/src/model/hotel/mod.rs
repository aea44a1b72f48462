pub mod hotel_calculator;
pub mod hotel_details;

pub use hotel_calculator::{calculate_hotel_emissions, HotelEmissions};
pub use hotel_details::HotelEmissionDetails;
