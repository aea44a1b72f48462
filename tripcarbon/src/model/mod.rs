pub mod alternatives;
pub mod assess;
pub mod assess_error;
pub mod confidence;
pub mod factors;
pub mod flight;
pub mod hotel;
pub mod segment;
pub mod train;
