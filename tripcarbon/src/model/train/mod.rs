pub mod booking_links;
pub mod train_comparison;

pub use booking_links::{booking_links, BookingLink};
pub use train_comparison::{
    compare_train_vs_flight, estimate_flight_minutes, TrainComparison,
};
