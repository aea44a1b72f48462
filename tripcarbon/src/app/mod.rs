pub mod tripcarbon_app;

pub use tripcarbon_app::{TripcarbonApp, TripcarbonOperation};
