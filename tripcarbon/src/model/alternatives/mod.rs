pub mod alternatives_engine;
pub mod candidate;
pub mod ranking;

pub use alternatives_engine::generate_alternatives;
pub use candidate::{Alternative, AlternativeSegment, AlternativeStrategy, Savings, Tradeoffs};
