pub mod airport;
pub mod flight;
pub mod grid;
pub mod ground;
pub mod hotel;
pub mod repository;
pub mod train;

pub use repository::FactorRepository;
