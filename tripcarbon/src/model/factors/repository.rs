use super::airport::{builtin_airports, Airport};
use super::flight::FlightFactorTable;
use super::grid::GridIntensityTable;
use super::ground::GroundFactorTable;
use super::hotel::HotelFactorTable;
use super::train::TrainRouteTable;
use crate::model::assess_error::AssessError;
use std::collections::HashMap;

/// all static reference tables behind the engine. constructed once at
/// process start and shared read-only across requests; nothing in here
/// is mutated during assessment.
#[derive(Debug, Clone)]
pub struct FactorRepository {
    airports: HashMap<String, Airport>,
    pub flight_factors: FlightFactorTable,
    pub grid: GridIntensityTable,
    pub hotel: HotelFactorTable,
    pub trains: TrainRouteTable,
    pub ground: GroundFactorTable,
}

impl FactorRepository {
    /// repository with the embedded 2024 factor snapshot.
    pub fn builtin() -> FactorRepository {
        FactorRepository {
            airports: builtin_airports(),
            flight_factors: FlightFactorTable::builtin(),
            grid: GridIntensityTable::builtin(),
            hotel: HotelFactorTable::builtin(),
            trains: TrainRouteTable::builtin(),
            ground: GroundFactorTable::builtin(),
        }
    }

    /// repository with the flight factor table replaced by a TOML
    /// override, e.g. a newer published factor revision.
    pub fn with_flight_factors_toml(document: &str) -> Result<FactorRepository, AssessError> {
        let mut repository = FactorRepository::builtin();
        repository.flight_factors = FlightFactorTable::from_toml_str(document)?;
        Ok(repository)
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&code.to_uppercase())
    }

    /// display city for an airport code, falling back to the code itself.
    pub fn city_name(&self, code: &str) -> String {
        self.airport(code)
            .map(|airport| airport.city.clone())
            .unwrap_or_else(|| code.to_uppercase())
    }
}

impl Default for FactorRepository {
    fn default() -> Self {
        Self::builtin()
    }
}
