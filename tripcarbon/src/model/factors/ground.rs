use crate::model::segment::VehicleType;
use std::collections::HashMap;

/// distance from an airport to its city center, one way, in km.
#[derive(Debug, Clone)]
pub struct TransferDistance {
    pub city: String,
    pub distance_km: f64,
}

/// assumed one-way distance when the airport is not in the table.
pub const DEFAULT_TRANSFER_DISTANCE_KM: f64 = 25.0;

pub const GROUND_FACTOR_SOURCE: &str = "DEFRA 2024";

const TRANSFER_DISTANCES: &[(&str, &str, f64)] = &[
    ("LHR", "London", 25.0),
    ("LGW", "London", 45.0),
    ("CDG", "Paris", 32.0),
    ("ORY", "Paris", 18.0),
    ("FRA", "Frankfurt", 14.0),
    ("MUC", "Munich", 38.0),
    ("AMS", "Amsterdam", 20.0),
    ("FCO", "Rome", 32.0),
    ("MXP", "Milan", 50.0),
    ("BCN", "Barcelona", 18.0),
    ("MAD", "Madrid", 17.0),
    ("DUB", "Dublin", 12.0),
    ("DXB", "Dubai", 15.0),
    ("SIN", "Singapore", 22.0),
    ("NRT", "Tokyo", 70.0),
    ("JFK", "New York", 26.0),
    ("LAX", "Los Angeles", 27.0),
    ("SFO", "San Francisco", 21.0),
    ("ORD", "Chicago", 27.0),
];

#[derive(Debug, Clone)]
pub struct GroundFactorTable {
    transfer_distances: HashMap<String, TransferDistance>,
}

impl GroundFactorTable {
    pub fn builtin() -> GroundFactorTable {
        let transfer_distances = TRANSFER_DISTANCES
            .iter()
            .map(|(code, city, km)| {
                (
                    code.to_string(),
                    TransferDistance {
                        city: city.to_string(),
                        distance_km: *km,
                    },
                )
            })
            .collect();
        GroundFactorTable { transfer_distances }
    }

    /// kg CO₂e per vehicle-km, DEFRA 2024 conversion factors.
    pub fn vehicle_factor_kg_per_km(&self, vehicle: VehicleType) -> f64 {
        match vehicle {
            VehicleType::Taxi => 0.149,
            VehicleType::UberX => 0.121,
            VehicleType::UberXl => 0.180,
            VehicleType::UberBlack => 0.195,
            VehicleType::PrivateCarPetrol => 0.170,
            VehicleType::PrivateCarDiesel => 0.163,
            VehicleType::PrivateCarHybrid => 0.106,
            VehicleType::ElectricCar => 0.053,
            VehicleType::Bus => 0.089,
            VehicleType::Coach => 0.027,
            VehicleType::Metro => 0.029,
            VehicleType::Tram => 0.032,
        }
    }

    /// one-way airport transfer distance; unknown airports use the
    /// default distance with an "Unknown" city label.
    pub fn transfer_distance(&self, airport_code: &str) -> TransferDistance {
        self.transfer_distances
            .get(&airport_code.to_uppercase())
            .cloned()
            .unwrap_or(TransferDistance {
                city: String::from("Unknown"),
                distance_km: DEFAULT_TRANSFER_DISTANCE_KM,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_distance_lookup() {
        let table = GroundFactorTable::builtin();
        assert_eq!(table.transfer_distance("lhr").distance_km, 25.0);
        let unknown = table.transfer_distance("XYZ");
        assert_eq!(unknown.distance_km, DEFAULT_TRANSFER_DISTANCE_KM);
        assert_eq!(unknown.city, "Unknown");
    }

    #[test]
    fn test_vehicle_factor_ordering() {
        let table = GroundFactorTable::builtin();
        // shared and electric modes beat solo combustion vehicles
        assert!(
            table.vehicle_factor_kg_per_km(VehicleType::Coach)
                < table.vehicle_factor_kg_per_km(VehicleType::Taxi)
        );
        assert!(
            table.vehicle_factor_kg_per_km(VehicleType::ElectricCar)
                < table.vehicle_factor_kg_per_km(VehicleType::UberX)
        );
    }
}
