use serde::{Deserialize, Serialize};

/// rail service class keying the per-passenger-km emission factor.
/// UIC Railway Handbook and operator sustainability reports.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RailService {
    Eurostar,
    Tgv,
    Ice,
    EuHighSpeed,
    EuConventional,
    UkRail,
    Diesel,
}

impl RailService {
    pub fn factor_kg_per_km(&self) -> f64 {
        match self {
            RailService::Eurostar => 0.004,
            RailService::Tgv => 0.003,
            RailService::Ice => 0.032,
            RailService::EuHighSpeed => 0.015,
            RailService::EuConventional => 0.041,
            RailService::UkRail => 0.035,
            RailService::Diesel => 0.089,
        }
    }
}

/// one direct rail connection between two airport catchments. stored in
/// the canonical direction; lookups match either direction.
#[derive(Debug, Clone)]
pub struct TrainRoute {
    pub origin: &'static str,
    pub destination: &'static str,
    pub operator: &'static str,
    pub service: RailService,
    pub origin_station: &'static str,
    pub destination_station: &'static str,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub high_speed: bool,
    pub typical_price_eur: f64,
}

/// a lookup hit; `reversed` indicates the query direction was opposite
/// to the stored one, so the station endpoints swap.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub route: &'a TrainRoute,
    pub reversed: bool,
}

impl RouteMatch<'_> {
    pub fn origin_station(&self) -> &str {
        if self.reversed {
            self.route.destination_station
        } else {
            self.route.origin_station
        }
    }

    pub fn destination_station(&self) -> &str {
        if self.reversed {
            self.route.origin_station
        } else {
            self.route.destination_station
        }
    }

    /// per-passenger emissions for one crossing of this route.
    pub fn emissions_kg_per_passenger(&self) -> f64 {
        self.route.distance_km * self.route.service.factor_kg_per_km()
    }
}

const TRAIN_ROUTES: &[TrainRoute] = &[
    TrainRoute {
        origin: "LHR",
        destination: "CDG",
        operator: "Eurostar",
        service: RailService::Eurostar,
        origin_station: "London St Pancras",
        destination_station: "Paris Gare du Nord",
        distance_km: 459.0,
        duration_minutes: 137,
        high_speed: true,
        typical_price_eur: 80.0,
    },
    TrainRoute {
        origin: "LHR",
        destination: "BRU",
        operator: "Eurostar",
        service: RailService::Eurostar,
        origin_station: "London St Pancras",
        destination_station: "Bruxelles-Midi",
        distance_km: 373.0,
        duration_minutes: 122,
        high_speed: true,
        typical_price_eur: 70.0,
    },
    TrainRoute {
        origin: "LHR",
        destination: "AMS",
        operator: "Eurostar",
        service: RailService::Eurostar,
        origin_station: "London St Pancras",
        destination_station: "Amsterdam Centraal",
        distance_km: 450.0,
        duration_minutes: 229,
        high_speed: true,
        typical_price_eur: 85.0,
    },
    TrainRoute {
        origin: "CDG",
        destination: "LYS",
        operator: "TGV",
        service: RailService::Tgv,
        origin_station: "Paris Gare de Lyon",
        destination_station: "Lyon Part-Dieu",
        distance_km: 470.0,
        duration_minutes: 120,
        high_speed: true,
        typical_price_eur: 55.0,
    },
    TrainRoute {
        origin: "CDG",
        destination: "MRS",
        operator: "TGV",
        service: RailService::Tgv,
        origin_station: "Paris Gare de Lyon",
        destination_station: "Marseille St-Charles",
        distance_km: 775.0,
        duration_minutes: 195,
        high_speed: true,
        typical_price_eur: 70.0,
    },
    TrainRoute {
        origin: "CDG",
        destination: "BCN",
        operator: "TGV",
        service: RailService::Tgv,
        origin_station: "Paris Gare de Lyon",
        destination_station: "Barcelona Sants",
        distance_km: 1050.0,
        duration_minutes: 390,
        high_speed: true,
        typical_price_eur: 90.0,
    },
    TrainRoute {
        origin: "CDG",
        destination: "BRU",
        operator: "Thalys",
        service: RailService::Tgv,
        origin_station: "Paris Gare du Nord",
        destination_station: "Bruxelles-Midi",
        distance_km: 310.0,
        duration_minutes: 82,
        high_speed: true,
        typical_price_eur: 45.0,
    },
    TrainRoute {
        origin: "CDG",
        destination: "AMS",
        operator: "Thalys",
        service: RailService::EuHighSpeed,
        origin_station: "Paris Gare du Nord",
        destination_station: "Amsterdam Centraal",
        distance_km: 500.0,
        duration_minutes: 195,
        high_speed: true,
        typical_price_eur: 60.0,
    },
    TrainRoute {
        origin: "CDG",
        destination: "FRA",
        operator: "ICE/TGV",
        service: RailService::Ice,
        origin_station: "Paris Est",
        destination_station: "Frankfurt Hbf",
        distance_km: 479.0,
        duration_minutes: 232,
        high_speed: true,
        typical_price_eur: 60.0,
    },
    TrainRoute {
        origin: "FRA",
        destination: "MUC",
        operator: "ICE",
        service: RailService::Ice,
        origin_station: "Frankfurt Hbf",
        destination_station: "München Hbf",
        distance_km: 400.0,
        duration_minutes: 195,
        high_speed: true,
        typical_price_eur: 50.0,
    },
    TrainRoute {
        origin: "FRA",
        destination: "BER",
        operator: "ICE",
        service: RailService::Ice,
        origin_station: "Frankfurt Hbf",
        destination_station: "Berlin Hbf",
        distance_km: 550.0,
        duration_minutes: 240,
        high_speed: true,
        typical_price_eur: 55.0,
    },
    TrainRoute {
        origin: "FRA",
        destination: "CGN",
        operator: "ICE",
        service: RailService::Ice,
        origin_station: "Frankfurt Hbf",
        destination_station: "Köln Hbf",
        distance_km: 190.0,
        duration_minutes: 62,
        high_speed: true,
        typical_price_eur: 35.0,
    },
    TrainRoute {
        origin: "MUC",
        destination: "VIE",
        operator: "ICE/ÖBB",
        service: RailService::Ice,
        origin_station: "München Hbf",
        destination_station: "Wien Hbf",
        distance_km: 430.0,
        duration_minutes: 240,
        high_speed: true,
        typical_price_eur: 60.0,
    },
    TrainRoute {
        origin: "FCO",
        destination: "MXP",
        operator: "Frecciarossa",
        service: RailService::EuHighSpeed,
        origin_station: "Roma Termini",
        destination_station: "Milano Centrale",
        distance_km: 600.0,
        duration_minutes: 175,
        high_speed: true,
        typical_price_eur: 55.0,
    },
    TrainRoute {
        origin: "MXP",
        destination: "VCE",
        operator: "Frecciarossa",
        service: RailService::EuHighSpeed,
        origin_station: "Milano Centrale",
        destination_station: "Venezia Santa Lucia",
        distance_km: 270.0,
        duration_minutes: 145,
        high_speed: true,
        typical_price_eur: 40.0,
    },
    TrainRoute {
        origin: "MAD",
        destination: "BCN",
        operator: "AVE",
        service: RailService::EuHighSpeed,
        origin_station: "Madrid Puerta de Atocha",
        destination_station: "Barcelona Sants",
        distance_km: 620.0,
        duration_minutes: 155,
        high_speed: true,
        typical_price_eur: 50.0,
    },
    TrainRoute {
        origin: "ZRH",
        destination: "MXP",
        operator: "SBB/Trenitalia",
        service: RailService::EuConventional,
        origin_station: "Zürich HB",
        destination_station: "Milano Centrale",
        distance_km: 280.0,
        duration_minutes: 205,
        high_speed: false,
        typical_price_eur: 45.0,
    },
    TrainRoute {
        origin: "VIE",
        destination: "PRG",
        operator: "ÖBB/ČD",
        service: RailService::EuConventional,
        origin_station: "Wien Hbf",
        destination_station: "Praha hl.n.",
        distance_km: 330.0,
        duration_minutes: 240,
        high_speed: false,
        typical_price_eur: 40.0,
    },
    TrainRoute {
        origin: "BRU",
        destination: "AMS",
        operator: "Thalys/NS",
        service: RailService::EuHighSpeed,
        origin_station: "Bruxelles-Midi",
        destination_station: "Amsterdam Centraal",
        distance_km: 210.0,
        duration_minutes: 113,
        high_speed: true,
        typical_price_eur: 35.0,
    },
];

#[derive(Debug, Clone)]
pub struct TrainRouteTable {
    routes: &'static [TrainRoute],
}

impl TrainRouteTable {
    pub fn builtin() -> TrainRouteTable {
        TrainRouteTable {
            routes: TRAIN_ROUTES,
        }
    }

    /// finds a route serving the O/D pair in either direction.
    pub fn find(&self, origin: &str, destination: &str) -> Option<RouteMatch<'_>> {
        let origin = origin.to_uppercase();
        let destination = destination.to_uppercase();
        self.routes.iter().find_map(|route| {
            if route.origin == origin && route.destination == destination {
                Some(RouteMatch {
                    route,
                    reversed: false,
                })
            } else if route.origin == destination && route.destination == origin {
                Some(RouteMatch {
                    route,
                    reversed: true,
                })
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bidirectional_lookup() {
        let table = TrainRouteTable::builtin();
        let forward = table.find("LHR", "CDG").expect("forward should match");
        assert!(!forward.reversed);
        assert_eq!(forward.origin_station(), "London St Pancras");

        let reverse = table.find("CDG", "LHR").expect("reverse should match");
        assert!(reverse.reversed);
        assert_eq!(reverse.origin_station(), "Paris Gare du Nord");
        assert_eq!(reverse.destination_station(), "London St Pancras");
    }

    #[test]
    fn test_no_route_for_transatlantic() {
        let table = TrainRouteTable::builtin();
        assert!(table.find("LHR", "JFK").is_none());
    }

    #[test]
    fn test_route_emissions_per_passenger() {
        let table = TrainRouteTable::builtin();
        let hit = table.find("LHR", "CDG").expect("should match");
        // 459 km × 0.004 kg/pkm Eurostar
        assert_relative_eq!(hit.emissions_kg_per_passenger(), 1.836);
    }
}
