use super::booking_links::{booking_links, BookingLink};
use crate::model::assess::CalculationMethod;
use crate::model::assess_error::AssessError;
use crate::model::factors::FactorRepository;
use crate::model::flight::calculate_flight_emissions;
use crate::model::segment::FlightSegment;
use crate::util::round_ops;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// cruise-speed estimate plus fixed taxi/climb/descent overhead.
pub fn estimate_flight_minutes(distance_km: f64) -> i64 {
    (distance_km / 800.0 * 60.0) as i64 + 30
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TrainComparison {
    pub origin: String,
    pub destination: String,
    pub origin_city: String,
    pub destination_city: String,
    pub train: TrainLeg,
    pub comparison: EmissionComparison,
    pub booking: Vec<BookingLink>,
    pub recommendation: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TrainLeg {
    pub operator: String,
    pub origin_station: String,
    pub destination_station: String,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub high_speed: bool,
    pub typical_price_eur: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EmissionComparison {
    pub flight_kg: f64,
    pub train_kg: f64,
    pub savings_kg: f64,
    pub savings_percent: f64,
    pub train_is_greener: bool,
    pub flight_minutes: i64,
    pub train_minutes: u32,
    pub time_difference_minutes: i64,
}

/// compares a direct rail connection against the equivalent flight for
/// one passenger. the flight baseline is economy class with the standard
/// method, so the comparison is stable regardless of request options.
pub fn compare_train_vs_flight(
    repository: &FactorRepository,
    origin: &str,
    destination: &str,
    date: Option<NaiveDate>,
) -> Result<TrainComparison, AssessError> {
    let hit = repository.trains.find(origin, destination).ok_or_else(|| {
        AssessError::RouteNotFound {
            origin: origin.to_uppercase(),
            destination: destination.to_uppercase(),
        }
    })?;

    let baseline_segment = FlightSegment {
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure_date: date.unwrap_or_default(),
        departure_time: None,
        cabin_class: None,
        carrier_code: None,
        flight_number: None,
        return_trip: false,
    };
    let flight = calculate_flight_emissions(
        repository,
        &baseline_segment,
        1,
        CalculationMethod::Standard,
        "origin",
    )?;

    let train_kg = hit.emissions_kg_per_passenger();
    let savings_kg = flight.emissions_kg - train_kg;
    let savings_percent = if flight.emissions_kg > 0.0 {
        savings_kg / flight.emissions_kg * 100.0
    } else {
        0.0
    };
    let flight_minutes = estimate_flight_minutes(flight.details.distance_km);

    let recommendation = if savings_kg > 0.0 {
        format!(
            "Taking the train saves {:.0} kg CO2e ({:.0}% less emissions)",
            savings_kg, savings_percent
        )
    } else {
        String::from("Flight may be preferred for this route")
    };

    Ok(TrainComparison {
        origin: origin.to_uppercase(),
        destination: destination.to_uppercase(),
        origin_city: repository.city_name(origin),
        destination_city: repository.city_name(destination),
        train: TrainLeg {
            operator: hit.route.operator.to_string(),
            origin_station: hit.origin_station().to_string(),
            destination_station: hit.destination_station().to_string(),
            distance_km: hit.route.distance_km,
            duration_minutes: hit.route.duration_minutes,
            high_speed: hit.route.high_speed,
            typical_price_eur: hit.route.typical_price_eur,
        },
        comparison: EmissionComparison {
            flight_kg: round_ops::round1(flight.emissions_kg),
            train_kg: round_ops::round1(train_kg),
            savings_kg: round_ops::round1(savings_kg),
            savings_percent: round_ops::round1(savings_percent),
            train_is_greener: savings_kg > 0.0,
            flight_minutes,
            train_minutes: hit.route.duration_minutes,
            time_difference_minutes: i64::from(hit.route.duration_minutes) - flight_minutes,
        },
        booking: booking_links(repository, origin, destination, date),
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lhr_cdg_comparison() {
        let repository = FactorRepository::builtin();
        let comparison = compare_train_vs_flight(&repository, "LHR", "CDG", None)
            .expect("route should exist");
        assert_eq!(comparison.train.operator, "Eurostar");
        assert_eq!(comparison.origin_city, "London");
        assert_relative_eq!(comparison.comparison.train_kg, 1.8);
        assert!(comparison.comparison.train_is_greener);
        assert!(comparison.comparison.savings_percent > 90.0);
        assert!(comparison.recommendation.contains("train"));
        assert!(!comparison.booking.is_empty());
    }

    #[test]
    fn test_reverse_direction_swaps_stations() {
        let repository = FactorRepository::builtin();
        let comparison = compare_train_vs_flight(&repository, "CDG", "LHR", None)
            .expect("route should exist");
        assert_eq!(comparison.train.origin_station, "Paris Gare du Nord");
        assert_eq!(comparison.train.destination_station, "London St Pancras");
    }

    #[test]
    fn test_missing_route_is_an_error() {
        let repository = FactorRepository::builtin();
        let err = compare_train_vs_flight(&repository, "LHR", "JFK", None).unwrap_err();
        match err {
            AssessError::RouteNotFound {
                origin,
                destination,
            } => {
                assert_eq!(origin, "LHR");
                assert_eq!(destination, "JFK");
            }
            other => panic!("expected RouteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_flight_duration_estimate() {
        // 800 km cruise hour plus half-hour overhead
        assert_eq!(estimate_flight_minutes(800.0), 90);
        assert_eq!(estimate_flight_minutes(400.0), 60);
    }
}
