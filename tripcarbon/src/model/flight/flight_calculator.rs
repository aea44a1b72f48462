use super::flight_details::FlightEmissionDetails;
use super::haul_type::HaulType;
use crate::model::assess::CalculationMethod;
use crate::model::assess_error::AssessError;
use crate::model::confidence::{ConfidenceFactor, Impact};
use crate::model::factors::FactorRepository;
use crate::model::segment::FlightSegment;
use crate::util::{geo_ops, round_ops};

/// fixed uplift for non-CO₂ high-altitude effects (contrails, NOx).
pub const RADIATIVE_FORCING_MULTIPLIER: f64 = 1.9;

/// industry-average seat occupancy assumed by the factor tables.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.82;

#[derive(Debug, Clone)]
pub struct FlightEmissions {
    /// total for all travelers, full precision
    pub emissions_kg: f64,
    pub haul_type: HaulType,
    pub details: FlightEmissionDetails,
    pub confidence_factors: Vec<ConfidenceFactor>,
}

/// computes emissions for one flight segment. pure: same segment, same
/// repository, same output.
///
/// emissions = distance × factor(haul, cabin) × RF × traveler_count,
/// doubled for return trips. the conservative method swaps in the
/// upper-bound factor variant; the detailed method applies a carrier
/// efficiency adjustment when the carrier is known and silently falls
/// back to the standard factor otherwise.
///
/// # Arguments
///
/// * `field_path` - request path of this segment for error reporting,
///   e.g. `segments[0]`
pub fn calculate_flight_emissions(
    repository: &FactorRepository,
    segment: &FlightSegment,
    traveler_count: u32,
    method: CalculationMethod,
    field_path: &str,
) -> Result<FlightEmissions, AssessError> {
    let origin = repository.airport(&segment.origin).ok_or_else(|| {
        AssessError::InvalidAirportCode {
            code: segment.origin.to_uppercase(),
            field: format!("{}.origin", field_path),
        }
    })?;
    let destination = repository.airport(&segment.destination).ok_or_else(|| {
        AssessError::InvalidAirportCode {
            code: segment.destination.to_uppercase(),
            field: format!("{}.destination", field_path),
        }
    })?;

    let one_way_km = geo_ops::haversine_km(origin.location, destination.location);
    let haul_type = HaulType::from_distance_km(one_way_km);
    let cabin = segment.cabin_class.unwrap_or_default();
    let factor = repository.flight_factors.get(haul_type, cabin);

    let factor_per_km = match method {
        CalculationMethod::Conservative => factor.conservative,
        CalculationMethod::Standard | CalculationMethod::Detailed => factor.standard,
    };

    let mut confidence_factors = Vec::new();
    let carrier_adjustment = match (method, segment.carrier_code.as_deref()) {
        (CalculationMethod::Detailed, Some(carrier)) => {
            let adjustment = repository.flight_factors.carrier_efficiency(carrier);
            if adjustment.is_some() {
                confidence_factors.push(ConfidenceFactor::new(
                    "airline_specific_data",
                    Impact::Positive,
                    format!("Fleet efficiency data applied for carrier {}", carrier),
                ));
            } else {
                log::debug!(
                    "no fleet efficiency data for carrier {}, using standard factor",
                    carrier
                );
            }
            adjustment
        }
        _ => None,
    };

    let trip_km = if segment.return_trip {
        one_way_km * 2.0
    } else {
        one_way_km
    };

    let emissions_kg = trip_km
        * factor_per_km
        * carrier_adjustment.unwrap_or(1.0)
        * RADIATIVE_FORCING_MULTIPLIER
        * f64::from(traveler_count);

    let details = FlightEmissionDetails {
        distance_km: round_ops::round1(trip_km),
        haul_type,
        radiative_forcing_multiplier: RADIATIVE_FORCING_MULTIPLIER,
        fuel_burn_kg: round_ops::round1(trip_km * haul_type.fuel_burn_kg_per_km()),
        load_factor: DEFAULT_LOAD_FACTOR,
        emission_factor_source: repository.flight_factors.source.clone(),
        carrier_adjustment,
    };

    Ok(FlightEmissions {
        emissions_kg,
        haul_type,
        details,
        confidence_factors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn segment(origin: &str, destination: &str) -> FlightSegment {
        FlightSegment {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            departure_time: None,
            cabin_class: None,
            carrier_code: None,
            flight_number: None,
            return_trip: false,
        }
    }

    #[test]
    fn test_lhr_cdg_economy_formula() {
        let repository = FactorRepository::builtin();
        let result = calculate_flight_emissions(
            &repository,
            &segment("LHR", "CDG"),
            1,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .expect("should calculate");

        assert_eq!(result.haul_type, HaulType::Short);
        let lhr = repository.airport("LHR").unwrap().location;
        let cdg = repository.airport("CDG").unwrap().location;
        let distance = crate::util::geo_ops::haversine_km(lhr, cdg);
        assert_relative_eq!(
            result.emissions_kg,
            distance * 0.156 * 1.9,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_traveler_count_scales_linearly() {
        let repository = FactorRepository::builtin();
        let one = calculate_flight_emissions(
            &repository,
            &segment("LHR", "CDG"),
            1,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        let three = calculate_flight_emissions(
            &repository,
            &segment("LHR", "CDG"),
            3,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        assert_relative_eq!(three.emissions_kg, one.emissions_kg * 3.0, max_relative = 1e-9);
    }

    #[test]
    fn test_return_trip_doubles() {
        let repository = FactorRepository::builtin();
        let mut there_and_back = segment("LHR", "CDG");
        there_and_back.return_trip = true;
        let single = calculate_flight_emissions(
            &repository,
            &segment("LHR", "CDG"),
            1,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        let round = calculate_flight_emissions(
            &repository,
            &there_and_back,
            1,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        assert_relative_eq!(round.emissions_kg, single.emissions_kg * 2.0, max_relative = 1e-9);
    }

    #[test]
    fn test_unknown_airport_reports_field_path() {
        let repository = FactorRepository::builtin();
        let err = calculate_flight_emissions(
            &repository,
            &segment("LHR", "ZZZ"),
            1,
            CalculationMethod::Standard,
            "segments[2]",
        )
        .unwrap_err();
        match err {
            AssessError::InvalidAirportCode { code, field } => {
                assert_eq!(code, "ZZZ");
                assert_eq!(field, "segments[2].destination");
            }
            other => panic!("expected InvalidAirportCode, got {:?}", other),
        }
    }

    #[test]
    fn test_conservative_exceeds_standard() {
        let repository = FactorRepository::builtin();
        let standard = calculate_flight_emissions(
            &repository,
            &segment("LHR", "JFK"),
            1,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        let conservative = calculate_flight_emissions(
            &repository,
            &segment("LHR", "JFK"),
            1,
            CalculationMethod::Conservative,
            "segments[0]",
        )
        .unwrap();
        assert!(conservative.emissions_kg > standard.emissions_kg);
        assert_eq!(standard.haul_type, HaulType::Long);
    }

    #[test]
    fn test_detailed_with_known_carrier() {
        let repository = FactorRepository::builtin();
        let mut with_carrier = segment("LHR", "CDG");
        with_carrier.carrier_code = Some(String::from("BA"));
        let result = calculate_flight_emissions(
            &repository,
            &with_carrier,
            1,
            CalculationMethod::Detailed,
            "segments[0]",
        )
        .unwrap();
        assert_eq!(result.details.carrier_adjustment, Some(0.96));
        assert_eq!(result.confidence_factors.len(), 1);
    }

    #[test]
    fn test_detailed_with_unknown_carrier_falls_back() {
        let repository = FactorRepository::builtin();
        let mut with_carrier = segment("LHR", "CDG");
        with_carrier.carrier_code = Some(String::from("ZZ"));
        let detailed = calculate_flight_emissions(
            &repository,
            &with_carrier,
            1,
            CalculationMethod::Detailed,
            "segments[0]",
        )
        .unwrap();
        let standard = calculate_flight_emissions(
            &repository,
            &segment("LHR", "CDG"),
            1,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        assert_eq!(detailed.emissions_kg, standard.emissions_kg);
        assert!(detailed.details.carrier_adjustment.is_none());
    }

    #[test]
    fn test_idempotent() {
        let repository = FactorRepository::builtin();
        let first = calculate_flight_emissions(
            &repository,
            &segment("FRA", "MUC"),
            2,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        let second = calculate_flight_emissions(
            &repository,
            &segment("FRA", "MUC"),
            2,
            CalculationMethod::Standard,
            "segments[0]",
        )
        .unwrap();
        assert_eq!(first.emissions_kg.to_bits(), second.emissions_kg.to_bits());
    }
}
