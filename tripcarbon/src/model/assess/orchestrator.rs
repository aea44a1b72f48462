use super::assessment::{
    Assessment, EmissionBreakdown, EmissionsTotal, Equivalents, Methodology, SegmentDetails,
    SegmentResult,
};
use super::request::AssessRequest;
use super::validate::validate_request;
use crate::model::alternatives::generate_alternatives;
use crate::model::assess_error::AssessError;
use crate::model::confidence::{calculate_confidence_score, ScoreInputs};
use crate::model::factors::grid::GridQuality;
use crate::model::factors::FactorRepository;
use crate::model::flight::calculate_flight_emissions;
use crate::model::hotel::calculate_hotel_emissions;
use crate::model::segment::Segment;
use crate::util::round_ops;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// after this many days the embedded factor snapshot is considered stale.
pub const ASSESSMENT_TTL_DAYS: i64 = 90;

/// travel dates beyond this horizon get a confidence penalty.
const FAR_FUTURE_DAYS: i64 = 330;

/// assesses one itinerary against the current clock.
pub fn assess(
    repository: &FactorRepository,
    request: &AssessRequest,
) -> Result<Assessment, AssessError> {
    assess_at(repository, request, Utc::now())
}

/// clock-injected variant of [`assess`]; everything below this point is
/// deterministic apart from the generated assessment id.
pub fn assess_at(
    repository: &FactorRepository,
    request: &AssessRequest,
    now: DateTime<Utc>,
) -> Result<Assessment, AssessError> {
    validate_request(request)?;

    let method = request.options.calculation_method;
    let mut segment_results = Vec::with_capacity(request.segments.len());
    let mut breakdowns = Vec::with_capacity(request.segments.len());
    let mut segment_factors = Vec::new();
    let mut best_grid_quality: Option<GridQuality> = None;
    let mut primary_haul = None;

    for (index, segment) in request.segments.iter().enumerate() {
        let field_path = format!("segments[{}]", index);
        match segment {
            Segment::Flight(flight) => {
                let result = calculate_flight_emissions(
                    repository,
                    flight,
                    request.traveler_count,
                    method,
                    &field_path,
                )?;
                if primary_haul.is_none() {
                    primary_haul = Some(result.haul_type);
                }
                segment_factors.extend(result.confidence_factors);
                breakdowns.push(EmissionBreakdown {
                    flights_kg: result.emissions_kg,
                    ..EmissionBreakdown::default()
                });
                segment_results.push(SegmentResult {
                    segment_index: index,
                    segment_type: String::from("flight"),
                    emissions_kg: round_ops::round1(result.emissions_kg),
                    details: SegmentDetails::Flight(result.details),
                });
            }
            Segment::Hotel(hotel) => {
                let result = calculate_hotel_emissions(
                    repository,
                    hotel,
                    request.traveler_count,
                    request.options.strict_grid_data,
                    &field_path,
                )?;
                best_grid_quality = Some(better_quality(best_grid_quality, result.grid_quality));
                segment_factors.extend(result.confidence_factors);
                breakdowns.push(EmissionBreakdown {
                    hotels_kg: result.room_kg + result.breakfast_kg,
                    ground_kg: result.transfer_kg,
                    ..EmissionBreakdown::default()
                });
                segment_results.push(SegmentResult {
                    segment_index: index,
                    segment_type: String::from("hotel"),
                    emissions_kg: round_ops::round1(result.emissions_kg),
                    details: SegmentDetails::Hotel(result.details),
                });
            }
        }
    }

    let breakdown = breakdowns
        .iter()
        .fold(EmissionBreakdown::default(), |sum, item| EmissionBreakdown {
            flights_kg: sum.flights_kg + item.flights_kg,
            hotels_kg: sum.hotels_kg + item.hotels_kg,
            ground_kg: sum.ground_kg + item.ground_kg,
            trains_kg: sum.trains_kg + item.trains_kg,
        });
    let total_kg = breakdown.total();

    let confidence_score = calculate_confidence_score(&ScoreInputs {
        segment_factors,
        has_carrier_data: request.segments.iter().any(|segment| {
            matches!(segment, Segment::Flight(flight) if flight.carrier_code.is_some())
        }),
        has_aircraft_data: false,
        has_hotel_chain_data: request.segments.iter().any(|segment| {
            matches!(segment, Segment::Hotel(hotel) if hotel.hotel_chain.is_some())
        }),
        grid_quality: best_grid_quality,
        primary_haul,
        has_far_future_date: has_far_future_date(request, now),
    });

    let lower_impact_alternatives = if request.options.include_alternatives {
        let alternatives = generate_alternatives(
            repository,
            &request.segments,
            &breakdowns,
            request.traveler_count,
            request.options.strict_grid_data,
            request.options.alternative_count,
        )?;
        (!alternatives.is_empty()).then_some(alternatives)
    } else {
        None
    };

    let methodology = request
        .options
        .include_methodology
        .then(|| {
            Methodology::current(
                &repository.flight_factors.source,
                &repository.flight_factors.version,
            )
        });

    log::info!(
        "assessed {} segments: {:.1} kg CO2e, confidence {:.2}",
        request.segments.len(),
        total_kg,
        confidence_score.score
    );

    Ok(Assessment {
        assessment_id: format!("assess_{}", Uuid::new_v4()),
        trip_id: request.trip_id.clone(),
        total_emissions: EmissionsTotal {
            co2e_kg: round_ops::round1(total_kg),
            unit: String::from("kg_co2e"),
            breakdown: breakdown.rounded(),
            per_traveler_kg: round_ops::round1(total_kg / f64::from(request.traveler_count)),
            equivalent: Equivalents::for_total_kg(total_kg),
        },
        confidence_score,
        segments: segment_results,
        lower_impact_alternatives,
        methodology,
        created_at: now,
        expires_at: now + Duration::days(ASSESSMENT_TTL_DAYS),
    })
}

fn quality_rank(quality: GridQuality) -> u8 {
    match quality {
        GridQuality::Measured => 2,
        GridQuality::Estimated => 1,
        GridQuality::Default => 0,
    }
}

fn better_quality(current: Option<GridQuality>, candidate: GridQuality) -> GridQuality {
    match current {
        Some(existing) if quality_rank(existing) >= quality_rank(candidate) => existing,
        _ => candidate,
    }
}

fn has_far_future_date(request: &AssessRequest, now: DateTime<Utc>) -> bool {
    let horizon = now.date_naive() + Duration::days(FAR_FUTURE_DAYS);
    request.segments.iter().any(|segment| match segment {
        Segment::Flight(flight) => flight.departure_date > horizon,
        Segment::Hotel(hotel) => hotel.check_in > horizon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assess::request::AssessOptions;
    use crate::model::confidence::ConfidenceLevel;
    use crate::model::segment::{CabinClass, FlightSegment, HotelLocation, HotelSegment};
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn flight(origin: &str, destination: &str) -> Segment {
        Segment::Flight(FlightSegment {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            departure_time: None,
            cabin_class: None,
            carrier_code: None,
            flight_number: None,
            return_trip: false,
        })
    }

    fn hotel(country: &str, nights: i64) -> Segment {
        let check_in = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
        Segment::Hotel(HotelSegment {
            location: HotelLocation {
                country_code: country.to_string(),
                city: None,
                coordinates: None,
            },
            check_in,
            check_out: check_in + Duration::days(nights),
            star_rating: Some(4),
            hotel_chain: None,
            room_count: 1,
            sustainability_certified: false,
            breakfast: Default::default(),
            airport_transfer: None,
        })
    }

    fn request_with(segments: Vec<Segment>) -> AssessRequest {
        AssessRequest {
            trip_id: Some(String::from("trip-001")),
            traveler_count: 1,
            segments,
            options: AssessOptions::default(),
        }
    }

    #[test]
    fn test_mixed_trip_aggregates_by_category() {
        let repository = FactorRepository::builtin();
        let request = request_with(vec![flight("LHR", "CDG"), hotel("FR", 2)]);
        let assessment = assess_at(&repository, &request, fixed_now()).expect("should assess");

        let breakdown = &assessment.total_emissions.breakdown;
        assert!(breakdown.flights_kg > 0.0);
        assert_relative_eq!(breakdown.hotels_kg, 6.2);
        assert_eq!(breakdown.trains_kg, 0.0);
        // total is rounded from full precision, so category rounding can
        // shift it by up to 0.1 per category
        assert!(
            (assessment.total_emissions.co2e_kg - (breakdown.flights_kg + breakdown.hotels_kg))
                .abs()
                < 0.15
        );
        assert_eq!(assessment.segments.len(), 2);
        assert_eq!(assessment.segments[1].segment_type, "hotel");
        assert!(assessment.assessment_id.starts_with("assess_"));
        assert_eq!(
            assessment.expires_at - assessment.created_at,
            Duration::days(90)
        );
        assert!(assessment.lower_impact_alternatives.is_none());
        assert!(assessment.methodology.is_none());
    }

    #[test]
    fn test_per_traveler_division() {
        let repository = FactorRepository::builtin();
        let mut request = request_with(vec![flight("LHR", "CDG")]);
        request.traveler_count = 4;
        let assessment = assess_at(&repository, &request, fixed_now()).unwrap();
        assert_relative_eq!(
            assessment.total_emissions.per_traveler_kg * 4.0,
            assessment.total_emissions.co2e_kg,
            max_relative = 0.01
        );
    }

    #[test]
    fn test_validation_runs_before_calculators() {
        let repository = FactorRepository::builtin();
        let mut request = request_with(vec![flight("LHR", "CDG")]);
        request.traveler_count = 0;
        let err = assess_at(&repository, &request, fixed_now()).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_calculator_failure_carries_field_path() {
        let repository = FactorRepository::builtin();
        let request = request_with(vec![flight("LHR", "CDG"), flight("CDG", "QQQ")]);
        let err = assess_at(&repository, &request, fixed_now()).unwrap_err();
        match err {
            AssessError::InvalidAirportCode { field, .. } => {
                assert_eq!(field, "segments[1].destination");
            }
            other => panic!("expected InvalidAirportCode, got {:?}", other),
        }
    }

    #[test]
    fn test_confidence_reflects_trip_shape() {
        let repository = FactorRepository::builtin();
        // short-haul flight with carrier data and a measured grid
        let mut request = request_with(vec![flight("LHR", "CDG"), hotel("FR", 2)]);
        if let Segment::Flight(f) = &mut request.segments[0] {
            f.carrier_code = Some(String::from("BA"));
        }
        let assessment = assess_at(&repository, &request, fixed_now()).unwrap();
        // 0.65 + 0.05 carrier + 0.10 measured + 0.05 short haul
        assert_eq!(assessment.confidence_score.score, 0.85);
        assert_eq!(assessment.confidence_score.level, ConfidenceLevel::High);
    }

    #[test]
    fn test_far_future_date_penalized() {
        let repository = FactorRepository::builtin();
        let mut request = request_with(vec![flight("LHR", "CDG")]);
        if let Segment::Flight(f) = &mut request.segments[0] {
            f.departure_date = NaiveDate::from_ymd_opt(2027, 9, 14).unwrap();
        }
        let near = assess_at(&repository, &request_with(vec![flight("LHR", "CDG")]), fixed_now())
            .unwrap();
        let far = assess_at(&repository, &request, fixed_now()).unwrap();
        assert!(far.confidence_score.score < near.confidence_score.score);
    }

    #[test]
    fn test_alternatives_and_methodology_on_request() {
        let repository = FactorRepository::builtin();
        let mut request = request_with(vec![flight("LHR", "CDG"), hotel("FR", 2)]);
        request.options.include_alternatives = true;
        request.options.include_methodology = true;
        let assessment = assess_at(&repository, &request, fixed_now()).unwrap();
        let alternatives = assessment
            .lower_impact_alternatives
            .expect("alternatives were requested");
        assert!(!alternatives.is_empty());
        for alternative in &alternatives {
            assert!(alternative.total.co2e_kg <= assessment.total_emissions.co2e_kg);
        }
        assert!(assessment.methodology.is_some());
    }

    #[test]
    fn test_business_cabin_scales_emissions() {
        let repository = FactorRepository::builtin();
        let mut business = request_with(vec![flight("LHR", "JFK")]);
        if let Segment::Flight(f) = &mut business.segments[0] {
            f.cabin_class = Some(CabinClass::Business);
        }
        let economy =
            assess_at(&repository, &request_with(vec![flight("LHR", "JFK")]), fixed_now())
                .unwrap();
        let business = assess_at(&repository, &business, fixed_now()).unwrap();
        assert_relative_eq!(
            business.total_emissions.co2e_kg,
            economy.total_emissions.co2e_kg * 3.0,
            max_relative = 0.01
        );
    }
}
