use super::request::AssessRequest;
use crate::model::assess_error::{AssessError, FieldViolation};
use crate::model::segment::Segment;

const MAX_SEGMENTS: usize = 50;
const MAX_TRAVELERS: u32 = 500;
const MAX_ALTERNATIVES: u32 = 10;

/// structural validation, run before any calculator. collects every
/// violation rather than stopping at the first.
pub fn validate_request(request: &AssessRequest) -> Result<(), AssessError> {
    let mut violations = Vec::new();

    if request.segments.is_empty() {
        violations.push(FieldViolation::new(
            "segments",
            "at least one segment is required",
        ));
    } else if request.segments.len() > MAX_SEGMENTS {
        violations.push(FieldViolation::new(
            "segments",
            format!("at most {} segments per itinerary", MAX_SEGMENTS),
        ));
    }

    if request.traveler_count < 1 || request.traveler_count > MAX_TRAVELERS {
        violations.push(FieldViolation::new(
            "traveler_count",
            format!("must be between 1 and {}", MAX_TRAVELERS),
        ));
    }

    if request.options.alternative_count < 1
        || request.options.alternative_count > MAX_ALTERNATIVES
    {
        violations.push(FieldViolation::new(
            "options.alternative_count",
            format!("must be between 1 and {}", MAX_ALTERNATIVES),
        ));
    }

    for (index, segment) in request.segments.iter().enumerate() {
        match segment {
            Segment::Flight(flight) => {
                let origin_field = format!("segments[{}].origin", index);
                let destination_field = format!("segments[{}].destination", index);
                if !is_airport_code(&flight.origin) {
                    violations.push(FieldViolation::new(
                        &origin_field,
                        "must be a 3-letter IATA code",
                    ));
                }
                if !is_airport_code(&flight.destination) {
                    violations.push(FieldViolation::new(
                        &destination_field,
                        "must be a 3-letter IATA code",
                    ));
                }
                if flight.origin.eq_ignore_ascii_case(&flight.destination) {
                    violations.push(FieldViolation::new(
                        destination_field,
                        "destination must differ from origin",
                    ));
                }
            }
            Segment::Hotel(hotel) => {
                if !is_country_code(&hotel.location.country_code) {
                    violations.push(FieldViolation::new(
                        format!("segments[{}].location.country_code", index),
                        "must be a 2-letter ISO country code",
                    ));
                }
                if let Some(star) = hotel.star_rating {
                    if !(1..=5).contains(&star) {
                        violations.push(FieldViolation::new(
                            format!("segments[{}].star_rating", index),
                            "must be between 1 and 5",
                        ));
                    }
                }
                if hotel.room_count < 1 {
                    violations.push(FieldViolation::new(
                        format!("segments[{}].room_count", index),
                        "must be at least 1",
                    ));
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AssessError::Validation(violations))
    }
}

fn is_airport_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}
