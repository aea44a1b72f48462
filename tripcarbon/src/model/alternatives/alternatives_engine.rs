use super::candidate::{
    Alternative, AlternativeSegment, AlternativeStrategy, AlternativeTotal, Savings, Tradeoffs,
};
use super::ranking::rank_alternatives;
use crate::model::assess::EmissionBreakdown;
use crate::model::assess_error::AssessError;
use crate::model::factors::FactorRepository;
use crate::model::flight::HaulType;
use crate::model::hotel::calculate_hotel_emissions;
use crate::model::segment::Segment;
use crate::model::train::estimate_flight_minutes;
use crate::util::{geo_ops, round_ops};

const RAIL_COST_DELTA_EUR: f64 = -30.0;
const RAIL_COMFORT: f64 = 4.5;
const ECO_HOTEL_COST_DELTA_EUR: f64 = -20.0;
const ECO_HOTEL_COMFORT: f64 = 4.0;
const COMBINED_COST_DELTA_EUR: f64 = -50.0;
const COMBINED_COMFORT: f64 = 4.3;

/// one strategy's rewrite of the itinerary, before it becomes a ranked
/// `Alternative`.
struct CandidateDraft {
    breakdowns: Vec<EmissionBreakdown>,
    changed: Vec<AlternativeSegment>,
    time_difference_minutes: i64,
}

/// generates, prices, and ranks substitute itineraries. `baseline` is
/// the per-segment category split computed by the orchestrator, aligned
/// with `segments` and at full precision.
pub fn generate_alternatives(
    repository: &FactorRepository,
    segments: &[Segment],
    baseline: &[EmissionBreakdown],
    traveler_count: u32,
    strict_grid_data: bool,
    alternative_count: u32,
) -> Result<Vec<Alternative>, AssessError> {
    let original_total: f64 = baseline.iter().map(EmissionBreakdown::total).sum();

    let rail = rail_draft(repository, segments, baseline, traveler_count);
    let eco = eco_hotel_draft(repository, segments, baseline, traveler_count, strict_grid_data)?;

    let mut alternatives = Vec::new();
    if let Some(draft) = &rail {
        let tradeoffs = Tradeoffs {
            time_difference_minutes: draft.time_difference_minutes,
            estimated_cost_difference_eur: RAIL_COST_DELTA_EUR,
            comfort_score: RAIL_COMFORT,
        };
        alternatives.extend(finalize(
            AlternativeStrategy::RailSubstitution,
            draft,
            tradeoffs,
            original_total,
        ));
    }
    if let Some(draft) = &eco {
        let tradeoffs = Tradeoffs {
            time_difference_minutes: 0,
            estimated_cost_difference_eur: ECO_HOTEL_COST_DELTA_EUR,
            comfort_score: ECO_HOTEL_COMFORT,
        };
        alternatives.extend(finalize(
            AlternativeStrategy::EcoHotel,
            draft,
            tradeoffs,
            original_total,
        ));
    }
    if let (Some(rail), Some(eco)) = (&rail, &eco) {
        let combined = merge_drafts(rail, eco);
        let tradeoffs = Tradeoffs {
            time_difference_minutes: combined.time_difference_minutes,
            estimated_cost_difference_eur: COMBINED_COST_DELTA_EUR,
            comfort_score: COMBINED_COMFORT,
        };
        alternatives.extend(finalize(
            AlternativeStrategy::Combined,
            &combined,
            tradeoffs,
            original_total,
        ));
    }

    rank_alternatives(&mut alternatives);
    alternatives.truncate(alternative_count as usize);
    Ok(alternatives)
}

/// replaces every short-haul flight that has a direct rail route.
/// unmatched flights keep their original emissions.
fn rail_draft(
    repository: &FactorRepository,
    segments: &[Segment],
    baseline: &[EmissionBreakdown],
    traveler_count: u32,
) -> Option<CandidateDraft> {
    let mut breakdowns = baseline.to_vec();
    let mut changed = Vec::new();
    let mut time_difference_minutes = 0;

    for (index, segment) in segments.iter().enumerate() {
        let Segment::Flight(flight) = segment else {
            continue;
        };
        let (Some(origin), Some(destination)) = (
            repository.airport(&flight.origin),
            repository.airport(&flight.destination),
        ) else {
            continue;
        };
        let distance_km = geo_ops::haversine_km(origin.location, destination.location);
        if HaulType::from_distance_km(distance_km) != HaulType::Short {
            continue;
        }
        let Some(hit) = repository.trains.find(&flight.origin, &flight.destination) else {
            continue;
        };

        let crossings = if flight.return_trip { 2 } else { 1 };
        let train_kg =
            hit.emissions_kg_per_passenger() * f64::from(crossings) * f64::from(traveler_count);
        let original_kg = breakdowns[index].total();
        breakdowns[index] = EmissionBreakdown {
            trains_kg: train_kg,
            ..EmissionBreakdown::default()
        };
        time_difference_minutes += (i64::from(hit.route.duration_minutes)
            - estimate_flight_minutes(distance_km))
            * i64::from(crossings);
        changed.push(AlternativeSegment {
            segment_index: index,
            change: String::from("flight_to_rail"),
            description: format!(
                "Replace {} - {} flight with {} ({} to {})",
                flight.origin.to_uppercase(),
                flight.destination.to_uppercase(),
                hit.route.operator,
                hit.origin_station(),
                hit.destination_station()
            ),
            original_kg: round_ops::round1(original_kg),
            alternative_kg: round_ops::round1(train_kg),
        });
    }

    (!changed.is_empty()).then_some(CandidateDraft {
        breakdowns,
        changed,
        time_difference_minutes,
    })
}

/// re-prices every uncertified hotel as its eco-certified variant.
fn eco_hotel_draft(
    repository: &FactorRepository,
    segments: &[Segment],
    baseline: &[EmissionBreakdown],
    traveler_count: u32,
    strict_grid_data: bool,
) -> Result<Option<CandidateDraft>, AssessError> {
    let mut breakdowns = baseline.to_vec();
    let mut changed = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        let Segment::Hotel(hotel) = segment else {
            continue;
        };
        if hotel.sustainability_certified {
            continue;
        }
        let mut certified = hotel.clone();
        certified.sustainability_certified = true;
        let result = calculate_hotel_emissions(
            repository,
            &certified,
            traveler_count,
            strict_grid_data,
            &format!("segments[{}]", index),
        )?;

        let original_kg = breakdowns[index].total();
        breakdowns[index] = EmissionBreakdown {
            hotels_kg: result.room_kg + result.breakfast_kg,
            ground_kg: result.transfer_kg,
            ..EmissionBreakdown::default()
        };
        changed.push(AlternativeSegment {
            segment_index: index,
            change: String::from("hotel_to_eco_certified"),
            description: format!(
                "Switch to an eco-certified {}-star property in {}",
                result.details.star_rating, result.details.grid_carbon_intensity.country
            ),
            original_kg: round_ops::round1(original_kg),
            alternative_kg: round_ops::round1(result.emissions_kg),
        });
    }

    Ok((!changed.is_empty()).then_some(CandidateDraft {
        breakdowns,
        changed,
        time_difference_minutes: 0,
    }))
}

/// overlays the eco rewrites on top of the rail rewrites. the two drafts
/// touch disjoint segment indices, so the merge is a straight overwrite.
fn merge_drafts(rail: &CandidateDraft, eco: &CandidateDraft) -> CandidateDraft {
    let mut breakdowns = rail.breakdowns.clone();
    for change in &eco.changed {
        breakdowns[change.segment_index] = eco.breakdowns[change.segment_index];
    }
    let mut changed = rail.changed.clone();
    changed.extend(eco.changed.iter().cloned());
    changed.sort_by_key(|change| change.segment_index);
    CandidateDraft {
        breakdowns,
        changed,
        time_difference_minutes: rail.time_difference_minutes,
    }
}

/// prices a draft against the original total. drafts that fail to beat
/// the original are dropped here, never surfaced.
fn finalize(
    strategy: AlternativeStrategy,
    draft: &CandidateDraft,
    tradeoffs: Tradeoffs,
    original_total: f64,
) -> Option<Alternative> {
    let breakdown = draft
        .breakdowns
        .iter()
        .fold(EmissionBreakdown::default(), |sum, item| EmissionBreakdown {
            flights_kg: sum.flights_kg + item.flights_kg,
            hotels_kg: sum.hotels_kg + item.hotels_kg,
            ground_kg: sum.ground_kg + item.ground_kg,
            trains_kg: sum.trains_kg + item.trains_kg,
        });
    let total = breakdown.total();
    if total >= original_total {
        log::debug!(
            "discarding {} candidate: {:.1} kg does not beat {:.1} kg",
            strategy.as_str(),
            total,
            original_total
        );
        return None;
    }

    let absolute_kg = original_total - total;
    let percentage = absolute_kg / original_total * 100.0;

    Some(Alternative {
        alternative_id: format!("alt_{}", strategy.as_str()),
        strategy,
        total: AlternativeTotal {
            co2e_kg: round_ops::round1(total),
            breakdown: breakdown.rounded(),
        },
        savings: Savings {
            absolute_kg: round_ops::round1(absolute_kg),
            percentage: round_ops::round1(percentage),
            label: Savings::label_for_percentage(percentage).to_string(),
        },
        segments: draft.changed.clone(),
        tradeoffs,
        recommendation_reason: recommendation(draft, absolute_kg, percentage),
    })
}

/// names the dominant savings driver for the candidate.
fn recommendation(draft: &CandidateDraft, absolute_kg: f64, percentage: f64) -> String {
    let rail_saved: f64 = driver_savings(draft, "flight_to_rail");
    let eco_saved: f64 = driver_savings(draft, "hotel_to_eco_certified");
    let driver = if rail_saved >= eco_saved {
        "replacing short-haul flights with high-speed rail"
    } else {
        "switching to eco-certified hotels"
    };
    format!(
        "Saves {:.1} kg CO2e ({:.0}% of the trip), mostly by {}",
        absolute_kg, percentage, driver
    )
}

fn driver_savings(draft: &CandidateDraft, change: &str) -> f64 {
    draft
        .changed
        .iter()
        .filter(|segment| segment.change == change)
        .map(|segment| segment.original_kg - segment.alternative_kg)
        .sum()
}
