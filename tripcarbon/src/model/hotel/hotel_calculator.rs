use super::hotel_details::{
    BreakfastDetail, GridIntensityDetail, HotelEmissionDetails, TransferDetail,
};
use crate::model::assess_error::AssessError;
use crate::model::confidence::{ConfidenceFactor, Impact};
use crate::model::factors::grid::GridQuality;
use crate::model::factors::{hotel, FactorRepository};
use crate::model::segment::{BreakfastType, HotelSegment};
use crate::util::round_ops;

#[derive(Debug, Clone)]
pub struct HotelEmissions {
    /// room + breakfast + transfer, full precision
    pub emissions_kg: f64,
    pub room_kg: f64,
    pub breakfast_kg: f64,
    pub transfer_kg: f64,
    pub details: HotelEmissionDetails,
    pub confidence_factors: Vec<ConfidenceFactor>,
    pub grid_quality: GridQuality,
}

/// computes emissions for one hotel stay.
///
/// room emissions come from star-rating energy benchmarks priced at the
/// destination country's grid carbon intensity. breakfast and airport
/// transfers are additive line items with their own factor tables.
pub fn calculate_hotel_emissions(
    repository: &FactorRepository,
    segment: &HotelSegment,
    traveler_count: u32,
    strict_grid_data: bool,
    field_path: &str,
) -> Result<HotelEmissions, AssessError> {
    let nights = (segment.check_out - segment.check_in).num_days();
    if nights < 1 {
        return Err(AssessError::InvalidDate {
            field: format!("{}.check_out", field_path),
            message: format!(
                "check_out must be after check_in, got a stay of {} nights",
                nights
            ),
        });
    }

    let grid = if strict_grid_data {
        repository
            .grid
            .lookup(&segment.location.country_code)
            .ok_or_else(|| {
                AssessError::CountryNotSupported(segment.location.country_code.to_uppercase())
            })?
    } else {
        repository
            .grid
            .lookup_or_default(&segment.location.country_code)
    };

    let mut confidence_factors = Vec::new();
    confidence_factors.push(ConfidenceFactor::new(
        "hotel_benchmark",
        Impact::Positive,
        "Using Cornell HSBI energy benchmarks by star rating",
    ));
    if grid.quality == GridQuality::Default {
        log::debug!(
            "no grid intensity data for {}, falling back to global average",
            segment.location.country_code
        );
    }

    let star_rating = segment.star_rating.unwrap_or(hotel::DEFAULT_STAR_RATING);
    let mut energy_per_night = repository.hotel.energy_kwh_per_night(star_rating);
    if segment.sustainability_certified {
        energy_per_night *= 1.0 - repository.hotel.eco_discount;
        confidence_factors.push(ConfidenceFactor::new(
            "eco_certification",
            Impact::Positive,
            "Sustainability certification verified for this property",
        ));
    }

    let room_nights = nights as f64 * f64::from(segment.room_count);
    let energy_kwh = energy_per_night * room_nights;
    let room_kg = energy_kwh * grid.value_g_per_kwh / 1000.0;

    let breakfast_kg = repository.hotel.breakfast_kg_per_person(segment.breakfast)
        * f64::from(traveler_count)
        * nights as f64;
    let breakfast_detail = (segment.breakfast != BreakfastType::None).then(|| {
        confidence_factors.push(ConfidenceFactor::new(
            "breakfast_included",
            Impact::Neutral,
            "Breakfast emissions from food-service LCA averages",
        ));
        BreakfastDetail {
            breakfast_type: segment.breakfast.as_str().to_string(),
            emissions_kg: round_ops::round1(breakfast_kg),
        }
    });

    let mut transfer_kg = 0.0;
    let transfer_detail = segment.airport_transfer.as_ref().map(|transfer| {
        let distance = repository.ground.transfer_distance(&transfer.airport);
        let legs = if transfer.round_trip { 2.0 } else { 1.0 };
        let vehicles = if transfer.shared {
            1.0
        } else {
            f64::from(traveler_count)
        };
        transfer_kg = distance.distance_km
            * legs
            * repository.ground.vehicle_factor_kg_per_km(transfer.vehicle_type)
            * vehicles;
        TransferDetail {
            airport: transfer.airport.to_uppercase(),
            city: distance.city,
            vehicle_type: transfer.vehicle_type.as_str().to_string(),
            distance_km: distance.distance_km,
            round_trip: transfer.round_trip,
            shared: transfer.shared,
            emissions_kg: round_ops::round1(transfer_kg),
        }
    });

    let details = HotelEmissionDetails {
        nights,
        rooms: segment.room_count,
        star_rating,
        emissions_per_night_kg: round_ops::round1(room_kg / nights as f64),
        energy_consumption_kwh: round_ops::round1(energy_kwh),
        grid_carbon_intensity: GridIntensityDetail {
            country: grid.country.clone(),
            value_g_per_kwh: grid.value_g_per_kwh,
            source: grid.source.clone(),
        },
        emission_factor_source: hotel::EMISSION_FACTOR_SOURCE.to_string(),
        breakfast: breakfast_detail,
        airport_transfer: transfer_detail,
    };

    Ok(HotelEmissions {
        emissions_kg: room_kg + breakfast_kg + transfer_kg,
        room_kg,
        breakfast_kg,
        transfer_kg,
        details,
        confidence_factors,
        grid_quality: grid.quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::segment::{HotelLocation, TransferAddon, VehicleType};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn stay(country: &str, nights: i64) -> HotelSegment {
        let check_in = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
        HotelSegment {
            location: HotelLocation {
                country_code: country.to_string(),
                city: None,
                coordinates: None,
            },
            check_in,
            check_out: check_in + chrono::Duration::days(nights),
            star_rating: Some(4),
            hotel_chain: None,
            room_count: 1,
            sustainability_certified: false,
            breakfast: BreakfastType::None,
            airport_transfer: None,
        }
    }

    #[test]
    fn test_france_four_star_two_nights() {
        let repository = FactorRepository::builtin();
        let result =
            calculate_hotel_emissions(&repository, &stay("FR", 2), 1, false, "segments[0]")
                .expect("should calculate");
        // 55 kWh/night * 2 nights * 56 g/kWh
        assert_relative_eq!(result.room_kg, 6.16, max_relative = 1e-9);
        assert_eq!(result.emissions_kg, result.room_kg);
        assert_eq!(result.details.nights, 2);
        assert_eq!(result.grid_quality, GridQuality::Measured);
    }

    #[test]
    fn test_eco_certification_discount() {
        let repository = FactorRepository::builtin();
        let mut certified = stay("FR", 2);
        certified.sustainability_certified = true;
        let plain =
            calculate_hotel_emissions(&repository, &stay("FR", 2), 1, false, "segments[0]")
                .unwrap();
        let eco = calculate_hotel_emissions(&repository, &certified, 1, false, "segments[0]")
            .unwrap();
        assert_relative_eq!(eco.room_kg, plain.room_kg * 0.65, max_relative = 1e-9);
        assert!(eco
            .confidence_factors
            .iter()
            .any(|f| f.factor == "eco_certification"));
    }

    #[test]
    fn test_unknown_country_uses_global_average() {
        let repository = FactorRepository::builtin();
        let result =
            calculate_hotel_emissions(&repository, &stay("XX", 1), 1, false, "segments[0]")
                .unwrap();
        assert_eq!(result.grid_quality, GridQuality::Default);
        assert_eq!(result.details.grid_carbon_intensity.value_g_per_kwh, 475.0);
    }

    #[test]
    fn test_strict_grid_rejects_unknown_country() {
        let repository = FactorRepository::builtin();
        let err = calculate_hotel_emissions(&repository, &stay("XX", 1), 1, true, "segments[0]")
            .unwrap_err();
        assert!(matches!(err, AssessError::CountryNotSupported(code) if code == "XX"));
    }

    #[test]
    fn test_zero_night_stay_is_invalid() {
        let repository = FactorRepository::builtin();
        let err = calculate_hotel_emissions(&repository, &stay("FR", 0), 1, false, "segments[1]")
            .unwrap_err();
        match err {
            AssessError::InvalidDate { field, .. } => {
                assert_eq!(field, "segments[1].check_out");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_breakfast_scales_with_travelers_and_nights() {
        let repository = FactorRepository::builtin();
        let mut with_breakfast = stay("FR", 3);
        with_breakfast.breakfast = BreakfastType::Buffet;
        let result =
            calculate_hotel_emissions(&repository, &with_breakfast, 2, false, "segments[0]")
                .unwrap();
        // 2.2 kg * 2 travelers * 3 nights
        assert_relative_eq!(result.breakfast_kg, 13.2, max_relative = 1e-9);
        assert!(result.details.breakfast.is_some());
    }

    #[test]
    fn test_shared_transfer_not_multiplied() {
        let repository = FactorRepository::builtin();
        let transfer = TransferAddon {
            airport: String::from("CDG"),
            vehicle_type: VehicleType::Taxi,
            round_trip: true,
            shared: true,
        };
        let mut solo = stay("FR", 2);
        solo.airport_transfer = Some(TransferAddon {
            shared: false,
            ..transfer.clone()
        });
        let mut pooled = stay("FR", 2);
        pooled.airport_transfer = Some(transfer);

        let solo_result =
            calculate_hotel_emissions(&repository, &solo, 3, false, "segments[0]").unwrap();
        let pooled_result =
            calculate_hotel_emissions(&repository, &pooled, 3, false, "segments[0]").unwrap();
        // 32 km * 2 legs * 0.149 kg/km
        assert_relative_eq!(pooled_result.transfer_kg, 9.536, max_relative = 1e-9);
        assert_relative_eq!(
            solo_result.transfer_kg,
            pooled_result.transfer_kg * 3.0,
            max_relative = 1e-9
        );
    }
}
