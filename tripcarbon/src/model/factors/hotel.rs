use crate::model::segment::BreakfastType;

/// kWh per room-night by star rating (index 0 = 1 star), Cornell Hotel
/// Sustainability Benchmarking Index figures.
const ENERGY_KWH_PER_NIGHT: [f64; 5] = [25.0, 30.0, 40.0, 55.0, 80.0];

/// fraction of room energy saved by certified properties.
pub const ECO_CERTIFIED_DISCOUNT: f64 = 0.35;

/// star rating assumed when the segment omits one.
pub const DEFAULT_STAR_RATING: u8 = 3;

pub const EMISSION_FACTOR_SOURCE: &str = "Cornell HSBI + grid intensity data";

#[derive(Debug, Clone)]
pub struct HotelFactorTable {
    energy_by_star: [f64; 5],
    pub eco_discount: f64,
}

impl HotelFactorTable {
    pub fn builtin() -> HotelFactorTable {
        HotelFactorTable {
            energy_by_star: ENERGY_KWH_PER_NIGHT,
            eco_discount: ECO_CERTIFIED_DISCOUNT,
        }
    }

    /// per-room-night energy use. ratings outside 1..=5 are clamped.
    pub fn energy_kwh_per_night(&self, star_rating: u8) -> f64 {
        let star = star_rating.clamp(1, 5);
        self.energy_by_star[(star - 1) as usize]
    }

    /// kg CO₂e per person per breakfast, from hotel food-service LCA
    /// studies.
    pub fn breakfast_kg_per_person(&self, breakfast: BreakfastType) -> f64 {
        match breakfast {
            BreakfastType::None => 0.0,
            BreakfastType::Continental => 0.8,
            BreakfastType::Buffet => 2.2,
            BreakfastType::FullEnglish => 2.8,
            BreakfastType::Vegan => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_by_star_rating() {
        let table = HotelFactorTable::builtin();
        assert_eq!(table.energy_kwh_per_night(1), 25.0);
        assert_eq!(table.energy_kwh_per_night(4), 55.0);
        assert_eq!(table.energy_kwh_per_night(5), 80.0);
        // out-of-range ratings clamp rather than fail
        assert_eq!(table.energy_kwh_per_night(0), 25.0);
        assert_eq!(table.energy_kwh_per_night(9), 80.0);
    }

    #[test]
    fn test_breakfast_factors() {
        let table = HotelFactorTable::builtin();
        assert_eq!(table.breakfast_kg_per_person(BreakfastType::None), 0.0);
        assert_eq!(table.breakfast_kg_per_person(BreakfastType::Buffet), 2.2);
    }
}
