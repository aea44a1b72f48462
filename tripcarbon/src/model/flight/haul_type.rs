use serde::{Deserialize, Serialize};

/// flight-distance tier used to select a base emission factor.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HaulType {
    Short,
    Medium,
    Long,
}

impl HaulType {
    /// classifies a great-circle distance into a haul tier.
    /// short < 1500 km, medium < 4000 km, long otherwise.
    pub fn from_distance_km(distance_km: f64) -> HaulType {
        if distance_km < 1500.0 {
            HaulType::Short
        } else if distance_km < 4000.0 {
            HaulType::Medium
        } else {
            HaulType::Long
        }
    }

    /// whole-aircraft fuel burn proxy in kg per km. short-haul burns more
    /// per km because of the takeoff and climb share.
    pub fn fuel_burn_kg_per_km(&self) -> f64 {
        match self {
            HaulType::Short => 3.5,
            HaulType::Medium => 3.0,
            HaulType::Long => 2.8,
        }
    }
}

impl std::fmt::Display for HaulType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HaulType::Short => "short",
            HaulType::Medium => "medium",
            HaulType::Long => "long",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haul_tier_boundaries() {
        assert_eq!(HaulType::from_distance_km(344.0), HaulType::Short);
        assert_eq!(HaulType::from_distance_km(1499.9), HaulType::Short);
        assert_eq!(HaulType::from_distance_km(1500.0), HaulType::Medium);
        assert_eq!(HaulType::from_distance_km(3999.9), HaulType::Medium);
        assert_eq!(HaulType::from_distance_km(4000.0), HaulType::Long);
    }
}
