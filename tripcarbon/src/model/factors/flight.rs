use crate::model::assess_error::AssessError;
use crate::model::flight::HaulType;
use crate::model::segment::CabinClass;
use serde::Deserialize;
use std::collections::HashMap;

/// per-passenger-km factor pair for one (haul, cabin) cell. `conservative`
/// is the upper-bound variant selected by the conservative method.
#[derive(Debug, Clone, Copy)]
pub struct FlightFactor {
    pub standard: f64,
    pub conservative: f64,
}

/// economy base factors in kg CO₂e per passenger-km by haul tier,
/// ICAO/myclimate-aligned. cabin classes scale these by floor space.
const ECONOMY_BASE_PER_KM: &[(HaulType, f64)] = &[
    (HaulType::Short, 0.156),
    (HaulType::Medium, 0.130),
    (HaulType::Long, 0.111),
];

/// uplift applied to the standard factor to form the upper-bound variant.
const CONSERVATIVE_UPLIFT: f64 = 1.2;

/// fleet fuel-efficiency adjustment relative to the industry average,
/// consulted only by the detailed method.
const CARRIER_EFFICIENCY: &[(&str, f64)] = &[
    ("AF", 0.97),
    ("BA", 0.96),
    ("FR", 0.89),
    ("KL", 0.97),
    ("LH", 0.98),
    ("U2", 0.90),
];

const ALL_HAULS: [HaulType; 3] = [HaulType::Short, HaulType::Medium, HaulType::Long];
const ALL_CABINS: [CabinClass; 4] = [
    CabinClass::Economy,
    CabinClass::PremiumEconomy,
    CabinClass::Business,
    CabinClass::First,
];

/// the haul-cabin factor table. immutable once constructed; every cell is
/// populated so lookups cannot miss.
#[derive(Debug, Clone)]
pub struct FlightFactorTable {
    factors: HashMap<(HaulType, CabinClass), FlightFactor>,
    carrier_efficiency: HashMap<String, f64>,
    pub source: String,
    pub version: String,
}

impl FlightFactorTable {
    pub fn builtin() -> FlightFactorTable {
        let economy_base = ECONOMY_BASE_PER_KM.iter().copied().collect();
        let carriers = CARRIER_EFFICIENCY
            .iter()
            .map(|(code, factor)| (code.to_string(), *factor))
            .collect();
        Self::from_parts(
            economy_base,
            CONSERVATIVE_UPLIFT,
            carriers,
            String::from("ICAO Carbon Calculator + myclimate methodology"),
            String::from("2024.2"),
        )
    }

    /// loads a factor override from a TOML document. missing hauls fall
    /// back to the builtin economy bases.
    ///
    /// ```toml
    /// version = "2025.1"
    /// source = "internal benchmark"
    /// conservative_uplift = 1.25
    ///
    /// [economy_base_per_km]
    /// short = 0.162
    ///
    /// [carrier_efficiency]
    /// BA = 0.95
    /// ```
    pub fn from_toml_str(document: &str) -> Result<FlightFactorTable, AssessError> {
        let config: FlightFactorConfig = toml::from_str(document)
            .map_err(|e| AssessError::Internal(format!("flight factor table: {}", e)))?;

        let mut economy_base: HashMap<HaulType, f64> =
            ECONOMY_BASE_PER_KM.iter().copied().collect();
        for (haul, value) in [
            (HaulType::Short, config.economy_base_per_km.short),
            (HaulType::Medium, config.economy_base_per_km.medium),
            (HaulType::Long, config.economy_base_per_km.long),
        ] {
            if let Some(value) = value {
                economy_base.insert(haul, value);
            }
        }

        let builtin = FlightFactorTable::builtin();
        Ok(Self::from_parts(
            economy_base,
            config.conservative_uplift.unwrap_or(CONSERVATIVE_UPLIFT),
            if config.carrier_efficiency.is_empty() {
                builtin.carrier_efficiency
            } else {
                config.carrier_efficiency
            },
            config.source.unwrap_or(builtin.source),
            config.version.unwrap_or(builtin.version),
        ))
    }

    fn from_parts(
        economy_base: HashMap<HaulType, f64>,
        conservative_uplift: f64,
        carrier_efficiency: HashMap<String, f64>,
        source: String,
        version: String,
    ) -> FlightFactorTable {
        let mut factors = HashMap::new();
        for haul in ALL_HAULS {
            let base = economy_base[&haul];
            for cabin in ALL_CABINS {
                let standard = base * cabin.multiplier();
                factors.insert(
                    (haul, cabin),
                    FlightFactor {
                        standard,
                        conservative: standard * conservative_uplift,
                    },
                );
            }
        }
        FlightFactorTable {
            factors,
            carrier_efficiency,
            source,
            version,
        }
    }

    /// factor for one (haul, cabin) cell. the cabin multiplier is already
    /// baked in here; callers must not re-apply it.
    pub fn get(&self, haul: HaulType, cabin: CabinClass) -> FlightFactor {
        self.factors[&(haul, cabin)]
    }

    pub fn carrier_efficiency(&self, carrier_code: &str) -> Option<f64> {
        self.carrier_efficiency
            .get(&carrier_code.to_uppercase())
            .copied()
    }
}

#[derive(Deserialize, Debug, Default)]
struct FlightFactorConfig {
    version: Option<String>,
    source: Option<String>,
    conservative_uplift: Option<f64>,
    #[serde(default)]
    economy_base_per_km: EconomyBaseConfig,
    #[serde(default)]
    carrier_efficiency: HashMap<String, f64>,
}

#[derive(Deserialize, Debug, Default)]
struct EconomyBaseConfig {
    short: Option<f64>,
    medium: Option<f64>,
    long: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_table_is_fully_populated() {
        let table = FlightFactorTable::builtin();
        for haul in ALL_HAULS {
            for cabin in ALL_CABINS {
                let factor = table.get(haul, cabin);
                assert!(factor.standard > 0.0);
                assert!(factor.conservative > factor.standard);
            }
        }
    }

    #[test]
    fn test_cabin_multiplier_baked_in_once() {
        let table = FlightFactorTable::builtin();
        let economy = table.get(HaulType::Short, CabinClass::Economy);
        let business = table.get(HaulType::Short, CabinClass::Business);
        assert_relative_eq!(economy.standard, 0.156);
        assert_relative_eq!(business.standard, 0.156 * 3.0);
    }

    #[test]
    fn test_toml_override_partial() {
        let table = FlightFactorTable::from_toml_str(
            r#"
            version = "2025.1"
            [economy_base_per_km]
            short = 0.162
            "#,
        )
        .expect("should parse");
        assert_eq!(table.version, "2025.1");
        assert_relative_eq!(table.get(HaulType::Short, CabinClass::Economy).standard, 0.162);
        // untouched tiers keep the builtin base
        assert_relative_eq!(table.get(HaulType::Long, CabinClass::Economy).standard, 0.111);
        assert_eq!(table.carrier_efficiency("BA"), Some(0.96));
    }

    #[test]
    fn test_unknown_carrier_has_no_adjustment() {
        let table = FlightFactorTable::builtin();
        assert_eq!(table.carrier_efficiency("ZZ"), None);
        assert_eq!(table.carrier_efficiency("ba"), Some(0.96));
    }
}
