use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// how the intensity figure was obtained. drives confidence scoring.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GridQuality {
    Measured,
    Estimated,
    Default,
}

/// resolved grid carbon intensity for one country.
#[derive(Debug, Clone)]
pub struct GridIntensity {
    pub country: String,
    pub value_g_per_kwh: f64,
    pub source: String,
    pub quality: GridQuality,
}

/// world-average fallback when a country is not in the table.
pub const GLOBAL_AVERAGE_G_PER_KWH: f64 = 475.0;
pub const GLOBAL_AVERAGE_SOURCE: &str = "IPCC 2024 global average";

/// (country, gCO₂/kWh, source, measured?) — ENTSO-E / EPA eGRID / IEA 2024
/// snapshot. estimated entries carry `false`.
const GRID_INTENSITY: &[(&str, f64, &str, bool)] = &[
    // Europe, low carbon
    ("FR", 56.0, "ENTSO-E 2024", true),
    ("SE", 41.0, "ENTSO-E 2024", true),
    ("NO", 29.0, "ENTSO-E 2024", true),
    ("FI", 131.0, "ENTSO-E 2024", true),
    ("CH", 48.0, "IEA 2024", true),
    ("AT", 108.0, "ENTSO-E 2024", true),
    ("IS", 28.0, "IEA 2024", true),
    // Europe, mid
    ("BE", 167.0, "ENTSO-E 2024", true),
    ("DK", 158.0, "ENTSO-E 2024", true),
    ("ES", 161.0, "ENTSO-E 2024", true),
    ("PT", 178.0, "ENTSO-E 2024", true),
    ("IT", 267.0, "ENTSO-E 2024", true),
    ("GB", 198.0, "National Grid 2024", true),
    ("IE", 296.0, "ENTSO-E 2024", true),
    ("NL", 328.0, "ENTSO-E 2024", true),
    ("HU", 223.0, "ENTSO-E 2024", true),
    ("HR", 187.0, "ENTSO-E 2024", true),
    // Europe, coal heavy
    ("DE", 366.0, "ENTSO-E 2024", true),
    ("PL", 773.0, "ENTSO-E 2024", true),
    ("CZ", 436.0, "ENTSO-E 2024", true),
    ("GR", 341.0, "ENTSO-E 2024", true),
    ("EE", 723.0, "ENTSO-E 2024", true),
    ("TR", 438.0, "IEA 2024", false),
    // Americas
    ("US", 386.0, "EPA eGRID 2024", true),
    ("CA", 120.0, "IEA 2024", true),
    ("MX", 435.0, "IEA 2024", false),
    ("BR", 103.0, "IEA 2024", true),
    ("AR", 338.0, "IEA 2024", false),
    ("CL", 351.0, "IEA 2024", false),
    // Middle East
    ("AE", 415.0, "IEA 2024", false),
    ("QA", 397.0, "IEA 2024", false),
    ("SA", 530.0, "IEA 2024", false),
    ("IL", 465.0, "IEA 2024", false),
    // Asia Pacific
    ("JP", 459.0, "IEA 2024", true),
    ("KR", 436.0, "IEA 2024", true),
    ("CN", 555.0, "IEA 2024", false),
    ("IN", 708.0, "IEA 2024", false),
    ("SG", 408.0, "IEA 2024", true),
    ("HK", 619.0, "IEA 2024", false),
    ("TH", 449.0, "IEA 2024", false),
    ("AU", 505.0, "IEA 2024", true),
    ("NZ", 118.0, "IEA 2024", true),
    // Africa
    ("ZA", 709.0, "IEA 2024", true),
    ("EG", 442.0, "IEA 2024", false),
    ("KE", 127.0, "IEA 2024", false),
    ("MA", 610.0, "IEA 2024", false),
];

#[derive(Debug, Clone)]
pub struct GridIntensityTable {
    entries: HashMap<String, (f64, String, GridQuality)>,
}

impl GridIntensityTable {
    pub fn builtin() -> GridIntensityTable {
        let entries = GRID_INTENSITY
            .iter()
            .map(|(country, value, source, measured)| {
                let quality = if *measured {
                    GridQuality::Measured
                } else {
                    GridQuality::Estimated
                };
                (country.to_string(), (*value, source.to_string(), quality))
            })
            .collect();
        GridIntensityTable { entries }
    }

    /// country-specific intensity, if the snapshot covers the country.
    pub fn lookup(&self, country_code: &str) -> Option<GridIntensity> {
        let country = country_code.to_uppercase();
        self.entries
            .get(&country)
            .map(|(value, source, quality)| GridIntensity {
                country,
                value_g_per_kwh: *value,
                source: source.clone(),
                quality: *quality,
            })
    }

    /// country-specific intensity or the global-average fallback. the
    /// fallback carries `GridQuality::Default` so the confidence scorer
    /// can record the degradation.
    pub fn lookup_or_default(&self, country_code: &str) -> GridIntensity {
        self.lookup(country_code).unwrap_or_else(|| GridIntensity {
            country: country_code.to_uppercase(),
            value_g_per_kwh: GLOBAL_AVERAGE_G_PER_KWH,
            source: GLOBAL_AVERAGE_SOURCE.to_string(),
            quality: GridQuality::Default,
        })
    }
}
