use geo::Point;
use std::collections::HashMap;

/// one airport record from the static reference table.
#[derive(Debug, Clone)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// (x = longitude, y = latitude) in degrees
    pub location: Point<f64>,
}

/// embedded IATA subset covering the supported route network.
/// (code, name, city, country, lat, lon)
const AIRPORTS: &[(&str, &str, &str, &str, f64, f64)] = &[
    // United Kingdom
    ("LHR", "London Heathrow", "London", "GB", 51.4700, -0.4543),
    ("LGW", "London Gatwick", "London", "GB", 51.1537, -0.1821),
    ("STN", "London Stansted", "London", "GB", 51.8850, 0.2350),
    ("MAN", "Manchester", "Manchester", "GB", 53.3537, -2.2750),
    ("EDI", "Edinburgh", "Edinburgh", "GB", 55.9500, -3.3725),
    // France
    ("CDG", "Paris Charles de Gaulle", "Paris", "FR", 49.0097, 2.5479),
    ("ORY", "Paris Orly", "Paris", "FR", 48.7233, 2.3794),
    ("NCE", "Nice Côte d'Azur", "Nice", "FR", 43.6584, 7.2159),
    ("LYS", "Lyon Saint-Exupéry", "Lyon", "FR", 45.7256, 5.0811),
    ("MRS", "Marseille Provence", "Marseille", "FR", 43.4393, 5.2214),
    // Germany
    ("FRA", "Frankfurt", "Frankfurt", "DE", 50.0379, 8.5622),
    ("MUC", "Munich", "Munich", "DE", 48.3538, 11.7861),
    ("BER", "Berlin Brandenburg", "Berlin", "DE", 52.3667, 13.5033),
    ("DUS", "Düsseldorf", "Düsseldorf", "DE", 51.2895, 6.7668),
    ("CGN", "Cologne Bonn", "Cologne", "DE", 50.8659, 7.1427),
    ("HAM", "Hamburg", "Hamburg", "DE", 53.6304, 9.9882),
    // Benelux
    ("AMS", "Amsterdam Schiphol", "Amsterdam", "NL", 52.3105, 4.7683),
    ("BRU", "Brussels", "Brussels", "BE", 50.9014, 4.4844),
    // Iberia
    ("MAD", "Madrid Barajas", "Madrid", "ES", 40.4983, -3.5676),
    ("BCN", "Barcelona El Prat", "Barcelona", "ES", 41.2971, 2.0785),
    ("LIS", "Lisbon", "Lisbon", "PT", 38.7756, -9.1354),
    // Italy
    ("FCO", "Rome Fiumicino", "Rome", "IT", 41.8003, 12.2389),
    ("MXP", "Milan Malpensa", "Milan", "IT", 45.6306, 8.7281),
    ("VCE", "Venice Marco Polo", "Venice", "IT", 45.5053, 12.3519),
    // Alpine
    ("ZRH", "Zurich", "Zurich", "CH", 47.4647, 8.5492),
    ("GVA", "Geneva", "Geneva", "CH", 46.2381, 6.1089),
    ("VIE", "Vienna", "Vienna", "AT", 48.1103, 16.5697),
    // Nordics
    ("CPH", "Copenhagen", "Copenhagen", "DK", 55.6180, 12.6508),
    ("ARN", "Stockholm Arlanda", "Stockholm", "SE", 59.6519, 17.9186),
    ("OSL", "Oslo Gardermoen", "Oslo", "NO", 60.1939, 11.1004),
    ("HEL", "Helsinki", "Helsinki", "FI", 60.3172, 24.9633),
    // Central/Eastern Europe
    ("WAW", "Warsaw Chopin", "Warsaw", "PL", 52.1657, 20.9671),
    ("PRG", "Prague", "Prague", "CZ", 50.1008, 14.2600),
    ("ATH", "Athens", "Athens", "GR", 37.9364, 23.9445),
    ("IST", "Istanbul", "Istanbul", "TR", 41.2753, 28.7519),
    ("DUB", "Dublin", "Dublin", "IE", 53.4213, -6.2701),
    // North America
    ("JFK", "New York JFK", "New York", "US", 40.6413, -73.7781),
    ("EWR", "Newark", "New York", "US", 40.6895, -74.1745),
    ("LAX", "Los Angeles", "Los Angeles", "US", 33.9416, -118.4085),
    ("SFO", "San Francisco", "San Francisco", "US", 37.6213, -122.3790),
    ("ORD", "Chicago O'Hare", "Chicago", "US", 41.9742, -87.9073),
    ("BOS", "Boston Logan", "Boston", "US", 42.3656, -71.0096),
    ("YYZ", "Toronto Pearson", "Toronto", "CA", 43.6777, -79.6248),
    // Middle East
    ("DXB", "Dubai", "Dubai", "AE", 25.2532, 55.3657),
    ("DOH", "Doha Hamad", "Doha", "QA", 25.2731, 51.6081),
    // Asia Pacific
    ("SIN", "Singapore Changi", "Singapore", "SG", 1.3644, 103.9915),
    ("HKG", "Hong Kong", "Hong Kong", "HK", 22.3080, 113.9185),
    ("NRT", "Tokyo Narita", "Tokyo", "JP", 35.7720, 140.3929),
    ("SYD", "Sydney", "Sydney", "AU", -33.9399, 151.1753),
    // South America / Africa
    ("GRU", "São Paulo Guarulhos", "São Paulo", "BR", -23.4356, -46.4731),
    ("JNB", "Johannesburg", "Johannesburg", "ZA", -26.1367, 28.2411),
    ("CAI", "Cairo", "Cairo", "EG", 30.1219, 31.4056),
];

pub fn builtin_airports() -> HashMap<String, Airport> {
    AIRPORTS
        .iter()
        .map(|(code, name, city, country, lat, lon)| {
            (
                code.to_string(),
                Airport {
                    code: code.to_string(),
                    name: name.to_string(),
                    city: city.to_string(),
                    country: country.to_string(),
                    location: Point::new(*lon, *lat),
                },
            )
        })
        .collect()
}
