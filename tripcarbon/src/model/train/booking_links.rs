use crate::model::factors::FactorRepository;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// airports a platform can book, or every route.
#[derive(Debug, Clone, Copy)]
enum Coverage {
    All,
    Airports(&'static [&'static str]),
}

struct BookingPlatform {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    base_url: &'static str,
    coverage: Coverage,
}

/// listed in recommendation order; link generation preserves it.
const BOOKING_PLATFORMS: &[BookingPlatform] = &[
    BookingPlatform {
        id: "trainline",
        name: "Trainline",
        description: "Compare prices across all European operators",
        base_url: "https://www.thetrainline.com/book/results",
        coverage: Coverage::All,
    },
    BookingPlatform {
        id: "omio",
        name: "Omio",
        description: "Compare trains, buses, and flights across Europe",
        base_url: "https://www.omio.com/search",
        coverage: Coverage::All,
    },
    BookingPlatform {
        id: "rail_europe",
        name: "Rail Europe",
        description: "Book trains across 30+ European countries",
        base_url: "https://www.raileurope.com/en-us",
        coverage: Coverage::All,
    },
    BookingPlatform {
        id: "eurostar",
        name: "Eurostar",
        description: "Official Eurostar booking - London to Paris/Brussels/Amsterdam",
        base_url: "https://www.eurostar.com/uk-en/book-eurostar",
        coverage: Coverage::Airports(&["LHR", "CDG", "BRU", "AMS"]),
    },
    BookingPlatform {
        id: "deutsche_bahn",
        name: "Deutsche Bahn",
        description: "Official German railways - ICE high-speed trains",
        base_url: "https://int.bahn.de/en",
        coverage: Coverage::Airports(&["FRA", "MUC", "BER", "DUS", "CGN", "HAM"]),
    },
    BookingPlatform {
        id: "sncf_connect",
        name: "SNCF Connect",
        description: "Official French railways - TGV, Thalys, Eurostar",
        base_url: "https://www.sncf-connect.com/en-en/",
        coverage: Coverage::Airports(&["CDG", "LYS", "MRS", "BCN"]),
    },
    BookingPlatform {
        id: "trenitalia",
        name: "Trenitalia",
        description: "Official Italian railways - Frecciarossa",
        base_url: "https://www.trenitalia.com/en.html",
        coverage: Coverage::Airports(&["FCO", "MXP", "VCE"]),
    },
    BookingPlatform {
        id: "renfe",
        name: "Renfe",
        description: "Official Spanish railways - AVE high-speed",
        base_url: "https://www.renfe.com/es/en",
        coverage: Coverage::Airports(&["MAD", "BCN"]),
    },
    BookingPlatform {
        id: "ns_international",
        name: "NS International",
        description: "Dutch railways international booking",
        base_url: "https://www.nsinternational.com/en",
        coverage: Coverage::Airports(&["AMS", "BRU"]),
    },
];

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BookingLink {
    pub platform: String,
    pub description: String,
    pub url: String,
    pub origin_city: String,
    pub destination_city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<NaiveDate>,
}

/// renders booking links for every platform covering the route. pure
/// string templating, no network calls and no clock reads; omitting the
/// date simply drops the date query parameter.
pub fn booking_links(
    repository: &FactorRepository,
    origin: &str,
    destination: &str,
    date: Option<NaiveDate>,
) -> Vec<BookingLink> {
    let origin = origin.to_uppercase();
    let destination = destination.to_uppercase();
    let origin_city = repository.city_name(&origin);
    let destination_city = repository.city_name(&destination);

    BOOKING_PLATFORMS
        .iter()
        .filter(|platform| match platform.coverage {
            Coverage::All => true,
            Coverage::Airports(codes) => {
                codes.contains(&origin.as_str()) || codes.contains(&destination.as_str())
            }
        })
        .map(|platform| {
            let url = match platform.id {
                "trainline" => {
                    let mut url = format!(
                        "{}?origin={}&destination={}&journeySearchType=single",
                        platform.base_url,
                        urlencode(&origin_city),
                        urlencode(&destination_city)
                    );
                    if let Some(date) = date {
                        url.push_str(&format!("&outwardDate={}", date.format("%Y-%m-%d")));
                    }
                    url
                }
                "omio" => {
                    let mut url = format!(
                        "{}?from={}&to={}&transportModes=train",
                        platform.base_url,
                        urlencode(&origin_city),
                        urlencode(&destination_city)
                    );
                    if let Some(date) = date {
                        url.push_str(&format!("&date={}", date.format("%Y-%m-%d")));
                    }
                    url
                }
                _ => platform.base_url.to_string(),
            };
            BookingLink {
                platform: platform.name.to_string(),
                description: platform.description.to_string(),
                url,
                origin_city: origin_city.clone(),
                destination_city: destination_city.clone(),
                travel_date: date,
            }
        })
        .collect()
}

/// minimal percent-encoding for the query values we produce (city names,
/// which only ever need space escaping in this table).
fn urlencode(value: &str) -> String {
    value.replace(' ', "%20")
}
