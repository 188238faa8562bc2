//! The base-game world map.

use super::city_board::{CityBoard, CityRecord};
use crate::disease::DiseaseColor;

use DiseaseColor::{Black, Blue, Red, Yellow};

/// The 48 cities of the base game and their colors.
pub const STANDARD_CITIES: [(&str, DiseaseColor); 48] = [
    ("Atlanta", Blue),
    ("Chicago", Blue),
    ("Montreal", Blue),
    ("New York", Blue),
    ("Washington", Blue),
    ("San Francisco", Blue),
    ("London", Blue),
    ("Madrid", Blue),
    ("Paris", Blue),
    ("Essen", Blue),
    ("Milan", Blue),
    ("St. Petersburg", Blue),
    ("Los Angeles", Yellow),
    ("Mexico City", Yellow),
    ("Miami", Yellow),
    ("Bogota", Yellow),
    ("Lima", Yellow),
    ("Santiago", Yellow),
    ("Buenos Aires", Yellow),
    ("Sao Paulo", Yellow),
    ("Lagos", Yellow),
    ("Kinshasa", Yellow),
    ("Johannesburg", Yellow),
    ("Khartoum", Yellow),
    ("Algiers", Black),
    ("Cairo", Black),
    ("Istanbul", Black),
    ("Moscow", Black),
    ("Baghdad", Black),
    ("Riyadh", Black),
    ("Tehran", Black),
    ("Karachi", Black),
    ("Delhi", Black),
    ("Mumbai", Black),
    ("Chennai", Black),
    ("Kolkata", Black),
    ("Beijing", Red),
    ("Seoul", Red),
    ("Tokyo", Red),
    ("Shanghai", Red),
    ("Hong Kong", Red),
    ("Taipei", Red),
    ("Osaka", Red),
    ("Bangkok", Red),
    ("Ho Chi Minh City", Red),
    ("Manila", Red),
    ("Jakarta", Red),
    ("Sydney", Red),
];

/// Every route on the base-game map, each listed once.
pub const STANDARD_ROUTES: [(&str, &str); 93] = [
    ("Atlanta", "Chicago"),
    ("Atlanta", "Washington"),
    ("Atlanta", "Miami"),
    ("Chicago", "San Francisco"),
    ("Chicago", "Los Angeles"),
    ("Chicago", "Mexico City"),
    ("Chicago", "Montreal"),
    ("Montreal", "New York"),
    ("Montreal", "Washington"),
    ("New York", "Washington"),
    ("New York", "London"),
    ("New York", "Madrid"),
    ("Washington", "Miami"),
    ("San Francisco", "Tokyo"),
    ("San Francisco", "Manila"),
    ("San Francisco", "Los Angeles"),
    ("London", "Madrid"),
    ("London", "Paris"),
    ("London", "Essen"),
    ("Madrid", "Paris"),
    ("Madrid", "Algiers"),
    ("Madrid", "Sao Paulo"),
    ("Paris", "Essen"),
    ("Paris", "Milan"),
    ("Paris", "Algiers"),
    ("Essen", "Milan"),
    ("Essen", "St. Petersburg"),
    ("Milan", "Istanbul"),
    ("St. Petersburg", "Istanbul"),
    ("St. Petersburg", "Moscow"),
    ("Los Angeles", "Mexico City"),
    ("Los Angeles", "Sydney"),
    ("Mexico City", "Miami"),
    ("Mexico City", "Bogota"),
    ("Mexico City", "Lima"),
    ("Miami", "Bogota"),
    ("Bogota", "Lima"),
    ("Bogota", "Buenos Aires"),
    ("Bogota", "Sao Paulo"),
    ("Lima", "Santiago"),
    ("Buenos Aires", "Sao Paulo"),
    ("Sao Paulo", "Lagos"),
    ("Lagos", "Khartoum"),
    ("Lagos", "Kinshasa"),
    ("Kinshasa", "Khartoum"),
    ("Kinshasa", "Johannesburg"),
    ("Johannesburg", "Khartoum"),
    ("Khartoum", "Cairo"),
    ("Algiers", "Istanbul"),
    ("Algiers", "Cairo"),
    ("Cairo", "Istanbul"),
    ("Cairo", "Baghdad"),
    ("Cairo", "Riyadh"),
    ("Istanbul", "Moscow"),
    ("Istanbul", "Baghdad"),
    ("Moscow", "Tehran"),
    ("Baghdad", "Tehran"),
    ("Baghdad", "Karachi"),
    ("Baghdad", "Riyadh"),
    ("Riyadh", "Karachi"),
    ("Tehran", "Karachi"),
    ("Tehran", "Delhi"),
    ("Karachi", "Mumbai"),
    ("Karachi", "Delhi"),
    ("Delhi", "Mumbai"),
    ("Delhi", "Chennai"),
    ("Delhi", "Kolkata"),
    ("Mumbai", "Chennai"),
    ("Chennai", "Kolkata"),
    ("Chennai", "Bangkok"),
    ("Chennai", "Jakarta"),
    ("Kolkata", "Bangkok"),
    ("Kolkata", "Hong Kong"),
    ("Beijing", "Seoul"),
    ("Beijing", "Shanghai"),
    ("Seoul", "Shanghai"),
    ("Seoul", "Tokyo"),
    ("Tokyo", "Shanghai"),
    ("Tokyo", "Osaka"),
    ("Shanghai", "Taipei"),
    ("Shanghai", "Hong Kong"),
    ("Hong Kong", "Taipei"),
    ("Hong Kong", "Manila"),
    ("Hong Kong", "Ho Chi Minh City"),
    ("Hong Kong", "Bangkok"),
    ("Taipei", "Osaka"),
    ("Taipei", "Manila"),
    ("Bangkok", "Jakarta"),
    ("Bangkok", "Ho Chi Minh City"),
    ("Ho Chi Minh City", "Jakarta"),
    ("Ho Chi Minh City", "Manila"),
    ("Manila", "Sydney"),
    ("Jakarta", "Sydney"),
];

/// Loader records for the standard map.
#[must_use]
pub fn standard_records() -> Vec<CityRecord> {
    let mut records: Vec<CityRecord> = STANDARD_CITIES
        .iter()
        .map(|&(name, color)| CityRecord::new(name, color))
        .collect();

    for &(from, to) in STANDARD_ROUTES.iter() {
        if let Some(record) = records.iter_mut().find(|r| r.name == from) {
            record.neighbours.push(to.to_string());
        }
    }

    records
}

impl CityBoard {
    /// The base-game map.
    #[must_use]
    pub fn standard() -> Self {
        CityBoard::from_records(&standard_records()).expect("standard map data is consistent")
    }
}
