//! Street addresses, cities, regions and countries.

use rand::Rng;

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way", "Terrace",
];

const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Church", "Mill", "River", "Spring", "Ridge", "Sunset", "Meadow", "Forest", "Highland",
    "Willow",
];

const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Fairview",
    "Georgetown",
    "Salem",
    "Madison",
    "Clinton",
    "Arlington",
    "Ashland",
    "Burlington",
    "Manchester",
    "Oxford",
    "Clayton",
    "Jackson",
    "Milton",
    "Auburn",
    "Dayton",
    "Lexington",
    "Milford",
    "Winchester",
];

const STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "Mexico",
    "Brazil",
    "United Kingdom",
    "Ireland",
    "France",
    "Germany",
    "Spain",
    "Italy",
    "Netherlands",
    "Sweden",
    "Norway",
    "Poland",
    "Portugal",
    "Japan",
    "China",
    "India",
    "Australia",
    "New Zealand",
    "South Africa",
    "Argentina",
    "Chile",
    "South Korea",
];

/// Numbered street address, e.g. "482 Maple Avenue".
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.gen_range(1..=9999),
        STREET_NAMES[rng.gen_range(0..STREET_NAMES.len())],
        STREET_SUFFIXES[rng.gen_range(0..STREET_SUFFIXES.len())]
    )
}

/// Apartment or suite line, e.g. "Apt. 12".
pub fn secondary_address<R: Rng>(rng: &mut R) -> String {
    if rng.gen_bool(0.5) {
        format!("Apt. {}", rng.gen_range(1..=999))
    } else {
        format!("Suite {}", rng.gen_range(100..=999))
    }
}

pub fn city<R: Rng>(rng: &mut R) -> &'static str {
    CITIES[rng.gen_range(0..CITIES.len())]
}

pub fn state_abbr<R: Rng>(rng: &mut R) -> &'static str {
    STATE_ABBRS[rng.gen_range(0..STATE_ABBRS.len())]
}

/// Five-digit ZIP code.
pub fn zipcode<R: Rng>(rng: &mut R) -> String {
    format!("{:05}", rng.gen_range(501..=99950))
}

pub fn country<R: Rng>(rng: &mut R) -> &'static str {
    COUNTRIES[rng.gen_range(0..COUNTRIES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_street_address_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let addr = street_address(&mut rng);
        let mut parts = addr.splitn(2, ' ');
        assert!(parts.next().unwrap().parse::<u32>().is_ok());
        assert!(!parts.next().unwrap().is_empty());
    }

    #[test]
    fn test_zipcode_is_five_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let zip = zipcode(&mut rng);
            assert_eq!(zip.len(), 5);
            assert!(zip.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
