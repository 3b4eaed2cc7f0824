//! Synthetic personal and catalog values.
//!
//! Every function draws from the caller's generator, so output is fully
//! determined by the seed.

use convert_case::{Case, Casing};
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Christopher", "Karen", "Charles", "Lisa", "Daniel", "Nancy",
    "Matthew", "Betty", "Anthony", "Sandra", "Mark", "Margaret", "Donald", "Ashley",
    "Steven", "Kimberly", "Andrew", "Emily", "Paul", "Donna", "Joshua", "Michelle",
    "Kenneth", "Carol", "Kevin", "Amanda", "Brian", "Melissa", "Timothy", "Deborah",
    "Ronald", "Stephanie", "Jason", "Rebecca", "George", "Sharon", "Edward", "Laura",
    "Priya", "Wei", "Fatima", "Mateo", "Aisha", "Kenji", "Sofia", "Arjun",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
    "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
    "Patel", "Chen", "Kim", "Singh", "Okafor", "Tanaka", "Rossi", "Novak",
];

const WORDS: &[&str] = &[
    "anchor", "arrow", "atlas", "beacon", "blaze", "breeze", "canyon", "cedar",
    "comet", "coral", "crest", "dawn", "delta", "drift", "echo", "ember",
    "falcon", "fern", "flint", "forge", "frost", "glacier", "harbor", "haven",
    "horizon", "iris", "jade", "lagoon", "lumen", "maple", "meadow", "mesa",
    "nova", "oak", "onyx", "orbit", "pearl", "pine", "prism", "pulse",
    "quartz", "quest", "raven", "ridge", "river", "sage", "shadow", "sierra",
    "spark", "stone", "storm", "summit", "terra", "thunder", "tide", "vertex",
    "vista", "willow", "wind", "zenith",
];

const QUALIFIERS: &[&str] = &["Pro", "X", "Plus", "Mini", "Max", "Series"];

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake",
    "Hill", "Park", "Sunset", "Ridge", "Highland", "Church", "Mill", "River",
];

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way", "Boulevard",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Fairview", "Madison",
    "Georgetown", "Salem", "Clinton", "Arlington", "Ashland", "Burlington",
    "Dayton", "Milton", "Newport", "Oxford",
];

const STATES: &[&str] = &[
    "AL", "AZ", "CA", "CO", "FL", "GA", "IL", "MA", "MI", "MN", "NC", "NJ",
    "NY", "OH", "OR", "PA", "TX", "VA", "WA", "WI",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// "First Last"
pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Lowercase dictionary word.
pub fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, WORDS)
}

/// Catalog name: capitalized word, qualifier token, 3-digit model number.
pub fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = word(rng).to_case(Case::Title);
    let qualifier = pick(rng, QUALIFIERS);
    let model = rng.gen_range(100..=999);
    format!("{} {} {}", base, qualifier, model)
}

/// Mailbox unrelated to the customer's name.
pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let local = match rng.gen_range(0..3) {
        0 => format!("{}.{}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
        1 => format!("{}{}", pick(rng, FIRST_NAMES), rng.gen_range(1..100)),
        _ => format!("{}{}", pick(rng, WORDS), pick(rng, LAST_NAMES)),
    };
    format!("{}@{}", local.to_lowercase(), pick(rng, EMAIL_DOMAINS))
}

/// Phone number in one of a few common North American layouts.
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = rng.gen_range(201..=989);
    let exchange = rng.gen_range(200..=999);
    let line = rng.gen_range(0..=9999);
    match rng.gen_range(0..4) {
        0 => format!("({}) {}-{:04}", area, exchange, line),
        1 => format!("{}-{}-{:04}", area, exchange, line),
        2 => format!("+1-{}-{}-{:04}", area, exchange, line),
        _ => format!(
            "{}.{}.{:04} x{}",
            area,
            exchange,
            line,
            rng.gen_range(100..=9999)
        ),
    }
}

/// Single-line postal address: "street, city, ST zip".
pub fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number = rng.gen_range(1..=9999);
    let street = format!("{} {}", pick(rng, STREET_NAMES), pick(rng, STREET_SUFFIXES));
    let street = if rng.gen_bool(0.2) {
        format!("{} {} Apt. {}", number, street, rng.gen_range(1..=999))
    } else {
        format!("{} {}", number, street)
    };
    format!(
        "{}, {}, {} {:05}",
        street,
        pick(rng, CITIES),
        pick(rng, STATES),
        rng.gen_range(501..=99950)
    )
}

/// Replace every `#` in `template` with a random decimal digit.
pub fn bothify<R: Rng + ?Sized>(rng: &mut R, template: &str) -> String {
    template
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.gen_range(0..10u8)),
            other => other,
        })
        .collect()
}

/// Carrier tracking code, `TRACK-` followed by five digits.
pub fn tracking_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    bothify(rng, "TRACK-#####")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_product_name_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let name = product_name(&mut rng);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 3, "unexpected name {}", name);
            assert!(parts[0].chars().next().unwrap().is_uppercase());
            assert!(QUALIFIERS.contains(&parts[1]));
            let model: u32 = parts[2].parse().unwrap();
            assert!((100..=999).contains(&model));
        }
    }

    #[test]
    fn test_bothify_only_replaces_hashes() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let code = bothify(&mut rng, "AB-##-#");
        assert_eq!(code.len(), 7);
        assert!(code.starts_with("AB-"));
        assert_eq!(&code[5..6], "-");
        assert!(code[3..5].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_address_is_single_line() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let addr = address(&mut rng);
            assert!(!addr.contains('\n'));
            assert_eq!(addr.matches(", ").count(), 2);
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(full_name(&mut a), full_name(&mut b));
        assert_eq!(email(&mut a), email(&mut b));
        assert_eq!(phone_number(&mut a), phone_number(&mut b));
    }
}
