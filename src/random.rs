//! Seeded randomness and the small numeric helpers shared by the generators.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator used for a whole run. ChaCha8 output is stable across platforms
/// and `rand` releases, which keeps databases byte-identical for a seed.
pub type SeededRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> SeededRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Uniform day between `start` and `end`, both inclusive.
pub fn uniform_date<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    start + Duration::days(rng.gen_range(0..=span))
}

/// Uniform day between January 1st of `start_year` and December 31st of `end_year`.
pub fn uniform_date_in_years<R: Rng + ?Sized>(rng: &mut R, start_year: i32, end_year: i32) -> NaiveDate {
    uniform_date(rng, ymd(start_year, 1, 1), ymd(end_year, 12, 31))
}
