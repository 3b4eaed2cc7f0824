//! Customer population and its injected data-quality noise.

use crate::config::GeneratorConfig;
use crate::entity::{Gender, Tier};
use crate::error::Result;
use crate::faker;
use crate::models::Customer;
use crate::random::uniform_date_in_years;
use chrono::Duration;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;
use rand::Rng;

pub const MIN_AGE_YEARS: i64 = 18;
pub const MAX_AGE_YEARS: i64 = 70;
pub const REGISTRATION_YEARS: (i32, i32) = (2018, 2024);

/// Generate `config.customers` rows, then blank out contact fields and copy
/// identities between rows at the configured rates.
pub fn generate_customers<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Vec<Customer>> {
    let tiers = WeightedIndex::new(Tier::WEIGHTS)?;
    let reference = config.reference_date();

    let mut customers: Vec<Customer> = (1..=config.customers as i32)
        .map(|id| {
            let name = faker::full_name(rng);
            let gender = Gender::ALL[rng.gen_range(0..Gender::ALL.len())];
            let age_days = rng.gen_range(MIN_AGE_YEARS * 365..=MAX_AGE_YEARS * 365);
            let date_of_birth = reference - Duration::days(age_days);
            let email = faker::email(rng);
            let phone_number = faker::phone_number(rng);
            let address = faker::address(rng);
            let tier = Tier::ALL[tiers.sample(rng)];
            let (first_year, last_year) = REGISTRATION_YEARS;
            let registration_date = uniform_date_in_years(rng, first_year, last_year);

            Customer {
                id,
                name,
                gender,
                date_of_birth,
                email: Some(email),
                phone_number: Some(phone_number),
                address: Some(address),
                tier,
                registration_date,
                total_spent: 0.0,
            }
        })
        .collect();

    inject_missing_contacts(rng, &mut customers, config.missing_contact_count());
    inject_duplicate_identities(rng, &mut customers, config.duplicate_customer_count());

    tracing::debug!("Generated {} customers", customers.len());
    Ok(customers)
}

/// Pick `count` distinct rows and null exactly one of email, phone or address
/// in each.
pub fn inject_missing_contacts<R: Rng + ?Sized>(
    rng: &mut R,
    customers: &mut [Customer],
    count: usize,
) {
    let count = count.min(customers.len());
    for idx in index::sample(rng, customers.len(), count) {
        let customer = &mut customers[idx];
        match rng.gen_range(0..3) {
            0 => customer.email = None,
            1 => customer.phone_number = None,
            _ => customer.address = None,
        }
    }
    tracing::debug!("Removed a contact field from {} customers", count);
}

/// Pick `count` distinct target rows; each takes the name of a uniformly
/// chosen source row, and its email half of the time.
///
/// The source may be the target itself or a row that was already overwritten,
/// so copies can chain.
pub fn inject_duplicate_identities<R: Rng + ?Sized>(
    rng: &mut R,
    customers: &mut [Customer],
    count: usize,
) {
    let count = count.min(customers.len());
    for idx in index::sample(rng, customers.len(), count) {
        let source = rng.gen_range(0..customers.len());
        let name = customers[source].name.clone();
        let email = customers[source].email.clone();

        customers[idx].name = name;
        if rng.gen_bool(0.5) {
            customers[idx].email = email;
        }
    }
    tracing::debug!("Duplicated identity of {} customers", count);
}
