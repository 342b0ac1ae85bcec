//! Random values that keep each registration unique on the remote service.

use rand::Rng;
use rand::distributions::Alphanumeric;
use uuid::Uuid;

const PHONE_NUMBER_BASE: u64 = 1_000_000_000;
const PHONE_NUMBER_SPREAD: u64 = 900_000_000;

/// A ten digit phone number in `1_000_000_000..1_900_000_000`.
pub fn random_phone_number() -> u64 {
    PHONE_NUMBER_BASE + rand::thread_rng().gen_range(0..PHONE_NUMBER_SPREAD)
}

/// An `@example.com` address whose local part starts with `prefix`.
///
/// The UUID suffix keeps repeated runs from colliding on "already registered".
pub fn random_email(prefix: &str) -> String {
    format!("{}{}@example.com", prefix, Uuid::new_v4().simple())
}

/// `length` ASCII alphanumeric characters.
pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
