//! Fixed inputs shared by the scenarios, kept here to avoid magic strings

/// Malformed identifying tokens (triggers 400 or 401)
pub const INVALID_ROLL_NUMBERS: [&str; 4] = ["abc", "123abc", "-123", "0"];

/// Punctuation injected into names and the email local part
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Fixed address for the invalid type and boundary payloads
pub const FIXED_EMAIL: &str = "test@example.com";

/// Eleven digits, one more than a valid phone number
pub const PHONE_NUMBER_TOO_LONG: u64 = 99_999_999_999;

/// Nine digits, one fewer than a valid phone number
pub const PHONE_NUMBER_TOO_SHORT: u64 = 999_999_999;

pub const INVALID_FIRST_NAME: i64 = 123;
pub const INVALID_LAST_NAME: i64 = 456;
pub const INVALID_PHONE_NUMBER: &str = "invalid";
pub const INVALID_EMAIL_ID: i64 = 789;
