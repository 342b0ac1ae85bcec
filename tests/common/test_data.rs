//! Shared test data constants to avoid magic strings across integration tests

pub const TEST_ROLL_NUMBER: &str = "2111003010001";

/// Path the fake create-user service is mounted on
pub const CREATE_USER_PATH: &str = "/automation-campus/create/user";

/// Generous enough for a local mock server, small enough to keep timeouts fast
pub const TEST_TIMEOUT_MILLISECONDS: u64 = 2_000;
