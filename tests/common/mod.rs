//! Common test utilities shared between the mocked and the live suites.
//! This module is accessible in both tests/api and tests/live.

pub mod test_data;

// Re-export commonly used items for convenience
pub use fake_user_service::FakeUserService;
pub use helpers::*;
pub use test_data::*;
