//! One async function per scenario. Each takes the shared `ScenarioContext`,
//! makes its calls in order and checks the status codes it gets back.

mod boundary_values;
mod duplicates;
mod http_methods;
mod invalid_data_types;
mod missing_required_field;
mod outcome;
mod rate_limiting;
mod roll_number;
mod special_characters;
pub mod test_data;
mod valid_input;

pub use boundary_values::boundary_values;
pub use duplicates::{duplicate_email, duplicate_phone_number};
pub use http_methods::different_http_methods;
pub use invalid_data_types::invalid_data_types;
pub use missing_required_field::missing_required_field;
pub use outcome::{ScenarioError, ScenarioOutcome};
pub use rate_limiting::rate_limiting;
pub use roll_number::{invalid_roll_number_format, missing_roll_number};
pub use special_characters::special_characters;
pub use valid_input::valid_input;

use crate::api_client::{ApiResponse, CreateUserClient, RollNumberHeader};
use crate::configuration::RunSettings;
use crate::domain::NewUserPayload;
use reqwest::StatusCode;

/// Everything a scenario needs, built once per run.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    pub client: CreateUserClient,
    pub run: RunSettings,
}

async fn send(
    context: &ScenarioContext,
    case: &str,
    payload: &NewUserPayload,
    roll_number: RollNumberHeader<'_>,
) -> Result<ApiResponse, ScenarioError> {
    context
        .client
        .create_user(payload, roll_number)
        .await
        .map_err(|source| ScenarioError::Transport {
            case: case.to_string(),
            source,
        })
}

fn expect_status(
    case: &str,
    response: &ApiResponse,
    accepted: &[StatusCode],
) -> Result<(), ScenarioError> {
    if accepted.contains(&response.status) {
        return Ok(());
    }
    Err(ScenarioError::UnexpectedStatus {
        case: case.to_string(),
        expected: accepted.to_vec(),
        actual: response.status,
    })
}
