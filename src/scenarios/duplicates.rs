//! Both checks rely on the first registration being accepted by the remote
//! service. When it is not, the second status says nothing about duplicate
//! detection, so a warning is logged before the check runs.

use super::{ScenarioContext, ScenarioError, ScenarioOutcome, expect_status, send};
use crate::api_client::{ApiResponse, RollNumberHeader};
use crate::domain::{NewUserPayload, random_email, random_phone_number};
use reqwest::StatusCode;

#[tracing::instrument(name = "Duplicate phone number", skip_all)]
pub async fn duplicate_phone_number(
    context: &ScenarioContext,
) -> Result<ScenarioOutcome, ScenarioError> {
    let phone_number = random_phone_number();
    let first = NewUserPayload::new("Test1", "User1", phone_number, &random_email("test.user1"));
    let second = NewUserPayload::new("Test2", "User2", phone_number, &random_email("test.user2"));
    submit_twice(context, "duplicate phone number", &first, &second).await
}

#[tracing::instrument(name = "Duplicate email", skip_all)]
pub async fn duplicate_email(context: &ScenarioContext) -> Result<ScenarioOutcome, ScenarioError> {
    let email = random_email("test.user");
    let first = NewUserPayload::new("Test1", "User1", random_phone_number(), &email);
    let second = NewUserPayload::new("Test2", "User2", random_phone_number(), &email);
    submit_twice(context, "duplicate email", &first, &second).await
}

async fn submit_twice(
    context: &ScenarioContext,
    case: &str,
    first: &NewUserPayload,
    second: &NewUserPayload,
) -> Result<ScenarioOutcome, ScenarioError> {
    let registration = send(context, case, first, RollNumberHeader::Configured).await?;
    warn_if_not_registered(case, &registration);
    let response = send(context, case, second, RollNumberHeader::Configured).await?;
    expect_status(case, &response, &[StatusCode::BAD_REQUEST])?;
    Ok(ScenarioOutcome::Passed)
}

fn warn_if_not_registered(case: &str, registration: &ApiResponse) {
    if registration.status != StatusCode::CREATED {
        tracing::warn!(
            case,
            status = %registration.status,
            "The first registration was not accepted. \
            The {case} check depends on remote state and may be inconclusive.",
        );
    }
}
