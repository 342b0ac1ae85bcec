use super::{ScenarioContext, ScenarioError, ScenarioOutcome, expect_status, send};
use crate::api_client::RollNumberHeader;
use crate::domain::NewUserPayload;
use reqwest::StatusCode;

#[tracing::instrument(name = "Valid input", skip_all)]
pub async fn valid_input(context: &ScenarioContext) -> Result<ScenarioOutcome, ScenarioError> {
    let case = "valid input";
    let response = send(
        context,
        case,
        &NewUserPayload::valid(),
        RollNumberHeader::Configured,
    )
    .await?;
    expect_status(case, &response, &[StatusCode::CREATED])?;
    Ok(ScenarioOutcome::Passed)
}
