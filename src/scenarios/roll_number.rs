use super::test_data::INVALID_ROLL_NUMBERS;
use super::{ScenarioContext, ScenarioError, ScenarioOutcome, expect_status, send};
use crate::api_client::RollNumberHeader;
use crate::domain::NewUserPayload;
use reqwest::StatusCode;

#[tracing::instrument(name = "Missing roll number", skip_all)]
pub async fn missing_roll_number(
    context: &ScenarioContext,
) -> Result<ScenarioOutcome, ScenarioError> {
    let case = "missing roll number";
    let response = send(
        context,
        case,
        &NewUserPayload::valid(),
        RollNumberHeader::Omitted,
    )
    .await?;
    expect_status(case, &response, &[StatusCode::UNAUTHORIZED])?;
    Ok(ScenarioOutcome::Passed)
}

/// The same payload is sent once per malformed token.
#[tracing::instrument(name = "Invalid roll number format", skip_all)]
pub async fn invalid_roll_number_format(
    context: &ScenarioContext,
) -> Result<ScenarioOutcome, ScenarioError> {
    let payload = NewUserPayload::valid();
    for roll_number in INVALID_ROLL_NUMBERS {
        let case = format!("invalid roll number {roll_number:?}");
        let response = send(
            context,
            &case,
            &payload,
            RollNumberHeader::Custom(roll_number),
        )
        .await?;
        expect_status(
            &case,
            &response,
            &[StatusCode::BAD_REQUEST, StatusCode::UNAUTHORIZED],
        )?;
    }
    Ok(ScenarioOutcome::Passed)
}
