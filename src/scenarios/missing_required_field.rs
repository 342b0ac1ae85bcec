use super::{ScenarioContext, ScenarioError, ScenarioOutcome, expect_status, send};
use crate::api_client::RollNumberHeader;
use crate::domain::{NewUserPayload, UserField};
use reqwest::StatusCode;

/// Drops each required field in turn; every sub-case must be rejected.
#[tracing::instrument(name = "Missing required field", skip_all)]
pub async fn missing_required_field(
    context: &ScenarioContext,
) -> Result<ScenarioOutcome, ScenarioError> {
    for field in UserField::ALL {
        let case = format!("missing {field}");
        let payload = NewUserPayload::valid().without(field);
        let response = send(context, &case, &payload, RollNumberHeader::Configured).await?;
        expect_status(&case, &response, &[StatusCode::BAD_REQUEST])?;
    }
    Ok(ScenarioOutcome::Passed)
}
