use super::test_data::SPECIAL_CHARACTERS;
use super::{ScenarioContext, ScenarioError, ScenarioOutcome, send};
use crate::api_client::RollNumberHeader;
use crate::domain::{NewUserPayload, random_phone_number};

#[tracing::instrument(name = "Special characters", skip_all)]
pub async fn special_characters(
    context: &ScenarioContext,
) -> Result<ScenarioOutcome, ScenarioError> {
    let payload = NewUserPayload::new(
        &format!("Test{SPECIAL_CHARACTERS}"),
        &format!("User{SPECIAL_CHARACTERS}"),
        random_phone_number(),
        &format!("test{SPECIAL_CHARACTERS}@example.com"),
    );
    let response = send(
        context,
        "special characters",
        &payload,
        RollNumberHeader::Configured,
    )
    .await?;
    tracing::info!(status = %response.status, "Special characters test response");
    Ok(ScenarioOutcome::Observed {
        status: response.status,
    })
}
