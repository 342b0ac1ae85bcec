use super::test_data::{
    FIXED_EMAIL, INVALID_EMAIL_ID, INVALID_FIRST_NAME, INVALID_LAST_NAME, INVALID_PHONE_NUMBER,
};
use super::{ScenarioContext, ScenarioError, ScenarioOutcome, expect_status, send};
use crate::api_client::RollNumberHeader;
use crate::domain::{NewUserPayload, UserField, random_phone_number};
use reqwest::StatusCode;
use serde_json::Value;

#[tracing::instrument(name = "Invalid data types", skip_all)]
pub async fn invalid_data_types(
    context: &ScenarioContext,
) -> Result<ScenarioOutcome, ScenarioError> {
    let test_cases: [(UserField, Value); 4] = [
        (UserField::FirstName, INVALID_FIRST_NAME.into()),
        (UserField::LastName, INVALID_LAST_NAME.into()),
        (UserField::PhoneNumber, INVALID_PHONE_NUMBER.into()),
        (UserField::EmailId, INVALID_EMAIL_ID.into()),
    ];
    for (field, value) in test_cases {
        let case = format!("{field} set to {value}");
        let payload = NewUserPayload::new("Test", "User", random_phone_number(), FIXED_EMAIL)
            .with_value(field, value);
        let response = send(context, &case, &payload, RollNumberHeader::Configured).await?;
        expect_status(&case, &response, &[StatusCode::BAD_REQUEST])?;
    }
    Ok(ScenarioOutcome::Passed)
}
