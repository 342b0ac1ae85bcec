use super::test_data::{FIXED_EMAIL, PHONE_NUMBER_TOO_LONG, PHONE_NUMBER_TOO_SHORT};
use super::{ScenarioContext, ScenarioError, ScenarioOutcome, expect_status, send};
use crate::api_client::RollNumberHeader;
use crate::domain::{NewUserPayload, UserField, random_phone_number, random_string};
use reqwest::StatusCode;

/// The endpoint may accept or reject these; anything else fails.
#[tracing::instrument(name = "Boundary values", skip_all)]
pub async fn boundary_values(context: &ScenarioContext) -> Result<ScenarioOutcome, ScenarioError> {
    let length = context.run.boundary_string_length;
    let long_string = random_string(length);
    let base = || NewUserPayload::new("Test", "User", random_phone_number(), FIXED_EMAIL);

    let test_cases = [
        (
            format!("{length} character first name"),
            base().with_value(UserField::FirstName, long_string.as_str()),
        ),
        (
            format!("{length} character last name"),
            base().with_value(UserField::LastName, long_string.as_str()),
        ),
        (
            "11 digit phone number".to_string(),
            base().with_value(UserField::PhoneNumber, PHONE_NUMBER_TOO_LONG),
        ),
        (
            "9 digit phone number".to_string(),
            base().with_value(UserField::PhoneNumber, PHONE_NUMBER_TOO_SHORT),
        ),
        (
            format!("{length} character email local part"),
            base().with_value(UserField::EmailId, format!("{long_string}@example.com")),
        ),
    ];

    for (case, payload) in test_cases {
        let response = send(context, &case, &payload, RollNumberHeader::Configured).await?;
        expect_status(
            &case,
            &response,
            &[StatusCode::BAD_REQUEST, StatusCode::CREATED],
        )?;
    }
    Ok(ScenarioOutcome::Passed)
}
