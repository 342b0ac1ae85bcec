use super::{ScenarioContext, ScenarioError, ScenarioOutcome, send};
use crate::api_client::RollNumberHeader;
use crate::domain::NewUserPayload;
use reqwest::StatusCode;
use std::time::Instant;

/// Resends one payload until a 429 shows up or the attempts run out.
/// Neither ending is a failure.
#[tracing::instrument(name = "Rate limiting", skip_all, fields(attempts = context.run.rate_limit_attempts))]
pub async fn rate_limiting(context: &ScenarioContext) -> Result<ScenarioOutcome, ScenarioError> {
    let payload = NewUserPayload::valid();
    let attempts = context.run.rate_limit_attempts;
    let start = Instant::now();

    for attempt in 1..=attempts {
        let case = format!("rate limiting attempt {attempt}");
        let response = send(context, &case, &payload, RollNumberHeader::Configured).await?;
        if response.status == StatusCode::TOO_MANY_REQUESTS {
            tracing::info!(attempt, "Rate limiting detected");
            return Ok(ScenarioOutcome::RateLimited {
                attempts: attempt,
                elapsed: start.elapsed(),
            });
        }
    }

    Ok(ScenarioOutcome::NotRateLimited {
        attempts,
        elapsed: start.elapsed(),
    })
}
