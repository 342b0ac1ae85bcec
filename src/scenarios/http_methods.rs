use super::{ScenarioContext, ScenarioError, ScenarioOutcome};

/// Placeholder: the endpoint only documents POST, so there is nothing to check yet.
#[tracing::instrument(name = "Different HTTP methods", skip_all)]
pub async fn different_http_methods(
    _context: &ScenarioContext,
) -> Result<ScenarioOutcome, ScenarioError> {
    tracing::info!("Different HTTP methods test skipped");
    Ok(ScenarioOutcome::Skipped {
        reason: "implementation required",
    })
}
