use crate::api_client::ApiCallError;
use crate::utils::error_chain_fmt;
use reqwest::StatusCode;
use std::time::Duration;

/// How a scenario ended when none of its checks failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Passed,
    /// The status was recorded but not checked.
    Observed { status: StatusCode },
    RateLimited { attempts: u8, elapsed: Duration },
    NotRateLimited { attempts: u8, elapsed: Duration },
    Skipped { reason: &'static str },
}

impl std::fmt::Display for ScenarioOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioOutcome::Passed => write!(f, "passed"),
            ScenarioOutcome::Observed { status } => write!(f, "completed with response {status}"),
            ScenarioOutcome::RateLimited { attempts, elapsed } => write!(
                f,
                "rate limiting detected after {attempts} requests in {:.3} seconds",
                elapsed.as_secs_f64()
            ),
            ScenarioOutcome::NotRateLimited { attempts, elapsed } => write!(
                f,
                "sent {attempts} requests in {:.3} seconds without rate limiting",
                elapsed.as_secs_f64()
            ),
            ScenarioOutcome::Skipped { reason } => write!(f, "skipped - {reason}"),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ScenarioError {
    #[error("Expected {} for {case}, got {actual}.", format_statuses(.expected))]
    UnexpectedStatus {
        case: String,
        expected: Vec<StatusCode>,
        actual: StatusCode,
    },
    #[error("No response received for {case}.")]
    Transport {
        case: String,
        #[source]
        source: ApiCallError,
    },
}

impl std::fmt::Debug for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn format_statuses(statuses: &[StatusCode]) -> String {
    statuses
        .iter()
        .map(|status| status.as_u16().to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
