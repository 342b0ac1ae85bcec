//! Runs every scenario once, in a fixed order, and collects a per-scenario
//! result. A failing scenario is reported and the run moves on.

use crate::scenarios::{self, ScenarioContext, ScenarioError, ScenarioOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    ValidInput,
    MissingRequiredField,
    InvalidDataTypes,
    DuplicatePhoneNumber,
    DuplicateEmail,
    MissingRollNumber,
    InvalidRollNumberFormat,
    BoundaryValues,
    SpecialCharacters,
    RateLimiting,
    DifferentHttpMethods,
}

impl Scenario {
    pub const ALL: [Scenario; 11] = [
        Scenario::ValidInput,
        Scenario::MissingRequiredField,
        Scenario::InvalidDataTypes,
        Scenario::DuplicatePhoneNumber,
        Scenario::DuplicateEmail,
        Scenario::MissingRollNumber,
        Scenario::InvalidRollNumberFormat,
        Scenario::BoundaryValues,
        Scenario::SpecialCharacters,
        Scenario::RateLimiting,
        Scenario::DifferentHttpMethods,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::ValidInput => "Valid input",
            Scenario::MissingRequiredField => "Missing required field",
            Scenario::InvalidDataTypes => "Invalid data types",
            Scenario::DuplicatePhoneNumber => "Duplicate phone number",
            Scenario::DuplicateEmail => "Duplicate email",
            Scenario::MissingRollNumber => "Missing roll number",
            Scenario::InvalidRollNumberFormat => "Invalid roll number format",
            Scenario::BoundaryValues => "Boundary values",
            Scenario::SpecialCharacters => "Special characters",
            Scenario::RateLimiting => "Rate limiting",
            Scenario::DifferentHttpMethods => "Different HTTP methods",
        }
    }

    pub async fn run(self, context: &ScenarioContext) -> Result<ScenarioOutcome, ScenarioError> {
        match self {
            Scenario::ValidInput => scenarios::valid_input(context).await,
            Scenario::MissingRequiredField => scenarios::missing_required_field(context).await,
            Scenario::InvalidDataTypes => scenarios::invalid_data_types(context).await,
            Scenario::DuplicatePhoneNumber => scenarios::duplicate_phone_number(context).await,
            Scenario::DuplicateEmail => scenarios::duplicate_email(context).await,
            Scenario::MissingRollNumber => scenarios::missing_roll_number(context).await,
            Scenario::InvalidRollNumberFormat => {
                scenarios::invalid_roll_number_format(context).await
            }
            Scenario::BoundaryValues => scenarios::boundary_values(context).await,
            Scenario::SpecialCharacters => scenarios::special_characters(context).await,
            Scenario::RateLimiting => scenarios::rate_limiting(context).await,
            Scenario::DifferentHttpMethods => scenarios::different_http_methods(context).await,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub result: Result<ScenarioOutcome, ScenarioError>,
}

impl ScenarioReport {
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

impl std::fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(outcome) => write!(f, "{} test {}", self.scenario, outcome),
            Err(e) => write!(f, "{} test FAILED: {}", self.scenario, e),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<ScenarioReport>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.reports.len() - self.failed()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failure()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn report(&self, scenario: Scenario) -> Option<&ScenarioReport> {
        self.reports.iter().find(|r| r.scenario == scenario)
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "All tests completed. {} passed, {} failed.",
            self.passed(),
            self.failed()
        )
    }
}

/// Runs `scenarios` in order, printing one line per scenario as it finishes.
#[tracing::instrument(name = "Running scenarios", skip_all)]
pub async fn run_scenarios(context: &ScenarioContext, scenarios: &[Scenario]) -> RunSummary {
    let mut summary = RunSummary::default();
    for &scenario in scenarios {
        let result = scenario.run(context).await;
        let report = ScenarioReport { scenario, result };
        match &report.result {
            Ok(outcome) => {
                tracing::info!(scenario = scenario.name(), %outcome, "Scenario finished");
            }
            Err(e) => {
                tracing::error!(
                    scenario = scenario.name(),
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Scenario failed",
                );
            }
        }
        println!("{report}");
        summary.reports.push(report);
    }
    summary
}

pub async fn run_all(context: &ScenarioContext) -> RunSummary {
    run_scenarios(context, &Scenario::ALL).await
}
