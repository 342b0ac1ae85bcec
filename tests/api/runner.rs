use crate::common::{spawn_harness, spawn_harness_with};
use create_user_checks::runner::{Scenario, run_all, run_scenarios};
use create_user_checks::scenarios::ScenarioOutcome;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn every_scenario_passes_against_a_well_behaved_service() {
    // Arrange
    let harness = spawn_harness().await;

    // Act
    let summary = run_all(&harness.context).await;

    // Assert
    assert_eq!(summary.reports.len(), 11);
    assert!(summary.is_success(), "{:#?}", summary.reports);
    let order: Vec<Scenario> = summary.reports.iter().map(|r| r.scenario).collect();
    assert_eq!(order, Scenario::ALL.to_vec());
}

#[tokio::test]
async fn a_failing_scenario_does_not_abort_the_run() {
    // An endpoint that creates a user for any request
    let harness = spawn_harness_with(ResponseTemplate::new(201)).await;

    let summary = run_all(&harness.context).await;

    assert_eq!(summary.reports.len(), 11);
    assert_eq!(summary.failed(), 6);
    assert_eq!(summary.passed(), 5);
    assert!(!summary.is_success());
    for failing in [
        Scenario::MissingRequiredField,
        Scenario::InvalidDataTypes,
        Scenario::DuplicatePhoneNumber,
        Scenario::DuplicateEmail,
        Scenario::MissingRollNumber,
        Scenario::InvalidRollNumberFormat,
    ] {
        assert!(summary.report(failing).unwrap().is_failure(), "{failing}");
    }
    assert_eq!(
        summary.to_string(),
        "All tests completed. 5 passed, 6 failed."
    );
}

#[tokio::test]
async fn reports_read_like_the_console_output() {
    let harness = spawn_harness().await;

    let summary = run_scenarios(
        &harness.context,
        &[Scenario::ValidInput, Scenario::DifferentHttpMethods],
    )
    .await;

    let lines: Vec<String> = summary.reports.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Valid input test passed".to_string(),
            "Different HTTP methods test skipped - implementation required".to_string(),
        ]
    );
    assert!(matches!(
        summary.report(Scenario::DifferentHttpMethods).unwrap().result,
        Ok(ScenarioOutcome::Skipped { .. })
    ));
}
