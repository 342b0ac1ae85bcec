use crate::common::{FakeUserService, spawn_harness, spawn_harness_with};
use claims::{assert_matches, assert_ok, assert_ok_eq};
use create_user_checks::scenarios::{
    ScenarioOutcome, different_http_methods, rate_limiting, special_characters,
};
use reqwest::StatusCode;
use serde_json::Value;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn special_characters_only_records_the_status() {
    // Arrange
    let harness = spawn_harness_with(ResponseTemplate::new(422)).await;

    // Act
    let outcome = special_characters(&harness.context).await;

    // Assert
    assert_ok_eq!(
        outcome,
        ScenarioOutcome::Observed {
            status: StatusCode::UNPROCESSABLE_ENTITY
        }
    );
}

#[tokio::test]
async fn special_characters_are_sent_verbatim() {
    let harness = spawn_harness().await;

    special_characters(&harness.context).await.unwrap();

    let requests = harness.mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["firstName"], "Test!@#$%^&*()_+-=[]{}|;:,.<>?");
    assert_eq!(body["lastName"], "User!@#$%^&*()_+-=[]{}|;:,.<>?");
    assert_eq!(body["emailId"], "test!@#$%^&*()_+-=[]{}|;:,.<>?@example.com");
}

#[tokio::test]
async fn rate_limiting_stops_at_the_first_429() {
    let harness = spawn_harness_with(FakeUserService::new().with_rate_limit(3)).await;

    let outcome = assert_ok!(rate_limiting(&harness.context).await);

    assert_matches!(outcome, ScenarioOutcome::RateLimited { attempts: 4, .. });
    assert_eq!(harness.received_requests().await, 4);
}

#[tokio::test]
async fn rate_limiting_reports_elapsed_time_without_a_429() {
    let harness = spawn_harness().await;

    let outcome = assert_ok!(rate_limiting(&harness.context).await);

    assert_matches!(outcome, ScenarioOutcome::NotRateLimited { attempts: 10, .. });
    assert_eq!(harness.received_requests().await, 10);
}

#[tokio::test]
async fn rate_limiting_resends_the_same_payload() {
    let harness = spawn_harness().await;

    rate_limiting(&harness.context).await.unwrap();

    let requests = harness.mock_server.received_requests().await.unwrap();
    assert!(requests.windows(2).all(|pair| pair[0].body == pair[1].body));
}

#[tokio::test]
async fn different_http_methods_is_skipped_without_a_call() {
    let harness = spawn_harness().await;

    let outcome = assert_ok!(different_http_methods(&harness.context).await);

    assert_matches!(outcome, ScenarioOutcome::Skipped { .. });
    assert_eq!(harness.received_requests().await, 0);
}
