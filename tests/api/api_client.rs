use crate::common::{TEST_ROLL_NUMBER, spawn_harness};
use claims::assert_ok;
use create_user_checks::api_client::{ROLL_NUMBER_HEADER, RollNumberHeader};
use create_user_checks::domain::{NewUserPayload, UserField};

#[tokio::test]
async fn configured_roll_number_is_sent_with_every_call() {
    // Arrange
    let harness = spawn_harness().await;

    // Act
    let response = harness
        .context
        .client
        .create_user(&NewUserPayload::valid(), RollNumberHeader::Configured)
        .await;

    // Assert
    assert_eq!(assert_ok!(response).status.as_u16(), 201);
    let requests = harness.mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get(ROLL_NUMBER_HEADER).unwrap(),
        TEST_ROLL_NUMBER
    );
}

#[tokio::test]
async fn response_body_is_kept_as_text() {
    let harness = spawn_harness().await;

    let response = harness
        .context
        .client
        .create_user(&NewUserPayload::valid(), RollNumberHeader::Configured)
        .await
        .unwrap();

    assert!(response.body.contains("User created"));
}

#[tokio::test]
async fn one_client_serves_consecutive_calls() {
    let harness = spawn_harness().await;
    let payload = NewUserPayload::valid();

    let first = harness
        .context
        .client
        .create_user(&payload, RollNumberHeader::Configured)
        .await
        .unwrap();
    let second = harness
        .context
        .client
        .create_user(&payload.without(UserField::EmailId), RollNumberHeader::Configured)
        .await
        .unwrap();

    assert_eq!(first.status.as_u16(), 201);
    assert_eq!(second.status.as_u16(), 400);
}
