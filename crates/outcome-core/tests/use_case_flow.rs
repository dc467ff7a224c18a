//! End-to-end tests for use case orchestration and outcome chaining.

use async_trait::async_trait;
use outcome_core::{
    dispatch, Outcome, OutcomeKind, OutcomeResult, PendingOutcome, UseCase, RAW_ERROR_KEY,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SignUpRequest {
    username: String,
    email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegisteredUser {
    username: String,
    active: bool,
}

fn request(username: &str, email: &str) -> SignUpRequest {
    SignUpRequest {
        username: username.to_string(),
        email: email.to_string(),
    }
}

/// Validates a sign-up request, failing with a caller-defined tag.
#[derive(Default)]
struct ValidateSignUp;

#[async_trait]
impl UseCase for ValidateSignUp {
    type Input = SignUpRequest;
    type Output = SignUpRequest;

    async fn execute(&self, input: SignUpRequest) -> OutcomeResult<SignUpRequest> {
        if !input.email.contains('@') {
            return Ok(Outcome::failure_with_kind(
                "invalid email address",
                OutcomeKind::new("VALIDATION"),
            ));
        }
        Ok(Outcome::success(input))
    }
}

/// Registers a validated user.
#[derive(Default)]
struct RegisterUser;

#[async_trait]
impl UseCase for RegisterUser {
    type Input = SignUpRequest;
    type Output = RegisteredUser;

    async fn execute(&self, input: SignUpRequest) -> OutcomeResult<RegisteredUser> {
        Ok(Outcome::success(RegisteredUser {
            username: input.username,
            active: true,
        }))
    }
}

#[tokio::test]
async fn test_single_use_case_captures_context_snapshot() {
    let outcome = RegisterUser.call(request("alice", "alice@example.com")).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.use_case(), "RegisterUser");
    assert_eq!(outcome.value().unwrap().username, "alice");

    let snapshot = outcome.context().get("RegisterUser").unwrap();
    assert_eq!(
        snapshot.get("input").unwrap().get("email"),
        Some(&json!("alice@example.com"))
    );
    assert_eq!(
        snapshot.get("output").unwrap().get("active"),
        Some(&json!(true))
    );
    // Output properties overlay input properties in the merged snapshot.
    assert_eq!(snapshot.get("username"), Some(&json!("alice")));
    assert_eq!(snapshot.get("active"), Some(&json!(true)));
}

#[tokio::test]
async fn test_pipeline_merges_step_contexts() {
    let outcome = ValidateSignUp
        .call(request("bob", "bob@example.com"))
        .await
        .and_then(|validated, _| async move { Ok(RegisterUser.call(validated).await) })
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.use_case(), "RegisterUser");
    assert!(outcome.value().unwrap().active);

    // Both steps' snapshots survive the merge.
    assert!(outcome.context().contains_key("ValidateSignUp"));
    assert!(outcome.context().contains_key("RegisterUser"));
}

#[tokio::test]
async fn test_pipeline_short_circuits_on_validation_failure() {
    let registered = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&registered);

    let outcome = ValidateSignUp
        .call(request("carol", "not-an-email"))
        .await
        .and_then(move |validated, _| {
            flag.store(true, Ordering::SeqCst);
            async move { Ok(RegisterUser.call(validated).await) }
        })
        .await;

    assert!(!registered.load(Ordering::SeqCst));
    assert!(outcome.is_failure());
    assert_eq!(outcome.kind().as_str(), "VALIDATION");
    assert_eq!(outcome.error().message(), "invalid email address");
    assert_eq!(outcome.use_case(), "ValidateSignUp");
}

#[tokio::test]
async fn test_pending_pipeline_with_hooks() {
    let notified = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&notified);

    let outcome = PendingOutcome::new(async move {
        ValidateSignUp.call(request("dave", "dave@example.com")).await
    })
        .and_then(|validated, _| async move { Ok(RegisterUser.call(validated).await) })
        .on_success(move |user, _| {
            assert_eq!(user.username, "dave");
            flag.store(true, Ordering::SeqCst);
        })
        .on_failure(|_, _| panic!("pipeline should not fail"))
        .resolve()
        .await;

    assert!(notified.load(Ordering::SeqCst));
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_unexpected_error_is_normalized_not_raised() {
    let outcome: Outcome<RegisteredUser> = PendingOutcome::new(async move {
        ValidateSignUp.call(request("erin", "erin@example.com")).await
    })
    .and_then(|_, _| async move { Err(anyhow::anyhow!("database unreachable")) })
    .resolve()
    .await;

    assert_eq!(outcome.kind(), &OutcomeKind::UNEXPECTED_ERROR);
    assert_eq!(outcome.error().message(), "database unreachable");
    assert_eq!(
        outcome.context().get(RAW_ERROR_KEY),
        Some(&json!("database unreachable"))
    );
}

#[tokio::test]
async fn test_dispatch_runs_default_constructed_use_case() {
    let outcome = dispatch::<ValidateSignUp>(request("frank", "frank@example.com")).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.use_case(), "ValidateSignUp");
}
