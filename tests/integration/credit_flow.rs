//! Credit application integration tests: the paid-session happy path and
//! every gate that must reject before the backend is called.

use std::collections::HashMap;

use unistay::mocks::{MockBackendFailure, MockPayments};
use unistay::{AgencyId, CheckoutSession, PaymentStatus, StayError};

use crate::common::StayHarness;

#[tokio::test]
async fn test_paid_session_applies_credits() {
    let harness = StayHarness::new();
    harness
        .payments
        .insert_session(MockPayments::paid_session("cs_1", "pi_1", "a1", "10"))
        .await;

    let applied = harness.credits.apply_session_credits("cs_1").await.unwrap();

    assert_eq!(applied, 10);
    assert_eq!(harness.backend.balance(&AgencyId::from("a1")).await, 10);

    let calls = harness.backend.credit_calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].agency, AgencyId::from("a1"));
    assert_eq!(calls[0].credits, 10);
    assert_eq!(calls[0].payment_intent_id, "pi_1");
    assert!(calls[0].description.contains("cs_1"));
}

#[tokio::test]
async fn test_unpaid_session_fails_without_backend_call() {
    let harness = StayHarness::new();
    harness
        .payments
        .insert_session(MockPayments::unpaid_session("cs_1"))
        .await;

    let err = harness.credits.apply_session_credits("cs_1").await.unwrap_err();

    assert!(matches!(
        err,
        StayError::PaymentNotCompleted { ref status } if status == "unpaid"
    ));
    assert_eq!(harness.backend.credit_call_count().await, 0);
}

#[tokio::test]
async fn test_missing_agency_id_is_invalid_metadata() {
    let harness = StayHarness::new();
    let mut session = MockPayments::paid_session("cs_1", "pi_1", "a1", "10");
    session.metadata.remove("agency_id");
    harness.payments.insert_session(session).await;

    let err = harness.credits.apply_session_credits("cs_1").await.unwrap_err();

    assert!(matches!(err, StayError::InvalidSessionMetadata(_)));
    assert_eq!(harness.backend.credit_call_count().await, 0);
}

#[tokio::test]
async fn test_non_positive_or_garbage_credits_amount_is_invalid() {
    for bad_amount in ["0", "-3", "ten", ""] {
        let harness = StayHarness::new();
        harness
            .payments
            .insert_session(MockPayments::paid_session("cs_1", "pi_1", "a1", bad_amount))
            .await;

        let err = harness.credits.apply_session_credits("cs_1").await.unwrap_err();

        assert!(
            matches!(err, StayError::InvalidSessionMetadata(_)),
            "amount '{bad_amount}' should be invalid metadata, got {err:?}"
        );
        assert_eq!(harness.backend.credit_call_count().await, 0);
    }
}

#[tokio::test]
async fn test_paid_session_without_intent_id_is_rejected() {
    let harness = StayHarness::new();
    let mut session = MockPayments::paid_session("cs_1", "pi_1", "a1", "10");
    session.payment_intent_id = None;
    harness.payments.insert_session(session).await;

    let err = harness.credits.apply_session_credits("cs_1").await.unwrap_err();

    assert!(matches!(err, StayError::InvalidSessionMetadata(_)));
    assert_eq!(harness.backend.credit_call_count().await, 0);
}

#[tokio::test]
async fn test_backend_failure_surfaces_as_credit_application_failed() {
    let harness = StayHarness::new();
    harness
        .payments
        .insert_session(MockPayments::paid_session("cs_1", "pi_1", "a1", "10"))
        .await;
    harness
        .backend
        .set_fail_mode(Some(MockBackendFailure::Credits))
        .await;

    let err = harness.credits.apply_session_credits("cs_1").await.unwrap_err();

    assert!(matches!(err, StayError::CreditApplicationFailed(_)));
    assert_eq!(harness.backend.balance(&AgencyId::from("a1")).await, 0);
}

#[tokio::test]
async fn test_provider_outage_surfaces_as_payment_error() {
    let harness = StayHarness::new();
    harness.payments.set_fail_retrievals(true).await;

    let err = harness.credits.apply_session_credits("cs_1").await.unwrap_err();

    assert!(matches!(err, StayError::Payment(_)));
    assert_eq!(harness.backend.credit_call_count().await, 0);
}

#[tokio::test]
async fn test_replay_same_session_applies_once() {
    // The client performs no local dedup (a confirmation page reload runs
    // the flow again); the backend dedupes by payment-intent id.
    let harness = StayHarness::new();
    harness
        .payments
        .insert_session(MockPayments::paid_session("cs_1", "pi_1", "a1", "10"))
        .await;

    assert_eq!(harness.credits.apply_session_credits("cs_1").await.unwrap(), 10);
    assert_eq!(harness.credits.apply_session_credits("cs_1").await.unwrap(), 10);

    assert_eq!(harness.backend.credit_call_count().await, 2);
    assert_eq!(harness.backend.balance(&AgencyId::from("a1")).await, 10);
}

#[tokio::test]
async fn test_no_payment_required_status_is_not_completed() {
    let harness = StayHarness::new();
    harness
        .payments
        .insert_session(CheckoutSession {
            id: "cs_1".to_string(),
            payment_status: PaymentStatus::NoPaymentRequired,
            payment_intent_id: None,
            metadata: HashMap::new(),
        })
        .await;

    let err = harness.credits.apply_session_credits("cs_1").await.unwrap_err();

    assert!(matches!(
        err,
        StayError::PaymentNotCompleted { ref status } if status == "no_payment_required"
    ));
}
