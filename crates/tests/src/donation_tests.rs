use std::sync::Arc;
use std::time::Duration;

use client::{
    is_checkout_return, ApiClient, DonationFlow, KeyValueStore, MemoryStore, PaymentOutcome,
    PaymentSettings, CURRENT_PAYMENT_KEY,
};
use shared_types::AppErrorKind;

use crate::common::{failed, paid, pending, spawn_backend, PollStep};

fn flow_with(
    api: &ApiClient,
    settings: PaymentSettings,
) -> (DonationFlow<Arc<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (
        DonationFlow::new(api.clone(), store.clone(), settings),
        store,
    )
}

fn fast_settings() -> PaymentSettings {
    PaymentSettings {
        poll_interval_secs: 0,
        poll_ceiling_secs: 5,
    }
}

#[tokio::test]
async fn amount_below_minimum_is_rejected_before_any_network_call() {
    let (api, backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    let err = flow.create(50).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.message.contains("Minimum Donation"));

    assert!(backend.requests().is_empty(), "no request may be issued");
    assert_eq!(store.get(CURRENT_PAYMENT_KEY).unwrap(), None);
}

#[tokio::test]
async fn amount_above_maximum_is_rejected_before_any_network_call() {
    let (api, backend) = spawn_backend().await;
    let (flow, _store) = flow_with(&api, fast_settings());

    let err = flow.create(250_000).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.message.contains("Maximum Donation"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn create_returns_checkout_url_and_persists_intent_id() {
    let (api, _backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    let response = flow.create(150).await.unwrap();
    assert!(response.checkout_url.contains("checkout.paymongo.com"));
    assert_eq!(
        store.get(CURRENT_PAYMENT_KEY).unwrap().as_deref(),
        Some(response.payment_intent_id.as_str())
    );
}

#[tokio::test]
async fn success_on_second_poll_stops_loop_and_clears_persisted_id() {
    let (api, backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    let response = flow.create(150).await.unwrap();
    backend.clear_requests();
    backend.script_payment(vec![pending(), paid()]);

    let outcome = flow
        .poll_with(
            &response.payment_intent_id,
            Duration::from_millis(20),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(outcome, PaymentOutcome::Succeeded);
    assert_eq!(backend.request_count("payment-status"), 2);
    assert_eq!(store.get(CURRENT_PAYMENT_KEY).unwrap(), None);
}

#[tokio::test]
async fn failed_gateway_status_stops_loop() {
    let (api, backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    let response = flow.create(500).await.unwrap();
    backend.script_payment(vec![failed()]);

    let outcome = flow
        .poll_with(
            &response.payment_intent_id,
            Duration::from_millis(20),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(outcome, PaymentOutcome::Failed);
    assert_eq!(store.get(CURRENT_PAYMENT_KEY).unwrap(), None);
}

#[tokio::test]
async fn poll_stops_exactly_at_ceiling_on_perpetual_pending() {
    let (api, backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    let response = flow.create(150).await.unwrap();
    // Empty script: the gateway answers "pending" forever.
    backend.script_payment(Vec::new());

    let started = std::time::Instant::now();
    let outcome = flow
        .poll_with(
            &response.payment_intent_id,
            Duration::from_millis(20),
            Duration::from_millis(150),
        )
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(outcome, PaymentOutcome::TimedOut);
    assert!(elapsed >= Duration::from_millis(150), "stopped early: {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(5), "loop hung: {:?}", elapsed);
    // A timeout is not definitive; the id stays for resume.
    assert!(store.get(CURRENT_PAYMENT_KEY).unwrap().is_some());
}

#[tokio::test]
async fn transport_error_on_one_tick_is_swallowed() {
    let (api, backend) = spawn_backend().await;
    let (flow, _store) = flow_with(&api, fast_settings());

    let response = flow.create(150).await.unwrap();
    backend.script_payment(vec![PollStep::Error, paid()]);

    let outcome = flow
        .poll_with(
            &response.payment_intent_id,
            Duration::from_millis(20),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(outcome, PaymentOutcome::Succeeded);
}

#[tokio::test]
async fn resume_picks_up_persisted_payment() {
    let (api, backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    store.set(CURRENT_PAYMENT_KEY, "pi_restarted").unwrap();
    backend.script_payment(vec![paid()]);

    let outcome = flow.resume().await.unwrap();
    assert_eq!(outcome, Some(PaymentOutcome::Succeeded));
    assert_eq!(store.get(CURRENT_PAYMENT_KEY).unwrap(), None);
}

#[tokio::test]
async fn resume_without_pending_payment_is_a_noop() {
    let (api, backend) = spawn_backend().await;
    let (flow, _store) = flow_with(&api, fast_settings());

    let outcome = flow.resume().await.unwrap();
    assert_eq!(outcome, None);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn deep_link_matcher_uses_exact_marker() {
    assert!(is_checkout_return(
        "https://checkout.paymongo.com/mobile/return?ref=abc"
    ));
    assert!(!is_checkout_return("https://checkout.paymongo.com/pay"));
}

#[tokio::test]
async fn checkout_return_link_rechecks_status_immediately() {
    let (api, backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    store.set(CURRENT_PAYMENT_KEY, "pi_returned").unwrap();
    backend.script_payment(vec![paid()]);

    let outcome = flow
        .handle_deep_link("https://checkout.paymongo.com/mobile/return?ref=xyz")
        .await
        .unwrap();

    assert_eq!(outcome, Some(PaymentOutcome::Succeeded));
    // Resolved by the immediate re-check, not the poll loop.
    assert_eq!(backend.request_count("payment-status"), 1);
    assert_eq!(store.get(CURRENT_PAYMENT_KEY).unwrap(), None);
}

#[tokio::test]
async fn unrelated_deep_link_is_ignored() {
    let (api, backend) = spawn_backend().await;
    let (flow, store) = flow_with(&api, fast_settings());

    store.set(CURRENT_PAYMENT_KEY, "pi_pending").unwrap();
    let outcome = flow
        .handle_deep_link("myapp://profile/settings")
        .await
        .unwrap();

    assert_eq!(outcome, None);
    assert!(backend.requests().is_empty());
    assert!(store.get(CURRENT_PAYMENT_KEY).unwrap().is_some());
}
