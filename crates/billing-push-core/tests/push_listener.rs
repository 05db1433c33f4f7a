//! Push listener behavior against recording and failing surfaces
//!
//! The test acts as the host: it dispatches events to the listener and then
//! settles whatever wait-until obligations were registered.

#![cfg(not(target_arch = "wasm32"))]

use billing_push_core::{BrandConfig, PushEvent, PushListener, PushMessage, SurfaceError};
use billing_push_test_harness::{
    glauca_brand, message_payload, push_with_message, DisplayLog, FailingSurface,
    RecordingSurface,
};
use std::sync::atomic::Ordering;

fn recording_listener(brand: BrandConfig) -> (PushListener<RecordingSurface>, DisplayLog) {
    let (surface, log) = RecordingSurface::with_log();
    (PushListener::new(brand, surface), log)
}

/// Scenario A: a well-formed payload shows one branded notification
#[tokio::test]
async fn test_invoice_message_is_shown() {
    let (listener, log) = recording_listener(glauca_brand());
    let event = PushMessage::with_data(br#"{"message":"Invoice #123 is due"}"#.to_vec());

    listener.on_push(&event).unwrap();
    let outcomes = event.settle().await;

    assert_eq!(outcomes, vec![Ok(())]);
    let shown = log.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Glauca Billing");
    assert_eq!(shown[0].body, "Invoice #123 is due");
    assert_eq!(shown[0].icon, "https://glauca.example/img/logo.png");
    assert_eq!(shown[0].badge, "https://glauca.example/img/logo.png");
    assert!(shown[0].require_interaction);
}

/// Scenario B: no data means no notification and no error
#[tokio::test]
async fn test_event_without_data_is_ignored() {
    let (listener, log) = recording_listener(glauca_brand());
    let event = PushMessage::empty();

    assert!(listener.on_push(&event).is_ok());
    assert!(event.settle().await.is_empty());
    assert_eq!(log.count(), 0);
}

/// Scenario C: malformed data fails the event without showing anything
#[tokio::test]
async fn test_malformed_payload_fails_event() {
    let (listener, log) = recording_listener(glauca_brand());
    let event = PushMessage::with_data(b"not-json".to_vec());

    let err = listener.on_push(&event).unwrap_err();

    assert!(err.is_payload_format());
    assert!(event.settle().await.is_empty());
    assert_eq!(log.count(), 0);
}

/// A failed event does not stop later events from being handled
#[tokio::test]
async fn test_listener_survives_malformed_payload() {
    let (listener, log) = recording_listener(BrandConfig::as207960());

    let bad = PushMessage::with_data(b"{\"message\":".to_vec());
    assert!(listener.on_push(&bad).is_err());

    let good = push_with_message("💸 £20.00 from card top-up");
    listener.on_push(&good).unwrap();
    assert_eq!(good.settle().await, vec![Ok(())]);

    let shown = log.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "AS207960 Billing");
    assert_eq!(shown[0].body, "💸 £20.00 from card top-up");
}

/// Every message string reaches the notification body unchanged
#[tokio::test]
async fn test_body_matches_message_exactly() {
    let messages = [
        "",
        "📉 £4.99 for domain renewal",
        "⌛ £10.00 from bank transfer: pending",
        "line one\nline two",
        "<script>alert(1)</script>",
        "\"quoted\" \\ backslash",
        &"x".repeat(4096),
    ];

    for message in messages {
        let (listener, log) = recording_listener(glauca_brand());
        let event = push_with_message(message);

        listener.on_push(&event).unwrap();
        event.settle().await;

        let shown = log.shown();
        assert_eq!(shown.len(), 1, "message {:?}", message);
        assert_eq!(shown[0].body, message);
    }
}

/// Each event with data registers exactly one obligation
#[tokio::test]
async fn test_one_obligation_per_event() {
    let (listener, log) = recording_listener(glauca_brand());

    let events: Vec<PushMessage> = (0..5)
        .map(|i| push_with_message(&format!("notice {}", i)))
        .collect();

    for event in &events {
        listener.on_push(event).unwrap();
        assert_eq!(event.pending_obligations(), 1);
    }

    for event in &events {
        assert_eq!(event.settle().await, vec![Ok(())]);
    }

    let bodies: Vec<String> = log.shown().into_iter().map(|d| d.body).collect();
    assert_eq!(
        bodies,
        vec!["notice 0", "notice 1", "notice 2", "notice 3", "notice 4"]
    );
}

/// The obligation rejects with the display error when permission is denied
#[tokio::test]
async fn test_obligation_rejects_with_display_error() {
    let log = DisplayLog::new();
    let listener = PushListener::new(glauca_brand(), FailingSurface::denying(&log));
    let event = push_with_message("Invoice #123 is due");

    // The event itself is handled; only the display fails
    listener.on_push(&event).unwrap();
    let outcomes = event.settle().await;

    assert_eq!(outcomes.len(), 1);
    assert!(matches!(outcomes[0], Err(SurfaceError::Rejected { .. })));
    assert_eq!(log.count(), 0);
}

/// Unavailable surfaces are reported the same way
#[tokio::test]
async fn test_obligation_reports_unavailable_surface() {
    let log = DisplayLog::new();
    let surface = FailingSurface::new(&log);
    surface.reject_at.store(1, Ordering::SeqCst);
    surface.unavailable.store(true, Ordering::SeqCst);
    let listener = PushListener::new(glauca_brand(), surface);

    let event = push_with_message("hello");
    listener.on_push(&event).unwrap();

    assert_eq!(event.settle().await, vec![Err(SurfaceError::Unavailable)]);
}

/// A rejected display does not affect the next event
#[tokio::test]
async fn test_display_failure_is_per_event() {
    let log = DisplayLog::new();
    let surface = FailingSurface::new(&log);
    let reject_at = surface.reject_at.clone();
    let listener = PushListener::new(glauca_brand(), surface);

    reject_at.store(1, Ordering::SeqCst);
    let first = push_with_message("first");
    listener.on_push(&first).unwrap();
    assert!(first.settle().await[0].is_err());

    reject_at.store(0, Ordering::SeqCst);
    let second = push_with_message("second");
    listener.on_push(&second).unwrap();
    assert_eq!(second.settle().await, vec![Ok(())]);

    let shown = log.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].body, "second");
}

/// Dropping unsettled obligations leaves the surface untouched
#[tokio::test]
async fn test_unsettled_obligation_shows_nothing() {
    let (listener, log) = recording_listener(glauca_brand());
    let event = push_with_message("never driven");

    listener.on_push(&event).unwrap();
    drop(event.take_obligations());

    assert_eq!(log.count(), 0);
    assert_eq!(event.pending_obligations(), 0);
}

/// Extra payload fields are ignored
#[tokio::test]
async fn test_extra_payload_fields_ignored() {
    let (listener, log) = recording_listener(glauca_brand());
    let event = PushMessage::with_data(
        br#"{"message":"paid","ledger_item":"a1b2","state":"completed"}"#.to_vec(),
    );

    listener.on_push(&event).unwrap();
    event.settle().await;

    assert_eq!(log.shown()[0].body, "paid");
}

/// Listeners can be driven through a `dyn PushEvent`
#[tokio::test]
async fn test_dynamic_event_dispatch() {
    let (listener, log) = recording_listener(glauca_brand());
    let message = PushMessage::with_data(message_payload("dyn"));
    let event: &dyn PushEvent = &message;

    listener.on_push(event).unwrap();
    message.settle().await;

    assert_eq!(log.shown()[0].body, "dyn");
}
