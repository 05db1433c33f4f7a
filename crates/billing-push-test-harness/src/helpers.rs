//! Helper functions for push listener tests

use billing_push_core::{BrandConfig, PushMessage};

/// Brand used by the Glauca deployment scenarios
pub fn glauca_brand() -> BrandConfig {
    BrandConfig::new("Glauca Billing", "https://glauca.example/img/logo.png")
}

/// Encode `{"message": message}` the way the billing backend sends it
pub fn message_payload(message: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "message": message }))
        .expect("a JSON object always serializes")
}

/// Push event carrying `message`
pub fn push_with_message(message: &str) -> PushMessage {
    PushMessage::with_data(message_payload(message))
}
