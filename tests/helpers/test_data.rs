//! Test data helpers for creating request envelopes

use serde_json::{json, Map, Value};
use SavvyTrends::models::RequestEnvelope;

pub const TEST_APPLICATION_ID: &str = "amzn1.echo-sdk-ams.app.test";

/// Build an envelope from the raw `request` object
pub fn create_envelope(request: Value, new_session: bool, attributes: Value) -> RequestEnvelope {
    serde_json::from_value(json!({
        "version": "1.0",
        "session": {
            "new": new_session,
            "sessionId": "amzn1.echo-api.session.test",
            "application": {"applicationId": TEST_APPLICATION_ID},
            "attributes": attributes,
            "user": {"userId": "amzn1.account.test"}
        },
        "request": request
    }))
    .expect("valid test envelope")
}

pub fn create_launch_envelope() -> RequestEnvelope {
    create_envelope(
        json!({"type": "LaunchRequest", "requestId": "request-launch", "timestamp": "2016-01-01T10:00:00Z"}),
        true,
        json!({}),
    )
}

/// Intent request with optional slot values and the attributes from the previous turn
pub fn create_intent_envelope(name: &str, slots: &[(&str, &str)], attributes: Value) -> RequestEnvelope {
    let slots: Map<String, Value> = slots
        .iter()
        .map(|(slot, value)| (slot.to_string(), json!({"name": slot, "value": value})))
        .collect();

    create_envelope(
        json!({
            "type": "IntentRequest",
            "requestId": format!("request-{}", name),
            "intent": {"name": name, "slots": slots}
        }),
        false,
        attributes,
    )
}

pub fn create_session_ended_envelope(attributes: Value) -> RequestEnvelope {
    create_envelope(
        json!({"type": "SessionEndedRequest", "requestId": "request-ended", "reason": "USER_INITIATED"}),
        false,
        attributes,
    )
}
