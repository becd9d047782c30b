//! End-to-end conversations through the dispatcher

mod helpers;

use std::sync::Arc;
use assert_matches::assert_matches;
use serde_json::{json, Value};

use helpers::*;
use SavvyTrends::handlers::trends::{GOODBYE_SPEECH, HELP_SPEECH, UNKNOWN_CATEGORY_SPEECH};
use SavvyTrends::handlers::GENERIC_ERROR_SPEECH;
use SavvyTrends::models::ResponseEnvelope;
use SavvyTrends::state::{CHOOSE_CATEGORY_PROMPT, HEAR_MORE_PROMPT};
use SavvyTrends::utils::errors::SkillError;

fn attributes_of(envelope: &ResponseEnvelope) -> Value {
    serde_json::to_value(&envelope.session_attributes).unwrap()
}

fn speech_of(envelope: &ResponseEnvelope) -> &str {
    envelope.response.speech_text().unwrap_or_default()
}

#[tokio::test]
async fn test_launch_reads_trending_topics() {
    let dispatcher = create_dispatcher(
        Arc::new(StubTrends::with_topics(&["Rust", "Tokio"])),
        Arc::new(StubBestSellers::default()),
    );

    let response = dispatcher.execute(create_launch_envelope()).await.unwrap();

    assert_eq!(speech_of(&response), "Here are the top trending topics in your area. Rust, Tokio.");
    assert!(response.response.should_end_session);
}

#[tokio::test]
async fn test_trends_intent_without_topics() {
    let dispatcher = create_dispatcher(
        Arc::new(StubTrends::with_topics(&[])),
        Arc::new(StubBestSellers::default()),
    );

    let response = dispatcher
        .execute(create_intent_envelope("Trends", &[], json!({})))
        .await
        .unwrap();

    assert_eq!(speech_of(&response), "There are no trending topics in your area right now.");
}

#[tokio::test]
async fn test_top_sellers_conversation() {
    let best_sellers = Arc::new(StubBestSellers::with_titles(10));
    let dispatcher = create_dispatcher(Arc::new(StubTrends::default()), best_sellers.clone());

    let first = dispatcher
        .execute(create_intent_envelope("TopSellers", &[("Category", "novels")], json!({})))
        .await
        .unwrap();

    assert_eq!(best_sellers.requested(), vec!["Books"]);
    assert_eq!(
        speech_of(&first),
        "Here are the top sellers for Books. First. Title 1. Second. Title 2. Third. Title 3. Would you like to hear more?"
    );
    assert_eq!(first.response.reprompt_text(), Some(HEAR_MORE_PROMPT));
    assert!(!first.response.should_end_session);

    let mut attributes = attributes_of(&first);
    assert_eq!(attributes["current"], json!(3));
    assert_eq!(attributes["category"], json!("Books"));

    let mut cursors = Vec::new();
    let mut last = first;
    for _ in 0..3 {
        last = dispatcher
            .execute(create_intent_envelope("HearMore", &[], attributes))
            .await
            .unwrap();
        attributes = attributes_of(&last);
        cursors.push(attributes["current"].clone());
    }

    assert_eq!(cursors, vec![json!(6), json!(9), json!(10)]);
    assert!(last.response.should_end_session);
    assert!(speech_of(&last).ends_with("Those were the 10 top sellers in the Books department."));
}

#[tokio::test]
async fn test_yes_continues_like_hear_more() {
    let dispatcher = create_dispatcher(
        Arc::new(StubTrends::default()),
        Arc::new(StubBestSellers::with_titles(10)),
    );

    let first = dispatcher
        .execute(create_intent_envelope("TopSellers", &[("Category", "Music")], json!({})))
        .await
        .unwrap();
    let next = dispatcher
        .execute(create_intent_envelope("AMAZON.YesIntent", &[], attributes_of(&first)))
        .await
        .unwrap();

    assert!(speech_of(&next).starts_with("Fourth. Title 4."));
}

#[tokio::test]
async fn test_hear_more_without_active_list() {
    let dispatcher = create_dispatcher(Arc::new(StubTrends::default()), Arc::new(StubBestSellers::default()));

    let response = dispatcher
        .execute(create_intent_envelope("HearMore", &[], json!({})))
        .await
        .unwrap();

    assert_eq!(speech_of(&response), CHOOSE_CATEGORY_PROMPT);
    assert!(!response.response.should_end_session);
    assert_eq!(attributes_of(&response), json!({}));
}

#[tokio::test]
async fn test_unknown_category_asks_again() {
    let best_sellers = Arc::new(StubBestSellers::with_titles(10));
    let dispatcher = create_dispatcher(Arc::new(StubTrends::default()), best_sellers.clone());

    let response = dispatcher
        .execute(create_intent_envelope("TopSellers", &[("Category", "spaceships")], json!({})))
        .await
        .unwrap();

    assert_eq!(speech_of(&response), UNKNOWN_CATEGORY_SPEECH);
    assert!(!response.response.should_end_session);
    assert!(best_sellers.requested().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_is_spoken() {
    let dispatcher = create_dispatcher(Arc::new(StubTrends::failing()), Arc::new(StubBestSellers::failing()));

    let launch = dispatcher.execute(create_launch_envelope()).await.unwrap();
    assert_eq!(speech_of(&launch), GENERIC_ERROR_SPEECH);

    let sellers = dispatcher
        .execute(create_intent_envelope("TopSellers", &[("Category", "books")], json!({})))
        .await
        .unwrap();
    assert_eq!(speech_of(&sellers), GENERIC_ERROR_SPEECH);
    assert!(sellers.response.should_end_session);
}

#[tokio::test]
async fn test_corrupt_cursor_is_spoken() {
    let dispatcher = create_dispatcher(Arc::new(StubTrends::default()), Arc::new(StubBestSellers::default()));

    let response = dispatcher
        .execute(create_intent_envelope("HearMore", &[], json!({"current": "lots", "category": "Books"})))
        .await
        .unwrap();

    assert_eq!(speech_of(&response), GENERIC_ERROR_SPEECH);
}

#[tokio::test]
async fn test_simple_intents() {
    let dispatcher = create_dispatcher(Arc::new(StubTrends::default()), Arc::new(StubBestSellers::default()));

    let help = dispatcher
        .execute(create_intent_envelope("AMAZON.HelpIntent", &[], json!({})))
        .await
        .unwrap();
    assert_eq!(speech_of(&help), HELP_SPEECH);
    assert!(!help.response.should_end_session);

    let stop = dispatcher
        .execute(create_intent_envelope("AMAZON.StopIntent", &[], json!({})))
        .await
        .unwrap();
    assert_eq!(speech_of(&stop), GOODBYE_SPEECH);

    let no = dispatcher
        .execute(create_intent_envelope("DontHearMore", &[], json!({"current": 3})))
        .await
        .unwrap();
    assert_eq!(no.response.output_speech, None);
    assert!(no.response.should_end_session);

    let unknown = dispatcher
        .execute(create_intent_envelope("OrderPizza", &[], json!({})))
        .await
        .unwrap();
    assert_eq!(speech_of(&unknown), GENERIC_ERROR_SPEECH);
}

#[tokio::test]
async fn test_session_ended_returns_empty_response() {
    let dispatcher = create_dispatcher(Arc::new(StubTrends::default()), Arc::new(StubBestSellers::default()));

    let response = dispatcher
        .execute(create_session_ended_envelope(json!({"current": 6})))
        .await
        .unwrap();

    assert_eq!(response.response.output_speech, None);
    assert_eq!(attributes_of(&response), json!({"current": 6}));
}

#[tokio::test]
async fn test_wrong_application_is_rejected() {
    let dispatcher = create_dispatcher(Arc::new(StubTrends::default()), Arc::new(StubBestSellers::default()));

    let mut envelope = create_launch_envelope();
    envelope.session.application.application_id = "amzn1.echo-sdk-ams.app.other".to_string();

    assert_matches!(
        dispatcher.execute(envelope).await,
        Err(SkillError::InvalidApplicationId { .. })
    );
}
