//! Common test utilities

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use splitty::domain::{Event, Expense, Participant};
use splitty::event_store::{InMemoryEventRepository, SharedEventRepository};
use splitty::{api, Config};

/// Config with defaults, independent of the process environment
pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config must load")
}

/// Full application over a fresh in-memory store
pub fn setup_app() -> (Router, SharedEventRepository) {
    let repository = InMemoryEventRepository::shared();
    let app = api::build_app(repository.clone(), &test_config());
    (app, repository)
}

/// The three-friends trip: 300 / 150 / 90, each paid by one person, shared by all
pub fn mountain_trip() -> Event {
    Event::new("Mountain trip")
        .with_participant(Participant::new(1, "Alice").with_email("alice@example.com"))
        .with_participant(Participant::new(2, "Bob"))
        .with_participant(Participant::new(3, "Charlie"))
        .with_expense(
            Expense::new(1, "Accommodation", 300)
                .with_payment(1, 300)
                .shared_with([1, 2, 3]),
        )
        .with_expense(
            Expense::new(2, "Food", 150)
                .with_payment(2, 150)
                .shared_with([1, 2, 3]),
        )
        .with_expense(
            Expense::new(3, "Transport", 90)
                .with_payment(3, 90)
                .shared_with([1, 2, 3]),
        )
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request must build")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request must build")
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}
