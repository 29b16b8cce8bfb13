//! API Integration Tests

use axum::http::StatusCode;
use serde_json::{json, Value};
use splitty::Summary;
use tower::util::ServiceExt;

mod common;

use common::{body_json, empty_request, json_request, mountain_trip, setup_app};

#[tokio::test]
async fn test_event_lifecycle_e2e() {
    let (app, _repository) = setup_app();

    // 1. Create the event
    let body = serde_json::to_value(mountain_trip()).unwrap();
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED, "Event creation failed");
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(id, 1);
    assert_eq!(created["participants"][0]["email"], "alice@example.com");
    assert!(created["participants"][1].get("email").is_none());
    assert_eq!(created["expenses"][0]["sharedWith"], json!([1, 2, 3]));

    // 2. Read it back
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/events/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    // 3. Summary
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/events/{}/summary", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalAmount"].as_f64(), Some(540.0));
    assert_eq!(json["perPersonAmount"].as_f64(), Some(180.0));
    assert_eq!(json["paidByPerson"][0]["balance"].as_f64(), Some(120.0));
    assert_eq!(json["paidByPerson"][1]["shouldPay"].as_f64(), Some(180.0));
    assert_eq!(json["settlements"].as_array().unwrap().len(), 2);

    let summary: Summary = serde_json::from_value(json).unwrap();
    for settlement in &summary.settlements {
        assert_eq!(settlement.to_name, "Alice");
    }

    // 4. Replace it with a two-person version
    let replacement = json!({
        "name": "Mountain trip (short)",
        "participants": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}],
        "expenses": [{
            "id": 1,
            "category": "Dinner",
            "totalAmount": 0,
            "payments": [{"participantId": 1, "amount": 40}, {"participantId": 2, "amount": 60}],
            "sharedWith": [1, 2]
        }]
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/api/events/{}", id), &replacement))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"].as_i64(), Some(id));

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/events/{}/summary", id)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["totalAmount"].as_f64(), Some(100.0));
    assert_eq!(
        json["settlements"],
        json!([{"from": 1, "fromName": "Alice", "to": 2, "toName": "Bob", "amount": 10}])
    );

    // 5. Delete
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/events/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/events/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error_code"], "event_not_found");
}

#[tokio::test]
async fn test_list_events() {
    let (app, _repository) = setup_app();

    for name in ["Event A", "Event B", "Event C"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/events", &json!({"name": name})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/events"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Event A", "Event B", "Event C"]);
}

#[tokio::test]
async fn test_validation_errors() {
    let (app, repository) = setup_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error_code"], "missing_event_name");

    let duplicate = json!({
        "name": "Twins",
        "participants": [{"id": 1, "name": "Ann"}, {"id": 1, "name": "Ann again"}]
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &duplicate))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error_code"], "duplicate_participant");

    let oversized = json!({
        "name": "Overflow",
        "participants": [{"id": 1, "name": "Ann"}, {"id": 2, "name": "Ben"}],
        "expenses": [{
            "id": 1,
            "category": "Everything",
            "payments": [{"participantId": 1, "amount": 5e28}, {"participantId": 2, "amount": 5e28}],
            "sharedWith": [1, 2]
        }]
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &oversized))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error_code"], "amount_too_large");

    assert!(repository.find_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_wire_format() {
    let (app, _repository) = setup_app();

    let coffee = json!({
        "name": "Coffee",
        "participants": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}],
        "expenses": [{
            "id": 1,
            "category": "Coffee",
            "totalAmount": 2.01,
            "payments": [{"participantId": 1, "amount": 2.01}],
            "sharedWith": [1, 2]
        }]
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &coffee))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/events/{}/summary", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["totalAmount"], json!(2.01));
    assert_eq!(json["perPersonAmount"], json!(1));
    assert_eq!(
        json["paidByPerson"],
        json!([
            {"id": 1, "name": "Alice", "paid": 2.01, "shouldPay": 1, "balance": 1.01},
            {"id": 2, "name": "Bob", "paid": 0, "shouldPay": 1, "balance": -1}
        ])
    );
    assert_eq!(
        json["settlements"],
        json!([{"from": 2, "fromName": "Bob", "to": 1, "toName": "Alice", "amount": 1}])
    );
}

#[tokio::test]
async fn test_update_unknown_event_is_not_found() {
    let (app, _repository) = setup_app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/events/99", &json!({"name": "Ghost"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/events/99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_event_summary() {
    let (app, _repository) = setup_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &json!({"name": "Quiet week"})))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/events/{}/summary", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalAmount"].as_f64(), Some(0.0));
    assert_eq!(json["perPersonAmount"].as_f64(), Some(0.0));
    assert_eq!(json["paidByPerson"], json!([]));
    assert_eq!(json["settlements"], json!([]));
}

#[tokio::test]
async fn test_health_and_correlation_id() {
    let (app, _repository) = setup_app();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let correlation_id = "6f9619ff-8b86-4d01-b42d-00c04fc964ff";
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/events")
        .header("X-Correlation-Id", correlation_id)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-correlation-id").unwrap(),
        correlation_id
    );

    // Generated when the client sends none
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/events"))
        .await
        .unwrap();
    assert!(response.headers().get("x-correlation-id").is_some());
    let _: Value = body_json(response).await;
}
