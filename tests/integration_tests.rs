//! Integration tests for the WanderPlan HTTP surface

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use wanderplan::api::AppState;
use wanderplan::{
    DOCX_MIME_TYPE, Itinerary, ItineraryGenerator, Planner, TravelPlanError, web,
};

/// Generator that records prompts and answers with a fixed reply
struct StubGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl ItineraryGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> wanderplan::Result<Itinerary> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map(Itinerary::new)
            .ok_or_else(|| TravelPlanError::generation("stub service is down"))
    }
}

fn app_with(reply: Option<&str>) -> (Router, Arc<StubGenerator>) {
    let stub = Arc::new(StubGenerator {
        reply: reply.map(str::to_string),
        prompts: Mutex::new(Vec::new()),
    });
    let planner = Planner::new(stub.clone());
    (web::app(AppState { planner }), stub)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_index_serves_form() {
    let (app, _) = app_with(Some("unused"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("Wander Plan"));
    assert!(html.contains("Generate Itinerary"));
    for field in ["departure", "destination", "days", "interests", "budget"] {
        assert!(html.contains(&format!("name=\"{field}\"")), "form lacks {field}");
    }
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app_with(None);
    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_generate_paris_to_tokyo() {
    let (app, stub) = app_with(Some("Day 1: ...Day 5: ..."));
    let response = app
        .oneshot(post_json(
            "/api/itinerary",
            json!({
                "departure": "Paris",
                "destination": "Tokyo",
                "days": 5,
                "interests": "food, culture",
                "budget": "Medium"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["itinerary"], "Day 1: ...Day 5: ...");
    assert_eq!(body["file_name"], "itinerary_Paris_to_Tokyo.docx");
    assert_eq!(body["departure"], "Paris");
    assert_eq!(body["destination"], "Tokyo");

    let prompts = stub.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    for line in [
        "Departure: Paris",
        "Destination: Tokyo",
        "Days: 5",
        "Interests: food, culture",
        "Budget: Medium",
    ] {
        assert!(prompts[0].lines().any(|l| l == line), "prompt lacks {line}");
    }
}

#[tokio::test]
async fn test_empty_field_warns_without_generation() {
    let (app, stub) = app_with(Some("unused"));
    let response = app
        .oneshot(post_json(
            "/api/itinerary",
            json!({
                "departure": "",
                "destination": "Rome",
                "days": 3,
                "interests": "art",
                "budget": "Low"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(
        body["warning"],
        "Please fill in all the fields to generate the itinerary."
    );
    assert_eq!(body["missing"], json!(["departure"]));
    assert!(body.get("file_name").is_none());
    assert!(stub.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_out_of_range_days_rejected() {
    let (app, stub) = app_with(Some("unused"));
    let response = app
        .oneshot(post_json(
            "/api/itinerary",
            json!({
                "departure": "Paris",
                "destination": "Rome",
                "days": 31,
                "interests": "art",
                "budget": "Low"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("between 1 and 30"));
    assert!(stub.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_generation_failure_is_bad_gateway() {
    let (app, _) = app_with(None);
    let response = app
        .oneshot(post_json(
            "/api/itinerary",
            json!({
                "departure": "Paris",
                "destination": "Rome",
                "days": 2,
                "interests": "art",
                "budget": "High"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("could not be generated"));
    assert!(!message.contains("stub service"));
}

#[tokio::test]
async fn test_document_download() {
    let (app, _) = app_with(None);
    let response = app
        .oneshot(post_json(
            "/api/itinerary/document",
            json!({
                "itinerary": "Day 1: ...Day 5: ...",
                "departure": "Paris",
                "destination": "Tokyo"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        DOCX_MIME_TYPE
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("filename=\"itinerary_Paris_to_Tokyo.docx\""));

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"PK"));
}

#[rstest::rstest]
#[case::string_days(json!({"departure": "Paris", "destination": "Rome", "days": "5", "interests": "art", "budget": "Low"}))]
#[case::fractional_days(json!({"departure": "Paris", "destination": "Rome", "days": 5.5, "interests": "art", "budget": "Low"}))]
#[tokio::test]
async fn test_malformed_form_gets_json_error(#[case] form: Value) {
    let (app, stub) = app_with(Some("unused"));
    let response = app.oneshot(post_json("/api/itinerary", form)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid input"));
    assert!(body.get("warning").is_none());
    assert!(stub.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_document_request_gets_json_error() {
    let (app, _) = app_with(None);
    let response = app
        .oneshot(post_json(
            "/api/itinerary/document",
            json!({"itinerary": 42, "departure": "Paris", "destination": "Tokyo"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}
