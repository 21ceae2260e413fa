//! Integration tests for the JSON API, using a stubbed completion client
//! so no network traffic occurs.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use travelmax::api::{self, ApiItinerary};
use travelmax::llm::CompletionClient;
use travelmax::planner::ItineraryPlanner;
use travelmax::{Result, TravelMaxError};

/// Stub completion client with a canned response and a call counter
struct StubClient {
    response: std::result::Result<String, String>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(TravelMaxError::api(message.clone())),
        }
    }
}

fn app(response: std::result::Result<String, String>) -> (Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = StubClient {
        response,
        calls: calls.clone(),
    };
    let planner = Arc::new(ItineraryPlanner::new(Arc::new(client)));
    (api::router(planner), calls)
}

fn plan_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/plan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_itinerary(response: axum::response::Response) -> ApiItinerary {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_plan_returns_generated_itinerary() {
    let (app, calls) = app(Ok("Day 1: Louvre in the morning".to_string()));

    let response = app
        .oneshot(plan_request(serde_json::json!({
            "destination": "Paris",
            "days": 3,
            "interests": "art, food"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let itinerary = read_itinerary(response).await;
    assert!(itinerary.success);
    assert_eq!(itinerary.itinerary, "Day 1: Louvre in the morning");
    assert_eq!(itinerary.file_name, "itinerary_paris_3_days.txt");
    assert!(itinerary.error.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_plan_reports_api_failure_in_band() {
    let (app, calls) = app(Err("the completion request timed out".to_string()));

    let response = app
        .oneshot(plan_request(serde_json::json!({
            "destination": "Paris",
            "days": 3,
            "interests": ""
        })))
        .await
        .unwrap();

    // Failures surface in the payload so the UI can render them inline
    assert_eq!(response.status(), StatusCode::OK);
    let itinerary = read_itinerary(response).await;
    assert!(!itinerary.success);
    assert!(itinerary.itinerary.is_empty());
    let message = itinerary.error.unwrap();
    assert!(!message.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_plan_rejects_days_out_of_range_without_calling_api() {
    for days in [0u8, 11] {
        let (app, calls) = app(Ok("unused".to_string()));

        let response = app
            .oneshot(plan_request(serde_json::json!({
                "destination": "Paris",
                "days": days,
                "interests": "art"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn test_plan_rejects_empty_destination_without_calling_api() {
    let (app, calls) = app(Ok("unused".to_string()));

    let response = app
        .oneshot(plan_request(serde_json::json!({
            "destination": "   ",
            "days": 3,
            "interests": ""
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let message = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(message.contains("destination"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_plan_accepts_missing_interests_field() {
    let (app, _calls) = app(Ok("Day 1: wander the old town".to_string()));

    let response = app
        .oneshot(plan_request(serde_json::json!({
            "destination": "Lisbon",
            "days": 2
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let itinerary = read_itinerary(response).await;
    assert!(itinerary.success);
}

#[tokio::test]
async fn test_plan_rejects_malformed_body() {
    let (app, calls) = app(Ok("unused".to_string()));

    let response = app
        .oneshot(plan_request(serde_json::json!({
            "destination": "Paris",
            "days": 300,
            "interests": ""
        })))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _calls) = app(Ok("unused".to_string()));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
