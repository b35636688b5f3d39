use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::onboarding::router::{
    self, onboarding_router, AnswerRequest, PopulationRequest,
};
use crate::onboarding::service::OnboardingService;
use crate::onboarding::store::SessionId;

fn service_arc() -> (
    Arc<OnboardingService<MemoryProfileStore, MemoryPublisher>>,
    Arc<MemoryProfileStore>,
    Arc<MemoryPublisher>,
) {
    let (service, store, publisher) = build_service();
    (Arc::new(service), store, publisher)
}

fn post_json(uri: &str, body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

fn post_empty(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn start_route_creates_a_session() {
    let (service, _, _) = service_arc();
    let app = onboarding_router(service);

    let response = app
        .oneshot(post_empty("/api/v1/onboarding/sessions"))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert!(body["session_id"]
        .as_str()
        .expect("session id present")
        .starts_with("ses-"));
    assert_eq!(body["screen"]["position"], json!(1));
}

#[tokio::test]
async fn current_handler_returns_not_found_for_missing_sessions() {
    let (service, _, _) = service_arc();

    let response = router::current_handler::<MemoryProfileStore, MemoryPublisher>(
        State(service),
        Path("ses-404404".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn answer_handler_rejects_unknown_questions() {
    let (service, _, _) = service_arc();
    let view = service.start();

    let response = router::answer_handler::<MemoryProfileStore, MemoryPublisher>(
        State(service),
        Path(view.session_id.0.clone()),
        axum::Json(AnswerRequest {
            question_id: "male_goal".to_string(),
            option_index: 0,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn population_handler_switches_the_active_set() {
    let (service, _, _) = service_arc();
    let view = service.start();

    let response = router::population_handler::<MemoryProfileStore, MemoryPublisher>(
        State(service.clone()),
        Path(view.session_id.0.clone()),
        axum::Json(PopulationRequest {
            population: crate::onboarding::archetype::Population::Male,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let answered = service.answer(&view.session_id, "male_goal", 0);
    assert!(answered.is_ok());
}

#[tokio::test]
async fn full_session_over_routes_yields_a_classification() {
    let (service, store, _) = service_arc();
    let app = onboarding_router(service);

    let created = app
        .clone()
        .oneshot(post_empty("/api/v1/onboarding/sessions"))
        .await
        .expect("session created");
    let created_body = read_json_body(created).await;
    let session_id = created_body["session_id"]
        .as_str()
        .expect("session id")
        .to_string();

    let base = format!("/api/v1/onboarding/sessions/{session_id}");

    let named = app
        .clone()
        .oneshot(post_json(
            &format!("{base}/name"),
            json!({ "display_name": "Ola" }),
        ))
        .await
        .expect("name set");
    assert_eq!(named.status(), StatusCode::OK);

    let populated = app
        .clone()
        .oneshot(post_json(
            &format!("{base}/population"),
            json!({ "population": "female" }),
        ))
        .await
        .expect("population set");
    assert_eq!(populated.status(), StatusCode::OK);

    let answered = app
        .clone()
        .oneshot(post_json(
            &format!("{base}/answer"),
            json!({ "question_id": "female_intent", "option_index": 1 }),
        ))
        .await
        .expect("answer recorded");
    assert_eq!(answered.status(), StatusCode::OK);

    let finished = app
        .clone()
        .oneshot(post_empty(&format!("{base}/finish")))
        .await
        .expect("finish resolves");
    assert_eq!(finished.status(), StatusCode::OK);
    let classification = read_json_body(finished).await;
    assert_eq!(classification["primary"], json!("chic_rebel"));

    let stored = store.fetch_record(&SessionId(session_id));
    assert!(stored.is_some());
}

#[tokio::test]
async fn report_route_returns_the_flow_summary() {
    let (service, _, _) = service_arc();
    let view = service.start();
    let app = onboarding_router(service);

    let response = app
        .oneshot(
            axum::http::Request::get(format!(
                "/api/v1/onboarding/sessions/{}/report",
                view.session_id.0
            ))
            .body(axum::body::Body::empty())
            .expect("request builds"),
        )
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total_steps"], json!(18));
}

#[tokio::test]
async fn finish_route_surfaces_store_failures() {
    let service = Arc::new(OnboardingService::new(
        no_stored_name(),
        Arc::new(UnavailableStore),
        Arc::new(MemoryPublisher::default()),
    ));
    let view = service.start();
    let app = onboarding_router(service);

    let response = app
        .oneshot(post_empty(&format!(
            "/api/v1/onboarding/sessions/{}/finish",
            view.session_id.0
        )))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
