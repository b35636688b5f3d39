use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use vibe_quiz::onboarding::{
    compose, compose_returning, onboarding_router, questions_for, OnboardingService, Population,
    ProfileStore, QuestionSet, ResultPublisher, ScreenView, TOTAL_STEPS,
};

#[derive(Debug, Deserialize)]
pub(crate) struct FlowPreviewRequest {
    #[serde(default)]
    pub(crate) population: Option<Population>,
    #[serde(default)]
    pub(crate) display_name: Option<String>,
    #[serde(default)]
    pub(crate) returning: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct FlowPreviewResponse {
    pub(crate) question_set: QuestionSet,
    pub(crate) steps: usize,
    pub(crate) total_steps: usize,
    pub(crate) screens: Vec<ScreenView>,
}

pub(crate) fn with_onboarding_routes<S, P>(service: Arc<OnboardingService<S, P>>) -> axum::Router
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    onboarding_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/onboarding/flow/preview",
            axum::routing::post(flow_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless preview of the composed sequence for a configuration, without
/// opening a session.
pub(crate) async fn flow_preview_endpoint(
    Json(payload): Json<FlowPreviewRequest>,
) -> Json<FlowPreviewResponse> {
    let FlowPreviewRequest {
        population,
        display_name,
        returning,
    } = payload;

    let display_name = display_name.unwrap_or_default();
    let question_set = match population {
        Some(population) => QuestionSet::for_population(population),
        None => QuestionSet::VibeDiscovery,
    };

    let screens = if returning {
        compose_returning(&display_name)
    } else {
        let questions = questions_for(question_set);
        compose(&questions, display_name.trim().is_empty(), &display_name)
    };

    Json(FlowPreviewResponse {
        question_set,
        steps: screens.len(),
        total_steps: TOTAL_STEPS,
        screens: screens.iter().map(|screen| screen.to_view()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn flow_preview_defaults_to_the_neutral_set() {
        let request = FlowPreviewRequest {
            population: None,
            display_name: None,
            returning: false,
        };

        let Json(body) = flow_preview_endpoint(Json(request)).await;

        assert_eq!(body.question_set, QuestionSet::VibeDiscovery);
        assert_eq!(body.total_steps, TOTAL_STEPS);
        assert_eq!(body.screens[0].position, 1);
        assert!(body.steps <= TOTAL_STEPS);
    }

    #[tokio::test]
    async fn flow_preview_with_a_name_skips_name_input() {
        let request = FlowPreviewRequest {
            population: Some(Population::Male),
            display_name: Some("Marcus".to_string()),
            returning: false,
        };

        let Json(body) = flow_preview_endpoint(Json(request)).await;

        assert_eq!(body.question_set, QuestionSet::MaleVibeDiscovery);
        assert!(body
            .screens
            .iter()
            .all(|screen| !matches!(
                screen.content,
                vibe_quiz::onboarding::ScreenContent::NameInput
            )));
    }

    #[tokio::test]
    async fn flow_preview_supports_returning_users() {
        let request = FlowPreviewRequest {
            population: None,
            display_name: Some("Marcus".to_string()),
            returning: true,
        };

        let Json(body) = flow_preview_endpoint(Json(request)).await;

        assert_eq!(body.steps, 3);
        assert!(body.screens.iter().all(|screen| screen.total == 3));
    }
}
