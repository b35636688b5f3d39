use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::archetype::Population;
use super::service::{OnboardingService, OnboardingServiceError};
use super::store::{ProfileStore, ResultPublisher, SessionId};

/// Router builder exposing HTTP endpoints for onboarding sessions.
pub fn onboarding_router<S, P>(service: Arc<OnboardingService<S, P>>) -> Router
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    Router::new()
        .route("/api/v1/onboarding/sessions", post(start_handler::<S, P>))
        .route(
            "/api/v1/onboarding/sessions/:session_id",
            get(current_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/advance",
            post(advance_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/back",
            post(back_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/answer",
            post(answer_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/population",
            post(population_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/name",
            post(name_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/finish",
            post(finish_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/reset",
            post(reset_handler::<S, P>),
        )
        .route(
            "/api/v1/onboarding/sessions/:session_id/report",
            get(report_handler::<S, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question_id: String,
    pub(crate) option_index: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PopulationRequest {
    pub(crate) population: Population,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameRequest {
    pub(crate) display_name: String,
}

fn error_response(error: OnboardingServiceError) -> Response {
    let status = match &error {
        OnboardingServiceError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        OnboardingServiceError::UnknownQuestion(_)
        | OnboardingServiceError::OptionOutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        OnboardingServiceError::Store(_) | OnboardingServiceError::Publish(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn session_response(
    result: Result<super::service::SessionView, OnboardingServiceError>,
    success: StatusCode,
) -> Response {
    match result {
        Ok(view) => (success, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn start_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    let view = service.start();
    (StatusCode::CREATED, axum::Json(view)).into_response()
}

pub(crate) async fn current_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    session_response(service.current(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn advance_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    session_response(service.advance(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn back_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    session_response(service.go_back(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn answer_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    session_response(
        service.answer(
            &SessionId(session_id),
            &request.question_id,
            request.option_index,
        ),
        StatusCode::OK,
    )
}

pub(crate) async fn population_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<PopulationRequest>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    session_response(
        service.select_population(&SessionId(session_id), request.population),
        StatusCode::OK,
    )
}

pub(crate) async fn name_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<NameRequest>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    session_response(
        service.set_display_name(&SessionId(session_id), &request.display_name),
        StatusCode::OK,
    )
}

pub(crate) async fn finish_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    match service.finish(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    session_response(service.reset(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn report_handler<S, P>(
    State(service): State<Arc<OnboardingService<S, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    match service.report(&SessionId(session_id)) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}
