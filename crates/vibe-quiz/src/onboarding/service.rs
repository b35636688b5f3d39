use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::archetype::{Archetype, Population};
use super::flow::ScreenView;
use super::quiz::VibeResult;
use super::report::FlowReportSummary;
use super::session::OnboardingSession;
use super::store::{
    normalize_stored_name, NameSource, ProfileStore, ProfileStoreError, PublishError,
    ResultPublisher, SessionId, VibeProfileRecord, VibeResultEvent,
};

/// Service owning the session registry and the persistence/notification
/// collaborators. Collaborators are injected at construction; nothing here
/// reaches into ambient globals.
pub struct OnboardingService<S, P> {
    sessions: Mutex<HashMap<SessionId, OnboardingSession>>,
    names: Arc<dyn NameSource>,
    store: Arc<S>,
    publisher: Arc<P>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("ses-{id:06}"))
}

impl<S, P> OnboardingService<S, P>
where
    S: ProfileStore + 'static,
    P: ResultPublisher + 'static,
{
    pub fn new(names: Arc<dyn NameSource>, store: Arc<S>, publisher: Arc<P>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            names,
            store,
            publisher,
        }
    }

    /// Opens a new session, seeding the display name from the name source.
    pub fn start(&self) -> SessionView {
        let seed = normalize_stored_name(self.names.stored_name());
        let mut session = OnboardingSession::new(seed);
        let session_id = next_session_id();
        let view = SessionView::capture(&session_id, &mut session);
        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        sessions.insert(session_id.clone(), session);
        info!(session = %session_id.0, "onboarding session started");
        view
    }

    fn with_session<T>(
        &self,
        session_id: &SessionId,
        op: impl FnOnce(&SessionId, &mut OnboardingSession) -> Result<T, OnboardingServiceError>,
    ) -> Result<T, OnboardingServiceError> {
        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| OnboardingServiceError::SessionNotFound(session_id.0.clone()))?;
        op(session_id, session)
    }

    pub fn current(&self, session_id: &SessionId) -> Result<SessionView, OnboardingServiceError> {
        self.with_session(session_id, |id, session| Ok(SessionView::capture(id, session)))
    }

    pub fn advance(&self, session_id: &SessionId) -> Result<SessionView, OnboardingServiceError> {
        self.with_session(session_id, |id, session| {
            session.advance();
            Ok(SessionView::capture(id, session))
        })
    }

    pub fn go_back(&self, session_id: &SessionId) -> Result<SessionView, OnboardingServiceError> {
        self.with_session(session_id, |id, session| {
            session.go_back();
            Ok(SessionView::capture(id, session))
        })
    }

    /// Records an answer for a question in the active set and advances.
    pub fn answer(
        &self,
        session_id: &SessionId,
        question_id: &str,
        option_index: usize,
    ) -> Result<SessionView, OnboardingServiceError> {
        self.with_session(session_id, |id, session| {
            let questions = session.active_questions();
            let question = questions
                .iter()
                .find(|question| question.id.0 == question_id)
                .ok_or_else(|| {
                    OnboardingServiceError::UnknownQuestion(question_id.to_string())
                })?;
            if option_index >= question.options.len() {
                return Err(OnboardingServiceError::OptionOutOfRange {
                    question: question_id.to_string(),
                    option_index,
                });
            }
            session.select_answer(question, option_index);
            Ok(SessionView::capture(id, session))
        })
    }

    pub fn select_population(
        &self,
        session_id: &SessionId,
        population: Population,
    ) -> Result<SessionView, OnboardingServiceError> {
        self.with_session(session_id, |id, session| {
            session.select_population(population);
            Ok(SessionView::capture(id, session))
        })
    }

    pub fn set_display_name(
        &self,
        session_id: &SessionId,
        display_name: &str,
    ) -> Result<SessionView, OnboardingServiceError> {
        self.with_session(session_id, |id, session| {
            session.set_display_name(display_name.trim());
            Ok(SessionView::capture(id, session))
        })
    }

    /// Resolves the classification, persists the profile, and notifies the
    /// publisher. Calling finish again returns the cached classification and
    /// refreshes the stored profile's `updated_at`.
    pub fn finish(
        &self,
        session_id: &SessionId,
    ) -> Result<ClassificationView, OnboardingServiceError> {
        let (result, display_name) = self.with_session(session_id, |_, session| {
            let result = session.finish();
            Ok((result, session.display_name().to_string()))
        })?;

        let now = Utc::now();
        let record = VibeProfileRecord {
            session_id: session_id.clone(),
            display_name,
            primary: result.primary,
            secondary: result.secondary,
            description: result.description.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.store.upsert(record)?;

        self.publisher.publish(VibeResultEvent {
            session_id: session_id.clone(),
            primary: result.primary,
            secondary: result.secondary,
            summary: result.summary(),
        })?;

        info!(
            session = %session_id.0,
            primary = ?result.primary,
            secondary = ?result.secondary,
            "onboarding finished"
        );
        Ok(ClassificationView::new(session_id.clone(), result))
    }

    /// Returns the session to its initial state, re-seeding the display name
    /// from the name source when one is available.
    pub fn reset(&self, session_id: &SessionId) -> Result<SessionView, OnboardingServiceError> {
        let seed = normalize_stored_name(self.names.stored_name());
        self.with_session(session_id, |id, session| {
            session.reset();
            if !seed.is_empty() {
                session.set_display_name(seed);
            }
            Ok(SessionView::capture(id, session))
        })
    }

    pub fn report(
        &self,
        session_id: &SessionId,
    ) -> Result<FlowReportSummary, OnboardingServiceError> {
        self.with_session(session_id, |_, session| Ok(session.report().summary()))
    }
}

/// Error raised by the onboarding service.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),
    #[error("question '{0}' is not part of the active question set")]
    UnknownQuestion(String),
    #[error("option index {option_index} is out of range for question '{question}'")]
    OptionOutOfRange {
        question: String,
        option_index: usize,
    },
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Snapshot of a session for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub finished: bool,
    pub needs_name_input: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<Population>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenView>,
}

impl SessionView {
    pub(crate) fn capture(session_id: &SessionId, session: &mut OnboardingSession) -> Self {
        Self {
            session_id: session_id.clone(),
            finished: session.is_finished(),
            needs_name_input: session.needs_name_input(),
            population: session.population(),
            screen: session.current_screen().map(|screen| screen.to_view()),
        }
    }
}

/// Classification result as exposed to persistence and presentation.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationView {
    pub session_id: SessionId,
    pub primary: Archetype,
    pub primary_title: &'static str,
    pub secondary: Option<Archetype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_title: Option<&'static str>,
    pub description: &'static str,
    pub summary: String,
}

impl ClassificationView {
    fn new(session_id: SessionId, result: VibeResult) -> Self {
        Self {
            session_id,
            primary: result.primary,
            primary_title: result.primary.title(),
            secondary: result.secondary,
            secondary_title: result.secondary.map(Archetype::title),
            description: result.description,
            summary: result.summary(),
        }
    }
}
