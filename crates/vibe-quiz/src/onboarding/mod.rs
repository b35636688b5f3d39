//! Quiz scoring and dynamic flow composition for the onboarding experience.
//!
//! Classification replays the recorded answers from scratch on every
//! resolution pass, which is what makes going back and changing an answer
//! safe. The composed screen sequence is memoized per session and rebuilt
//! whenever the population or the needs-name-input condition changes.

pub mod archetype;
pub mod bank;
pub mod flow;
pub mod quiz;
pub mod report;
pub mod resolution;
pub mod router;
pub mod service;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use archetype::{Archetype, Population, Tint};
pub use bank::{questions_for, QuestionSet};
pub use flow::{
    compose, compose_returning, ChecklistRow, PermissionKind, ScreenContent, ScreenDescriptor,
    ScreenStage, ScreenView, TOTAL_STEPS,
};
pub use quiz::{AnswerOption, AnswerRecord, QuestionId, QuizQuestion, QuizScorecard, VibeResult};
pub use report::{FlowReport, FlowReportSummary, StageEntry};
pub use resolution::resolve;
pub use router::onboarding_router;
pub use service::{ClassificationView, OnboardingService, OnboardingServiceError, SessionView};
pub use session::OnboardingSession;
pub use store::{
    normalize_stored_name, NameSource, ProfileStore, ProfileStoreError, ProfileView, PublishError,
    ResultPublisher, SessionId, VibeProfileRecord, VibeResultEvent, NAME_PLACEHOLDER,
};
