use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::onboarding::archetype::Archetype;
use crate::onboarding::quiz::{AnswerOption, QuestionId, QuizQuestion};
use crate::onboarding::service::OnboardingService;
use crate::onboarding::store::{
    NameSource, ProfileStore, ProfileStoreError, PublishError, ResultPublisher, SessionId,
    VibeProfileRecord, VibeResultEvent,
};

pub(super) fn question(
    id: &'static str,
    prompt: &'static str,
    options: Vec<AnswerOption>,
) -> QuizQuestion {
    QuizQuestion {
        id: QuestionId(id),
        prompt,
        options,
    }
}

pub(super) fn option(text: &'static str, weights: Vec<(Archetype, i32)>) -> AnswerOption {
    AnswerOption { text, weights }
}

/// "Casual" scores CozyChic +2, "Formal" scores ChicRebel +3.
pub(super) fn casual_formal_question() -> QuizQuestion {
    question(
        "test_dress_code",
        "Pick a dress code",
        vec![
            option("Casual", vec![(Archetype::CozyChic, 2)]),
            option("Formal", vec![(Archetype::ChicRebel, 3)]),
        ],
    )
}

pub(super) struct FixedNameSource(pub(super) Option<&'static str>);

impl NameSource for FixedNameSource {
    fn stored_name(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

pub(super) fn no_stored_name() -> Arc<dyn NameSource> {
    Arc::new(FixedNameSource(None))
}

pub(super) fn stored_name(name: &'static str) -> Arc<dyn NameSource> {
    Arc::new(FixedNameSource(Some(name)))
}

#[derive(Default)]
pub(super) struct MemoryProfileStore {
    pub(super) records: Mutex<HashMap<SessionId, VibeProfileRecord>>,
}

impl MemoryProfileStore {
    pub(super) fn fetch_record(&self, id: &SessionId) -> Option<VibeProfileRecord> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(id)
            .cloned()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn upsert(&self, record: VibeProfileRecord) -> Result<VibeProfileRecord, ProfileStoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let record = match guard.get(&record.session_id) {
            Some(existing) => VibeProfileRecord {
                created_at: existing.created_at,
                ..record
            },
            None => record,
        };
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<VibeProfileRecord>, ProfileStoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableStore;

impl ProfileStore for UnavailableStore {
    fn upsert(&self, _record: VibeProfileRecord) -> Result<VibeProfileRecord, ProfileStoreError> {
        Err(ProfileStoreError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<VibeProfileRecord>, ProfileStoreError> {
        Err(ProfileStoreError::Unavailable("store offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryPublisher {
    events: Mutex<Vec<VibeResultEvent>>,
}

impl MemoryPublisher {
    pub(super) fn events(&self) -> Vec<VibeResultEvent> {
        self.events.lock().expect("publisher mutex poisoned").clone()
    }
}

impl ResultPublisher for MemoryPublisher {
    fn publish(&self, event: VibeResultEvent) -> Result<(), PublishError> {
        self.events
            .lock()
            .expect("publisher mutex poisoned")
            .push(event);
        Ok(())
    }
}

pub(super) struct FailingPublisher;

impl ResultPublisher for FailingPublisher {
    fn publish(&self, _event: VibeResultEvent) -> Result<(), PublishError> {
        Err(PublishError::Transport("bus offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    OnboardingService<MemoryProfileStore, MemoryPublisher>,
    Arc<MemoryProfileStore>,
    Arc<MemoryPublisher>,
) {
    let store = Arc::new(MemoryProfileStore::default());
    let publisher = Arc::new(MemoryPublisher::default());
    let service = OnboardingService::new(no_stored_name(), store.clone(), publisher.clone());
    (service, store, publisher)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
