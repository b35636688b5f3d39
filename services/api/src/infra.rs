use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use vibe_quiz::onboarding::{
    NameSource, ProfileStore, ProfileStoreError, PublishError, ResultPublisher, SessionId,
    VibeProfileRecord, VibeResultEvent,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Name source backed by an optional seed (flag or environment); the service
/// normalizes placeholders itself.
#[derive(Default, Clone)]
pub(crate) struct SeededNameSource {
    name: Option<String>,
}

impl SeededNameSource {
    pub(crate) fn new(name: Option<String>) -> Self {
        Self { name }
    }
}

impl NameSource for SeededNameSource {
    fn stored_name(&self) -> Option<String> {
        self.name.clone()
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    records: Arc<Mutex<HashMap<SessionId, VibeProfileRecord>>>,
}

impl InMemoryProfileStore {
    pub(crate) fn profiles(&self) -> Vec<VibeProfileRecord> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        guard.values().cloned().collect()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn upsert(&self, record: VibeProfileRecord) -> Result<VibeProfileRecord, ProfileStoreError> {
        let mut guard = self.records.lock().expect("profile mutex poisoned");
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
        let guard = self.records.lock().expect("profile mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryResultPublisher {
    events: Arc<Mutex<Vec<VibeResultEvent>>>,
}

impl ResultPublisher for InMemoryResultPublisher {
    fn publish(&self, event: VibeResultEvent) -> Result<(), PublishError> {
        let mut guard = self.events.lock().expect("event mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

impl InMemoryResultPublisher {
    pub(crate) fn events(&self) -> Vec<VibeResultEvent> {
        self.events.lock().expect("event mutex poisoned").clone()
    }
}

pub(crate) fn parse_population(raw: &str) -> Result<vibe_quiz::onboarding::Population, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "female" | "f" => Ok(vibe_quiz::onboarding::Population::Female),
        "male" | "m" => Ok(vibe_quiz::onboarding::Population::Male),
        other => Err(format!("unknown population '{other}' (expected male or female)")),
    }
}
