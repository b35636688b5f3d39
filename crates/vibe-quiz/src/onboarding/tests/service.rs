use std::sync::Arc;

use super::common::*;
use crate::onboarding::archetype::{Archetype, Population};
use crate::onboarding::service::{OnboardingService, OnboardingServiceError};
use crate::onboarding::store::{ProfileStoreError, PublishError, SessionId, NAME_PLACEHOLDER};

#[test]
fn start_without_a_stored_name_asks_for_one() {
    let (service, _, _) = build_service();
    let view = service.start();

    assert!(view.needs_name_input);
    assert!(view.session_id.0.starts_with("ses-"));
    assert!(view.screen.is_some());
}

#[test]
fn start_normalizes_the_placeholder_name() {
    let store = Arc::new(MemoryProfileStore::default());
    let publisher = Arc::new(MemoryPublisher::default());
    let service = OnboardingService::new(stored_name(NAME_PLACEHOLDER), store, publisher);

    let view = service.start();
    assert!(view.needs_name_input);
}

#[test]
fn start_seeds_a_real_stored_name() {
    let store = Arc::new(MemoryProfileStore::default());
    let publisher = Arc::new(MemoryPublisher::default());
    let service = OnboardingService::new(stored_name("Ola"), store, publisher);

    let view = service.start();
    assert!(!view.needs_name_input);
}

#[test]
fn unknown_session_is_reported() {
    let (service, _, _) = build_service();
    let missing = SessionId("ses-999999".to_string());

    match service.current(&missing) {
        Err(OnboardingServiceError::SessionNotFound(id)) => assert_eq!(id, "ses-999999"),
        other => panic!("expected session-not-found, got {other:?}"),
    }
}

#[test]
fn answer_rejects_questions_outside_the_active_set() {
    let (service, _, _) = build_service();
    let view = service.start();

    match service.answer(&view.session_id, "male_goal", 0) {
        Err(OnboardingServiceError::UnknownQuestion(question)) => {
            assert_eq!(question, "male_goal")
        }
        other => panic!("expected unknown-question, got {other:?}"),
    }
}

#[test]
fn answer_rejects_out_of_range_options() {
    let (service, _, _) = build_service();
    let view = service.start();

    match service.answer(&view.session_id, "vibe_intent", 12) {
        Err(OnboardingServiceError::OptionOutOfRange {
            question,
            option_index,
        }) => {
            assert_eq!(question, "vibe_intent");
            assert_eq!(option_index, 12);
        }
        other => panic!("expected option-out-of-range, got {other:?}"),
    }
}

#[test]
fn population_choice_swaps_the_active_questions() {
    let (service, _, _) = build_service();
    let view = service.start();

    service
        .select_population(&view.session_id, Population::Male)
        .expect("population accepted");

    let accepted = service
        .answer(&view.session_id, "male_goal", 1)
        .expect("male question now active");
    assert!(!accepted.finished);
}

#[test]
fn finish_persists_the_profile_and_publishes_the_result() {
    let (service, store, publisher) = build_service();
    let view = service.start();

    service
        .set_display_name(&view.session_id, "Ola")
        .expect("name accepted");
    service
        .answer(&view.session_id, "vibe_dump_story", 1)
        .expect("answer accepted");

    let classification = service.finish(&view.session_id).expect("finish succeeds");
    assert_eq!(classification.primary, Archetype::MysteryIcon);
    assert_eq!(classification.secondary, Some(Archetype::ChicRebel));

    let record = store
        .fetch_record(&view.session_id)
        .expect("profile persisted");
    assert_eq!(record.display_name, "Ola");
    assert_eq!(record.primary, Archetype::MysteryIcon);
    assert_eq!(record.description, Archetype::MysteryIcon.analysis());

    let events = publisher.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].session_id, view.session_id);
    assert_eq!(events[0].summary, classification.summary);
}

#[test]
fn finish_with_no_answers_defaults_the_classification() {
    let (service, _, publisher) = build_service();
    let view = service.start();

    let classification = service.finish(&view.session_id).expect("finish succeeds");

    assert_eq!(classification.primary, Archetype::default_primary());
    assert_eq!(classification.secondary, None);
    assert_eq!(publisher.events().len(), 1);
}

#[test]
fn finish_propagates_store_failures() {
    let publisher = Arc::new(MemoryPublisher::default());
    let service = OnboardingService::new(
        no_stored_name(),
        Arc::new(UnavailableStore),
        publisher.clone(),
    );
    let view = service.start();

    match service.finish(&view.session_id) {
        Err(OnboardingServiceError::Store(ProfileStoreError::Unavailable(_))) => {}
        other => panic!("expected store failure, got {other:?}"),
    }
    assert!(publisher.events().is_empty());
}

#[test]
fn finish_propagates_publisher_failures() {
    let store = Arc::new(MemoryProfileStore::default());
    let service = OnboardingService::new(no_stored_name(), store, Arc::new(FailingPublisher));
    let view = service.start();

    match service.finish(&view.session_id) {
        Err(OnboardingServiceError::Publish(PublishError::Transport(_))) => {}
        other => panic!("expected publish failure, got {other:?}"),
    }
}

#[test]
fn reset_reseeds_the_display_name() {
    let store = Arc::new(MemoryProfileStore::default());
    let publisher = Arc::new(MemoryPublisher::default());
    let service = OnboardingService::new(stored_name("Ola"), store, publisher);
    let view = service.start();

    service
        .set_display_name(&view.session_id, "")
        .expect("name cleared");
    let cleared = service.current(&view.session_id).expect("session exists");
    assert!(cleared.needs_name_input);

    let reset = service.reset(&view.session_id).expect("reset succeeds");
    assert!(!reset.needs_name_input);
    assert!(!reset.finished);
    assert_eq!(reset.screen.map(|screen| screen.position), Some(1));
}

#[test]
fn report_summarizes_the_session_flow() {
    let (service, _, _) = build_service();
    let view = service.start();
    service
        .answer(&view.session_id, "vibe_intent", 0)
        .expect("answer accepted");

    let summary = service.report(&view.session_id).expect("report builds");
    assert_eq!(summary.questions_answered, 1);
    assert_eq!(summary.questions_total, 4);
    assert!(summary.stages.iter().any(|entry| entry.screens > 0));
}
