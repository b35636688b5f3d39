use vibe_quiz::onboarding::{
    compose, questions_for, OnboardingSession, Population, QuestionSet, ScreenContent,
    TOTAL_STEPS,
};

#[test]
fn question_bank_sets_are_stable_and_non_empty() {
    for set in QuestionSet::ordered() {
        let first = questions_for(set);
        let second = questions_for(set);
        assert!(!first.is_empty(), "{} must not be empty", set.label());
        assert_eq!(first, second, "same key must yield same content");
    }
    assert_eq!(questions_for(QuestionSet::MaleVibeDiscovery).len(), 5);
    assert_eq!(questions_for(QuestionSet::FemaleVibeDiscovery).len(), 4);
}

#[test]
fn question_identities_are_unique_across_sets() {
    let mut seen = std::collections::BTreeSet::new();
    for set in QuestionSet::ordered() {
        for question in questions_for(set) {
            assert!(seen.insert(question.id), "duplicate id {:?}", question.id);
        }
    }
}

#[test]
fn every_composition_numbers_screens_without_gaps() {
    for set in QuestionSet::ordered() {
        for (needs_name, name) in [(true, ""), (false, "Ola")] {
            let questions = questions_for(set);
            let screens = compose(&questions, needs_name, name);
            for (index, screen) in screens.iter().enumerate() {
                assert_eq!(screen.position, index + 1);
                assert_eq!(screen.total, TOTAL_STEPS);
            }
        }
    }
}

#[test]
fn full_male_walkthrough_reaches_a_ranked_classification() {
    let mut session = OnboardingSession::new("");
    session.set_display_name("Marcus");
    session.select_population(Population::Male);

    let questions = session.active_questions();
    // Lean into the leader answers.
    session.select_answer(&questions[0], 0);
    session.select_answer(&questions[1], 0);
    session.select_answer(&questions[2], 0);
    session.select_answer(&questions[3], 0);
    session.select_answer(&questions[4], 0);

    let result = session.finish();
    assert_eq!(result.primary.population(), Population::Male);
    assert!(result.secondary.is_some());
    assert!(result.summary().starts_with("Your vibe is "));
}

#[test]
fn walkthrough_with_back_and_changed_answer_recomputes_cleanly() {
    let mut session = OnboardingSession::new("Ola");
    session.select_population(Population::Female);
    let questions = session.active_questions();

    session.select_answer(&questions[0], 0);
    let first = session.finish();

    session.reset();
    session.set_display_name("Ola");
    session.select_population(Population::Female);
    session.select_answer(&questions[0], 0);
    session.go_back();
    session.select_answer(&questions[0], 1);
    let second = session.finish();

    assert_ne!(first.primary, second.primary);
}

#[test]
fn current_screen_tracks_navigation() {
    let mut session = OnboardingSession::new("");
    let hero = session.current_screen().expect("screen available");
    assert!(matches!(hero.content, ScreenContent::Hero { .. }));
    assert_eq!(hero.progress_label(), "Step 1 of 18");

    session.advance();
    session.advance();
    session.go_back();
    let screen = session.current_screen().expect("screen available");
    assert_eq!(screen.position, 2);
}
