use crate::onboarding::archetype::Archetype;
use crate::onboarding::quiz::QuizScorecard;

#[test]
fn new_scorecard_zeroes_every_archetype() {
    let scorecard = QuizScorecard::new();
    for archetype in Archetype::ordered() {
        assert_eq!(scorecard.score(archetype), 0);
    }
}

#[test]
fn apply_accumulates_weights() {
    let mut scorecard = QuizScorecard::new();
    scorecard.apply(&[(Archetype::GlowGetter, 3), (Archetype::CozyChic, 1)]);
    scorecard.apply(&[(Archetype::GlowGetter, 2)]);

    assert_eq!(scorecard.score(Archetype::GlowGetter), 5);
    assert_eq!(scorecard.score(Archetype::CozyChic), 1);
    assert_eq!(scorecard.score(Archetype::ZenMaster), 0);
}

#[test]
fn application_order_does_not_change_totals() {
    let batches = [
        vec![(Archetype::AlphaVibe, 2), (Archetype::ZenMaster, 1)],
        vec![(Archetype::ZenMaster, 3)],
        vec![(Archetype::AlphaVibe, 1), (Archetype::TechTitan, 2)],
    ];

    let mut forward = QuizScorecard::new();
    for batch in &batches {
        forward.apply(batch);
    }

    let mut reverse = QuizScorecard::new();
    for batch in batches.iter().rev() {
        reverse.apply(batch);
    }

    assert_eq!(forward, reverse);
}

#[test]
fn negative_weights_are_accepted() {
    let mut scorecard = QuizScorecard::new();
    scorecard.apply(&[(Archetype::BoldRebel, -2)]);
    assert_eq!(scorecard.score(Archetype::BoldRebel), -2);
}

#[test]
fn top_ranks_by_score_descending() {
    let mut scorecard = QuizScorecard::new();
    scorecard.apply(&[
        (Archetype::DreamyMuse, 4),
        (Archetype::MysteryIcon, 7),
        (Archetype::SereneSoul, 1),
    ]);

    let top = scorecard.top(2);
    assert_eq!(
        top,
        vec![(Archetype::MysteryIcon, 7), (Archetype::DreamyMuse, 4)]
    );
}

#[test]
fn ties_break_by_catalog_order() {
    let mut scorecard = QuizScorecard::new();
    // CharismaticLeader is declared last; CozyChic second.
    scorecard.apply(&[
        (Archetype::CharismaticLeader, 5),
        (Archetype::CozyChic, 5),
    ]);

    let top = scorecard.top(2);
    assert_eq!(top[0].0, Archetype::CozyChic);
    assert_eq!(top[1].0, Archetype::CharismaticLeader);
}

#[test]
fn reset_zeroes_counters() {
    let mut scorecard = QuizScorecard::new();
    scorecard.apply(&[(Archetype::StreetSage, 9)]);
    scorecard.reset();
    assert_eq!(scorecard, QuizScorecard::new());
}
