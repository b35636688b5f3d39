use super::archetype::Archetype;
use super::quiz::{AnswerRecord, QuizQuestion, QuizScorecard, VibeResult};

/// Replays the recorded answers against the active question list and ranks
/// the outcome.
///
/// Scoring always starts from a fresh scorecard, so the result is a pure
/// function of its inputs. Answers to questions absent from the active list
/// are skipped (orphans from a prior population), as are option indices out
/// of range for their question. Archetypes without a positive score never
/// surface; an empty ranking falls back to the catalog default with no
/// secondary.
pub fn resolve(answers: &AnswerRecord, questions: &[QuizQuestion]) -> VibeResult {
    let mut scorecard = QuizScorecard::new();

    for (question_id, &option_index) in answers {
        let Some(question) = questions.iter().find(|question| question.id == *question_id)
        else {
            continue;
        };
        let Some(option) = question.options.get(option_index) else {
            continue;
        };
        scorecard.apply(&option.weights);
    }

    let ranked: Vec<(Archetype, i32)> = scorecard
        .top(Archetype::COUNT)
        .into_iter()
        .filter(|&(_, score)| score > 0)
        .collect();

    let primary = ranked
        .first()
        .map(|&(archetype, _)| archetype)
        .unwrap_or_else(Archetype::default_primary);
    let secondary = ranked.get(1).map(|&(archetype, _)| archetype);

    VibeResult {
        primary,
        secondary,
        description: primary.analysis(),
    }
}
