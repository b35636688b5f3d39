use std::collections::BTreeMap;

use serde::Serialize;

use super::archetype::Archetype;

/// Stable identity of a question, independent of its position in a set.
///
/// Recorded answers are keyed by this identity so they survive the active
/// question list being rebuilt or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct QuestionId(pub &'static str);

/// Chosen option index per question, keyed by question identity.
pub type AnswerRecord = BTreeMap<QuestionId, usize>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    /// Hidden weights toward archetypes, never exposed over the wire.
    #[serde(skip_serializing)]
    pub weights: Vec<(Archetype, i32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

/// Accumulator of integer scores for every archetype in the catalog.
///
/// Created fresh for each resolution pass and discarded afterwards; it is
/// never mutated incrementally while answers are being recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizScorecard {
    scores: BTreeMap<Archetype, i32>,
}

impl Default for QuizScorecard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizScorecard {
    pub fn new() -> Self {
        let scores = Archetype::ordered()
            .iter()
            .map(|&archetype| (archetype, 0))
            .collect();
        Self { scores }
    }

    pub fn apply(&mut self, weights: &[(Archetype, i32)]) {
        for &(archetype, weight) in weights {
            *self.scores.entry(archetype).or_insert(0) += weight;
        }
    }

    pub fn score(&self, archetype: Archetype) -> i32 {
        self.scores.get(&archetype).copied().unwrap_or(0)
    }

    /// Top `n` archetypes by score, strictly descending. Equal scores keep
    /// catalog order (the map iterates in `Archetype` order and the sort is
    /// stable), so the ranking is deterministic.
    pub fn top(&self, n: usize) -> Vec<(Archetype, i32)> {
        let mut ranked: Vec<(Archetype, i32)> = self
            .scores
            .iter()
            .map(|(&archetype, &score)| (archetype, score))
            .collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked.truncate(n);
        ranked
    }

    pub fn reset(&mut self) {
        for score in self.scores.values_mut() {
            *score = 0;
        }
    }
}

/// Outcome of a resolution pass over the recorded answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VibeResult {
    pub primary: Archetype,
    pub secondary: Option<Archetype>,
    pub description: &'static str,
}

impl VibeResult {
    pub fn summary(&self) -> String {
        match self.secondary {
            Some(secondary) => format!(
                "Your vibe is {} with a touch of {}.",
                self.primary.title(),
                secondary.title()
            ),
            None => format!("Your vibe is {}.", self.primary.title()),
        }
    }
}
