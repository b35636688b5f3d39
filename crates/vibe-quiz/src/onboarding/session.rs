use tracing::{debug, warn};

use super::archetype::Population;
use super::bank::{questions_for, QuestionSet};
use super::flow::{compose, ScreenDescriptor, TOTAL_STEPS};
use super::quiz::{AnswerRecord, QuizQuestion, VibeResult};
use super::report::FlowReport;
use super::resolution::resolve;

/// Stateful controller for one onboarding run.
///
/// Owns the answer record, the current position, and a memoized composed
/// sequence. The sequence is invalidated (discarded, rebuilt on next access)
/// when the population changes or when the display name flips the
/// needs-name-input condition. All transitions are synchronous; callers
/// serialize access by holding `&mut`.
#[derive(Debug)]
pub struct OnboardingSession {
    position: usize,
    answers: AnswerRecord,
    population: Option<Population>,
    display_name: String,
    screens: Option<Vec<ScreenDescriptor>>,
    result: Option<VibeResult>,
    finished: bool,
}

impl OnboardingSession {
    /// Starts a fresh session. A non-empty `display_name` (seeded from an
    /// external profile source) suppresses the name-input screen.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            position: 0,
            answers: AnswerRecord::new(),
            population: None,
            display_name: display_name.into(),
            screens: None,
            result: None,
            finished: false,
        }
    }

    /// The question set answering the current population choice; the neutral
    /// discovery set until one is made.
    pub fn active_set(&self) -> QuestionSet {
        match self.population {
            Some(population) => QuestionSet::for_population(population),
            None => QuestionSet::VibeDiscovery,
        }
    }

    pub fn active_questions(&self) -> Vec<QuizQuestion> {
        questions_for(self.active_set())
    }

    pub fn population(&self) -> Option<Population> {
        self.population
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn needs_name_input(&self) -> bool {
        self.display_name.trim().is_empty()
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn selected_answer(&self, question: &QuizQuestion) -> Option<usize> {
        self.answers.get(&question.id).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn result(&self) -> Option<VibeResult> {
        self.result
    }

    /// The memoized composed sequence, rebuilding it after invalidation.
    /// The position is clamped when a rebuild shortens the sequence.
    pub fn screens(&mut self) -> &[ScreenDescriptor] {
        if self.screens.is_none() {
            let questions = questions_for(self.active_set());
            let screens = compose(&questions, self.needs_name_input(), &self.display_name);
            if !screens.is_empty() && self.position >= screens.len() {
                self.position = screens.len() - 1;
            }
            self.screens = Some(screens);
        }
        self.screens.as_deref().unwrap_or(&[])
    }

    /// Descriptor at the current position, or `None` while the sequence is
    /// unavailable. Never panics.
    pub fn current_screen(&mut self) -> Option<ScreenDescriptor> {
        let position = self.position;
        self.screens().get(position).cloned()
    }

    pub fn progress_label(&mut self) -> Option<String> {
        self.current_screen()
            .map(|screen| screen.progress_label())
    }

    /// Moves forward one step; no-op at the final screen.
    pub fn advance(&mut self) {
        let len = self.screens().len();
        if self.position + 1 < len {
            self.position += 1;
        }
    }

    /// Moves back one step; no-op at the first screen.
    pub fn go_back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Records an answer (overwriting any prior choice for the question) and
    /// advances one step. An out-of-range option index makes the whole call a
    /// no-op; the caller is expected to pre-validate.
    pub fn select_answer(&mut self, question: &QuizQuestion, option_index: usize) {
        if option_index >= question.options.len() {
            warn!(
                question = question.id.0,
                option_index, "ignoring out-of-range answer"
            );
            return;
        }
        self.answers.insert(question.id, option_index);
        debug!(question = question.id.0, option_index, "answer recorded");
        self.advance();
    }

    /// Switches the active question set, invalidates the composed sequence,
    /// and advances one step. The answer record is left untouched: answers to
    /// the previous population's questions stay recorded and come back into
    /// play if the user switches back.
    pub fn select_population(&mut self, population: Population) {
        self.population = Some(population);
        self.screens = None;
        debug!(population = population.label(), "population selected");
        self.advance();
    }

    /// Updates the display name, invalidating the composed sequence only when
    /// the change flips whether a name-input screen is needed.
    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        let display_name = display_name.into();
        let needed_before = self.needs_name_input();
        self.display_name = display_name;
        if self.needs_name_input() != needed_before {
            self.screens = None;
        }
    }

    /// Resolves the classification, caches it, and marks the flow complete.
    /// Subsequent calls return the cached result until `reset`.
    pub fn finish(&mut self) -> VibeResult {
        if let Some(result) = self.result {
            return result;
        }
        let questions = questions_for(self.active_set());
        let result = resolve(&self.answers, &questions);
        self.result = Some(result);
        self.finished = true;
        debug!(primary = ?result.primary, secondary = ?result.secondary, "session finished");
        result
    }

    /// Returns to the initial state. The display name is the one permitted
    /// carry-over; callers may re-seed it from an external source afterwards.
    pub fn reset(&mut self) {
        self.position = 0;
        self.answers.clear();
        self.population = None;
        self.screens = None;
        self.result = None;
        self.finished = false;
    }

    /// Stage-by-stage screen counts plus answered-question progress.
    pub fn report(&mut self) -> FlowReport {
        let questions = questions_for(self.active_set());
        let questions_answered = questions
            .iter()
            .filter(|question| self.answers.contains_key(&question.id))
            .count();
        // Force a rebuild first so the clamped position is reported.
        self.screens();
        let position = self.position;
        let screens = self.screens.as_deref().unwrap_or(&[]);
        let mut report = FlowReport {
            questions_total: questions.len(),
            questions_answered,
            steps: screens.len(),
            total_steps: TOTAL_STEPS,
            position: position + 1,
            ..FlowReport::default()
        };
        for screen in screens {
            *report.stage_screens.entry(screen.stage()).or_default() += 1;
        }
        report
    }
}
