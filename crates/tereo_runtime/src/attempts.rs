//! The attempt log: every submitted sentence and per-lesson progress.

use serde::{Deserialize, Serialize};
use tereo_foundation::Card;

/// One card of a submitted sentence, as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltWord {
    /// Surface form.
    pub word: String,
    /// Word-type name, e.g. `particle_locative`.
    pub word_type: String,
}

impl From<&Card> for BuiltWord {
    fn from(card: &Card) -> Self {
        Self {
            word: card.maori.clone(),
            word_type: card.word_type.name().to_string(),
        }
    }
}

/// One submitted attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// The challenge attempted.
    pub challenge_id: String,
    /// The cards in slot order.
    pub built: Vec<BuiltWord>,
    /// Whether the attempt was correct.
    pub is_correct: bool,
}

/// Where a learner is in a lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    /// Started but not finished.
    InProgress,
    /// Final challenge answered correctly.
    Completed,
}

/// Progress through one lesson.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    /// The lesson.
    pub lesson_id: String,
    /// The lesson's module.
    pub module_id: String,
    /// Where the learner is.
    pub status: LessonStatus,
    /// Points earned in this lesson.
    pub score: u32,
}

/// Append-only attempts plus one progress row per lesson.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptLog {
    attempts: Vec<AttemptRecord>,
    progress: Vec<LessonProgress>,
}

impl AttemptLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attempt.
    pub fn record(&mut self, challenge_id: impl Into<String>, cards: &[Card], is_correct: bool) {
        self.attempts.push(AttemptRecord {
            challenge_id: challenge_id.into(),
            built: cards.iter().map(BuiltWord::from).collect(),
            is_correct,
        });
    }

    /// All attempts, oldest first.
    #[must_use]
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Attempts at one challenge.
    pub fn attempts_for<'a>(
        &'a self,
        challenge_id: &'a str,
    ) -> impl Iterator<Item = &'a AttemptRecord> {
        self.attempts.iter().filter(move |a| a.challenge_id == challenge_id)
    }

    /// Inserts or updates the progress row for a lesson.
    ///
    /// A completed lesson stays completed; the score only grows.
    pub fn upsert_progress(
        &mut self,
        lesson_id: &str,
        module_id: &str,
        status: LessonStatus,
        score: u32,
    ) {
        match self.progress.iter_mut().find(|p| p.lesson_id == lesson_id) {
            Some(row) => {
                if row.status != LessonStatus::Completed {
                    row.status = status;
                }
                row.score = row.score.max(score);
            }
            None => self.progress.push(LessonProgress {
                lesson_id: lesson_id.to_string(),
                module_id: module_id.to_string(),
                status,
                score,
            }),
        }
    }

    /// Progress for a lesson.
    #[must_use]
    pub fn progress(&self, lesson_id: &str) -> Option<&LessonProgress> {
        self.progress.iter().find(|p| p.lesson_id == lesson_id)
    }

    /// All progress rows.
    #[must_use]
    pub fn all_progress(&self) -> &[LessonProgress] {
        &self.progress
    }

    /// Fraction of attempts that were correct, if any were made.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts.is_empty() {
            return None;
        }
        let correct = self.attempts.iter().filter(|a| a.is_correct).count();
        Some(correct as f64 / self.attempts.len() as f64)
    }
}
