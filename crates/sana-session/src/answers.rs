use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sana_core::models::frequency::Frequency;

use crate::error::SessionError;

/// Per-question answer map for one instrument instance. Keys are question
/// indices (0..N-1) and are populated only as questions are answered;
/// absence of a key means unanswered. Last write wins on re-selection.
///
/// Score, completion ratio, and completeness are recomputed on every read
/// rather than cached, so there is no derived state to drift.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSheet {
    question_count: usize,
    answers: BTreeMap<usize, Frequency>,
}

impl AnswerSheet {
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count,
            answers: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the answer for `index`. Out-of-range indices
    /// are a caller bug and are rejected outright.
    pub fn record(&mut self, index: usize, choice: Frequency) -> Result<(), SessionError> {
        if index >= self.question_count {
            return Err(SessionError::QuestionOutOfRange {
                index,
                count: self.question_count,
            });
        }
        self.answers.insert(index, choice);
        Ok(())
    }

    pub fn answer(&self, index: usize) -> Option<Frequency> {
        self.answers.get(&index).copied()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Sum of all recorded ordinal values; 0 when nothing is answered.
    pub fn total(&self) -> u32 {
        self.answers.values().map(|choice| choice.value()).sum()
    }

    /// Answered fraction in [0, 1]. A zero-item sheet is vacuously
    /// complete.
    pub fn completion_ratio(&self) -> f64 {
        if self.question_count == 0 {
            return 1.0;
        }
        self.answered() as f64 / self.question_count as f64
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == self.question_count
    }
}
