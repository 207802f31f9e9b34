use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use sana_core::models::frequency::Frequency;
use sana_core::models::result::ScoreResult;
use sana_instruments::error::InstrumentError;
use sana_instruments::{Instrument, get_instrument};

use crate::answers::AnswerSheet;
use crate::error::SessionError;

/// Where a screening sitting stands. `Submitted` is terminal: a submitted
/// screening never returns to `InProgress`; re-taking means mounting a
/// fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScreeningPhase {
    InProgress,
    Submitted,
}

/// One sitting of one instrument: the instrument definition bound to its
/// own answer sheet, plus the result snapshot once submitted.
pub struct Screening {
    instrument: Box<dyn Instrument>,
    sheet: AnswerSheet,
    outcome: Option<ScoreResult>,
}

impl std::fmt::Debug for Screening {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screening")
            .field("instrument", &self.instrument.id())
            .field("sheet", &self.sheet)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl Screening {
    /// Mount a fresh sitting for the named instrument with an empty sheet.
    pub fn mount(instrument_id: &str) -> Result<Self, SessionError> {
        let instrument = get_instrument(instrument_id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
        info!(
            instrument = instrument_id,
            items = instrument.item_count(),
            "screening mounted"
        );
        Ok(Self {
            sheet: AnswerSheet::new(instrument.item_count()),
            instrument,
            outcome: None,
        })
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    pub fn phase(&self) -> ScreeningPhase {
        if self.outcome.is_some() {
            ScreeningPhase::Submitted
        } else {
            ScreeningPhase::InProgress
        }
    }

    /// Record (or overwrite) one answer. Rejected once submitted; the
    /// frozen result must not drift from the sheet it was scored on.
    pub fn record_answer(&mut self, index: usize, choice: Frequency) -> Result<(), SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::AlreadySubmitted);
        }
        self.sheet.record(index, choice)?;
        debug!(
            instrument = self.instrument.id(),
            index,
            value = choice.value(),
            answered = self.sheet.answered(),
            "answer recorded"
        );
        Ok(())
    }

    /// Completion as a percentage, for the progress bar.
    pub fn progress_percent(&self) -> f64 {
        self.sheet.completion_ratio() * 100.0
    }

    /// Freeze the current score into a result and move to `Submitted`.
    /// Submission with unanswered questions is prevented, not recovered:
    /// the error carries the counts the shell needs to keep the submit
    /// control disabled.
    pub fn submit(&mut self) -> Result<&ScoreResult, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::AlreadySubmitted);
        }
        if !self.sheet.is_complete() {
            return Err(SessionError::IncompleteSubmission {
                answered: self.sheet.answered(),
                total: self.sheet.question_count(),
            });
        }

        let total = self.sheet.total();
        let result = ScoreResult {
            instrument_id: self.instrument.id().to_string(),
            total,
            max_total: self.instrument.max_total(),
            severity: self.instrument.classify(total),
        };
        info!(
            instrument = self.instrument.id(),
            total,
            severity = %result.severity.level,
            "screening submitted"
        );
        Ok(self.outcome.insert(result))
    }

    /// The frozen result, present only once submitted.
    pub fn result(&self) -> Option<&ScoreResult> {
        self.outcome.as_ref()
    }

    /// Plain-text summary of the frozen result, if any.
    pub fn summary(&self) -> Option<String> {
        self.outcome
            .as_ref()
            .map(|result| self.instrument.to_structured_input(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(screening: &mut Screening, choice: Frequency) {
        for index in 0..screening.instrument().item_count() {
            screening.record_answer(index, choice).expect("in range");
        }
    }

    #[test]
    fn mount_starts_in_progress_with_empty_sheet() {
        let screening = Screening::mount("phq9").expect("phq9 registered");
        assert_eq!(screening.phase(), ScreeningPhase::InProgress);
        assert_eq!(screening.progress_percent(), 0.0);
        assert!(screening.result().is_none());
    }

    #[test]
    fn mount_rejects_unknown_instruments() {
        let err = Screening::mount("beck").expect_err("unregistered id");
        assert!(matches!(
            err,
            SessionError::Instrument(InstrumentError::UnknownInstrument(_))
        ));
    }

    #[test]
    fn premature_submission_is_rejected_and_state_unchanged() {
        let mut screening = Screening::mount("phq9").expect("phq9 registered");
        screening
            .record_answer(0, Frequency::NearlyEveryDay)
            .expect("in range");

        let err = screening.submit().expect_err("8 questions unanswered");
        assert!(matches!(
            err,
            SessionError::IncompleteSubmission {
                answered: 1,
                total: 9
            }
        ));
        assert_eq!(screening.phase(), ScreeningPhase::InProgress);
        assert!(screening.result().is_none());
    }

    #[test]
    fn submit_freezes_score_and_severity() {
        let mut screening = Screening::mount("phq9").expect("phq9 registered");
        answer_all(&mut screening, Frequency::NotAtAll);
        screening
            .record_answer(8, Frequency::NearlyEveryDay)
            .expect("in range");

        let result = screening.submit().expect("complete sheet");
        assert_eq!(result.total, 3);
        assert_eq!(result.max_total, 27);
        assert_eq!(result.severity.level, "Minimal depression");
        assert_eq!(screening.phase(), ScreeningPhase::Submitted);
    }

    #[test]
    fn submitted_screening_is_frozen() {
        let mut screening = Screening::mount("gad7").expect("gad7 registered");
        answer_all(&mut screening, Frequency::NearlyEveryDay);
        screening.submit().expect("complete sheet");

        assert!(matches!(
            screening.record_answer(0, Frequency::NotAtAll),
            Err(SessionError::AlreadySubmitted)
        ));
        assert!(matches!(
            screening.submit(),
            Err(SessionError::AlreadySubmitted)
        ));
        let result = screening.result().expect("result frozen");
        assert_eq!(result.total, 21);
        assert_eq!(result.severity.level, "Severe anxiety");
    }

    #[test]
    fn summary_renders_the_frozen_result() {
        let mut screening = Screening::mount("gad7").expect("gad7 registered");
        assert!(screening.summary().is_none());
        answer_all(&mut screening, Frequency::SeveralDays);
        screening.submit().expect("complete sheet");

        let summary = screening.summary().expect("submitted");
        assert!(summary.contains("## GAD-7"));
        assert!(summary.contains("- Score: 7/21"));
        assert!(summary.contains("- Severity: Mild anxiety"));
    }
}
