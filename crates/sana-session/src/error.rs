use thiserror::Error;

use sana_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("question index {index} out of range for {count}-item instrument")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("cannot submit: {answered} of {total} questions answered")]
    IncompleteSubmission { answered: usize, total: usize },

    #[error("screening already submitted; mount a fresh instance to re-take")]
    AlreadySubmitted,

    #[error("instrument lookup failed: {0}")]
    Instrument(#[from] InstrumentError),
}
