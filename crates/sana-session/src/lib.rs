//! sana-session
//!
//! In-memory session state for one screening sitting: the per-question
//! answer sheet, the InProgress → Submitted screening state machine, and
//! the shell selector that mounts one instrument at a time. Nothing here
//! persists; state lives exactly as long as its owner.

pub mod answers;
pub mod error;
pub mod screening;
pub mod shell;
