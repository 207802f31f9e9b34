//! sana-core
//!
//! Pure domain types for the Sana screening system: the shared ordinal
//! answer scale, severity vocabulary, and the frozen score result. No I/O
//! and no state: this is the shared vocabulary of the system.

pub mod error;
pub mod models;
