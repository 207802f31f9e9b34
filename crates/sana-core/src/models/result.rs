use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;

/// The record frozen at submission time. Display-only: the shell renders
/// it as-is and never recomputes or mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub total: u32,
    pub max_total: u32,
    pub severity: Severity,
}
