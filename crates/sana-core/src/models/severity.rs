use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A classified severity: the clinical label and the display color the
/// shell renders it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Severity {
    pub level: String,
    pub color: String,
}

impl Severity {
    pub fn new(level: &str, color: &str) -> Self {
        Self {
            level: level.to_string(),
            color: color.to_string(),
        }
    }
}
