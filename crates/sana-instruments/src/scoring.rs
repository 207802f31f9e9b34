use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sana_core::models::severity::Severity;

/// One fixed prompt within an instrument. Items are configuration, not
/// user data: defined once per instrument, ordered, immutable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionItem {
    pub id: String,
    pub prompt: String,
}

/// One finite entry in a severity scale: totals up to and including
/// `upper` classify as `severity`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub upper: u32,
    pub severity: Severity,
}

/// An instrument's ordered severity table. Finite bands are evaluated in
/// ascending order; any total above every finite bound falls into the
/// terminal band, so classification is total over all scores.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityScale {
    bands: Vec<SeverityBand>,
    terminal: Severity,
}

impl SeverityScale {
    pub fn new(bands: Vec<SeverityBand>, terminal: Severity) -> Self {
        Self { bands, terminal }
    }

    /// Return the first band whose inclusive upper bound covers `total`,
    /// falling through to the terminal band.
    pub fn classify(&self, total: u32) -> &Severity {
        self.bands
            .iter()
            .find(|band| total <= band.upper)
            .map(|band| &band.severity)
            .unwrap_or(&self.terminal)
    }

    pub fn bands(&self) -> &[SeverityBand] {
        &self.bands
    }

    pub fn terminal(&self) -> &Severity {
        &self.terminal
    }
}
