//! sana-instruments
//!
//! Screening instrument definitions. Pure data: the question lists and
//! severity tables for each supported instrument, plus the classifier
//! that maps a total score to a severity.

pub mod error;
pub mod instruments;
pub mod scoring;

use sana_core::models::result::ScoreResult;
use sana_core::models::severity::Severity;
use scoring::{QuestionItem, SeverityScale};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9", "GAD-7").
    fn name(&self) -> &str;

    /// The ordered, fixed question prompts.
    fn items(&self) -> &[QuestionItem];

    /// The instrument's severity table.
    fn scale(&self) -> &SeverityScale;

    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Highest reachable total: every item answered at the top of the
    /// shared 0–3 frequency scale.
    fn max_total(&self) -> u32 {
        self.item_count() as u32 * sana_core::models::frequency::Frequency::NearlyEveryDay.value()
    }

    /// Classify a total score against this instrument's severity table.
    /// Total over all inputs; callers are expected to stay within
    /// `0..=max_total()`, and anything above lands in the terminal band.
    fn classify(&self, total: u32) -> Severity {
        self.scale().classify(total).clone()
    }

    /// Format a submitted result as structured text for a plain-text
    /// summary view.
    fn to_structured_input(&self, result: &ScoreResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!("- Score: {}/{}\n", result.total, result.max_total));
        output.push_str(&format!("- Severity: {}\n", result.severity.level));
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
