use sana_core::models::severity::Severity;

use crate::Instrument;
use crate::scoring::{QuestionItem, SeverityBand, SeverityScale};

/// PHQ-9: Patient Health Questionnaire, nine-item depression module.
/// 9 items on the shared 0–3 frequency scale. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[QuestionItem] {
        static ITEMS: std::sync::LazyLock<Vec<QuestionItem>> = std::sync::LazyLock::new(|| {
            let prompts = [
                ("anhedonia", "Little interest or pleasure in doing things"),
                ("low_mood", "Feeling down, depressed, or hopeless"),
                (
                    "sleep",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                ("fatigue", "Feeling tired or having little energy"),
                ("appetite", "Poor appetite or overeating"),
                (
                    "self_worth",
                    "Feeling bad about yourself — or that you are a failure",
                ),
                ("concentration", "Trouble concentrating on things"),
                (
                    "psychomotor",
                    "Moving or speaking so slowly that others notice, or the opposite",
                ),
                (
                    "self_harm",
                    "Thoughts that you would be better off dead or hurting yourself",
                ),
            ];

            prompts
                .iter()
                .map(|(id, prompt)| QuestionItem {
                    id: id.to_string(),
                    prompt: prompt.to_string(),
                })
                .collect()
        });
        &ITEMS
    }

    fn scale(&self) -> &SeverityScale {
        static SCALE: std::sync::LazyLock<SeverityScale> = std::sync::LazyLock::new(|| {
            SeverityScale::new(
                vec![
                    band(4, "Minimal depression", "green"),
                    band(9, "Mild depression", "goldenrod"),
                    band(14, "Moderate depression", "orange"),
                    band(19, "Moderately severe depression", "orangered"),
                ],
                Severity::new("Severe depression", "red"),
            )
        });
        &SCALE
    }
}

fn band(upper: u32, level: &str, color: &str) -> SeverityBand {
    SeverityBand {
        upper,
        severity: Severity::new(level, color),
    }
}
