use sana_core::models::severity::Severity;

use crate::Instrument;
use crate::scoring::{QuestionItem, SeverityBand, SeverityScale};

/// GAD-7: Generalized Anxiety Disorder seven-item scale.
/// 7 items on the shared 0–3 frequency scale. Total 0–21, standard cut
/// points at 5, 10, and 15.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[QuestionItem] {
        static ITEMS: std::sync::LazyLock<Vec<QuestionItem>> = std::sync::LazyLock::new(|| {
            let prompts = [
                ("nervousness", "Feeling nervous, anxious, or on edge"),
                (
                    "worry_control",
                    "Not being able to stop or control worrying",
                ),
                (
                    "excessive_worry",
                    "Worrying too much about different things",
                ),
                ("relaxation", "Trouble relaxing"),
                (
                    "restlessness",
                    "Being so restless that it is hard to sit still",
                ),
                ("irritability", "Becoming easily annoyed or irritable"),
                (
                    "apprehension",
                    "Feeling afraid, as if something awful might happen",
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
                    band(4, "Minimal anxiety", "green"),
                    band(9, "Mild anxiety", "goldenrod"),
                    band(14, "Moderate anxiety", "orange"),
                ],
                Severity::new("Severe anxiety", "red"),
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
