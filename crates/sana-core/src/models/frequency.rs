use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The shared four-point frequency scale: "over the last two weeks, how
/// often have you been bothered by …". Every screening item uses the same
/// ordinal scale, so it lives here rather than with any one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    NotAtAll,
    SeveralDays,
    MoreThanHalfTheDays,
    NearlyEveryDay,
}

impl Frequency {
    /// All choices in ascending ordinal order, for rendering answer cards.
    pub const ALL: [Frequency; 4] = [
        Frequency::NotAtAll,
        Frequency::SeveralDays,
        Frequency::MoreThanHalfTheDays,
        Frequency::NearlyEveryDay,
    ];

    /// The ordinal value this choice contributes to the total score.
    pub fn value(self) -> u32 {
        match self {
            Frequency::NotAtAll => 0,
            Frequency::SeveralDays => 1,
            Frequency::MoreThanHalfTheDays => 2,
            Frequency::NearlyEveryDay => 3,
        }
    }

    /// Display label, value prefix included, as shown on the answer card.
    pub fn label(self) -> &'static str {
        match self {
            Frequency::NotAtAll => "0 – Not at all",
            Frequency::SeveralDays => "1 – Several days",
            Frequency::MoreThanHalfTheDays => "2 – More than half the days",
            Frequency::NearlyEveryDay => "3 – Nearly every day",
        }
    }
}

impl TryFrom<u8> for Frequency {
    type Error = CoreError;

    fn try_from(raw: u8) -> Result<Self, CoreError> {
        match raw {
            0 => Ok(Frequency::NotAtAll),
            1 => Ok(Frequency::SeveralDays),
            2 => Ok(Frequency::MoreThanHalfTheDays),
            3 => Ok(Frequency::NearlyEveryDay),
            other => Err(CoreError::InvalidFrequency(other)),
        }
    }
}
