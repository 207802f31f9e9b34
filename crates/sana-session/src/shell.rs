use tracing::info;

use crate::error::SessionError;
use crate::screening::{Screening, ScreeningPhase};

/// Presentation-side selector for the active instrument. The shell owns at
/// most one mounted screening; it holds no domain state of its own, and
/// switching instruments always discards the previous sitting.
#[derive(Default)]
pub struct Shell {
    active: Option<Screening>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a fresh screening for the named instrument, discarding any
    /// previous sitting. The new sitting always starts InProgress with an
    /// empty sheet, regardless of what was mounted before.
    pub fn activate(&mut self, instrument_id: &str) -> Result<&Screening, SessionError> {
        if let Some(previous) = &self.active
            && previous.phase() == ScreeningPhase::InProgress
        {
            info!(
                instrument = previous.instrument().id(),
                answered = previous.sheet().answered(),
                "discarding in-progress screening"
            );
        }
        let screening = Screening::mount(instrument_id)?;
        Ok(self.active.insert(screening))
    }

    /// Unmount the active screening, if any.
    pub fn deactivate(&mut self) {
        if let Some(screening) = self.active.take() {
            info!(
                instrument = screening.instrument().id(),
                "screening unmounted"
            );
        }
    }

    pub fn active(&self) -> Option<&Screening> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Screening> {
        self.active.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sana_core::models::frequency::Frequency;

    #[test]
    fn activation_mounts_the_named_instrument() {
        let mut shell = Shell::new();
        let screening = shell.activate("phq9").expect("phq9 registered");
        assert_eq!(screening.instrument().id(), "phq9");
        assert_eq!(screening.phase(), ScreeningPhase::InProgress);
    }

    #[test]
    fn activation_fails_cleanly_for_unknown_ids() {
        let mut shell = Shell::new();
        shell.activate("phq9").expect("phq9 registered");
        assert!(shell.activate("beck").is_err());
        // The previous sitting stays mounted when the switch fails.
        let active = shell.active().expect("still mounted");
        assert_eq!(active.instrument().id(), "phq9");
    }

    #[test]
    fn switching_discards_in_progress_state() {
        let mut shell = Shell::new();
        shell.activate("phq9").expect("phq9 registered");
        shell
            .active_mut()
            .expect("mounted")
            .record_answer(0, Frequency::NearlyEveryDay)
            .expect("in range");

        let switched = shell.activate("gad7").expect("gad7 registered");
        assert_eq!(switched.instrument().id(), "gad7");
        assert_eq!(switched.progress_percent(), 0.0);
        assert_eq!(switched.phase(), ScreeningPhase::InProgress);
    }

    #[test]
    fn reactivating_the_same_instrument_starts_a_fresh_sitting() {
        let mut shell = Shell::new();
        shell.activate("gad7").expect("gad7 registered");
        let screening = shell.active_mut().expect("mounted");
        for index in 0..screening.instrument().item_count() {
            screening
                .record_answer(index, Frequency::SeveralDays)
                .expect("in range");
        }
        screening.submit().expect("complete sheet");

        let fresh = shell.activate("gad7").expect("gad7 registered");
        assert_eq!(fresh.phase(), ScreeningPhase::InProgress);
        assert!(fresh.result().is_none());
        assert_eq!(fresh.progress_percent(), 0.0);
    }

    #[test]
    fn deactivate_unmounts() {
        let mut shell = Shell::new();
        shell.activate("phq9").expect("phq9 registered");
        shell.deactivate();
        assert!(shell.active().is_none());
    }
}
