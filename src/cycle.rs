use chrono::NaiveDate;

use crate::models::TrackerState;

/// What a day check did to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    /// Still the same calendar day, nothing changed
    SameDay,
    /// A new day started; `goal_met` says whether the previous day was credited
    RolledOver { goal_met: bool },
}

impl DayOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, DayOutcome::RolledOver { .. })
    }
}

/// Roll the record over to `today` if its last processed day is different.
///
/// A finished day counts as successful when the intake reached the goal at
/// rollover time. The caller is responsible for persisting a changed record.
pub fn evaluate_day(state: &mut TrackerState, today: NaiveDate) -> DayOutcome {
    if state.last_update == today {
        return DayOutcome::SameDay;
    }

    let goal_met = state.goal_met();
    if goal_met {
        state.days_completed += 1;
    }
    state.current_intake = 0;
    state.last_update = today;

    DayOutcome::RolledOver { goal_met }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plant;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_same_day_is_untouched() {
        let mut state = TrackerState::new(60, Plant::Flower, day(19));
        state.add_water(2000);
        let before = state.clone();

        assert_eq!(evaluate_day(&mut state, day(19)), DayOutcome::SameDay);
        assert_eq!(state, before);
    }

    #[test]
    fn test_rollover_credits_met_goal() {
        let mut state = TrackerState::new(60, Plant::Flower, day(18));
        state.add_water(2000);

        let outcome = evaluate_day(&mut state, day(19));

        assert_eq!(outcome, DayOutcome::RolledOver { goal_met: true });
        assert_eq!(state.days_completed, 1);
        assert_eq!(state.current_intake, 0);
        assert_eq!(state.last_update, day(19));
    }

    #[test]
    fn test_rollover_without_goal_keeps_count() {
        let mut state = TrackerState::new(60, Plant::Flower, day(18));
        state.days_completed = 3;
        state.add_water(1799);

        let outcome = evaluate_day(&mut state, day(19));

        assert_eq!(outcome, DayOutcome::RolledOver { goal_met: false });
        assert_eq!(state.days_completed, 3);
        assert_eq!(state.current_intake, 0);
    }

    #[test]
    fn test_rollover_is_idempotent_per_day() {
        let mut state = TrackerState::new(60, Plant::Flower, day(17));
        state.add_water(1800);

        assert!(evaluate_day(&mut state, day(19)).changed());
        let after_first = state.clone();
        assert!(!evaluate_day(&mut state, day(19)).changed());
        assert_eq!(state, after_first);
        assert_eq!(state.days_completed, 1);
    }
}
