use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::clock::Clock;
use crate::config::{REMINDER_FIRST_HOUR, REMINDER_LAST_HOUR};
use crate::error::{HydroError, Result};

/// Messages the scheduler hands to the UI thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// Check whether the record needs a day rollover
    DayCheck(NaiveDate),
    /// A reminder slot was reached
    Reminder,
}

/// Check whether `now` falls on a reminder slot: an even hour between
/// 08:00 and 22:00, minute zero
pub fn is_reminder_slot(now: NaiveDateTime) -> bool {
    let hour = now.hour();
    (REMINDER_FIRST_HOUR..=REMINDER_LAST_HOUR).contains(&hour) && hour % 2 == 0 && now.minute() == 0
}

/// Background loop that wakes once per interval and notifies the UI thread
pub struct ReminderScheduler {
    clock: Arc<dyn Clock>,
    tx: Sender<SchedulerEvent>,
    interval: Duration,
    last_slot: Option<(NaiveDate, u32)>,
}

impl ReminderScheduler {
    pub fn new(clock: Arc<dyn Clock>, tx: Sender<SchedulerEvent>, interval: Duration) -> Self {
        Self {
            clock,
            tx,
            interval,
            last_slot: None,
        }
    }

    /// Run the loop on its own thread. The thread is never joined; it ends
    /// with the process.
    pub fn spawn(mut self) -> JoinHandle<()> {
        thread::spawn(move || {
            loop {
                if let Err(e) = self.tick() {
                    log::error!("Reminder tick failed: {}", e);
                }
                thread::sleep(self.interval);
            }
        })
    }

    /// Perform one tick: always a day check, plus a reminder on a fresh slot
    pub fn tick(&mut self) -> Result<()> {
        let now = self.clock.now();
        self.send(SchedulerEvent::DayCheck(now.date()))?;

        if is_reminder_slot(now) {
            let slot = (now.date(), now.hour());
            // A drifting sleep can land twice in the same minute
            if self.last_slot != Some(slot) {
                self.last_slot = Some(slot);
                log::info!("Reminder slot reached at {}", now.format("%H:%M"));
                self.send(SchedulerEvent::Reminder)?;
            }
        }

        Ok(())
    }

    fn send(&self, event: SchedulerEvent) -> Result<()> {
        self.tx
            .send(event)
            .map_err(|_| HydroError::SchedulerDisconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::sync::mpsc;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_reminder_slots() {
        for hour in [8, 10, 12, 14, 16, 18, 20, 22] {
            assert!(is_reminder_slot(at(hour, 0, 0)), "{hour}:00");
            assert!(is_reminder_slot(at(hour, 0, 59)), "{hour}:00:59");
        }
    }

    #[test]
    fn test_not_reminder_slots() {
        assert!(!is_reminder_slot(at(6, 0, 0))); // before the window
        assert!(!is_reminder_slot(at(0, 0, 0)));
        assert!(!is_reminder_slot(at(9, 0, 0))); // odd hour
        assert!(!is_reminder_slot(at(10, 1, 0))); // not on the hour
        assert!(!is_reminder_slot(at(23, 0, 0)));
    }

    #[test]
    fn test_tick_always_sends_day_check() {
        let clock = Arc::new(FixedClock::at(at(13, 37, 0)));
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ReminderScheduler::new(clock, tx, Duration::from_secs(60));

        scheduler.tick().unwrap();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events, vec![SchedulerEvent::DayCheck(at(13, 37, 0).date())]);
    }

    #[test]
    fn test_tick_sends_reminder_once_per_slot() {
        let clock = Arc::new(FixedClock::at(at(10, 0, 1)));
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ReminderScheduler::new(clock.clone(), tx, Duration::from_secs(60));

        scheduler.tick().unwrap();
        clock.set(at(10, 0, 58));
        scheduler.tick().unwrap();
        clock.set(at(12, 0, 0));
        scheduler.tick().unwrap();

        let reminders = rx
            .try_iter()
            .filter(|e| *e == SchedulerEvent::Reminder)
            .count();
        assert_eq!(reminders, 2);
    }

    #[test]
    fn test_tick_reports_disconnected_receiver() {
        let clock = Arc::new(FixedClock::at(at(10, 0, 0)));
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut scheduler = ReminderScheduler::new(clock, tx, Duration::from_secs(60));

        assert!(matches!(
            scheduler.tick(),
            Err(HydroError::SchedulerDisconnected)
        ));
    }

    #[test]
    fn test_spawned_loop_keeps_running() {
        let clock = Arc::new(FixedClock::at(at(15, 0, 0)));
        let (tx, rx) = mpsc::channel();
        ReminderScheduler::new(clock, tx, Duration::from_millis(5)).spawn();

        for _ in 0..3 {
            let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            assert_eq!(event, SchedulerEvent::DayCheck(at(15, 0, 0).date()));
        }
    }
}
