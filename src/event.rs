use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::scheduler::SchedulerEvent;

/// Application events
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// The background scheduler asked for something to happen on the UI thread
    Scheduler(SchedulerEvent),
}

/// Poll for events with a timeout.
///
/// Pending scheduler messages are delivered before terminal input, so a
/// reminder shows up within one tick even while the user is typing.
/// Returns `Some(AppEvent)` if an event occurred, or `None` if no relevant event.
pub fn poll_event(
    tick_rate: Duration,
    scheduler: &Receiver<SchedulerEvent>,
) -> color_eyre::Result<Option<AppEvent>> {
    if let Ok(message) = scheduler.try_recv() {
        return Ok(Some(AppEvent::Scheduler(message)));
    }

    if event::poll(tick_rate)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            _ => Ok(None),
        }
    } else {
        Ok(None)
    }
}
