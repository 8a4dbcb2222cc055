use chrono::{Local, NaiveDate, NaiveDateTime};

/// Trait for abstracting time operations, enabling testability
pub trait Clock: Send + Sync {
    /// Get the current local wall-clock time
    fn now(&self) -> NaiveDateTime;

    /// Get the current local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// System clock implementation using real time
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a settable instant
#[cfg(test)]
pub struct FixedClock(pub std::sync::Mutex<NaiveDateTime>);

#[cfg(test)]
impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self(std::sync::Mutex::new(now))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.0.lock().unwrap() = now;
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}
