//! Time source for the `POT-Creation-Date` header.

use chrono::Local;

/// Timestamp layout used in catalog headers, e.g. `2015-06-30 14:48+0200`.
pub const POT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M%z";

/// Supplies the creation timestamp written into the catalog header.
pub trait Clock {
    fn now(&self) -> String;
}

/// Current local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(POT_DATE_FORMAT).to_string()
    }
}

/// Always returns the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
