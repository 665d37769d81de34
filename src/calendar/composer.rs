//! Turns day/month/year state into a date and tells the host about it.

use super::CalendarDate;

type DateListener = Box<dyn FnMut(CalendarDate)>;

/// Tracks the most recently composed date and owns the host's
/// date-changed callback.
pub struct DateComposer {
    current:   CalendarDate,
    on_change: Option<DateListener>,
}

impl DateComposer {
    pub fn new(initial: CalendarDate) -> Self {
        Self { current: initial, on_change: None }
    }

    pub fn set_listener(&mut self, listener: impl FnMut(CalendarDate) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn current(&self) -> CalendarDate { self.current }

    /// Build a date from its parts. A silent composition only updates the
    /// tracked date; otherwise the host callback fires once with it.
    ///
    /// The day is not checked against the month.
    pub fn compose(&mut self, day: u32, month: u32, year: i32, silent: bool) -> CalendarDate {
        let date = CalendarDate::new(year, month, day);
        if silent { self.stage(date) } else { self.commit(date) }
    }

    /// Record `date` without notifying.
    pub fn stage(&mut self, date: CalendarDate) -> CalendarDate {
        tracing::trace!(%date, "date staged");
        self.current = date;
        date
    }

    /// Record `date` and notify the host.
    pub fn commit(&mut self, date: CalendarDate) -> CalendarDate {
        self.current = date;
        tracing::debug!(%date, "date changed");
        if let Some(cb) = self.on_change.as_mut() { cb(date); }
        date
    }
}

impl std::fmt::Debug for DateComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateComposer")
            .field("current", &self.current)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}
