//! The date picker widget: navigation, selection and date composition wired
//! together behind one owner.

mod options;

pub use options::{PickerOptions, MONTHS, WEEKDAYS};

use crate::calendar::{
    build_grid, days_in_month, CalendarDate, DateComposer, Grid, NavigationState, SelectionState,
    ViewMonth,
};
use crate::error::PickerError;

/// A single-selection month picker.
///
/// Day selection always notifies the date-changed callback. Month movement
/// notifies unless `dont_change_date_on_calendar_movement` is set.
#[derive(Debug)]
pub struct CalendarPicker {
    options:    PickerOptions,
    navigation: NavigationState,
    selection:  SelectionState,
    composer:   DateComposer,
    /// Day-of-month carried across navigation.
    day:        u32,
}

impl CalendarPicker {
    pub fn new(options: PickerOptions) -> Result<Self, PickerError> {
        options.validate()?;
        let d = options.selected_date;
        tracing::debug!(date = %d, start_from_monday = options.start_from_monday, "picker created");
        Ok(Self {
            navigation: NavigationState::new(d.month, d.year),
            selection:  SelectionState::new(d.month, d.year, d.day),
            composer:   DateComposer::new(d),
            day:        d.day,
            options,
        })
    }

    pub fn with_on_date_change(mut self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        self.composer.set_listener(callback);
        self
    }

    pub fn on_month_change(&mut self, callback: impl FnMut(ViewMonth) + 'static) {
        self.navigation.subscribe(callback);
    }

    // ── Operations ────────────────────────────────────────────────────────────

    /// Select `day` of the month on screen, exactly as if its cell had been
    /// tapped, and notify the host.
    pub fn select_day(&mut self, day: u32) -> Result<CalendarDate, PickerError> {
        let ViewMonth { month, year } = self.navigation.view();
        let max_day = days_in_month(month, year);
        if day == 0 || day > max_day {
            return Err(PickerError::DayOutOfRange { day, month: month + 1, year, max_day });
        }
        self.selection.select(day);
        self.day = day;
        tracing::debug!(day, month, year, "day selected");
        Ok(self.composer.compose(day, month, year, false))
    }

    /// Move the view by `delta` months. The carried day is clamped to the
    /// length of the target month and stays selected there.
    pub fn navigate(&mut self, delta: i32) -> CalendarDate {
        let ViewMonth { month, year } = self.navigation.shift(delta);
        self.day = self.day.min(days_in_month(month, year));
        self.selection.recompute(month, year, self.day);
        let silent = self.options.dont_change_date_on_calendar_movement;
        self.composer.compose(self.day, month, year, silent)
    }

    pub fn next_month(&mut self) -> CalendarDate { self.navigate(1) }

    pub fn previous_month(&mut self) -> CalendarDate { self.navigate(-1) }

    /// Re-initialise from a new host-supplied date. Does not notify.
    pub fn set_selected_date(&mut self, date: CalendarDate) -> Result<(), PickerError> {
        let date = CalendarDate::try_new(date.year, date.month, date.day)?;
        self.navigation.reset(date.month, date.year);
        self.selection.recompute(date.month, date.year, date.day);
        self.day = date.day;
        self.options.selected_date = date;
        self.composer.stage(date);
        Ok(())
    }

    // ── Rendering inputs ──────────────────────────────────────────────────────

    pub fn grid(&self) -> Grid {
        let v = self.navigation.view();
        build_grid(v.month, v.year, self.options.start_from_monday, Some(self.selection.mask()))
    }

    pub fn month_label(&self) -> String {
        let v = self.navigation.view();
        format!("{} {}", self.options.month_name(v.month), v.year)
    }

    pub fn weekday_labels(&self) -> Vec<String> { self.options.weekday_labels() }

    pub fn previous_title(&self) -> &str { &self.options.previous_title }

    pub fn next_title(&self) -> &str { &self.options.next_title }

    pub fn options(&self) -> &PickerOptions { &self.options }

    // ── State ─────────────────────────────────────────────────────────────────

    /// Last composed date, silent or not.
    pub fn current_date(&self) -> CalendarDate { self.composer.current() }

    pub fn selected_day(&self) -> Option<u32> { self.selection.mask().selected_day() }

    pub fn view(&self) -> ViewMonth { self.navigation.view() }

    pub fn view_month(&self) -> u32 { self.navigation.month() }

    pub fn view_year(&self) -> i32 { self.navigation.year() }

    pub fn days_in_view(&self) -> u32 {
        days_in_month(self.navigation.month(), self.navigation.year())
    }
}
