use crate::calendar::CalendarDate;
use crate::error::PickerError;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTHS: [&str; 12] = [
    "January", "February", "March",     "April",   "May",      "June",
    "July",    "August",   "September", "October", "November", "December",
];

/// Construction-time configuration of a [`CalendarPicker`](super::CalendarPicker).
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub selected_date:     CalendarDate,
    pub start_from_monday: bool,
    /// Seven labels in column order. `None` uses [`WEEKDAYS`], rotated when
    /// the week starts on Monday.
    pub weekdays:          Option<Vec<String>>,
    pub months:            Option<Vec<String>>,
    pub previous_title:    String,
    pub next_title:        String,
    /// Hex colours for the selected cell, handed to the renderer untouched.
    pub selected_day_color:      Option<String>,
    pub selected_day_text_color: Option<String>,
    /// Browsing to another month does not fire the date-changed callback.
    pub dont_change_date_on_calendar_movement: bool,
}

impl PickerOptions {
    pub fn new(selected_date: CalendarDate) -> Self {
        Self {
            selected_date,
            start_from_monday: false,
            weekdays:          None,
            months:            None,
            previous_title:    "Previous".to_owned(),
            next_title:        "Next".to_owned(),
            selected_day_color:      None,
            selected_day_text_color: None,
            dont_change_date_on_calendar_movement: false,
        }
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if let Some(w) = &self.weekdays {
            if w.len() != 7 {
                return Err(PickerError::LabelCount { kind: "weekday", expected: 7, got: w.len() });
            }
        }
        if let Some(m) = &self.months {
            if m.len() != 12 {
                return Err(PickerError::LabelCount { kind: "month", expected: 12, got: m.len() });
            }
        }
        let d = self.selected_date;
        CalendarDate::try_new(d.year, d.month, d.day)?;
        Ok(())
    }

    pub fn weekday_labels(&self) -> Vec<String> {
        match &self.weekdays {
            Some(w) => w.clone(),
            None => {
                let shift = usize::from(self.start_from_monday);
                (0..7).map(|i| WEEKDAYS[(i + shift) % 7].to_owned()).collect()
            }
        }
    }

    pub fn month_name(&self, month: u32) -> &str {
        let i = month as usize % 12;
        match &self.months {
            Some(m) => m[i].as_str(),
            None    => MONTHS[i],
        }
    }
}
