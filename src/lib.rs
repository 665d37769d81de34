//! A month-grid date picker: calendar arithmetic, single-day selection and
//! month navigation, with a ratatui front end.

pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod picker;
pub mod theme;
pub mod ui;

pub use calendar::{CalendarDate, Grid, GridCell};
pub use error::PickerError;
pub use picker::{CalendarPicker, PickerOptions};
