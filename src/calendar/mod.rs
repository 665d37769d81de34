//! Calendar arithmetic shared by the grid, selection and navigation state.
//!
//! Months are 0-based (`0` = January … `11` = December) everywhere in this
//! module tree. Years are proleptic Gregorian and unbounded in either
//! direction.

pub mod composer;
pub mod date;
pub mod grid;
pub mod navigation;
pub mod selection;

pub use composer::DateComposer;
pub use date::CalendarDate;
pub use grid::{build_grid, Grid, GridCell};
pub use navigation::{NavigationState, ViewMonth};
pub use selection::{SelectionMask, SelectionState};

/// Week rows in every rendered month, including a trailing blank row when
/// the month only needs five.
pub const GRID_ROWS: usize = 6;
/// Day columns, one per weekday.
pub const GRID_COLS: usize = 7;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (0-based) of `year`.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => 0,
    }
}

/// Column index of day 1 of the month.
///
/// With `start_from_monday` the index space is Monday = 0 … Sunday = 6,
/// otherwise Sunday = 0 … Saturday = 6.
pub fn first_weekday_of_month(month: u32, year: i32, start_from_monday: bool) -> u32 {
    let sunday_first = weekday_from_sunday(year, month, 1);
    if start_from_monday {
        (sunday_first + 6) % 7
    } else {
        sunday_first
    }
}

/// Sunday = 0 weekday of an arbitrary date (Sakamoto's method).
pub fn weekday_from_sunday(year: i32, month: u32, day: u32) -> u32 {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 2 { year as i64 - 1 } else { year as i64 };
    let w = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + OFFSETS[(month % 12) as usize]
        + day as i64;
    w.rem_euclid(7) as u32
}
