//! Fixed 6x7 month grid.

use super::{days_in_month, first_weekday_of_month, SelectionMask, GRID_CELLS, GRID_COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the first or after the last day of the month.
    Empty,
    Day { day: u32, selected: bool },
}

impl GridCell {
    pub fn day(&self) -> Option<u32> {
        match *self {
            GridCell::Day { day, .. } => Some(day),
            GridCell::Empty           => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, GridCell::Day { selected: true, .. })
    }
}

/// Row-major month view: weeks top to bottom, weekdays left to right.
/// Always 42 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [GridCell; GRID_CELLS],
}

impl Grid {
    pub fn cells(&self) -> &[GridCell] { &self.cells }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLS)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        if col >= GRID_COLS { return None; }
        self.cells.get(row * GRID_COLS + col).copied()
    }

    /// `(row, col)` of `day`, if it is on the grid.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.cells.iter()
            .position(|c| c.day() == Some(day))
            .map(|i| (i / GRID_COLS, i % GRID_COLS))
    }
}

/// Lay out `month` of `year` on the fixed grid.
///
/// Leading cells stay empty until the weekday of day 1 is reached; days are
/// then emitted in order with their flag read from `selection`, and whatever
/// is left of the 42 slots is padded empty.
pub fn build_grid(
    month:             u32,
    year:              i32,
    start_from_monday: bool,
    selection:         Option<&SelectionMask>,
) -> Grid {
    let offset = first_weekday_of_month(month, year, start_from_monday) as usize;
    let total  = days_in_month(month, year);

    let mut cells   = [GridCell::Empty; GRID_CELLS];
    let mut emitted = 0u32;
    for (slot, cell) in cells.iter_mut().enumerate() {
        if slot < offset || emitted >= total { continue; }
        emitted += 1;
        *cell = GridCell::Day {
            day:      emitted,
            selected: selection.is_some_and(|m| m.is_selected(emitted)),
        };
    }
    Grid { cells }
}
