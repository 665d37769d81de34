//! Single-selection state over the days of the month being shown.

use super::days_in_month;

/// One flag per day of the month; index `i` is day `i + 1`.
///
/// At most one entry is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMask {
    flags: Vec<bool>,
}

impl SelectionMask {
    /// Mask of `len` days with only `day` set, or nothing set when `day` is
    /// outside `1..=len`.
    pub fn with_selected(len: u32, day: u32) -> Self {
        Self { flags: (1..=len).map(|d| d == day).collect() }
    }

    pub fn len(&self) -> usize { self.flags.len() }

    pub fn is_empty(&self) -> bool { self.flags.is_empty() }

    pub fn is_selected(&self, day: u32) -> bool {
        day >= 1 && self.flags.get(day as usize - 1).copied().unwrap_or(false)
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.flags.iter().position(|&f| f).map(|i| i as u32 + 1)
    }

    pub fn as_slice(&self) -> &[bool] { &self.flags }
}

/// Owns the mask for the current month and rebuilds it on demand.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    mask: SelectionMask,
}

impl SelectionState {
    pub fn new(month: u32, year: i32, selected_day: u32) -> Self {
        let mut state = Self::default();
        state.recompute(month, year, selected_day);
        state
    }

    /// Rebuild the mask for a (possibly different) month. The previous mask
    /// is discarded since its length may no longer match.
    pub fn recompute(&mut self, month: u32, year: i32, selected_day: u32) -> &SelectionMask {
        self.mask = SelectionMask::with_selected(days_in_month(month, year), selected_day);
        tracing::trace!(month, year, selected_day, "selection mask rebuilt");
        &self.mask
    }

    /// Move the selection to `day` within the current mask. No range check is
    /// made here; a day past the end of the month leaves nothing selected.
    pub fn select(&mut self, day: u32) -> &SelectionMask {
        self.mask = SelectionMask::with_selected(self.mask.len() as u32, day);
        &self.mask
    }

    pub fn mask(&self) -> &SelectionMask { &self.mask }
}
