//! Month/year navigation.

/// The month currently on screen. `month` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    pub month: u32,
    pub year:  i32,
}

type MonthListener = Box<dyn FnMut(ViewMonth)>;

/// Cyclic state machine over `(month, year)`. Years are not clamped; they
/// wrap at the `i32` bounds.
///
/// Every step is pushed to subscribers, whether or not the host ends up
/// being notified of a date change.
pub struct NavigationState {
    view:      ViewMonth,
    listeners: Vec<MonthListener>,
}

impl NavigationState {
    pub fn new(month: u32, year: i32) -> Self {
        Self { view: ViewMonth { month, year }, listeners: Vec::new() }
    }

    pub fn view(&self) -> ViewMonth { self.view }
    pub fn month(&self) -> u32 { self.view.month }
    pub fn year(&self) -> i32 { self.view.year }

    pub fn subscribe(&mut self, listener: impl FnMut(ViewMonth) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn advance(&mut self) -> ViewMonth {
        if self.view.month >= 11 {
            self.view.month = 0;
            self.view.year = self.view.year.wrapping_add(1);
        } else {
            self.view.month += 1;
        }
        self.emit()
    }

    pub fn retreat(&mut self) -> ViewMonth {
        if self.view.month == 0 {
            self.view.month = 11;
            self.view.year = self.view.year.wrapping_sub(1);
        } else {
            self.view.month -= 1;
        }
        self.emit()
    }

    /// Step `delta` months forward (negative: backward), one emission per
    /// step.
    pub fn shift(&mut self, delta: i32) -> ViewMonth {
        for _ in 0..delta.unsigned_abs() {
            if delta > 0 { self.advance(); } else { self.retreat(); }
        }
        self.view
    }

    /// Jump straight to a month without notifying subscribers. Used when the
    /// host re-initialises the picker.
    pub fn reset(&mut self, month: u32, year: i32) {
        self.view = ViewMonth { month, year };
    }

    fn emit(&mut self) -> ViewMonth {
        let view = self.view;
        tracing::debug!(month = view.month, year = view.year, "view month changed");
        for l in self.listeners.iter_mut() { l(view); }
        view
    }
}

impl std::fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationState")
            .field("view", &self.view)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
