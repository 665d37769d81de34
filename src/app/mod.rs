use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io;
use std::sync::mpsc;

use crate::{
    calendar::CalendarDate,
    picker::{CalendarPicker, PickerOptions},
    theme::Palette,
    ui::draw,
};

/// How the interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted(CalendarDate),
    Cancelled,
}

/// The `--json` report for an accepted date. `month` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedReport {
    pub date:  CalendarDate,
    pub year:  i32,
    pub month: u32,
    pub day:   u32,
}

impl From<CalendarDate> for AcceptedReport {
    fn from(date: CalendarDate) -> Self {
        Self { date, year: date.year, month: date.month + 1, day: date.day }
    }
}

// ─── App state ────────────────────────────────────────────────────────────────

pub struct App {
    pub picker:      CalendarPicker,
    pub palette:     Palette,
    /// Day under the keyboard cursor in the month on screen.
    pub cursor:      u32,
    pub status:      String,
    pub running:     bool,
    pub outcome:     Outcome,
    /// Most recent date reported through the date-changed callback.
    pub last_change: Option<CalendarDate>,
    /// Source of "today" for the jump key.
    pub clock:       fn() -> CalendarDate,
    changes:         mpsc::Receiver<CalendarDate>,
}

impl App {
    /// `palette` is the base palette; the options' selected-day colours are
    /// applied on top of it.
    pub fn new(options: PickerOptions, palette: Palette) -> Result<Self> {
        let initial = options.selected_date;
        let palette = palette.with_selected(
            options.selected_day_color.as_deref(),
            options.selected_day_text_color.as_deref(),
        );
        let (tx, changes) = mpsc::channel();
        let picker = CalendarPicker::new(options)?
            .with_on_date_change(move |d| { let _ = tx.send(d); });

        Ok(Self {
            picker, palette,
            cursor:      initial.day,
            status:      String::new(),
            running:     true,
            outcome:     Outcome::Cancelled,
            last_change: None,
            clock:       CalendarDate::today,
            changes,
        })
    }

    /// The date to hand back on accept: the last reported change, or the
    /// date the picker was opened with.
    pub fn chosen(&self) -> CalendarDate {
        self.last_change.unwrap_or(self.picker.options().selected_date)
    }

    // ── TUI loop ──────────────────────────────────────────────────────────────

    pub fn run(&mut self) -> Result<Outcome> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend  = CrosstermBackend::new(stdout);
        let mut term = Terminal::new(backend)?;

        let result = self.event_loop(&mut term);

        disable_raw_mode()?;
        execute!(term.backend_mut(), LeaveAlternateScreen)?;
        term.show_cursor()?;
        result.map(|_| self.outcome)
    }

    fn event_loop(&mut self, term: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick = std::time::Duration::from_millis(50);
        while self.running {
            term.draw(|f| draw(f, self))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.on_key(key);
                    }
                }
            }
        }
        tracing::info!(outcome = ?self.outcome, "picker closed");
        Ok(())
    }

    /// Pull every date reported since the last tick.
    fn drain_changes(&mut self) {
        while let Ok(d) = self.changes.try_recv() {
            self.status      = format!("✓ {d}");
            self.last_change = Some(d);
        }
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn on_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.outcome = Outcome::Cancelled;
                self.running = false;
            }
            (KeyCode::Char('q'), _) => {
                self.outcome = Outcome::Accepted(self.chosen());
                self.running = false;
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => self.move_cursor(1),
            (KeyCode::Left,  _) | (KeyCode::Char('h'), _) => self.move_cursor(-1),
            (KeyCode::Down,  _) | (KeyCode::Char('j'), _) => self.move_cursor(7),
            (KeyCode::Up,    _) | (KeyCode::Char('k'), _) => self.move_cursor(-7),
            (KeyCode::Char(']'), _) | (KeyCode::Char('n'), _) => self.change_month(1),
            (KeyCode::Char('['), _) | (KeyCode::Char('p'), _) => self.change_month(-1),
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => self.tap(self.cursor),
            (KeyCode::Char('t'), _) => self.jump_to((self.clock)()),
            _ => {}
        }
        self.drain_changes();
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn tap(&mut self, day: u32) {
        if let Err(e) = self.picker.select_day(day) {
            tracing::warn!("tap ignored: {e}");
            self.status = format!("✗ {e}");
        }
    }

    fn change_month(&mut self, delta: i32) {
        self.picker.navigate(delta);
        self.cursor = self.cursor.min(self.picker.days_in_view());
    }

    /// Move the cursor by `d` days, paging the month when it runs off
    /// either end.
    fn move_cursor(&mut self, d: i64) {
        let target = self.cursor as i64 + d;
        let len    = self.picker.days_in_view() as i64;
        if target < 1 {
            self.picker.previous_month();
            self.cursor = (self.picker.days_in_view() as i64 + target).max(1) as u32;
        } else if target > len {
            self.picker.next_month();
            self.cursor = (target - len).min(self.picker.days_in_view() as i64) as u32;
        } else {
            self.cursor = target as u32;
        }
    }

    fn jump_to(&mut self, date: CalendarDate) {
        match self.picker.set_selected_date(date) {
            Ok(()) => {
                self.cursor = date.day;
                self.tap(date.day);
            }
            Err(e) => self.status = format!("✗ {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ViewMonth;

    fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

    fn app(date: CalendarDate) -> App {
        App::new(PickerOptions::new(date), Palette::default()).unwrap()
    }

    #[test]
    fn enter_picks_the_cursor_day() {
        let mut a = app(CalendarDate::new(2024, 1, 15));
        a.on_key(key(KeyCode::Left));
        a.on_key(key(KeyCode::Up));
        a.on_key(key(KeyCode::Enter));
        assert_eq!(a.last_change, Some(CalendarDate::new(2024, 1, 7)));
        assert_eq!(a.picker.selected_day(), Some(7));
        assert_eq!(a.status, "✓ 2024-02-07");
    }

    #[test]
    fn cursor_pages_across_month_boundaries() {
        let mut a = app(CalendarDate::new(2024, 2, 3));
        a.on_key(key(KeyCode::Up));
        assert_eq!(a.picker.view_month(), 1);
        assert_eq!(a.cursor, 25);

        a.on_key(key(KeyCode::Down));
        assert_eq!(a.picker.view_month(), 2);
        assert_eq!(a.cursor, 3);
    }

    #[test]
    fn month_keys_clamp_the_cursor() {
        let mut a = app(CalendarDate::new(2024, 0, 31));
        a.on_key(key(KeyCode::Char(']')));
        assert_eq!(a.picker.view_month(), 1);
        assert_eq!(a.cursor, 29);
        // Movement is reported unless configured otherwise.
        assert_eq!(a.last_change, Some(CalendarDate::new(2024, 1, 29)));
        a.on_key(key(KeyCode::Char('p')));
        assert_eq!(a.picker.view_month(), 0);
    }

    #[test]
    fn quit_accepts_and_escape_cancels() {
        let mut a = app(CalendarDate::new(2024, 1, 15));
        a.on_key(key(KeyCode::Char('q')));
        assert!(!a.running);
        assert_eq!(a.outcome, Outcome::Accepted(CalendarDate::new(2024, 1, 15)));

        let mut b = app(CalendarDate::new(2024, 1, 15));
        b.on_key(key(KeyCode::Char('1')));
        b.on_key(key(KeyCode::Esc));
        assert!(!b.running);
        assert_eq!(b.outcome, Outcome::Cancelled);
    }

    #[test]
    fn today_jumps_and_reports() {
        let mut a = app(CalendarDate::new(1990, 5, 1));
        a.clock = || CalendarDate::new(2030, 6, 9);
        a.on_key(key(KeyCode::Char('t')));
        assert_eq!(a.last_change, Some(CalendarDate::new(2030, 6, 9)));
        assert_eq!(a.picker.view(), ViewMonth { month: 6, year: 2030 });
        assert_eq!(a.cursor, 9);
    }

    #[test]
    fn option_colours_override_the_palette() {
        let mut opts = PickerOptions::new(CalendarDate::new(2024, 1, 15));
        opts.selected_day_color      = Some("#ff0000".into());
        opts.selected_day_text_color = Some("#00ff00".into());
        let a = App::new(opts, Palette::default()).unwrap();
        assert_eq!(a.palette.selected_bg, "#ff0000");
        assert_eq!(a.palette.selected_fg, "#00ff00");
        assert_eq!(a.palette.cursor_bg, Palette::default().cursor_bg);
    }

    #[test]
    fn accepted_report_json() {
        let report = AcceptedReport::from(CalendarDate::new(2024, 1, 15));
        assert_eq!(serde_json::to_value(&report).unwrap(), serde_json::json!({
            "date":  "2024-02-15",
            "year":  2024,
            "month": 2,
            "day":   15,
        }));
    }
}
