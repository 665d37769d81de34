//! Terminal rendering against ratatui's test backend.

use calpicker::app::App;
use calpicker::theme::Palette;
use calpicker::ui::draw;
use calpicker::{CalendarDate, PickerOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, style::Color, Terminal};

fn render(app: &App) -> Vec<String> {
    let mut term = Terminal::new(TestBackend::new(60, 16)).unwrap();
    term.draw(|f| draw(f, app)).unwrap();
    let buf   = term.backend().buffer().clone();
    let width = buf.area.width as usize;
    buf.content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect()
}

fn app(opts: PickerOptions) -> App {
    App::new(opts, Palette::default()).unwrap()
}

#[test]
fn header_labels_and_days_are_drawn() {
    let screen = render(&app(PickerOptions::new(CalendarDate::new(2024, 1, 15)))).join("\n");
    assert!(screen.contains("February 2024"));
    assert!(screen.contains("Previous"));
    assert!(screen.contains("Next"));
    assert!(screen.contains("Sun Mon Tue Wed Thu Fri Sat"));
    assert!(screen.contains(" 11  12  13  14  15  16  17"));
    assert!(screen.contains(" 25  26  27  28  29"));
    assert!(!screen.contains(" 30 "));
}

#[test]
fn custom_labels_are_drawn() {
    let mut opts = PickerOptions::new(CalendarDate::new(2024, 1, 15));
    opts.start_from_monday = true;
    opts.previous_title = "Prev".into();
    opts.next_title = "Sig".into();
    let screen = render(&app(opts)).join("\n");
    assert!(screen.contains("Mon Tue Wed Thu Fri Sat Sun"));
    assert!(screen.contains("Prev"));
    assert!(screen.contains("Sig"));
}

#[test]
fn redraw_follows_navigation() {
    let mut a = app(PickerOptions::new(CalendarDate::new(2024, 11, 15)));
    a.on_key(KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE));
    let screen = render(&a).join("\n");
    assert!(screen.contains("January 2025"));
    assert!(screen.contains("✓ 2025-01-15"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let a = app(PickerOptions::new(CalendarDate::new(2024, 1, 15)));
    let mut term = Terminal::new(TestBackend::new(10, 3)).unwrap();
    term.draw(|f| draw(f, &a)).unwrap();
}

#[test]
fn selected_day_uses_option_colours() {
    let mut opts = PickerOptions::new(CalendarDate::new(2024, 1, 15));
    opts.selected_day_color      = Some("#ff0000".into());
    opts.selected_day_text_color = Some("#00ff00".into());
    let a = app(opts);

    let mut term = Terminal::new(TestBackend::new(60, 16)).unwrap();
    term.draw(|f| draw(f, &a)).unwrap();
    let buf   = term.backend().buffer().clone();
    let cells = buf.content();

    let at = (1..cells.len() - 2)
        .find(|&i| cells[i].symbol() == "1" && cells[i + 1].symbol() == "5")
        .expect("day 15 on screen");
    for cell in &cells[at - 1..at + 3] {
        assert_eq!(cell.bg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.fg, Color::Rgb(0, 255, 0));
    }
}
