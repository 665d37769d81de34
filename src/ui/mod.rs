use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::calendar::{CalendarDate, Grid, GridCell, GRID_COLS, GRID_ROWS};
use crate::picker::CalendarPicker;

/// Width of one day cell, e.g. ` 15 `.
const CELL_W: u16 = 4;
/// Inner width of the calendar: seven cells.
const GRID_W: u16 = CELL_W * GRID_COLS as u16;
/// Header controls, weekday labels, separator, week rows.
const GRID_H: u16 = 3 + GRID_ROWS as u16;

// ─── Root draw ────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let t    = &app.palette;

    f.render_widget(
        Block::default().style(Style::default().bg(t.bg()).fg(t.fg())),
        area,
    );

    // Layout: [ calendar | status_bar(1) ]
    let root = Layout::default().direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)]).split(area);

    draw_calendar(f, app, centered_fixed(GRID_W + 2, GRID_H + 2, root[0]));
    draw_statusbar(f, app, root[1]);
}

// ─── Calendar ─────────────────────────────────────────────────────────────────

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let t      = &app.palette;
    let picker = &app.picker;

    let title = Line::from(Span::styled(
        format!(" {} ", picker.month_label()),
        Style::default().fg(t.accent()).add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .title(Title::from(title).alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(t.border_active()))
        .style(Style::default().bg(t.bg()));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default().direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)]).split(inner);

    draw_header_controls(f, app, rows[0]);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(
        picker.weekday_labels().iter().enumerate().map(|(col, label)| {
            let fg = if is_weekend_column(col, picker) { t.weekend_color() } else { t.fg_dim() };
            Span::styled(fit_label(label), Style::default().fg(fg).add_modifier(Modifier::BOLD))
        }).collect::<Vec<_>>(),
    ));
    lines.push(Line::from(Span::styled(
        "─".repeat(inner.width as usize),
        Style::default().fg(t.border()),
    )));

    let today = CalendarDate::today();
    let view  = picker.view();
    let grid  = picker.grid();

    for row in grid.rows() {
        let spans: Vec<Span> = row.iter().enumerate().map(|(col, cell)| {
            let GridCell::Day { day, selected } = *cell else {
                return Span::raw("    ");
            };
            let label = format!(" {:2} ", day);

            let style = if selected {
                let (bg, fg) = t.selected_highlight();
                Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
            } else if day == app.cursor {
                let (bg, fg) = t.cursor_highlight();
                Style::default().bg(bg).fg(fg)
            } else if today == CalendarDate::new(view.year, view.month, day) {
                Style::default().fg(t.today()).add_modifier(Modifier::BOLD)
            } else if is_weekend_column(col, picker) {
                Style::default().fg(t.weekend_color())
            } else {
                Style::default().fg(t.fg())
            };
            let style = if selected && day == app.cursor {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            Span::styled(label, style)
        }).collect();

        lines.push(Line::from(spans));
    }

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(t.bg())).alignment(Alignment::Left),
        rows[1],
    );
}

/// Previous / next controls on either side of the first inner row.
fn draw_header_controls(f: &mut Frame, app: &App, area: Rect) {
    let t      = &app.palette;
    let picker = &app.picker;
    let nav    = Style::default().fg(t.accent());
    let half   = (area.width / 2) as usize;

    let cols = Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(format!("‹ {}", truncate(picker.previous_title(), half.saturating_sub(2))), nav)),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(format!("{} ›", truncate(picker.next_title(), half.saturating_sub(2))), nav))
            .alignment(Alignment::Right),
        cols[1],
    );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.palette;
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.status),
            Style::default().fg(t.accent()).add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            " ←↓↑→:move  Enter:pick  [/]:month  t:today  q:done  Esc:cancel",
            Style::default().fg(t.fg_dim()),
        ),
    ])).style(Style::default().bg(t.bg2()));
    f.render_widget(bar, area);
}

// ─── Plain text ───────────────────────────────────────────────────────────────

/// The picker's current month as plain text. The selected day is bracketed.
pub fn plain_lines(picker: &CalendarPicker) -> Vec<String> {
    plain_month(&picker.month_label(), &picker.weekday_labels(), &picker.grid())
}

pub fn plain_month(label: &str, weekdays: &[String], grid: &Grid) -> Vec<String> {
    let width = GRID_W as usize;
    let mut out = vec![
        format!("{label:^width$}").trim_end().to_owned(),
        weekdays.iter().map(|l| fit_label(l)).collect::<String>().trim_end().to_owned(),
    ];
    for row in grid.rows() {
        let line: String = row.iter().map(|cell| match *cell {
            GridCell::Empty                        => "    ".to_owned(),
            GridCell::Day { day, selected: true }  => format!("[{:2}]", day),
            GridCell::Day { day, selected: false } => format!(" {:2} ", day),
        }).collect();
        out.push(line.trim_end().to_owned());
    }
    out
}

// ─── Utilities ────────────────────────────────────────────────────────────────

fn is_weekend_column(col: usize, picker: &CalendarPicker) -> bool {
    let from_sunday = if picker.options().start_from_monday { (col + 1) % 7 } else { col };
    from_sunday == 0 || from_sunday == 6
}

/// One cell's worth of label, cut to three characters and aligned with the
/// day numbers below it.
fn fit_label(label: &str) -> String {
    format!(" {:<3}", truncate(label, 3))
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn centered_fixed(w: u16, h: u16, r: Rect) -> Rect {
    let w = w.min(r.width);
    let h = h.min(r.height);
    Rect {
        x: r.x + (r.width - w) / 2,
        y: r.y + (r.height - h) / 2,
        width: w,
        height: h,
    }
}
