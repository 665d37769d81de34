//! Picker behaviour through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use calpicker::calendar::{days_in_month, first_weekday_of_month, ViewMonth};
use calpicker::{CalendarDate, CalendarPicker, GridCell, PickerOptions};

type Log = Rc<RefCell<Vec<CalendarDate>>>;

fn open(opts: PickerOptions) -> (CalendarPicker, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let picker = CalendarPicker::new(opts)
        .unwrap()
        .with_on_date_change(move |d| sink.borrow_mut().push(d));
    (picker, log)
}

/// 2024-02-15 (a Thursday): tap 1, then page forward with movement silenced.
#[test]
fn tap_then_browse_february_2024() {
    let mut opts = PickerOptions::new(CalendarDate::new(2024, 1, 15));
    opts.dont_change_date_on_calendar_movement = true;
    let (mut picker, log) = open(opts);

    let grid = picker.grid();
    assert!(grid.cells().contains(&GridCell::Day { day: 15, selected: true }));

    let date = picker.select_day(1).unwrap();
    assert_eq!(date, CalendarDate::new(2024, 1, 1));
    assert_eq!(date.to_string(), "2024-02-01");

    let grid = picker.grid();
    assert!(grid.cells().contains(&GridCell::Day { day: 1, selected: true }));
    assert!(grid.cells().contains(&GridCell::Day { day: 15, selected: false }));
    assert_eq!(*log.borrow(), vec![CalendarDate::new(2024, 1, 1)]);

    picker.next_month();
    assert_eq!(picker.view(), ViewMonth { month: 2, year: 2024 });
    assert_eq!(picker.month_label(), "March 2024");
    assert_eq!(log.borrow().len(), 1, "browsing must stay silent");
}

#[test]
fn browsing_notifies_by_default() {
    let (mut picker, log) = open(PickerOptions::new(CalendarDate::new(2024, 11, 10)));
    picker.next_month();
    picker.previous_month();
    picker.previous_month();
    assert_eq!(*log.borrow(), vec![
        CalendarDate::new(2025, 0, 10),
        CalendarDate::new(2024, 11, 10),
        CalendarDate::new(2024, 10, 10),
    ]);
}

#[test]
fn grid_shape_for_every_month_of_a_leap_cycle() {
    for year in 2096..=2104 {
        for month in 0..12 {
            for monday in [false, true] {
                let mut opts = PickerOptions::new(CalendarDate::new(year, month, 1));
                opts.start_from_monday = monday;
                let (picker, _) = open(opts);
                let cells = picker.grid().cells().to_vec();
                assert_eq!(cells.len(), 42);

                let lead = first_weekday_of_month(month, year, monday) as usize;
                let days: Vec<u32> = cells.iter().filter_map(|c| c.day()).collect();
                assert_eq!(days, (1..=days_in_month(month, year)).collect::<Vec<_>>());
                assert_eq!(cells.iter().position(|c| c.day().is_some()), Some(lead));
            }
        }
    }
}

#[test]
fn selection_follows_navigation() {
    let (mut picker, _) = open(PickerOptions::new(CalendarDate::new(2023, 2, 31)));
    picker.previous_month();
    assert_eq!(picker.selected_day(), Some(28));
    let selected: Vec<_> = picker.grid().cells().iter().filter(|c| c.is_selected()).copied().collect();
    assert_eq!(selected, vec![GridCell::Day { day: 28, selected: true }]);
}

#[test]
fn month_listener_sees_year_rollover() {
    let (mut picker, _) = open(PickerOptions::new(CalendarDate::new(2024, 0, 5)));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    picker.on_month_change(move |v| sink.borrow_mut().push(v));

    picker.previous_month();
    picker.next_month();
    assert_eq!(*seen.borrow(), vec![
        ViewMonth { month: 11, year: 2023 },
        ViewMonth { month: 0,  year: 2024 },
    ]);
}
