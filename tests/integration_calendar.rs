use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use tuido::calendar::{CalendarOutcome, CalendarState, Clock};
use tuido::components::CalendarOverlay;

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap())
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn a_full_year_of_grids_stays_well_formed() {
    let clock = clock();
    let mut state = CalendarState::new(Some("2024-01-15"), &clock);
    for _ in 0..12 {
        let grid = state.grid();
        assert!((4..=6).contains(&grid.rows()));
        let (_, month) = state.display();
        let enabled = grid.cells().iter().filter(|c| c.enabled).count();
        // every day of the display month appears exactly once
        let expected = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 29, // 2024 is a leap year
            _ => unreachable!(),
        };
        assert_eq!(enabled, expected);
        state.next_month();
    }
    assert_eq!(state.display(), (2025, 1));
}

#[test]
fn navigation_never_touches_the_selection() {
    let clock = clock();
    let mut state = CalendarState::new(Some("2024-03-05"), &clock);
    for _ in 0..18 {
        state.prev_month();
    }
    for _ in 0..40 {
        state.next_month();
    }
    // back to March 2024 and the selected day is still highlighted
    for _ in 0..22 {
        state.prev_month();
    }
    assert_eq!(state.display(), (2024, 3));
    let selected: Vec<_> = state
        .grid()
        .cells()
        .iter()
        .filter(|c| c.is_selected)
        .map(|c| c.day)
        .collect();
    assert_eq!(selected, vec![5]);
}

#[test]
fn picker_session_resolves_exactly_once() {
    let mut overlay = CalendarOverlay::new();
    overlay.open(Some("2023-11-02"), &clock());

    // wander around first
    assert_eq!(overlay.handle_event(&key(KeyCode::Left)), None);
    assert_eq!(overlay.handle_event(&key(KeyCode::Right)), None);
    assert_eq!(overlay.handle_event(&key(KeyCode::Right)), None);

    let outcome = overlay.handle_event(&key(KeyCode::Char('t')));
    assert_eq!(
        outcome,
        Some(CalendarOutcome::Selected("2024-03-14".to_string()))
    );
    assert!(!overlay.visible());
    assert_eq!(overlay.handle_event(&key(KeyCode::Esc)), None);
}

#[test]
fn dismissal_leaves_no_selection_behind() {
    let mut overlay = CalendarOverlay::new();
    overlay.open(None, &clock());
    let outcome = overlay.handle_event(&key(KeyCode::Esc));
    assert_eq!(outcome, Some(CalendarOutcome::Dismissed));
}
