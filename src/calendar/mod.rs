//! Month-grid date picker state, independent of any rendering surface.
//!
//! The grid walk mirrors the classic desktop picker: cells before the 1st
//! show the tail of the previous month and cells after the last day show the
//! head of the next month, both disabled. Weeks start on Sunday.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub const DATE_FMT: &str = "%Y-%m-%d";

/// Source of "today", injectable so grid construction is deterministic under
/// test.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by the running app.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// One of the 7×rows grid positions. Derived on every rebuild, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub enabled: bool,
}

/// A fully built month grid in row-major order, always `rows * 7` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> usize {
        self.cells.len() / 7
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&DayCell> {
        self.cells.get(row * 7 + col)
    }
}

/// Terminal state of a picker session: either a selected `YYYY-MM-DD` string
/// or a dismissal. A session produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarOutcome {
    Selected(String),
    Dismissed,
}

/// The picker's navigable view: which month is rendered, which date is
/// selected, and what "today" was when the session opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    display_year: i32,
    display_month: u32,
    selected: NaiveDate,
    today: NaiveDate,
}

impl CalendarState {
    /// Open on the month of `initial`, falling back silently to today when
    /// the string is absent or does not parse as `YYYY-MM-DD`.
    pub fn new(initial: Option<&str>, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let selected = initial
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| match NaiveDate::parse_from_str(s, DATE_FMT) {
                Ok(date) => Some(date),
                Err(_) => {
                    debug!(input = s, "unparseable initial date, using today");
                    None
                }
            })
            .unwrap_or(today);
        Self {
            display_year: selected.year(),
            display_month: selected.month(),
            selected,
            today,
        }
    }

    pub fn display(&self) -> (i32, u32) {
        (self.display_year, self.display_month)
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Header label for the displayed month, e.g. `March 2024`.
    pub fn title(&self) -> String {
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        format!(
            "{} {}",
            MONTHS[(self.display_month - 1) as usize],
            self.display_year
        )
    }

    /// Step back one month, rolling the year at January. Never touches the
    /// selected date.
    pub fn prev_month(&mut self) {
        if self.display_month == 1 {
            self.display_month = 12;
            self.display_year -= 1;
        } else {
            self.display_month -= 1;
        }
    }

    /// Step forward one month, rolling the year at December.
    pub fn next_month(&mut self) {
        if self.display_month == 12 {
            self.display_month = 1;
            self.display_year += 1;
        } else {
            self.display_month += 1;
        }
    }

    pub fn grid(&self) -> MonthGrid {
        build_grid(
            self.display_year,
            self.display_month,
            self.today,
            self.selected,
        )
    }

    /// Formatted date for an enabled day of the displayed month.
    pub fn format_day(&self, day: u32) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.display_year, self.display_month, day
        )
    }

    /// Formatted real current date, regardless of the displayed month.
    pub fn today_string(&self) -> String {
        self.today.format(DATE_FMT).to_string()
    }
}

/// Day-of-week of the 1st of the month, remapped so Sunday = 0.
fn first_weekday_sun0(year: i32, month: u32) -> u32 {
    // chrono numbers weekdays Monday = 0.
    let mon0 = first_of_month(year, month).weekday().num_days_from_monday();
    (mon0 + 1) % 7
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Month is kept in 1..=12 by the navigation ops.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// Number of days in the month, via the first day of the following month
/// minus one day.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month)
        .pred_opt()
        .map(|d| d.day())
        .unwrap_or(31)
}

fn days_in_prev_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .pred_opt()
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Build the full grid for `(year, month)`.
///
/// Walks a virtual day counter starting at `1 - first_weekday`; positions
/// outside `1..=days_in_month` spill into the adjacent months as disabled
/// cells.
pub fn build_grid(year: i32, month: u32, today: NaiveDate, selected: NaiveDate) -> MonthGrid {
    let first_weekday = first_weekday_sun0(year, month);
    let in_month = days_in_month(year, month);
    let in_prev = days_in_prev_month(year, month);

    let total = first_weekday + in_month;
    let rows = total.div_ceil(7) as usize;

    let mut cells = Vec::with_capacity(rows * 7);
    let mut counter = 1 - first_weekday as i32;
    for _ in 0..rows * 7 {
        let cell = if counter < 1 {
            DayCell {
                day: (in_prev as i32 + counter) as u32,
                in_month: false,
                is_today: false,
                is_selected: false,
                enabled: false,
            }
        } else if counter > in_month as i32 {
            DayCell {
                day: (counter - in_month as i32) as u32,
                in_month: false,
                is_today: false,
                is_selected: false,
                enabled: false,
            }
        } else {
            let day = counter as u32;
            DayCell {
                day,
                in_month: true,
                is_today: today.year() == year && today.month() == month && today.day() == day,
                is_selected: selected.year() == year
                    && selected.month() == month
                    && selected.day() == day,
                enabled: true,
            }
        };
        cells.push(cell);
        counter += 1;
    }
    MonthGrid { cells }
}
