//! Modal month-grid date picker.
//!
//! While visible the overlay owns every input event; it resolves to exactly
//! zero or one [`CalendarOutcome`] before closing. The invoker positions the
//! dialog origin after opening it.

use crossterm::event::{Event, KeyCode, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Clear;

use crate::calendar::{CalendarOutcome, CalendarState, Clock, DayCell};
use crate::theme::Palette;
use crate::ui::{rect_contains, safe_set_string};

use super::anchored_rect;

const CELL_WIDTH: u16 = 4;
const GRID_WIDTH: u16 = 7 * CELL_WIDTH;

#[derive(Debug, Default)]
pub struct CalendarOverlay {
    state: Option<CalendarState>,
    origin: (u16, u16),
    dialog: Rect,
    prev_button: Rect,
    next_button: Rect,
    today_button: Rect,
    day_cells: Vec<(Rect, DayCell)>,
}

impl CalendarOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on the month of `initial` (falling back to today) with no
    /// selection made yet.
    pub fn open(&mut self, initial: Option<&str>, clock: &dyn Clock) {
        self.state = Some(CalendarState::new(initial, clock));
        self.day_cells.clear();
    }

    /// Place the dialog's top-left corner; called by the invoker after
    /// `open`. Clamped to the render area at draw time.
    pub fn set_origin(&mut self, x: u16, y: u16) {
        self.origin = (x, y);
    }

    pub fn visible(&self) -> bool {
        self.state.is_some()
    }

    fn close(&mut self) {
        self.state = None;
        self.day_cells.clear();
    }

    /// Route one event. Returns `Some` exactly when the session terminates.
    pub fn handle_event(&mut self, event: &Event) -> Option<CalendarOutcome> {
        let state = self.state.as_mut()?;
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => {
                    self.close();
                    Some(CalendarOutcome::Dismissed)
                }
                KeyCode::Left => {
                    state.prev_month();
                    None
                }
                KeyCode::Right => {
                    state.next_month();
                    None
                }
                KeyCode::Char('t') => {
                    let today = state.today_string();
                    self.close();
                    Some(CalendarOutcome::Selected(today))
                }
                _ => None,
            },
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                let at = (mouse.column, mouse.row);
                if !rect_contains(self.dialog, at.0, at.1) {
                    // Clicking the invoker's surface dismisses, matching a
                    // window-close on a desktop picker.
                    self.close();
                    return Some(CalendarOutcome::Dismissed);
                }
                if rect_contains(self.prev_button, at.0, at.1) {
                    state.prev_month();
                    return None;
                }
                if rect_contains(self.next_button, at.0, at.1) {
                    state.next_month();
                    return None;
                }
                if rect_contains(self.today_button, at.0, at.1) {
                    let today = state.today_string();
                    self.close();
                    return Some(CalendarOutcome::Selected(today));
                }
                let hit = self
                    .day_cells
                    .iter()
                    .find(|(rect, cell)| cell.enabled && rect_contains(*rect, at.0, at.1))
                    .map(|(_, cell)| cell.day);
                if let Some(day) = hit {
                    let date = state.format_day(day);
                    self.close();
                    return Some(CalendarOutcome::Selected(date));
                }
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        let grid = state.grid();
        let rows = grid.rows() as u16;
        // border + title + weekday header + grid + today row + border
        let height = rows + 6;
        let width = GRID_WIDTH + 2;
        let rect = anchored_rect(area, self.origin.0, self.origin.1, width, height);
        self.dialog = rect;
        self.day_cells.clear();
        if rect.width < width || rect.height < height {
            // Terminal too small for the full grid; skip the frame.
            return;
        }

        frame.render_widget(Clear, rect);
        let buffer = frame.buffer_mut();
        let body = Style::default().bg(palette.card).fg(palette.text);
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_style(body);
                }
            }
        }

        let border = Style::default().bg(palette.card).fg(palette.border);
        for x in rect.x..rect.x + rect.width {
            for y in [rect.y, rect.y + rect.height - 1] {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol("─");
                    cell.set_style(border);
                }
            }
        }
        for y in rect.y..rect.y + rect.height {
            for x in [rect.x, rect.x + rect.width - 1] {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol("│");
                    cell.set_style(border);
                }
            }
        }
        for (x, y, sym) in [
            (rect.x, rect.y, "┌"),
            (rect.x + rect.width - 1, rect.y, "┐"),
            (rect.x, rect.y + rect.height - 1, "└"),
            (rect.x + rect.width - 1, rect.y + rect.height - 1, "┘"),
        ] {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(sym);
                cell.set_style(border);
            }
        }

        let inner = Rect {
            x: rect.x + 1,
            y: rect.y + 1,
            width: rect.width - 2,
            height: rect.height - 2,
        };

        // Title row: month navigation and label.
        let nav_style = Style::default().bg(palette.card).fg(palette.primary);
        self.prev_button = Rect::new(inner.x, inner.y, 3, 1);
        self.next_button = Rect::new(inner.x + inner.width - 3, inner.y, 3, 1);
        safe_set_string(buffer, inner, self.prev_button.x, inner.y, "[<]", nav_style);
        safe_set_string(buffer, inner, self.next_button.x, inner.y, "[>]", nav_style);
        let title = state.title();
        let title_x = inner.x + (inner.width.saturating_sub(title.len() as u16)) / 2;
        safe_set_string(
            buffer,
            inner,
            title_x,
            inner.y,
            &title,
            nav_style.add_modifier(Modifier::BOLD),
        );

        // Weekday header, Sunday first.
        let header_y = inner.y + 1;
        let header_style = Style::default().bg(palette.card).fg(palette.text_light);
        for (i, name) in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"].iter().enumerate() {
            let x = inner.x + i as u16 * CELL_WIDTH;
            safe_set_string(buffer, inner, x + 1, header_y, name, header_style);
        }

        for (idx, cell) in grid.cells().iter().enumerate() {
            let row = (idx / 7) as u16;
            let col = (idx % 7) as u16;
            let x = inner.x + col * CELL_WIDTH;
            let y = header_y + 1 + row;
            let cell_rect = Rect::new(x, y, CELL_WIDTH, 1);

            let mut style = Style::default().bg(palette.card).fg(palette.text);
            if !cell.enabled {
                style = style.fg(palette.text_light).add_modifier(Modifier::DIM);
            }
            if cell.is_selected {
                style = Style::default().bg(palette.primary).fg(palette.card);
            }
            if cell.is_today {
                style = Style::default()
                    .bg(palette.success)
                    .fg(palette.card)
                    .add_modifier(Modifier::BOLD);
            }
            let label = format!("{:>3} ", cell.day);
            safe_set_string(buffer, inner, x, y, &label, style);
            self.day_cells.push((cell_rect, *cell));
        }

        // Today shortcut, bottom-right like the desktop picker.
        let today_label = "[ Today ]";
        let today_y = inner.y + inner.height - 1;
        let today_x = inner.x + inner.width - today_label.len() as u16;
        self.today_button = Rect::new(today_x, today_y, today_label.len() as u16, 1);
        safe_set_string(
            buffer,
            inner,
            today_x,
            today_y,
            today_label,
            Style::default().bg(palette.card).fg(palette.success),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent};

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

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn escape_dismisses_without_selection() {
        let mut overlay = CalendarOverlay::new();
        overlay.open(Some("2024-03-01"), &clock());
        assert!(overlay.visible());
        let outcome = overlay.handle_event(&key(KeyCode::Esc));
        assert_eq!(outcome, Some(CalendarOutcome::Dismissed));
        assert!(!overlay.visible());
    }

    #[test]
    fn arrow_keys_navigate_without_closing() {
        let mut overlay = CalendarOverlay::new();
        overlay.open(Some("2024-01-10"), &clock());
        assert_eq!(overlay.handle_event(&key(KeyCode::Left)), None);
        assert_eq!(overlay.state.as_ref().unwrap().display(), (2023, 12));
        assert_eq!(overlay.handle_event(&key(KeyCode::Right)), None);
        assert_eq!(overlay.state.as_ref().unwrap().display(), (2024, 1));
        assert!(overlay.visible());
    }

    #[test]
    fn today_key_selects_real_date_from_any_month() {
        let mut overlay = CalendarOverlay::new();
        overlay.open(Some("1999-01-10"), &clock());
        let outcome = overlay.handle_event(&key(KeyCode::Char('t')));
        assert_eq!(
            outcome,
            Some(CalendarOutcome::Selected("2024-03-14".into()))
        );
        assert!(!overlay.visible());
    }

    #[test]
    fn clicking_an_enabled_cell_selects_it() {
        let mut overlay = CalendarOverlay::new();
        overlay.open(Some("2024-03-01"), &clock());
        overlay.dialog = Rect::new(0, 0, 30, 12);
        overlay.day_cells = vec![
            (
                Rect::new(1, 3, 4, 1),
                DayCell {
                    day: 25,
                    in_month: false,
                    is_today: false,
                    is_selected: false,
                    enabled: false,
                },
            ),
            (
                Rect::new(5, 3, 4, 1),
                DayCell {
                    day: 5,
                    in_month: true,
                    is_today: false,
                    is_selected: false,
                    enabled: true,
                },
            ),
        ];
        // Disabled spill cell: no outcome, stays open.
        assert_eq!(overlay.handle_event(&click(2, 3)), None);
        assert!(overlay.visible());
        // Enabled cell resolves the session.
        assert_eq!(
            overlay.handle_event(&click(6, 3)),
            Some(CalendarOutcome::Selected("2024-03-05".into()))
        );
        assert!(!overlay.visible());
    }

    #[test]
    fn clicking_outside_the_dialog_dismisses() {
        let mut overlay = CalendarOverlay::new();
        overlay.open(None, &clock());
        overlay.dialog = Rect::new(10, 5, 30, 12);
        assert_eq!(
            overlay.handle_event(&click(2, 2)),
            Some(CalendarOutcome::Dismissed)
        );
    }

    #[test]
    fn produces_at_most_one_outcome() {
        let mut overlay = CalendarOverlay::new();
        overlay.open(None, &clock());
        assert!(overlay.handle_event(&key(KeyCode::Char('t'))).is_some());
        // Closed: further events produce nothing.
        assert_eq!(overlay.handle_event(&key(KeyCode::Char('t'))), None);
        assert_eq!(overlay.handle_event(&key(KeyCode::Esc)), None);
    }
}
