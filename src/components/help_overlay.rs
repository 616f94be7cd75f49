//! Keybinding reference overlay; any key or click closes it.

use crossterm::event::{Event, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Clear;

use crate::keybindings::{Action, KeyBindings};
use crate::theme::Palette;
use crate::ui::safe_set_string;

use super::centered_rect;

const LISTED_ACTIONS: &[Action] = &[
    Action::SubmitTask,
    Action::FocusNextField,
    Action::OpenCalendar,
    Action::SelectUp,
    Action::SelectDown,
    Action::ToggleSelected,
    Action::EditSelected,
    Action::DeleteSelected,
    Action::DeleteCompleted,
    Action::ToggleTheme,
    Action::ToggleHelp,
    Action::Quit,
];

#[derive(Debug, Default)]
pub struct HelpOverlay {
    visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Consumes the event while visible; any key press or click closes.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if !self.visible {
            return false;
        }
        match event {
            Event::Key(_) => {
                self.visible = false;
                true
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                self.visible = false;
                true
            }
            Event::Mouse(_) => true,
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, bindings: &KeyBindings) {
        if !self.visible {
            return;
        }
        let height = LISTED_ACTIONS.len() as u16 + 4;
        let rect = centered_rect(area, 48, height);
        if rect.width < 24 || rect.height < height {
            return;
        }
        frame.render_widget(Clear, rect);
        let buffer = frame.buffer_mut();
        let body_style = Style::default().bg(palette.card).fg(palette.text);
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_style(body_style);
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

        safe_set_string(
            buffer,
            rect,
            rect.x + 2,
            rect.y,
            " Keyboard Shortcuts ",
            Style::default()
                .bg(palette.card)
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        );

        let inner = Rect {
            x: rect.x + 2,
            y: rect.y + 1,
            width: rect.width - 4,
            height: rect.height - 2,
        };
        let combo_style = Style::default().bg(palette.card).fg(palette.primary);
        for (i, action) in LISTED_ACTIONS.iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            let combo = bindings
                .first_combo(*action)
                .map(|c| c.display())
                .unwrap_or_default();
            safe_set_string(buffer, inner, inner.x, y, &combo, combo_style);
            safe_set_string(
                buffer,
                inner,
                inner.x + 14,
                y,
                &action.to_string(),
                body_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn any_key_closes_and_is_consumed() {
        let mut overlay = HelpOverlay::new();
        overlay.toggle();
        assert!(overlay.visible());
        let event = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(overlay.handle_event(&event));
        assert!(!overlay.visible());
        // Hidden overlay ignores events.
        assert!(!overlay.handle_event(&event));
    }
}
