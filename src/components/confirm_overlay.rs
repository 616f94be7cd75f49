//! Centered confirm/cancel dialog.

use crossterm::event::{Event, KeyEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Clear;

use crate::keybindings::{Action, KeyBindings};
use crate::theme::Palette;
use crate::ui::{rect_contains, safe_set_string};

use super::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Confirm,
    Cancel,
}

#[derive(Debug, Default)]
pub struct ConfirmOverlay {
    title: String,
    body: String,
    confirm_label: String,
    visible: bool,
    /// Which button Enter activates; starts on Cancel so a stray Enter
    /// never destroys anything.
    confirm_focused: bool,
    dialog: Rect,
    confirm_button: Rect,
    cancel_button: Rect,
}

impl ConfirmOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        confirm_label: impl Into<String>,
    ) {
        self.title = title.into();
        self.body = body.into();
        self.confirm_label = confirm_label.into();
        self.visible = true;
        self.confirm_focused = false;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    fn close(&mut self) {
        self.visible = false;
    }

    fn resolve(&mut self, action: ConfirmAction) -> Option<ConfirmAction> {
        self.close();
        Some(action)
    }

    pub fn handle_key(&mut self, key: &KeyEvent, bindings: &KeyBindings) -> Option<ConfirmAction> {
        if !self.visible {
            return None;
        }
        if bindings.matches(Action::ConfirmCancel, key) {
            return self.resolve(ConfirmAction::Cancel);
        }
        if bindings.matches(Action::ConfirmAccept, key) {
            let action = if self.confirm_focused {
                ConfirmAction::Confirm
            } else {
                ConfirmAction::Cancel
            };
            return self.resolve(action);
        }
        if bindings.matches(Action::ConfirmToggle, key)
            || bindings.matches(Action::ConfirmLeft, key)
            || bindings.matches(Action::ConfirmRight, key)
        {
            self.confirm_focused = !self.confirm_focused;
        }
        None
    }

    pub fn handle_event(&mut self, event: &Event, bindings: &KeyBindings) -> Option<ConfirmAction> {
        if !self.visible {
            return None;
        }
        match event {
            Event::Key(key) => self.handle_key(key, bindings),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                if rect_contains(self.confirm_button, mouse.column, mouse.row) {
                    return self.resolve(ConfirmAction::Confirm);
                }
                if rect_contains(self.cancel_button, mouse.column, mouse.row) {
                    return self.resolve(ConfirmAction::Cancel);
                }
                if !rect_contains(self.dialog, mouse.column, mouse.row) {
                    return self.resolve(ConfirmAction::Cancel);
                }
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }
        let width = (self.body.chars().count() as u16 + 6)
            .max(self.title.len() as u16 + 6)
            .max(34)
            .min(area.width);
        let rect = centered_rect(area, width, 7);
        self.dialog = rect;
        if rect.width < 20 || rect.height < 7 {
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

        let border = Style::default().bg(palette.card).fg(palette.danger);
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
        safe_set_string(
            buffer,
            rect,
            rect.x + 2,
            rect.y,
            &format!(" {} ", self.title),
            Style::default()
                .bg(palette.card)
                .fg(palette.danger)
                .add_modifier(Modifier::BOLD),
        );
        safe_set_string(buffer, inner, inner.x + 1, inner.y + 1, &self.body, body_style);

        let confirm_text = format!("[ {} ]", self.confirm_label);
        let cancel_text = "[ Cancel ]";
        let buttons_y = inner.y + inner.height - 1;
        let total = confirm_text.len() as u16 + 2 + cancel_text.len() as u16;
        let start = inner.x + inner.width.saturating_sub(total) / 2;
        self.confirm_button = Rect::new(start, buttons_y, confirm_text.len() as u16, 1);
        self.cancel_button = Rect::new(
            start + confirm_text.len() as u16 + 2,
            buttons_y,
            cancel_text.len() as u16,
            1,
        );

        let focused = Style::default()
            .bg(palette.danger)
            .fg(palette.card)
            .add_modifier(Modifier::BOLD);
        let idle = Style::default().bg(palette.card).fg(palette.text_light);
        let (confirm_style, cancel_style) = if self.confirm_focused {
            (focused, idle)
        } else {
            (idle, Style::default().bg(palette.border).fg(palette.text))
        };
        safe_set_string(
            buffer,
            inner,
            self.confirm_button.x,
            buttons_y,
            &confirm_text,
            confirm_style,
        );
        safe_set_string(
            buffer,
            inner,
            self.cancel_button.x,
            buttons_y,
            cancel_text,
            cancel_style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_on_default_focus_cancels() {
        let mut overlay = ConfirmOverlay::new();
        let bindings = KeyBindings::default();
        overlay.open("Delete task", "Delete \"milk\"?", "Delete");
        let out = overlay.handle_key(&key(KeyCode::Enter), &bindings);
        assert_eq!(out, Some(ConfirmAction::Cancel));
        assert!(!overlay.visible());
    }

    #[test]
    fn tab_then_enter_confirms() {
        let mut overlay = ConfirmOverlay::new();
        let bindings = KeyBindings::default();
        overlay.open("Quit", "Quit the app?", "Quit");
        assert_eq!(overlay.handle_key(&key(KeyCode::Tab), &bindings), None);
        let out = overlay.handle_key(&key(KeyCode::Enter), &bindings);
        assert_eq!(out, Some(ConfirmAction::Confirm));
    }

    #[test]
    fn escape_always_cancels() {
        let mut overlay = ConfirmOverlay::new();
        let bindings = KeyBindings::default();
        overlay.open("Quit", "Quit the app?", "Quit");
        overlay.handle_key(&key(KeyCode::Tab), &bindings);
        let out = overlay.handle_key(&key(KeyCode::Esc), &bindings);
        assert_eq!(out, Some(ConfirmAction::Cancel));
    }

    #[test]
    fn reopening_resets_focus_to_cancel() {
        let mut overlay = ConfirmOverlay::new();
        let bindings = KeyBindings::default();
        overlay.open("Quit", "Quit the app?", "Quit");
        overlay.handle_key(&key(KeyCode::Tab), &bindings);
        overlay.handle_key(&key(KeyCode::Esc), &bindings);
        overlay.open("Quit", "Quit the app?", "Quit");
        let out = overlay.handle_key(&key(KeyCode::Enter), &bindings);
        assert_eq!(out, Some(ConfirmAction::Cancel));
    }
}
