//! Single-line text field with a character cursor.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme::Palette;
use crate::ui::safe_set_string;

#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Apply one key press; returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_index(self.cursor - 1);
                    self.value.remove(at);
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().bg(palette.card).fg(palette.text);
        let style = if focused {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            base
        };
        let buffer = frame.buffer_mut();
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.reset();
                cell.set_style(style);
            }
        }

        // Horizontal scroll keeps the cursor inside the field.
        let width = area.width as usize;
        let start = self.cursor.saturating_sub(width.saturating_sub(1));
        let window: String = self.value.chars().skip(start).take(width).collect();
        safe_set_string(buffer, area, area.x, area.y, &window, style);

        if focused {
            let cursor_col = area.x + (self.cursor - start) as u16;
            if cursor_col < area.x + area.width
                && let Some(cell) = buffer.cell_mut((cursor_col, area.y))
            {
                cell.set_style(style.add_modifier(Modifier::REVERSED));
            }
        }
    }
}
