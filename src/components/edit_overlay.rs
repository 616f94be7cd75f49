//! Modal editor for an existing task's text and due date.

use crossterm::event::{Event, KeyCode, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Clear;

use crate::tasks::{Task, validate_due_date};
use crate::theme::Palette;
use crate::ui::{rect_contains, safe_set_string};

use super::centered_rect;
use super::input::TextField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Saved {
        id: u64,
        text: String,
        due_date: String,
    },
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditFocus {
    Text,
    Date,
}

#[derive(Debug, Default)]
pub struct EditOverlay {
    task_id: Option<u64>,
    text: TextField,
    date: TextField,
    focus: Option<EditFocus>,
    error: Option<String>,
    dialog: Rect,
    text_field: Rect,
    date_field: Rect,
    save_button: Rect,
    cancel_button: Rect,
}

impl EditOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, task: &Task) {
        self.task_id = Some(task.id);
        self.text.set_value(&task.text);
        self.date.set_value(&task.due_date);
        self.focus = Some(EditFocus::Text);
        self.error = None;
    }

    pub fn visible(&self) -> bool {
        self.task_id.is_some()
    }

    /// Current due-date text, for seeding the date picker.
    pub fn date_value(&self) -> &str {
        self.date.value()
    }

    /// Overwrite the due-date field, used when the picker resolves.
    pub fn set_date(&mut self, date: &str) {
        self.date.set_value(date);
        self.error = None;
    }

    /// Screen position of the date field, for anchoring the picker.
    pub fn date_field_origin(&self) -> (u16, u16) {
        (self.date_field.x, self.date_field.y + 1)
    }

    fn close(&mut self) {
        self.task_id = None;
        self.text.clear();
        self.date.clear();
        self.error = None;
    }

    fn try_save(&mut self) -> Option<EditOutcome> {
        let id = self.task_id?;
        let text = self.text.value().trim().to_string();
        let due_date = self.date.value().trim().to_string();
        if text.is_empty() {
            self.error = Some("Task description cannot be empty".to_string());
            return None;
        }
        if validate_due_date(&due_date).is_err() {
            self.error = Some("Due date must be YYYY-MM-DD".to_string());
            return None;
        }
        self.close();
        Some(EditOutcome::Saved { id, text, due_date })
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<EditOutcome> {
        if !self.visible() {
            return None;
        }
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => {
                    self.close();
                    Some(EditOutcome::Cancelled)
                }
                KeyCode::Enter => self.try_save(),
                KeyCode::Tab => {
                    self.focus = Some(match self.focus {
                        Some(EditFocus::Text) => EditFocus::Date,
                        _ => EditFocus::Text,
                    });
                    None
                }
                _ => {
                    let consumed = match self.focus {
                        Some(EditFocus::Text) => self.text.handle_key(key),
                        Some(EditFocus::Date) => self.date.handle_key(key),
                        None => false,
                    };
                    if consumed {
                        self.error = None;
                    }
                    None
                }
            },
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                let at = (mouse.column, mouse.row);
                if rect_contains(self.save_button, at.0, at.1) {
                    return self.try_save();
                }
                if rect_contains(self.cancel_button, at.0, at.1) {
                    self.close();
                    return Some(EditOutcome::Cancelled);
                }
                if rect_contains(self.text_field, at.0, at.1) {
                    self.focus = Some(EditFocus::Text);
                } else if rect_contains(self.date_field, at.0, at.1) {
                    self.focus = Some(EditFocus::Date);
                } else if !rect_contains(self.dialog, at.0, at.1) {
                    self.close();
                    return Some(EditOutcome::Cancelled);
                }
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible() {
            return;
        }
        let rect = centered_rect(area, 46, 9);
        self.dialog = rect;
        if rect.width < 30 || rect.height < 9 {
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

        let border = Style::default().bg(palette.card).fg(palette.primary);
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
            " Edit Task ",
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
        let label_style = Style::default().bg(palette.card).fg(palette.text_light);
        safe_set_string(buffer, inner, inner.x, inner.y, "Task", label_style);
        self.text_field = Rect::new(inner.x + 6, inner.y, inner.width - 6, 1);
        safe_set_string(buffer, inner, inner.x, inner.y + 2, "Due", label_style);
        self.date_field = Rect::new(inner.x + 6, inner.y + 2, 12.min(inner.width - 6), 1);

        if let Some(error) = &self.error {
            safe_set_string(
                buffer,
                inner,
                inner.x,
                inner.y + 4,
                error,
                Style::default().bg(palette.card).fg(palette.danger),
            );
        }

        let save_text = "[ Save ]";
        let cancel_text = "[ Cancel ]";
        let buttons_y = inner.y + inner.height - 1;
        let total = save_text.len() as u16 + 2 + cancel_text.len() as u16;
        let start = inner.x + inner.width.saturating_sub(total) / 2;
        self.save_button = Rect::new(start, buttons_y, save_text.len() as u16, 1);
        self.cancel_button = Rect::new(
            start + save_text.len() as u16 + 2,
            buttons_y,
            cancel_text.len() as u16,
            1,
        );
        safe_set_string(
            buffer,
            inner,
            self.save_button.x,
            buttons_y,
            save_text,
            Style::default()
                .bg(palette.success)
                .fg(palette.card)
                .add_modifier(Modifier::BOLD),
        );
        safe_set_string(
            buffer,
            inner,
            self.cancel_button.x,
            buttons_y,
            cancel_text,
            Style::default().bg(palette.card).fg(palette.text_light),
        );

        let text_focused = self.focus == Some(EditFocus::Text);
        self.text
            .render(frame, self.text_field, palette, text_focused);
        self.date
            .render(frame, self.date_field, palette, !text_focused);
    }
}
