//! Scrollable task table with per-row status/edit/delete hit targets.

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::tasks::Task;
use crate::theme::Palette;
use crate::ui::{rect_contains, safe_set_string};

const ID_WIDTH: u16 = 4;
const DUE_WIDTH: u16 = 11;
const FLAG_WIDTH: u16 = 3;

/// Row-level interaction resolved from a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Select(u64),
    Toggle(u64),
    Edit(u64),
    Delete(u64),
}

#[derive(Debug, Clone, Copy)]
struct RowHit {
    id: u64,
    row: Rect,
    status: Rect,
    edit: Rect,
    delete: Rect,
}

#[derive(Debug, Default)]
pub struct TaskTable {
    selected: Option<usize>,
    offset: usize,
    hits: Vec<RowHit>,
    view_rows: usize,
}

impl TaskTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self, tasks: &[Task]) -> Option<u64> {
        self.selected.and_then(|idx| tasks.get(idx)).map(|t| t.id)
    }

    pub fn select_up(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    pub fn select_down(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    /// Drop the selection when it points past the end of the list.
    pub fn clamp_selection(&mut self, len: usize) {
        if let Some(idx) = self.selected
            && idx >= len
        {
            self.selected = len.checked_sub(1);
        }
        if self.offset >= len {
            self.offset = len.saturating_sub(1);
        }
    }

    fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        if idx < self.offset {
            self.offset = idx;
        } else if self.view_rows > 0 && idx >= self.offset + self.view_rows {
            self.offset = idx + 1 - self.view_rows;
        }
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent, len: usize) -> Option<TableAction> {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.offset = self.offset.saturating_sub(1);
                None
            }
            MouseEventKind::ScrollDown => {
                if self.offset + self.view_rows < len {
                    self.offset += 1;
                }
                None
            }
            MouseEventKind::Down(_) => {
                let hit = self
                    .hits
                    .iter()
                    .find(|h| rect_contains(h.row, mouse.column, mouse.row))
                    .copied()?;
                self.selected = self
                    .hits
                    .iter()
                    .position(|h| h.id == hit.id)
                    .map(|i| i + self.offset);
                if rect_contains(hit.status, mouse.column, mouse.row) {
                    Some(TableAction::Toggle(hit.id))
                } else if rect_contains(hit.edit, mouse.column, mouse.row) {
                    Some(TableAction::Edit(hit.id))
                } else if rect_contains(hit.delete, mouse.column, mouse.row) {
                    Some(TableAction::Delete(hit.id))
                } else {
                    Some(TableAction::Select(hit.id))
                }
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette, tasks: &[Task]) {
        self.hits.clear();
        if area.width < ID_WIDTH + DUE_WIDTH + 3 * FLAG_WIDTH + 4 || area.height < 2 {
            self.view_rows = 0;
            return;
        }
        self.view_rows = (area.height - 1) as usize;
        if self.offset > tasks.len().saturating_sub(1) {
            self.offset = tasks.len().saturating_sub(1);
        }

        let text_width = area.width - ID_WIDTH - DUE_WIDTH - 3 * FLAG_WIDTH;
        let x_id = area.x;
        let x_text = x_id + ID_WIDTH;
        let x_due = x_text + text_width;
        let x_status = x_due + DUE_WIDTH;
        let x_edit = x_status + FLAG_WIDTH;
        let x_delete = x_edit + FLAG_WIDTH;

        let buffer = frame.buffer_mut();
        let header_style = Style::default()
            .bg(palette.primary)
            .fg(palette.card)
            .add_modifier(Modifier::BOLD);
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.reset();
                cell.set_style(header_style);
            }
        }
        safe_set_string(buffer, area, x_id, area.y, "#", header_style);
        safe_set_string(buffer, area, x_text, area.y, "Task", header_style);
        safe_set_string(buffer, area, x_due, area.y, "Due", header_style);
        safe_set_string(buffer, area, x_status, area.y, " ✓", header_style);

        for (row_idx, task) in tasks
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.view_rows)
        {
            let y = area.y + 1 + (row_idx - self.offset) as u16;
            let selected = self.selected == Some(row_idx);
            let fg = if task.completed {
                palette.text_light
            } else {
                palette.text
            };
            let mut row_style = Style::default().bg(palette.card).fg(fg);
            if selected {
                row_style = row_style.bg(palette.border).add_modifier(Modifier::BOLD);
            }
            if task.completed {
                row_style = row_style.add_modifier(Modifier::CROSSED_OUT);
            }
            for x in area.x..area.x + area.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_style(row_style);
                }
            }

            safe_set_string(buffer, area, x_id, y, &task.id.to_string(), row_style);
            let text: String = task.text.chars().take(text_width as usize - 1).collect();
            safe_set_string(buffer, area, x_text, y, &text, row_style);
            let due = if task.due_date.is_empty() {
                "-"
            } else {
                &task.due_date
            };
            safe_set_string(buffer, area, x_due, y, due, row_style);

            let status = if task.completed { " ✓" } else { " ✗" };
            let status_style = Style::default()
                .bg(row_style.bg.unwrap_or(palette.card))
                .fg(if task.completed {
                    palette.success
                } else {
                    palette.warning
                });
            safe_set_string(buffer, area, x_status, y, status, status_style);
            safe_set_string(
                buffer,
                area,
                x_edit,
                y,
                " ✎",
                Style::default()
                    .bg(row_style.bg.unwrap_or(palette.card))
                    .fg(palette.primary),
            );
            safe_set_string(
                buffer,
                area,
                x_delete,
                y,
                " ✕",
                Style::default()
                    .bg(row_style.bg.unwrap_or(palette.card))
                    .fg(palette.danger),
            );

            self.hits.push(RowHit {
                id: task.id,
                row: Rect::new(area.x, y, area.width, 1),
                status: Rect::new(x_status, y, FLAG_WIDTH, 1),
                edit: Rect::new(x_edit, y, FLAG_WIDTH, 1),
                delete: Rect::new(x_delete, y, FLAG_WIDTH, 1),
            });
        }
    }
}
