use ratatui::layout::Rect;

pub mod calendar_overlay;
pub mod confirm_overlay;
pub mod edit_overlay;
pub mod help_overlay;
pub mod input;
pub mod task_table;

pub use calendar_overlay::CalendarOverlay;
pub use confirm_overlay::{ConfirmAction, ConfirmOverlay};
pub use edit_overlay::{EditOutcome, EditOverlay};
pub use help_overlay::HelpOverlay;
pub use input::TextField;
pub use task_table::{TableAction, TaskTable};

/// Center a preferred size inside `area`, clamping to what fits.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width).max(1);
    let height = height.min(area.height).max(1);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Clamp a preferred rect at `(x, y)` so it stays inside `area`.
pub fn anchored_rect(area: Rect, x: u16, y: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width).max(1);
    let height = height.min(area.height).max(1);
    let max_x = area.x + area.width.saturating_sub(width);
    let max_y = area.y + area.height.saturating_sub(height);
    Rect {
        x: x.min(max_x).max(area.x),
        y: y.min(max_y).max(area.y),
        width,
        height,
    }
}
