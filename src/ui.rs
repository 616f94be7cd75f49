//! Frame chrome painting and buffer-safe drawing helpers.
//!
//! The main frame is drawn by hand: border, title row with theme/close
//! controls, and a card-colored body. Out-of-bounds writes into the ratatui
//! buffer panic, so every draw here is clipped to the visible intersection
//! first.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Clear;

use crate::chrome::{CursorKind, FrameRect};
use crate::theme::Palette;

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Write a string clipped to `bounds`.
pub fn safe_set_string(buffer: &mut Buffer, bounds: Rect, x: u16, y: u16, s: &str, style: Style) {
    if y < bounds.y || y >= bounds.y.saturating_add(bounds.height) {
        return;
    }
    let right = bounds.x.saturating_add(bounds.width);
    if x >= right {
        return;
    }
    let max = (right - x) as usize;
    let clipped: String = s.chars().take(max).collect();
    buffer.set_string(x, y, clipped, style);
}

/// The part of a signed frame rect visible inside the terminal area, if any.
pub fn visible_rect(frame: FrameRect, area: Rect) -> Option<Rect> {
    let x0 = frame.x.max(area.x as i32);
    let y0 = frame.y.max(area.y as i32);
    let x1 = (frame.x + frame.width).min((area.x + area.width) as i32);
    let y1 = (frame.y + frame.height).min((area.y + area.height) as i32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect {
        x: x0 as u16,
        y: y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}

/// Convert a logical cell rect to its visible portion, if any.
fn clip_logical(x: i32, y: i32, width: i32, height: i32, area: Rect) -> Option<Rect> {
    visible_rect(FrameRect::new(x, y, width, height), area)
}

/// Hit targets produced by one frame render.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRegions {
    pub visible: Rect,
    pub inner: Rect,
    pub theme_button: Option<Rect>,
    pub close_button: Option<Rect>,
}

/// Paint the frame border, title row and body; returns the hit regions, or
/// `None` when the frame is entirely off-screen.
pub fn render_frame(
    frame: &mut Frame,
    rect: FrameRect,
    area: Rect,
    palette: &Palette,
    cursor: CursorKind,
    title: &str,
) -> Option<FrameRegions> {
    let visible = visible_rect(rect, area)?;
    frame.render_widget(Clear, visible);
    let buffer = frame.buffer_mut();

    let body_style = Style::default().bg(palette.card).fg(palette.text);
    for y in visible.y..visible.y + visible.height {
        for x in visible.x..visible.x + visible.width {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.reset();
                cell.set_style(body_style);
            }
        }
    }

    let border_style = Style::default().bg(palette.card).fg(palette.border);
    // Edge affordance: tint the resize-sensitive borders when the pointer
    // hovers a hot-zone.
    let edge_style = if cursor == CursorKind::HorizontalResize {
        Style::default().bg(palette.card).fg(palette.primary)
    } else {
        border_style
    };

    let top = rect.y;
    let bottom = rect.y + rect.height - 1;
    let left = rect.x;
    let right = rect.x + rect.width - 1;

    for x in visible.x..visible.x + visible.width {
        if top >= 0 && top == visible.y as i32
            && let Some(cell) = buffer.cell_mut((x, visible.y))
        {
            cell.set_symbol("─");
            cell.set_style(border_style);
        }
        let vis_bottom = visible.y + visible.height - 1;
        if bottom == vis_bottom as i32
            && let Some(cell) = buffer.cell_mut((x, vis_bottom))
        {
            cell.set_symbol("─");
            cell.set_style(border_style);
        }
    }
    for y in visible.y..visible.y + visible.height {
        if left == visible.x as i32
            && let Some(cell) = buffer.cell_mut((visible.x, y))
        {
            cell.set_symbol("│");
            cell.set_style(edge_style);
        }
        let vis_right = visible.x + visible.width - 1;
        if right == vis_right as i32
            && let Some(cell) = buffer.cell_mut((vis_right, y))
        {
            cell.set_symbol("│");
            cell.set_style(edge_style);
        }
    }
    for (cx, cy, sym) in [
        (left, top, "┌"),
        (right, top, "┐"),
        (left, bottom, "└"),
        (right, bottom, "┘"),
    ] {
        if cx >= 0
            && cy >= 0
            && rect_contains(visible, cx as u16, cy as u16)
            && let Some(cell) = buffer.cell_mut((cx as u16, cy as u16))
        {
            cell.set_symbol(sym);
            cell.set_style(border_style);
        }
    }

    // Title and window controls live on the top border row.
    let title_style = Style::default()
        .bg(palette.card)
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    if top >= 0 {
        safe_set_string(
            buffer,
            visible,
            (left + 2).max(0) as u16,
            top as u16,
            &format!(" {title} "),
            title_style,
        );
    }

    let button_style = Style::default().bg(palette.card).fg(palette.text_light);
    let close_button = clip_logical(right - 4, top, 3, 1, area);
    let theme_button = clip_logical(right - 8, top, 3, 1, area);
    if let Some(r) = theme_button {
        safe_set_string(buffer, visible, r.x, r.y, "[d]", button_style);
    }
    if let Some(r) = close_button {
        safe_set_string(
            buffer,
            visible,
            r.x,
            r.y,
            "[x]",
            Style::default().bg(palette.card).fg(palette.danger),
        );
    }

    let inner = Rect {
        x: visible.x.saturating_add(1),
        y: visible.y.saturating_add(1),
        width: visible.width.saturating_sub(2),
        height: visible.height.saturating_sub(2),
    };

    Some(FrameRegions {
        visible,
        inner,
        theme_button,
        close_button,
    })
}
