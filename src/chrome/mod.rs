//! Hand-rolled window chrome for the borderless main frame.
//!
//! The terminal gives us no native decorations, so dragging and edge-resizing
//! are reimplemented here as a small state machine. The controller is pure
//! with respect to the host surface: it consumes [`PointerEvent`]s plus the
//! current frame/screen geometry and returns a [`PointerResponse`] carrying a
//! cursor hint and, during an active gesture, a [`GeometryCommand`] the host
//! applies synchronously. No rendering types leak in, so the whole thing is
//! unit-testable without a terminal.

use tracing::debug;

/// Which vertical frame edge a pointer position falls on.
///
/// Only the left and right edges are resize-sensitive; the frame height is
/// fixed by design, so top/bottom are deliberately not hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    West,
    East,
}

/// Cursor shape the host surface should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorKind {
    #[default]
    Arrow,
    HorizontalResize,
}

/// Frame geometry in host screen units. The origin is signed so a dragged
/// frame may sit partially off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl FrameRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Geometry the host must apply to the frame, one per pointer update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryCommand {
    pub rect: FrameRect,
}

/// Captured at gesture start when the pointer went down on an edge hot-zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: Edge,
    pub start_pointer_x: i32,
    pub start_pointer_y: i32,
    pub start_x: i32,
    pub start_width: i32,
    pub start_height: i32,
}

/// Offset between the pointer and the frame origin at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub anchor_x: i32,
    pub anchor_y: i32,
}

/// Single source of truth for the active gesture. At most one session exists
/// at any instant; a gesture is either a resize or a drag, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Resizing(ResizeSession),
    Dragging(DragSession),
}

/// Low-level pointer events in host screen coordinates.
///
/// `Move` is a hover (no button held); `Drag` is a move with the button held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Drag { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up,
}

/// Result of feeding one pointer event through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerResponse {
    pub cursor: CursorKind,
    pub command: Option<GeometryCommand>,
}

impl PointerResponse {
    fn idle(cursor: CursorKind) -> Self {
        Self {
            cursor,
            command: None,
        }
    }

    fn apply(cursor: CursorKind, rect: FrameRect) -> Self {
        Self {
            cursor,
            command: Some(GeometryCommand { rect }),
        }
    }
}

/// Width floor and hot-zone width, in host screen units.
///
/// The defaults match a pixel-based desktop surface. The terminal host
/// narrows them because one cell is an order of magnitude wider than a
/// pixel; the math is unit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeConfig {
    pub min_width: i32,
    pub edge_threshold: i32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            min_width: 300,
            edge_threshold: 10,
        }
    }
}

impl ChromeConfig {
    /// Cell-scaled configuration for terminal hosts. The East band is
    /// exclusive of `width - threshold`, so a threshold of 2 is the smallest
    /// that leaves the right border column inside the band.
    pub fn terminal_cells() -> Self {
        Self {
            min_width: 30,
            edge_threshold: 2,
        }
    }
}

/// Classify a frame-local pointer x against the edge hot-zones.
pub fn classify_edge(local_x: i32, frame_width: i32, threshold: i32) -> Option<Edge> {
    if local_x < threshold {
        Some(Edge::West)
    } else if local_x > frame_width - threshold {
        Some(Edge::East)
    } else {
        None
    }
}

/// The window-interaction controller: owns the gesture state machine and the
/// geometry math for drag and edge-resize.
#[derive(Debug, Clone, Default)]
pub struct FrameChrome {
    config: ChromeConfig,
    gesture: GestureState,
}

impl FrameChrome {
    pub fn new(config: ChromeConfig) -> Self {
        Self {
            config,
            gesture: GestureState::Idle,
        }
    }

    pub fn config(&self) -> ChromeConfig {
        self.config
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, GestureState::Resizing(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging(_))
    }

    /// Feed one pointer event through the state machine.
    ///
    /// `frame` and `screen_width` are polled from the host on every call;
    /// the East-edge clamp in particular binds against the frame's current
    /// `x`, not the gesture-start `x`. Malformed sequences (drag or up with
    /// no open session) are no-ops.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        frame: FrameRect,
        screen_width: i32,
    ) -> PointerResponse {
        match event {
            PointerEvent::Down { x, y } => self.on_down(x, y, frame),
            PointerEvent::Drag { x, y } => self.on_drag(x, y, frame, screen_width),
            PointerEvent::Move { x, .. } => self.on_hover(x, frame),
            PointerEvent::Up => self.on_up(),
        }
    }

    fn on_down(&mut self, x: i32, y: i32, frame: FrameRect) -> PointerResponse {
        if !matches!(self.gesture, GestureState::Idle) {
            // A down with a session already open is a malformed sequence.
            return PointerResponse::idle(self.cursor_for_gesture());
        }
        let local_x = x - frame.x;
        // Edge detection always wins over starting a drag.
        if let Some(edge) = classify_edge(local_x, frame.width, self.config.edge_threshold) {
            debug!(?edge, start_width = frame.width, "resize gesture start");
            self.gesture = GestureState::Resizing(ResizeSession {
                edge,
                start_pointer_x: x,
                start_pointer_y: y,
                start_x: frame.x,
                start_width: frame.width,
                start_height: frame.height,
            });
            return PointerResponse::idle(CursorKind::HorizontalResize);
        }
        self.gesture = GestureState::Dragging(DragSession {
            anchor_x: x - frame.x,
            anchor_y: y - frame.y,
        });
        PointerResponse::idle(CursorKind::Arrow)
    }

    fn on_drag(
        &mut self,
        x: i32,
        y: i32,
        frame: FrameRect,
        screen_width: i32,
    ) -> PointerResponse {
        match self.gesture {
            GestureState::Resizing(session) => {
                let rect = apply_resize(session, x, frame, screen_width, self.config.min_width);
                PointerResponse::apply(CursorKind::HorizontalResize, rect)
            }
            GestureState::Dragging(session) => {
                // Drags are unclamped; the frame may leave the screen.
                let rect = FrameRect {
                    x: x - session.anchor_x,
                    y: y - session.anchor_y,
                    width: frame.width,
                    height: frame.height,
                };
                PointerResponse::apply(CursorKind::Arrow, rect)
            }
            GestureState::Idle => self.on_hover(x, frame),
        }
    }

    fn on_hover(&mut self, x: i32, frame: FrameRect) -> PointerResponse {
        if !matches!(self.gesture, GestureState::Idle) {
            return PointerResponse::idle(self.cursor_for_gesture());
        }
        let local_x = x - frame.x;
        let cursor = match classify_edge(local_x, frame.width, self.config.edge_threshold) {
            Some(_) => CursorKind::HorizontalResize,
            None => CursorKind::Arrow,
        };
        PointerResponse::idle(cursor)
    }

    fn on_up(&mut self) -> PointerResponse {
        if !matches!(self.gesture, GestureState::Idle) {
            debug!("gesture end");
        }
        self.gesture = GestureState::Idle;
        PointerResponse::idle(CursorKind::Arrow)
    }

    fn cursor_for_gesture(&self) -> CursorKind {
        match self.gesture {
            GestureState::Resizing(_) => CursorKind::HorizontalResize,
            _ => CursorKind::Arrow,
        }
    }
}

/// Pure resize math for one pointer update.
///
/// West edge: the pointer moves the left edge; width shrinks as the edge
/// advances and `x` clamps at the screen's left boundary. East edge: width
/// grows from the right and clamps so the right edge stays on screen. The
/// height and the opposite edge hold constant for the whole gesture.
fn apply_resize(
    session: ResizeSession,
    pointer_x: i32,
    frame: FrameRect,
    screen_width: i32,
    min_width: i32,
) -> FrameRect {
    let dx = pointer_x - session.start_pointer_x;
    match session.edge {
        Edge::West => {
            let width = (session.start_width - dx).max(min_width);
            let x = (session.start_x + dx).max(0);
            FrameRect {
                x,
                y: frame.y,
                width,
                height: session.start_height,
            }
        }
        Edge::East => {
            let width = (session.start_width + dx)
                .max(min_width)
                .min(screen_width - frame.x);
            FrameRect {
                x: frame.x,
                y: frame.y,
                width,
                height: session.start_height,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome() -> FrameChrome {
        FrameChrome::new(ChromeConfig::default())
    }

    fn frame(x: i32, width: i32) -> FrameRect {
        FrameRect::new(x, 40, width, 600)
    }

    const SCREEN: i32 = 1920;

    #[test]
    fn classify_edge_bands() {
        assert_eq!(classify_edge(0, 500, 10), Some(Edge::West));
        assert_eq!(classify_edge(9, 500, 10), Some(Edge::West));
        assert_eq!(classify_edge(10, 500, 10), None);
        assert_eq!(classify_edge(490, 500, 10), None);
        assert_eq!(classify_edge(491, 500, 10), Some(Edge::East));
        assert_eq!(classify_edge(499, 500, 10), Some(Edge::East));
    }

    #[test]
    fn east_resize_grows_and_clamps_to_floor() {
        let mut c = chrome();
        let f = frame(100, 500);
        c.handle_pointer(PointerEvent::Down { x: 595, y: 50 }, f, SCREEN);
        assert!(c.is_resizing());

        let r = c.handle_pointer(PointerEvent::Drag { x: 645, y: 50 }, f, SCREEN);
        assert_eq!(r.command.unwrap().rect.width, 550);

        let r = c.handle_pointer(PointerEvent::Drag { x: 295, y: 50 }, f, SCREEN);
        assert_eq!(r.command.unwrap().rect.width, 300);
    }

    #[test]
    fn east_resize_clamps_to_screen_right() {
        let mut c = chrome();
        let f = frame(1500, 400);
        c.handle_pointer(PointerEvent::Down { x: 1895, y: 50 }, f, SCREEN);
        let r = c.handle_pointer(PointerEvent::Drag { x: 2400, y: 50 }, f, SCREEN);
        // right edge pinned at screen_width - frame.x
        assert_eq!(r.command.unwrap().rect.width, SCREEN - 1500);
    }

    #[test]
    fn west_resize_moves_left_edge() {
        let mut c = chrome();
        let f = frame(100, 500);
        c.handle_pointer(PointerEvent::Down { x: 105, y: 50 }, f, SCREEN);
        assert!(c.is_resizing());

        let r = c.handle_pointer(PointerEvent::Drag { x: 155, y: 50 }, f, SCREEN);
        let rect = r.command.unwrap().rect;
        assert_eq!(rect.width, 450);
        assert_eq!(rect.x, 150);
    }

    #[test]
    fn west_resize_width_floors_before_x_clamps() {
        let mut c = chrome();
        let f = frame(100, 500);
        c.handle_pointer(PointerEvent::Down { x: 105, y: 50 }, f, SCREEN);
        let r = c.handle_pointer(PointerEvent::Drag { x: 355, y: 50 }, f, SCREEN);
        let rect = r.command.unwrap().rect;
        // Width hits the floor; x keeps tracking the pointer delta.
        assert_eq!(rect.width, 300);
        assert_eq!(rect.x, 350);
    }

    #[test]
    fn west_resize_never_crosses_screen_left() {
        let mut c = chrome();
        let f = frame(5, 500);
        c.handle_pointer(PointerEvent::Down { x: 8, y: 50 }, f, SCREEN);
        let r = c.handle_pointer(PointerEvent::Drag { x: -30, y: 50 }, f, SCREEN);
        let rect = r.command.unwrap().rect;
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 538);
    }

    #[test]
    fn drag_tracks_anchor_exactly() {
        let mut c = chrome();
        let f = frame(100, 500);
        c.handle_pointer(PointerEvent::Down { x: 300, y: 120 }, f, SCREEN);
        assert!(c.is_dragging());

        let r = c.handle_pointer(PointerEvent::Drag { x: 310, y: 115 }, f, SCREEN);
        let rect = r.command.unwrap().rect;
        assert_eq!(rect.x, 110);
        assert_eq!(rect.y, 35);
        assert_eq!((rect.width, rect.height), (500, 600));
    }

    #[test]
    fn drag_may_leave_screen() {
        let mut c = chrome();
        let f = frame(0, 500);
        c.handle_pointer(PointerEvent::Down { x: 250, y: 50 }, f, SCREEN);
        let r = c.handle_pointer(PointerEvent::Drag { x: -100, y: 50 }, f, SCREEN);
        assert_eq!(r.command.unwrap().rect.x, -350);
    }

    #[test]
    fn height_constant_for_entire_resize() {
        let mut c = chrome();
        let f = frame(100, 500);
        c.handle_pointer(PointerEvent::Down { x: 595, y: 50 }, f, SCREEN);
        for dx in [10, 80, -40, 200] {
            let r = c.handle_pointer(PointerEvent::Drag { x: 595 + dx, y: 50 }, f, SCREEN);
            assert_eq!(r.command.unwrap().rect.height, 600);
        }
    }

    #[test]
    fn edge_detection_wins_after_prior_drag() {
        let mut c = chrome();
        let f = frame(100, 500);
        // Full drag gesture first.
        c.handle_pointer(PointerEvent::Down { x: 300, y: 50 }, f, SCREEN);
        c.handle_pointer(PointerEvent::Drag { x: 305, y: 50 }, f, SCREEN);
        c.handle_pointer(PointerEvent::Up, f, SCREEN);
        assert_eq!(c.gesture(), GestureState::Idle);

        // A down on the edge must open a resize, never a drag.
        c.handle_pointer(PointerEvent::Down { x: 102, y: 50 }, f, SCREEN);
        assert!(c.is_resizing());
        assert!(!c.is_dragging());
    }

    #[test]
    fn sessions_are_mutually_exclusive() {
        let mut c = chrome();
        let f = frame(100, 500);
        c.handle_pointer(PointerEvent::Down { x: 102, y: 50 }, f, SCREEN);
        assert!(c.is_resizing());
        // A second down mid-gesture is malformed and must not open a drag.
        c.handle_pointer(PointerEvent::Down { x: 300, y: 50 }, f, SCREEN);
        assert!(c.is_resizing());
        assert!(!c.is_dragging());
    }

    #[test]
    fn up_without_down_is_a_noop() {
        let mut c = chrome();
        let f = frame(100, 500);
        let r = c.handle_pointer(PointerEvent::Up, f, SCREEN);
        assert_eq!(r.command, None);
        assert_eq!(c.gesture(), GestureState::Idle);

        let r = c.handle_pointer(PointerEvent::Drag { x: 300, y: 50 }, f, SCREEN);
        assert_eq!(r.command, None);
    }

    #[test]
    fn hover_sets_resize_cursor_over_edges_only() {
        let mut c = chrome();
        let f = frame(100, 500);
        let r = c.handle_pointer(PointerEvent::Move { x: 105, y: 50 }, f, SCREEN);
        assert_eq!(r.cursor, CursorKind::HorizontalResize);
        let r = c.handle_pointer(PointerEvent::Move { x: 598, y: 50 }, f, SCREEN);
        assert_eq!(r.cursor, CursorKind::HorizontalResize);
        let r = c.handle_pointer(PointerEvent::Move { x: 300, y: 50 }, f, SCREEN);
        assert_eq!(r.cursor, CursorKind::Arrow);
        assert_eq!(r.command, None);
    }

    #[test]
    fn up_resets_cursor_and_session() {
        let mut c = chrome();
        let f = frame(100, 500);
        c.handle_pointer(PointerEvent::Down { x: 595, y: 50 }, f, SCREEN);
        let r = c.handle_pointer(PointerEvent::Up, f, SCREEN);
        assert_eq!(r.cursor, CursorKind::Arrow);
        assert_eq!(c.gesture(), GestureState::Idle);
    }
}
