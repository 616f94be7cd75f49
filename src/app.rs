//! Application state and the event-to-state wiring.
//!
//! Events route modal-first: an open date picker owns the stream, then the
//! task editor, then a pending confirm dialog, then the help overlay. Only
//! when no modal is up do events reach the widgets and the frame chrome.

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tracing::{debug, info, warn};

use crate::calendar::{CalendarOutcome, Clock};
use crate::chrome::{ChromeConfig, CursorKind, FrameChrome, FrameRect, PointerEvent};
use crate::components::{
    CalendarOverlay, ConfirmAction, ConfirmOverlay, EditOverlay, EditOutcome, HelpOverlay,
    TableAction, TaskTable, TextField,
};
use crate::event_loop::ControlFlow;
use crate::keybindings::{Action, KeyBindings};
use crate::tasks::{Store, TaskList};
use crate::theme::Theme;
use crate::ui::{FrameRegions, rect_contains, render_frame};

const FRAME_TITLE: &str = "To-Do List";
const DATE_FIELD_WIDTH: u16 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFocus {
    Task,
    Date,
}

/// What a confirmed dialog should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmRequest {
    Exit,
    DeleteTask(u64),
    DeleteCompleted,
}

pub struct App {
    frame: FrameRect,
    chrome: FrameChrome,
    cursor: CursorKind,
    screen: Rect,
    theme: Theme,
    bindings: KeyBindings,
    tasks: TaskList,
    store: Store,
    clock: Box<dyn Clock>,
    task_input: TextField,
    date_input: TextField,
    focus: InputFocus,
    table: TaskTable,
    calendar: CalendarOverlay,
    editor: EditOverlay,
    confirm: ConfirmOverlay,
    confirm_request: Option<ConfirmRequest>,
    help: HelpOverlay,
    status: Option<String>,
    // Hit rects refreshed on every draw.
    regions: FrameRegions,
    task_field: Rect,
    date_field: Rect,
    add_button: Rect,
    cal_button: Rect,
    table_area: Rect,
}

impl App {
    pub fn new(store: Store, theme: Theme, clock: Box<dyn Clock>) -> Self {
        let tasks = TaskList::from_tasks(store.load_tasks());
        info!(count = tasks.len(), "loaded tasks");
        Self {
            frame: FrameRect::new(2, 1, 64, 20),
            chrome: FrameChrome::new(ChromeConfig::terminal_cells()),
            cursor: CursorKind::Arrow,
            screen: Rect::default(),
            theme,
            bindings: KeyBindings::default(),
            tasks,
            store,
            clock,
            task_input: TextField::new(),
            date_input: TextField::new(),
            focus: InputFocus::Task,
            table: TaskTable::new(),
            calendar: CalendarOverlay::new(),
            editor: EditOverlay::new(),
            confirm: ConfirmOverlay::new(),
            confirm_request: None,
            help: HelpOverlay::new(),
            status: None,
            regions: FrameRegions::default(),
            task_field: Rect::default(),
            date_field: Rect::default(),
            add_button: Rect::default(),
            cal_button: Rect::default(),
            table_area: Rect::default(),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        if let Event::Resize(width, height) = event {
            self.screen = Rect::new(0, 0, *width, *height);
            return ControlFlow::Continue;
        }

        if self.calendar.visible() {
            if let Some(outcome) = self.calendar.handle_event(event)
                && let CalendarOutcome::Selected(date) = outcome
            {
                if self.editor.visible() {
                    self.editor.set_date(&date);
                } else {
                    self.date_input.set_value(date);
                    self.focus = InputFocus::Date;
                }
            }
            return ControlFlow::Continue;
        }

        if self.editor.visible() {
            if let Event::Key(key) = event
                && self.bindings.matches(Action::OpenCalendar, key)
            {
                self.open_calendar_for_editor();
                return ControlFlow::Continue;
            }
            if let Some(outcome) = self.editor.handle_event(event) {
                self.finish_edit(outcome);
            }
            return ControlFlow::Continue;
        }

        if self.confirm.visible() {
            if let Some(action) = self.confirm.handle_event(event, &self.bindings) {
                return self.finish_confirm(action);
            }
            return ControlFlow::Continue;
        }

        if self.help.visible() && self.help.handle_event(event) {
            return ControlFlow::Continue;
        }

        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        const GLOBAL_ACTIONS: &[Action] = &[
            Action::Quit,
            Action::ToggleHelp,
            Action::ToggleTheme,
            Action::OpenCalendar,
            Action::FocusNextField,
            Action::SubmitTask,
            Action::SelectUp,
            Action::SelectDown,
            Action::ToggleSelected,
            Action::EditSelected,
            Action::DeleteSelected,
            Action::DeleteCompleted,
        ];
        for action in GLOBAL_ACTIONS {
            if self.bindings.matches(*action, key) {
                return self.run_action(*action);
            }
        }
        let field = match self.focus {
            InputFocus::Task => &mut self.task_input,
            InputFocus::Date => &mut self.date_input,
        };
        if field.handle_key(key) {
            self.status = None;
        }
        ControlFlow::Continue
    }

    fn run_action(&mut self, action: Action) -> ControlFlow {
        match action {
            Action::Quit => self.request_exit(),
            Action::ToggleHelp => self.help.toggle(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::OpenCalendar => self.open_calendar_main(),
            Action::FocusNextField => {
                self.focus = match self.focus {
                    InputFocus::Task => InputFocus::Date,
                    InputFocus::Date => InputFocus::Task,
                };
            }
            Action::SubmitTask => self.submit_task(),
            Action::SelectUp => self.table.select_up(self.tasks.len()),
            Action::SelectDown => self.table.select_down(self.tasks.len()),
            Action::ToggleSelected => {
                if let Some(id) = self.table.selected_id(self.tasks.tasks()) {
                    self.toggle_task(id);
                }
            }
            Action::EditSelected => {
                if let Some(id) = self.table.selected_id(self.tasks.tasks()) {
                    self.open_editor(id);
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.table.selected_id(self.tasks.tasks()) {
                    self.request_delete(id);
                }
            }
            Action::DeleteCompleted => self.request_delete_completed(),
            _ => {}
        }
        ControlFlow::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if matches!(
            mouse.kind,
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
        ) && rect_contains(self.table_area, mouse.column, mouse.row)
        {
            self.table.handle_mouse(mouse, self.tasks.len());
            return;
        }

        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            let at = (mouse.column, mouse.row);
            if let Some(rect) = self.regions.close_button
                && rect_contains(rect, at.0, at.1)
            {
                self.request_exit();
                return;
            }
            if let Some(rect) = self.regions.theme_button
                && rect_contains(rect, at.0, at.1)
            {
                self.toggle_theme();
                return;
            }
            if rect_contains(self.add_button, at.0, at.1) {
                self.submit_task();
                return;
            }
            if rect_contains(self.cal_button, at.0, at.1) {
                self.open_calendar_main();
                return;
            }
            if rect_contains(self.task_field, at.0, at.1) {
                self.focus = InputFocus::Task;
                return;
            }
            if rect_contains(self.date_field, at.0, at.1) {
                self.focus = InputFocus::Date;
                return;
            }
            if rect_contains(self.table_area, at.0, at.1) {
                if let Some(action) = self.table.handle_mouse(mouse, self.tasks.len()) {
                    self.run_table_action(action);
                }
                return;
            }
        }

        let Some(pointer) = pointer_event(mouse) else {
            return;
        };
        // A press only reaches the chrome from the title row or a border
        // column; everything after that follows the open gesture. Hovers
        // outside those zones reset the cursor without consulting the
        // chrome, whose hover band is wider than the clickable one.
        let gesture_open = self.chrome.is_resizing() || self.chrome.is_dragging();
        let forward = match pointer {
            PointerEvent::Down { x, y } => self.in_chrome_zone(x, y),
            PointerEvent::Move { x, y } => gesture_open || self.in_chrome_zone(x, y),
            _ => true,
        };
        if !forward {
            self.cursor = CursorKind::Arrow;
            return;
        }
        let response = self
            .chrome
            .handle_pointer(pointer, self.frame, self.screen.width as i32);
        self.cursor = response.cursor;
        if let Some(command) = response.command {
            debug!(?command, "apply geometry");
            self.frame = command.rect;
        }
    }

    fn in_chrome_zone(&self, x: i32, y: i32) -> bool {
        if y < self.frame.y || y >= self.frame.y + self.frame.height {
            return false;
        }
        if y == self.frame.y {
            return true;
        }
        // Below the title row only the border columns themselves are hot;
        // the chrome's wider hover band would otherwise swallow clicks
        // meant for widgets sitting next to the border.
        let local_x = x - self.frame.x;
        local_x == 0 || local_x == self.frame.width - 1
    }

    fn run_table_action(&mut self, action: TableAction) {
        match action {
            TableAction::Select(_) => {}
            TableAction::Toggle(id) => self.toggle_task(id),
            TableAction::Edit(id) => self.open_editor(id),
            TableAction::Delete(id) => self.request_delete(id),
        }
    }

    fn submit_task(&mut self) {
        match self
            .tasks
            .add(self.task_input.value(), self.date_input.value())
        {
            Ok(id) => {
                info!(id, "task added");
                self.task_input.clear();
                self.date_input.clear();
                self.focus = InputFocus::Task;
                self.status = None;
                self.persist();
            }
            Err(error) => self.status = Some(error.to_string()),
        }
    }

    fn toggle_task(&mut self, id: u64) {
        match self.tasks.toggle(id) {
            Ok(completed) => {
                debug!(id, completed, "task toggled");
                self.persist();
            }
            Err(error) => self.status = Some(error.to_string()),
        }
    }

    fn open_editor(&mut self, id: u64) {
        if let Some(task) = self.tasks.get(id) {
            self.editor.open(task);
        }
    }

    fn finish_edit(&mut self, outcome: EditOutcome) {
        if let EditOutcome::Saved { id, text, due_date } = outcome {
            match self.tasks.update(id, &text, &due_date) {
                Ok(()) => {
                    info!(id, "task updated");
                    self.status = None;
                    self.persist();
                }
                Err(error) => self.status = Some(error.to_string()),
            }
        }
    }

    fn request_exit(&mut self) {
        self.confirm_request = Some(ConfirmRequest::Exit);
        self.confirm
            .open("Quit", "Quit and close the window?", "Quit");
    }

    fn request_delete(&mut self, id: u64) {
        let Some(task) = self.tasks.get(id) else {
            return;
        };
        let body = format!("Delete \"{}\"?", task.text);
        self.confirm_request = Some(ConfirmRequest::DeleteTask(id));
        self.confirm.open("Delete Task", body, "Delete");
    }

    fn request_delete_completed(&mut self) {
        let count = self.tasks.completed_count();
        if count == 0 {
            self.status = Some("No completed tasks to delete".to_string());
            return;
        }
        self.confirm_request = Some(ConfirmRequest::DeleteCompleted);
        self.confirm.open(
            "Delete Completed",
            format!("Delete {count} completed task(s)?"),
            "Delete",
        );
    }

    fn finish_confirm(&mut self, action: ConfirmAction) -> ControlFlow {
        let request = self.confirm_request.take();
        if action != ConfirmAction::Confirm {
            return ControlFlow::Continue;
        }
        match request {
            Some(ConfirmRequest::Exit) => {
                info!("exit confirmed");
                return ControlFlow::Quit;
            }
            Some(ConfirmRequest::DeleteTask(id)) => {
                if let Ok(task) = self.tasks.remove(id) {
                    info!(id, "task deleted");
                    self.status = Some(format!("Deleted \"{}\"", task.text));
                    self.table.clamp_selection(self.tasks.len());
                    self.persist();
                }
            }
            Some(ConfirmRequest::DeleteCompleted) => {
                let removed = self.tasks.remove_completed();
                info!(removed, "completed tasks deleted");
                self.status = Some(format!("Deleted {removed} completed task(s)"));
                self.table.clamp_selection(self.tasks.len());
                self.persist();
            }
            None => {}
        }
        ControlFlow::Continue
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
        if let Err(error) = self.store.save_dark_mode(self.theme.is_dark()) {
            warn!(%error, "could not save theme preference");
        }
    }

    fn open_calendar_main(&mut self) {
        let initial = self.date_input.value().to_string();
        let seed = (!initial.is_empty()).then_some(initial.as_str());
        self.calendar.open(seed, self.clock.as_ref());
        self.calendar
            .set_origin(self.date_field.x, self.date_field.y + 1);
    }

    fn open_calendar_for_editor(&mut self) {
        let initial = self.editor.date_value().to_string();
        let seed = (!initial.is_empty()).then_some(initial.as_str());
        self.calendar.open(seed, self.clock.as_ref());
        let (x, y) = self.editor.date_field_origin();
        self.calendar.set_origin(x, y);
    }

    fn persist(&mut self) {
        if let Err(error) = self.store.save_tasks(self.tasks.tasks()) {
            warn!(%error, "could not save tasks");
            self.status = Some("Could not save tasks".to_string());
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.screen = area;
        let palette = self.theme.palette();

        let buffer = frame.buffer_mut();
        let backdrop = Style::default().bg(palette.background);
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_style(backdrop);
                }
            }
        }

        let regions = render_frame(frame, self.frame, area, palette, self.cursor, FRAME_TITLE);
        self.regions = regions.unwrap_or_default();
        if let Some(regions) = regions {
            self.draw_body(frame, regions.inner);
        } else {
            self.table_area = Rect::default();
            self.task_field = Rect::default();
            self.date_field = Rect::default();
            self.add_button = Rect::default();
            self.cal_button = Rect::default();
        }

        let palette = self.theme.palette();
        self.editor.render(frame, area, palette);
        self.calendar.render(frame, area, palette);
        self.confirm.render(frame, area, palette);
        self.help.render(frame, area, palette, &self.bindings);
    }

    fn draw_body(&mut self, frame: &mut Frame, inner: Rect) {
        use crate::ui::safe_set_string;

        let palette = self.theme.palette();
        if inner.width < 30 || inner.height < 4 {
            self.table_area = Rect::default();
            return;
        }

        // Input row: task text, due date, add and pick-a-date buttons.
        let row = inner.y;
        let label_style = Style::default().bg(palette.card).fg(palette.text_light);
        let buffer = frame.buffer_mut();
        safe_set_string(buffer, inner, inner.x, row, "Task:", label_style);
        let right_reserve = DATE_FIELD_WIDTH + 5 + 4 + 4;
        let task_width = inner.width.saturating_sub(6 + right_reserve);
        self.task_field = Rect::new(inner.x + 6, row, task_width, 1);

        let due_x = self.task_field.x + task_width + 1;
        safe_set_string(buffer, inner, due_x, row, "Due:", label_style);
        self.date_field = Rect::new(due_x + 5, row, DATE_FIELD_WIDTH, 1);
        let cal_x = self.date_field.x + DATE_FIELD_WIDTH + 1;
        self.cal_button = Rect::new(cal_x, row, 3, 1);
        safe_set_string(
            buffer,
            inner,
            cal_x,
            row,
            "[v]",
            Style::default().bg(palette.card).fg(palette.primary),
        );
        let add_x = cal_x + 4;
        self.add_button = Rect::new(add_x, row, 3, 1);
        safe_set_string(
            buffer,
            inner,
            add_x,
            row,
            "[+]",
            Style::default().bg(palette.success).fg(palette.card),
        );

        // Footer: completion stats on the left, transient status on the right.
        let footer_y = inner.y + inner.height - 1;
        let stats = format!("{}/{} done", self.tasks.completed_count(), self.tasks.len());
        safe_set_string(buffer, inner, inner.x, footer_y, &stats, label_style);
        if let Some(status) = &self.status {
            let x = inner.x
                + inner
                    .width
                    .saturating_sub(status.chars().count().min(u16::MAX as usize) as u16);
            safe_set_string(
                buffer,
                inner,
                x,
                footer_y,
                status,
                Style::default().bg(palette.card).fg(palette.warning),
            );
        }

        self.table_area = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height.saturating_sub(3),
        );
        let tasks: Vec<_> = self.tasks.tasks().to_vec();
        self.table.render(frame, self.table_area, palette, &tasks);

        let palette = self.theme.palette();
        self.task_input.render(
            frame,
            self.task_field,
            palette,
            self.focus == InputFocus::Task,
        );
        self.date_input.render(
            frame,
            self.date_field,
            palette,
            self.focus == InputFocus::Date,
        );
    }
}

fn pointer_event(mouse: &MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (mouse.column as i32, mouse.row as i32);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Drag { x, y }),
        MouseEventKind::Moved => Some(PointerEvent::Move { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Clock;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn app() -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(Some(dir.path().to_path_buf())).unwrap();
        let clock = Box::new(FixedClock(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()));
        let mut app = App::new(store, Theme::new(false), clock);
        app.screen = Rect::new(0, 0, 120, 40);
        (app, dir)
    }

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(&key(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn typed_task_is_added_and_persisted_on_enter() {
        let (mut app, dir) = app();
        type_text(&mut app, "buy milk");
        app.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].text, "buy milk");
        assert!(app.task_input.is_empty());
        assert!(dir.path().join("todos.json").exists());
    }

    #[test]
    fn empty_submit_sets_status_instead_of_adding() {
        let (mut app, _dir) = app();
        app.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.tasks.len(), 0);
        assert!(app.status.is_some());
    }

    #[test]
    fn delete_requires_confirmation() {
        let (mut app, _dir) = app();
        type_text(&mut app, "task");
        app.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        app.handle_event(&key(KeyCode::Down, KeyModifiers::NONE));
        app.handle_event(&key(KeyCode::Delete, KeyModifiers::CONTROL));
        assert!(app.confirm.visible());
        assert_eq!(app.tasks.len(), 1);
        // Default focus is Cancel; Enter keeps the task.
        app.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.tasks.len(), 1);
        // Confirm for real this time.
        app.handle_event(&key(KeyCode::Delete, KeyModifiers::CONTROL));
        app.handle_event(&key(KeyCode::Tab, KeyModifiers::NONE));
        app.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.tasks.len(), 0);
    }

    #[test]
    fn quit_key_opens_exit_confirm_and_quit_flows_through() {
        let (mut app, _dir) = app();
        let flow = app.handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(matches!(flow, ControlFlow::Continue));
        assert!(app.confirm.visible());
        app.handle_event(&key(KeyCode::Tab, KeyModifiers::NONE));
        let flow = app.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(flow, ControlFlow::Quit));
    }

    #[test]
    fn picker_selection_lands_in_the_date_field() {
        let (mut app, _dir) = app();
        app.handle_event(&key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(app.calendar.visible());
        // 't' selects today through the picker.
        app.handle_event(&key(KeyCode::Char('t'), KeyModifiers::NONE));
        assert!(!app.calendar.visible());
        assert_eq!(app.date_input.value(), "2024-03-14");
        assert_eq!(app.focus, InputFocus::Date);
    }

    #[test]
    fn calendar_owns_events_while_open() {
        let (mut app, _dir) = app();
        app.handle_event(&key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        // Keystrokes must not leak into the task field.
        app.handle_event(&key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(app.task_input.is_empty());
        app.handle_event(&key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.calendar.visible());
        assert!(app.date_input.is_empty());
    }

    #[test]
    fn titlebar_drag_moves_the_frame() {
        let (mut app, _dir) = app();
        let (fx, fy) = (app.frame.x as u16, app.frame.y as u16);
        app.handle_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            fx + 10,
            fy,
        ));
        app.handle_event(&mouse(
            MouseEventKind::Drag(MouseButton::Left),
            fx + 25,
            fy + 4,
        ));
        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), fx + 25, fy + 4));
        assert_eq!(app.frame.x, fx as i32 + 15);
        assert_eq!(app.frame.y, fy as i32 + 4);
    }

    #[test]
    fn body_click_never_starts_a_gesture() {
        let (mut app, _dir) = app();
        let (fx, fy) = (app.frame.x, app.frame.y);
        // Center of the frame body, away from edges and title row.
        app.handle_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            (fx + 15) as u16,
            (fy + 5) as u16,
        ));
        app.handle_event(&mouse(
            MouseEventKind::Drag(MouseButton::Left),
            (fx + 30) as u16,
            (fy + 8) as u16,
        ));
        assert_eq!(app.frame.x, fx);
        assert_eq!(app.frame.y, fy);
    }

    #[test]
    fn east_edge_drag_resizes_the_frame() {
        let (mut app, _dir) = app();
        let right = (app.frame.x + app.frame.width - 1) as u16;
        let y = (app.frame.y + 5) as u16;
        let start_width = app.frame.width;
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), right, y));
        app.handle_event(&mouse(
            MouseEventKind::Drag(MouseButton::Left),
            right + 10,
            y,
        ));
        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), right + 10, y));
        assert_eq!(app.frame.width, start_width + 10);
    }
}
