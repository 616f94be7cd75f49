use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleHelp,
    ToggleTheme,
    SubmitTask,
    FocusNextField,
    OpenCalendar,
    // Task list
    SelectUp,
    SelectDown,
    ToggleSelected,
    EditSelected,
    DeleteSelected,
    DeleteCompleted,
    // Confirm dialog navigation/actions
    ConfirmToggle,
    ConfirmLeft,
    ConfirmRight,
    ConfirmAccept,
    ConfirmCancel,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleTheme => "Toggle dark mode",
            Action::SubmitTask => "Add the entered task",
            Action::FocusNextField => "Focus next input field",
            Action::OpenCalendar => "Open the date picker",
            Action::SelectUp => "Select previous task",
            Action::SelectDown => "Select next task",
            Action::ToggleSelected => "Toggle selected task",
            Action::EditSelected => "Edit selected task",
            Action::DeleteSelected => "Delete selected task",
            Action::DeleteCompleted => "Delete all completed tasks",
            Action::ConfirmToggle => "Confirm toggle (Tab)",
            Action::ConfirmLeft => "Confirm left",
            Action::ConfirmRight => "Confirm right",
            Action::ConfirmAccept => "Confirm accept",
            Action::ConfirmCancel => "Confirm cancel",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(Action, KeyCombo)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::*;
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let bindings = vec![
            (Action::Quit, KeyCombo::new(Char('q'), ctrl)),
            (Action::ToggleHelp, KeyCombo::new(F(1), none)),
            (Action::ToggleTheme, KeyCombo::new(Char('d'), ctrl)),
            (Action::SubmitTask, KeyCombo::new(Enter, none)),
            (Action::FocusNextField, KeyCombo::new(Tab, none)),
            (Action::OpenCalendar, KeyCombo::new(Char('k'), ctrl)),
            (Action::SelectUp, KeyCombo::new(Up, none)),
            (Action::SelectDown, KeyCombo::new(Down, none)),
            (Action::ToggleSelected, KeyCombo::new(Char('x'), ctrl)),
            (Action::EditSelected, KeyCombo::new(Char('e'), ctrl)),
            (Action::DeleteSelected, KeyCombo::new(Delete, ctrl)),
            (Action::DeleteCompleted, KeyCombo::new(Char('l'), ctrl)),
            (Action::ConfirmToggle, KeyCombo::new(Tab, none)),
            (Action::ConfirmLeft, KeyCombo::new(Left, none)),
            (Action::ConfirmRight, KeyCombo::new(Right, none)),
            (Action::ConfirmAccept, KeyCombo::new(Enter, none)),
            (Action::ConfirmCancel, KeyCombo::new(Esc, none)),
        ];
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.bindings
            .iter()
            .any(|(a, combo)| *a == action && combo.matches(key))
    }

    pub fn first_combo(&self, action: Action) -> Option<&KeyCombo> {
        self.bindings
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, combo)| combo)
    }
}
