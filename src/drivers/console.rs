use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;

use super::InputDriver;

/// Crossterm-backed input driver for the real terminal.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    mouse_capture: bool,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if self.mouse_capture == enabled {
            return Ok(());
        }
        let mut stdout = io::stdout();
        if enabled {
            execute!(stdout, EnableMouseCapture)?;
        } else {
            execute!(stdout, DisableMouseCapture)?;
        }
        self.mouse_capture = enabled;
        Ok(())
    }
}
