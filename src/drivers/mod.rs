//! Input seam between the event loop and the terminal.
//!
//! The app never talks to crossterm's event queue directly; it goes through
//! [`InputDriver`] so tests can script event sequences.

pub mod console;

use std::io;
use std::time::Duration;

use crossterm::event::Event;

pub trait InputDriver {
    /// True when `read` would return without blocking.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    fn read(&mut self) -> io::Result<Event>;

    /// Mouse capture is a no-op for drivers without a real terminal.
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}
