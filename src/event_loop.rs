use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The single event loop that drives the UI thread.
///
/// Owns the main thread, polls the input driver for user events, and hands
/// each one to the provided handler. The handler also receives `None` ticks
/// when the poll interval elapses without input; the app redraws on those.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain queued events before the next draw so bursts of
                // mouse drags never lag behind the render loop.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct ScriptedDriver {
        queue: VecDeque<Event>,
    }

    impl InputDriver for ScriptedDriver {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.queue.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.queue
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    #[test]
    fn drains_queued_events_before_next_tick() {
        let queue: VecDeque<Event> = (0..3)
            .map(|_| Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)))
            .collect();
        let mut event_loop =
            EventLoop::new(ScriptedDriver { queue }, Duration::from_millis(1));

        let mut ticks = 0usize;
        let mut events = 0usize;
        event_loop
            .run(|_, event| {
                match event {
                    Some(_) => events += 1,
                    None => ticks += 1,
                }
                // Stop after the script is consumed.
                if events == 3 && ticks >= 1 {
                    Ok(ControlFlow::Quit)
                } else {
                    Ok(ControlFlow::Continue)
                }
            })
            .unwrap();
        assert_eq!(events, 3);
        // All three events drained within a single poll cycle.
        assert_eq!(ticks, 1);
    }
}
