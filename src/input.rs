use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use log::debug;
use std::io;
use std::time::Duration;

/// keys that ask the host to stop; raw mode eats SIGINT, so Ctrl-C lands here too
const INTERRUPT_KEYS: [KeyCode; 2] = [KeyCode::Esc, KeyCode::Char('q')];

/// Reads operator requests between ticks. The machine itself has no keypad;
/// the only thing the operator can ask for is to stop.
pub trait Input {
    /// drain pending events, returning true if any of them asked to stop
    fn interrupted(&mut self) -> Result<bool, io::Error>;
}

/// Input from the terminal, via crossterm. Holds the terminal in raw mode
/// for as long as it lives.
pub struct StdinInput {
    _raw: (),
}

impl StdinInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(StdinInput { _raw: () })
    }

    fn is_interrupt(evt: &KeyEvent) -> bool {
        INTERRUPT_KEYS.contains(&evt.code)
            || (evt.code == KeyCode::Char('c') && evt.modifiers.contains(KeyModifiers::CONTROL))
    }
}

impl Drop for StdinInput {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Warning: couldn't leave raw mode: {}", e);
        }
    }
}

impl Input for StdinInput {
    fn interrupted(&mut self) -> Result<bool, io::Error> {
        let mut stop = false;
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) if Self::is_interrupt(&evt) => stop = true,
                Event::Key(evt) => debug!("ignoring key {:?}", evt.code),
                _ => {}
            }
        }
        Ok(stop)
    }
}

/// dummy Input implementation for testing; interrupts after `ticks` polls,
/// or never
pub struct DummyInput {
    remaining: Option<u64>,
}

impl DummyInput {
    pub fn new() -> Self {
        DummyInput { remaining: None }
    }

    pub fn interrupt_after(ticks: u64) -> Self {
        DummyInput {
            remaining: Some(ticks),
        }
    }
}

impl Default for DummyInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Input for DummyInput {
    fn interrupted(&mut self) -> Result<bool, io::Error> {
        match self.remaining.as_mut() {
            None => Ok(false),
            Some(0) => Ok(true),
            Some(n) => {
                *n -= 1;
                Ok(false)
            }
        }
    }
}
