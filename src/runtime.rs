use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};

/// Unified event type consumed by the app loop.
#[derive(Clone, Debug)]
pub enum RiffEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, mouse, resize).
pub trait RiffEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if one arrives before the timeout, Err(Timeout) otherwise.
    fn recv_timeout(&self, timeout: Duration) -> Result<RiffEvent, RecvTimeoutError>;
}

/// Production event source using crossterm. Mouse events are forwarded
/// because the week-3 drag game consumes them.
pub struct CrosstermEventSource {
    rx: Receiver<RiffEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(RiffEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Mouse(mouse)) => {
                    if tx.send(RiffEvent::Mouse(mouse)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(RiffEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RiffEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<RiffEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface.
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker.
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for headless tests.
pub struct TestEventSource {
    rx: Receiver<RiffEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<RiffEvent>) -> Self {
        Self { rx }
    }
}

impl RiffEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<RiffEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time.
pub struct Runner<E: RiffEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: RiffEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to the tick interval and returns the next event, or Tick
    /// on timeout. Games therefore only advance their timers when the
    /// shell is pumping events; dropping the game stops its clock.
    pub fn step(&self) -> RiffEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => RiffEvent::Tick,
        }
    }
}
