use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app loop.
#[derive(Clone, Debug)]
pub enum TimerEvent {
    Key(KeyEvent),
    Resize,
    /// One second of wall-clock time.
    Tick,
}

/// Source of timer events (keyboard, resize, ticks).
pub trait EventSource {
    /// Block until the next event. Err means every producer is gone and the
    /// loop should end.
    fn next(&self) -> Result<TimerEvent, RecvError>;
}

/// Production source: one thread reading crossterm events and one thread
/// emitting a Tick per interval, both feeding a single channel. Ticks come
/// from their own producer so a burst of key presses cannot starve the
/// countdown.
pub struct TerminalEvents {
    rx: Receiver<TimerEvent>,
}

impl TerminalEvents {
    pub fn new(tick_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        spawn_ticker(tx.clone(), tick_interval);

        thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(TimerEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(TimerEvent::Resize).is_err() {
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

impl EventSource for TerminalEvents {
    fn next(&self) -> Result<TimerEvent, RecvError> {
        self.rx.recv()
    }
}

fn spawn_ticker(tx: Sender<TimerEvent>, interval: Duration) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if tx.send(TimerEvent::Tick).is_err() {
            break;
        }
    });
}

/// Test source fed from a plain channel, so tests inject exact sequences of
/// keys and simulated seconds.
pub struct ScriptedEvents {
    rx: Receiver<TimerEvent>,
}

impl ScriptedEvents {
    pub fn new(rx: Receiver<TimerEvent>) -> Self {
        Self { rx }
    }

    /// Convenience pair: a source and the sender that scripts it.
    pub fn channel() -> (Sender<TimerEvent>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::new(rx))
    }
}

impl EventSource for ScriptedEvents {
    fn next(&self) -> Result<TimerEvent, RecvError> {
        self.rx.recv()
    }
}

/// Drains an event source one event at a time.
pub struct Runner<E: EventSource> {
    source: E,
}

impl<E: EventSource> Runner<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// The next event, or None once the source is disconnected.
    pub fn step(&self) -> Option<TimerEvent> {
        self.source.next().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_passes_events_through_in_order() {
        let (tx, source) = ScriptedEvents::channel();
        tx.send(TimerEvent::Tick).unwrap();
        tx.send(TimerEvent::Resize).unwrap();
        let runner = Runner::new(source);

        assert!(matches!(runner.step(), Some(TimerEvent::Tick)));
        assert!(matches!(runner.step(), Some(TimerEvent::Resize)));
    }

    #[test]
    fn step_ends_when_the_source_disconnects() {
        let (tx, source) = ScriptedEvents::channel();
        drop(tx);
        let runner = Runner::new(source);

        assert!(runner.step().is_none());
    }

    #[test]
    fn ticker_thread_produces_ticks() {
        let (tx, rx) = mpsc::channel();
        spawn_ticker(tx, Duration::from_millis(5));

        match rx.recv_timeout(Duration::from_millis(500)) {
            Ok(TimerEvent::Tick) => {}
            other => panic!("expected a tick, got {:?}", other),
        }
    }
}
