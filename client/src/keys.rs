use std::{
    io,
    sync::mpsc::Sender,
    thread::{Builder, JoinHandle},
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use engine::Key;
use log::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    KeyDown(Key),
    KeyUp(Key),
    Resize(u16, u16),
    Quit,
}

pub fn spawn_event_listener(event_tx: Sender<TerminalEvent>) -> io::Result<JoinHandle<()>> {
    Builder::new()
        .name("key_listener".to_owned())
        .spawn(move || loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => {
                    error!("failed to read terminal event: {err}");
                    let _ = event_tx.send(TerminalEvent::Quit);
                    return;
                }
            };
            if let Some(event) = translate(event) {
                if event_tx.send(event).is_err() {
                    return;
                }
            }
        })
}

pub fn translate(event: Event) -> Option<TerminalEvent> {
    match event {
        Event::Key(KeyEvent {
            code, modifiers, ..
        }) if is_quit(code, modifiers) => Some(TerminalEvent::Quit),
        Event::Key(KeyEvent { code, kind, .. }) => {
            let key = match code {
                KeyCode::Up => Key::ArrowUp,
                KeyCode::Down => Key::ArrowDown,
                KeyCode::Char(' ') => Key::Space,
                _ => Key::Other,
            };
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => Some(TerminalEvent::KeyDown(key)),
                KeyEventKind::Release => Some(TerminalEvent::KeyUp(key)),
            }
        }
        Event::Resize(columns, rows) => Some(TerminalEvent::Resize(columns, rows)),
        _ => None,
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Esc || (modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c'))
}

/// stands in for key releases on terminals that only report presses: a key
/// counts as released once no press or repeat has arrived for `timeout`.
pub struct HoldTimer {
    timeout: Duration,
    held: Option<(Key, Instant)>,
}

impl HoldTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            held: None,
        }
    }

    pub fn pressed(&mut self, key: Key, now: Instant) {
        self.held = Some((key, now));
    }

    pub fn released(&mut self) {
        self.held = None;
    }

    /// the key to release, once its hold has lapsed.
    pub fn expired(&mut self, now: Instant) -> Option<Key> {
        match self.held {
            Some((key, since)) if now.saturating_duration_since(since) >= self.timeout => {
                self.held = None;
                Some(key)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn arrows_and_space() {
        assert_eq!(
            translate(key(KeyCode::Up, KeyEventKind::Press)),
            Some(TerminalEvent::KeyDown(Key::ArrowUp))
        );
        assert_eq!(
            translate(key(KeyCode::Down, KeyEventKind::Repeat)),
            Some(TerminalEvent::KeyDown(Key::ArrowDown))
        );
        assert_eq!(
            translate(key(KeyCode::Char(' '), KeyEventKind::Release)),
            Some(TerminalEvent::KeyUp(Key::Space))
        );
        assert_eq!(
            translate(key(KeyCode::Char('w'), KeyEventKind::Release)),
            Some(TerminalEvent::KeyUp(Key::Other))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            translate(key(KeyCode::Esc, KeyEventKind::Press)),
            Some(TerminalEvent::Quit)
        );
        assert_eq!(
            translate(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(TerminalEvent::Quit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyEventKind::Press)),
            Some(TerminalEvent::KeyDown(Key::Other))
        );
    }

    #[test]
    fn resize_and_other_events() {
        assert_eq!(
            translate(Event::Resize(80, 24)),
            Some(TerminalEvent::Resize(80, 24))
        );
        assert_eq!(translate(Event::FocusGained), None);
    }

    #[test]
    fn hold_timer() {
        let start = Instant::now();
        let mut timer = HoldTimer::new(Duration::from_millis(300));
        assert_eq!(timer.expired(start), None);
        timer.pressed(Key::ArrowUp, start);
        assert_eq!(timer.expired(start + Duration::from_millis(299)), None);
        // a repeat extends the hold.
        timer.pressed(Key::ArrowUp, start + Duration::from_millis(200));
        assert_eq!(timer.expired(start + Duration::from_millis(400)), None);
        assert_eq!(
            timer.expired(start + Duration::from_millis(500)),
            Some(Key::ArrowUp)
        );
        assert_eq!(timer.expired(start + Duration::from_millis(900)), None);
        timer.pressed(Key::Space, start);
        timer.released();
        assert_eq!(timer.expired(start + Duration::from_secs(1)), None);
    }
}
