use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{error, info, warn};

use crate::error::InputError;
use crate::geom::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Quit,
}

impl Intent {
    pub fn from_key_event(key: KeyEvent) -> Option<Intent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Intent::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Intent::Turn(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Intent::Turn(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(Intent::Turn(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(Intent::Turn(Direction::Right))
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
            _ => None,
        }
    }
}

pub struct InputBridge {
    rx: Receiver<KeyEvent>,
}

// The producer blocks once `capacity` keys are waiting.
pub fn channel(capacity: usize) -> (SyncSender<KeyEvent>, InputBridge) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (tx, InputBridge { rx })
}

impl InputBridge {
    // Non-blocking drain. A quit anywhere in the batch wins; disconnection is
    // only reported once the backlog is consumed.
    pub fn poll_latest(&self) -> Result<Option<Intent>, InputError> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(key) => match Intent::from_key_event(key) {
                    Some(Intent::Quit) => latest = Some(Intent::Quit),
                    Some(turn) if latest != Some(Intent::Quit) => latest = Some(turn),
                    _ => {}
                },
                Err(TryRecvError::Empty) => return Ok(latest),
                Err(TryRecvError::Disconnected) => {
                    if latest.is_some() {
                        return Ok(latest);
                    }
                    warn!("input source disconnected");
                    return Err(InputError::Disconnected);
                }
            }
        }
    }

    pub fn next_key(&self) -> Result<KeyEvent, InputError> {
        self.rx.recv().map_err(|_| InputError::Disconnected)
    }

    pub fn discard_pending(&self) {
        while self.rx.try_recv().is_ok() {}
    }
}

pub fn spawn_terminal_reader(tx: SyncSender<KeyEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("key-reader".into())
        .spawn(move || loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(key).is_err() {
                        info!("input bridge dropped, key reader stopping");
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Error reading terminal events: {}", e);
                    break;
                }
            }
        })
}
