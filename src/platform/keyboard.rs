//! Keyboard input
//!
//! Terminals report key presses (and auto-repeat) but usually not
//! releases, so a pressed signal is held for a short window that key
//! repeat keeps refreshing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::input::{Signal, SignalSource};

/// How long a single key press keeps its signal active (seconds)
pub const KEY_HOLD: f32 = 0.15;

/// What a key means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Signal(Signal),
    Restart,
    Quit,
}

pub fn map_key(event: &KeyEvent) -> Option<KeyAction> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') => Some(KeyAction::Signal(Signal::Jump)),
        KeyCode::Down | KeyCode::Char('s') => Some(KeyAction::Signal(Signal::Duck)),
        KeyCode::Char('r') => Some(KeyAction::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Keyboard-driven signal with a hold window
#[derive(Debug, Clone)]
pub struct KeyboardSource {
    held: Signal,
    remaining: f32,
    hold: f32,
}

impl Default for KeyboardSource {
    fn default() -> Self {
        Self::new(KEY_HOLD)
    }
}

impl KeyboardSource {
    pub fn new(hold: f32) -> Self {
        Self {
            held: Signal::None,
            remaining: 0.0,
            hold,
        }
    }

    pub fn press(&mut self, signal: Signal) {
        self.held = signal;
        self.remaining = self.hold;
    }
}

impl SignalSource for KeyboardSource {
    fn poll(&mut self, dt: f32) -> Signal {
        if self.remaining <= 0.0 {
            return Signal::None;
        }
        self.remaining -= dt;
        self.held
    }
}
