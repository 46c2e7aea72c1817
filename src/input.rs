//! Player intent signal
//!
//! The simulation only ever sees a [`Signal`]; whether it came from the
//! keyboard or from the webcam pose detector is irrelevant to it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Discrete player intent for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Signal {
    Jump,
    Duck,
    #[default]
    None,
}

impl Signal {
    /// Decode a pose-detector wire code (`R` jump, `B` duck, `X` none).
    /// Unknown codes degrade to `None`.
    pub fn from_code(code: u8) -> Self {
        match code {
            b'R' | b'r' => Signal::Jump,
            b'B' | b'b' => Signal::Duck,
            b'X' | b'x' => Signal::None,
            other => {
                log::warn!("Unknown signal code {:?}, treating as none", other as char);
                Signal::None
            }
        }
    }

    /// Parse a textual signal: a single wire code or a word.
    /// Anything unrecognised degrades to `None`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.len() == 1 {
            return Self::from_code(s.as_bytes()[0]);
        }
        match s.to_lowercase().as_str() {
            "jump" => Signal::Jump,
            "duck" | "sneak" => Signal::Duck,
            "none" | "" => Signal::None,
            other => {
                log::warn!("Unknown signal {:?}, treating as none", other);
                Signal::None
            }
        }
    }

    /// Combine two sources: Jump beats Duck beats None
    pub fn merge(self, other: Signal) -> Signal {
        match (self, other) {
            (Signal::Jump, _) | (_, Signal::Jump) => Signal::Jump,
            (Signal::Duck, _) | (_, Signal::Duck) => Signal::Duck,
            _ => Signal::None,
        }
    }

    pub fn is_jump(self) -> bool {
        self == Signal::Jump
    }

    pub fn is_duck(self) -> bool {
        self == Signal::Duck
    }
}

/// Anything that can report the current frame's signal
pub trait SignalSource {
    /// Signal for the frame about to be simulated
    fn poll(&mut self, dt: f32) -> Signal;
}

/// Replays a fixed sequence of signals, then reports `None` forever.
/// Handy for demos and deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Signal>,
}

impl ScriptedSource {
    pub fn new(signals: impl IntoIterator<Item = Signal>) -> Self {
        Self {
            queue: signals.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl SignalSource for ScriptedSource {
    fn poll(&mut self, _dt: f32) -> Signal {
        self.queue.pop_front().unwrap_or_default()
    }
}
