//! Terminal rendering module
//!
//! Draws simulation snapshots as a character grid with placeholder glyphs.

pub mod frame;
pub mod terminal;

pub use frame::{Frame, compose};
pub use terminal::TerminalRenderer;
