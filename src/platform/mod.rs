//! Platform abstraction layer
//!
//! Signal sources living outside the simulation:
//! - Keyboard (crossterm key events)
//! - Pose-detector feed (file or FIFO)

pub mod feed;
pub mod keyboard;

pub use feed::FeedSource;
pub use keyboard::{KeyAction, KeyboardSource, map_key};
