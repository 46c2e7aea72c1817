//! Jump Dino - a side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Time-stepped simulation (player physics, spawning, collisions, scoring)
//! - `input`: Source-agnostic player signal (keyboard or pose detector)
//! - `tuning`: Data-driven game balance
//! - `renderer`: Terminal rendering of simulation snapshots
//! - `platform`: Keyboard and detector-feed signal sources

pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use input::{Signal, SignalSource};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Physics constants are expressed per tick of this reference rate
    pub const REFERENCE_HZ: f32 = 60.0;
    /// Largest dt accepted from the frame clock (stalls, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Baseline both the dino and the obstacles stand on
    pub const GROUND_Y: f32 = 380.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    /// Initial vertical velocity of a jump (pixels per reference tick, negative is up)
    pub const JUMP_POWER: f32 = -15.0;
    /// Downward acceleration (pixels per reference tick²)
    pub const GRAVITY: f32 = 1.0;
    /// Dwell time of each running/ducking animation frame (seconds)
    pub const RUN_FRAME_DWELL: f32 = 0.12;

    /// Spawner defaults
    pub const MIN_GAP: f32 = 220.0;
    pub const BASE_SPEED: f32 = 450.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.8;
    pub const SPAWN_INTERVAL_MAX: f32 = 2.0;

    /// Difficulty: one level per this many points
    pub const SCORE_PER_LEVEL: u32 = 5;
    /// Speed multiplier added per level
    pub const SPEED_STEP_PER_LEVEL: f32 = 0.10;
}
