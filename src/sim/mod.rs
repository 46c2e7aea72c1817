//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Time-scaled physics (`dt * 60` against a 60 Hz reference)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Judgement, Rect, check_passed, evaluate};
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{FrameCycle, PlayerBody, Pose};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameSession, ObstacleSnapshot, PlayerSnapshot, Snapshot};
pub use tick::{StepOutcome, TickInput};
