//! Collision and scoring judge
//!
//! Everything here is a pure function of the current positions: the player
//! hitbox against each obstacle box, and whether an obstacle has fully
//! crossed the player's x.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::PlayerBody;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True only for a positive-area intersection; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

/// Result of judging one player/obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Judgement {
    pub collided: bool,
}

/// Collision test between the player's current pose and an obstacle
pub fn evaluate(player: &PlayerBody, obstacle: &Obstacle) -> Judgement {
    Judgement {
        collided: player.rect().overlaps(&obstacle.rect()),
    }
}

/// Mark the obstacle passed once its trailing edge is behind the player.
/// Returns true only on the frame it becomes passed.
pub fn check_passed(player: &PlayerBody, obstacle: &mut Obstacle) -> bool {
    if !obstacle.passed && obstacle.x + obstacle.width < player.x {
        obstacle.passed = true;
        return true;
    }
    false
}
