//! Game balance knobs
//!
//! Defaults come from [`crate::consts`]. A JSON document can override any
//! subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable constants consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_y: f32,
    pub player_x: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub run_frame_dwell: f32,
    pub min_gap: f32,
    pub base_speed: f32,
    /// Spawn interval range `[min, max)`; `min == max` pins the interval
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,
    pub score_per_level: u32,
    pub speed_step_per_level: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,
            player_x: PLAYER_X,
            jump_power: JUMP_POWER,
            gravity: GRAVITY,
            run_frame_dwell: RUN_FRAME_DWELL,
            min_gap: MIN_GAP,
            base_speed: BASE_SPEED,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,
            score_per_level: SCORE_PER_LEVEL,
            speed_step_per_level: SPEED_STEP_PER_LEVEL,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load overrides from a file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Difficulty tier for a score (`score div score_per_level`)
    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.score_per_level.max(1)
    }

    /// Obstacle speed multiplier for a level
    pub fn speed_scale(&self, level: u32) -> f32 {
        1.0 + level as f32 * self.speed_step_per_level
    }

    /// Obstacle speed for an obstacle spawned at the given score
    pub fn obstacle_speed(&self, score: u32) -> f32 {
        self.base_speed * self.speed_scale(self.level_for_score(score))
    }
}
