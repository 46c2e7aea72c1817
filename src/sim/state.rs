//! Session state and the read-only view handed to renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleKind};
use super::player::{PlayerBody, Pose};
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player hit an obstacle; frozen until restart
    GameOver,
}

/// Something that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: ObstacleKind },
    Passed { id: u32, score: u32 },
    LevelUp { level: u32 },
    Collided { id: u32 },
    Restarted,
}

/// One running game: the dino, the obstacles, the score
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    pub player: PlayerBody,
    /// Live obstacles in spawn order (also left to right)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: GamePhase,
    pub spawner: Spawner,
    /// Seconds of running time since the last reset
    pub elapsed: f32,
    /// Running frames since the last reset
    pub frames: u64,
}

impl GameSession {
    /// New session in the running state
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let spawner = Spawner::new(seed, &tuning);
        log::info!("New session (seed {})", seed);
        Self {
            player: PlayerBody::new(&tuning),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            spawner,
            elapsed: 0.0,
            frames: 0,
            tuning,
        }
    }

    /// Fresh player, no obstacles, zero score, new spawn interval
    pub fn reset(&mut self) {
        self.player = PlayerBody::new(&self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.phase = GamePhase::Running;
        self.spawner.reset(&self.tuning);
        self.elapsed = 0.0;
        self.frames = 0;
        log::info!("Session reset");
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn level(&self) -> u32 {
        self.tuning.level_for_score(self.score)
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawner.timer
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawner.interval
    }

    pub fn snapshot(&self) -> Snapshot {
        let rect = self.player.rect();
        Snapshot {
            player: PlayerSnapshot {
                pos: rect.min,
                size: rect.size,
                pose: self.player.pose(),
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleSnapshot {
                    id: o.id,
                    kind: o.kind,
                    pos: Vec2::new(o.x, o.y),
                    size: Vec2::new(o.width, o.height),
                })
                .collect(),
            score: self.score,
            level: self.level(),
            game_over: self.is_game_over(),
            screen: Vec2::new(self.tuning.screen_width, self.tuning.screen_height),
            ground_y: self.tuning.ground_y,
            elapsed: self.elapsed,
        }
    }
}

/// Player as seen by a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Top-left of the displayed pose
    pub pos: Vec2,
    pub size: Vec2,
    pub pose: Pose,
}

/// Obstacle as seen by a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

/// Read-only view of a session for rendering/UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: PlayerSnapshot,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    /// Playfield size in simulation pixels
    pub screen: Vec2,
    pub ground_y: f32,
    pub elapsed: f32,
}
