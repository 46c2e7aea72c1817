//! Obstacle cadence and difficulty policy
//!
//! Cadence is time-based (randomized interval), density is position-based
//! (minimum clearance from the last obstacle), and difficulty comes from
//! the score (speed steps every few points).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Spawns obstacles at the right edge of the screen
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Seconds accumulated toward the next spawn
    pub timer: f32,
    /// Current target interval, resampled after every spawn
    pub interval: f32,
    /// Obstacles spawned since the last reset
    pub spawned: u32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), tuning)
    }

    /// Use a caller-supplied generator (seeded streams, replays)
    pub fn with_rng(mut rng: Pcg32, tuning: &Tuning) -> Self {
        let interval = sample_interval(&mut rng, tuning);
        Self {
            timer: 0.0,
            interval,
            spawned: 0,
            rng,
        }
    }

    /// Start over without reseeding, so each run gets fresh intervals
    pub fn reset(&mut self, tuning: &Tuning) {
        self.timer = 0.0;
        self.interval = sample_interval(&mut self.rng, tuning);
        self.spawned = 0;
    }

    /// Advance the timer and maybe produce a new obstacle.
    ///
    /// `obstacles` is the live set in spawn order; only the last one is
    /// checked for clearance.
    pub fn step(&mut self, dt: f32, obstacles: &[Obstacle], score: u32, tuning: &Tuning) -> Option<Obstacle> {
        self.timer += dt;
        if self.timer <= self.interval {
            return None;
        }

        let spawn_x = tuning.screen_width;
        let clear = obstacles
            .last()
            .is_none_or(|last| last.x < spawn_x - tuning.min_gap);

        if !clear {
            // Retry sooner, but not on the very next frame
            self.timer = self.interval * 0.5;
            log::debug!("Spawn deferred: last obstacle too close to the right edge");
            return None;
        }

        let kind = ObstacleKind::ALL[self.rng.random_range(0..ObstacleKind::ALL.len())];
        let speed = tuning.obstacle_speed(score);
        self.spawned += 1;

        let mut obstacle = Obstacle::new(kind, spawn_x, tuning.ground_y, speed);
        obstacle.id = self.spawned;

        self.timer = 0.0;
        self.interval = sample_interval(&mut self.rng, tuning);
        log::debug!(
            "Spawned obstacle {} ({:?}) at speed {:.0}, next in {:.2}s",
            obstacle.id,
            kind,
            speed,
            self.interval
        );

        Some(obstacle)
    }
}

/// Uniform in `[min, max)`; a degenerate range pins the interval to `min`
fn sample_interval(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    if tuning.spawn_interval_max > tuning.spawn_interval_min {
        rng.random_range(tuning.spawn_interval_min..tuning.spawn_interval_max)
    } else {
        tuning.spawn_interval_min
    }
}
