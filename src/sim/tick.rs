//! Per-frame simulation step
//!
//! Order within a running frame: player, spawner, then every obstacle is
//! moved, judged for collision and checked for passing, and finally
//! off-screen obstacles are dropped.

use super::collision;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::input::Signal;

/// Input for a single step
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player intent this frame (keyboard or detector)
    pub signal: Signal,
    /// Restart request; only honoured after game over
    pub restart: bool,
}

impl TickInput {
    pub fn signal(signal: Signal) -> Self {
        Self {
            signal,
            restart: false,
        }
    }
}

/// What a step did
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub phase: GamePhase,
    pub score: u32,
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// Advance the session by `dt` seconds of wall-clock time
    pub fn step(&mut self, dt: f32, input: &TickInput) -> StepOutcome {
        let mut events = Vec::new();
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        match self.phase {
            GamePhase::GameOver => {
                if input.restart {
                    self.reset();
                    events.push(GameEvent::Restarted);
                }
            }
            GamePhase::Running => self.step_running(dt, input.signal, &mut events),
        }

        StepOutcome {
            phase: self.phase,
            score: self.score,
            events,
        }
    }

    fn step_running(&mut self, dt: f32, signal: Signal, events: &mut Vec<GameEvent>) {
        self.elapsed += dt;
        self.frames += 1;

        self.player.set_ducking(signal.is_duck());
        self.player.update(signal.is_jump(), dt);

        if let Some(obstacle) = self.spawner.step(dt, &self.obstacles, self.score, &self.tuning) {
            events.push(GameEvent::Spawned {
                id: obstacle.id,
                kind: obstacle.kind,
            });
            self.obstacles.push(obstacle);
        }

        let level_before = self.level();
        let mut hit = None;

        // Keep moving every obstacle after a hit so the final frame is consistent
        for obstacle in &mut self.obstacles {
            obstacle.update(dt);

            if hit.is_none() && collision::evaluate(&self.player, obstacle).collided {
                hit = Some(obstacle.id);
            }

            if hit.is_none() && collision::check_passed(&self.player, obstacle) {
                self.score += 1;
                events.push(GameEvent::Passed {
                    id: obstacle.id,
                    score: self.score,
                });
            }
        }

        let level = self.level();
        if level > level_before {
            log::info!("Level {} reached (score {})", level, self.score);
            events.push(GameEvent::LevelUp { level });
        }

        self.obstacles.retain(|o| !o.is_offscreen());

        if let Some(id) = hit {
            self.phase = GamePhase::GameOver;
            log::info!("Game over: hit obstacle {} with score {}", id, self.score);
            events.push(GameEvent::Collided { id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::{Obstacle, ObstacleKind};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn quiet_tuning() -> Tuning {
        // Nothing spawns for a long while
        Tuning {
            spawn_interval_min: 100.0,
            spawn_interval_max: 100.0,
            ..Default::default()
        }
    }

    /// Jumps when the nearest obstacle ahead is about to reach the dino
    fn bot_signal(session: &GameSession) -> Signal {
        let front = session.player.x + session.player.width();
        let danger = session.obstacles.iter().any(|o| {
            let lead = o.speed * 0.12;
            !o.passed && o.x + o.width >= session.player.x && o.x - front < lead
        });
        if danger { Signal::Jump } else { Signal::None }
    }

    #[test]
    fn test_three_spawns_with_pinned_interval() {
        let tuning = Tuning {
            spawn_interval_min: 1.0,
            spawn_interval_max: 1.0,
            base_speed: 100.0,
            min_gap: 50.0,
            ..Default::default()
        };
        let mut session = GameSession::new(3, tuning);
        let input = TickInput::default();

        // Spawns land on frames 63, 126 and 189 (t = 1.008, 2.016, 3.024)
        for _ in 0..188 {
            session.step(0.016, &input);
        }
        assert_eq!(session.spawner.spawned, 2);

        let outcome = session.step(0.016, &input);
        assert_eq!(session.spawner.spawned, 3);
        assert_eq!(session.obstacles.len(), 3);
        assert!(matches!(outcome.events.as_slice(), [GameEvent::Spawned { id: 3, .. }]));
        assert_eq!(outcome.phase, GamePhase::Running);
    }

    #[test]
    fn test_collision_freezes_until_restart() {
        let mut session = GameSession::new(11, Tuning::default());
        let idle = TickInput::default();

        let mut frames = 0;
        while !session.is_game_over() && frames < 1000 {
            session.step(0.016, &idle);
            frames += 1;
        }
        assert!(session.is_game_over(), "idle dino should eventually be hit");

        let before = session.snapshot();
        let timer = session.spawn_timer();
        for _ in 0..50 {
            let outcome = session.step(0.016, &TickInput::signal(Signal::Jump));
            assert!(outcome.events.is_empty());
            assert_eq!(outcome.phase, GamePhase::GameOver);
        }
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.spawn_timer(), timer);

        let outcome = session.step(
            0.016,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(outcome.events, vec![GameEvent::Restarted]);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player.y, session.player.ground_y);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut session = GameSession::new(1, quiet_tuning());
        session.score = 3;
        let outcome = session.step(
            0.016,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert!(outcome.events.is_empty());
        assert_eq!(session.score, 3);
    }

    #[test]
    fn test_scores_exactly_once_per_obstacle() {
        let mut session = GameSession::new(1, quiet_tuning());
        let mut obstacle = Obstacle::new(ObstacleKind::SmallCactus, 0.0, session.tuning.ground_y, 100.0);
        // Trailing edge touching the dino's left edge: no overlap, not yet passed
        obstacle.x = session.player.x - obstacle.width;
        obstacle.id = 77;
        session.obstacles.push(obstacle);

        let outcome = session.step(0.016, &TickInput::default());
        assert_eq!(outcome.events, vec![GameEvent::Passed { id: 77, score: 1 }]);

        for _ in 0..60 {
            let outcome = session.step(0.016, &TickInput::default());
            assert!(outcome.events.is_empty());
        }
        assert_eq!(session.score, 1);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_level_up_event() {
        let mut session = GameSession::new(1, quiet_tuning());
        session.score = 4;
        let mut obstacle = Obstacle::new(ObstacleKind::SmallCactus, 0.0, session.tuning.ground_y, 100.0);
        obstacle.x = session.player.x - obstacle.width;
        session.obstacles.push(obstacle);

        let outcome = session.step(0.016, &TickInput::default());
        assert!(outcome.events.contains(&GameEvent::LevelUp { level: 1 }));
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn test_offscreen_obstacles_are_dropped() {
        let mut session = GameSession::new(1, quiet_tuning());
        let mut obstacle = Obstacle::new(ObstacleKind::SmallCactus, 0.0, session.tuning.ground_y, 1000.0);
        obstacle.x = -obstacle.width + 1.0;
        obstacle.passed = true;
        session.obstacles.push(obstacle);
        session.step(0.016, &TickInput::default());
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_duck_signal_changes_pose() {
        use crate::sim::player::Pose;

        let mut session = GameSession::new(1, quiet_tuning());
        session.step(0.016, &TickInput::signal(Signal::Duck));
        assert!(matches!(session.snapshot().player.pose, Pose::Duck(_)));
        session.step(0.016, &TickInput::signal(Signal::None));
        assert!(matches!(session.snapshot().player.pose, Pose::Run(_)));
    }

    #[test]
    fn test_spawn_clearance_over_long_run() {
        let mut session = GameSession::new(2024, Tuning::default());
        for _ in 0..20_000 {
            let input = TickInput {
                signal: bot_signal(&session),
                restart: session.is_game_over(),
            };
            let outcome = session.step(0.016, &input);
            if outcome.events.iter().any(|e| matches!(e, GameEvent::Spawned { .. })) {
                let n = session.obstacles.len();
                if n >= 2 {
                    let previous = &session.obstacles[n - 2];
                    assert!(previous.x < session.tuning.screen_width - session.tuning.min_gap);
                }
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = GameSession::new(99999, Tuning::default());
        let mut b = GameSession::new(99999, Tuning::default());
        for _ in 0..600 {
            let input = TickInput::signal(bot_signal(&a));
            a.step(0.016, &input);
            b.step(0.016, &input);
        }
        let ja = serde_json::to_string(&a.snapshot()).unwrap();
        let jb = serde_json::to_string(&b.snapshot()).unwrap();
        assert_eq!(ja, jb);
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut session = GameSession::new(1, quiet_tuning());
        session.step(f32::NAN, &TickInput::default());
        session.step(-1.0, &TickInput::default());
        assert_eq!(session.elapsed, 0.0);
        assert_eq!(session.player.y, session.player.ground_y);
    }

    proptest! {
        #[test]
        fn prop_score_monotonic_and_counted(seed in 0u64..1000, jumps in proptest::collection::vec(any::<bool>(), 1..400)) {
            let mut session = GameSession::new(seed, Tuning::default());
            let mut passed = std::collections::HashSet::new();
            let mut last_score = 0;
            for jump in jumps {
                let signal = if jump { Signal::Jump } else { Signal::None };
                let outcome = session.step(0.016, &TickInput::signal(signal));
                prop_assert!(outcome.score >= last_score);
                for event in &outcome.events {
                    if let GameEvent::Passed { id, .. } = event {
                        prop_assert!(passed.insert(*id), "obstacle {} scored twice", id);
                    }
                }
                prop_assert_eq!(outcome.score as usize, passed.len());
                last_score = outcome.score;
            }
        }
    }
}
