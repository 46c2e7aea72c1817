//! The dino: vertical physics, ground contact and pose animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::REFERENCE_HZ;
use crate::tuning::Tuning;

/// Number of frames in the running and ducking cycles
pub const RUN_FRAMES: usize = 2;

/// Pose currently displayed; decides the hitbox size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    /// Running cycle frame index
    Run(u8),
    /// Single static airborne pose
    Jump,
    /// Ducking cycle frame index
    Duck(u8),
}

impl Pose {
    /// Sprite (and hitbox) dimensions in pixels
    pub fn size(self) -> Vec2 {
        match self {
            Pose::Run(_) | Pose::Jump => Vec2::new(88.0, 94.0),
            Pose::Duck(_) => Vec2::new(118.0, 60.0),
        }
    }
}

/// Circular frame cycle: frame index plus time spent on the current frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameCycle {
    frame: usize,
    elapsed: f32,
    frames: usize,
    dwell: f32,
}

impl FrameCycle {
    pub fn new(frames: usize, dwell: f32) -> Self {
        Self {
            frame: 0,
            elapsed: 0.0,
            frames: frames.max(1),
            dwell,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advance by dt, stepping (and wrapping) once per elapsed dwell period
    pub fn advance(&mut self, dt: f32) {
        if self.dwell <= 0.0 {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= self.dwell {
            self.elapsed -= self.dwell;
            self.frame = (self.frame + 1) % self.frames;
        }
    }

    pub fn restart(&mut self) {
        self.frame = 0;
        self.elapsed = 0.0;
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Left edge, fixed for the whole session
    pub x: f32,
    /// Baseline the feet rest on
    pub ground_y: f32,
    /// Feet line (bottom edge); never below `ground_y`
    pub y: f32,
    /// Pixels per reference tick, negative is up
    pub velocity_y: f32,
    pub is_jumping: bool,
    /// Duck request for the current frame (only shown while grounded)
    pub ducking: bool,
    jump_power: f32,
    gravity: f32,
    cycle: FrameCycle,
}

impl PlayerBody {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            ground_y: tuning.ground_y,
            y: tuning.ground_y,
            velocity_y: 0.0,
            is_jumping: false,
            ducking: false,
            jump_power: tuning.jump_power,
            gravity: tuning.gravity,
            cycle: FrameCycle::new(RUN_FRAMES, tuning.run_frame_dwell),
        }
    }

    pub fn set_ducking(&mut self, ducking: bool) {
        self.ducking = ducking;
    }

    /// Advance one frame. A jump starts only from the ground; holding the
    /// jump signal while airborne does nothing.
    pub fn update(&mut self, jump: bool, dt: f32) {
        if jump && !self.is_jumping {
            self.velocity_y = self.jump_power;
            self.is_jumping = true;
        }

        // Trapezoidal step: exact under constant gravity, so the arc does
        // not depend on the frame rate.
        let ticks = dt * REFERENCE_HZ;
        let v0 = self.velocity_y;
        self.velocity_y += self.gravity * ticks;
        self.y += 0.5 * (v0 + self.velocity_y) * ticks;

        if self.y >= self.ground_y {
            self.y = self.ground_y;
            self.velocity_y = 0.0;
            self.is_jumping = false;
        }

        if self.is_jumping {
            self.cycle.restart();
        } else {
            self.cycle.advance(dt);
        }
    }

    pub fn pose(&self) -> Pose {
        let frame = self.cycle.frame() as u8;
        if self.is_jumping {
            Pose::Jump
        } else if self.ducking {
            Pose::Duck(frame)
        } else {
            Pose::Run(frame)
        }
    }

    pub fn width(&self) -> f32 {
        self.pose().size().x
    }

    pub fn height(&self) -> f32 {
        self.pose().size().y
    }

    /// Hitbox of the displayed pose (feet on `y`)
    pub fn rect(&self) -> Rect {
        let size = self.pose().size();
        Rect::new(Vec2::new(self.x, self.y - size.y), size)
    }
}
