//! Ground obstacles scrolling toward the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Obstacle variants; each has a fixed footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[default]
    SmallCactus,
    LargeCactus,
    CactusCluster,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::SmallCactus,
        ObstacleKind::LargeCactus,
        ObstacleKind::CactusCluster,
    ];

    /// Width and height in pixels. Every kind stays low enough to be
    /// cleared by a full jump at base speed.
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::SmallCactus => Vec2::new(34.0, 50.0),
            ObstacleKind::LargeCactus => Vec2::new(50.0, 66.0),
            ObstacleKind::CactusCluster => Vec2::new(68.0, 50.0),
        }
    }
}

/// An obstacle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Left edge
    pub x: f32,
    /// Top edge (`ground_y - height`)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per second, fixed at creation
    pub speed: f32,
    /// Set once the trailing edge is behind the player
    pub passed: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, ground_y: f32, speed: f32) -> Self {
        let size = kind.size();
        Self {
            id: 0,
            kind,
            x,
            y: ground_y - size.y,
            width: size.x,
            height: size.y,
            speed,
            passed: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.x -= self.speed * dt;
    }

    /// Fully scrolled off the left edge
    pub fn is_offscreen(&self) -> bool {
        self.x < -self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sits_on_ground() {
        for kind in ObstacleKind::ALL {
            let o = Obstacle::new(kind, 800.0, 380.0, 450.0);
            assert_eq!(o.y + o.height, 380.0);
            assert!(!o.passed);
        }
    }

    #[test]
    fn test_moves_left_by_speed() {
        let mut o = Obstacle::new(ObstacleKind::SmallCactus, 800.0, 380.0, 450.0);
        o.update(0.5);
        assert!((o.x - 575.0).abs() < 1e-4);
    }

    #[test]
    fn test_offscreen_boundary() {
        let mut o = Obstacle::new(ObstacleKind::LargeCactus, 0.0, 380.0, 450.0);
        o.x = -o.width;
        assert!(!o.is_offscreen());
        o.x -= 0.1;
        assert!(o.is_offscreen());
    }
}
