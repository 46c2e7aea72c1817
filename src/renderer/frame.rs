//! Character-grid composition of a simulation snapshot
//!
//! Sprites are not available in a terminal, so every pose and obstacle kind
//! maps to a placeholder glyph filling its scaled hitbox.

use glam::Vec2;

use crate::sim::{ObstacleKind, Pose, Snapshot};

/// Placeholder glyph for a player pose
pub fn pose_glyph(pose: Pose) -> char {
    match pose {
        Pose::Run(0) => '@',
        Pose::Run(_) => 'O',
        Pose::Jump => '^',
        Pose::Duck(_) => '=',
    }
}

/// Placeholder glyph for an obstacle kind
pub fn obstacle_glyph(kind: ObstacleKind) -> char {
    match kind {
        ObstacleKind::SmallCactus => '|',
        ObstacleKind::LargeCactus => '#',
        ObstacleKind::CactusCluster => 'Y',
    }
}

pub const GROUND_GLYPH: char = '_';

const EDGE_EPSILON: f32 = 1e-3;

/// A composed terminal frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub cols: u16,
    pub rows: u16,
    cells: Vec<char>,
}

impl Frame {
    pub fn blank(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols as usize * rows as usize],
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    fn set(&mut self, col: i32, row: i32, c: char) {
        if col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32 {
            self.cells[row as usize * self.cols as usize + col as usize] = c;
        }
    }

    /// Write text starting at a cell, clipped to the frame
    fn text(&mut self, col: i32, row: i32, s: &str) {
        for (i, c) in s.chars().enumerate() {
            self.set(col + i as i32, row, c);
        }
    }

    /// Fill a rectangle given in simulation pixels
    fn fill(&mut self, pos: Vec2, size: Vec2, scale: Vec2, c: char) {
        let min = pos * scale;
        let max = (pos + size) * scale;
        let (c0, r0) = (min.x.floor() as i32, min.y.floor() as i32);
        // Exclusive far edge; at least one cell so thin objects stay visible
        let c1 = ((max.x - EDGE_EPSILON).ceil() as i32).max(c0 + 1);
        let r1 = ((max.y - EDGE_EPSILON).ceil() as i32).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                self.set(col, row, c);
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// Lay out a snapshot on a `cols` x `rows` grid
pub fn compose(snapshot: &Snapshot, cols: u16, rows: u16) -> Frame {
    let mut frame = Frame::blank(cols, rows);
    if cols == 0 || rows == 0 {
        return frame;
    }
    let scale = Vec2::new(cols as f32, rows as f32) / snapshot.screen.max(Vec2::ONE);

    let ground_row = (snapshot.ground_y * scale.y).round() as i32;
    for col in 0..cols as i32 {
        frame.set(col, ground_row, GROUND_GLYPH);
    }

    for obstacle in &snapshot.obstacles {
        frame.fill(obstacle.pos, obstacle.size, scale, obstacle_glyph(obstacle.kind));
    }

    let player = &snapshot.player;
    frame.fill(player.pos, player.size, scale, pose_glyph(player.pose));

    frame.text(1, 0, &format!("SCORE {:05}  LEVEL {}", snapshot.score, snapshot.level));

    if snapshot.game_over {
        let mid = rows as i32 / 2;
        for (offset, line) in [(-1, "GAME OVER"), (0, "press R or SPACE to restart")].into_iter() {
            let col = (cols as i32 - line.len() as i32) / 2;
            frame.text(col, mid + offset, line);
        }
    }

    frame
}
