//! Fundamental geometric types.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// 2D position in field space (pixels). x grows rightward, y grows
/// downward. Grid-snapped entities keep both coordinates at multiples of
/// [`crate::constants::CELL_SIZE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle, half-open: a point on the left or top edge is
/// inside, a point on the right or bottom edge is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `distance` pixels along `direction`.
    pub fn stepped(&self, direction: Direction, distance: i32) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - distance),
            Direction::Down => Self::new(self.x, self.y + distance),
            Direction::Left => Self::new(self.x - distance, self.y),
            Direction::Right => Self::new(self.x + distance, self.y),
        }
    }

    /// Squared Euclidean distance to another position. Range thresholds
    /// compare against squared radii so the math stays in integers.
    pub fn distance_squared_to(&self, other: &Position) -> i64 {
        let dx = i64::from(other.x - self.x);
        let dy = i64::from(other.y - self.y);
        dx * dx + dy * dy
    }

    /// True when `other` lies strictly within `range` pixels on both axes
    /// (a square box test, not Euclidean).
    pub fn within_box(&self, other: &Position, range: i32) -> bool {
        (other.x - self.x).abs() < range && (other.y - self.y).abs() < range
    }

    /// Lossy conversion for continuous steering math.
    pub fn as_vec2(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x as f32, self.y as f32)
    }
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: &Position) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Center point, rounded down to integer pixels.
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}
