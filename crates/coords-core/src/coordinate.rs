use std::fmt;
use std::ops::{Mul, Sub};

/// Host-space position, in tiles or pixels depending on the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Integer tile position in the game world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a floating-point tile position, truncating each component
    /// toward zero.
    pub fn from_position(position: Vec2) -> Self {
        Self {
            x: position.x.trunc() as i32,
            y: position.y.trunc() as i32,
        }
    }

    /// Returns true when both components are zero or positive.
    #[inline]
    pub const fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// Top-left corner of this tile in world pixels.
    pub fn to_world_pixels(self, tile_size: i32) -> Vec2 {
        let tile_size = tile_size as f32;
        Vec2::new(self.x as f32 * tile_size, self.y as f32 * tile_size)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}
