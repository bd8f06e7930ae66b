use std::ops::{Add, Sub};

/// A cell coordinate, `x` being the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

