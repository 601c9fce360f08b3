//! World-space positions.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A point in continuous world space, as used by the simulation.
///
/// Grid cells are addressed with [`Point`](crate::Point); converting between
/// the two is the terrain's job.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: WorldPoint) -> f32 {
        (other - self).length()
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: WorldPoint, t: f32) -> WorldPoint {
        self + (other - self) * t
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.2}, {:.2}>", self.x, self.y)
    }
}

impl Add for WorldPoint {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for WorldPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_and_lerp() {
        let a = WorldPoint::new(1.0, 1.0);
        let b = WorldPoint::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), WorldPoint::new(2.5, 3.0));
    }

    #[test]
    fn finite_check() {
        assert!(WorldPoint::new(1.0, -3.0).is_finite());
        assert!(!WorldPoint::new(f32::NAN, 0.0).is_finite());
        assert!(!WorldPoint::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(WorldPoint::new(1.5, -2.0).to_string(), "<1.50, -2.00>");
        assert_eq!(WorldPoint::from((3.0, 4.0)).length(), 5.0);
    }
}
