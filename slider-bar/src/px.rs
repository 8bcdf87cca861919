//! Physical pixel coordinates used by the slider.
//!
//! Thumb offsets are fractional: the host toolkit positions views with
//! sub-pixel precision and the settle animation interpolates between them,
//! so [`Px`] wraps an `f32` rather than an integer.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::dp::Dp;

/// A physical pixel coordinate value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Px` value.
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Converts a density-independent value using the current scale factor.
    pub fn from_dp(dp: Dp) -> Self {
        Self(dp.to_pixels_f64() as f32)
    }

    /// Returns the raw value.
    pub const fn to_f32(self) -> f32 {
        self.0
    }

    /// Restricts the value to `[min, max]`.
    ///
    /// Unlike [`f32::clamp`] this never panics: when `max < min` the result
    /// is `min`. NaN clamps to `min`.
    pub fn clamp(self, min: Px, max: Px) -> Px {
        if self.0.is_nan() || self.0 <= min.0 {
            min
        } else if self.0 >= max.0 {
            max.max(min)
        } else {
            self
        }
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Px) -> Px {
        if other.0 > self.0 { other } else { self }
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Px) -> Px {
        if other.0 < self.0 { other } else { self }
    }

    /// Returns `true` when the value is strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Px {
        Px(-self.0)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxPosition {
    /// The x coordinate.
    pub x: Px,
    /// The y coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns the position translated by `(dx, dy)`.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for PxPosition {
    type Output = PxPosition;

    fn add(self, rhs: PxPosition) -> PxPosition {
        PxPosition::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PxPosition {
    type Output = PxPosition;

    fn sub(self, rhs: PxPosition) -> PxPosition {
        PxPosition::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f32; 2]> for PxPosition {
    fn from(value: [f32; 2]) -> Self {
        PxPosition::new(Px(value[0]), Px(value[1]))
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxSize {
    /// The width.
    pub width: Px,
    /// The height.
    pub height: Px,
}

impl PxSize {
    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10.0);
        let b = Px(5.0);

        assert_eq!(a + b, Px(15.0));
        assert_eq!(a - b, Px(5.0));
        assert_eq!(a * 2.0, Px(20.0));
        assert_eq!(a / 2.0, Px(5.0));
        assert_eq!(-a, Px(-10.0));
    }

    #[test]
    fn test_px_clamp() {
        assert_eq!(Px(-3.0).clamp(Px::ZERO, Px(200.0)), Px::ZERO);
        assert_eq!(Px(205.0).clamp(Px::ZERO, Px(200.0)), Px(200.0));
        assert_eq!(Px(42.5).clamp(Px::ZERO, Px(200.0)), Px(42.5));
        // Inverted bounds collapse onto the lower one instead of panicking.
        assert_eq!(Px(7.0).clamp(Px(10.0), Px(0.0)), Px(10.0));
        assert_eq!(Px(f32::NAN).clamp(Px::ZERO, Px(200.0)), Px::ZERO);
    }

    #[test]
    fn test_px_min_max() {
        assert_eq!(Px(3.0).max(Px(4.0)), Px(4.0));
        assert_eq!(Px(3.0).min(Px(4.0)), Px(3.0));
        assert!(Px(0.5).is_positive());
        assert!(!Px::ZERO.is_positive());
    }

    #[test]
    fn test_px_position_arithmetic() {
        let pos1 = PxPosition::new(Px(10.0), Px(20.0));
        let pos2 = PxPosition::new(Px(5.0), Px(15.0));

        assert_eq!(pos1 + pos2, PxPosition::new(Px(15.0), Px(35.0)));
        assert_eq!(pos1 - pos2, PxPosition::new(Px(5.0), Px(5.0)));
        assert_eq!(
            pos1.offset(Px(2.0), Px(-3.0)),
            PxPosition::new(Px(12.0), Px(17.0))
        );
        assert_eq!(PxPosition::from([1.0, 2.0]), PxPosition::new(Px(1.0), Px(2.0)));
    }
}
