//! Axis ranges and range arithmetic.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Numeric range described by a lower and an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Distance between the bounds.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive width and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.width() > 0.0
    }

    /// Check whether a value lies inside the range (bounds included).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Scale the range about a center value.
    pub fn scaled_about(&self, center: f64, factor: f64) -> Self {
        Self::new(
            center + (self.min - center) * factor,
            center + (self.max - center) * factor,
        )
    }
}

impl Add<f64> for Range {
    type Output = Self;

    /// Shift both bounds up by `rhs`.
    fn add(self, rhs: f64) -> Self {
        Self {
            min: self.min + rhs,
            max: self.max + rhs,
        }
    }
}

impl Sub<f64> for Range {
    type Output = Self;

    /// Shift both bounds down by `rhs`.
    fn sub(self, rhs: f64) -> Self {
        Self {
            min: self.min - rhs,
            max: self.max - rhs,
        }
    }
}
