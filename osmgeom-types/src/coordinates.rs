#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Projected 2d coordinates handed over to geometry backends.
///
/// The meaning of the coordinates depends on the projection: with the identity projection `x` is
/// longitude and `y` is latitude, other projections produce e.g. meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Coordinates {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Coordinates {
    /// Creates new coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
