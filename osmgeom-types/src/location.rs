use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fixed-point units in one degree.
pub const COORDINATE_PRECISION: i32 = 10_000_000;

const UNDEFINED_COORDINATE: i32 = i32::MAX;

/// Geographic location of a node.
///
/// Coordinates are stored as fixed-point integers with seven decimal digits, the same precision
/// OSM itself uses. Because of that two locations compare equal exactly when they refer to the
/// same point in the source data, which is what consecutive-duplicate removal relies on.
///
/// A location can be *undefined* (see [`Location::undefined`]). This is also the default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    /// Creates a new location from longitude and latitude in degrees.
    ///
    /// Values are rounded to the nearest fixed-point unit. If either value is not finite or does
    /// not fit into the fixed-point range (about ±214.7 degrees), the location is undefined.
    pub fn new(lon: f64, lat: f64) -> Self {
        match (double_to_fixed(lon), double_to_fixed(lat)) {
            (Some(x), Some(y)) => Self { x, y },
            _ => Self::undefined(),
        }
    }

    /// Creates a location directly from fixed-point coordinates.
    pub const fn from_fixed(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Undefined location.
    pub const fn undefined() -> Self {
        Self {
            x: UNDEFINED_COORDINATE,
            y: UNDEFINED_COORDINATE,
        }
    }

    /// Fixed-point longitude.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Fixed-point latitude.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns true if at least one of the coordinates is set.
    pub fn is_defined(&self) -> bool {
        self.x != UNDEFINED_COORDINATE || self.y != UNDEFINED_COORDINATE
    }

    /// Returns true if the location is defined and lies inside the valid longitude and latitude
    /// ranges.
    pub fn is_valid(&self) -> bool {
        self.x >= -180 * COORDINATE_PRECISION
            && self.x <= 180 * COORDINATE_PRECISION
            && self.y >= -90 * COORDINATE_PRECISION
            && self.y <= 90 * COORDINATE_PRECISION
    }

    /// Longitude in degrees. `NaN` for an undefined location.
    pub fn lon(&self) -> f64 {
        if self.is_defined() {
            fixed_to_double(self.x)
        } else {
            f64::NAN
        }
    }

    /// Latitude in degrees. `NaN` for an undefined location.
    pub fn lat(&self) -> f64 {
        if self.is_defined() {
            fixed_to_double(self.y)
        } else {
            f64::NAN
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::undefined()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_defined() {
            write!(f, "({},{})", self.lon(), self.lat())
        } else {
            write!(f, "(undefined,undefined)")
        }
    }
}

fn double_to_fixed(value: f64) -> Option<i32> {
    let scaled = (value * COORDINATE_PRECISION as f64).round();
    if scaled.is_finite() && scaled >= i32::MIN as f64 && scaled < UNDEFINED_COORDINATE as f64 {
        Some(scaled as i32)
    } else {
        None
    }
}

fn fixed_to_double(value: i32) -> f64 {
    value as f64 / COORDINATE_PRECISION as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_undefined() {
        let location = Location::default();
        assert!(!location.is_defined());
        assert!(!location.is_valid());
        assert!(location.lon().is_nan());
        assert!(location.lat().is_nan());
        assert_eq!(location, Location::undefined());
    }

    #[test]
    fn non_finite_input_is_undefined() {
        for (lon, lat) in [
            (f64::NAN, f64::NAN),
            (f64::NAN, 10.0),
            (10.0, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
        ] {
            let location = Location::new(lon, lat);
            assert!(!location.is_defined(), "({lon}, {lat})");
            assert!(!location.is_valid());
            assert!(location.lon().is_nan());
        }
    }

    #[test]
    fn out_of_range_input_is_undefined() {
        assert_eq!(Location::new(300.0, 300.0), Location::undefined());
        assert_eq!(Location::new(10.0, 300.0), Location::undefined());
        assert_eq!(Location::new(-300.0, 10.0), Location::undefined());
        assert_eq!(Location::new(214.7483647, 0.0), Location::undefined());

        let edge = Location::new(214.7483646, -214.7483648);
        assert!(edge.is_defined());
        assert!(!edge.is_valid());
        assert_eq!(edge.x(), i32::MAX - 1);
        assert_eq!(edge.y(), i32::MIN);
    }

    #[test]
    fn rounds_to_fixed_precision() {
        let location = Location::new(1.23456789, -2.5);
        assert_eq!(location.x(), 12_345_679);
        assert_eq!(location.y(), -25_000_000);
        assert_eq!(location.lon(), 1.2345679);
        assert_eq!(location.lat(), -2.5);
    }

    #[test]
    fn equality_is_exact_after_rounding() {
        assert_eq!(Location::new(10.0, 20.0), Location::new(10.00000001, 20.0));
        assert_ne!(Location::new(10.0, 20.0), Location::new(10.0000001, 20.0));
    }

    #[test]
    fn validity() {
        assert!(Location::new(180.0, 90.0).is_valid());
        assert!(Location::new(-180.0, -90.0).is_valid());
        assert!(!Location::new(180.1, 0.0).is_valid());
        assert!(!Location::new(0.0, -90.1).is_valid());
        assert!(Location::new(200.0, 0.0).is_defined());
    }

    #[test]
    fn display() {
        assert_eq!(Location::new(1.5, -2.25).to_string(), "(1.5,-2.25)");
        assert_eq!(
            Location::undefined().to_string(),
            "(undefined,undefined)"
        );
    }
}
