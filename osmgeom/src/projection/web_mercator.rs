use std::f64::consts::FRAC_PI_4;

use osmgeom_types::{Coordinates, Location};

use crate::error::{GeometryError, Result};
use crate::projection::Projection;

/// Semi-major axis of the WGS84 ellipsoid, used as the sphere radius.
const EARTH_RADIUS: f64 = 6_378_137.0;

/// Projection into spherical ("web") mercator, EPSG:3857.
///
/// Latitudes beyond [`WebMercator::MAX_LATITUDE`] are clamped, so the poles map onto the edges of
/// the square world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebMercator;

impl WebMercator {
    /// Largest latitude the projection can represent. At this latitude the world is square.
    pub const MAX_LATITUDE: f64 = 85.0511288;

    /// Creates a new instance.
    pub fn new() -> Self {
        Self
    }

    fn lon_to_x(lon: f64) -> f64 {
        EARTH_RADIUS * lon.to_radians()
    }

    fn lat_to_y(lat: f64) -> f64 {
        let lat = lat.clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE);
        EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln()
    }
}

impl Projection for WebMercator {
    fn project(&self, location: Location) -> Result<Coordinates> {
        if !location.is_defined() {
            return Err(GeometryError::invalid_location());
        }

        let projected = Coordinates::new(
            Self::lon_to_x(location.lon()),
            Self::lat_to_y(location.lat()),
        );

        if projected.is_valid() {
            Ok(projected)
        } else {
            Err(GeometryError::invalid_location())
        }
    }

    fn epsg(&self) -> i32 {
        3857
    }

    fn proj_string(&self) -> String {
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=0.0 +lon_0=0.0 +x_0=0.0 +y_0=0 +k=1.0 +units=m +nadgrids=@null +wktext +no_defs".to_string()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::GeometryErrorKind;

    #[test]
    fn projects_known_points() {
        let origin = WebMercator.project(Location::new(0.0, 0.0)).expect("origin");
        assert_abs_diff_eq!(origin.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(origin.y, 0.0, epsilon = 1e-6);

        let corner = WebMercator
            .project(Location::new(180.0, WebMercator::MAX_LATITUDE))
            .expect("corner");
        assert_abs_diff_eq!(corner.x, 20_037_508.342789244, epsilon = 1e-6);
        assert_abs_diff_eq!(corner.y, 20_037_508.342789244, epsilon = 1.0);

        let berlin = WebMercator
            .project(Location::new(13.3777, 52.5163))
            .expect("berlin");
        assert_abs_diff_eq!(berlin.x, 1_489_198.752, epsilon = 1e-2);
        assert_abs_diff_eq!(berlin.y, 6_894_022.931, epsilon = 1e-2);
    }

    #[test]
    fn clamps_polar_latitudes() {
        let pole = WebMercator.project(Location::new(0.0, 90.0)).expect("pole");
        let edge = WebMercator
            .project(Location::new(0.0, WebMercator::MAX_LATITUDE))
            .expect("edge");
        assert_abs_diff_eq!(pole.y, edge.y, epsilon = 1e-9);
    }

    #[test]
    fn rejects_undefined_location() {
        let error = WebMercator
            .project(Location::undefined())
            .expect_err("undefined location");
        assert_eq!(error.kind(), GeometryErrorKind::InvalidLocation);
        assert_eq!(error.id(), None);
    }

    #[test]
    fn coordinate_system() {
        assert_eq!(WebMercator.epsg(), 3857);
        assert!(WebMercator.proj_string().starts_with("+proj=merc"));
    }
}
