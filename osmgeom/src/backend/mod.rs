//! Output geometry backends.
//!
//! A backend turns a stream of projected [`Coordinates`] into concrete geometry values. The
//! [`GeometryFactory`](crate::GeometryFactory) drives it through the incremental protocol
//! described on [`GeometryBackend`]; [`BuildProtocol`] can be embedded into an implementation to
//! reject calls that do not follow that protocol.

use osmgeom_types::Coordinates;

use crate::error::{GeometryError, GeometryErrorKind, Result};

mod protocol;
mod wkt;

#[cfg(feature = "geo-types")]
mod geo;
#[cfg(feature = "geojson")]
mod geo_json;

pub use protocol::{BuildProtocol, BuildState, BuildStep};
pub use wkt::WktBackend;

#[cfg(feature = "geo-types")]
pub use geo::GeoTypesBackend;
#[cfg(feature = "geojson")]
pub use geo_json::GeoJsonBackend;

/// Builds output geometries from projected coordinates.
///
/// Apart from points, geometries are built incrementally:
///
/// * linestring: `linestring_start`, `linestring_add_location` for every point,
///   `linestring_finish` with the number of added points;
/// * polygon: the same with the `polygon_*` methods. The points form the single ring of the
///   polygon;
/// * multipolygon: `multipolygon_start`, then for every polygon `multipolygon_polygon_start`,
///   the outer ring (`multipolygon_outer_ring_start`, `multipolygon_add_location` for every
///   point, `multipolygon_outer_ring_finish`), any number of inner rings built the same way with
///   the `multipolygon_inner_ring_*` methods, and `multipolygon_polygon_finish`. Finally
///   `multipolygon_finish` returns the result.
///
/// A backend holds the state of the geometry under construction, so only one geometry can be
/// built at a time. Starting a new linestring, polygon or multipolygon discards whatever was left
/// unfinished.
pub trait GeometryBackend {
    /// Point geometry type.
    type Point;
    /// Linestring geometry type.
    type LineString;
    /// Polygon geometry type.
    type Polygon;
    /// Multipolygon geometry type.
    type MultiPolygon;

    /// Creates a point.
    fn make_point(&self, coordinates: Coordinates) -> Result<Self::Point>;

    /// Starts a new linestring.
    fn linestring_start(&mut self) -> Result<()>;
    /// Adds a point to the current linestring.
    fn linestring_add_location(&mut self, coordinates: Coordinates) -> Result<()>;
    /// Finishes the current linestring. `num_points` is the number of points added since
    /// [`GeometryBackend::linestring_start`].
    fn linestring_finish(&mut self, num_points: usize) -> Result<Self::LineString>;

    /// Starts a new polygon.
    fn polygon_start(&mut self) -> Result<()>;
    /// Adds a point to the ring of the current polygon.
    fn polygon_add_location(&mut self, coordinates: Coordinates) -> Result<()>;
    /// Finishes the current polygon. `num_points` is the number of points added since
    /// [`GeometryBackend::polygon_start`].
    fn polygon_finish(&mut self, num_points: usize) -> Result<Self::Polygon>;

    /// Starts a new multipolygon.
    fn multipolygon_start(&mut self) -> Result<()>;
    /// Starts a new polygon inside the current multipolygon.
    fn multipolygon_polygon_start(&mut self) -> Result<()>;
    /// Finishes the current polygon of the multipolygon.
    fn multipolygon_polygon_finish(&mut self) -> Result<()>;
    /// Starts the outer ring of the current polygon.
    fn multipolygon_outer_ring_start(&mut self) -> Result<()>;
    /// Finishes the outer ring of the current polygon.
    fn multipolygon_outer_ring_finish(&mut self) -> Result<()>;
    /// Starts an inner ring of the current polygon.
    fn multipolygon_inner_ring_start(&mut self) -> Result<()>;
    /// Finishes the current inner ring.
    fn multipolygon_inner_ring_finish(&mut self) -> Result<()>;
    /// Adds a point to the ring that is currently open.
    fn multipolygon_add_location(&mut self, coordinates: Coordinates) -> Result<()>;
    /// Finishes the multipolygon and returns it.
    fn multipolygon_finish(&mut self) -> Result<Self::MultiPolygon>;
}

/// Returns an error if the coordinates cannot be stored in a geometry.
pub(crate) fn validate(coordinates: Coordinates) -> Result<Coordinates> {
    if coordinates.is_valid() {
        Ok(coordinates)
    } else {
        Err(GeometryError::invalid_location())
    }
}

/// Returns an error if the number of points reported by the caller differs from the number of
/// points the backend received.
pub(crate) fn check_point_count(reported: usize, received: usize) -> Result<()> {
    if reported == received {
        Ok(())
    } else {
        Err(GeometryError::new(
            GeometryErrorKind::Protocol,
            format!("point count mismatch: {reported} reported, {received} added"),
        ))
    }
}
