//! Builds point, linestring, polygon and multipolygon geometries from OSM entities.
//!
//! The central type is [`GeometryFactory`]. It takes [`Location`](osmgeom_types::Location)s,
//! [`Node`](osmgeom_types::Node)s, [`Way`](osmgeom_types::Way)s and
//! [`Area`](osmgeom_types::Area)s, converts their locations with a
//! [`Projection`](projection::Projection) and hands the coordinates over to a
//! [`GeometryBackend`](backend::GeometryBackend) that produces the output geometries.
//!
//! Backends for [`geo_types`](https://docs.rs/geo-types) (feature `geo-types`, enabled by default),
//! GeoJSON (feature `geojson`) and WKT are included.

pub mod backend;
pub mod error;
pub mod factory;
pub mod projection;
pub mod source;

pub use error::{EntityKind, EntityRef, GeometryError, GeometryErrorKind};
pub use factory::{Direction, GeometryFactory, UseNodes};
pub use source::{NodeListSource, PointSource};

#[cfg(test)]
mod tests;
