//! OSM entity model consumed by the `osmgeom` geometry factory.
//!
//! The types here mirror the parts of the OpenStreetMap data model that are needed to build
//! geometries: [`Location`]s of nodes, ordered [`NodeRefList`]s of ways and rings, and [`Area`]s
//! assembled from outer and inner rings.

mod area;
mod coordinates;
mod location;
mod node;

pub use area::{Area, AreaItem};
pub use coordinates::Coordinates;
pub use location::{Location, COORDINATE_PRECISION};
pub use node::{Node, NodeRef, NodeRefList, Way};

/// Identifier of an OSM object.
pub type ObjectId = i64;
