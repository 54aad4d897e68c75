//! Conversion of geographic [`Location`]s into the coordinates of the output geometries.

use osmgeom_types::{Coordinates, Location};

use crate::error::Result;

mod identity;
mod web_mercator;

pub use identity::IdentityProjection;
pub use web_mercator::WebMercator;

/// Projection of geographic locations into output coordinates.
///
/// A projection may fail for locations outside of its domain. Such errors carry no entity
/// information, it is attached by the factory.
pub trait Projection {
    /// Projects the location.
    fn project(&self, location: Location) -> Result<Coordinates>;

    /// EPSG code of the output coordinate system.
    fn epsg(&self) -> i32;

    /// Proj definition string of the output coordinate system.
    fn proj_string(&self) -> String;
}

impl<T: Projection + ?Sized> Projection for &T {
    fn project(&self, location: Location) -> Result<Coordinates> {
        (**self).project(location)
    }

    fn epsg(&self) -> i32 {
        (**self).epsg()
    }

    fn proj_string(&self) -> String {
        (**self).proj_string()
    }
}

impl<T: Projection + ?Sized> Projection for Box<T> {
    fn project(&self, location: Location) -> Result<Coordinates> {
        (**self).project(location)
    }

    fn epsg(&self) -> i32 {
        (**self).epsg()
    }

    fn proj_string(&self) -> String {
        (**self).proj_string()
    }
}
