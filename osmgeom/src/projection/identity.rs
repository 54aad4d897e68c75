use osmgeom_types::{Coordinates, Location};

use crate::error::Result;
use crate::projection::Projection;

/// Pseudo projection that returns WGS84 longitude and latitude unchanged.
///
/// Undefined locations are passed through as `NaN` coordinates. Backends reject them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityProjection;

impl IdentityProjection {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self
    }
}

impl Projection for IdentityProjection {
    fn project(&self, location: Location) -> Result<Coordinates> {
        Ok(Coordinates::new(location.lon(), location.lat()))
    }

    fn epsg(&self) -> i32 {
        4326
    }

    fn proj_string(&self) -> String {
        "+proj=longlat +datum=WGS84 +no_defs".to_string()
    }
}
