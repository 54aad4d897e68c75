use geo_types::{Coord, LineString, MultiPolygon, Point, Polygon};
use osmgeom_types::Coordinates;

use crate::backend::{check_point_count, validate, BuildProtocol, BuildStep, GeometryBackend};
use crate::error::Result;

/// Backend producing [`geo_types`] geometries.
///
/// Polygon rings are closed by `geo_types` itself if the input ring is not.
#[derive(Debug, Default)]
pub struct GeoTypesBackend {
    protocol: BuildProtocol,
    coords: Vec<Coord<f64>>,
    exterior: Option<LineString<f64>>,
    interiors: Vec<LineString<f64>>,
    polygons: Vec<Polygon<f64>>,
}

impl GeoTypesBackend {
    /// Creates a new backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, step: BuildStep, coordinates: Coordinates) -> Result<()> {
        self.protocol.advance(step)?;
        let Coordinates { x, y } = validate(coordinates)?;
        self.coords.push(Coord { x, y });
        Ok(())
    }

    fn take_ring(&mut self) -> LineString<f64> {
        LineString::new(std::mem::take(&mut self.coords))
    }
}

impl GeometryBackend for GeoTypesBackend {
    type Point = Point<f64>;
    type LineString = LineString<f64>;
    type Polygon = Polygon<f64>;
    type MultiPolygon = MultiPolygon<f64>;

    fn make_point(&self, coordinates: Coordinates) -> Result<Self::Point> {
        let Coordinates { x, y } = validate(coordinates)?;
        Ok(Point::new(x, y))
    }

    fn linestring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::LineStringStart)?;
        self.coords.clear();
        Ok(())
    }

    fn linestring_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::LineStringAddLocation, coordinates)
    }

    fn linestring_finish(&mut self, num_points: usize) -> Result<Self::LineString> {
        check_point_count(num_points, self.coords.len())?;
        self.protocol.advance(BuildStep::LineStringFinish)?;
        Ok(self.take_ring())
    }

    fn polygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::PolygonStart)?;
        self.coords.clear();
        Ok(())
    }

    fn polygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::PolygonAddLocation, coordinates)
    }

    fn polygon_finish(&mut self, num_points: usize) -> Result<Self::Polygon> {
        check_point_count(num_points, self.coords.len())?;
        self.protocol.advance(BuildStep::PolygonFinish)?;
        Ok(Polygon::new(self.take_ring(), vec![]))
    }

    fn multipolygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::MultiPolygonStart)?;
        self.coords.clear();
        self.exterior = None;
        self.interiors.clear();
        self.polygons.clear();
        Ok(())
    }

    fn multipolygon_polygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::MultiPolygonPolygonStart)?;
        self.exterior = None;
        self.interiors.clear();
        Ok(())
    }

    fn multipolygon_polygon_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::MultiPolygonPolygonFinish)?;
        let exterior = self
            .exterior
            .take()
            .unwrap_or_else(|| LineString::new(vec![]));
        let interiors = std::mem::take(&mut self.interiors);
        self.polygons.push(Polygon::new(exterior, interiors));
        Ok(())
    }

    fn multipolygon_outer_ring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::OuterRingStart)?;
        self.coords.clear();
        Ok(())
    }

    fn multipolygon_outer_ring_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::OuterRingFinish)?;
        self.exterior = Some(self.take_ring());
        Ok(())
    }

    fn multipolygon_inner_ring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::InnerRingStart)?;
        self.coords.clear();
        Ok(())
    }

    fn multipolygon_inner_ring_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::InnerRingFinish)?;
        let ring = self.take_ring();
        self.interiors.push(ring);
        Ok(())
    }

    fn multipolygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::RingAddLocation, coordinates)
    }

    fn multipolygon_finish(&mut self) -> Result<Self::MultiPolygon> {
        self.protocol.advance(BuildStep::MultiPolygonFinish)?;
        Ok(MultiPolygon::new(std::mem::take(&mut self.polygons)))
    }
}
