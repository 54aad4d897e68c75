use geojson::{Geometry, Position, Value};
use osmgeom_types::Coordinates;

use crate::backend::{check_point_count, validate, BuildProtocol, BuildStep, GeometryBackend};
use crate::error::Result;

/// Backend producing [`geojson::Geometry`] values.
///
/// GeoJSON has no notion of a coordinate system other than WGS84, so it should be used together
/// with the identity projection.
#[derive(Debug, Default)]
pub struct GeoJsonBackend {
    protocol: BuildProtocol,
    positions: Vec<Position>,
    rings: Vec<Vec<Position>>,
    polygons: Vec<Vec<Vec<Position>>>,
}

impl GeoJsonBackend {
    /// Creates a new backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, step: BuildStep, coordinates: Coordinates) -> Result<()> {
        self.protocol.advance(step)?;
        let Coordinates { x, y } = validate(coordinates)?;
        self.positions.push(vec![x, y]);
        Ok(())
    }
}

impl GeometryBackend for GeoJsonBackend {
    type Point = Geometry;
    type LineString = Geometry;
    type Polygon = Geometry;
    type MultiPolygon = Geometry;

    fn make_point(&self, coordinates: Coordinates) -> Result<Self::Point> {
        let Coordinates { x, y } = validate(coordinates)?;
        Ok(Geometry::new(Value::Point(vec![x, y])))
    }

    fn linestring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::LineStringStart)?;
        self.positions.clear();
        Ok(())
    }

    fn linestring_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::LineStringAddLocation, coordinates)
    }

    fn linestring_finish(&mut self, num_points: usize) -> Result<Self::LineString> {
        check_point_count(num_points, self.positions.len())?;
        self.protocol.advance(BuildStep::LineStringFinish)?;
        Ok(Geometry::new(Value::LineString(std::mem::take(
            &mut self.positions,
        ))))
    }

    fn polygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::PolygonStart)?;
        self.positions.clear();
        Ok(())
    }

    fn polygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::PolygonAddLocation, coordinates)
    }

    fn polygon_finish(&mut self, num_points: usize) -> Result<Self::Polygon> {
        check_point_count(num_points, self.positions.len())?;
        self.protocol.advance(BuildStep::PolygonFinish)?;
        Ok(Geometry::new(Value::Polygon(vec![std::mem::take(
            &mut self.positions,
        )])))
    }

    fn multipolygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::MultiPolygonStart)?;
        self.positions.clear();
        self.rings.clear();
        self.polygons.clear();
        Ok(())
    }

    fn multipolygon_polygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::MultiPolygonPolygonStart)?;
        self.rings.clear();
        Ok(())
    }

    fn multipolygon_polygon_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::MultiPolygonPolygonFinish)?;
        let rings = std::mem::take(&mut self.rings);
        self.polygons.push(rings);
        Ok(())
    }

    fn multipolygon_outer_ring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::OuterRingStart)?;
        self.positions.clear();
        Ok(())
    }

    fn multipolygon_outer_ring_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::OuterRingFinish)?;
        let ring = std::mem::take(&mut self.positions);
        self.rings.push(ring);
        Ok(())
    }

    fn multipolygon_inner_ring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::InnerRingStart)?;
        self.positions.clear();
        Ok(())
    }

    fn multipolygon_inner_ring_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::InnerRingFinish)?;
        let ring = std::mem::take(&mut self.positions);
        self.rings.push(ring);
        Ok(())
    }

    fn multipolygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::RingAddLocation, coordinates)
    }

    fn multipolygon_finish(&mut self) -> Result<Self::MultiPolygon> {
        self.protocol.advance(BuildStep::MultiPolygonFinish)?;
        Ok(Geometry::new(Value::MultiPolygon(std::mem::take(
            &mut self.polygons,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn point_json() {
        let point = GeoJsonBackend::new()
            .make_point(Coordinates::new(1.5, -2.0))
            .expect("point");
        let value = serde_json::to_value(&point).expect("serialize");
        assert_eq!(value, json!({"type": "Point", "coordinates": [1.5, -2.0]}));
    }

    #[test]
    fn multipolygon_json() {
        let mut backend = GeoJsonBackend::new();
        backend.multipolygon_start().expect("start");
        backend.multipolygon_polygon_start().expect("polygon");
        backend.multipolygon_outer_ring_start().expect("outer");
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)] {
            backend
                .multipolygon_add_location(Coordinates::new(x, y))
                .expect("add");
        }
        backend.multipolygon_outer_ring_finish().expect("outer finish");
        backend.multipolygon_polygon_finish().expect("polygon finish");
        let multipolygon = backend.multipolygon_finish().expect("finish");

        let value = serde_json::to_value(&multipolygon).expect("serialize");
        assert_eq!(
            value,
            json!({
                "type": "MultiPolygon",
                "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]
            })
        );
    }
}
