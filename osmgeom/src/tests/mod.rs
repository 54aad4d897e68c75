use osmgeom_types::{Coordinates, Location, NodeRef, NodeRefList, ObjectId};

use crate::backend::{check_point_count, validate, BuildProtocol, BuildStep, GeometryBackend};
use crate::error::Result;

/// Polygon with its outer ring and inner rings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestPolygon {
    pub outer: Vec<Coordinates>,
    pub inners: Vec<Vec<Coordinates>>,
}

/// Backend that keeps plain coordinate vectors and records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<BuildStep>,
    protocol: BuildProtocol,
    points: Vec<Coordinates>,
    polygon: TestPolygon,
    polygons: Vec<TestPolygon>,
}

impl RecordingBackend {
    fn step(&mut self, step: BuildStep) -> Result<()> {
        self.calls.push(step);
        self.protocol.advance(step)
    }

    fn add(&mut self, step: BuildStep, coordinates: Coordinates) -> Result<()> {
        self.step(step)?;
        self.points.push(validate(coordinates)?);
        Ok(())
    }
}

impl GeometryBackend for RecordingBackend {
    type Point = Coordinates;
    type LineString = Vec<Coordinates>;
    type Polygon = Vec<Coordinates>;
    type MultiPolygon = Vec<TestPolygon>;

    fn make_point(&self, coordinates: Coordinates) -> Result<Self::Point> {
        validate(coordinates)
    }

    fn linestring_start(&mut self) -> Result<()> {
        self.step(BuildStep::LineStringStart)?;
        self.points.clear();
        Ok(())
    }

    fn linestring_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::LineStringAddLocation, coordinates)
    }

    fn linestring_finish(&mut self, num_points: usize) -> Result<Self::LineString> {
        self.step(BuildStep::LineStringFinish)?;
        check_point_count(num_points, self.points.len())?;
        Ok(std::mem::take(&mut self.points))
    }

    fn polygon_start(&mut self) -> Result<()> {
        self.step(BuildStep::PolygonStart)?;
        self.points.clear();
        Ok(())
    }

    fn polygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::PolygonAddLocation, coordinates)
    }

    fn polygon_finish(&mut self, num_points: usize) -> Result<Self::Polygon> {
        self.step(BuildStep::PolygonFinish)?;
        check_point_count(num_points, self.points.len())?;
        Ok(std::mem::take(&mut self.points))
    }

    fn multipolygon_start(&mut self) -> Result<()> {
        self.step(BuildStep::MultiPolygonStart)?;
        self.polygons.clear();
        Ok(())
    }

    fn multipolygon_polygon_start(&mut self) -> Result<()> {
        self.step(BuildStep::MultiPolygonPolygonStart)?;
        self.polygon = TestPolygon::default();
        Ok(())
    }

    fn multipolygon_polygon_finish(&mut self) -> Result<()> {
        self.step(BuildStep::MultiPolygonPolygonFinish)?;
        let polygon = std::mem::take(&mut self.polygon);
        self.polygons.push(polygon);
        Ok(())
    }

    fn multipolygon_outer_ring_start(&mut self) -> Result<()> {
        self.step(BuildStep::OuterRingStart)?;
        self.points.clear();
        Ok(())
    }

    fn multipolygon_outer_ring_finish(&mut self) -> Result<()> {
        self.step(BuildStep::OuterRingFinish)?;
        self.polygon.outer = std::mem::take(&mut self.points);
        Ok(())
    }

    fn multipolygon_inner_ring_start(&mut self) -> Result<()> {
        self.step(BuildStep::InnerRingStart)?;
        self.points.clear();
        Ok(())
    }

    fn multipolygon_inner_ring_finish(&mut self) -> Result<()> {
        self.step(BuildStep::InnerRingFinish)?;
        let ring = std::mem::take(&mut self.points);
        self.polygon.inners.push(ring);
        Ok(())
    }

    fn multipolygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::RingAddLocation, coordinates)
    }

    fn multipolygon_finish(&mut self) -> Result<Self::MultiPolygon> {
        self.step(BuildStep::MultiPolygonFinish)?;
        Ok(std::mem::take(&mut self.polygons))
    }
}

/// Builds a node list with ids starting from `first_id`.
pub fn node_list(first_id: ObjectId, coords: &[(f64, f64)]) -> NodeRefList {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(lon, lat))| NodeRef::new(first_id + i as ObjectId, Location::new(lon, lat)))
        .collect()
}

/// Coordinates the identity projection produces for the given longitude and latitude.
pub fn coords(points: &[(f64, f64)]) -> Vec<Coordinates> {
    points
        .iter()
        .map(|&(lon, lat)| {
            let location = Location::new(lon, lat);
            Coordinates::new(location.lon(), location.lat())
        })
        .collect()
}
