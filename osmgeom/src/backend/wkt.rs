use osmgeom_types::Coordinates;

use crate::backend::{check_point_count, validate, BuildProtocol, BuildStep, GeometryBackend};
use crate::error::Result;

/// Backend producing geometries in the Well-Known Text format.
///
/// ```
/// use osmgeom::backend::{GeometryBackend, WktBackend};
/// use osmgeom_types::Coordinates;
///
/// let backend = WktBackend::new(4326).with_ewkt(true);
/// let point = backend.make_point(Coordinates::new(3.2, 4.25)).unwrap();
/// assert_eq!(point, "SRID=4326;POINT(3.2 4.25)");
/// ```
#[derive(Debug, Clone)]
pub struct WktBackend {
    protocol: BuildProtocol,
    srid: i32,
    precision: usize,
    ewkt: bool,
    points: Vec<String>,
    rings: Vec<String>,
    polygons: Vec<String>,
}

impl WktBackend {
    /// Number of decimal digits written by default. Matches the precision of OSM locations.
    pub const DEFAULT_PRECISION: usize = 7;

    /// Creates a new backend for the coordinate system with the given EPSG code.
    pub fn new(srid: i32) -> Self {
        Self {
            protocol: BuildProtocol::new(),
            srid,
            precision: Self::DEFAULT_PRECISION,
            ewkt: false,
            points: vec![],
            rings: vec![],
            polygons: vec![],
        }
    }

    /// Sets the maximum number of decimal digits of the written coordinates. Trailing zeros are
    /// always omitted.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// If set to true, geometries are prefixed with `SRID=<srid>;` (PostGIS extended WKT).
    pub fn with_ewkt(mut self, ewkt: bool) -> Self {
        self.ewkt = ewkt;
        self
    }

    /// EPSG code of the coordinate system.
    pub fn srid(&self) -> i32 {
        self.srid
    }

    fn prefix(&self) -> String {
        if self.ewkt {
            format!("SRID={};", self.srid)
        } else {
            String::new()
        }
    }

    fn format_point(&self, coordinates: Coordinates) -> Result<String> {
        let Coordinates { x, y } = validate(coordinates)?;
        Ok(format!(
            "{} {}",
            format_coordinate(x, self.precision),
            format_coordinate(y, self.precision)
        ))
    }

    fn add(&mut self, step: BuildStep, coordinates: Coordinates) -> Result<()> {
        self.protocol.advance(step)?;
        let point = self.format_point(coordinates)?;
        self.points.push(point);
        Ok(())
    }

    fn take_ring(&mut self) -> String {
        format!("({})", std::mem::take(&mut self.points).join(","))
    }
}

impl Default for WktBackend {
    fn default() -> Self {
        Self::new(4326)
    }
}

fn format_coordinate(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl GeometryBackend for WktBackend {
    type Point = String;
    type LineString = String;
    type Polygon = String;
    type MultiPolygon = String;

    fn make_point(&self, coordinates: Coordinates) -> Result<Self::Point> {
        Ok(format!(
            "{}POINT({})",
            self.prefix(),
            self.format_point(coordinates)?
        ))
    }

    fn linestring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::LineStringStart)?;
        self.points.clear();
        Ok(())
    }

    fn linestring_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::LineStringAddLocation, coordinates)
    }

    fn linestring_finish(&mut self, num_points: usize) -> Result<Self::LineString> {
        check_point_count(num_points, self.points.len())?;
        self.protocol.advance(BuildStep::LineStringFinish)?;
        Ok(format!("{}LINESTRING{}", self.prefix(), self.take_ring()))
    }

    fn polygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::PolygonStart)?;
        self.points.clear();
        Ok(())
    }

    fn polygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::PolygonAddLocation, coordinates)
    }

    fn polygon_finish(&mut self, num_points: usize) -> Result<Self::Polygon> {
        check_point_count(num_points, self.points.len())?;
        self.protocol.advance(BuildStep::PolygonFinish)?;
        Ok(format!("{}POLYGON({})", self.prefix(), self.take_ring()))
    }

    fn multipolygon_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::MultiPolygonStart)?;
        self.points.clear();
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
        let polygon = format!("({})", std::mem::take(&mut self.rings).join(","));
        self.polygons.push(polygon);
        Ok(())
    }

    fn multipolygon_outer_ring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::OuterRingStart)?;
        self.points.clear();
        Ok(())
    }

    fn multipolygon_outer_ring_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::OuterRingFinish)?;
        let ring = self.take_ring();
        self.rings.push(ring);
        Ok(())
    }

    fn multipolygon_inner_ring_start(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::InnerRingStart)?;
        self.points.clear();
        Ok(())
    }

    fn multipolygon_inner_ring_finish(&mut self) -> Result<()> {
        self.protocol.advance(BuildStep::InnerRingFinish)?;
        let ring = self.take_ring();
        self.rings.push(ring);
        Ok(())
    }

    fn multipolygon_add_location(&mut self, coordinates: Coordinates) -> Result<()> {
        self.add(BuildStep::RingAddLocation, coordinates)
    }

    fn multipolygon_finish(&mut self) -> Result<Self::MultiPolygon> {
        self.protocol.advance(BuildStep::MultiPolygonFinish)?;
        let polygons = std::mem::take(&mut self.polygons).join(",");
        Ok(format!("{}MULTIPOLYGON({polygons})", self.prefix()))
    }
}
