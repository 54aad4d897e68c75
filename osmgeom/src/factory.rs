//! See [`GeometryFactory`].

use osmgeom_types::{Area, AreaItem, Coordinates, Location, NodeRef, NodeRefList};

use crate::backend::GeometryBackend;
use crate::error::{EntityKind, GeometryError, Result};
use crate::projection::{IdentityProjection, Projection};
use crate::source::{NodeListSource, PointSource};

/// Which nodes of a node list are used for a linestring or a polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UseNodes {
    /// Skip a node if it has the same location as the node before it.
    #[default]
    Unique,
    /// Use every node.
    All,
}

/// Direction of the created linestring or polygon ring relative to the order of the nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same order as the nodes.
    #[default]
    Forward,
    /// Reverse order.
    Backward,
}

/// Builds geometries from OSM entities.
///
/// Every location is converted with the projection `P` and the resulting coordinates are fed into
/// the backend `B`, which produces the actual geometry values. When construction fails, the error
/// names the innermost entity that could not be converted:
///
/// ```
/// use osmgeom::backend::WktBackend;
/// use osmgeom::{Direction, GeometryFactory, UseNodes};
/// use osmgeom_types::{Location, NodeRef, Way};
///
/// let mut factory = GeometryFactory::new(WktBackend::default());
///
/// let way = Way::new(
///     17,
///     vec![
///         NodeRef::new(1, Location::new(1.0, 2.0)),
///         NodeRef::new(2, Location::new(1.0, 2.0)),
///         NodeRef::new(3, Location::new(3.5, 4.0)),
///     ],
/// );
/// let linestring = factory
///     .create_linestring(&way, UseNodes::Unique, Direction::Forward)
///     .unwrap();
/// assert_eq!(linestring, "LINESTRING(1 2,3.5 4)");
///
/// let short_way = Way::new(18, vec![NodeRef::new(1, Location::new(1.0, 2.0))]);
/// let error = factory
///     .create_linestring(&short_way, UseNodes::Unique, Direction::Forward)
///     .unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "need at least two points for linestring (way_id=18)"
/// );
/// ```
///
/// The backend keeps the state of the geometry under construction, so all the methods that build
/// something other than a point take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct GeometryFactory<B, P = IdentityProjection> {
    projection: P,
    backend: B,
}

impl<B: GeometryBackend> GeometryFactory<B, IdentityProjection> {
    /// Creates a new factory that keeps WGS84 coordinates unchanged.
    pub fn new(backend: B) -> Self {
        Self::with_projection(IdentityProjection, backend)
    }
}

impl<B: GeometryBackend, P: Projection> GeometryFactory<B, P> {
    /// Creates a new factory with the given projection.
    pub fn with_projection(projection: P, backend: B) -> Self {
        Self {
            projection,
            backend,
        }
    }

    /// Creates a new factory, constructing the backend from the EPSG code of the projection.
    ///
    /// ```
    /// use osmgeom::backend::WktBackend;
    /// use osmgeom::projection::WebMercator;
    /// use osmgeom::GeometryFactory;
    ///
    /// let factory = GeometryFactory::with_backend_fn(WebMercator, |srid| {
    ///     WktBackend::new(srid).with_precision(2).with_ewkt(true)
    /// });
    /// assert_eq!(factory.backend().srid(), 3857);
    /// ```
    pub fn with_backend_fn(projection: P, make_backend: impl FnOnce(i32) -> B) -> Self {
        let backend = make_backend(projection.epsg());
        Self::with_projection(projection, backend)
    }

    /// EPSG code of the coordinate system of created geometries.
    pub fn epsg(&self) -> i32 {
        self.projection.epsg()
    }

    /// Proj definition of the coordinate system of created geometries.
    pub fn proj_string(&self) -> String {
        self.projection.proj_string()
    }

    /// Projection used by the factory.
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Backend used by the factory.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the factory and returns its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Creates a point from a [`Location`], a [`Node`](osmgeom_types::Node) or a [`NodeRef`].
    ///
    /// Errors for nodes and node references name the node.
    pub fn create_point(&self, source: &impl PointSource) -> Result<B::Point> {
        self.make_point(source.location())
            .map_err(|e| e.with_entity_ref(source.entity()))
    }

    fn make_point(&self, location: Location) -> Result<B::Point> {
        let coordinates = self.projection.project(location)?;
        self.backend.make_point(coordinates)
    }

    /// Creates a linestring from a [`NodeRefList`] or a [`Way`](osmgeom_types::Way).
    ///
    /// Fails if fewer than two points remain after applying `use_nodes`.
    pub fn create_linestring(
        &mut self,
        source: &impl NodeListSource,
        use_nodes: UseNodes,
        direction: Direction,
    ) -> Result<B::LineString> {
        self.build_linestring(source.node_refs(), use_nodes, direction)
            .map_err(|e| e.with_entity_ref(source.entity()))
    }

    fn build_linestring(
        &mut self,
        nodes: &NodeRefList,
        use_nodes: UseNodes,
        direction: Direction,
    ) -> Result<B::LineString> {
        self.backend.linestring_start()?;
        let num_points = self.fill(nodes, use_nodes, direction, B::linestring_add_location)?;

        if num_points < 2 {
            return Err(GeometryError::insufficient_points(
                "need at least two points for linestring",
            ));
        }

        self.backend.linestring_finish(num_points)
    }

    /// Creates a polygon with a single ring from a [`NodeRefList`] or a
    /// [`Way`](osmgeom_types::Way).
    ///
    /// Fails if fewer than four points remain after applying `use_nodes`. The ring is not checked
    /// to be closed or valid otherwise.
    pub fn create_polygon(
        &mut self,
        source: &impl NodeListSource,
        use_nodes: UseNodes,
        direction: Direction,
    ) -> Result<B::Polygon> {
        self.build_polygon(source.node_refs(), use_nodes, direction)
            .map_err(|e| e.with_entity_ref(source.entity()))
    }

    fn build_polygon(
        &mut self,
        nodes: &NodeRefList,
        use_nodes: UseNodes,
        direction: Direction,
    ) -> Result<B::Polygon> {
        self.backend.polygon_start()?;
        let num_points = self.fill(nodes, use_nodes, direction, B::polygon_add_location)?;

        if num_points < 4 {
            return Err(GeometryError::insufficient_points(
                "need at least four points for polygon",
            ));
        }

        self.backend.polygon_finish(num_points)
    }

    /// Creates a multipolygon from an [`Area`].
    ///
    /// Every outer ring of the area starts a new polygon, inner rings are added to the polygon of
    /// the outer ring before them. Consecutive duplicate locations are always skipped. An area
    /// without rings is invalid; in that case the backend is not called at all.
    pub fn create_multipolygon(&mut self, area: &Area) -> Result<B::MultiPolygon> {
        self.build_multipolygon(area)
            .map_err(|e| e.with_entity(EntityKind::Area, area.id()))
    }

    fn build_multipolygon(&mut self, area: &Area) -> Result<B::MultiPolygon> {
        let mut num_polygons = 0;
        let mut num_rings = 0;

        for item in area.items() {
            let (ring, is_outer) = match item {
                AreaItem::OuterRing(ring) => (ring, true),
                AreaItem::InnerRing(ring) => (ring, false),
                AreaItem::Other => continue,
            };

            if num_rings == 0 {
                self.backend.multipolygon_start()?;
            }

            if is_outer {
                if num_polygons > 0 {
                    self.backend.multipolygon_polygon_finish()?;
                }
                self.backend.multipolygon_polygon_start()?;
                self.backend.multipolygon_outer_ring_start()?;
                self.fill_ring(ring)?;
                self.backend.multipolygon_outer_ring_finish()?;
                num_polygons += 1;
            } else {
                self.backend.multipolygon_inner_ring_start()?;
                self.fill_ring(ring)?;
                self.backend.multipolygon_inner_ring_finish()?;
            }

            num_rings += 1;
        }

        if num_rings == 0 {
            return Err(GeometryError::invalid_area());
        }

        log::trace!(
            "area {}: {num_polygons} polygons from {num_rings} rings",
            area.id()
        );

        self.backend.multipolygon_polygon_finish()?;
        self.backend.multipolygon_finish()
    }

    fn fill_ring(&mut self, ring: &NodeRefList) -> Result<usize> {
        self.fill(
            ring,
            UseNodes::Unique,
            Direction::Forward,
            B::multipolygon_add_location,
        )
    }

    fn fill(
        &mut self,
        nodes: &NodeRefList,
        use_nodes: UseNodes,
        direction: Direction,
        add: impl Fn(&mut B, Coordinates) -> Result<()>,
    ) -> Result<usize> {
        let projection = &self.projection;
        let backend = &mut self.backend;
        match direction {
            Direction::Forward => fill_points(nodes.iter(), use_nodes, projection, backend, add),
            Direction::Backward => {
                fill_points(nodes.iter().rev(), use_nodes, projection, backend, add)
            }
        }
    }
}

/// Projects the locations of the nodes and passes them to `add`. Returns the number of added
/// points.
///
/// With [`UseNodes::Unique`] a node is skipped if its location equals the location of the
/// previously added node. Only the immediate predecessor is compared.
fn fill_points<'a, B, P>(
    node_refs: impl Iterator<Item = &'a NodeRef>,
    use_nodes: UseNodes,
    projection: &P,
    backend: &mut B,
    add: impl Fn(&mut B, Coordinates) -> Result<()>,
) -> Result<usize>
where
    P: Projection,
{
    let mut num_points = 0;
    let mut last_location = None;

    for node_ref in node_refs {
        let location = node_ref.location();
        if use_nodes == UseNodes::Unique && last_location == Some(location) {
            continue;
        }
        last_location = Some(location);

        projection
            .project(location)
            .and_then(|coordinates| add(backend, coordinates))
            .map_err(|e| e.with_entity(EntityKind::Node, node_ref.id()))?;
        num_points += 1;
    }

    Ok(num_points)
}
