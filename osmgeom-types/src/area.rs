#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{NodeRefList, ObjectId};

/// Member of an [`Area`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum AreaItem {
    /// Outer ring. Starts a new polygon.
    OuterRing(NodeRefList),
    /// Inner ring (hole) of the polygon started by the preceding outer ring.
    InnerRing(NodeRefList),
    /// Anything else stored in the area (tags etc). Ignored by geometry construction.
    Other,
}

/// Area assembled from a closed way or a multipolygon relation.
///
/// Items are ordered: every outer ring is followed by the inner rings that belong to it.
///
/// Area ids encode the object they were created from: a way with id `n` gives an area with id
/// `2 * n`, a relation gives `2 * n + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Area {
    id: ObjectId,
    items: Vec<AreaItem>,
}

impl Area {
    /// Creates a new area.
    pub fn new(id: ObjectId, items: Vec<AreaItem>) -> Self {
        Self { id, items }
    }

    /// Creates an area for a closed way.
    ///
    /// Returns `None` if the area id does not fit into [`ObjectId`], i.e. for way ids beyond
    /// `ObjectId::MAX / 2`.
    pub fn from_way(way_id: ObjectId, items: Vec<AreaItem>) -> Option<Self> {
        let id = way_id.checked_mul(2)?;
        Some(Self::new(id, items))
    }

    /// Creates an area for a multipolygon relation.
    ///
    /// Returns `None` if the area id does not fit into [`ObjectId`], i.e. for relation ids beyond
    /// `ObjectId::MAX / 2`.
    pub fn from_relation(relation_id: ObjectId, items: Vec<AreaItem>) -> Option<Self> {
        let id = relation_id.checked_mul(2)?.checked_add(1)?;
        Some(Self::new(id, items))
    }

    /// Id of the area.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Whether the area was created from a way (as opposed to a relation).
    pub fn is_from_way(&self) -> bool {
        self.id % 2 == 0
    }

    /// Id of the way or relation this area was created from.
    pub fn orig_id(&self) -> ObjectId {
        self.id.div_euclid(2)
    }

    /// Items of the area in order.
    pub fn items(&self) -> &[AreaItem] {
        &self.items
    }

    /// Number of outer and inner rings.
    pub fn num_rings(&self) -> (usize, usize) {
        self.items
            .iter()
            .fold((0, 0), |(outer, inner), item| match item {
                AreaItem::OuterRing(_) => (outer + 1, inner),
                AreaItem::InnerRing(_) => (outer, inner + 1),
                AreaItem::Other => (outer, inner),
            })
    }

    /// An area is a multipolygon if it has more than one outer ring.
    pub fn is_multipolygon(&self) -> bool {
        self.num_rings().0 > 1
    }
}
