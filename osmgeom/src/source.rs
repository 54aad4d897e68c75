//! Entities geometries can be built from.

use osmgeom_types::{Location, Node, NodeRef, NodeRefList, Way};

use crate::error::{EntityKind, EntityRef};

/// Something that has a single location: a [`Location`] itself, a [`Node`] or a [`NodeRef`].
pub trait PointSource {
    /// Location of the point.
    fn location(&self) -> Location;

    /// Entity errors are attributed to.
    fn entity(&self) -> Option<EntityRef> {
        None
    }
}

impl PointSource for Location {
    fn location(&self) -> Location {
        *self
    }
}

impl PointSource for Node {
    fn location(&self) -> Location {
        Node::location(self)
    }

    fn entity(&self) -> Option<EntityRef> {
        Some(EntityRef {
            kind: EntityKind::Node,
            id: self.id(),
        })
    }
}

impl PointSource for NodeRef {
    fn location(&self) -> Location {
        NodeRef::location(self)
    }

    fn entity(&self) -> Option<EntityRef> {
        Some(EntityRef {
            kind: EntityKind::Node,
            id: self.id(),
        })
    }
}

/// Something that has an ordered list of nodes: a [`NodeRefList`] or a [`Way`].
pub trait NodeListSource {
    /// Nodes in order.
    fn node_refs(&self) -> &NodeRefList;

    /// Entity errors are attributed to.
    fn entity(&self) -> Option<EntityRef> {
        None
    }
}

impl NodeListSource for NodeRefList {
    fn node_refs(&self) -> &NodeRefList {
        self
    }
}

impl NodeListSource for Way {
    fn node_refs(&self) -> &NodeRefList {
        self.nodes()
    }

    fn entity(&self) -> Option<EntityRef> {
        Some(EntityRef {
            kind: EntityKind::Way,
            id: self.id(),
        })
    }
}
