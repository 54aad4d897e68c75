use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Location, ObjectId};

/// OSM node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Node {
    id: ObjectId,
    location: Location,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: ObjectId, location: Location) -> Self {
        Self { id, location }
    }

    /// Id of the node.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Location of the node.
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Reference to a node from a way or a ring, together with the location of the referenced node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct NodeRef {
    id: ObjectId,
    location: Location,
}

impl NodeRef {
    /// Creates a new node reference.
    pub fn new(id: ObjectId, location: Location) -> Self {
        Self { id, location }
    }

    /// Id of the referenced node.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Location of the referenced node.
    pub fn location(&self) -> Location {
        self.location
    }
}

impl From<&Node> for NodeRef {
    fn from(node: &Node) -> Self {
        Self::new(node.id(), node.location())
    }
}

/// Ordered list of node references.
///
/// Dereferences into a slice, so it can be traversed in both directions with `iter()` and
/// `iter().rev()` without copying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct NodeRefList {
    node_refs: Vec<NodeRef>,
}

impl NodeRefList {
    /// Creates a new list.
    pub fn new(node_refs: Vec<NodeRef>) -> Self {
        Self { node_refs }
    }

    /// A list is closed when it has at least one node and its first and last nodes share the same
    /// location.
    pub fn is_closed(&self) -> bool {
        match (self.node_refs.first(), self.node_refs.last()) {
            (Some(first), Some(last)) => first.location() == last.location(),
            _ => false,
        }
    }

    /// Returns true if all the locations of the nodes are defined.
    pub fn has_locations(&self) -> bool {
        self.node_refs.iter().all(|n| n.location().is_defined())
    }
}

impl Deref for NodeRefList {
    type Target = [NodeRef];

    fn deref(&self) -> &Self::Target {
        &self.node_refs
    }
}

impl From<Vec<NodeRef>> for NodeRefList {
    fn from(node_refs: Vec<NodeRef>) -> Self {
        Self { node_refs }
    }
}

impl FromIterator<NodeRef> for NodeRefList {
    fn from_iter<T: IntoIterator<Item = NodeRef>>(iter: T) -> Self {
        Self {
            node_refs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NodeRefList {
    type Item = &'a NodeRef;
    type IntoIter = std::slice::Iter<'a, NodeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.node_refs.iter()
    }
}

/// OSM way: an ordered list of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Way {
    id: ObjectId,
    nodes: NodeRefList,
}

impl Way {
    /// Creates a new way.
    pub fn new(id: ObjectId, nodes: impl Into<NodeRefList>) -> Self {
        Self {
            id,
            nodes: nodes.into(),
        }
    }

    /// Id of the way.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Nodes of the way.
    pub fn nodes(&self) -> &NodeRefList {
        &self.nodes
    }

    /// See [`NodeRefList::is_closed`].
    pub fn is_closed(&self) -> bool {
        self.nodes.is_closed()
    }
}
