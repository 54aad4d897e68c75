//! Error type used by the crate.

use std::fmt::{Display, Formatter};

use osmgeom_types::ObjectId;
use thiserror::Error;

/// Kind of the OSM entity a [`GeometryError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Node.
    Node,
    /// Way.
    Way,
    /// Area.
    Area,
}

impl EntityKind {
    /// Lowercase name of the entity kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Node => "node",
            EntityKind::Way => "way",
            EntityKind::Area => "area",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the entity a geometry could not be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Kind of the entity.
    pub kind: EntityKind,
    /// Id of the entity.
    pub id: ObjectId,
}

/// What went wrong when building a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum GeometryErrorKind {
    /// Too few points for a linestring or a polygon.
    InsufficientPoints,
    /// Area without any rings.
    InvalidArea,
    /// Location that cannot be projected or represented.
    InvalidLocation,
    /// Backend methods called in an order the construction protocol does not allow.
    Protocol,
    /// Any other error raised by a backend or a projection.
    Other,
}

/// Error building a geometry.
///
/// When the error passes through the construction of an enclosing entity, the identity of that
/// entity is attached to it (see [`GeometryError::attach`]). Only the first attachment is kept, so
/// the error always names the innermost entity that failed: a way with a broken node reports the
/// node id, not the way id.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}{}", entity_suffix(.entity))]
pub struct GeometryError {
    kind: GeometryErrorKind,
    message: String,
    entity: Option<EntityRef>,
}

fn entity_suffix(entity: &Option<EntityRef>) -> String {
    match entity {
        Some(EntityRef { kind, id }) => format!(" ({kind}_id={id})"),
        None => String::new(),
    }
}

impl GeometryError {
    /// Creates a new error without entity information.
    pub fn new(kind: GeometryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            entity: None,
        }
    }

    pub(crate) fn insufficient_points(message: &str) -> Self {
        Self::new(GeometryErrorKind::InsufficientPoints, message)
    }

    pub(crate) fn invalid_area() -> Self {
        Self::new(GeometryErrorKind::InvalidArea, "invalid area")
    }

    /// Error for a location or coordinates that cannot be used.
    pub fn invalid_location() -> Self {
        Self::new(GeometryErrorKind::InvalidLocation, "invalid location")
    }

    /// Kind of the error.
    pub fn kind(&self) -> GeometryErrorKind {
        self.kind
    }

    /// Message without entity information.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Entity the error was attached to, if any.
    pub fn entity(&self) -> Option<EntityRef> {
        self.entity
    }

    /// Id of the entity the error was attached to, if any.
    pub fn id(&self) -> Option<ObjectId> {
        self.entity.map(|e| e.id)
    }

    /// Attaches the entity to the error, unless the error already refers to an entity.
    pub fn attach(&mut self, kind: EntityKind, id: ObjectId) {
        if self.entity.is_none() {
            self.entity = Some(EntityRef { kind, id });
        }
    }

    /// Same as [`GeometryError::attach`], but consumes and returns the error. Handy in `map_err`.
    pub fn with_entity(mut self, kind: EntityKind, id: ObjectId) -> Self {
        self.attach(kind, id);
        self
    }

    pub(crate) fn with_entity_ref(self, entity: Option<EntityRef>) -> Self {
        match entity {
            Some(EntityRef { kind, id }) => self.with_entity(kind, id),
            None => self,
        }
    }
}

/// Result with [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
