use std::fmt::{Display, Formatter};

use crate::error::{GeometryError, GeometryErrorKind, Result};

/// State of a geometry backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BuildState {
    /// No geometry is under construction.
    #[default]
    Idle,
    /// Linestring is open.
    LineString,
    /// Polygon is open.
    Polygon,
    /// Multipolygon is open, no polygon inside it is open.
    MultiPolygon,
    /// Polygon inside a multipolygon is open and waits for its outer ring.
    PolygonOpen,
    /// Outer ring is open.
    OuterRing,
    /// Outer ring of the current polygon is finished. Inner rings can follow.
    PolygonRings,
    /// Inner ring is open.
    InnerRing,
}

impl BuildState {
    /// State after the `step`, or `None` if the step is not allowed in this state.
    pub fn next(self, step: BuildStep) -> Option<BuildState> {
        use BuildState as St;
        use BuildStep as S;

        let next = match (self, step) {
            (_, S::LineStringStart) => St::LineString,
            (_, S::PolygonStart) => St::Polygon,
            (_, S::MultiPolygonStart) => St::MultiPolygon,

            (St::LineString, S::LineStringAddLocation) => St::LineString,
            (St::LineString, S::LineStringFinish) => St::Idle,

            (St::Polygon, S::PolygonAddLocation) => St::Polygon,
            (St::Polygon, S::PolygonFinish) => St::Idle,

            (St::MultiPolygon, S::MultiPolygonPolygonStart) => St::PolygonOpen,
            (St::PolygonOpen, S::OuterRingStart) => St::OuterRing,
            (St::OuterRing, S::RingAddLocation) => St::OuterRing,
            (St::OuterRing, S::OuterRingFinish) => St::PolygonRings,
            (St::PolygonRings, S::InnerRingStart) => St::InnerRing,
            (St::InnerRing, S::RingAddLocation) => St::InnerRing,
            (St::InnerRing, S::InnerRingFinish) => St::PolygonRings,
            (St::PolygonRings, S::MultiPolygonPolygonFinish) => St::MultiPolygon,
            (St::MultiPolygon, S::MultiPolygonFinish) => St::Idle,

            _ => return None,
        };

        Some(next)
    }
}

impl Display for BuildState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuildState::Idle => "idle",
            BuildState::LineString => "building linestring",
            BuildState::Polygon => "building polygon",
            BuildState::MultiPolygon => "building multipolygon",
            BuildState::PolygonOpen => "building multipolygon part",
            BuildState::OuterRing => "building outer ring",
            BuildState::PolygonRings => "building multipolygon part rings",
            BuildState::InnerRing => "building inner ring",
        };
        f.write_str(name)
    }
}

/// Call made to a geometry backend.
///
/// Every step corresponds to one method of [`GeometryBackend`](super::GeometryBackend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStep {
    /// `linestring_start`
    LineStringStart,
    /// `linestring_add_location`
    LineStringAddLocation,
    /// `linestring_finish`
    LineStringFinish,
    /// `polygon_start`
    PolygonStart,
    /// `polygon_add_location`
    PolygonAddLocation,
    /// `polygon_finish`
    PolygonFinish,
    /// `multipolygon_start`
    MultiPolygonStart,
    /// `multipolygon_polygon_start`
    MultiPolygonPolygonStart,
    /// `multipolygon_outer_ring_start`
    OuterRingStart,
    /// `multipolygon_outer_ring_finish`
    OuterRingFinish,
    /// `multipolygon_inner_ring_start`
    InnerRingStart,
    /// `multipolygon_inner_ring_finish`
    InnerRingFinish,
    /// `multipolygon_add_location`
    RingAddLocation,
    /// `multipolygon_polygon_finish`
    MultiPolygonPolygonFinish,
    /// `multipolygon_finish`
    MultiPolygonFinish,
}

impl BuildStep {
    /// Whether the step starts a new top level geometry.
    pub fn is_start(&self) -> bool {
        matches!(
            self,
            BuildStep::LineStringStart | BuildStep::PolygonStart | BuildStep::MultiPolygonStart
        )
    }

    /// Name of the backend method the step corresponds to.
    pub fn method_name(&self) -> &'static str {
        match self {
            BuildStep::LineStringStart => "linestring_start",
            BuildStep::LineStringAddLocation => "linestring_add_location",
            BuildStep::LineStringFinish => "linestring_finish",
            BuildStep::PolygonStart => "polygon_start",
            BuildStep::PolygonAddLocation => "polygon_add_location",
            BuildStep::PolygonFinish => "polygon_finish",
            BuildStep::MultiPolygonStart => "multipolygon_start",
            BuildStep::MultiPolygonPolygonStart => "multipolygon_polygon_start",
            BuildStep::OuterRingStart => "multipolygon_outer_ring_start",
            BuildStep::OuterRingFinish => "multipolygon_outer_ring_finish",
            BuildStep::InnerRingStart => "multipolygon_inner_ring_start",
            BuildStep::InnerRingFinish => "multipolygon_inner_ring_finish",
            BuildStep::RingAddLocation => "multipolygon_add_location",
            BuildStep::MultiPolygonPolygonFinish => "multipolygon_polygon_finish",
            BuildStep::MultiPolygonFinish => "multipolygon_finish",
        }
    }
}

impl Display for BuildStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Tracks the calls made to a backend and rejects the ones that break the construction protocol.
#[derive(Debug, Clone, Default)]
pub struct BuildProtocol {
    state: BuildState,
}

impl BuildProtocol {
    /// Creates a new tracker in the [`BuildState::Idle`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Moves to the state after the `step`. Returns an error and keeps the state unchanged if the
    /// step is not allowed.
    pub fn advance(&mut self, step: BuildStep) -> Result<()> {
        let Some(next) = self.state.next(step) else {
            return Err(GeometryError::new(
                GeometryErrorKind::Protocol,
                format!("unexpected {step} while {}", self.state),
            ));
        };

        if step.is_start() && self.state != BuildState::Idle {
            log::debug!("{step} discards unfinished geometry ({})", self.state);
        }

        log::trace!("{step}: {} -> {next}", self.state);
        self.state = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(steps: &[BuildStep]) -> Result<BuildState> {
        let mut protocol = BuildProtocol::new();
        for step in steps {
            protocol.advance(*step)?;
        }
        Ok(protocol.state())
    }

    #[test]
    fn linestring_sequence() {
        use BuildStep::*;
        let state = run(&[
            LineStringStart,
            LineStringAddLocation,
            LineStringAddLocation,
            LineStringFinish,
        ])
        .expect("valid sequence");
        assert_eq!(state, BuildState::Idle);
    }

    #[test]
    fn multipolygon_sequence() {
        use BuildStep::*;
        let state = run(&[
            MultiPolygonStart,
            MultiPolygonPolygonStart,
            OuterRingStart,
            RingAddLocation,
            OuterRingFinish,
            InnerRingStart,
            RingAddLocation,
            InnerRingFinish,
            InnerRingStart,
            InnerRingFinish,
            MultiPolygonPolygonFinish,
            MultiPolygonPolygonStart,
            OuterRingStart,
            OuterRingFinish,
            MultiPolygonPolygonFinish,
            MultiPolygonFinish,
        ])
        .expect("valid sequence");
        assert_eq!(state, BuildState::Idle);
    }

    #[test]
    fn rejects_out_of_order_calls() {
        use BuildStep::*;
        let error = run(&[MultiPolygonStart, OuterRingStart]).expect_err("no polygon is open");
        assert_eq!(error.kind(), GeometryErrorKind::Protocol);
        assert_eq!(
            error.to_string(),
            "unexpected multipolygon_outer_ring_start while building multipolygon"
        );

        assert!(run(&[LineStringAddLocation]).is_err());
        assert!(run(&[PolygonStart, LineStringFinish]).is_err());
        assert!(run(&[MultiPolygonStart, MultiPolygonPolygonStart, InnerRingStart]).is_err());
        assert!(run(&[
            MultiPolygonStart,
            MultiPolygonPolygonStart,
            OuterRingStart,
            MultiPolygonPolygonFinish
        ])
        .is_err());
        assert!(run(&[MultiPolygonStart, MultiPolygonPolygonStart, MultiPolygonFinish]).is_err());
    }

    #[test]
    fn failed_step_keeps_state() {
        let mut protocol = BuildProtocol::new();
        protocol
            .advance(BuildStep::PolygonStart)
            .expect("start is always allowed");
        assert!(protocol.advance(BuildStep::RingAddLocation).is_err());
        assert_eq!(protocol.state(), BuildState::Polygon);
    }

    #[test]
    fn start_discards_unfinished_geometry() {
        use BuildStep::*;
        let state = run(&[
            MultiPolygonStart,
            MultiPolygonPolygonStart,
            OuterRingStart,
            LineStringStart,
        ])
        .expect("start is always allowed");
        assert_eq!(state, BuildState::LineString);
    }
}
