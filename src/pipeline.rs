//! The transform pipeline: clip, then map.
//!
//! A pipeline pass takes a snapshot of (scene, window, viewport), clips
//! every primitive against the window in world space, and maps every
//! surviving coordinate into the viewport. The result is a
//! [`RenderSnapshot`]: render-ready primitives annotated with clip status,
//! index-aligned with the scene's collections so derived state stays keyed
//! to the original user-entered geometry.
//!
//! The pipeline holds no state between passes. Window, viewport and scene
//! may all change between renders, so every pass recomputes everything from
//! scratch; scene sizes are small and the simplicity is worth more than
//! incremental updates.

use crate::clipper;
use crate::geometry::Point2D;
use crate::mapper::{MapError, Mapper};
use crate::rect::Rect;
use crate::scene::Scene;

/// An individual point after a pipeline pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappedPoint {
    device: Option<Point2D>,
}

impl MappedPoint {
    pub fn visible(&self) -> bool {
        self.device.is_some()
    }

    /// Device-space position, present only when the point is visible.
    pub fn device(&self) -> Option<Point2D> {
        self.device
    }
}

/// A line segment after a pipeline pass.
///
/// When the line survives, the endpoints lie on or inside the viewport and
/// are ordered as the user entered them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappedLine {
    endpoints: Option<(Point2D, Point2D)>,
}

impl MappedLine {
    pub fn completely_clipped(&self) -> bool {
        self.endpoints.is_none()
    }

    /// Clipped device-space endpoints, absent when completely clipped.
    pub fn endpoints(&self) -> Option<(Point2D, Point2D)> {
        self.endpoints
    }
}

/// A polygon after a pipeline pass: a fresh device-space vertex loop.
/// An empty list means the polygon lies entirely outside the window.
#[derive(Clone, Debug, PartialEq)]
pub struct MappedPolygon {
    vertices: Vec<Point2D>,
}

impl MappedPolygon {
    pub fn completely_clipped(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }
}

/// Render-ready output of one pipeline pass.
///
/// Collections are index-aligned with the scene the pass was run over. The
/// viewport rect rides along so a renderer can frame the display area
/// without re-deriving it.
#[derive(Clone, Debug)]
pub struct RenderSnapshot {
    points: Vec<MappedPoint>,
    lines: Vec<MappedLine>,
    polygons: Vec<MappedPolygon>,
    viewport: Rect,
}

impl RenderSnapshot {
    pub fn points(&self) -> &[MappedPoint] {
        &self.points
    }

    pub fn lines(&self) -> &[MappedLine] {
        &self.lines
    }

    pub fn polygons(&self) -> &[MappedPolygon] {
        &self.polygons
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }
}

/// Runs scenes through clip-then-map passes.
///
/// Stateless; a single instance can serve any number of passes over any
/// scenes. Callers serialize invocations (single-call-at-a-time), which is
/// trivially true in a single-threaded event loop.
#[derive(Debug, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Runs one full pass over `scene`.
    ///
    /// Fails with [`MapError::DegenerateWindow`] before any clipping work if
    /// the window has a zero extent; a failed pass produces no partial
    /// output.
    pub fn run(
        &self,
        scene: &Scene,
        window: &Rect,
        viewport: &Rect,
    ) -> Result<RenderSnapshot, MapError> {
        let mapper = Mapper::new(*window, *viewport)?;

        let points = scene
            .points()
            .iter()
            .map(|&p| MappedPoint {
                device: clipper::clip_point(p, window).then(|| mapper.map(p)),
            })
            .collect();

        let lines = scene
            .lines()
            .iter()
            .map(|line| MappedLine {
                endpoints: clipper::clip_line(line, window)
                    .map(|(a, b)| (mapper.map(a), mapper.map(b))),
            })
            .collect();

        let polygons = scene
            .polygons()
            .iter()
            .map(|polygon| MappedPolygon {
                vertices: clipper::clip_polygon(polygon, window)
                    .into_iter()
                    .map(|v| mapper.map(v))
                    .collect(),
            })
            .collect();

        Ok(RenderSnapshot {
            points,
            lines,
            polygons,
            viewport: *viewport,
        })
    }
}
