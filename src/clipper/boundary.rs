//! The four half-planes bounding the clip window.
//!
//! Each boundary is defined implicitly by a linear inequality on (x, y) and
//! exposes the two operations both clipping algorithms need: a signed
//! distance (positive inside) and the intersection of a segment with the
//! boundary's edge line. The algorithms iterate [`Boundary::ALL`] instead of
//! branching on window coordinates directly.

use crate::geometry::Point2D;
use crate::rect::Rect;

/// One of the four half-planes of an axis-aligned clip window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Left boundary: x >= window.min.x
    Left,
    /// Right boundary: x <= window.max.x
    Right,
    /// Bottom boundary: y >= window.min.y
    Bottom,
    /// Top boundary: y <= window.max.y
    Top,
}

impl Boundary {
    /// The fixed order polygon clipping passes over the boundaries.
    pub const ALL: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    /// Signed distance from `p` to this boundary's edge line.
    /// Zero or positive = inside the window half-plane (closed boundary).
    pub fn signed_distance(self, p: Point2D, window: &Rect) -> f32 {
        match self {
            Self::Left => p.x - window.min().x,
            Self::Right => window.max().x - p.x,
            Self::Bottom => p.y - window.min().y,
            Self::Top => window.max().y - p.y,
        }
    }

    /// Intersection of the segment `a -> b` with this boundary's edge line.
    ///
    /// The on-boundary coordinate is pinned exactly (not recomputed through
    /// interpolation), so a clipped endpoint's outcode bit is guaranteed to
    /// clear. Callers only invoke this when `a` and `b` straddle the edge,
    /// which makes the segment non-parallel to it and the division defined.
    pub fn intersect(self, a: Point2D, b: Point2D, window: &Rect) -> Point2D {
        match self {
            Self::Left => intersect_at_x(a, b, window.min().x),
            Self::Right => intersect_at_x(a, b, window.max().x),
            Self::Bottom => intersect_at_y(a, b, window.min().y),
            Self::Top => intersect_at_y(a, b, window.max().y),
        }
    }
}

fn intersect_at_x(a: Point2D, b: Point2D, x: f32) -> Point2D {
    let t = (x - a.x) / (b.x - a.x);
    Point2D::new(x, a.y + (b.y - a.y) * t)
}

fn intersect_at_y(a: Point2D, b: Point2D, y: f32) -> Point2D {
    let t = (y - a.y) / (b.y - a.y);
    Point2D::new(a.x + (b.x - a.x) * t, y)
}
