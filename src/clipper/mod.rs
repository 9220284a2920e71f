//! Clipping against the world-space window.
//!
//! All clipping runs in window space, before the surviving geometry is
//! mapped into the viewport (clipping first is cheaper and keeps the clip
//! region axis-aligned). One algorithm per primitive type:
//!
//! - points: closed-interval containment ([`clip_point`])
//! - lines: Cohen-Sutherland outcode clipping ([`line::clip_line`])
//! - polygons: Sutherland-Hodgman re-vertexing ([`polygon::clip_polygon`])
//!
//! Coordinates exactly on a window boundary are treated as inside by all
//! three, so primitives sharing an edge never disagree about visibility.

pub mod boundary;
pub mod line;
pub mod polygon;

pub use boundary::Boundary;
pub use line::{clip_line, Outcode};
pub use polygon::clip_polygon;

use crate::geometry::Point2D;
use crate::rect::Rect;

/// Point clipping: visible iff on or inside the window boundary.
///
/// Invisible points are excluded from rendering but stay in the scene, so
/// the user can edit them back into view later.
pub fn clip_point(p: Point2D, window: &Rect) -> bool {
    window.contains(p)
}
