//! Cohen-Sutherland line clipping.
//!
//! Each endpoint gets a 4-bit [`Outcode`] recording which window half-planes
//! it violates. Both codes empty means the segment is trivially inside; a
//! non-empty intersection of the codes means both endpoints share a violated
//! half-plane and the segment is trivially outside. Everything else clips
//! one violated boundary at a time, at most once per boundary.

use bitflags::bitflags;

use super::boundary::Boundary;
use crate::geometry::{Line, Point2D};
use crate::rect::Rect;

bitflags! {
    /// Region code of a point relative to the window's four half-planes.
    ///
    /// A set bit marks a violated half-plane. Coordinates exactly on a
    /// boundary set no bit: the boundary is closed, consistent with point
    /// clipping.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const TOP = 1 << 3;
    }
}

impl Outcode {
    /// Computes the region code of `p` relative to `window`.
    pub fn of(p: Point2D, window: &Rect) -> Self {
        let mut code = Outcode::empty();
        for boundary in Boundary::ALL {
            if boundary.signed_distance(p, window) < 0.0 {
                code |= Outcode::from_boundary(boundary);
            }
        }
        code
    }

    fn from_boundary(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Left => Outcode::LEFT,
            Boundary::Right => Outcode::RIGHT,
            Boundary::Bottom => Outcode::BOTTOM,
            Boundary::Top => Outcode::TOP,
        }
    }

    /// First violated boundary in [`Boundary::ALL`] order.
    /// Only meaningful for non-empty codes; callers check emptiness first.
    fn violated_boundary(self) -> Boundary {
        if self.contains(Outcode::LEFT) {
            Boundary::Left
        } else if self.contains(Outcode::RIGHT) {
            Boundary::Right
        } else if self.contains(Outcode::BOTTOM) {
            Boundary::Bottom
        } else {
            Boundary::Top
        }
    }
}

/// Clips `line` against `window`.
///
/// Returns the surviving segment's endpoints in window space, ordered as the
/// original endpoints were, or `None` if the segment is completely clipped.
/// A segment that only touches the boundary survives at the touching point.
pub fn clip_line(line: &Line, window: &Rect) -> Option<(Point2D, Point2D)> {
    let mut p1 = line.p1;
    let mut p2 = line.p2;
    let mut code1 = Outcode::of(p1, window);
    let mut code2 = Outcode::of(p2, window);

    // Each pass clips exactly one violated half-plane off one endpoint, so
    // this terminates within four iterations.
    loop {
        if (code1 | code2).is_empty() {
            return Some((p1, p2));
        }
        if !(code1 & code2).is_empty() {
            return None;
        }

        if !code1.is_empty() {
            p1 = code1.violated_boundary().intersect(p1, p2, window);
            code1 = Outcode::of(p1, window);
        } else {
            p2 = code2.violated_boundary().intersect(p1, p2, window);
            code2 = Outcode::of(p2, window);
        }
    }
}
