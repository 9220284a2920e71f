//! Window-to-viewport coordinate mapping.
//!
//! The [`Mapper`] carries a validated (window, viewport) pair and maps world
//! points into device points by independent per-axis linear interpolation.
//! The y axis is inverted in the process: world space has y increasing
//! upward, device space has y increasing downward. That inversion is a fixed
//! policy of the mapper, not an option.

use thiserror::Error;

use crate::geometry::Point2D;
use crate::rect::Rect;

/// Errors produced when constructing a [`Mapper`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MapError {
    /// The window has zero width or height, so the per-axis division is
    /// undefined. Surfaced as an error instead of letting NaN/Inf leak into
    /// device coordinates.
    #[error("degenerate window ({width} x {height}): both extents must be non-zero")]
    DegenerateWindow { width: f32, height: f32 },
}

/// Maps world-space points inside a window onto device-space points inside a
/// viewport.
///
/// A `Mapper` is a pure function of the (window, viewport) pair it was built
/// from: mapping the same point twice yields the same result, and no state
/// accumulates between calls. Degeneracy is rejected at construction, so
/// [`Mapper::map`] itself is total.
#[derive(Debug, Clone, Copy)]
pub struct Mapper {
    window: Rect,
    viewport: Rect,
}

impl Mapper {
    /// Builds a mapper for the given window and viewport.
    ///
    /// Fails with [`MapError::DegenerateWindow`] if the window has zero
    /// width or height.
    pub fn new(window: Rect, viewport: Rect) -> Result<Self, MapError> {
        if window.is_degenerate() {
            return Err(MapError::DegenerateWindow {
                width: window.width(),
                height: window.height(),
            });
        }
        Ok(Self { window, viewport })
    }

    pub fn window(&self) -> Rect {
        self.window
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Maps a world-space point into device space.
    ///
    /// Points outside the window extrapolate linearly; clip first if only
    /// in-window geometry should reach the device.
    pub fn map(&self, p: Point2D) -> Point2D {
        let w = self.window;
        let v = self.viewport;

        let x = (p.x - w.min().x) / w.width() * v.width() + v.min().x;
        // World y-up vs device y-down: interpolate from the window's top edge.
        let y = (p.y - w.max().y) / (w.min().y - w.max().y) * v.height() + v.min().y;
        Point2D::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window() -> Rect {
        Rect::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 100.0))
    }

    fn viewport() -> Rect {
        Rect::new(Point2D::new(0.0, 0.0), Point2D::new(200.0, 200.0))
    }

    #[test]
    fn corners_map_with_y_inversion() {
        let mapper = Mapper::new(window(), viewport()).unwrap();

        // Window min (bottom-left in world space) lands at the viewport's
        // bottom-left in device space, which is (min.x, max.y).
        let bottom_left = mapper.map(window().min());
        assert_eq!(bottom_left, Point2D::new(0.0, 200.0));

        let top_right = mapper.map(window().max());
        assert_eq!(top_right, Point2D::new(200.0, 0.0));
    }

    #[test]
    fn interior_point_scales_per_axis() {
        let mapper = Mapper::new(window(), viewport()).unwrap();
        let mapped = mapper.map(Point2D::new(50.0, 50.0));
        assert_relative_eq!(mapped.x, 100.0);
        assert_relative_eq!(mapped.y, 100.0);
    }

    #[test]
    fn offset_viewport_is_honored() {
        let viewport = Rect::new(Point2D::new(10.0, 20.0), Point2D::new(110.0, 70.0));
        let mapper = Mapper::new(window(), viewport).unwrap();
        assert_eq!(mapper.map(window().min()), Point2D::new(10.0, 70.0));
        assert_eq!(mapper.map(window().max()), Point2D::new(110.0, 20.0));
    }

    #[test]
    fn zero_width_window_is_rejected() {
        let flat = Rect::new(Point2D::new(5.0, 0.0), Point2D::new(5.0, 100.0));
        let err = Mapper::new(flat, viewport()).unwrap_err();
        assert_eq!(
            err,
            MapError::DegenerateWindow {
                width: 0.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn zero_height_window_is_rejected() {
        let flat = Rect::new(Point2D::new(0.0, 42.0), Point2D::new(100.0, 42.0));
        assert!(Mapper::new(flat, viewport()).is_err());
    }

    #[test]
    fn mapping_is_deterministic() {
        let mapper = Mapper::new(window(), viewport()).unwrap();
        let p = Point2D::new(33.3, 66.6);
        assert_eq!(mapper.map(p), mapper.map(p));
    }

    #[test]
    fn out_of_window_points_extrapolate() {
        let mapper = Mapper::new(window(), viewport()).unwrap();
        let mapped = mapper.map(Point2D::new(-10.0, 50.0));
        assert_relative_eq!(mapped.x, -20.0);
        assert_relative_eq!(mapped.y, 100.0);
    }
}
