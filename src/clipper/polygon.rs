//! Sutherland-Hodgman polygon clipping.
//!
//! The polygon is clipped successively against each window half-plane; the
//! output vertex list of one pass is the input of the next. Clipping against
//! one half-plane at a time is only correct for convex clip regions, which
//! the window always is (axis-aligned rectangle).

use super::boundary::Boundary;
use crate::geometry::{Point2D, Polygon};
use crate::rect::Rect;

/// Clips `polygon` against `window`.
///
/// Returns the clipped polygon's vertex list in window space. Boundary
/// intersections are inserted and exterior vertices dropped, so the result
/// is a fresh vertex sequence, not a subset of the original. An empty result
/// means the polygon is entirely outside the window.
///
/// Inputs with fewer than 3 vertices cannot bound an area and clip to the
/// empty result, as does any intermediate pass that collapses below 3.
pub fn clip_polygon(polygon: &Polygon, window: &Rect) -> Vec<Point2D> {
    let mut vertices = polygon.vertices().to_vec();

    for boundary in Boundary::ALL {
        if vertices.len() < 3 {
            return Vec::new();
        }
        vertices = clip_against_boundary(&vertices, boundary, window);
    }

    if vertices.len() < 3 {
        return Vec::new();
    }
    vertices
}

/// One Sutherland-Hodgman pass: walk the vertex loop and keep what lies on
/// the inner side of `boundary`.
fn clip_against_boundary(vertices: &[Point2D], boundary: Boundary, window: &Rect) -> Vec<Point2D> {
    let mut output = Vec::with_capacity(vertices.len() + 1);

    for i in 0..vertices.len() {
        let current = vertices[i];
        let next = vertices[(i + 1) % vertices.len()];

        let current_inside = boundary.signed_distance(current, window) >= 0.0;
        let next_inside = boundary.signed_distance(next, window) >= 0.0;

        if current_inside {
            output.push(current);
            if !next_inside {
                // Leaving the half-plane: emit the crossing point.
                output.push(boundary.intersect(current, next, window));
            }
        } else if next_inside {
            // Entering the half-plane: emit the crossing point; `next`
            // itself is emitted on its own turn.
            output.push(boundary.intersect(current, next, window));
        }
        // Both outside: emit nothing.
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window() -> Rect {
        Rect::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 100.0))
    }

    fn triangle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Polygon {
        Polygon::new(vec![
            Point2D::new(a.0, a.1),
            Point2D::new(b.0, b.1),
            Point2D::new(c.0, c.1),
        ])
    }

    #[test]
    fn fully_inside_polygon_is_unchanged() {
        let polygon = triangle((10.0, 10.0), (90.0, 10.0), (50.0, 90.0));
        let clipped = clip_polygon(&polygon, &window());
        assert_eq!(clipped, polygon.vertices());
    }

    #[test]
    fn fully_outside_polygon_clips_to_empty() {
        // Entirely right of the window.
        let polygon = triangle((110.0, 10.0), (150.0, 10.0), (130.0, 90.0));
        assert!(clip_polygon(&polygon, &window()).is_empty());
    }

    #[test]
    fn degenerate_inputs_clip_to_empty() {
        let empty = Polygon::new(vec![]);
        assert!(clip_polygon(&empty, &window()).is_empty());

        let single = Polygon::new(vec![Point2D::new(50.0, 50.0)]);
        assert!(clip_polygon(&single, &window()).is_empty());

        let pair = Polygon::new(vec![Point2D::new(10.0, 10.0), Point2D::new(90.0, 90.0)]);
        assert!(clip_polygon(&pair, &window()).is_empty());
    }

    #[test]
    fn straddling_triangle_gains_boundary_vertices() {
        // Apex pokes out the top; the clipped shape is a quadrilateral.
        let polygon = triangle((40.0, 80.0), (60.0, 80.0), (50.0, 120.0));
        let clipped = clip_polygon(&polygon, &window());
        assert_eq!(clipped.len(), 4);
        for v in &clipped {
            assert!(window().contains(*v));
        }
        // Two of the vertices sit exactly on the top edge.
        let on_top = clipped.iter().filter(|v| v.y == 100.0).count();
        assert_eq!(on_top, 2);
    }

    #[test]
    fn intersections_interpolate_correctly() {
        // Right half of this square sticks out of the window.
        let polygon = Polygon::new(vec![
            Point2D::new(50.0, 20.0),
            Point2D::new(150.0, 20.0),
            Point2D::new(150.0, 80.0),
            Point2D::new(50.0, 80.0),
        ]);
        let clipped = clip_polygon(&polygon, &window());
        assert_eq!(clipped.len(), 4);
        assert_eq!(clipped[0], Point2D::new(50.0, 20.0));
        assert_eq!(clipped[1], Point2D::new(100.0, 20.0));
        assert_eq!(clipped[2], Point2D::new(100.0, 80.0));
        assert_eq!(clipped[3], Point2D::new(50.0, 80.0));
    }

    #[test]
    fn polygon_overlapping_a_corner() {
        // Square centered on the window's top-right corner.
        let polygon = Polygon::new(vec![
            Point2D::new(80.0, 80.0),
            Point2D::new(120.0, 80.0),
            Point2D::new(120.0, 120.0),
            Point2D::new(80.0, 120.0),
        ]);
        let clipped = clip_polygon(&polygon, &window());
        // The surviving region is the [80,100]x[80,100] square.
        assert_eq!(clipped.len(), 4);
        for v in &clipped {
            assert!(v.x >= 80.0 && v.x <= 100.0);
            assert!(v.y >= 80.0 && v.y <= 100.0);
        }
        assert!(clipped.contains(&Point2D::new(80.0, 80.0)));
        assert!(clipped.contains(&Point2D::new(100.0, 100.0)));
    }

    #[test]
    fn polygon_surrounding_the_window_clips_to_the_window() {
        let polygon = Polygon::new(vec![
            Point2D::new(-50.0, -50.0),
            Point2D::new(150.0, -50.0),
            Point2D::new(150.0, 150.0),
            Point2D::new(-50.0, 150.0),
        ]);
        let clipped = clip_polygon(&polygon, &window());
        assert_eq!(clipped.len(), 4);
        let mut xs: Vec<f32> = clipped.iter().map(|v| v.x).collect();
        let mut ys: Vec<f32> = clipped.iter().map(|v| v.y).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        ys.sort_by(|a, b| a.total_cmp(b));
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[3], 100.0);
        assert_relative_eq!(ys[0], 0.0);
        assert_relative_eq!(ys[3], 100.0);
    }

    #[test]
    fn vertices_on_the_boundary_are_kept() {
        let polygon = triangle((0.0, 0.0), (100.0, 0.0), (50.0, 100.0));
        let clipped = clip_polygon(&polygon, &window());
        assert_eq!(clipped, polygon.vertices());
    }
}
