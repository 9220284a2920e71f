//! Scene: the user's primitive collections.
//!
//! Three independent ordered collections, one per primitive type. From the
//! user's point of view they are append-only: the engine never reorders or
//! removes entries, it only derives per-entry clip state for the current
//! window/viewport pair on each pipeline pass. Entries can be edited in
//! place by index, which is how an off-window object gets moved back into
//! view.

use crate::geometry::{Line, Point2D, Polygon};

/// The kind of object an insertion produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Point,
    Line,
    Polygon,
}

/// Owns every primitive the user has entered.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    points: Vec<Point2D>,
    lines: Vec<Line>,
    polygons: Vec<Polygon>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn add_point(&mut self, point: Point2D) {
        self.points.push(point.clamped());
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(Line::new(line.p1.clamped(), line.p2.clamped()));
    }

    pub fn add_polygon(&mut self, polygon: Polygon) {
        let vertices = polygon.vertices().iter().map(|v| v.clamped()).collect();
        self.polygons.push(Polygon::new(vertices));
    }

    /// Inserts an object from raw user-entered coordinate pairs, dispatching
    /// on arity: one pair is a point, two a line, three or more a polygon.
    /// An empty list inserts nothing. Returns what was inserted.
    pub fn insert(&mut self, vertices: Vec<Point2D>) -> Option<ObjectKind> {
        match vertices.len() {
            0 => None,
            1 => {
                self.add_point(vertices[0]);
                Some(ObjectKind::Point)
            }
            2 => {
                self.add_line(Line::new(vertices[0], vertices[1]));
                Some(ObjectKind::Line)
            }
            _ => {
                self.add_polygon(Polygon::new(vertices));
                Some(ObjectKind::Polygon)
            }
        }
    }

    /// Replaces the point at `index`. Returns false if the index is out of
    /// range; order is never disturbed.
    pub fn replace_point(&mut self, index: usize, point: Point2D) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point.clamped();
                true
            }
            None => false,
        }
    }

    /// Replaces the line at `index`. Returns false if the index is out of range.
    pub fn replace_line(&mut self, index: usize, line: Line) -> bool {
        match self.lines.get_mut(index) {
            Some(slot) => {
                *slot = Line::new(line.p1.clamped(), line.p2.clamped());
                true
            }
            None => false,
        }
    }

    /// Replaces the polygon at `index`. Returns false if the index is out of range.
    pub fn replace_polygon(&mut self, index: usize, polygon: Polygon) -> bool {
        match self.polygons.get_mut(index) {
            Some(slot) => {
                let vertices = polygon.vertices().iter().map(|v| v.clamped()).collect();
                *slot = Polygon::new(vertices);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::COORDINATE_LIMIT;

    #[test]
    fn insert_dispatches_on_arity() {
        let mut scene = Scene::new();

        assert_eq!(scene.insert(vec![]), None);
        assert_eq!(
            scene.insert(vec![Point2D::new(1.0, 2.0)]),
            Some(ObjectKind::Point)
        );
        assert_eq!(
            scene.insert(vec![Point2D::new(0.0, 0.0), Point2D::new(5.0, 5.0)]),
            Some(ObjectKind::Line)
        );
        assert_eq!(
            scene.insert(vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(2.0, 3.0),
            ]),
            Some(ObjectKind::Polygon)
        );

        assert_eq!(scene.points().len(), 1);
        assert_eq!(scene.lines().len(), 1);
        assert_eq!(scene.polygons().len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut scene = Scene::new();
        scene.add_point(Point2D::new(1.0, 0.0));
        scene.add_point(Point2D::new(2.0, 0.0));
        scene.add_point(Point2D::new(3.0, 0.0));
        let xs: Vec<f32> = scene.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn coordinates_are_clamped_on_insertion() {
        let mut scene = Scene::new();
        scene.add_point(Point2D::new(99_999.0, -99_999.0));
        assert_eq!(
            scene.points()[0],
            Point2D::new(COORDINATE_LIMIT, -COORDINATE_LIMIT)
        );
    }

    #[test]
    fn replace_edits_in_place() {
        let mut scene = Scene::new();
        scene.add_point(Point2D::new(1.0, 1.0));
        scene.add_point(Point2D::new(2.0, 2.0));

        assert!(scene.replace_point(0, Point2D::new(-3.0, -3.0)));
        assert_eq!(scene.points()[0], Point2D::new(-3.0, -3.0));
        assert_eq!(scene.points()[1], Point2D::new(2.0, 2.0));

        assert!(!scene.replace_point(7, Point2D::ZERO));
    }
}
