//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and
//! implements the drawing operations a snapshot needs: markers, lines,
//! outlines, and a border around the viewport.

use std::path::Path;

use crate::colors;
use crate::geometry::Point2D;
use crate::pipeline::RenderSnapshot;
use crate::rect::Rect;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        self.color_buffer[(y * self.width + x) as usize]
    }

    /// Draws a small filled square centered on (x, y). Used for individual
    /// points, which would otherwise be a single hard-to-see pixel.
    pub fn draw_marker(&mut self, x: i32, y: i32, half_size: i32, color: u32) {
        for dy in -half_size..=half_size {
            for dx in -half_size..=half_size {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a line between two points using Bresenham's algorithm.
    ///
    /// Tracks an error term along the major axis and steps the minor axis
    /// when the accumulated error crosses the threshold; integer arithmetic
    /// only.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_step = if x0 < x1 { 1 } else { -1 };
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }

    /// Draws the outline of a rectangle given in device coordinates.
    pub fn draw_rect_outline(&mut self, rect: Rect, color: u32) {
        let (x0, y0) = (rect.min().x as i32, rect.min().y as i32);
        let (x1, y1) = (rect.max().x as i32, rect.max().y as i32);
        self.draw_line(x0, y0, x1, y0, color);
        self.draw_line(x1, y0, x1, y1, color);
        self.draw_line(x1, y1, x0, y1, color);
        self.draw_line(x0, y1, x0, y0, color);
    }

    /// Draws a closed polygon outline; the last vertex connects back to the
    /// first. Fewer than 2 vertices draws nothing.
    pub fn draw_polygon_outline(&mut self, vertices: &[Point2D], color: u32) {
        if vertices.len() < 2 {
            return;
        }
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            self.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
        }
    }

    /// Draws one pipeline snapshot: viewport border first, then visible
    /// points, surviving lines, and clipped polygon outlines.
    pub fn draw_snapshot(&mut self, snapshot: &RenderSnapshot) {
        self.draw_rect_outline(snapshot.viewport(), colors::VIEWPORT_BORDER);

        for point in snapshot.points() {
            if let Some(p) = point.device() {
                self.draw_marker(p.x as i32, p.y as i32, 2, colors::POINT);
            }
        }

        for line in snapshot.lines() {
            if let Some((a, b)) = line.endpoints() {
                self.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, colors::LINE);
            }
        }

        for polygon in snapshot.polygons() {
            self.draw_polygon_outline(polygon.vertices(), colors::POLYGON);
        }
    }

    /// Returns the buffer as raw ARGB8888 bytes for display streaming.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Writes the current frame to a PNG file. The headless output path: a
    /// pass can be rendered and inspected with no display attached.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (i, &argb) in self.color_buffer.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            let a = (argb >> 24) as u8;
            let r = (argb >> 16) as u8;
            let g = (argb >> 8) as u8;
            let b = argb as u8;
            img.put_pixel(x, y, image::Rgba([r, g, b, a]));
        }
        img.save(path)
    }
}
