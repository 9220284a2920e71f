//! A 2D window-to-viewport mapping and clipping engine.
//!
//! Scenes of points, line segments and polygons defined in world coordinates
//! are clipped against a rectangular window and mapped into a rectangular
//! viewport in device coordinates. SDL2 is used only for window management
//! and display; all clipping, mapping and rasterization is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use viewclip::prelude::*;
//!
//! let mut scene = Scene::new();
//! scene.add_line(Line::new(Point2D::new(-10.0, 50.0), Point2D::new(50.0, 50.0)));
//!
//! let window = Rect::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 100.0));
//! let viewport = Rect::new(Point2D::new(0.0, 0.0), Point2D::new(200.0, 200.0));
//! let snapshot = Pipeline::new().run(&scene, &window, &viewport)?;
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod colors;
pub mod display;
pub mod geometry;
pub mod mapper;
pub mod pipeline;
pub mod rect;
pub mod render;
pub mod scene;

// Re-export commonly needed types at crate root for convenience
pub use mapper::{MapError, Mapper};
pub use pipeline::{Pipeline, RenderSnapshot};
pub use rect::Rect;
pub use scene::Scene;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use viewclip::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::geometry::{Line, Point2D, Polygon};

    // Window / viewport rectangle
    pub use crate::rect::Rect;

    // Mapping
    pub use crate::mapper::{MapError, Mapper};

    // Clipping
    pub use crate::clipper::{clip_line, clip_point, clip_polygon};

    // Scene & pipeline
    pub use crate::pipeline::{Pipeline, RenderSnapshot};
    pub use crate::scene::{ObjectKind, Scene};

    // Rendering
    pub use crate::render::Renderer;

    // Display & input
    pub use crate::display::{Display, DisplayEvent, FrameLimiter};
}
