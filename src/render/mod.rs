//! Rendering of pipeline snapshots into a CPU color buffer.
//!
//! The [`Renderer`] consumes only [`crate::pipeline::RenderSnapshot`] values;
//! it never re-derives clip or transform state itself. A host requests a
//! fresh snapshot whenever the window, viewport or scene changes and hands
//! it here to draw.

mod renderer;

pub use renderer::Renderer;
