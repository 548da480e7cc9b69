//! Rendering module
//!
//! Turns simulation state into a flat list of colored rectangles. The output
//! is a pure function of state and theme; whatever owns the canvas or GPU
//! surface consumes it.

pub mod scene;
pub mod theme;
pub mod vertex;

pub use scene::{Quad, build_scene};
pub use theme::Theme;
pub use vertex::{Vertex, quads_to_vertices, vertex_bytes};
