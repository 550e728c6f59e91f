//! # spline_render_software
//!
//! The CPU backend for the splines tool: interprets the same render action lists as
//! the wgpu renderer, but rasterises them into an ordinary block of RGBA pixels
//! instead of a window surface. Frames can be inspected directly (which is how the
//! renderer is tested) or written out as PNGs with the `render_png` feature.

/// Pixel formats for the rendered frame
pub mod pixel;

/// Rasterisation primitives (lines and filled triangles)
pub mod raster;

/// The frame target and the action interpreter that draws on it
pub mod render;

pub use self::pixel::*;
pub use self::raster::*;
pub use self::render::*;
