//! # spline_draw
//!
//! The windowed front end of the splines tool. The interesting work happens in
//! `spline_curve` (the engine) and the renderer crates: this crate maps window
//! events onto the engine's input vocabulary, runs the drain-events-then-render
//! cycle, and owns the wgpu window the result shows up in.
//!
//! The event mapping and the input cycle are ordinary functions over plain values,
//! so everything up to the window itself can run (and is tested) headless.

/// Mapping from window events to the tool's input vocabulary
pub mod events;

/// The input-processing cycle
pub mod session;

pub use self::events::*;
pub use self::session::*;
