//! # spline_curve
//!
//! The curve engine for the splines tool: this crate maps an ordered set of control
//! points to the bezier curve they define, and owns the state machine that keeps the
//! sampled curve in sync as control points are placed.
//!
//! The engine has no knowledge of any windowing system or graphics API: it consumes
//! points in whatever coordinate space the caller uses and produces points in the same
//! space, so the renderers act purely as consumers of its output.

/// 2-dimensional points and their arithmetic
pub mod geo;

/// Bezier evaluation: binomial coefficients, the Bernstein basis and curve sampling
pub mod bezier;

/// The control point selection state machine
pub mod selection;

pub use self::geo::*;
pub use self::bezier::*;
pub use self::selection::*;
