use super::selection_error::*;
use crate::bezier::*;
use crate::geo::*;

use smallvec::*;

///
/// The maximum number of control points a selection can hold
///
/// Capping the count bounds both the curve degree (see [`MAX_DEGREE`](crate::bezier::MAX_DEGREE))
/// and the per-addition resampling cost, which is `O(sample_count × degree)` and must
/// finish within one frame of the render loop.
///
pub const MAX_CONTROL_POINTS: usize = 100;

///
/// What the selection currently holds, and which operations are meaningful on it
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SelectionMode {
    /// No control points have been placed
    Empty,

    /// A single control point: not enough to define a curve
    Insufficient,

    /// Two or more control points, with the sampled curve kept in sync
    Curving,

    /// The selection is at capacity and further points will be rejected
    Full,
}

///
/// The growing set of control points the user has placed, the live pointer position,
/// and the sampled curve they define
///
/// This is the owned, explicit form of the tool's interactive state: the input cycle
/// feeds events in, the renderers read the control points and sampled curve out, and
/// nothing else holds mutable state. Every mutation of the control point set
/// resamples the curve synchronously before returning, so a renderer can never
/// observe a curve that disagrees with the points that defined it.
///
pub struct SelectionState {
    /// The control points, in the order they were placed (the order defines the
    /// curve's parameterization)
    points: SmallVec<[Point2D; 16]>,

    /// The sampled curve for the current control points (empty below 2 points)
    curve: Vec<Point2D>,

    /// Where the pointer was last seen, if it has entered the drawing surface
    pointer: Option<Point2D>,
}

impl SelectionState {
    ///
    /// Creates an empty selection
    ///
    pub fn new() -> SelectionState {
        SelectionState {
            points:     smallvec![],
            curve:      vec![],
            pointer:    None,
        }
    }

    ///
    /// The mode the selection is currently in
    ///
    pub fn mode(&self) -> SelectionMode {
        match self.points.len() {
            0                                   => SelectionMode::Empty,
            1                                   => SelectionMode::Insufficient,
            n if n >= MAX_CONTROL_POINTS        => SelectionMode::Full,
            _                                   => SelectionMode::Curving,
        }
    }

    ///
    /// The control points placed so far, in placement order
    ///
    #[inline]
    pub fn control_points(&self) -> &[Point2D] {
        &self.points
    }

    ///
    /// The sampled curve matching the current control points
    ///
    /// This is empty while fewer than 2 points are placed, and otherwise holds
    /// `10 × control point count` samples (see [`sample_curve`]).
    ///
    #[inline]
    pub fn curve(&self) -> &[Point2D] {
        &self.curve
    }

    ///
    /// The most recent pointer position, used to draw a live marker
    ///
    #[inline]
    pub fn pointer_position(&self) -> Option<Point2D> {
        self.pointer
    }

    ///
    /// Appends a control point and synchronously resamples the curve
    ///
    /// Returns `CapacityExceeded` without changing anything if the selection is
    /// already full (the UI ignores this and simply stops accepting points).
    ///
    pub fn add_point(&mut self, point: Point2D) -> Result<(), SelectionError> {
        if self.points.len() >= MAX_CONTROL_POINTS {
            return Err(SelectionError::CapacityExceeded);
        }

        self.points.push(point);
        self.resample();

        Ok(())
    }

    ///
    /// Clears the control points and the sampled curve, returning to the empty state
    ///
    /// Valid in any mode, and idempotent.
    ///
    pub fn reset(&mut self) {
        self.points.clear();
        self.curve.clear();
    }

    ///
    /// Records the pointer's position
    ///
    /// This never changes the control points and never triggers resampling: the
    /// pointer marker is the only thing that moves until a point is committed.
    ///
    #[inline]
    pub fn update_pointer_position(&mut self, point: Point2D) {
        self.pointer = Some(point);
    }

    ///
    /// Regenerates the sampled curve from the current control points
    ///
    fn resample(&mut self) {
        self.curve = sample_curve(&self.points);
    }
}

impl Default for SelectionState {
    fn default() -> SelectionState {
        SelectionState::new()
    }
}
