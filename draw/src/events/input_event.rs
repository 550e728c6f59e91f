use spline_curve::*;

///
/// The input events the spline tool consumes
///
/// These are what is left of the windowing library's event vocabulary after the
/// window glue has mapped coordinates and picked out the gestures the tool cares
/// about: everything downstream of this type is windowing-agnostic.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputEvent {
    /// The pointer moved to a position on the drawing surface (in normalised device
    /// coordinates)
    PointerMoved(Point2D),

    /// The user committed the current pointer position as a control point (button
    /// press)
    CommitPoint,

    /// The user asked for the selection to be cleared (key press)
    Reset,
}

///
/// Maps a pointer position in window pixels to normalised device coordinates
///
/// Window pixels have the origin at the top left with y pointing down; NDC runs
/// from -1 to 1 on both axes with y pointing up. Positions on or outside the window
/// edge produce `None` and are ignored, matching how the tool clips pointer motion
/// to the drawing surface.
///
pub fn pointer_to_ndc(x: f64, y: f64, width: u32, height: u32) -> Option<Point2D> {
    if x <= 0.0 || x >= (width as f64) || y <= 0.0 || y >= (height as f64) {
        return None;
    }

    Some(Point2D::new(2.0 * x / (width as f64) - 1.0, 1.0 - 2.0 * y / (height as f64)))
}
