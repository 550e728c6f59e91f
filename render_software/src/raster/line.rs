use crate::pixel::*;
use crate::render::*;

///
/// Draws a line segment between two points in pixel coordinates
///
/// This walks the line with a DDA stepper: one step per pixel along the major axis,
/// rounding to the nearest pixel on the minor axis. Points outside the frame are
/// clipped pixel by pixel (the frame ignores out-of-range plots), so segments can
/// cross the frame edges freely.
///
pub fn draw_line(frame: &mut RgbaFrame, from: (f32, f32), to: (f32, f32), color: U8RgbaPixel) {
    let (x0, y0)    = from;
    let (x1, y1)    = to;
    let dx          = x1 - x0;
    let dy          = y1 - y0;

    let num_steps   = dx.abs().max(dy.abs()).ceil().max(1.0);
    let step_x      = dx / num_steps;
    let step_y      = dy / num_steps;

    let mut x = x0;
    let mut y = y0;
    for _ in 0..=(num_steps as usize) {
        frame.plot(x.round() as i64, y.round() as i64, color);

        x += step_x;
        y += step_y;
    }
}
