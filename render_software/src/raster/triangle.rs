use crate::pixel::*;
use crate::render::*;

///
/// The twice-signed area of a triangle (positive when the points wind
/// counter-clockwise in a y-down pixel space)
///
#[inline]
fn edge(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

///
/// Fills a triangle given in pixel coordinates
///
/// Pixels are covered when their centre lies inside all three edges, tested with
/// edge functions over the triangle's bounding box. Either winding is accepted.
/// Degenerate (zero-area) triangles fill nothing.
///
pub fn fill_triangle(frame: &mut RgbaFrame, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: U8RgbaPixel) {
    let area = edge(a, b, c);
    if area == 0.0 {
        return;
    }

    // Flip the winding rather than testing it per pixel
    let (b, c) = if area < 0.0 { (c, b) } else { (b, c) };

    let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as i64;
    let max_x = a.0.max(b.0).max(c.0).ceil().min((frame.width() as f32) - 1.0) as i64;
    let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as i64;
    let max_y = a.1.max(b.1).max(c.1).ceil().min((frame.height() as f32) - 1.0) as i64;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let centre = ((x as f32) + 0.5, (y as f32) + 0.5);

            if edge(a, b, centre) >= 0.0 && edge(b, c, centre) >= 0.0 && edge(c, a, centre) >= 0.0 {
                frame.plot(x, y, color);
            }
        }
    }
}
