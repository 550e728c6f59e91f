///
/// 2D vertex representation
///
/// Positions are in normalised device coordinates (x and y in -1..1, y pointing up),
/// which is the space the curve engine is fed its points in: vertices reach the
/// backends without any further transformation.
///
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C, packed)]
pub struct Vertex2D {
    pub pos:    [f32; 2],
    pub color:  [u8; 4],
}

impl Vertex2D {
    ///
    /// Creates a 2D vertex with the position set and the colour zeroed out
    ///
    pub fn with_pos(x: f32, y: f32) -> Vertex2D {
        Vertex2D {
            pos:    [x, y],
            color:  [0, 0, 0, 0],
        }
    }

    ///
    /// Updates this vertex with a particular colour
    ///
    pub fn with_color(self, r: f32, g: f32, b: f32, a: f32) -> Vertex2D {
        Vertex2D {
            pos:    self.pos,
            color:  [(r * 255.0) as _, (g * 255.0) as _, (b * 255.0) as _, (a * 255.0) as _],
        }
    }
}
