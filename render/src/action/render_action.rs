use super::color::*;
use super::identities::*;

use crate::buffer::*;

use std::ops::Range;

///
/// Represents an action for a render target
///
/// A frame is an ordered list of these actions, ending with `ShowFrameBuffer`. The
/// two backends (wgpu and the software rasteriser) interpret the same list, which is
/// what makes them interchangeable from the engine's point of view.
///
#[derive(Clone, PartialEq, Debug)]
pub enum RenderAction {
    ///
    /// Clears the frame to the specified colour
    ///
    Clear(Rgba8),

    ///
    /// Creates a vertex buffer with the specified 2D vertices in it (replacing any existing buffer with the same ID)
    ///
    CreateVertex2DBuffer(VertexBufferId, Vec<Vertex2D>),

    ///
    /// Frees an existing vertex buffer
    ///
    FreeVertexBuffer(VertexBufferId),

    ///
    /// Draws a connected strip of line segments from a range of vertices in a buffer
    ///
    DrawLineStrip(VertexBufferId, Range<usize>),

    ///
    /// Draws filled triangles from a range of vertices in a buffer (3 vertices per triangle)
    ///
    DrawTriangles(VertexBufferId, Range<usize>),

    ///
    /// Displays the completed frame
    ///
    ShowFrameBuffer,
}
