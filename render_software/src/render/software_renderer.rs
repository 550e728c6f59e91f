use super::rgba_frame::*;
use crate::pixel::*;
use crate::raster::*;

use spline_render::*;

use std::collections::HashMap;
use std::ops::Range;

///
/// Renderer that carries out render actions on the CPU, into an [`RgbaFrame`]
///
/// This consumes the same action lists as the wgpu renderer: the engine and scene
/// builder cannot tell the two apart. 'Presenting' a frame here just means the frame
/// is complete and ready to read (or encode as a PNG); there is no display.
///
pub struct SoftwareRenderer {
    /// The frame that draw actions are rasterised into
    frame: RgbaFrame,

    /// The vertex buffers created by the action stream
    vertex_buffers: HashMap<VertexBufferId, Vec<Vertex2D>>,
}

impl SoftwareRenderer {
    ///
    /// Creates a renderer with a frame of a particular pixel size
    ///
    pub fn new(width: usize, height: usize) -> SoftwareRenderer {
        SoftwareRenderer {
            frame:          RgbaFrame::new(width, height),
            vertex_buffers: HashMap::new(),
        }
    }

    ///
    /// Carries out a list of render actions
    ///
    pub fn render<TActionIter: IntoIterator<Item = RenderAction>>(&mut self, actions: TActionIter) {
        for action in actions {
            match action {
                RenderAction::Clear(color)                          => { self.frame.fill(U8RgbaPixel::from(color)); }
                RenderAction::CreateVertex2DBuffer(id, vertices)    => { self.vertex_buffers.insert(id, vertices); }
                RenderAction::FreeVertexBuffer(id)                  => { self.vertex_buffers.remove(&id); }
                RenderAction::DrawLineStrip(id, range)              => { self.draw_line_strip(id, range); }
                RenderAction::DrawTriangles(id, range)              => { self.draw_triangles(id, range); }
                RenderAction::ShowFrameBuffer                       => { /* the frame is already complete: nothing to present */ }
            }
        }
    }

    ///
    /// The most recently rendered frame
    ///
    #[inline]
    pub fn frame(&self) -> &RgbaFrame {
        &self.frame
    }

    ///
    /// Consumes this renderer and returns the realized pixels as a byte array
    ///
    pub fn realize(self) -> Vec<u8> {
        self.frame.to_bytes()
    }

    ///
    /// Maps a vertex position from normalised device coordinates to pixel
    /// coordinates (NDC has y pointing up; pixels have y pointing down)
    ///
    fn to_pixel_coords(&self, pos: [f32; 2]) -> (f32, f32) {
        let width   = self.frame.width() as f32;
        let height  = self.frame.height() as f32;

        ((pos[0] + 1.0) / 2.0 * (width - 1.0), (1.0 - pos[1]) / 2.0 * (height - 1.0))
    }

    ///
    /// Rasterises a line strip from a range of vertices in a buffer
    ///
    fn draw_line_strip(&mut self, id: VertexBufferId, range: Range<usize>) {
        let vertices = match self.vertex_buffers.get(&id) {
            Some(vertices)  => vertices,
            None            => { return; }
        };

        let range       = range.start.min(vertices.len())..range.end.min(vertices.len());
        let segments    = vertices[range].windows(2)
            .map(|pair| (pair[0].pos, pair[1].pos, pair[0].color))
            .collect::<Vec<_>>();

        for (from, to, color) in segments {
            let from    = self.to_pixel_coords(from);
            let to      = self.to_pixel_coords(to);

            draw_line(&mut self.frame, from, to, U8RgbaPixel(color));
        }
    }

    ///
    /// Rasterises filled triangles from a range of vertices in a buffer (any
    /// trailing vertices that do not make up a full triangle are ignored)
    ///
    fn draw_triangles(&mut self, id: VertexBufferId, range: Range<usize>) {
        let vertices = match self.vertex_buffers.get(&id) {
            Some(vertices)  => vertices,
            None            => { return; }
        };

        let range       = range.start.min(vertices.len())..range.end.min(vertices.len());
        let triangles   = vertices[range].chunks_exact(3)
            .map(|triangle| (triangle[0].pos, triangle[1].pos, triangle[2].pos, triangle[0].color))
            .collect::<Vec<_>>();

        for (a, b, c, color) in triangles {
            let a = self.to_pixel_coords(a);
            let b = self.to_pixel_coords(b);
            let c = self.to_pixel_coords(c);

            fill_triangle(&mut self.frame, a, b, c, U8RgbaPixel(color));
        }
    }
}
