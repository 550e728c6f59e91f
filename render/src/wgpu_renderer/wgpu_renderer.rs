use super::error::*;
use super::pipeline::*;
use super::to_buffer::*;

use crate::action::*;
use crate::buffer::*;

use wgpu;

use std::collections::HashMap;
use std::mem;
use std::ops::Range;
use std::sync::*;

///
/// Renderer that carries out render actions against a wgpu surface
///
/// The renderer owns the vertex buffers between frames (keyed by the IDs in the
/// action stream) and the two pipelines needed for the action vocabulary. It draws
/// whatever it is told to: deciding what a frame contains is the scene builder's job.
///
pub struct WgpuRenderer {
    /// The device that this will render to
    device: Arc<wgpu::Device>,

    /// Queue used to send commands to the device
    queue: Arc<wgpu::Queue>,

    /// The surface that `render_to_surface` presents to
    surface: Arc<wgpu::Surface>,

    /// The adapter the device was opened on (needed to reconfigure the surface)
    adapter: Arc<wgpu::Adapter>,

    /// The pipelines for the two primitive kinds
    pipeline: Pipeline,

    /// The surface configuration from the last `prepare_to_render` call
    surface_config: Option<wgpu::SurfaceConfiguration>,

    /// The vertex buffers created by the action stream, with their lengths
    vertex_buffers: HashMap<VertexBufferId, (wgpu::Buffer, usize)>,
}

///
/// A draw call queued up while an action list is interpreted
///
enum Draw {
    LineStrip(VertexBufferId, Range<usize>),
    Triangles(VertexBufferId, Range<usize>),
}

impl WgpuRenderer {
    ///
    /// Creates a renderer that will render to the specified surface
    ///
    pub fn from_surface(device: Arc<wgpu::Device>, queue: Arc<wgpu::Queue>, surface: Arc<wgpu::Surface>, adapter: Arc<wgpu::Adapter>) -> Result<WgpuRenderer, RenderInitError> {
        let format = surface.get_capabilities(&adapter)
            .formats
            .first()
            .copied()
            .ok_or(RenderInitError::UnsupportedSurface)?;

        let pipeline = Pipeline::for_texture_format(&device, format);

        Ok(WgpuRenderer {
            device:         device,
            queue:          queue,
            surface:        surface,
            adapter:        adapter,
            pipeline:       pipeline,
            surface_config: None,
            vertex_buffers: HashMap::new(),
        })
    }

    ///
    /// Configures the surface for a particular size (called before the first frame
    /// and again whenever the window resizes)
    ///
    pub fn prepare_to_render(&mut self, width: u32, height: u32) {
        // A zero-sized surface cannot be configured (windows report this mid-resize)
        if width == 0 || height == 0 {
            return;
        }

        if let Some(config) = self.surface.get_default_config(&self.adapter, width, height) {
            self.surface.configure(&self.device, &config);
            self.surface_config = Some(config);
        }
    }

    ///
    /// Carries out a list of render actions against the surface, presenting the
    /// result if the list contains `ShowFrameBuffer`
    ///
    /// Buffer actions are applied before the frame's render pass begins, so an
    /// action list must finish writing a buffer before drawing from it (the scene
    /// builder always does).
    ///
    pub fn render_to_surface(&mut self, actions: Vec<RenderAction>) {
        let mut clear_color = None;
        let mut draws       = vec![];
        let mut show_frame  = false;

        for action in actions {
            match action {
                RenderAction::Clear(color)                      => { clear_color = Some(color); }
                RenderAction::CreateVertex2DBuffer(id, vertices) => { self.create_vertex_buffer(id, vertices); }
                RenderAction::FreeVertexBuffer(id)              => { self.vertex_buffers.remove(&id); }
                RenderAction::DrawLineStrip(id, range)          => { draws.push(Draw::LineStrip(id, range)); }
                RenderAction::DrawTriangles(id, range)          => { draws.push(Draw::Triangles(id, range)); }
                RenderAction::ShowFrameBuffer                   => { show_frame = true; }
            }
        }

        // Fetch the frame to draw on, reconfiguring the surface once if it was lost
        let frame = match self.surface.get_current_texture() {
            Ok(frame)   => frame,
            Err(_)      => {
                if let Some(config) = &self.surface_config {
                    self.surface.configure(&self.device, config);
                }

                match self.surface.get_current_texture() {
                    Ok(frame)   => frame,
                    Err(_)      => { return; }
                }
            }
        };

        let view        = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("render_to_surface") });

        {
            let load = match clear_color {
                Some(color) => {
                    let [r, g, b, a] = color.to_components();
                    wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a })
                }
                None => wgpu::LoadOp::Load,
            };

            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label:                      Some("render_to_surface"),
                color_attachments:          &[Some(wgpu::RenderPassColorAttachment {
                    view:           &view,
                    resolve_target: None,
                    ops:            wgpu::Operations { load: load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment:   None,
                timestamp_writes:           None,
                occlusion_query_set:        None,
            });

            for draw in draws.iter() {
                let (pipeline, buffer_id, range) = match draw {
                    Draw::LineStrip(id, range)  => (&self.pipeline.line_strip, id, range),
                    Draw::Triangles(id, range)  => (&self.pipeline.triangles, id, range),
                };

                if let Some((buffer, num_vertices)) = self.vertex_buffers.get(buffer_id) {
                    let range = range.start.min(*num_vertices)..range.end.min(*num_vertices);
                    if range.len() == 0 {
                        continue;
                    }

                    let vertex_size = mem::size_of::<Vertex2D>() as u64;
                    let start_pos   = (range.start as u64) * vertex_size;
                    let end_pos     = (range.end as u64) * vertex_size;

                    render_pass.set_pipeline(pipeline);
                    render_pass.set_vertex_buffer(0, buffer.slice(start_pos..end_pos));
                    render_pass.draw(0..(range.len() as u32), 0..1);
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));

        if show_frame {
            frame.present();
        }
    }

    ///
    /// Loads vertices into a new buffer, replacing any buffer with the same ID
    ///
    fn create_vertex_buffer(&mut self, id: VertexBufferId, vertices: Vec<Vertex2D>) {
        let num_vertices    = vertices.len();
        let buffer          = vertices.to_buffer(&self.device, wgpu::BufferUsages::VERTEX);

        self.vertex_buffers.insert(id, (buffer, num_vertices));
    }
}
