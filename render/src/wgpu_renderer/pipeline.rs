use crate::buffer::*;

use wgpu;

use std::mem;

/// The vertex layout shared by both pipelines (tightly packed position + colour)
const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x2, 1 => Unorm8x4];

///
/// The render pipelines used to draw on a surface
///
/// The action vocabulary draws two primitive kinds, and the topology is baked into a
/// wgpu pipeline, so there is one pipeline per kind. Both are created eagerly from
/// the same shader module when the renderer is constructed.
///
pub(crate) struct Pipeline {
    /// Pipeline for `DrawLineStrip` actions
    pub(crate) line_strip: wgpu::RenderPipeline,

    /// Pipeline for `DrawTriangles` actions
    pub(crate) triangles: wgpu::RenderPipeline,
}

impl Pipeline {
    ///
    /// Creates the pipelines for a surface with a particular texture format
    ///
    pub(crate) fn for_texture_format(device: &wgpu::Device, format: wgpu::TextureFormat) -> Pipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label:  Some("spline_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/spline.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label:                  Some("Pipeline::for_texture_format"),
            bind_group_layouts:     &[],
            push_constant_ranges:   &[],
        });

        let line_strip  = Self::create_pipeline(device, &shader, &layout, format, wgpu::PrimitiveTopology::LineStrip);
        let triangles   = Self::create_pipeline(device, &shader, &layout, format, wgpu::PrimitiveTopology::TriangleList);

        Pipeline { line_strip, triangles }
    }

    ///
    /// Creates a single pipeline with a particular primitive topology
    ///
    fn create_pipeline(device: &wgpu::Device, shader: &wgpu::ShaderModule, layout: &wgpu::PipelineLayout, format: wgpu::TextureFormat, topology: wgpu::PrimitiveTopology) -> wgpu::RenderPipeline {
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride:   mem::size_of::<Vertex2D>() as u64,
            step_mode:      wgpu::VertexStepMode::Vertex,
            attributes:     &VERTEX_ATTRIBUTES,
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label:  Some("Pipeline::create_pipeline"),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module:         shader,
                entry_point:    "spline_vertex",
                buffers:        &[vertex_layout],
            },

            fragment: Some(wgpu::FragmentState {
                module:         shader,
                entry_point:    "spline_fragment",
                targets:        &[Some(wgpu::ColorTargetState::from(format))],
            }),

            primitive: wgpu::PrimitiveState {
                topology:           topology,
                strip_index_format: None,
                front_face:         wgpu::FrontFace::Ccw,
                cull_mode:          None,
                unclipped_depth:    false,
                polygon_mode:       wgpu::PolygonMode::Fill,
                conservative:       false,
            },

            depth_stencil:  None,
            multisample:    wgpu::MultisampleState { count: 1, mask: !0, alpha_to_coverage_enabled: false },
            multiview:      None,
        })
    }
}
