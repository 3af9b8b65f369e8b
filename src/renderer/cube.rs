use wgpu::util::DeviceExt;

use super::mesh::{self, CUBE_INDICES, CUBE_VERTICES, MATRIX_BYTES};
use super::pipeline_util::{depth_stencil_state, matrix_uniform_entry, DEPTH_FORMAT};
use super::{Renderer, UniformSlot};
use crate::gpu::render_context::RenderContext;

/// Draws the eight-corner cube with a camera (projection) and model (view)
/// uniform, reversed depth and back-face culling.
pub struct CubeRenderer {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
}

impl CubeRenderer {
    /// Build buffers, bind group and pipeline on `context`.
    #[must_use]
    pub fn new(context: RenderContext, clear_color: [f64; 4]) -> Self {
        let device = &context.device;

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&CUBE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX
                    | wgpu::BufferUsages::COPY_DST,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Index Buffer"),
                contents: bytemuck::cast_slice(&CUBE_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        let matrix_buffer = |slot: UniformSlot| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(slot.label()),
                size: MATRIX_BYTES,
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let camera_buffer = matrix_buffer(UniformSlot::Camera);
        let model_buffer = matrix_buffer(UniformSlot::Model);

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Cube Bind Group Layout"),
                entries: &[matrix_uniform_entry(0), matrix_uniform_entry(1)],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Cube Bind Group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: model_buffer.as_entire_binding(),
                },
            ],
        });

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Cube Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("shaders/cube.wgsl").into(),
                ),
            });
        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Cube Pipeline Layout"),
                bind_group_layouts: &[&layout],
                push_constant_ranges: &[],
            });
        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Cube Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[mesh::vertex_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let depth_view = create_depth_view(&context);
        let [r, g, b, a] = clear_color;

        Self {
            context,
            pipeline,
            vertex_buffer,
            index_buffer,
            camera_buffer,
            model_buffer,
            bind_group,
            depth_view,
            clear_color: wgpu::Color { r, g, b, a },
        }
    }

    /// The underlying GPU context.
    #[must_use]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Current drawable size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.context.size()
    }

    /// Reconfigure the surface and recreate the depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.context.resize(width, height) {
            self.depth_view = create_depth_view(&self.context);
        }
    }
}

fn create_depth_view(context: &RenderContext) -> wgpu::TextureView {
    let (width, height) = context.size();
    let texture = context.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Cube Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

impl Renderer for CubeRenderer {
    type Error = wgpu::SurfaceError;

    fn upload_vertex_override(&mut self, offset_bytes: u64, floats: &[f32]) {
        self.context.queue.write_buffer(
            &self.vertex_buffer,
            offset_bytes,
            bytemuck::cast_slice(floats),
        );
    }

    fn upload_uniform(&mut self, slot: UniformSlot, matrix: &[f32; 16]) {
        let buffer = match slot {
            UniformSlot::Camera => &self.camera_buffer,
            UniformSlot::Model => &self.model_buffer,
        };
        self.context
            .queue
            .write_buffer(buffer, 0, bytemuck::bytes_of(matrix));
    }

    fn draw_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Cube Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth_view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(0.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(
                self.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..1);
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}
