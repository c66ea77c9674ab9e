//! Render pipeline for the tessellated figure
//!
//! One alpha-blended triangle-list pipeline drawn in two passes over the
//! same shader: the figure itself under the camera's orthographic
//! transform, then the legend overlay with an identity transform (its
//! vertices are built directly in NDC).

use wgpu::util::DeviceExt;

use super::types::{Vertex2D, ViewUniforms};

/// Pipeline and buffers for drawing a figure
#[allow(dead_code)] // bind_group_layout kept for potential bind group recreation
pub struct FigurePipeline {
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
    /// Bind group layout for view uniforms
    bind_group_layout: wgpu::BindGroupLayout,
    /// View uniforms for the world pass
    view_buffer: wgpu::Buffer,
    view_bind_group: wgpu::BindGroup,
    /// Identity uniforms for the overlay pass
    overlay_view_buffer: wgpu::Buffer,
    overlay_bind_group: wgpu::BindGroup,
    /// Figure vertex buffer (recreated when the figure changes)
    figure_buffer: Option<wgpu::Buffer>,
    figure_vertex_count: u32,
    /// Legend overlay vertex buffer
    overlay_buffer: Option<wgpu::Buffer>,
    overlay_vertex_count: u32,
}

impl FigurePipeline {
    /// Create a new figure pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        // Create bind group layout
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Figure Bind Group Layout"),
            entries: &[
                // View uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        // Create pipeline layout
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Figure Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Load shader
        let shader_source = include_str!("../shaders/figure.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Figure Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        // Create render pipeline
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Figure Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Input meshes carry arbitrary winding; draw both faces
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        // Create view uniform buffers
        let view_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Figure View Buffer"),
            contents: bytemuck::bytes_of(&ViewUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let overlay_view_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Overlay View Buffer"),
            contents: bytemuck::bytes_of(&ViewUniforms::IDENTITY),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        // Create bind groups
        let view_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Figure View Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: view_buffer.as_entire_binding(),
            }],
        });
        let overlay_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Overlay View Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: overlay_view_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            bind_group_layout,
            view_buffer,
            view_bind_group,
            overlay_view_buffer,
            overlay_bind_group,
            figure_buffer: None,
            figure_vertex_count: 0,
            overlay_buffer: None,
            overlay_vertex_count: 0,
        }
    }

    /// Get the vertex buffer layout for Vertex2D
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Upload the figure's world-space vertices
    pub fn upload_figure(&mut self, device: &wgpu::Device, vertices: &[Vertex2D]) {
        self.figure_vertex_count = vertices.len() as u32;
        self.figure_buffer = if vertices.is_empty() {
            None
        } else {
            Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Figure Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }))
        };
    }

    /// Upload the legend overlay's NDC vertices
    pub fn upload_overlay(&mut self, device: &wgpu::Device, vertices: &[Vertex2D]) {
        self.overlay_vertex_count = vertices.len() as u32;
        self.overlay_buffer = if vertices.is_empty() {
            None
        } else {
            Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Overlay Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }))
        };
    }

    /// Update the world-pass view uniforms
    pub fn update_view(&self, queue: &wgpu::Queue, uniforms: &ViewUniforms) {
        queue.write_buffer(&self.view_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Draw the figure and legend overlay
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Figure Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);

        if let Some(buffer) = &self.figure_buffer {
            if self.figure_vertex_count > 0 {
                render_pass.set_bind_group(0, &self.view_bind_group, &[]);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..self.figure_vertex_count, 0..1);
            }
        }

        if let Some(buffer) = &self.overlay_buffer {
            if self.overlay_vertex_count > 0 {
                render_pass.set_bind_group(0, &self.overlay_bind_group, &[]);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..self.overlay_vertex_count, 0..1);
            }
        }
    }
}

/// Helper to create an orthographic view-projection matrix
///
/// Maps the world rectangle centered on `center`, `height` world units tall
/// and `height * aspect` wide, onto NDC. Columns as arrays, matching the
/// WGSL mat4x4 layout.
pub fn orthographic_matrix(center: [f32; 2], height: f32, aspect: f32) -> [[f32; 4]; 4] {
    let sy = 2.0 / height;
    let sx = 2.0 / (height * aspect);

    [
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [-center[0] * sx, -center[1] * sy, 0.0, 1.0],
    ]
}
