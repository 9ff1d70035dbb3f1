//! WebGPU render pipeline setup

use anyhow::Context;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::batch::{DrawBatch, DrawCall};
use super::vertex::Vertex;
use crate::consts::*;

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    projection: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4], // offset 0
    color: [f32; 4],      // offset 64
}

const OBJECT_UNIFORM_SIZE: u64 = std::mem::size_of::<ObjectUniform>() as u64;

/// Object slots allocated up front (paddle, ball and a full default field)
const INITIAL_OBJECT_CAPACITY: usize = 32;

/// Orthographic projection from arena coordinates (y up) to clip space
pub fn arena_projection() -> Mat4 {
    Mat4::orthographic_rh(0.0, ARENA_WIDTH, 0.0, ARENA_HEIGHT, -1.0, 1.0)
}

/// Round `size` up to a multiple of `alignment`
fn aligned_stride(size: u64, alignment: u64) -> u64 {
    size.div_ceil(alignment) * alignment
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,

    globals_bind_group: wgpu::BindGroup,

    // Per-object uniforms, one aligned slot per draw call
    object_layout: wgpu::BindGroupLayout,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    object_capacity: usize,
    object_stride: u64,

    /// Scene geometry; replaced whenever the batch is rebuilt
    vertex_buffer: Option<wgpu::Buffer>,

    /// Viewport size in pixels
    pub size: (u32, u32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        present_mode: wgpu::PresentMode,
    ) -> anyhow::Result<Self> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("breakout-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .context("Failed to create device")?;

        let surface_caps = surface.get_capabilities(adapter);
        log::info!("Surface formats: {:?}", surface_caps.formats);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("Surface is not supported by the adapter")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .context("Surface reports no alpha modes")?;

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        // Projection is fixed to the arena; it never changes after setup
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals {
                projection: arena_projection().to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(OBJECT_UNIFORM_SIZE),
                },
                count: None,
            }],
        });

        let object_stride = aligned_stride(
            OBJECT_UNIFORM_SIZE,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let (object_buffer, object_bind_group) = create_object_slots(
            &device,
            &object_layout,
            object_stride,
            INITIAL_OBJECT_CAPACITY,
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&globals_layout, &object_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_bind_group,
            object_layout,
            object_buffer,
            object_bind_group,
            object_capacity: INITIAL_OBJECT_CAPACITY,
            object_stride,
            vertex_buffer: None,
            size: (width, height),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure with the current size after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload a rebuilt batch as the new vertex buffer
    ///
    /// The previous buffer is dropped only once its replacement exists.
    pub fn upload_batch(&mut self, batch: &DrawBatch) {
        self.ensure_object_capacity(batch.len());

        if batch.vertices().is_empty() {
            self.vertex_buffer = None;
            return;
        }

        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("vertex_buffer"),
                contents: bytemuck::cast_slice(batch.vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            });
        self.vertex_buffer = Some(buffer);
    }

    /// Grow the per-object uniform buffer to hold at least `count` slots
    fn ensure_object_capacity(&mut self, count: usize) {
        if count <= self.object_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        let (buffer, bind_group) =
            create_object_slots(&self.device, &self.object_layout, self.object_stride, capacity);
        self.object_buffer = buffer;
        self.object_bind_group = bind_group;
        self.object_capacity = capacity;
        log::debug!("Object uniform capacity grown to {}", capacity);
    }

    /// Write per-object uniforms and render one draw call per entry
    pub fn render(&mut self, calls: &[DrawCall]) -> Result<(), wgpu::SurfaceError> {
        self.ensure_object_capacity(calls.len());

        if !calls.is_empty() {
            let stride = self.object_stride as usize;
            let mut staging = vec![0u8; stride * calls.len()];
            for (slot, call) in staging.chunks_exact_mut(stride).zip(calls) {
                let uniform = ObjectUniform {
                    model: call.transform.to_cols_array_2d(),
                    color: call.color,
                };
                slot[..OBJECT_UNIFORM_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&uniform));
            }
            self.queue.write_buffer(&self.object_buffer, 0, &staging);
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let [r, g, b, a] = CLEAR_COLOR;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(vertex_buffer) = &self.vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
                render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));

                for (i, call) in calls.iter().enumerate() {
                    let offset = (i as u64 * self.object_stride) as u32;
                    render_pass.set_bind_group(1, &self.object_bind_group, &[offset]);
                    render_pass.draw(call.vertices.clone(), 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Uniform buffer with `capacity` object slots and its bind group
fn create_object_slots(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("objects"),
        size: stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("object_bind_group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: wgpu::BufferSize::new(OBJECT_UNIFORM_SIZE),
            }),
        }],
    });

    (buffer, bind_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_aligned_stride() {
        assert_eq!(aligned_stride(80, 256), 256);
        assert_eq!(aligned_stride(256, 256), 256);
        assert_eq!(aligned_stride(257, 256), 512);
        assert_eq!(aligned_stride(80, 16), 80);
    }

    #[test]
    fn test_object_uniform_layout() {
        // mat4x4 + vec4 in WGSL
        assert_eq!(OBJECT_UNIFORM_SIZE, 80);
        assert_eq!(std::mem::size_of::<Globals>(), 64);
    }

    #[test]
    fn test_projection_maps_arena_corners() {
        let proj = arena_projection();
        let bottom_left = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let top_right = proj * Vec4::new(ARENA_WIDTH, ARENA_HEIGHT, 0.0, 1.0);

        assert!((bottom_left.x + 1.0).abs() < 1e-6);
        assert!((bottom_left.y + 1.0).abs() < 1e-6);
        assert!((top_right.x - 1.0).abs() < 1e-6);
        assert!((top_right.y - 1.0).abs() < 1e-6);
        // Inside the clip volume
        assert!((0.0..=1.0).contains(&bottom_left.z));
    }
}
