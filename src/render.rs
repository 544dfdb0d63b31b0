use crate::constants::{CLEAR_COLOR, FOV_Y_RAD, SEGMENTS, SUBJECT_COLOR, Z_FAR, Z_NEAR};
use crate::core::interact::{InteractionState, NO_PULSE};
use crate::core::layout::SceneLayout;
use crate::core::{mesh, physical, reference};
use glam::Mat4;
use web_sys as web;
use wgpu::util::DeviceExt;

/// Setup failures the renderer distinguishes. Both abort the mount: nothing
/// is uploaded and no frame is ever drawn. The host degrades to an empty
/// canvas and may remount to retry.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("webgpu surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("shading program failed to build: {0}")]
    ProgramBuild(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BlobUniforms {
    proj: [[f32; 4]; 4],
    model_view: [[f32; 4]; 4],
    pointer_dir: [f32; 3],
    time: f32,
    color: [f32; 3],
    radius: f32,
    pointer_strength: f32,
    solid: f32,
    pulse_time: f32,
    _pad: f32,
}

/// GPU resources for one sphere instance plus its static draw parameters.
/// Each instance owns its uniform buffer and bind group, so the two draws
/// share nothing mutable beyond the bound pipeline.
struct SphereResources {
    position_buf: wgpu::Buffer,
    normal_buf: wgpu::Buffer,
    seed_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    radius: f32,
    center_x: f32,
    color: [f32; 3],
    solid: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    depth_view: wgpu::TextureView,
    subject: SphereResources,
    reference: SphereResources,
    camera_z: f32,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    /// Bring up the full GPU stack for one mount: surface, device, shading
    /// program, both sphere meshes and the scene layout. The program is
    /// validated before any mesh upload so a build failure never leaves
    /// partial resources behind.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        fat_mass_lbs: f32,
    ) -> Result<Self, SetupError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| SetupError::SurfaceUnavailable(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| SetupError::SurfaceUnavailable("no WebGPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| SetupError::SurfaceUnavailable(format!("request_device: {e:?}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Build the shading program inside a validation scope so a bad
        // shader or pipeline surfaces as ProgramBuild, fail-fast, before any
        // mesh data is uploaded.
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let (pipeline, bind_group_layout) = create_blob_pipeline(&device, format);
        if let Some(err) = device.pop_error_scope().await {
            return Err(SetupError::ProgramBuild(err.to_string()));
        }

        // Geometry sizing: subject from mass, reference from the table.
        let subject_radius = physical::scene_radius_from_mass_lbs(fat_mass_lbs);
        let reference_entry = reference::select_reference(fat_mass_lbs);
        let reference_radius = physical::cm_to_world(reference_entry.radius_cm);
        let layout = SceneLayout::compute(subject_radius, reference_radius);
        log::info!(
            "[viz] mass={:.2}lb subject_r={:.3} reference={} r={:.3} cam_z={:.2}",
            fat_mass_lbs,
            subject_radius,
            reference_entry.name,
            reference_radius,
            layout.camera_z
        );

        // Radii are clamped/validated upstream, so a mesh error here is a
        // bug; propagate it rather than panicking.
        let mut rng = rand::thread_rng();
        let subject_mesh = mesh::build(subject_radius, SEGMENTS, &mut rng)?;
        let reference_mesh = mesh::build(reference_radius, SEGMENTS, &mut rng)?;
        let subject = upload_sphere(
            &device,
            &bind_group_layout,
            subject_mesh,
            subject_radius,
            layout.subject_x,
            SUBJECT_COLOR,
            0.0,
        );
        let reference = upload_sphere(
            &device,
            &bind_group_layout,
            reference_mesh,
            reference_radius,
            layout.reference_x,
            reference_entry.color,
            1.0,
        );

        let depth_view = create_depth_view(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            depth_view,
            subject,
            reference,
            camera_z: layout.camera_z,
            width,
            height,
        })
    }

    /// Reconfigure the swapchain and depth target for a new drawable size.
    /// Meshes are never rebuilt here; only the surface and projection react
    /// to resizes.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    /// Draw one frame at time `t` (seconds since mount). The subject sphere
    /// receives the live pointer/pulse uniforms; the reference is always
    /// drawn inert (zero pointer, sentinel pulse, solid flag set).
    pub fn render(
        &mut self,
        t: f32,
        interaction: &InteractionState,
    ) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(FOV_Y_RAD, aspect, Z_NEAR, Z_FAR).to_cols_array_2d();

        let subject_uniforms = BlobUniforms {
            proj,
            model_view: model_view(self.subject.center_x, self.camera_z),
            pointer_dir: interaction.pointer_dir(),
            time: t,
            color: self.subject.color,
            radius: self.subject.radius,
            pointer_strength: interaction.smoothed_strength,
            solid: self.subject.solid,
            pulse_time: interaction.pulse_time,
            _pad: 0.0,
        };
        let reference_uniforms = BlobUniforms {
            proj,
            model_view: model_view(self.reference.center_x, self.camera_z),
            pointer_dir: [0.0; 3],
            time: t,
            color: self.reference.color,
            radius: self.reference.radius,
            pointer_strength: 0.0,
            solid: self.reference.solid,
            pulse_time: NO_PULSE,
            _pad: 0.0,
        };
        self.queue.write_buffer(
            &self.subject.uniform_buf,
            0,
            bytemuck::bytes_of(&subject_uniforms),
        );
        self.queue.write_buffer(
            &self.reference.uniform_buf,
            0,
            bytemuck::bytes_of(&reference_uniforms),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("blob_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            // Fixed draw order: subject first, then reference.
            for sphere in [&self.subject, &self.reference] {
                rpass.set_bind_group(0, &sphere.bind_group, &[]);
                rpass.set_vertex_buffer(0, sphere.position_buf.slice(..));
                rpass.set_vertex_buffer(1, sphere.normal_buf.slice(..));
                rpass.set_vertex_buffer(2, sphere.seed_buf.slice(..));
                rpass.set_index_buffer(sphere.index_buf.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..sphere.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[inline]
fn model_view(center_x: f32, camera_z: f32) -> [[f32; 4]; 4] {
    Mat4::from_translation(glam::Vec3::new(center_x, 0.0, camera_z)).to_cols_array_2d()
}

fn create_blob_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
) -> (wgpu::RenderPipeline, wgpu::BindGroupLayout) {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("blob_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::BLOB_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("blob_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("blob_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("blob_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_blob"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                },
                wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![1 => Float32x3],
                },
                wgpu::VertexBufferLayout {
                    array_stride: 4,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![2 => Float32],
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth24Plus,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_blob"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    (pipeline, bgl)
}

fn upload_sphere(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    mesh: mesh::Mesh,
    radius: f32,
    center_x: f32,
    color: [f32; 3],
    solid: f32,
) -> SphereResources {
    let position_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_positions"),
        contents: bytemuck::cast_slice(&mesh.positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let normal_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_normals"),
        contents: bytemuck::cast_slice(&mesh.normals),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let seed_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_seeds"),
        contents: bytemuck::cast_slice(&mesh.seeds),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sphere_uniforms"),
        size: std::mem::size_of::<BlobUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("sphere_bg"),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buf.as_entire_binding(),
        }],
    });

    SphereResources {
        position_buf,
        normal_buf,
        seed_buf,
        index_buf,
        index_count: mesh.index_count() as u32,
        uniform_buf,
        bind_group,
        radius,
        center_x,
        color,
        solid,
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth24Plus,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}
