//! The spinning cube: every GPU object the frame needs, set up once.

use cgmath::Vector3;

use crate::{
    camera::{Camera, CameraResources, Projection},
    config::Settings,
    data_structures::{mesh::Mesh, spin::Spin, texture::Texture},
    pipelines::cube::{mk_cube_pipeline, mk_texture_bind_group, texture_bind_group_layout},
    resources,
};

#[derive(Debug)]
pub struct CubeScene {
    pub mesh: Mesh,
    pub pipeline: wgpu::RenderPipeline,
    pub camera: CameraResources,
    pub texture: Texture,
    pub texture_bind_group: wgpu::BindGroup,
    pub spin: Spin,
}

impl CubeScene {
    /// Load the shader (and the optional texture) and build the pipeline and buffers.
    ///
    /// A texture that cannot be loaded is replaced by plain white; a shader that
    /// cannot be loaded is an error.
    pub async fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        settings: &Settings,
        size: [u32; 2],
    ) -> anyhow::Result<Self> {
        let shader_source = resources::load_string(&settings.shader).await?;
        log::info!("loaded shader {}", settings.shader);

        let texture = match &settings.texture {
            Some(name) => match resources::load_texture(name, device, queue).await {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!("Texture {name} unavailable ({e:#}), using plain white");
                    Texture::white(device, queue)
                }
            },
            None => Texture::white(device, queue),
        };

        let camera = CameraResources::new(
            device,
            Camera::new(Vector3::new(0.0, 0.0, settings.camera_distance)),
            Projection::new(
                size[0],
                size[1],
                settings.fovy,
                settings.znear,
                settings.zfar,
            ),
        );

        let texture_layout = texture_bind_group_layout(device);
        let texture_bind_group = mk_texture_bind_group(device, &texture_layout, &texture);
        let pipeline = mk_cube_pipeline(
            device,
            format,
            &camera.bind_group_layout,
            &texture_layout,
            &shader_source,
        );
        let mesh = Mesh::cube(device);

        let mut scene = Self {
            mesh,
            pipeline,
            camera,
            texture,
            texture_bind_group,
            spin: settings.spin,
        };
        scene.update(queue, 0.0);
        Ok(scene)
    }

    /// Upload the matrix for `secs` seconds after start.
    pub fn update(&mut self, queue: &wgpu::Queue, secs: f32) {
        let model = self.spin.model_matrix(secs);
        self.camera.write(queue, model);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.projection.resize(width, height);
    }
}
