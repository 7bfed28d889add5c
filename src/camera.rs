//! Camera, projection and the model-view-projection uniform.
//!
//! The camera never moves: it sits on the +z axis looking at the origin, so
//! its view matrix is simply the inverse of its translation. The projection
//! maps view-space depth onto wgpu's `[0, 1]` clip range.

use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};

/// Converts OpenGL's `[-1, 1]` clip depth (what `cgmath::perspective` emits) into wgpu's `[0, 1]`.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
}

impl Camera {
    pub fn new<V: Into<Vector3<f32>>>(position: V) -> Self {
        Self {
            position: position.into(),
        }
    }

    /// World-to-view transform.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(-self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: aspect_ratio(width, height),
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    /// Zero-sized windows keep the previous aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

/// The single `mat4x4<f32>` the vertex shader reads at group 0, binding 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Matrix4::identity().into(),
        }
    }

    /// Stores `projection * view * model`.
    pub fn update_view_proj(
        &mut self,
        camera: &Camera,
        projection: &Projection,
        model: Matrix4<f32>,
    ) {
        self.view_proj = mvp(camera, projection, model).into();
    }
}

pub fn mvp(camera: &Camera, projection: &Projection, model: Matrix4<f32>) -> Matrix4<f32> {
    projection.calc_matrix() * camera.calc_matrix() * model
}

/// GPU side of the camera: the uniform buffer and its bind group.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub projection: Projection,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, camera: Camera, projection: Projection) -> Self {
        let uniform = CameraUniform::new();
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = crate::pipelines::cube::camera_bind_group_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            camera,
            projection,
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Recompute the matrix for `model` and upload it.
    pub fn write(&mut self, queue: &wgpu::Queue, model: Matrix4<f32>) {
        self.uniform
            .update_view_proj(&self.camera, &self.projection, model);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
