//! Cube geometry and its GPU buffers.
//!
//! The cube is eight shared corners with one colour each, indexed as two
//! triangles per face. Triangle winding is mixed, so the pipeline draws both
//! sides (see [`crate::pipelines::cube`]).

use wgpu::util::DeviceExt;

/// Types that describe their own vertex buffer layout.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 4],
    pub colour: [f32; 4],
}

impl CubeVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

    pub const fn new(position: [f32; 3], colour: [f32; 3]) -> Self {
        Self {
            position: [position[0], position[1], position[2], 1.0],
            colour: [colour[0], colour[1], colour[2], 1.0],
        }
    }
}

impl Vertex for CubeVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];

// back face (z = -1) first, then the front face (z = 1) with the same colours
pub const CUBE_VERTICES: [CubeVertex; 8] = [
    CubeVertex::new([-1.0, -1.0, -1.0], RED),
    CubeVertex::new([1.0, -1.0, -1.0], GREEN),
    CubeVertex::new([-1.0, 1.0, -1.0], BLUE),
    CubeVertex::new([1.0, 1.0, -1.0], YELLOW),
    CubeVertex::new([-1.0, -1.0, 1.0], RED),
    CubeVertex::new([1.0, -1.0, 1.0], GREEN),
    CubeVertex::new([-1.0, 1.0, 1.0], BLUE),
    CubeVertex::new([1.0, 1.0, 1.0], YELLOW),
];

#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 1, 2, 3,
    0, 1, 4, 1, 4, 5,
    0, 2, 4, 2, 4, 6,
    1, 5, 3, 5, 3, 7,
    2, 3, 6, 3, 6, 7,
    4, 5, 6, 5, 6, 7,
];

/// Vertex and index buffers ready to be drawn.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_format: wgpu::IndexFormat,
    pub num_elements: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, name: &str, vertices: &[CubeVertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Vertex Buffer")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Index Buffer")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            index_format: wgpu::IndexFormat::Uint32,
            num_elements: indices.len() as u32,
        }
    }

    pub fn cube(device: &wgpu::Device) -> Self {
        Self::new(device, "cube", &CUBE_VERTICES, &CUBE_INDICES)
    }
}
