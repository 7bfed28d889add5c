//! Frame encoding.
//!
//! [`encode_frame`] records the one render pass a frame consists of: clear
//! colour and depth, bind the cube pipeline and draw the indexed mesh. It
//! takes plain texture views so the same code renders to the window surface
//! and to offscreen targets.

use crate::{data_structures::mesh::Mesh, scene::CubeScene};

/// Drawing helpers on top of [`wgpu::RenderPass`].
pub trait DrawMesh<'a> {
    fn draw_mesh(
        &mut self,
        mesh: &'a Mesh,
        camera_bind_group: &'a wgpu::BindGroup,
        texture_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(
        &mut self,
        mesh: &'b Mesh,
        camera_bind_group: &'b wgpu::BindGroup,
        texture_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), mesh.index_format);
        self.set_bind_group(0, camera_bind_group, &[]);
        self.set_bind_group(1, texture_bind_group, &[]);
        self.draw_indexed(0..mesh.num_elements, 0, 0..1);
    }
}

pub fn encode_frame(
    encoder: &mut wgpu::CommandEncoder,
    scene: &CubeScene,
    colour_view: &wgpu::TextureView,
    depth_view: &wgpu::TextureView,
    clear_colour: wgpu::Color,
) {
    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Render Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: colour_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear_colour),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: depth_view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                // depth is only needed while this pass runs
                store: wgpu::StoreOp::Discard,
            }),
            stencil_ops: None,
        }),
        occlusion_query_set: None,
        timestamp_writes: None,
        multiview_mask: None,
    });

    render_pass.set_pipeline(&scene.pipeline);
    render_pass.draw_mesh(
        &scene.mesh,
        &scene.camera.bind_group,
        &scene.texture_bind_group,
    );
}
