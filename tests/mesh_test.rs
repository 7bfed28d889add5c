use std::collections::BTreeSet;

use spinning_cube::data_structures::mesh::{CUBE_INDICES, CUBE_VERTICES, CubeVertex, Vertex};

#[test]
fn should_describe_two_vec4_attributes_with_32_byte_stride() {
    let layout = CubeVertex::desc();
    assert_eq!(layout.array_stride, 32);
    assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

    let attributes: Vec<_> = layout
        .attributes
        .iter()
        .map(|a| (a.shader_location, a.offset, a.format))
        .collect();
    assert_eq!(
        attributes,
        vec![
            (0, 0, wgpu::VertexFormat::Float32x4),
            (1, 16, wgpu::VertexFormat::Float32x4),
        ]
    );
}

#[test]
fn should_pack_vertices_tightly() {
    let bytes: &[u8] = bytemuck::cast_slice(&CUBE_VERTICES);
    assert_eq!(bytes.len(), 8 * 32);
    let indices: &[u8] = bytemuck::cast_slice(&CUBE_INDICES);
    assert_eq!(indices.len(), 36 * 4);
}

#[test]
fn should_place_corners_on_the_unit_cube() {
    for vertex in CUBE_VERTICES {
        assert_eq!(vertex.position[3], 1.0);
        assert_eq!(vertex.colour[3], 1.0);
        for c in &vertex.position[..3] {
            assert!(c.abs() == 1.0, "{:?} is not a cube corner", vertex.position);
        }
    }
    let distinct: BTreeSet<_> = CUBE_VERTICES
        .iter()
        .map(|v| v.position.map(|c| c as i32))
        .collect();
    assert_eq!(distinct.len(), 8);
}

#[test]
fn should_share_colours_between_back_and_front_faces() {
    for i in 0..4 {
        assert_eq!(CUBE_VERTICES[i].colour, CUBE_VERTICES[i + 4].colour);
        assert_eq!(CUBE_VERTICES[i].position[2], -1.0);
        assert_eq!(CUBE_VERTICES[i + 4].position[2], 1.0);
    }
    assert_eq!(CUBE_VERTICES[0].colour, [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(CUBE_VERTICES[3].colour, [1.0, 1.0, 0.0, 1.0]);
}

#[test]
fn should_index_six_planar_faces() {
    assert_eq!(CUBE_INDICES.len(), 36);
    assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_VERTICES.len()));

    let mut faces = BTreeSet::new();
    for face in CUBE_INDICES.chunks(6) {
        let corners: BTreeSet<u32> = face.iter().copied().collect();
        assert_eq!(corners.len(), 4, "face {face:?} must use four corners");

        // all four corners share one fixed coordinate
        let shared_axis = (0..3).find(|&axis| {
            let values: BTreeSet<i32> = corners
                .iter()
                .map(|&i| CUBE_VERTICES[i as usize].position[axis] as i32)
                .collect();
            values.len() == 1
        });
        assert!(shared_axis.is_some(), "face {face:?} is not planar");
        faces.insert(corners.into_iter().collect::<Vec<_>>());
    }
    assert_eq!(faces.len(), 6);
}
