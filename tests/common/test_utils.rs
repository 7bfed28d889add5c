#![allow(dead_code)]

use cgmath::Matrix4;

pub(crate) const EPSILON: f32 = 1e-4;

pub(crate) fn assert_matrix_eq(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let actual: [[f32; 4]; 4] = actual.into();
    let expected: [[f32; 4]; 4] = expected.into();
    for col in 0..4 {
        for row in 0..4 {
            assert!(
                (actual[col][row] - expected[col][row]).abs() < EPSILON,
                "element [{col}][{row}] differs: {} != {}\nactual:   {actual:?}\nexpected: {expected:?}",
                actual[col][row],
                expected[col][row],
            );
        }
    }
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{actual} != {expected}"
    );
}

pub(crate) fn colour_to_pixel(colour: wgpu::Color) -> image::Rgba<u8> {
    let f_to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    image::Rgba([
        f_to_u8(colour.r),
        f_to_u8(colour.g),
        f_to_u8(colour.b),
        f_to_u8(colour.a),
    ])
}

#[cfg(feature = "integration-tests")]
pub(crate) fn render(
    settings: &spinning_cube::Settings,
    size: u32,
    secs: f32,
) -> image::RgbaImage {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create a tokio runtime");
    runtime
        .block_on(spinning_cube::snapshot::render_frame(settings, size, size, secs))
        .expect("Failed to render an offscreen frame")
}
