mod common;

use spinning_cube::snapshot::{padded_bytes_per_row, unpad_rows};

#[test]
fn should_align_rows_to_256_bytes() {
    assert_eq!(padded_bytes_per_row(1), Some(256));
    assert_eq!(padded_bytes_per_row(64), Some(256));
    assert_eq!(padded_bytes_per_row(65), Some(512));
    assert_eq!(padded_bytes_per_row(512), Some(2048));
}

#[test]
fn should_refuse_rows_wider_than_u32() {
    assert_eq!(padded_bytes_per_row(1 << 30), None);
    assert_eq!(padded_bytes_per_row(u32::MAX / 4), None);
}

#[test]
fn should_strip_row_padding() {
    // 2x2 image, 8 bytes of pixels per row padded to 12
    let data: Vec<u8> = vec![
        1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, //
        9, 10, 11, 12, 13, 14, 15, 16, 0, 0, 0, 0,
    ];
    assert_eq!(
        unpad_rows(&data, 2, 2, 12).expect("valid layout"),
        (1..=16).collect::<Vec<u8>>()
    );
}

#[test]
fn should_reject_stride_narrower_than_a_row() {
    assert!(unpad_rows(&[0; 8], 1, 1, 0).is_err());
    assert!(unpad_rows(&[0; 8], 2, 1, 4).is_err());
}

#[test]
fn should_reject_truncated_readback() {
    // second row is missing its last pixel
    assert!(unpad_rows(&[0; 16], 2, 2, 12).is_err());
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_clear_colour_around_the_cube() {
    use common::test_utils::{colour_to_pixel, render};
    use spinning_cube::Settings;

    let settings = Settings::default();
    let img = render(&settings, 64, 0.0);
    let background = colour_to_pixel(settings.clear_colour);

    assert_eq!(img.dimensions(), (64, 64));
    for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
        assert_eq!(*img.get_pixel(x, y), background, "corner ({x}, {y})");
    }
    let centre = *img.get_pixel(32, 32);
    assert_ne!(centre, background, "the cube must cover the centre");
    assert_eq!(centre.0[3], 255);
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_change_between_frames() {
    use common::test_utils::render;
    use spinning_cube::Settings;

    let settings = Settings::default();
    let first = render(&settings, 64, 0.0);
    let later = render(&settings, 64, 1.0);
    assert_ne!(first.as_raw(), later.as_raw());
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_use_configured_clear_colour() {
    use common::test_utils::{colour_to_pixel, render};
    use spinning_cube::{Settings, Spin};

    let settings = Settings::default()
        .with_clear_colour(wgpu::Color::BLACK)
        .with_spin(Spin::still())
        .with_texture(None);
    let img = render(&settings, 32, 3.0);
    assert_eq!(*img.get_pixel(0, 0), colour_to_pixel(wgpu::Color::BLACK));
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_fall_back_to_white_for_missing_texture() {
    use common::test_utils::render;
    use spinning_cube::Settings;

    let untextured = render(&Settings::default().with_texture(None), 64, 0.5);
    let missing = render(
        &Settings::default().with_texture(Some("does-not-exist.png")),
        64,
        0.5,
    );
    assert_eq!(untextured.as_raw(), missing.as_raw());
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_fail_for_sizes_beyond_the_device_limit() {
    use spinning_cube::{Settings, snapshot::render_frame};

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create a tokio runtime");
    let err = runtime
        .block_on(render_frame(&Settings::default(), 1 << 20, 16, 0.0))
        .expect_err("oversized snapshots must be refused");
    assert!(err.to_string().contains("device limit"), "{err}");
}
