use cgmath::Rad;
use spinning_cube::{Settings, Spin, context::pick_surface_format};

#[test]
fn should_accept_defaults() {
    let settings = Settings::default();
    settings.validate().expect("defaults must be valid");

    assert_eq!(settings.clear_colour, wgpu::Color::WHITE);
    assert_eq!(settings.camera_distance, 5.0);
    assert_eq!(settings.fovy, Rad(1.0));
    assert_eq!(settings.znear, 0.01);
    assert_eq!(settings.zfar, 100.0);
    assert_eq!(settings.shader, "shader.wgsl");
    assert_eq!(settings.texture.as_deref(), Some("base.png"));
    assert_eq!(settings.preferred_format, wgpu::TextureFormat::Rgba8Unorm);
}

#[test]
fn should_reject_degenerate_projection() {
    let mut settings = Settings::default();
    settings.znear = 0.0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.zfar = settings.znear;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.fovy = Rad(std::f32::consts::PI);
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.zfar = f32::INFINITY;
    assert!(settings.validate().is_err());
}

#[test]
fn should_reject_bad_scene_settings() {
    let settings = Settings::default().with_spin(Spin::new(f32::NAN, 1.0));
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.camera_distance = -5.0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.shader.clear();
    let err = settings.validate().unwrap_err();
    assert!(err.to_string().contains("shader"), "{err}");
}

#[test]
fn should_apply_builder_overrides() {
    let settings = Settings::default()
        .with_clear_colour(wgpu::Color::BLACK)
        .with_spin(Spin::still())
        .with_texture(None);
    assert_eq!(settings.clear_colour, wgpu::Color::BLACK);
    assert_eq!(settings.spin, Spin::still());
    assert!(settings.texture.is_none());
    settings.validate().expect("overrides stay valid");
}

#[test]
fn should_prefer_configured_surface_format() {
    use wgpu::TextureFormat::*;

    assert_eq!(
        pick_surface_format(&[Bgra8UnormSrgb, Rgba8Unorm], Rgba8Unorm),
        Some(Rgba8Unorm)
    );
    assert_eq!(
        pick_surface_format(&[Bgra8Unorm, Bgra8UnormSrgb], Rgba8Unorm),
        Some(Bgra8Unorm)
    );
    assert_eq!(pick_surface_format(&[], Rgba8Unorm), None);
}

#[test]
fn should_avoid_srgb_surface_formats() {
    use wgpu::TextureFormat::*;

    assert_eq!(
        pick_surface_format(&[Bgra8UnormSrgb, Bgra8Unorm], Rgba8Unorm),
        Some(Bgra8Unorm)
    );
    assert_eq!(
        pick_surface_format(&[Bgra8UnormSrgb, Rgba8UnormSrgb], Rgba8Unorm),
        Some(Bgra8UnormSrgb)
    );
}
