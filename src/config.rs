//! Runtime settings.
//!
//! [`Settings`] collects every constant the demo uses: clear colour, spin
//! rates, camera placement, projection parameters and asset names. The
//! defaults reproduce the classic look (white background, cube five units in
//! front of the camera, one radian field of view).

use anyhow::{Result, bail};

use crate::data_structures::spin::Spin;

#[derive(Clone, Debug)]
pub struct Settings {
    /// Window title on native platforms.
    pub title: String,
    pub clear_colour: wgpu::Color,
    pub spin: Spin,
    /// Distance between the camera and the cube centre along +z.
    pub camera_distance: f32,
    pub fovy: cgmath::Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    /// WGSL source, loaded through [`crate::resources::load_string`].
    pub shader: String,
    /// Optional colour texture. A missing file falls back to plain white.
    pub texture: Option<String>,
    /// DOM id of the canvas the browser build renders into.
    pub canvas_id: String,
    /// Used when the surface supports it, otherwise the first supported format.
    pub preferred_format: wgpu::TextureFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "spinning-cube".to_string(),
            clear_colour: wgpu::Color::WHITE,
            spin: Spin::default(),
            camera_distance: 5.0,
            fovy: cgmath::Rad(1.0),
            znear: 0.01,
            zfar: 100.0,
            shader: "shader.wgsl".to_string(),
            texture: Some("base.png".to_string()),
            canvas_id: "canvas".to_string(),
            preferred_format: wgpu::TextureFormat::Rgba8Unorm,
        }
    }
}

impl Settings {
    pub fn with_clear_colour(mut self, clear_colour: wgpu::Color) -> Self {
        self.clear_colour = clear_colour;
        self
    }

    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_texture(mut self, texture: Option<&str>) -> Self {
        self.texture = texture.map(str::to_string);
        self
    }

    /// Reject settings that would produce a degenerate projection or an empty scene.
    pub fn validate(&self) -> Result<()> {
        if !(self.znear > 0.0) {
            bail!("znear must be positive, got {}", self.znear);
        }
        if !(self.zfar > self.znear) || !self.zfar.is_finite() {
            bail!(
                "zfar ({}) must be finite and greater than znear ({})",
                self.zfar,
                self.znear
            );
        }
        if !(self.fovy.0 > 0.0 && self.fovy.0 < std::f32::consts::PI) {
            bail!("fovy must lie in (0, pi) radians, got {}", self.fovy.0);
        }
        if !(self.camera_distance > 0.0) || !self.camera_distance.is_finite() {
            bail!(
                "camera distance must be positive, got {}",
                self.camera_distance
            );
        }
        if !self.spin.x.is_finite() || !self.spin.y.is_finite() {
            bail!("spin rates must be finite, got {:?}", self.spin);
        }
        if self.shader.is_empty() {
            bail!("no shader asset configured");
        }
        Ok(())
    }
}
