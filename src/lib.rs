//! spinning-cube
//!
//! A small cross-platform wgpu demo: a vertex-coloured cube rotating in front
//! of a fixed camera, rendered either into a native window or into a browser
//! canvas. Each frame the model-view-projection matrix is recomputed from the
//! elapsed time, uploaded into a uniform buffer and the indexed cube is drawn
//! with depth testing.
//!
//! High-level modules
//! - `camera`: camera, zero-to-one depth projection and the MVP uniform
//! - `config`: runtime settings and their validation
//! - `context`: GPU instance, surface, device/queue and depth attachment
//! - `data_structures`: cube geometry, spin and textures
//! - `flow`: the winit event loop and per-frame redraw
//! - `pipelines`: bind group layouts and the cube render pipeline
//! - `render`: encoding of the single render pass a frame consists of
//! - `resources`: loading shader and texture assets
//! - `scene`: the GPU objects of the cube, built once
//! - `snapshot`: offscreen rendering of single frames (native only)
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;
#[cfg(not(target_arch = "wasm32"))]
pub mod snapshot;

pub use config::Settings;
pub use data_structures::spin::Spin;
pub use flow::run;

/// Run with the default settings.
pub fn run_default() -> anyhow::Result<()> {
    run(Settings::default())
}
