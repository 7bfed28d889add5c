//! Time-driven model rotation.

use cgmath::{Matrix4, Rad};

/// Angular velocities (radians per second) around the x and y axes.
///
/// The model matrix is `Rx(t * x) * Ry(t * y)`, i.e. vertices are rotated
/// around y first and then around x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self { x: 0.7, y: 1.0 }
    }
}

impl Spin {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A spin that never moves, useful for deterministic frames.
    pub fn still() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Model matrix after `secs` seconds.
    pub fn model_matrix(&self, secs: f32) -> Matrix4<f32> {
        Matrix4::from_angle_x(Rad(secs * self.x)) * Matrix4::from_angle_y(Rad(secs * self.y))
    }
}
