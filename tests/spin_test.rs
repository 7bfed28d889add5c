mod common;

use std::f32::consts::FRAC_PI_2;

use cgmath::{Matrix4, Rad, SquareMatrix, Vector4};
use common::test_utils::{assert_close, assert_matrix_eq};
use spinning_cube::Spin;

#[test]
fn should_start_unrotated() {
    assert_matrix_eq(Spin::default().model_matrix(0.0), Matrix4::identity());
}

#[test]
fn should_never_move_when_still() {
    assert_matrix_eq(Spin::still().model_matrix(42.0), Matrix4::identity());
}

#[test]
fn should_rotate_around_x_then_y_in_product_order() {
    let spin = Spin::default();
    assert_eq!(spin, Spin::new(0.7, 1.0));

    let t = 2.0;
    let expected = Matrix4::from_angle_x(Rad(t * 0.7)) * Matrix4::from_angle_y(Rad(t));
    assert_matrix_eq(spin.model_matrix(t), expected);
}

#[test]
fn should_turn_x_axis_towards_negative_z_around_y() {
    let spin = Spin::new(0.0, 1.0);
    let rotated = spin.model_matrix(FRAC_PI_2) * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_close(rotated.x, 0.0);
    assert_close(rotated.y, 0.0);
    assert_close(rotated.z, -1.0);
}

#[test]
fn should_differ_between_frames() {
    let spin = Spin::default();
    assert_ne!(spin.model_matrix(0.5), spin.model_matrix(1.0));
}
