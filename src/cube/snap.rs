//! Drift correction.
//!
//! Incremental rotation accumulates floating-point error. After every
//! completed turn positions are rounded to the integer lattice and
//! orientations to the nearest multiple of 90 degrees about each axis.

use std::f32::consts::FRAC_PI_4;

use glam::{EulerRot, Mat3, Quat, Vec3};

use crate::traits::Transform;

pub const QUARTER_TURN_DEGREES: f32 = 90.0;

/// Euler order matching (x, y, z) angles applied z first, then x, then y.
const EULER_ORDER: EulerRot = EulerRot::YXZ;

/// Snap a body's position and orientation onto the lattice.
pub fn snap_transform<T: Transform + ?Sized>(body: &mut T) {
    body.set_position(snap_position(body.position()));
    body.set_orientation(snap_orientation(body.orientation()));
}

/// Nearest lattice point, each axis rounded on its own.
pub fn snap_position(position: Vec3) -> Vec3 {
    Vec3::new(position.x.round(), position.y.round(), position.z.round())
}

/// Nearest multiple of 90 degrees, each component rounded on its own.
pub fn snap_angles(degrees: Vec3) -> Vec3 {
    Vec3::new(
        snap_angle(degrees.x),
        snap_angle(degrees.y),
        snap_angle(degrees.z),
    )
}

fn snap_angle(degrees: f32) -> f32 {
    (degrees / QUARTER_TURN_DEGREES).round() * QUARTER_TURN_DEGREES
}

/// Orientation as (x, y, z) Euler angles in degrees.
pub fn euler_degrees(orientation: Quat) -> Vec3 {
    let (y, x, z) = orientation.to_euler(EULER_ORDER);
    Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
}

pub fn from_euler_degrees(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EULER_ORDER,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Nearest lattice orientation.
///
/// Rounds the Euler angles per axis. Near pitch = ±90° the decomposition is
/// degenerate and the rounded angles can land a quarter turn away, so the
/// result falls back to snapping each rotated basis vector to its nearest
/// principal direction.
pub fn snap_orientation(orientation: Quat) -> Quat {
    let orientation = orientation.normalize();
    let snapped = from_euler_degrees(snap_angles(euler_degrees(orientation)));
    if snapped.angle_between(orientation) < FRAC_PI_4 {
        snapped
    } else {
        snap_basis(orientation)
    }
}

fn snap_basis(orientation: Quat) -> Quat {
    let m = Mat3::from_quat(orientation);
    let x = snap_direction(m.x_axis);
    let mut y = snap_direction(m.y_axis);
    if x.dot(y) != 0.0 {
        // Both columns snapped to the same axis; take the runner-up for y.
        y = snap_direction(m.y_axis - x * x.dot(m.y_axis));
    }
    Quat::from_mat3(&Mat3::from_cols(x, y, x.cross(y))).normalize()
}

/// Signed principal direction closest to `v`.
fn snap_direction(v: Vec3) -> Vec3 {
    let a = v.abs();
    if a.x >= a.y && a.x >= a.z {
        Vec3::X * v.x.signum()
    } else if a.y >= a.z {
        Vec3::Y * v.y.signum()
    } else {
        Vec3::Z * v.z.signum()
    }
}

/// Compares two rotations through their matrices, so `q` and `-q` agree.
pub fn same_orientation(a: Quat, b: Quat, epsilon: f32) -> bool {
    Mat3::from_quat(a.normalize()).abs_diff_eq(Mat3::from_quat(b.normalize()), epsilon)
}

pub fn is_lattice_position(position: Vec3, epsilon: f32) -> bool {
    (position - snap_position(position)).abs().max_element() <= epsilon
}

/// True when every rotated basis vector lies on a principal direction.
pub fn is_lattice_orientation(orientation: Quat, epsilon: f32) -> bool {
    let m = Mat3::from_quat(orientation.normalize());
    [m.x_axis, m.y_axis, m.z_axis]
        .into_iter()
        .all(|v| (v - snap_direction(v)).abs().max_element() <= epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn positions_round_per_axis() {
        assert_eq!(
            snap_position(Vec3::new(0.9999, -0.49, -1.5001)),
            Vec3::new(1.0, 0.0, -2.0)
        );
    }

    #[test]
    fn angles_round_per_component() {
        assert_eq!(
            snap_angles(Vec3::new(89.7, -44.0, 180.4)),
            Vec3::new(90.0, 0.0, 180.0)
        );
        assert_eq!(snap_angles(Vec3::new(-91.0, 46.0, 0.2)), Vec3::new(-90.0, 90.0, 0.0));
    }

    #[test]
    fn euler_round_trip() {
        let degrees = Vec3::new(30.0, -60.0, 90.0);
        let q = from_euler_degrees(degrees);
        assert!(euler_degrees(q).abs_diff_eq(degrees, 1e-3));
    }

    #[test]
    fn drifted_orientation_snaps_back() {
        let drifted = Quat::from_rotation_z(FRAC_PI_2 + 0.002) * Quat::from_rotation_y(-0.001);
        let snapped = snap_orientation(drifted);

        assert!(same_orientation(snapped, Quat::from_rotation_z(FRAC_PI_2), 1e-5));
        assert!(is_lattice_orientation(snapped, 1e-6));
    }

    #[test]
    fn gimbal_locked_orientation_snaps_correctly() {
        // A quarter turn about x puts the YXZ decomposition at pitch = 90.
        for drift in [0.0, 1e-4, -1e-4] {
            let exact = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_z(FRAC_PI_2);
            let drifted = exact * Quat::from_rotation_y(drift);
            let snapped = snap_orientation(drifted);
            assert!(same_orientation(snapped, exact, 1e-5), "drift {drift}");
        }
    }

    #[test]
    fn every_lattice_orientation_is_a_fixed_point() {
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    let q = Quat::from_rotation_y(y as f32 * FRAC_PI_2)
                        * Quat::from_rotation_x(x as f32 * FRAC_PI_2)
                        * Quat::from_rotation_z(z as f32 * FRAC_PI_2);
                    assert!(is_lattice_orientation(q, 1e-5));
                    assert!(same_orientation(snap_orientation(q), q, 1e-5));
                }
            }
        }
    }

    #[test]
    fn lattice_checks() {
        assert!(is_lattice_position(Vec3::new(1.0, 0.0, -1.0), 1e-6));
        assert!(!is_lattice_position(Vec3::new(1.0, 0.01, -1.0), 1e-3));
        assert!(!is_lattice_orientation(Quat::from_rotation_x(0.3), 1e-3));
        assert!(same_orientation(Quat::from_rotation_y(0.5), -Quat::from_rotation_y(0.5), 1e-6));
    }
}
