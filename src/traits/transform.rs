use glam::{Quat, Vec3};

/// Rigid-body transform abstraction - position and orientation in cube space
pub trait Transform {
    /// Current position
    fn position(&self) -> Vec3;

    /// Overwrite position
    fn set_position(&mut self, position: Vec3);

    /// Current orientation
    fn orientation(&self) -> Quat;

    /// Overwrite orientation
    fn set_orientation(&mut self, orientation: Quat);

    /// Rotate about an axis passing through `pivot` by `angle` radians.
    /// Both position and orientation are carried along as one rigid motion.
    fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, angle: f32) {
        let rotation = Quat::from_axis_angle(axis.normalize(), angle);
        self.set_position(pivot + rotation * (self.position() - pivot));
        self.set_orientation((rotation * self.orientation()).normalize());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    struct Body {
        position: Vec3,
        orientation: Quat,
    }

    impl Transform for Body {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }

        fn orientation(&self) -> Quat {
            self.orientation
        }

        fn set_orientation(&mut self, orientation: Quat) {
            self.orientation = orientation;
        }
    }

    #[test]
    fn rotate_around_origin() {
        let mut body = Body {
            position: Vec3::X,
            orientation: Quat::IDENTITY,
        };

        body.rotate_around(Vec3::ZERO, Vec3::Z, FRAC_PI_2);

        assert!(body.position.abs_diff_eq(Vec3::Y, 1e-6));
        assert!(body.orientation.abs_diff_eq(Quat::from_rotation_z(FRAC_PI_2), 1e-6));
    }

    #[test]
    fn rotate_around_offset_pivot() {
        let mut body = Body {
            position: Vec3::new(2.0, 0.0, 0.0),
            orientation: Quat::IDENTITY,
        };

        // Quarter turn about the vertical line through (1, 0, 0)
        body.rotate_around(Vec3::X, Vec3::Y, FRAC_PI_2);

        assert!(body.position.abs_diff_eq(Vec3::new(1.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn pivot_on_axis_stays_put() {
        let mut body = Body {
            position: Vec3::new(1.0, 0.0, 0.0),
            orientation: Quat::IDENTITY,
        };

        body.rotate_around(Vec3::X, Vec3::X, FRAC_PI_2);

        assert!(body.position.abs_diff_eq(Vec3::X, 1e-6));
        assert!(body.orientation.abs_diff_eq(Quat::from_rotation_x(FRAC_PI_2), 1e-6));
    }
}
