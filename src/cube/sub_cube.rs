use glam::{IVec3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::snap;
use crate::traits::Transform;

/// One of the 27 rigid bodies composing the cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubCube {
    /// Stable identity, independent of where the body currently is.
    pub id: usize,
    /// Lattice point the body occupies in the solved state.
    pub home: IVec3,
    position: Vec3,
    orientation: Quat,
}

impl SubCube {
    pub fn new(id: usize, position: Vec3, orientation: Quat) -> Self {
        Self {
            id,
            home: position.round().as_ivec3(),
            position,
            orientation,
        }
    }

    /// All 27 lattice points in scan order (x fastest, then y, then z).
    pub fn lattice() -> impl Iterator<Item = SubCube> {
        (-1..=1)
            .flat_map(|z| (-1..=1).flat_map(move |y| (-1..=1).map(move |x| IVec3::new(x, y, z))))
            .enumerate()
            .map(|(id, home)| SubCube::new(id, home.as_vec3(), Quat::IDENTITY))
    }

    /// Orientation as (x, y, z) Euler angles in degrees.
    pub fn euler_degrees(&self) -> Vec3 {
        snap::euler_degrees(self.orientation)
    }

    /// Whether the body is back where it started, facing the same way.
    pub fn is_home(&self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(self.home.as_vec3(), epsilon)
            && snap::same_orientation(self.orientation, Quat::IDENTITY, epsilon)
    }

    pub fn is_lattice_aligned(&self, epsilon: f32) -> bool {
        snap::is_lattice_position(self.position, epsilon)
            && snap::is_lattice_orientation(self.orientation, epsilon)
    }
}

impl Transform for SubCube {
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
