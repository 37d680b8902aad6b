//! Layer identification and selection.
//!
//! Layers are never stored; membership is re-derived from live positions on
//! every query because each turn permutes which sub-cubes occupy a layer.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::traits::Transform;

/// Number of sub-cubes in any well-formed layer.
pub const LAYER_SIZE: usize = 9;

/// Default distance within which a projected position counts as on-layer.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Positive unit vector along the axis.
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Reads the coordinate of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    pub const fn name(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// A face or slice layer: every lattice point whose coordinate along `axis`
/// equals `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId {
    pub axis: Axis,
    /// One of -1, 0 or 1.
    pub value: i8,
}

impl LayerId {
    /// All nine face and slice layers.
    pub const ALL: [LayerId; 9] = [
        LayerId::new(Axis::X, -1),
        LayerId::new(Axis::X, 0),
        LayerId::new(Axis::X, 1),
        LayerId::new(Axis::Y, -1),
        LayerId::new(Axis::Y, 0),
        LayerId::new(Axis::Y, 1),
        LayerId::new(Axis::Z, -1),
        LayerId::new(Axis::Z, 0),
        LayerId::new(Axis::Z, 1),
    ];

    pub const fn new(axis: Axis, value: i8) -> Self {
        Self { axis, value }
    }

    pub fn target(self) -> f32 {
        f32::from(self.value)
    }

    /// Face layers sit on the surface; the `value == 0` layers are slices.
    pub fn is_face(self) -> bool {
        self.value != 0
    }

    /// Whether `position` lies on this layer within `tolerance`.
    pub fn contains(self, position: Vec3, tolerance: f32) -> bool {
        (self.axis.component(position) - self.target()).abs() < tolerance
    }

    /// Indices of the bodies currently on this layer.
    pub fn select<T: Transform>(self, bodies: &[T], tolerance: f32) -> Vec<usize> {
        bodies
            .iter()
            .enumerate()
            .filter(|(_, body)| self.contains(body.position(), tolerance))
            .map(|(i, _)| i)
            .collect()
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:+}", self.axis.name(), self.value)
    }
}

/// Selects bodies whose projection onto an arbitrary `direction` is within
/// `tolerance` of `target`.
pub fn select_along<T: Transform>(
    bodies: &[T],
    direction: Vec3,
    target: f32,
    tolerance: f32,
) -> Vec<usize> {
    bodies
        .iter()
        .enumerate()
        .filter(|(_, body)| (body.position().dot(direction) - target).abs() < tolerance)
        .map(|(i, _)| i)
        .collect()
}

/// Arithmetic mean of the selected bodies' positions.
pub fn centroid<T: Transform>(bodies: &[T], members: &[usize]) -> Vec3 {
    if members.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = members.iter().map(|&i| bodies[i].position()).sum();
    sum / members.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::sub_cube::SubCube;

    fn lattice() -> Vec<SubCube> {
        SubCube::lattice().collect()
    }

    #[test]
    fn every_layer_has_nine() {
        let cubes = lattice();
        for layer in LayerId::ALL {
            assert_eq!(layer.select(&cubes, DEFAULT_TOLERANCE).len(), LAYER_SIZE, "{layer}");
        }
    }

    #[test]
    fn negative_direction_selects_opposite_face() {
        let cubes = lattice();
        // Projection onto -z equal to 1 is the z = -1 layer.
        let mut back = select_along(&cubes, -Vec3::Z, 1.0, DEFAULT_TOLERANCE);
        let mut expected = LayerId::new(Axis::Z, -1).select(&cubes, DEFAULT_TOLERANCE);
        back.sort_unstable();
        expected.sort_unstable();
        assert_eq!(back, expected);
    }

    #[test]
    fn tolerance_is_strict() {
        let layer = LayerId::new(Axis::Y, 1);
        assert!(layer.contains(Vec3::new(0.0, 1.09, 0.0), 0.1));
        assert!(!layer.contains(Vec3::new(0.0, 1.1, 0.0), 0.1));
        assert!(!layer.contains(Vec3::new(0.0, 0.5, 0.0), 0.1));
    }

    #[test]
    fn face_centroid_is_face_center() {
        let cubes = lattice();
        let layer = LayerId::new(Axis::X, 1);
        let members = layer.select(&cubes, DEFAULT_TOLERANCE);
        assert!(centroid(&cubes, &members).abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn display() {
        assert_eq!(LayerId::new(Axis::Z, 1).to_string(), "z=+1");
        assert_eq!(LayerId::new(Axis::X, -1).to_string(), "x=-1");
        assert_eq!(LayerId::new(Axis::Y, 0).to_string(), "y=+0");
    }
}
