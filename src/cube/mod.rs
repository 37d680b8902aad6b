//! Layer-rotation engine for a 3x3x3 cube.

pub mod animator;
pub mod assembly;
pub mod dispatch;
pub mod error;
pub mod layer;
pub mod moves;
pub mod snap;
pub mod sub_cube;

pub use animator::{ActiveRotation, PivotMode, RotationAnimator, RotationState};
pub use assembly::{Cube, CubeSettings, CubeSnapshot, MoveStatus, SubCubeState};
pub use dispatch::KeyBindings;
pub use error::CubeError;
pub use layer::{Axis, LayerId};
pub use moves::{Face, LayerTurn, Move, QuarterTurn};
pub use sub_cube::SubCube;
