use super::layer::LayerId;

/// Errors raised by the cube engine.
///
/// A move that is requested while another one is animating is not an error;
/// it is reported as [`MoveStatus::Dropped`](super::assembly::MoveStatus).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CubeError {
    /// The layer selector did not find exactly nine sub-cubes.
    #[error("layer {layer} has {found} sub-cubes, expected 9")]
    LayerIntegrity { layer: LayerId, found: usize },
    /// An assembly was built from the wrong number of bodies.
    #[error("cube assembly has {found} sub-cubes, expected 27")]
    PieceCount { found: usize },
    /// Unrecognised move notation.
    #[error("invalid move notation {0:?}")]
    Notation(String),
}
