//! The cube assembly: 27 sub-cubes plus the move lock.

use glam::IVec3;
use serde::{Deserialize, Serialize};

use super::animator::{ActiveRotation, PivotMode, RotationAnimator, DEFAULT_DURATION};
use super::error::CubeError;
use super::layer::{LayerId, DEFAULT_TOLERANCE, LAYER_SIZE};
use super::moves::{LayerTurn, Move};
use super::sub_cube::SubCube;
use crate::traits::Transform;

/// Number of sub-cubes in a 3x3x3 assembly.
pub const SUB_CUBE_COUNT: usize = 27;

/// Distance from the lattice still counted as aligned at rest.
pub const LATTICE_EPSILON: f32 = 1e-4;

/// Engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeSettings {
    /// Seconds per animated quarter turn.
    pub rotation_duration: f32,
    /// Layer membership tolerance.
    pub tolerance: f32,
    pub pivot: PivotMode,
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self {
            rotation_duration: DEFAULT_DURATION,
            tolerance: DEFAULT_TOLERANCE,
            pivot: PivotMode::default(),
        }
    }
}

/// Outcome of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// The turn was accepted and is now animating (or, for
    /// [`Cube::apply_immediately`], already done).
    Started,
    /// A turn was already in progress; the request was ignored.
    Dropped,
}

#[derive(Debug, Clone)]
pub struct Cube {
    cubes: Vec<SubCube>,
    animator: RotationAnimator,
    settings: CubeSettings,
    completed: u64,
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved(CubeSettings::default())
    }
}

impl Cube {
    /// 27 unit sub-cubes at every lattice point.
    pub fn solved(settings: CubeSettings) -> Self {
        Self {
            cubes: SubCube::lattice().collect(),
            animator: RotationAnimator::new(settings.rotation_duration),
            settings,
            completed: 0,
        }
    }

    /// Build an assembly from its child bodies. Every layer must hold
    /// exactly nine of them.
    pub fn from_sub_cubes(cubes: Vec<SubCube>, settings: CubeSettings) -> Result<Self, CubeError> {
        if cubes.len() != SUB_CUBE_COUNT {
            return Err(CubeError::PieceCount { found: cubes.len() });
        }
        for layer in LayerId::ALL {
            let found = layer.select(&cubes, settings.tolerance).len();
            if found != LAYER_SIZE {
                log::error!("cube assembly: layer {layer} has {found} sub-cubes");
                return Err(CubeError::LayerIntegrity { layer, found });
            }
        }
        Ok(Self {
            cubes,
            animator: RotationAnimator::new(settings.rotation_duration),
            settings,
            completed: 0,
        })
    }

    pub fn sub_cubes(&self) -> &[SubCube] {
        &self.cubes
    }

    /// Direct access to one body, as a host scene graph would allow. Moving
    /// pieces off the lattice makes later turns fail their layer check.
    pub fn sub_cube_mut(&mut self, index: usize) -> Option<&mut SubCube> {
        self.cubes.get_mut(index)
    }

    pub fn settings(&self) -> &CubeSettings {
        &self.settings
    }

    /// Number of turns committed so far.
    pub fn completed_moves(&self) -> u64 {
        self.completed
    }

    /// The move lock.
    pub fn is_rotating(&self) -> bool {
        self.animator.is_rotating()
    }

    pub fn active_rotation(&self) -> Option<&ActiveRotation> {
        self.animator.active()
    }

    /// Indices of the sub-cubes currently on `layer`.
    pub fn select(&self, layer: LayerId) -> Vec<usize> {
        layer.select(&self.cubes, self.settings.tolerance)
    }

    /// Select, validate and start an animated quarter turn.
    ///
    /// While a turn is animating the request is dropped. A layer that does not
    /// hold exactly nine sub-cubes aborts the move and leaves the lock free.
    pub fn begin_turn(&mut self, turn: LayerTurn) -> Result<MoveStatus, CubeError> {
        if self.is_rotating() {
            log::debug!("dropped {turn}: rotation in progress");
            return Ok(MoveStatus::Dropped);
        }
        let members = self.checked_select(turn.layer)?;
        let pivot = self.settings.pivot.pivot(&self.cubes, &members);
        self.animator.start(turn, members, pivot);
        Ok(MoveStatus::Started)
    }

    pub fn begin_move(&mut self, mv: Move) -> Result<MoveStatus, CubeError> {
        log::info!("move {mv}");
        self.begin_turn(mv.layer_turn())
    }

    /// Advance the active turn by `delta` seconds. Returns the turn on the
    /// tick that commits it.
    pub fn tick(&mut self, delta: f32) -> Option<LayerTurn> {
        let done = self.animator.tick(&mut self.cubes, delta)?;
        self.completed += 1;
        log::debug!("committed {done} ({} total)", self.completed);
        Some(done)
    }

    /// Perform a whole quarter turn in one step, without animation. Obeys
    /// the same lock and layer checks as [`Cube::begin_move`].
    pub fn apply_immediately(&mut self, mv: Move) -> Result<MoveStatus, CubeError> {
        if self.is_rotating() {
            return Ok(MoveStatus::Dropped);
        }
        log::info!("move {mv} (immediate)");
        let turn = mv.layer_turn();
        let members = self.checked_select(turn.layer)?;
        let pivot = self.settings.pivot.pivot(&self.cubes, &members);
        let mut instant = RotationAnimator::new(0.0);
        instant.start(turn, members, pivot);
        if instant.tick(&mut self.cubes, 0.0).is_some() {
            self.completed += 1;
        }
        Ok(MoveStatus::Started)
    }

    fn checked_select(&self, layer: LayerId) -> Result<Vec<usize>, CubeError> {
        let members = self.select(layer);
        if members.len() != LAYER_SIZE {
            log::error!("layer {layer} has {} sub-cubes, move aborted", members.len());
            return Err(CubeError::LayerIntegrity {
                layer,
                found: members.len(),
            });
        }
        Ok(members)
    }

    /// Every sub-cube sits exactly on the lattice.
    pub fn is_lattice_aligned(&self) -> bool {
        self.cubes.iter().all(|c| c.is_lattice_aligned(LATTICE_EPSILON))
    }

    /// Every sub-cube is back at its starting transform.
    pub fn is_solved(&self) -> bool {
        !self.is_rotating() && self.cubes.iter().all(|c| c.is_home(LATTICE_EPSILON))
    }

    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot {
            completed_moves: self.completed,
            rotating: self.is_rotating(),
            lattice_aligned: self.is_lattice_aligned(),
            solved: self.is_solved(),
            sub_cubes: self
                .cubes
                .iter()
                .map(|c| SubCubeState {
                    id: c.id,
                    home: c.home,
                    position: c.position().to_array(),
                    euler_degrees: c.euler_degrees().to_array(),
                })
                .collect(),
        }
    }
}

/// Serialisable view of the assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    pub completed_moves: u64,
    pub rotating: bool,
    pub lattice_aligned: bool,
    pub solved: bool,
    pub sub_cubes: Vec<SubCubeState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCubeState {
    pub id: usize,
    pub home: IVec3,
    pub position: [f32; 3],
    pub euler_degrees: [f32; 3],
}
