//! Animated quarter turns.
//!
//! `Idle -> Rotating -> Idle`, advanced by an externally driven `tick`. Each
//! tick rotates every member about the shared pivot by an increment
//! proportional to the elapsed time, clamped so the increments sum to
//! exactly one quarter turn. The final tick snaps every member.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::layer::centroid;
use super::moves::LayerTurn;
use super::snap;
use crate::core::timer::Countdown;
use crate::traits::Transform;

/// Default duration of one animated quarter turn, in seconds.
pub const DEFAULT_DURATION: f32 = 0.5;

/// Leftover angle below which a turn counts as complete.
const ANGLE_EPSILON: f32 = 1e-6;

/// Where the shared rotation pivot is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PivotMode {
    /// Mean position of the selected layer.
    #[default]
    Centroid,
    /// The cube origin.
    Origin,
}

impl PivotMode {
    pub fn pivot<T: Transform>(self, bodies: &[T], members: &[usize]) -> Vec3 {
        match self {
            PivotMode::Centroid => centroid(bodies, members),
            PivotMode::Origin => Vec3::ZERO,
        }
    }
}

/// A quarter turn in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRotation {
    pub turn: LayerTurn,
    pub members: Vec<usize>,
    pub pivot: Vec3,
    /// Unsigned angle still to be applied, in radians.
    remaining: f32,
    timer: Countdown,
}

impl ActiveRotation {
    /// Fraction of the quarter turn already applied.
    pub fn progress(&self) -> f32 {
        1.0 - self.remaining / FRAC_PI_2
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RotationState {
    #[default]
    Idle,
    Rotating(ActiveRotation),
}

/// Drives one quarter turn at a time over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationAnimator {
    state: RotationState,
    duration: f32,
}

impl Default for RotationAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl RotationAnimator {
    /// A zero duration completes each turn on its first tick.
    pub fn new(duration: f32) -> Self {
        Self {
            state: RotationState::Idle,
            duration: duration.max(0.0),
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn active(&self) -> Option<&ActiveRotation> {
        match &self.state {
            RotationState::Idle => None,
            RotationState::Rotating(active) => Some(active),
        }
    }

    /// The move lock.
    pub fn is_rotating(&self) -> bool {
        matches!(self.state, RotationState::Rotating(_))
    }

    /// Enter `Rotating`. Returns false, changing nothing, if a turn is
    /// already in progress.
    pub fn start(&mut self, turn: LayerTurn, members: Vec<usize>, pivot: Vec3) -> bool {
        if self.is_rotating() {
            return false;
        }
        log::debug!("rotating {turn} about {pivot} ({} members)", members.len());
        self.state = RotationState::Rotating(ActiveRotation {
            turn,
            members,
            pivot,
            remaining: FRAC_PI_2,
            timer: Countdown::started(self.duration),
        });
        true
    }

    /// Advance by `delta` seconds. On the tick that completes the turn,
    /// members are snapped, the lock is released and the turn is returned.
    pub fn tick<T: Transform>(&mut self, bodies: &mut [T], delta: f32) -> Option<LayerTurn> {
        let RotationState::Rotating(active) = &mut self.state else {
            return None;
        };

        let full_step = if self.duration > 0.0 {
            FRAC_PI_2 * delta.max(0.0) / self.duration
        } else {
            FRAC_PI_2
        };
        let timed_out = active.timer.tick(delta.max(0.0));
        let mut step = if timed_out {
            active.remaining
        } else {
            full_step.min(active.remaining)
        };
        if active.remaining - step <= ANGLE_EPSILON {
            step = active.remaining;
        }

        if step > 0.0 {
            let axis = active.turn.axis().unit();
            let angle = step * active.turn.turn.sign();
            for &i in &active.members {
                bodies[i].rotate_around(active.pivot, axis, angle);
            }
            active.remaining -= step;
        }

        if active.remaining > 0.0 {
            return None;
        }

        let RotationState::Rotating(done) = std::mem::take(&mut self.state) else {
            return None;
        };
        for &i in &done.members {
            snap::snap_transform(&mut bodies[i]);
        }
        Some(done.turn)
    }
}
