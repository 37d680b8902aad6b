//! Headless move runner.
//!
//! Drives the same start/tick cycle as the interactive loop, with a fixed
//! frame step instead of the wall clock.

use crate::cube::{Cube, CubeError, Move, MoveStatus};
use crate::frame::FrameIterator;

/// Upper bound on ticks spent on a single turn before giving up.
const MAX_FRAMES_PER_MOVE: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptReport {
    pub moves: usize,
    pub frames: u64,
    pub seconds: f32,
}

/// Play `moves` on `cube` one after another, each fully animated at `hz`
/// ticks per second. Stops at the first move whose layer fails validation.
pub fn run_moves(cube: &mut Cube, moves: &[Move], hz: f32) -> Result<ScriptReport, CubeError> {
    let mut frames = FrameIterator::fixed(hz);
    let mut seconds = 0.0;

    for &mv in moves {
        // Wait out anything already in progress, as the input loop would.
        while cube.is_rotating() {
            seconds += step(cube, &mut frames);
        }
        if cube.begin_move(mv)? == MoveStatus::Dropped {
            log::warn!("{mv} dropped");
            continue;
        }
        let start = frames.frame_number();
        while cube.is_rotating() {
            seconds += step(cube, &mut frames);
            if frames.frame_number() - start > MAX_FRAMES_PER_MOVE {
                log::error!("{mv} did not finish after {MAX_FRAMES_PER_MOVE} frames");
                break;
            }
        }
    }

    Ok(ScriptReport {
        moves: moves.len(),
        frames: frames.frame_number(),
        seconds,
    })
}

fn step(cube: &mut Cube, frames: &mut FrameIterator) -> f32 {
    let delta = frames.next().map_or(0.0, |f| f.delta);
    if let Some(done) = cube.tick(delta) {
        log::debug!("frame {}: {done} done", frames.frame_number());
    }
    delta
}
