use std::time::Instant;

/// Longest delta handed to the simulation; longer stalls are clamped
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug, Clone, Copy)]
enum Pace {
    /// Wall-clock deltas
    RealTime { start: Instant, last: Instant },
    /// Constant step, independent of the clock
    Fixed { step: f32 },
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
#[derive(Debug, Clone)]
pub struct FrameIterator {
    frame_number: u64,
    time: f32,
    pace: Pace,
}

impl FrameIterator {
    /// Frames paced by the wall clock
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            time: 0.0,
            pace: Pace::RealTime { start: now, last: now },
        }
    }

    /// Frames `1 / hz` seconds apart, for headless runs and tests
    pub fn fixed(hz: f32) -> Self {
        Self {
            frame_number: 0,
            time: 0.0,
            pace: Pace::Fixed { step: 1.0 / hz.max(f32::EPSILON) },
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = match &mut self.pace {
            Pace::RealTime { start, last } => {
                let now = Instant::now();
                let delta = now.duration_since(*last).as_secs_f32();
                *last = now;
                self.time = now.duration_since(*start).as_secs_f32();
                delta.min(MAX_FRAME_DELTA)
            }
            Pace::Fixed { step } => {
                self.time += *step;
                *step
            }
        };

        let info = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_frames_are_evenly_spaced() {
        let frames: Vec<_> = FrameIterator::fixed(50.0).take(3).collect();

        assert_eq!(frames.iter().map(|f| f.number).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(frames.iter().all(|f| (f.delta - 0.02).abs() < 1e-7));
        assert!((frames[2].time - 0.06).abs() < 1e-6);
    }

    #[test]
    fn real_time_delta_is_clamped() {
        let mut frames = FrameIterator::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let frame = frames.next().unwrap();

        assert!(frame.delta > 0.0 && frame.delta <= MAX_FRAME_DELTA);
        assert_eq!(frames.frame_number(), 1);
    }
}
