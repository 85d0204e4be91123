//! Frame pacing for the driver loop.
//!
//! The simulation advances on a coarse tick counter derived from wall-clock
//! time, so the world advances at the target rate regardless of how often
//! the window loop spins.

use std::time::Duration;

/// Gates simulation steps to the target frame rate.
///
/// Each call maps elapsed time to a tick index, `round(fps * seconds)`,
/// and reports true only when the index has moved since the last call.
/// Polling faster than the target rate executes no extra steps; a stalled
/// loop resumes at the current tick rather than replaying missed ones.
pub struct FramePacer {
    target_fps: u32,
    last_tick: Option<u64>,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            last_tick: None,
        }
    }

    /// True when the tick counter has advanced since the previous call.
    pub fn should_advance(&mut self, elapsed: Duration) -> bool {
        let tick = (f64::from(self.target_fps) * elapsed.as_secs_f64()).round() as u64;
        if self.last_tick == Some(tick) {
            false
        } else {
            self.last_tick = Some(tick);
            true
        }
    }
}
