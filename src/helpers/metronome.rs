use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps frames evenly spaced by sleeping out whatever part of each frame's time budget the
/// sweep did not use.
pub struct Metronome {
    /// When the current frame started. Advanced by exactly one frame per sleep() while the game
    /// keeps up, so rounding errors don't accumulate.
    frame_start: Instant,
    frame: Duration,
    /// Sleep at least this long every frame, even when running behind
    min_sleep: Duration,
}

impl Metronome {
    /// Both times in seconds
    pub fn new(frame: f64, min_sleep: f64) -> Self {
        assert!(frame >= 0.0);
        assert!(min_sleep >= 0.0);
        Self {
            frame_start: Instant::now(),
            frame: Duration::from_secs_f64(frame),
            min_sleep: Duration::from_secs_f64(min_sleep),
        }
    }

    /// Sleeps until the current frame is over. When the frame already ran over budget (or the
    /// remainder is shorter than min_sleep) it sleeps for min_sleep and restarts the schedule from
    /// now instead of trying to catch up.
    pub fn sleep(&mut self) {
        let elapsed = self.frame_start.elapsed();
        match self.frame.checked_sub(elapsed) {
            Some(remaining) if remaining >= self.min_sleep => {
                sleep(remaining);
                self.frame_start += self.frame;
            }
            _ => {
                trace!(
                    "frame took {:?}, budget is {:?}",
                    elapsed,
                    self.frame
                );
                if self.min_sleep > Duration::from_secs(0) {
                    sleep(self.min_sleep);
                }
                self.frame_start = Instant::now();
            }
        }
    }
}
