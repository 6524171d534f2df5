//! Frame timing and FPS bookkeeping
//!
//! Timestamps come from the platform (`performance.now()` on the web,
//! `Instant` natively) as seconds, so both stay testable.

/// Measures the time between consecutive `mark` calls
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous mark; 0 on the first call or if the
    /// clock went backwards
    pub fn mark(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

/// Counts frames and publishes the total once per accumulated second
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    seconds: f32,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `elapsed` seconds.
    /// Returns the new FPS when a second boundary was crossed.
    pub fn frame(&mut self, elapsed: f32) -> Option<u32> {
        self.frames += 1;
        self.seconds += elapsed;
        if self.seconds >= 1.0 {
            self.seconds -= 1.0;
            self.fps = self.frames;
            self.frames = 0;
            log::debug!("FPS: {}", self.fps);
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last published value
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frames counted toward the next report
    pub fn pending_frames(&self) -> u32 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_timer_first_mark_is_zero() {
        let mut t = FrameTimer::new();
        assert_eq!(t.mark(10.0), 0.0);
        assert!((t.mark(10.25) - 0.25).abs() < 1e-6);
        assert_eq!(t.mark(9.0), 0.0);
    }

    #[test]
    fn test_reports_after_one_second() {
        let mut fps = FpsCounter::new();
        for _ in 0..3 {
            assert_eq!(fps.frame(0.25), None);
        }
        assert_eq!(fps.frame(0.25), Some(4));
        assert_eq!(fps.fps(), 4);
        assert_eq!(fps.pending_frames(), 0);
    }

    #[test]
    fn test_long_frame_carries_remainder() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.frame(2.5), Some(1));
        // 1.5s still banked: the next frame reports again
        assert_eq!(fps.frame(0.0), Some(1));
        assert_eq!(fps.frame(0.0), None);
    }

    proptest! {
        #[test]
        fn prop_reports_once_per_second(frame_ms in 1u32..100, frames in 1usize..500) {
            let dt = frame_ms as f32 / 1000.0;
            let mut fps = FpsCounter::new();
            let mut reports = 0usize;
            let mut counted = 0u32;
            for _ in 0..frames {
                counted += 1;
                if let Some(n) = fps.frame(dt) {
                    prop_assert_eq!(n, counted);
                    prop_assert_eq!(fps.pending_frames(), 0);
                    counted = 0;
                    reports += 1;
                }
            }
            // A dt under one second can never cross two boundaries at once
            let total = dt * frames as f32;
            prop_assert!(reports as f32 <= total + 1e-3);
            prop_assert!(reports as f32 >= total.floor() - 1.0);
        }
    }
}
