//! Frame statistics with a smoothed frame rate

const FPS_SAMPLE_COUNT: usize = 60;

/// Frame counter plus FPS averaged over the last 60 frames
#[derive(Debug, Clone)]
pub struct FrameStats {
    pub frame_count: u64,
    pub smoothed_fps: f64,
    pub smoothed_frame_time_ms: f64,
    samples: [f64; FPS_SAMPLE_COUNT],
    sample_index: usize,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            smoothed_fps: 60.0,
            smoothed_frame_time_ms: 1000.0 / 60.0,
            samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            sample_index: 0,
        }
    }

    /// Record one frame's wall-clock duration in seconds
    pub fn record(&mut self, frame_seconds: f64) {
        self.frame_count += 1;
        self.samples[self.sample_index] = frame_seconds;
        self.sample_index = (self.sample_index + 1) % FPS_SAMPLE_COUNT;

        let avg = self.samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
        self.smoothed_frame_time_ms = avg * 1000.0;
        self.smoothed_fps = if avg > 0.0 { 1.0 / avg } else { 0.0 };
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_frames_converge() {
        let mut stats = FrameStats::new();
        for _ in 0..FPS_SAMPLE_COUNT {
            stats.record(0.01);
        }
        assert_eq!(stats.frame_count, FPS_SAMPLE_COUNT as u64);
        assert!((stats.smoothed_fps - 100.0).abs() < 1e-6);
        assert!((stats.smoothed_frame_time_ms - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_time_frames_do_not_divide_by_zero() {
        let mut stats = FrameStats::new();
        for _ in 0..FPS_SAMPLE_COUNT {
            stats.record(0.0);
        }
        assert_eq!(stats.smoothed_fps, 0.0);
    }
}
