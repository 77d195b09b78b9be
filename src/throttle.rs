//! Frame-rate gate deciding whether a camera frame gets processed at all.

use crate::util::{PostError, PostResult};
use std::time::{Duration, Instant};

/// Lets at most `fps` frames per second through.
#[derive(Clone, Debug)]
pub struct FrameThrottle {
    min_interval: Duration,
    last_run: Option<Instant>,
}

impl FrameThrottle {
    /// Creates a throttle admitting `fps` frames per second.
    pub fn new(fps: u32) -> PostResult<Self> {
        Ok(Self {
            min_interval: interval_for(fps)?,
            last_run: None,
        })
    }

    /// Changes the admitted rate; the last admission time is kept.
    pub fn set_fps(&mut self, fps: u32) -> PostResult<()> {
        self.min_interval = interval_for(fps)?;
        Ok(())
    }

    /// Minimum spacing between admitted frames.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Returns true and records `now` if the frame should be processed.
    ///
    /// The first frame is always admitted. Rejected frames leave the state
    /// untouched.
    pub fn ready_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_run {
            if now.saturating_duration_since(last) < self.min_interval {
                return false;
            }
        }
        self.last_run = Some(now);
        true
    }

    /// `ready_at` with the current time.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }
}

fn interval_for(fps: u32) -> PostResult<Duration> {
    if fps == 0 {
        return Err(PostError::InvalidInput("fps must be at least 1"));
    }
    Ok(Duration::from_nanos(1_000_000_000 / u64::from(fps)))
}

#[cfg(test)]
mod tests {
    use super::FrameThrottle;
    use crate::util::PostError;
    use std::time::{Duration, Instant};

    #[test]
    fn first_frame_always_passes() {
        let mut throttle = FrameThrottle::new(5).unwrap();
        assert!(throttle.ready_at(Instant::now()));
    }

    #[test]
    fn frames_inside_interval_are_rejected() {
        let mut throttle = FrameThrottle::new(5).unwrap();
        assert_eq!(throttle.min_interval(), Duration::from_millis(200));
        let t0 = Instant::now();
        assert!(throttle.ready_at(t0));
        assert!(!throttle.ready_at(t0 + Duration::from_millis(100)));
        // The rejected frame did not move the window.
        assert!(throttle.ready_at(t0 + Duration::from_millis(200)));
        assert!(!throttle.ready_at(t0 + Duration::from_millis(399)));
    }

    #[test]
    fn set_fps_changes_interval() {
        let mut throttle = FrameThrottle::new(5).unwrap();
        let t0 = Instant::now();
        assert!(throttle.ready_at(t0));
        throttle.set_fps(20).unwrap();
        assert!(throttle.ready_at(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert_eq!(
            FrameThrottle::new(0).err().unwrap(),
            PostError::InvalidInput("fps must be at least 1")
        );
        let mut throttle = FrameThrottle::new(1).unwrap();
        assert!(throttle.set_fps(0).is_err());
    }
}
