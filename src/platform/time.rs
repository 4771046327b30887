//! Frame pacing
//!
//! The loop runs at a fixed rate: after each tick the clock sleeps until the
//! next tick boundary. Unthrottled clocks never sleep, which is what the
//! tests and fast headless runs use.

use std::time::{Duration, Instant};

/// Fixed-interval frame limiter
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl FrameClock {
    /// Clock that paces to `rate` ticks per second
    pub fn fixed(rate: u32) -> Self {
        Self {
            interval: Some(Duration::from_secs(1) / rate.max(1)),
            next_deadline: None,
        }
    }

    /// Clock that never waits
    pub fn unthrottled() -> Self {
        Self {
            interval: None,
            next_deadline: None,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Block until the next tick boundary. If a frame overran, the schedule
    /// restarts from now instead of trying to catch up.
    pub fn wait(&mut self) {
        let Some(interval) = self.interval else {
            return;
        };
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + interval);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + interval);
        } else {
            self.next_deadline = Some(now + interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_interval() {
        let clock = FrameClock::fixed(60);
        let interval = clock.interval().unwrap();
        assert_eq!(interval.as_micros(), 16_666);
    }

    #[test]
    fn test_unthrottled_never_sleeps() {
        let mut clock = FrameClock::unthrottled();
        let start = Instant::now();
        for _ in 0..1000 {
            clock.wait();
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_fixed_clock_paces_ticks() {
        let mut clock = FrameClock::fixed(200);
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait();
        }
        // Four 5ms ticks
        assert!(start.elapsed() >= Duration::from_millis(18));
    }
}
