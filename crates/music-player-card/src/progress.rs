//! Simulated playback position.

use std::time::Duration;

use tracing::trace;

use crate::scheduler::Timer;

pub const MAX_PROGRESS: f32 = 100.0;

/// Smallest step that survives rounding to hundredths.
pub const MIN_PROGRESS_STEP: f32 = 0.01;

/// Whether `step` moves the clock forward on every tick.
pub fn is_usable_step(step: f32) -> bool {
    (MIN_PROGRESS_STEP..=MAX_PROGRESS).contains(&step)
}

/// One tick of the simulated clock: advance by `step`, wrap to 0 once 100
/// has been reached. The sum is rounded to hundredths.
pub fn next_progress(progress: f32, step: f32) -> f32 {
    if progress >= MAX_PROGRESS {
        return 0.0;
    }
    let advanced = ((progress + step) * 100.0).round() / 100.0;
    advanced.clamp(0.0, MAX_PROGRESS)
}

#[derive(Clone, Debug)]
pub struct ProgressClock {
    progress: f32,
    step: f32,
    interval: Duration,
    tick: Option<Timer>,
}

impl ProgressClock {
    /// A non-finite `initial` starts the clock at 0.
    pub fn new(initial: f32, step: f32, interval: Duration) -> Self {
        let progress = if initial.is_finite() {
            initial.clamp(0.0, MAX_PROGRESS)
        } else {
            0.0
        };
        Self {
            progress,
            step,
            interval,
            tick: None,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Starts a fresh tick source, replacing any running one.
    pub fn start(&mut self) {
        self.tick = Some(Timer::every(self.interval));
    }

    /// Stops ticking; the current value is kept.
    pub fn stop(&mut self) {
        self.tick = None;
    }

    pub fn until_tick(&self) -> Option<Duration> {
        self.tick.as_ref().map(Timer::remaining)
    }

    /// Advances the tick source; returns whether a tick was applied.
    pub fn elapse(&mut self, elapsed: Duration) -> bool {
        let Some(timer) = self.tick.as_mut() else {
            return false;
        };
        if !timer.elapse(elapsed) {
            return false;
        }
        self.progress = next_progress(self.progress, self.step);
        trace!(progress = self.progress, "tick");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn step_and_wrap() {
        assert_eq!(next_progress(35.0, 0.5), 35.5);
        assert_eq!(next_progress(99.5, 0.5), 100.0);
        assert_eq!(next_progress(100.0, 0.5), 0.0);
    }

    #[test]
    fn overshoot_is_clamped() {
        assert_eq!(next_progress(99.8, 0.5), 100.0);
    }

    #[test]
    fn rounds_to_hundredths() {
        assert_eq!(next_progress(0.1, 0.2), 0.3);
    }

    #[test]
    fn idle_clock_does_not_move() {
        let mut clock = ProgressClock::new(35.0, 0.5, SECOND);
        assert!(!clock.elapse(SECOND * 10));
        assert_eq!(clock.progress(), 35.0);
    }

    #[test]
    fn running_clock_ticks_once_per_interval() {
        let mut clock = ProgressClock::new(35.0, 0.5, SECOND);
        clock.start();
        assert!(!clock.elapse(Duration::from_millis(999)));
        assert!(clock.elapse(Duration::from_millis(1)));
        assert_eq!(clock.progress(), 35.5);
        assert_eq!(clock.until_tick(), Some(SECOND));
    }

    #[test]
    fn stop_keeps_value() {
        let mut clock = ProgressClock::new(35.0, 0.5, SECOND);
        clock.start();
        clock.elapse(SECOND);
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.progress(), 35.5);
    }

    #[test]
    fn restart_begins_a_fresh_interval() {
        let mut clock = ProgressClock::new(0.0, 0.5, SECOND);
        clock.start();
        clock.elapse(Duration::from_millis(600));
        clock.start();
        assert_eq!(clock.until_tick(), Some(SECOND));
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(ProgressClock::new(140.0, 0.5, SECOND).progress(), 100.0);
        assert_eq!(ProgressClock::new(-3.0, 0.5, SECOND).progress(), 0.0);
    }

    #[test]
    fn non_finite_initial_value_starts_at_zero() {
        assert_eq!(ProgressClock::new(f32::NAN, 0.5, SECOND).progress(), 0.0);
        assert_eq!(ProgressClock::new(f32::INFINITY, 0.5, SECOND).progress(), 0.0);
    }

    #[test]
    fn usable_steps() {
        assert!(is_usable_step(0.01));
        assert!(is_usable_step(0.5));
        assert!(is_usable_step(MAX_PROGRESS));
        assert!(!is_usable_step(0.004));
        assert!(!is_usable_step(0.0));
        assert!(!is_usable_step(-0.5));
        assert!(!is_usable_step(f32::NAN));
        assert!(!is_usable_step(MAX_PROGRESS + 1.0));
    }

    #[test]
    fn smallest_usable_step_still_advances() {
        assert_eq!(next_progress(35.0, MIN_PROGRESS_STEP), 35.01);
    }
}
