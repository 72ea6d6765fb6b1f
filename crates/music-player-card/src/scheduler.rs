use std::time::Duration;

/// Smallest period a repeating timer may have.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A cancellable timer advanced by explicit elapsed time.
///
/// Timers are plain values: the owner keeps one `Option<Timer>` per concern,
/// and dropping or replacing it is cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    remaining: Duration,
    period: Option<Duration>,
    spent: bool,
}

impl Timer {
    pub fn once(delay: Duration) -> Self {
        Self {
            remaining: delay,
            period: None,
            spent: false,
        }
    }

    pub fn every(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            remaining: period,
            period: Some(period),
            spent: false,
        }
    }

    /// Time left until the next firing.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_repeating(&self) -> bool {
        self.period.is_some()
    }

    /// A one-shot timer that already fired.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Moves the timer forward by `elapsed` and reports whether it fired.
    ///
    /// Callers split their elapsed time at firing boundaries, so a single call
    /// fires at most once; any overshoot is discarded.
    pub fn elapse(&mut self, elapsed: Duration) -> bool {
        if self.spent {
            return false;
        }
        if elapsed < self.remaining {
            self.remaining -= elapsed;
            return false;
        }
        match self.period {
            Some(period) => self.remaining = period,
            None => {
                self.remaining = Duration::ZERO;
                self.spent = true;
            }
        }
        true
    }
}

/// Earliest of several optional deadlines.
pub fn earliest(deadlines: impl IntoIterator<Item = Option<Duration>>) -> Option<Duration> {
    deadlines.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut t = Timer::once(Duration::from_millis(500));
        assert!(!t.elapse(Duration::from_millis(499)));
        assert_eq!(t.remaining(), Duration::from_millis(1));
        assert!(t.elapse(Duration::from_millis(1)));
        assert!(t.is_spent());
        assert!(!t.elapse(Duration::from_secs(10)));
    }

    #[test]
    fn repeating_reloads_period() {
        let mut t = Timer::every(Duration::from_secs(1));
        assert!(t.is_repeating());
        assert!(t.elapse(Duration::from_secs(1)));
        assert_eq!(t.remaining(), Duration::from_secs(1));
        assert!(!t.elapse(Duration::from_millis(300)));
        assert!(t.elapse(Duration::from_millis(700)));
        assert!(!t.is_spent());
    }

    #[test]
    fn zero_period_is_floored() {
        let t = Timer::every(Duration::ZERO);
        assert_eq!(t.remaining(), MIN_PERIOD);
    }

    #[test]
    fn earliest_skips_inactive() {
        assert_eq!(earliest([None, None]), None);
        assert_eq!(
            earliest([None, Some(Duration::from_millis(3)), Some(Duration::from_millis(2))]),
            Some(Duration::from_millis(2))
        );
    }
}
