//! Paused / Playing / Loading state with its delayed transition.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::scheduler::Timer;

/// A state the player can rest in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettledState {
    Paused,
    Playing,
}

impl SettledState {
    pub fn opposite(self) -> Self {
        match self {
            Self::Paused => Self::Playing,
            Self::Playing => Self::Paused,
        }
    }
}

/// Playback state. `Loading` always knows where it is headed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    #[default]
    Paused,
    Playing,
    Loading { target: SettledState },
}

impl PlayerState {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    /// The resting state, if not loading.
    pub fn settled(self) -> Option<SettledState> {
        match self {
            Self::Paused => Some(SettledState::Paused),
            Self::Playing => Some(SettledState::Playing),
            Self::Loading { .. } => None,
        }
    }
}

impl From<SettledState> for PlayerState {
    fn from(s: SettledState) -> Self {
        match s {
            SettledState::Paused => Self::Paused,
            SettledState::Playing => Self::Playing,
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paused => f.write_str("paused"),
            Self::Playing => f.write_str("playing"),
            Self::Loading { .. } => f.write_str("loading"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlayerStateMachine {
    state: PlayerState,
    transition: Option<Timer>,
    delay: Duration,
}

impl PlayerStateMachine {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: PlayerState::Paused,
            transition: None,
            delay,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Starts a transition towards the opposite resting state.
    ///
    /// Returns `false` and does nothing while a transition is pending.
    pub fn toggle(&mut self) -> bool {
        let Some(prior) = self.state.settled() else {
            debug!("toggle ignored while loading");
            return false;
        };
        let target = prior.opposite();
        self.state = PlayerState::Loading { target };
        self.transition = Some(Timer::once(self.delay));
        debug!(?target, delay = ?self.delay, "loading");
        true
    }

    /// Time until the pending transition completes.
    pub fn until_transition(&self) -> Option<Duration> {
        self.transition.as_ref().map(Timer::remaining)
    }

    /// Advances the pending transition; returns the state reached, if any.
    pub fn elapse(&mut self, elapsed: Duration) -> Option<SettledState> {
        let timer = self.transition.as_mut()?;
        if !timer.elapse(elapsed) {
            return None;
        }
        self.transition = None;
        let PlayerState::Loading { target } = self.state else {
            return None;
        };
        self.state = target.into();
        debug!(state = %self.state, "transition complete");
        Some(target)
    }

    /// Drops any pending transition.
    pub fn cancel(&mut self) {
        if self.transition.take().is_some() {
            debug!("pending transition cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn starts_paused() {
        let sm = PlayerStateMachine::new(DELAY);
        assert_eq!(sm.state(), PlayerState::Paused);
        assert_eq!(sm.until_transition(), None);
    }

    #[test]
    fn toggle_from_paused_heads_to_playing() {
        let mut sm = PlayerStateMachine::new(DELAY);
        assert!(sm.toggle());
        assert_eq!(
            sm.state(),
            PlayerState::Loading {
                target: SettledState::Playing
            }
        );
        assert_eq!(sm.until_transition(), Some(DELAY));
        assert_eq!(sm.elapse(DELAY), Some(SettledState::Playing));
        assert_eq!(sm.state(), PlayerState::Playing);
        assert_eq!(sm.until_transition(), None);
    }

    #[test]
    fn toggle_from_playing_heads_to_paused() {
        let mut sm = PlayerStateMachine::new(DELAY);
        sm.toggle();
        sm.elapse(DELAY);
        assert!(sm.toggle());
        assert_eq!(
            sm.state(),
            PlayerState::Loading {
                target: SettledState::Paused
            }
        );
        sm.elapse(DELAY);
        assert_eq!(sm.state(), PlayerState::Paused);
    }

    #[test]
    fn toggle_while_loading_is_ignored() {
        let mut sm = PlayerStateMachine::new(DELAY);
        sm.toggle();
        sm.elapse(Duration::from_millis(200));
        let before = sm.state();
        assert!(!sm.toggle());
        assert_eq!(sm.state(), before);
        // the original timer is untouched
        assert_eq!(sm.until_transition(), Some(Duration::from_millis(300)));
    }

    #[test]
    fn cancelled_transition_never_fires() {
        let mut sm = PlayerStateMachine::new(DELAY);
        sm.toggle();
        sm.cancel();
        assert_eq!(sm.elapse(Duration::from_secs(5)), None);
        assert!(sm.state().is_loading());
    }

    #[test]
    fn display_names() {
        assert_eq!(PlayerState::Paused.to_string(), "paused");
        assert_eq!(
            PlayerState::Loading {
                target: SettledState::Paused
            }
            .to_string(),
            "loading"
        );
    }
}
