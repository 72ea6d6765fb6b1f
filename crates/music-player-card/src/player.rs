//! The stateful core of one card: playback state, simulated clock and volume.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{PlayerConfig, Timing};
use crate::presentation::PlayerSnapshot;
use crate::progress::{is_usable_step, ProgressClock};
use crate::scheduler::earliest;
use crate::state_machine::{PlayerState, PlayerStateMachine, SettledState};
use crate::volume::VolumeControl;

#[derive(Clone, Debug)]
pub struct Player {
    machine: PlayerStateMachine,
    clock: ProgressClock,
    volume: VolumeControl,
    time_in_state: Duration,
    torn_down: bool,
}

impl Player {
    /// Builds a player from `config`. A step that would stall or reverse the
    /// clock is replaced by the default step.
    pub fn new(config: &PlayerConfig) -> Self {
        let timing = &config.timing;
        let step = if is_usable_step(timing.progress_step) {
            timing.progress_step
        } else {
            let fallback = Timing::default().progress_step;
            warn!(
                step = timing.progress_step,
                fallback, "unusable progress step, using the default"
            );
            fallback
        };
        Self {
            machine: PlayerStateMachine::new(timing.loading_delay()),
            clock: ProgressClock::new(config.initial_progress, step, timing.tick_interval()),
            volume: VolumeControl::new(config.initial_volume),
            time_in_state: Duration::ZERO,
            torn_down: false,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.machine.state()
    }

    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    pub fn volume(&self) -> u8 {
        self.volume.volume()
    }

    pub fn hovered(&self) -> bool {
        self.volume.hovered()
    }

    /// Time since the last state change, used to phase animations.
    pub fn time_in_state(&self) -> Duration {
        self.time_in_state
    }

    pub fn is_ticking(&self) -> bool {
        self.clock.is_running()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            state: self.state(),
            progress: self.progress(),
            volume: self.volume(),
            hovered: self.hovered(),
        }
    }

    /// Play/pause. Ignored while loading or after teardown.
    pub fn toggle_play_pause(&mut self) -> bool {
        if self.torn_down || !self.machine.toggle() {
            return false;
        }
        self.clock.stop();
        self.time_in_state = Duration::ZERO;
        true
    }

    pub fn set_volume_from_pointer(
        &mut self,
        pointer_x: f32,
        track_left: f32,
        track_width: f32,
    ) -> Option<u8> {
        self.volume.set_from_pointer(pointer_x, track_left, track_width)
    }

    /// Returns whether the hover flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        self.volume.set_hovered(hovered)
    }

    /// Time until the next timer event.
    pub fn next_wakeup(&self) -> Option<Duration> {
        earliest([self.machine.until_transition(), self.clock.until_tick()])
    }

    /// Moves time forward, firing due timers in the order they fall due.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.torn_down {
            return;
        }
        let mut remaining = elapsed;
        while let Some(due) = self.next_wakeup().filter(|due| *due <= remaining) {
            remaining -= due;
            self.time_in_state += due;
            let settled = self.machine.elapse(due);
            self.clock.elapse(due);
            if let Some(settled) = settled {
                self.settle(settled);
            }
        }
        self.machine.elapse(remaining);
        self.clock.elapse(remaining);
        self.time_in_state += remaining;
    }

    /// Cancels every pending timer. The player is inert afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.machine.cancel();
        self.clock.stop();
        self.torn_down = true;
        debug!(state = %self.state(), "player torn down");
    }

    fn settle(&mut self, settled: SettledState) {
        self.time_in_state = Duration::ZERO;
        match settled {
            SettledState::Playing => self.clock.start(),
            SettledState::Paused => self.clock.stop(),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}
