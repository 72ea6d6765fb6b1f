//! An animated music player card for egui.
//!
//! The card simulates playback: play/pause passes through a short loading
//! state, a clock advances the progress bar once per second while playing,
//! and a click on the volume track sets the volume. Nothing is decoded or
//! played.
//!
//! The stateful core ([`Player`]) and the pure visual mapping
//! ([`map_visuals`]) are usable without a UI; [`MusicPlayerCard`] wires
//! them into an egui widget.
//!
//! ```no_run
//! use music_player_card::{MusicPlayerCard, PlayerConfig};
//!
//! let mut card = MusicPlayerCard::new(&PlayerConfig::default());
//! # let ctx = egui::Context::default();
//! # let _ = ctx.run(egui::RawInput::default(), |ctx| {
//! egui::CentralPanel::default().show(ctx, |ui| {
//!     ui.add(&mut card);
//! });
//! # });
//! ```

mod card;
mod config;
mod error;
mod player;
mod presentation;
mod progress;
mod scheduler;
mod state_machine;
mod theme;
mod ui;
mod volume;

pub use card::MusicPlayerCard;
pub use config::{PlayerConfig, Timing, TrackInfo};
pub use error::{ConfigError, Result};
pub use player::Player;
pub use presentation::{
    format_time, map_visuals, time_labels, ArtworkVisuals, BarFrame, CardVisuals,
    ContainerVisuals, ControlsVisuals, EqualizerPattern, EqualizerVisuals, Glow, PlayGlyph,
    PlayerSnapshot, ProgressVisuals, Spin, VolumeVisuals, EQUALIZER_BAR_COUNT,
};
pub use progress::{is_usable_step, next_progress, ProgressClock, MAX_PROGRESS, MIN_PROGRESS_STEP};
pub use scheduler::Timer;
pub use state_machine::{PlayerState, PlayerStateMachine, SettledState};
pub use theme::Theme;
pub use volume::{volume_from_pointer, VolumeControl, MAX_VOLUME};
