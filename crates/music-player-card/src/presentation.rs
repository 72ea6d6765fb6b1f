//! Pure mapping from player state to what the card should look like.
//!
//! Nothing here touches egui's context or keeps state: the same snapshot and
//! theme always produce the same [`CardVisuals`]. Time-varying animation is
//! described by patterns that are sampled with an explicit time.

use std::f32::consts::TAU;

use egui::Color32;

use crate::progress::MAX_PROGRESS;
use crate::state_machine::PlayerState;
use crate::theme::Theme;
use crate::volume::MAX_VOLUME;

pub const EQUALIZER_BAR_COUNT: usize = 5;
pub const EQUALIZER_BAR_WIDTH: f32 = 8.0;
pub const EQUALIZER_STAGGER_SECS: f32 = 0.1;
pub const ARTWORK_ROTATION_SECS: f32 = 20.0;

/// Everything the mapper reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSnapshot {
    pub state: PlayerState,
    pub progress: f32,
    pub volume: u8,
    pub hovered: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardVisuals {
    pub container: ContainerVisuals,
    pub artwork: ArtworkVisuals,
    pub equalizer: EqualizerVisuals,
    pub progress: ProgressVisuals,
    pub volume: VolumeVisuals,
    pub controls: ControlsVisuals,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerVisuals {
    pub background: Color32,
    pub glow: Option<Glow>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Color32,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtworkVisuals {
    pub scale: f32,
    pub spin: Option<Spin>,
}

/// Continuous linear rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub period_secs: f32,
}

impl Spin {
    /// Rotation in radians after `t` seconds.
    pub fn angle_at(self, t: f32) -> f32 {
        if self.period_secs <= 0.0 {
            return 0.0;
        }
        (t / self.period_secs).fract() * TAU
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EqualizerVisuals {
    pub bar_count: usize,
    pub bar_width: f32,
    pub bar_height: f32,
    pub gap: f32,
    pub color: Color32,
    pub pattern: EqualizerPattern,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EqualizerPattern {
    /// Bars held at one height.
    Static { scale_y: f32, opacity: f32 },
    /// Bars bounce between `low` and `high`, reversing every half cycle.
    Rhythmic {
        low: f32,
        high: f32,
        half_cycle_secs: f32,
        stagger_secs: f32,
    },
    /// Bars run through three keyframes and restart.
    Pulse {
        scale_keys: [f32; 3],
        opacity_keys: [f32; 3],
        cycle_secs: f32,
        stagger_secs: f32,
    },
}

/// Instantaneous look of one equalizer bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarFrame {
    pub scale_y: f32,
    pub opacity: f32,
}

impl EqualizerPattern {
    /// Frame of bar `bar` at `t` seconds into the pattern.
    pub fn sample(&self, bar: usize, t: f32) -> BarFrame {
        match *self {
            Self::Static { scale_y, opacity } => BarFrame { scale_y, opacity },
            Self::Rhythmic {
                low,
                high,
                half_cycle_secs,
                stagger_secs,
            } => {
                let local = t - stagger_secs * bar as f32;
                if local <= 0.0 || half_cycle_secs <= 0.0 {
                    return BarFrame { scale_y: low, opacity: 1.0 };
                }
                let phase = local / half_cycle_secs;
                let leg = phase.floor();
                let mut f = phase - leg;
                if leg as u64 % 2 == 1 {
                    f = 1.0 - f;
                }
                BarFrame {
                    scale_y: lerp(low, high, ease_in_out(f)),
                    opacity: 1.0,
                }
            }
            Self::Pulse {
                scale_keys,
                opacity_keys,
                cycle_secs,
                stagger_secs,
            } => {
                let local = t - stagger_secs * bar as f32;
                if local <= 0.0 || cycle_secs <= 0.0 {
                    return BarFrame {
                        scale_y: scale_keys[0],
                        opacity: opacity_keys[0],
                    };
                }
                let f = local.rem_euclid(cycle_secs) / cycle_secs;
                BarFrame {
                    scale_y: keyframes(&scale_keys, f),
                    opacity: keyframes(&opacity_keys, f),
                }
            }
        }
    }

    /// Whether frames change over time.
    pub fn is_animated(&self) -> bool {
        !matches!(self, Self::Static { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressVisuals {
    /// Filled share of the track, 0..=1.
    pub fraction: f32,
    pub fill: Color32,
    pub track_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeVisuals {
    pub fraction: f32,
    pub fill: Color32,
    pub track_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayGlyph {
    Play,
    Pause,
    Spinner,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsVisuals {
    pub enabled: bool,
    pub play_glyph: PlayGlyph,
    pub play_label: &'static str,
    pub play_fill: Color32,
    pub secondary_opacity: f32,
}

pub fn map_visuals(snapshot: &PlayerSnapshot, theme: &Theme) -> CardVisuals {
    let state = snapshot.state;
    CardVisuals {
        container: container_visuals(state, theme),
        artwork: artwork_visuals(state),
        equalizer: equalizer_visuals(state, theme),
        progress: ProgressVisuals {
            fraction: snapshot.progress.clamp(0.0, MAX_PROGRESS) / MAX_PROGRESS,
            fill: if state.is_playing() { theme.accent } else { theme.muted },
            track_height: theme.progress_track_height,
        },
        volume: VolumeVisuals {
            fraction: f32::from(snapshot.volume.min(MAX_VOLUME)) / f32::from(MAX_VOLUME),
            fill: if snapshot.hovered { theme.accent } else { theme.muted },
            track_height: theme.volume_track_height,
        },
        controls: controls_visuals(state, theme),
    }
}

fn container_visuals(state: PlayerState, theme: &Theme) -> ContainerVisuals {
    match state {
        PlayerState::Paused => ContainerVisuals {
            background: theme.background_paused,
            glow: None,
        },
        PlayerState::Playing => ContainerVisuals {
            background: theme.background_playing,
            glow: Some(Glow {
                color: theme.glow_playing,
                blur: 40.0,
            }),
        },
        PlayerState::Loading { .. } => ContainerVisuals {
            background: theme.background_loading,
            glow: Some(Glow {
                color: theme.glow_loading,
                blur: 8.0,
            }),
        },
    }
}

fn artwork_visuals(state: PlayerState) -> ArtworkVisuals {
    match state {
        PlayerState::Playing => ArtworkVisuals {
            scale: 1.0,
            spin: Some(Spin {
                period_secs: ARTWORK_ROTATION_SECS,
            }),
        },
        PlayerState::Paused => ArtworkVisuals { scale: 0.95, spin: None },
        PlayerState::Loading { .. } => ArtworkVisuals { scale: 0.9, spin: None },
    }
}

fn equalizer_visuals(state: PlayerState, theme: &Theme) -> EqualizerVisuals {
    let base = EqualizerVisuals {
        bar_count: EQUALIZER_BAR_COUNT,
        bar_width: EQUALIZER_BAR_WIDTH,
        bar_height: 14.0,
        gap: 2.0,
        color: theme.accent,
        pattern: EqualizerPattern::Static {
            scale_y: 0.2,
            opacity: 1.0,
        },
    };
    match state {
        PlayerState::Paused => EqualizerVisuals {
            bar_height: 12.0,
            color: theme.accent.gamma_multiply(0.8),
            ..base
        },
        PlayerState::Playing => EqualizerVisuals {
            pattern: EqualizerPattern::Rhythmic {
                low: 0.2,
                high: 1.0,
                half_cycle_secs: 0.5,
                stagger_secs: EQUALIZER_STAGGER_SECS,
            },
            ..base
        },
        PlayerState::Loading { .. } => EqualizerVisuals {
            bar_height: 20.0,
            gap: 6.0,
            pattern: EqualizerPattern::Pulse {
                scale_keys: [0.5, 1.0, 0.7],
                opacity_keys: [0.6, 1.0, 0.8],
                cycle_secs: 0.6,
                stagger_secs: EQUALIZER_STAGGER_SECS,
            },
            ..base
        },
    }
}

fn controls_visuals(state: PlayerState, theme: &Theme) -> ControlsVisuals {
    let enabled = !state.is_loading();
    let (play_glyph, play_label) = match state {
        PlayerState::Paused => (PlayGlyph::Play, "Play"),
        PlayerState::Playing => (PlayGlyph::Pause, "Pause"),
        PlayerState::Loading { .. } => (PlayGlyph::Spinner, "Play"),
    };
    ControlsVisuals {
        enabled,
        play_glyph,
        play_label,
        play_fill: if enabled { theme.accent } else { theme.disabled },
        secondary_opacity: if enabled { 1.0 } else { 0.45 },
    }
}

/// Elapsed and total time labels (`m:ss`) for a progress percentage.
pub fn time_labels(progress: f32, track_duration_secs: u32) -> (String, String) {
    let fraction = progress.clamp(0.0, MAX_PROGRESS) / MAX_PROGRESS;
    let elapsed = (fraction * track_duration_secs as f32).round() as u32;
    (format_time(elapsed), format_time(track_duration_secs))
}

pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn keyframes(keys: &[f32; 3], f: f32) -> f32 {
    let pos = f.clamp(0.0, 1.0) * 2.0;
    let i = (pos.floor() as usize).min(1);
    lerp(keys[i], keys[i + 1], ease_in_out(pos - i as f32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::SettledState;

    const LOADING: PlayerState = PlayerState::Loading {
        target: SettledState::Playing,
    };

    fn snap(state: PlayerState) -> PlayerSnapshot {
        PlayerSnapshot {
            state,
            progress: 35.0,
            volume: 70,
            hovered: false,
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn state_table() {
        let theme = Theme::default();

        let paused = map_visuals(&snap(PlayerState::Paused), &theme);
        assert!(paused.controls.enabled);
        assert_eq!(paused.controls.play_glyph, PlayGlyph::Play);
        assert!(!paused.equalizer.pattern.is_animated());
        assert_eq!(paused.artwork.spin, None);

        let playing = map_visuals(&snap(PlayerState::Playing), &theme);
        assert!(playing.controls.enabled);
        assert_eq!(playing.controls.play_glyph, PlayGlyph::Pause);
        assert_eq!(playing.controls.play_label, "Pause");
        assert!(matches!(playing.equalizer.pattern, EqualizerPattern::Rhythmic { .. }));
        assert!(playing.artwork.spin.is_some());

        let loading = map_visuals(&snap(LOADING), &theme);
        assert!(!loading.controls.enabled);
        assert_eq!(loading.controls.play_glyph, PlayGlyph::Spinner);
        assert!(matches!(loading.equalizer.pattern, EqualizerPattern::Pulse { .. }));
        assert_eq!(loading.controls.play_fill, theme.disabled);
        assert_eq!(loading.controls.secondary_opacity, 0.45);
    }

    #[test]
    fn artwork_scale_per_state() {
        let theme = Theme::default();
        assert_eq!(map_visuals(&snap(PlayerState::Playing), &theme).artwork.scale, 1.0);
        assert_eq!(map_visuals(&snap(PlayerState::Paused), &theme).artwork.scale, 0.95);
        assert_eq!(map_visuals(&snap(LOADING), &theme).artwork.scale, 0.9);
    }

    #[test]
    fn fills_and_colors() {
        let theme = Theme::default();
        let mut s = snap(PlayerState::Playing);
        s.hovered = true;
        let v = map_visuals(&s, &theme);
        assert!(close(v.progress.fraction, 0.35));
        assert_eq!(v.progress.fill, theme.accent);
        assert!(close(v.volume.fraction, 0.7));
        assert_eq!(v.volume.fill, theme.accent);
        assert!(v.container.glow.is_some());

        let v = map_visuals(&snap(PlayerState::Paused), &theme);
        assert_eq!(v.progress.fill, theme.muted);
        assert_eq!(v.volume.fill, theme.muted);
        assert_eq!(v.container.background, theme.background_paused);
        assert_eq!(v.container.glow, None);
    }

    #[test]
    fn same_input_same_output() {
        let theme = Theme::default();
        for state in [PlayerState::Paused, PlayerState::Playing, LOADING] {
            let s = snap(state);
            assert_eq!(map_visuals(&s, &theme), map_visuals(&s, &theme));
        }
    }

    #[test]
    fn rhythmic_bars_bounce_with_stagger() {
        let pattern = equalizer_visuals(PlayerState::Playing, &Theme::default()).pattern;
        assert!(close(pattern.sample(0, 0.0).scale_y, 0.2));
        assert!(close(pattern.sample(0, 0.5).scale_y, 1.0));
        assert!(close(pattern.sample(0, 1.0).scale_y, 0.2));
        // the third bar starts 0.2s later
        assert!(close(pattern.sample(2, 0.2).scale_y, 0.2));
        assert!(close(pattern.sample(2, 0.7).scale_y, 1.0));
        let mid = pattern.sample(0, 0.25).scale_y;
        assert!(mid > 0.2 && mid < 1.0);
    }

    #[test]
    fn pulse_runs_through_keyframes() {
        let pattern = equalizer_visuals(LOADING, &Theme::default()).pattern;
        let start = pattern.sample(0, 0.0);
        assert!(close(start.scale_y, 0.5));
        assert!(close(start.opacity, 0.6));
        let peak = pattern.sample(0, 0.3);
        assert!(close(peak.scale_y, 1.0));
        assert!(close(peak.opacity, 1.0));
    }

    #[test]
    fn spin_is_linear() {
        let spin = Spin { period_secs: 20.0 };
        assert!(close(spin.angle_at(0.0), 0.0));
        assert!(close(spin.angle_at(5.0), TAU / 4.0));
        assert!(close(spin.angle_at(25.0), TAU / 4.0));
    }

    #[test]
    fn labels() {
        assert_eq!(format_time(83), "1:23");
        assert_eq!(format_time(225), "3:45");
        assert_eq!(time_labels(0.0, 225), ("0:00".to_owned(), "3:45".to_owned()));
        assert_eq!(time_labels(100.0, 225).0, "3:45");
        assert_eq!(time_labels(40.0, 225).0, "1:30");
    }
}
