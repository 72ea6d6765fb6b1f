use egui::epaint::Shadow;
use egui::{
    Align, Color32, FontId, Frame, Id, Layout, Margin, Rect, Response, RichText, Sense, Ui, Vec2,
    WidgetInfo, WidgetType,
};
use tracing::debug;
use web_time::Instant;

use crate::config::{PlayerConfig, TrackInfo};
use crate::player::Player;
use crate::presentation::{
    map_visuals, time_labels, ArtworkVisuals, CardVisuals, ControlsVisuals, EqualizerVisuals,
    ProgressVisuals, VolumeVisuals,
};
use crate::theme::Theme;
use crate::ui::{animate_color, paint_artwork, paint_equalizer, paint_play_glyph, paint_track};

/// Buttons around play/pause. They have no behavior of their own.
const SECONDARY_CONTROLS: [(&str, &str); 4] = [
    ("Shuffle", "🔀"),
    ("Previous", "⏮"),
    ("Next", "⏭"),
    ("Repeat", "🔁"),
];

/// The music player card widget.
///
/// Keep one instance per card across frames and add it with
/// `ui.add(&mut card)`. Dropping the card cancels its timers.
pub struct MusicPlayerCard {
    player: Player,
    theme: Theme,
    track: TrackInfo,
    track_duration_secs: u32,
    id: Id,
    last_frame: Option<Instant>,
}

impl MusicPlayerCard {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            player: Player::new(config),
            theme: Theme::default(),
            track: config.track.clone(),
            track_duration_secs: config.timing.track_duration_secs,
            id: Id::new("music_player_card"),
            last_frame: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Needed when more than one card is shown at once.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Id::new(salt);
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Cancels the card's timers. Later frames still draw but nothing moves.
    /// Dropping the card does the same.
    pub fn close(&mut self) {
        self.player.teardown();
        self.last_frame = None;
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        self.advance_clock();

        let visuals = map_visuals(&self.player.snapshot(), &self.theme);
        let t = self.player.time_in_state().as_secs_f32();
        let theme = self.theme.clone();

        let background = animate_color(
            ui.ctx(),
            self.id.with("background"),
            visuals.container.background,
            theme.state_transition_secs,
        );
        let mut frame = Frame::new()
            .fill(background)
            .corner_radius(theme.card_rounding)
            .inner_margin(Margin::same(theme.card_padding));
        if let Some(glow) = visuals.container.glow {
            frame = frame.shadow(Shadow {
                offset: [0, 0],
                blur: glow.blur.clamp(0.0, 255.0) as u8,
                spread: 0,
                color: glow.color,
            });
        }

        let inner = frame.show(ui, |ui| {
            ui.set_width(theme.card_width - 2.0 * f32::from(theme.card_padding));

            ui.horizontal(|ui| {
                self.artwork(ui, &visuals.artwork, t);
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&self.track.title)
                            .strong()
                            .size(18.0)
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(&self.track.artist)
                            .size(13.0)
                            .color(theme.text_secondary),
                    );
                    ui.add_space(12.0);
                    Self::equalizer(ui, &visuals.equalizer, t);
                });
            });
            ui.add_space(20.0);
            self.progress_bar(ui, &visuals.progress);
            ui.add_space(20.0);
            self.controls(ui, &visuals.controls, t);
            ui.add_space(20.0);
            self.volume_row(ui, &visuals.volume);
        });

        self.schedule_repaint(ui.ctx(), &visuals);
        inner.response
    }

    fn advance_clock(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame {
            self.player.advance(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
    }

    fn schedule_repaint(&self, ctx: &egui::Context, visuals: &CardVisuals) {
        if visuals.equalizer.pattern.is_animated() || visuals.artwork.spin.is_some() {
            ctx.request_repaint();
        } else if let Some(wakeup) = self.player.next_wakeup() {
            ctx.request_repaint_after(wakeup);
        }
    }

    fn artwork(&self, ui: &mut Ui, artwork: &ArtworkVisuals, t: f32) {
        let size = Vec2::splat(self.theme.artwork_size);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let scale = ui.ctx().animate_value_with_time(
            self.id.with("artwork_scale"),
            artwork.scale,
            self.theme.state_transition_secs,
        );
        let angle = artwork.spin.map_or(0.0, |spin| spin.angle_at(t));
        let painter = ui.painter_at(rect.expand(self.theme.artwork_size * 0.25));
        paint_artwork(
            &painter,
            rect,
            angle,
            scale,
            (self.theme.artwork_from, self.theme.artwork_to),
            self.theme.artwork_glyph,
        );
    }

    fn equalizer(ui: &mut Ui, eq: &EqualizerVisuals, t: f32) {
        let n = eq.bar_count as f32;
        let width = n * eq.bar_width + (n - 1.0).max(0.0) * eq.gap;
        let size = Vec2::new(width, eq.bar_height.max(14.0));
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        paint_equalizer(ui.painter(), rect, eq, t);
    }

    fn progress_bar(&self, ui: &mut Ui, progress: &ProgressVisuals) {
        let value = self.player.progress();
        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), progress.track_height),
            Sense::hover(),
        );
        response.widget_info(|| {
            let mut info = WidgetInfo::labeled(WidgetType::ProgressIndicator, true, "Progress");
            info.value = Some(f64::from(value));
            info
        });
        let fraction = ui.ctx().animate_value_with_time(
            self.id.with("progress_fill"),
            progress.fraction,
            self.theme.state_transition_secs,
        );
        let fill = animate_color(
            ui.ctx(),
            self.id.with("progress_color"),
            progress.fill,
            self.theme.state_transition_secs,
        );
        paint_track(ui.painter(), rect, fraction, self.theme.track, fill);

        let (elapsed, total) = time_labels(value, self.track_duration_secs);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(elapsed).size(11.0).color(self.theme.text_secondary));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(total).size(11.0).color(self.theme.text_secondary));
            });
        });
    }

    fn controls(&mut self, ui: &mut Ui, controls: &ControlsVisuals, t: f32) {
        let spacing = 24.0;
        let button = self.theme.control_button_size;
        let play = self.theme.play_button_size;
        let total = 4.0 * button + play + 4.0 * spacing;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            ui.add_space(((ui.available_width() - total) * 0.5).max(0.0));

            let (left, right) = SECONDARY_CONTROLS.split_at(2);
            for &(label, glyph) in left {
                self.secondary_button(ui, controls, label, glyph);
            }
            self.play_button(ui, controls, t);
            for &(label, glyph) in right {
                self.secondary_button(ui, controls, label, glyph);
            }
        });
    }

    fn secondary_button(
        &self,
        ui: &mut Ui,
        controls: &ControlsVisuals,
        label: &'static str,
        glyph: &str,
    ) {
        let sense = if controls.enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let size = Vec2::splat(self.theme.control_button_size);
        let (rect, response) = ui.allocate_exact_size(size, sense);
        let enabled = controls.enabled;
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, label));

        let base = if enabled && response.hovered() {
            Color32::WHITE
        } else {
            Color32::WHITE.gamma_multiply(0.8)
        };
        let color = base.gamma_multiply(controls.secondary_opacity);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(18.0),
            color,
        );

        if enabled && response.clicked() {
            debug!(control = label, "control clicked; no action bound");
        }
    }

    fn play_button(&mut self, ui: &mut Ui, controls: &ControlsVisuals, t: f32) {
        let size = self.theme.play_button_size;
        let sense = if controls.enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), sense);
        let enabled = controls.enabled;
        let label = controls.play_label;
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, label));

        let target_scale = if enabled && response.is_pointer_button_down_on() {
            0.95
        } else if enabled && response.hovered() {
            1.05
        } else {
            1.0
        };
        let scale = ui
            .ctx()
            .animate_value_with_time(self.id.with("play_scale"), target_scale, 0.1);
        let fill = animate_color(
            ui.ctx(),
            self.id.with("play_fill"),
            controls.play_fill,
            self.theme.state_transition_secs,
        );
        let painter = ui.painter_at(rect.expand(size * 0.1));
        painter.circle_filled(rect.center(), size * 0.5 * scale, fill);
        paint_play_glyph(
            &painter,
            rect.center(),
            size * scale,
            controls.play_glyph,
            Color32::WHITE,
            t,
        );

        if enabled && response.clicked() {
            self.player.toggle_play_pause();
            ui.ctx().request_repaint();
        }
    }

    fn volume_row(&mut self, ui: &mut Ui, volume: &VolumeVisuals) {
        let row = ui.horizontal(|ui| {
            ui.label(RichText::new("🔊").size(16.0).color(self.theme.text_primary));
            let height = volume.track_height.max(16.0);
            let size = Vec2::new(ui.available_width(), height);
            ui.allocate_exact_size(size, Sense::click_and_drag())
        });
        let (hit_rect, response) = row.inner;

        let value = self.player.volume();
        response.widget_info(|| WidgetInfo::slider(true, f64::from(value), "Volume"));

        if response.clicked() || response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let changed = self
                    .player
                    .set_volume_from_pointer(pos.x, hit_rect.left(), hit_rect.width())
                    .is_some_and(|v| v != value);
                if changed {
                    ui.ctx().request_repaint();
                }
            }
        }

        let hovered = ui.rect_contains_pointer(row.response.rect);
        if self.player.set_hovered(hovered) {
            ui.ctx().request_repaint();
        }

        let track_rect = Rect::from_center_size(
            hit_rect.center(),
            Vec2::new(hit_rect.width(), volume.track_height),
        );
        // pick up this frame's click and hover
        let current = map_visuals(&self.player.snapshot(), &self.theme).volume;
        let fill = animate_color(
            ui.ctx(),
            self.id.with("volume_color"),
            current.fill,
            self.theme.hover_transition_secs,
        );
        paint_track(ui.painter(), track_rect, current.fraction, self.theme.track, fill);
    }
}

impl Default for MusicPlayerCard {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}

impl egui::Widget for &mut MusicPlayerCard {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

impl Drop for MusicPlayerCard {
    fn drop(&mut self) {
        self.close();
    }
}
