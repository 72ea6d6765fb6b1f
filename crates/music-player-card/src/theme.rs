use egui::Color32;

/// Palette and geometry of the card.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub accent: Color32,
    pub muted: Color32,
    pub disabled: Color32,
    pub track: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub background_paused: Color32,
    pub background_playing: Color32,
    pub background_loading: Color32,
    pub glow_playing: Color32,
    pub glow_loading: Color32,
    pub artwork_from: Color32,
    pub artwork_to: Color32,
    pub artwork_glyph: Color32,

    pub card_width: f32,
    pub card_padding: i8,
    pub card_rounding: f32,
    pub artwork_size: f32,
    pub progress_track_height: f32,
    pub volume_track_height: f32,
    pub play_button_size: f32,
    pub control_button_size: f32,

    /// Seconds used when easing between state-dependent values.
    pub state_transition_secs: f32,
    pub hover_transition_secs: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color32::from_rgb(0xa8, 0x55, 0xf7),
            muted: Color32::from_rgb(0x6b, 0x72, 0x80),
            disabled: Color32::from_rgb(0x4b, 0x55, 0x63),
            track: Color32::from_rgb(0x37, 0x41, 0x51),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(0x9c, 0xa3, 0xaf),
            background_paused: Color32::from_rgb(0x0f, 0x17, 0x2a),
            background_playing: Color32::from_rgba_unmultiplied(68, 20, 98, 242),
            background_loading: Color32::from_rgb(24, 24, 27),
            glow_playing: Color32::from_rgba_unmultiplied(168, 85, 247, 115),
            glow_loading: Color32::from_rgba_unmultiplied(0, 0, 0, 51),
            artwork_from: Color32::from_rgb(0xa8, 0x55, 0xf7),
            artwork_to: Color32::from_rgb(0xec, 0x48, 0x99),
            artwork_glyph: Color32::from_rgb(0x11, 0x18, 0x27),

            card_width: 420.0,
            card_padding: 32,
            card_rounding: 16.0,
            artwork_size: 80.0,
            progress_track_height: 8.0,
            volume_track_height: 8.0,
            play_button_size: 48.0,
            control_button_size: 36.0,

            state_transition_secs: 0.3,
            hover_transition_secs: 0.2,
        }
    }
}

impl Theme {
    /// A grayscale variant for hosts with a light chrome.
    pub fn monochrome() -> Self {
        Self {
            accent: Color32::from_rgb(0xe5, 0xe7, 0xeb),
            background_playing: Color32::from_rgb(0x1f, 0x29, 0x37),
            glow_playing: Color32::from_rgba_unmultiplied(229, 231, 235, 60),
            artwork_from: Color32::from_rgb(0x9c, 0xa3, 0xaf),
            artwork_to: Color32::from_rgb(0x37, 0x41, 0x51),
            ..Self::default()
        }
    }
}
