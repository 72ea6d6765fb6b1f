use eframe::egui::{self, Color32};
use music_player_card::{MusicPlayerCard, PlayerConfig};

pub struct MusicPlayerCardApp {
    card: MusicPlayerCard,
}

impl MusicPlayerCardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            card: MusicPlayerCard::new(&PlayerConfig::default()),
        }
    }
}

impl eframe::App for MusicPlayerCardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(Color32::from_rgb(3, 7, 18)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let card_height = 360.0;
                    ui.add_space(((ui.available_height() - card_height) * 0.5).max(16.0));
                    ui.add(&mut self.card);
                });
            });
    }
}
