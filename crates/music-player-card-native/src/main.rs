// Native-only binary - not compiled for WASM
#![cfg(not(target_arch = "wasm32"))]

mod app;

use eframe::NativeOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::MusicPlayerCardApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,music_player_card=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting music player card");

    let native_options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Music Player")
            .with_inner_size([520.0, 480.0]),
        ..NativeOptions::default()
    };
    eframe::run_native(
        "Music Player",
        native_options,
        Box::new(|cc| Ok(Box::new(MusicPlayerCardApp::new(cc)))),
    )
}
