#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use gigboard_business::BoardConfig;
use gigboard_ui::{BoardApp, BoardState};

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = BoardConfig::init()?;
    let state = BoardState::from_config(&config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 480.0])
            .with_min_inner_size([480.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gigboard",
        native_options,
        Box::new(move |_cc| Ok(Box::new(BoardApp::new(state)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to start the board: {err}"))
}
