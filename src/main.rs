#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eframe::Result<()> {
    // RUST_LOG=debug shows why the tick sound is silent, if it is
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    eframe::run_native(
        desk_clock::WINDOW_TITLE,
        desk_clock::native_options(),
        Box::new(|cc| Box::new(desk_clock::ClockApp::new(cc))),
    )
}
