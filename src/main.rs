//! Trellis Viewer - Main Entry Point
//!
//! Usage: `trellis-view [CONFIG.toml]`. Without an argument the config is
//! read from the platform config directory, falling back to defaults.

use trellis_view::{
    app::Workbench,
    config::AppConfig,
    engine::{DecoderProcess, EngineBridge},
    frontend::TrellisApp,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,trellis_view=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trellis Viewer");

    let config = match std::env::args_os().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config {:?}: {}", path, e);
                AppConfig::default()
            }
        },
        None => AppConfig::load_or_default(),
    };
    let engine = DecoderProcess::from_config(&config.engine);
    tracing::info!("Using decoding engine {:?}", engine.program());

    let (bridge, worker_handle) =
        EngineBridge::spawn(engine).expect("Failed to start engine worker thread");
    let workbench = Workbench::new(bridge);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Trellis Viewer"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Trellis Viewer",
        native_options,
        Box::new(move |_cc| Ok(Box::new(TrellisApp::new(workbench, &config)))),
    );

    // The worker may be blocked on a hung engine; don't wait for it
    tracing::info!("Shutting down...");
    drop(worker_handle);

    result
}
