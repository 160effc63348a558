mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{PersistedPosSettings, PosGuiApp, StartupConfig, SETTINGS_STORAGE_KEY};

/// Desktop front-end for the restaurant POS server.
#[derive(Parser, Debug)]
#[command(name = "pos-desktop")]
struct Args {
    /// Base URL of the POS server the page navigations target.
    #[arg(long, default_value = "http://127.0.0.1:5000/")]
    server_url: Url,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(args.server_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Restaurant POS")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Restaurant POS",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedPosSettings>(&text).ok())
            });
            Ok(Box::new(PosGuiApp::new(
                StartupConfig {
                    server_url: args.server_url,
                },
                persisted,
                cmd_tx,
                ui_rx,
            )))
        }),
    )
}
