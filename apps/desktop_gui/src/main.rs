use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use backend_bridge::runtime::spawn_host_worker;
use controller::events::UiEvent;
use ui::CounterApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    spawn_host_worker(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Countdown Desktop")
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Countdown Desktop",
        options,
        Box::new(|_cc| Ok(Box::new(CounterApp::new(cmd_tx, ui_rx)))),
    )
}
