use std::path::PathBuf;

use eframe::egui;
use penguin_dash::app::DashboardApp;
use penguin_dash::data::loader;

const DEFAULT_DATASET: &str = "assets/penguins.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET.to_string())
        .into();

    // The dashboard cannot render without data: a load failure is fatal.
    let dataset = match loader::load_csv(&path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("failed to load dataset: {e:#}");
            eprintln!("failed to load dataset: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguins dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dataset)))),
    )
}
