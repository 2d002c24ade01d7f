use eframe::egui::{self, ScrollArea, Ui};

use crate::color::SpeciesColors;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    species_colors: SpeciesColors,
}

impl DashboardApp {
    pub fn new(dataset: Dataset) -> Self {
        DashboardApp {
            state: AppState::new(dataset),
            species_colors: SpeciesColors::default(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.species_colors);
            });

        // ---- Central panel: value boxes, histogram, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::value_boxes(ui, &self.state);
            ui.add_space(8.0);

            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].group(|ui: &mut Ui| {
                    ui.strong("Bill length and depth");
                    ui.separator();
                    plot::histogram_plot(ui, &self.state, &self.species_colors);
                });
                cols[1].group(|ui: &mut Ui| {
                    ui.strong("Penguin Data");
                    ui.separator();
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui: &mut Ui| {
                            table::data_table(ui, &self.state, &self.species_colors);
                        });
                });
            });
        });
    }
}
