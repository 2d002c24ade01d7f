use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::SpeciesColors;
use crate::data::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Histogram (central panel)
// ---------------------------------------------------------------------------

/// Render the histogram of the selected display variable over the filtered
/// view.
pub fn histogram_plot(ui: &mut Ui, state: &AppState, colors: &SpeciesColors) {
    let variable = state.filters.display_variable;
    let hist = summary::histogram(&state.dataset, &state.visible_indices, variable);

    if hist.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No records match the current filters.");
        });
        return;
    }

    // Bars take the species colour when a single species is selected,
    // otherwise a neutral colour since bins mix species.
    let color = match state.filters.selected_species.iter().next() {
        Some(&sp) if state.filters.selected_species.len() == 1 => colors.color_for(sp),
        _ => Color32::LIGHT_BLUE,
    };

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            Bar::new(hist.bin_center(i), n as f64).width(hist.bin_width * 0.95)
        })
        .collect();

    let chart = BarChart::new(bars).color(color).name(variable.as_str());

    Plot::new("variable_histogram")
        .x_axis_label(variable.as_str())
        .y_axis_label("count")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
