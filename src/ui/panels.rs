use eframe::egui::{self, RichText, Slider, Ui};

use crate::color::SpeciesColors;
use crate::data::filter::{MASS_BOUND_MAX, MASS_BOUND_MIN};
use crate::data::model::{DisplayVariable, Species};
use crate::data::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter controls sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, colors: &SpeciesColors) {
    ui.heading("Filter controls");
    ui.separator();

    // ---- Mass slider ----
    ui.strong("Mass");
    let mut bound = state.filters.mass_upper_bound;
    let slider = Slider::new(&mut bound, MASS_BOUND_MIN..=MASS_BOUND_MAX)
        .suffix(" g")
        .integer();
    if ui.add(slider).changed() {
        state.set_mass_bound(bound);
    }
    ui.add_space(8.0);

    // ---- Species checkbox group ----
    ui.strong("Species");
    for species in Species::ALL {
        let mut checked = state.filters.selected_species.contains(&species);
        let label = format!(
            "{species}  ({})",
            state.dataset.species_count(species)
        );
        let text = RichText::new(label).color(colors.color_for(species));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_species(species);
        }
    }
    ui.add_space(8.0);

    // ---- Histogram variable selector ----
    ui.strong("Select variable");
    let current = state.filters.display_variable;
    egui::ComboBox::from_id_salt("display_variable")
        .selected_text(current.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for variable in DisplayVariable::ALL {
                if ui
                    .selectable_label(current == variable, variable.as_str())
                    .clicked()
                {
                    state.set_display_variable(variable);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title plus visible/total record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Penguins dashboard");
        ui.separator();
        ui.label(format!(
            "{} of {} penguins match the current filters",
            state.visible_indices.len(),
            state.dataset.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Value boxes
// ---------------------------------------------------------------------------

/// Render the three summary value boxes: count, mean bill length, mean bill
/// depth. Each recomputes independently from the filtered view.
pub fn value_boxes(ui: &mut Ui, state: &AppState) {
    let view = &state.visible_indices;
    let n = summary::count(view);
    let mean_length = summary::mean_of(&state.dataset, view, DisplayVariable::BillLengthMm);
    let mean_depth = summary::mean_of(&state.dataset, view, DisplayVariable::BillDepthMm);

    ui.columns(3, |cols: &mut [Ui]| {
        value_box(&mut cols[0], "Number of penguins", &n.to_string());
        value_box(
            &mut cols[1],
            "Average bill length",
            &summary::format_mean_mm(mean_length),
        );
        value_box(
            &mut cols[2],
            "Average bill depth",
            &summary::format_mean_mm(mean_depth),
        );
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    ui.group(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(title);
            ui.heading(RichText::new(value).strong());
        });
    });
}
