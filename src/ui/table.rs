use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::SpeciesColors;
use crate::data::summary::{self, TABLE_COLUMNS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered data table
// ---------------------------------------------------------------------------

/// Render the filtered records as a five-column grid.
pub fn data_table(ui: &mut Ui, state: &AppState, colors: &SpeciesColors) {
    let rows = summary::project(&state.dataset, &state.visible_indices);

    if rows.is_empty() {
        ui.label("No records match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), TABLE_COLUMNS.len() - 1)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for name in TABLE_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for row in &rows {
                body.row(18.0, |mut table_row| {
                    for (i, cell) in row.cells.iter().enumerate() {
                        table_row.col(|ui: &mut Ui| {
                            // Species cell carries its species colour.
                            if i == 0 {
                                ui.label(
                                    RichText::new(cell).color(colors.color_for(row.species)),
                                );
                            } else {
                                ui.label(cell);
                            }
                        });
                    }
                });
            }
        });
}
