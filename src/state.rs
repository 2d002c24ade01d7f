use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::{Dataset, DisplayVariable, Species};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once at startup and never mutated; every display
/// reads from it through `visible_indices`, which is recomputed on each
/// filter change.
pub struct AppState {
    /// The loaded dataset, shared read-only.
    pub dataset: Dataset,

    /// Current filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,
}

impl AppState {
    /// Build the state around a freshly loaded dataset and run the initial
    /// filter.
    pub fn new(dataset: Dataset) -> Self {
        let filters = FilterState::default();
        let visible_indices = filtered_indices(&dataset, &filters);
        AppState {
            dataset,
            filters,
            visible_indices,
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
    }

    /// Toggle a species in the selection. Unchecking the last one is allowed;
    /// the view simply becomes empty.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.filters.selected_species.remove(&species) {
            self.filters.selected_species.insert(species);
        }
        self.refilter();
    }

    /// Set the body-mass upper bound from the slider.
    pub fn set_mass_bound(&mut self, bound: f64) {
        if (bound - self.filters.mass_upper_bound).abs() > f64::EPSILON {
            self.filters.mass_upper_bound = bound;
            self.refilter();
        }
    }

    /// Switch the histogram variable. This never touches the filtered view.
    pub fn set_display_variable(&mut self, variable: DisplayVariable) {
        self.filters.display_variable = variable;
    }
}
