use std::collections::BTreeSet;

use super::model::{Dataset, DisplayVariable, Species};

// ---------------------------------------------------------------------------
// Filter predicate: species selection + body-mass upper bound
// ---------------------------------------------------------------------------

/// Slider range for the body-mass bound.
pub const MASS_BOUND_MIN: f64 = 2000.0;
pub const MASS_BOUND_MAX: f64 = 6000.0;

/// The user-selected filter parameters. Owned by the UI state and read-only
/// from the filter's perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Species shown. May be emptied by the user; an empty set matches
    /// nothing rather than everything.
    pub selected_species: BTreeSet<Species>,
    /// Records with `body_mass_g` strictly below this bound pass.
    pub mass_upper_bound: f64,
    /// Which column the histogram bins. Does not affect filtering.
    pub display_variable: DisplayVariable,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            selected_species: BTreeSet::from([Species::Adelie]),
            mass_upper_bound: MASS_BOUND_MAX,
            display_variable: DisplayVariable::default(),
        }
    }
}

impl FilterState {
    /// A bound is usable when it is finite and inside the slider range.
    /// Anything else came from outside the input surface and matches nothing.
    pub fn bound_is_valid(&self) -> bool {
        self.mass_upper_bound.is_finite()
            && self.mass_upper_bound >= MASS_BOUND_MIN
            && self.mass_upper_bound <= MASS_BOUND_MAX
    }
}

/// Return indices of records that pass the current filters, in dataset order.
///
/// A record passes when its species is in the selected set AND its body mass
/// is strictly below the bound. An empty selection or an invalid bound
/// matches nothing. Pure function of its two inputs.
pub fn filtered_indices(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    if filters.selected_species.is_empty() || !filters.bound_is_valid() {
        return Vec::new();
    }

    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            filters.selected_species.contains(&rec.species)
                && rec.body_mass_g < filters.mass_upper_bound
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(species: Species, mass: f64) -> Record {
        Record {
            species,
            island: "Dream".to_string(),
            bill_length_mm: 42.0,
            bill_depth_mm: 17.0,
            body_mass_g: mass,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            rec(Species::Adelie, 3000.0),
            rec(Species::Gentoo, 5000.0),
            rec(Species::Adelie, 6500.0),
        ])
    }

    #[test]
    fn keeps_only_matching_species_below_bound() {
        let ds = sample_dataset();
        let filters = FilterState::default();
        // Adelie at 3000 passes; Gentoo fails species; Adelie at 6500 fails mass.
        assert_eq!(filtered_indices(&ds, &filters), vec![0]);
    }

    #[test]
    fn mass_bound_is_strict() {
        let ds = Dataset::from_records(vec![rec(Species::Adelie, 6000.0)]);
        let filters = FilterState::default();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let ds = sample_dataset();
        let filters = FilterState {
            selected_species: BTreeSet::new(),
            ..FilterState::default()
        };
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn minimum_bound_matches_nothing() {
        let ds = sample_dataset();
        let filters = FilterState {
            selected_species: BTreeSet::from(Species::ALL),
            mass_upper_bound: MASS_BOUND_MIN,
            ..FilterState::default()
        };
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn invalid_bound_matches_nothing() {
        let ds = sample_dataset();
        for bad in [f64::NAN, f64::INFINITY, -1.0, 10_000.0] {
            let filters = FilterState {
                mass_upper_bound: bad,
                ..FilterState::default()
            };
            assert!(filtered_indices(&ds, &filters).is_empty(), "bound {bad}");
        }
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let ds = sample_dataset();
        let filters = FilterState {
            selected_species: BTreeSet::from(Species::ALL),
            ..FilterState::default()
        };
        let first = filtered_indices(&ds, &filters);
        assert_eq!(first, vec![0, 1]);
        assert!(first.windows(2).all(|w| w[0] < w[1]));

        // Re-filter the already filtered rows under the same state.
        let survivors: Vec<Record> = first
            .iter()
            .map(|&i| ds.records()[i].clone())
            .collect();
        let again = filtered_indices(&Dataset::from_records(survivors), &filters);
        assert_eq!(again.len(), first.len());
    }

    #[test]
    fn display_variable_does_not_affect_filtering() {
        let ds = sample_dataset();
        let mut filters = FilterState::default();
        let before = filtered_indices(&ds, &filters);
        filters.display_variable = DisplayVariable::BillDepthMm;
        assert_eq!(filtered_indices(&ds, &filters), before);
    }
}
