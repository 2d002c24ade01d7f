//! End-to-end checks of the filter → summaries pipeline, driven through
//! `AppState` the way the UI drives it.

use std::collections::BTreeSet;

use approx::assert_relative_eq;
use penguin_dash::data::filter::{FilterState, MASS_BOUND_MIN, filtered_indices};
use penguin_dash::data::model::{Dataset, DisplayVariable, Record, Species};
use penguin_dash::data::summary;
use penguin_dash::state::AppState;

fn rec(species: Species, island: &str, length: f64, depth: f64, mass: f64) -> Record {
    Record {
        species,
        island: island.to_string(),
        bill_length_mm: length,
        bill_depth_mm: depth,
        body_mass_g: mass,
    }
}

fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![
        rec(Species::Adelie, "Torgersen", 39.1, 18.7, 3000.0),
        rec(Species::Gentoo, "Biscoe", 47.5, 14.2, 5000.0),
        rec(Species::Adelie, "Dream", 41.0, 19.0, 6500.0),
    ])
}

#[test]
fn default_state_keeps_only_light_adelie() {
    // Species {Adelie}, bound 6000: record 1 passes, record 2 fails species,
    // record 3 fails mass.
    let st = AppState::new(sample_dataset());
    assert_eq!(st.visible_indices, vec![0]);
    assert_eq!(summary::count(&st.visible_indices), 1);

    let mean = summary::mean_of(
        &st.dataset,
        &st.visible_indices,
        DisplayVariable::BillLengthMm,
    )
    .unwrap();
    assert_relative_eq!(mean, 39.1, epsilon = 1e-9);
}

#[test]
fn every_filtered_record_satisfies_both_predicates() {
    let ds = sample_dataset();
    let states = [
        FilterState::default(),
        FilterState {
            selected_species: BTreeSet::from(Species::ALL),
            mass_upper_bound: 5500.0,
            ..FilterState::default()
        },
        FilterState {
            selected_species: BTreeSet::from([Species::Gentoo, Species::Chinstrap]),
            mass_upper_bound: 4000.0,
            ..FilterState::default()
        },
    ];

    for filters in states {
        let indices = filtered_indices(&ds, &filters);
        assert_eq!(summary::count(&indices), indices.len());
        for &i in &indices {
            let rec = &ds.records()[i];
            assert!(filters.selected_species.contains(&rec.species));
            assert!(rec.body_mass_g < filters.mass_upper_bound);
        }
    }
}

#[test]
fn minimum_mass_bound_degrades_every_display() {
    let mut st = AppState::new(sample_dataset());
    st.toggle_species(Species::Gentoo);
    st.toggle_species(Species::Chinstrap);
    st.set_mass_bound(MASS_BOUND_MIN);

    assert!(st.visible_indices.is_empty());
    assert_eq!(summary::count(&st.visible_indices), 0);
    assert_eq!(
        summary::format_mean_mm(summary::mean_of(
            &st.dataset,
            &st.visible_indices,
            DisplayVariable::BillDepthMm,
        )),
        "no data"
    );
    assert!(summary::project(&st.dataset, &st.visible_indices).is_empty());
    assert!(
        summary::histogram(&st.dataset, &st.visible_indices, DisplayVariable::BillLengthMm)
            .is_empty()
    );
}

#[test]
fn display_variable_change_only_moves_the_histogram() {
    let mut st = AppState::new(sample_dataset());
    let view_before = st.visible_indices.clone();
    let count_before = summary::count(&st.visible_indices);
    let mean_before = summary::mean_of(
        &st.dataset,
        &st.visible_indices,
        DisplayVariable::BillLengthMm,
    );
    let hist_before = summary::histogram(
        &st.dataset,
        &st.visible_indices,
        st.filters.display_variable,
    );

    st.set_display_variable(DisplayVariable::BillDepthMm);

    assert_eq!(st.visible_indices, view_before);
    assert_eq!(summary::count(&st.visible_indices), count_before);
    assert_eq!(
        summary::mean_of(
            &st.dataset,
            &st.visible_indices,
            DisplayVariable::BillLengthMm,
        ),
        mean_before
    );
    let hist_after = summary::histogram(
        &st.dataset,
        &st.visible_indices,
        st.filters.display_variable,
    );
    // Same total, different column binned.
    assert_eq!(hist_after.total(), hist_before.total());
}

#[test]
fn projection_mirrors_the_filtered_view() {
    let mut st = AppState::new(sample_dataset());
    st.toggle_species(Species::Gentoo);

    let rows = summary::project(&st.dataset, &st.visible_indices);
    assert_eq!(rows.len(), st.visible_indices.len());
    assert_eq!(rows[0].cells[1], "Torgersen");
    assert_eq!(rows[1].cells[0], "Gentoo");
    assert_eq!(rows[1].cells[4], "5000");
}
