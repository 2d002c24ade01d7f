use super::model::{Dataset, DisplayVariable, Species};

// ---------------------------------------------------------------------------
// Derived displays: pure read-only views over the filtered indices
// ---------------------------------------------------------------------------

/// Number of records in the filtered view.
pub fn count(indices: &[usize]) -> usize {
    indices.len()
}

/// Arithmetic mean of the given column over the filtered view.
/// `None` when the view is empty.
pub fn mean_of(dataset: &Dataset, indices: &[usize], variable: DisplayVariable) -> Option<f64> {
    if indices.is_empty() {
        return None;
    }
    let sum: f64 = indices
        .iter()
        .map(|&i| variable.value_of(&dataset.records()[i]))
        .sum();
    Some(sum / indices.len() as f64)
}

/// Value-box formatting: one decimal place with a millimetre suffix, or the
/// "no data" sentinel for an empty view.
pub fn format_mean_mm(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{v:.1} mm"),
        None => "no data".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Table projection
// ---------------------------------------------------------------------------

/// Column headers for the data table, in display order.
pub const TABLE_COLUMNS: [&str; 5] = [
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "body_mass_g",
];

/// One display-ready table row. The species is kept alongside the rendered
/// cells so the table can color it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub species: Species,
    pub cells: [String; 5],
}

/// Project the filtered view onto the five table columns, preserving row
/// order.
pub fn project(dataset: &Dataset, indices: &[usize]) -> Vec<TableRow> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records()[i];
            TableRow {
                species: rec.species,
                cells: [
                    rec.species.to_string(),
                    rec.island.clone(),
                    format!("{:.1}", rec.bill_length_mm),
                    format!("{:.1}", rec.bill_depth_mm),
                    format!("{:.0}", rec.body_mass_g),
                ],
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Default number of uniform bins.
pub const HISTOGRAM_BINS: usize = 20;

/// A one-dimensional binned frequency distribution of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Lower edge of the first bin.
    pub start: f64,
    /// Uniform bin width.
    pub bin_width: f64,
    /// Record count per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Center of bin `i`, for bar chart placement.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin the chosen column's values across the filtered view.
///
/// Uniform bins over the view's own [min, max]; deterministic for a given
/// view and variable. An empty view yields an empty histogram; a view where
/// every value is identical collapses to a single bin.
pub fn histogram(dataset: &Dataset, indices: &[usize], variable: DisplayVariable) -> Histogram {
    let values: Vec<f64> = indices
        .iter()
        .map(|&i| variable.value_of(&dataset.records()[i]))
        .collect();

    if values.is_empty() {
        return Histogram {
            start: 0.0,
            bin_width: 0.0,
            counts: Vec::new(),
        };
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range.abs() < f64::EPSILON {
        // All values equal: one bin centered on the value.
        return Histogram {
            start: min - 0.5,
            bin_width: 1.0,
            counts: vec![values.len()],
        };
    }

    let bin_width = range / HISTOGRAM_BINS as f64;
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for v in values {
        let mut bin = ((v - min) / bin_width) as usize;
        // The maximum falls on the upper edge of the last bin.
        if bin >= HISTOGRAM_BINS {
            bin = HISTOGRAM_BINS - 1;
        }
        counts[bin] += 1;
    }

    Histogram {
        start: min,
        bin_width,
        counts,
    }
}
