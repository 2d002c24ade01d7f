use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Species – the fixed categorical column
// ---------------------------------------------------------------------------

/// One of the three penguin species in the dataset.
/// `Ord` so it can live in `BTreeSet` for the selection filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    /// All species in display order (matches the checkbox group).
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown species: {0:?}")]
pub struct UnknownSpecies(pub String);

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Gentoo" => Ok(Species::Gentoo),
            "Chinstrap" => Ok(Species::Chinstrap),
            other => Err(UnknownSpecies(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayVariable – which numeric column the histogram bins
// ---------------------------------------------------------------------------

/// The numeric column selectable for the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayVariable {
    #[default]
    BillLengthMm,
    BillDepthMm,
}

impl DisplayVariable {
    pub const ALL: [DisplayVariable; 2] =
        [DisplayVariable::BillLengthMm, DisplayVariable::BillDepthMm];

    /// Column name as it appears in the CSV header and the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayVariable::BillLengthMm => "bill_length_mm",
            DisplayVariable::BillDepthMm => "bill_depth_mm",
        }
    }

    /// Read this column's value out of a record.
    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            DisplayVariable::BillLengthMm => record.bill_length_mm,
            DisplayVariable::BillDepthMm => record.bill_depth_mm,
        }
    }
}

impl fmt::Display for DisplayVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single penguin observation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: f64,
    pub bill_depth_mm: f64,
    pub body_mass_g: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full dataset: an ordered sequence of records, loaded once at startup
/// and shared read-only by every computation afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    /// Record count per species, in `Species::ALL` order (sidebar labels).
    species_counts: [usize; 3],
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut species_counts = [0usize; 3];
        for rec in &records {
            let slot = Species::ALL
                .iter()
                .position(|s| *s == rec.species)
                .unwrap_or(0);
            species_counts[slot] += 1;
        }
        Dataset {
            records,
            species_counts,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many records carry the given species.
    pub fn species_count(&self, species: Species) -> usize {
        let slot = Species::ALL
            .iter()
            .position(|s| *s == species)
            .unwrap_or(0);
        self.species_counts[slot]
    }
}
