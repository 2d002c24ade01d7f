use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};

use super::model::{Dataset, Record, Species};

// ---------------------------------------------------------------------------
// CSV dataset loader
// ---------------------------------------------------------------------------

/// One raw CSV row before validation. The source data carries missing cells
/// ("NA" or empty), so every measurement is optional here.
#[derive(Debug, Deserialize)]
struct RawRow {
    species: String,
    island: String,
    #[serde(deserialize_with = "na_f64")]
    bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "na_f64")]
    bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "na_f64")]
    body_mass_g: Option<f64>,
}

/// Treat empty cells and the literal "NA" as missing.
fn na_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    s.parse::<f64>().map(Some).map_err(serde::de::Error::custom)
}

/// Load the penguin dataset from a CSV file.
///
/// Expected header: `species,island,bill_length_mm,bill_depth_mm,body_mass_g`
/// (extra columns are ignored). Rows with a missing measurement or an unknown
/// species label are skipped with a warning. An empty result is an error:
/// the dashboard cannot render without data.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let species = match raw.species.parse::<Species>() {
            Ok(sp) => sp,
            Err(e) => {
                log::warn!("row {row_no}: {e}, skipping");
                skipped += 1;
                continue;
            }
        };

        let (Some(bill_length_mm), Some(bill_depth_mm), Some(body_mass_g)) =
            (raw.bill_length_mm, raw.bill_depth_mm, raw.body_mass_g)
        else {
            log::warn!("row {row_no}: missing measurement, skipping");
            skipped += 1;
            continue;
        };

        records.push(Record {
            species,
            island: raw.island,
            bill_length_mm,
            bill_depth_mm,
            body_mass_g,
        });
    }

    if records.is_empty() {
        bail!(
            "no usable records in {} ({skipped} rows skipped)",
            path.display()
        );
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} incomplete rows");
    }
    log::info!(
        "loaded {} records from {}",
        records.len(),
        path.display()
    );

    Ok(Dataset::from_records(records))
}
