/// Data layer: core types, loading, filtering, and derived summaries.
///
/// Architecture:
/// ```text
///  penguins.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, species counts
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species set + mass bound → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  count, means, projection, histogram
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
