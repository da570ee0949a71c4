/// Data layer: core types, loading, filtering and derived views.
///
/// Architecture:
/// ```text
///   assets/iris.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse table, map class code → Species
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ IrisDataset  │  Vec<IrisSample>
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → FilteredView (row indices)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  scatter series, histograms + box summaries, table rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
pub mod view;
