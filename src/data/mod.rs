/// Data layer: schema, CSV loading, column selection and label counting.
///
/// Architecture:
/// ```text
///      .csv upload
///          │
///          ▼
///   ┌──────────┐
///   │  loader   │  parse file → UploadedTable
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │  filter   │  check schema, select 7 feature columns → Vec<FeatureRow>
///   └──────────┘
///          │  (predictor, labels appended to the table)
///          ▼
///   ┌──────────┐
///   │  counts   │  label column → LabelCounts → bar / pie
///   └──────────┘
/// ```

pub mod counts;
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
