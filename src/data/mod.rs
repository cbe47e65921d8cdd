/// Data layer: table types, CSV loading, relabelling and writing.
///
/// Architecture:
/// ```text
///   path / URL
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse CSV → Table (types inferred per column)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table   │  column names + rows of CellValue
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform │  species codes → labels
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  Table → CSV
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;
pub mod writer;
