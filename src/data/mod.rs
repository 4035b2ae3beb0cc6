/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  sightings .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → SightingDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SightingDataset │  Vec<Sighting>, immutable after load
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  date/duration bucket predicates → visible indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
