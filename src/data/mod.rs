/// Data layer: benchmark results and their speedup normalisation.
///
/// Architecture:
/// ```text
///   (label, values) literals / builtin results
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  validate shape → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  speedup  │  Dataset + ReferenceSpec → SpeedupResult
///   └──────────┘
/// ```

pub mod builtin;
pub mod model;
pub mod speedup;
