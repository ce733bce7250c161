//! Benchmark comparison charts: absolute timings per method and speedups
//! relative to a baseline method or to a fixed point of each series.

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod render;
pub mod report;
pub mod state;
pub mod ui;

pub use data::model::{Dataset, Series};
pub use data::speedup::{compute, ReferenceSpec, SpeedupResult};
pub use error::{ShapeError, SpeedupError};
