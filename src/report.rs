//! The benchmark report: which datasets are charted, against which
//! baselines, and with what labels.

use anyhow::{Context, Result};

use crate::data::builtin;
use crate::data::model::Dataset;
use crate::data::speedup::{self, ReferenceSpec};
use crate::error::ShapeError;
use crate::render::{ChartMeta, ChartRenderer};

const TIME_AXIS: &str = "Time Per Iteration (ms)";
const SPEEDUP_AXIS: &str = "Speedup";
const PERFORMANCE_TITLE: &str = "Performance Comparison for Different Methods";
const METHODS: &str = "Methods";
const METHODS_SPEEDUP: &str = "Methods - Speedup";

/// How a dataset is turned into a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureKind {
    /// Raw measurements.
    Absolute,
    /// Speedup relative to the given reference.
    Speedup(ReferenceSpec),
}

/// One chart of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureRequest {
    pub dataset: Dataset,
    pub meta: ChartMeta,
    pub kind: FigureKind,
}

impl FigureRequest {
    pub fn absolute(dataset: Dataset, meta: ChartMeta) -> Self {
        FigureRequest {
            dataset,
            meta,
            kind: FigureKind::Absolute,
        }
    }

    pub fn speedup(dataset: Dataset, reference: ReferenceSpec, meta: ChartMeta) -> Self {
        FigureRequest {
            dataset,
            meta,
            kind: FigureKind::Speedup(reference),
        }
    }

    /// Resolve the chart data and hand it to `renderer`.
    pub fn render(&self, renderer: &dyn ChartRenderer) -> Result<()> {
        let x_values = self.dataset.independent_values();
        match &self.kind {
            FigureKind::Absolute => renderer.render_absolute(x_values, self.dataset.series(), &self.meta),
            FigureKind::Speedup(reference) => {
                let result = speedup::compute(&self.dataset, reference)
                    .with_context(|| format!("computing speedup for '{}'", self.meta.title))?;
                renderer.render_speedup(x_values, &result, &self.meta)
            }
        }
    }
}

/// A time chart followed by its speedup chart for the same dataset.
fn comparison_pair(
    dataset: Dataset,
    x_label: &str,
    reference: ReferenceSpec,
    relative_to: &str,
) -> [FigureRequest; 2] {
    let absolute = FigureRequest::absolute(
        dataset.clone(),
        ChartMeta::new(x_label, TIME_AXIS, PERFORMANCE_TITLE, METHODS),
    );
    let speedup = FigureRequest::speedup(
        dataset,
        reference,
        ChartMeta::new(
            x_label,
            SPEEDUP_AXIS,
            format!("Speedup Comparison for Different Methods (Relative to {relative_to})"),
            METHODS_SPEEDUP,
        ),
    );
    [absolute, speedup]
}

/// The k-means benchmark charts, in display order: the full K sweep, the
/// K sweep up to 64, then the thread sweep.
pub fn default_report() -> Result<Vec<FigureRequest>, ShapeError> {
    let mut requests = Vec::with_capacity(6);
    requests.extend(comparison_pair(
        builtin::results_k()?,
        "K",
        ReferenceSpec::label("Basic"),
        "Basic",
    ));
    requests.extend(comparison_pair(
        builtin::results_k_64()?,
        "K",
        ReferenceSpec::label("Basic"),
        "Basic",
    ));
    requests.extend(comparison_pair(
        builtin::results_num_threads()?,
        "Number of Threads",
        ReferenceSpec::ByIndex(0),
        "1 Thread",
    ));
    Ok(requests)
}

/// Render every request in order, stopping at the first failure.
pub fn render_report(renderer: &dyn ChartRenderer, requests: &[FigureRequest]) -> Result<()> {
    for (i, request) in requests.iter().enumerate() {
        request
            .render(renderer)
            .with_context(|| format!("rendering chart {} of {}", i + 1, requests.len()))?;
    }
    Ok(())
}
