use std::fmt;

use serde::{Serialize, Serializer};

use super::model::{serialize_series, Dataset, Series};
use crate::error::SpeedupError;

// ---------------------------------------------------------------------------
// ReferenceSpec – what every method is compared against
// ---------------------------------------------------------------------------

/// The baseline a speedup is measured against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSpec {
    /// Compare every method to another method, point by point:
    /// `speedup[m][i] = series[label][i] / series[m][i]`.
    ByLabel(String),
    /// Compare every method to its own measurement at a fixed point:
    /// `speedup[m][i] = series[m][index] / series[m][i]`.
    ByIndex(usize),
}

impl ReferenceSpec {
    pub fn label(label: impl Into<String>) -> Self {
        ReferenceSpec::ByLabel(label.into())
    }
}

impl fmt::Display for ReferenceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSpec::ByLabel(label) => write!(f, "series '{label}'"),
            ReferenceSpec::ByIndex(index) => write!(f, "point #{index}"),
        }
    }
}

// ---------------------------------------------------------------------------
// SpeedupResult – dimensionless ratios, same shape as the dataset
// ---------------------------------------------------------------------------

/// Speedup ratios per method, in the dataset's series order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupResult {
    series: Vec<Series>,
}

impl SpeedupResult {
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|sr| sr.label == label)
            .map(|sr| sr.values.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|sr| sr.label.as_str())
    }

    /// Whether any ratio is infinite or NaN (a zero measurement somewhere).
    pub fn has_non_finite(&self) -> bool {
        self.series
            .iter()
            .flat_map(|sr| sr.values.iter())
            .any(|v| !v.is_finite())
    }
}

impl Serialize for SpeedupResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_series(&self.series, serializer)
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Normalise every series of `dataset` against `reference`.
///
/// Zero measurements are not special-cased: the ratios follow IEEE-754
/// division and come out as `inf` or `NaN`.
pub fn compute(dataset: &Dataset, reference: &ReferenceSpec) -> Result<SpeedupResult, SpeedupError> {
    let n = dataset.len();
    log::debug!(
        "Computing speedup of {} series over {n} points relative to {reference}",
        dataset.series_count()
    );

    let series: Vec<Series> = match reference {
        ReferenceSpec::ByLabel(label) => {
            let baseline = dataset
                .get(label)
                .ok_or_else(|| SpeedupError::UnknownLabel(label.clone()))?;
            dataset
                .series()
                .iter()
                .map(|sr| {
                    let values = baseline
                        .iter()
                        .zip(&sr.values)
                        .map(|(&base, &v)| base / v)
                        .collect();
                    Series::new(sr.label.clone(), values)
                })
                .collect()
        }
        ReferenceSpec::ByIndex(index) => {
            if *index >= n {
                return Err(SpeedupError::IndexOutOfRange { index: *index, len: n });
            }
            dataset
                .series()
                .iter()
                .map(|sr| {
                    let base = sr.values[*index];
                    let values = sr.values.iter().map(|&v| base / v).collect();
                    Series::new(sr.label.clone(), values)
                })
                .collect()
        }
    };

    let result = SpeedupResult { series };
    if result.has_non_finite() {
        log::warn!("Speedup relative to {reference} contains non-finite values");
    }
    Ok(result)
}
