use std::collections::BTreeSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ShapeError;

// ---------------------------------------------------------------------------
// Series – one method's measurements
// ---------------------------------------------------------------------------

/// One labelled sequence of values, one per independent-variable point.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Series {
            label: label.into(),
            values,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – shared x-axis plus the measured series
// ---------------------------------------------------------------------------

/// Benchmark results measured across a common independent variable.
///
/// Every series has exactly one value per entry of `independent_values`,
/// and there is at least one point and one series. Series keep the order
/// they were supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset", into = "RawDataset")]
pub struct Dataset {
    independent_values: Vec<f64>,
    series: Vec<Series>,
}

impl Dataset {
    /// Build a dataset from `(label, values)` pairs.
    pub fn new<I, L>(independent_values: Vec<f64>, series: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = (L, Vec<f64>)>,
        L: Into<String>,
    {
        let series = series
            .into_iter()
            .map(|(label, values)| Series::new(label, values))
            .collect();
        Self::from_series(independent_values, series)
    }

    /// Build a dataset from already-assembled [`Series`].
    pub fn from_series(
        independent_values: Vec<f64>,
        series: Vec<Series>,
    ) -> Result<Self, ShapeError> {
        if independent_values.is_empty() {
            return Err(ShapeError::EmptyIndependent);
        }
        if series.is_empty() {
            return Err(ShapeError::NoSeries);
        }

        let expected = independent_values.len();
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for sr in &series {
            if !seen.insert(sr.label.as_str()) {
                return Err(ShapeError::DuplicateLabel(sr.label.clone()));
            }
            if sr.values.len() != expected {
                return Err(ShapeError::LengthMismatch {
                    label: sr.label.clone(),
                    expected,
                    actual: sr.values.len(),
                });
            }
        }

        Ok(Dataset {
            independent_values,
            series,
        })
    }

    /// The shared x-axis values.
    pub fn independent_values(&self) -> &[f64] {
        &self.independent_values
    }

    /// All series, in insertion order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Values of the series with the given label.
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|sr| sr.label == label)
            .map(|sr| sr.values.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|sr| sr.label.as_str())
    }

    /// Number of independent-variable points (N).
    pub fn len(&self) -> usize {
        self.independent_values.len()
    }

    /// Always false for a constructed dataset; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.independent_values.is_empty()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Keep only the first `n` points of the x-axis and of every series.
    ///
    /// `n` larger than the dataset returns an identical copy.
    pub fn head(&self, n: usize) -> Result<Dataset, ShapeError> {
        if n == 0 {
            return Err(ShapeError::EmptyIndependent);
        }
        let n = n.min(self.len());
        Ok(Dataset {
            independent_values: self.independent_values[..n].to_vec(),
            series: self
                .series
                .iter()
                .map(|sr| Series::new(sr.label.clone(), sr.values[..n].to_vec()))
                .collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Serde representation: { "x_vals": [...], "y_vals": { label: [...] } }
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct RawDataset {
    x_vals: Vec<f64>,
    y_vals: SeriesMap,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = ShapeError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        Dataset::from_series(raw.x_vals, raw.y_vals.0)
    }
}

impl From<Dataset> for RawDataset {
    fn from(ds: Dataset) -> Self {
        RawDataset {
            x_vals: ds.independent_values,
            y_vals: SeriesMap(ds.series),
        }
    }
}

/// An ordered `label → values` object. Key order is preserved both ways,
/// which a plain `BTreeMap` would not do.
struct SeriesMap(Vec<Series>);

impl Serialize for SeriesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_series(&self.0, serializer)
    }
}

/// Write series as a `label → values` map in their stored order.
pub(crate) fn serialize_series<S: Serializer>(
    series: &[Series],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(series.len()))?;
    for sr in series {
        map.serialize_entry(&sr.label, &sr.values)?;
    }
    map.end()
}

impl<'de> Deserialize<'de> for SeriesMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeriesMapVisitor;

        impl<'de> Visitor<'de> for SeriesMapVisitor {
            type Value = SeriesMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from series label to a list of numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SeriesMap, A::Error> {
                let mut series = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, values)) = access.next_entry::<String, Vec<f64>>()? {
                    series.push(Series { label, values });
                }
                Ok(SeriesMap(series))
            }
        }

        deserializer.deserialize_map(SeriesMapVisitor)
    }
}
