/// Chart output: what a chart is made of and who draws it.
///
/// The data layer never touches a window. It hands x values, series and
/// [`ChartMeta`] to a [`ChartRenderer`]; [`native::NativeRenderer`] draws
/// them with egui_plot.
pub mod native;

use anyhow::Result;

use crate::data::model::Series;
use crate::data::speedup::SpeedupResult;

// ---------------------------------------------------------------------------
// Chart metadata and styling
// ---------------------------------------------------------------------------

/// Axis labels, title and legend caption of one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMeta {
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub legend_title: String,
}

impl ChartMeta {
    pub fn new(
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        title: impl Into<String>,
        legend_title: impl Into<String>,
    ) -> Self {
        ChartMeta {
            x_label: x_label.into(),
            y_label: y_label.into(),
            title: title.into(),
            legend_title: legend_title.into(),
        }
    }
}

/// Figure appearance shared by every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Window inner size in logical pixels.
    pub window_size: [f32; 2],
    pub line_width: f32,
    /// Radius of the circular point markers; 0 hides them.
    pub marker_radius: f32,
    pub show_grid: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            window_size: [1000.0, 600.0],
            line_width: 1.5,
            marker_radius: 2.5,
            show_grid: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Figure – a chart resolved for display
// ---------------------------------------------------------------------------

/// Everything needed to draw one line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub meta: ChartMeta,
    pub x_values: Vec<f64>,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(meta: &ChartMeta, x_values: &[f64], series: &[Series]) -> Self {
        Figure {
            meta: meta.clone(),
            x_values: x_values.to_vec(),
            series: series.to_vec(),
        }
    }

    /// `[x, y]` pairs of one series, skipping points whose value is not
    /// finite so a zero measurement leaves a gap instead of stretching the
    /// axes to infinity.
    pub fn plot_points(&self, series: &Series) -> Vec<[f64; 2]> {
        self.x_values
            .iter()
            .zip(&series.values)
            .filter(|(_, y)| y.is_finite())
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Renderer seam
// ---------------------------------------------------------------------------

/// Draws line charts. Both calls block until the chart has been shown.
pub trait ChartRenderer {
    /// Plot measured values of every series over `x_values`.
    fn render_absolute(&self, x_values: &[f64], series: &[Series], meta: &ChartMeta)
        -> Result<()>;

    /// Plot speedup ratios over `x_values`.
    fn render_speedup(
        &self,
        x_values: &[f64],
        speedup: &SpeedupResult,
        meta: &ChartMeta,
    ) -> Result<()>;
}
