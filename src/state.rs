use crate::color::SeriesColors;
use crate::render::{ChartStyle, Figure};

// ---------------------------------------------------------------------------
// Chart window state
// ---------------------------------------------------------------------------

/// What one chart window shows, independent of rendering.
pub struct ChartState {
    pub figure: Figure,

    /// One colour per series, in series order.
    pub colors: SeriesColors,

    pub style: ChartStyle,
}

impl ChartState {
    pub fn new(figure: Figure, style: ChartStyle) -> Self {
        let colors = SeriesColors::new(figure.series.iter().map(|sr| sr.label.as_str()));
        Self {
            figure,
            colors,
            style,
        }
    }

    /// Number of points that will actually be drawn across all series.
    pub fn drawn_point_count(&self) -> usize {
        self.figure
            .series
            .iter()
            .map(|sr| self.figure.plot_points(sr).len())
            .sum()
    }
}
