use anyhow::{anyhow, Result};
use eframe::egui;

use super::{ChartMeta, ChartRenderer, ChartStyle, Figure};
use crate::app::ChartApp;
use crate::data::model::Series;
use crate::data::speedup::SpeedupResult;
use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Native window renderer
// ---------------------------------------------------------------------------

/// Shows each chart in its own native window and returns once the window
/// is closed.
pub struct NativeRenderer {
    style: ChartStyle,
}

impl NativeRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    fn native_options(&self, title: &str) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size(self.style.window_size)
                .with_min_inner_size([600.0, 400.0]),
            // Hand control back after the window closes so the next chart can open.
            run_and_return: true,
            ..Default::default()
        }
    }

    fn show(&self, figure: Figure) -> Result<()> {
        let title = figure.meta.title.clone();
        log::info!(
            "Showing '{title}' with {} series over {} points",
            figure.series.len(),
            figure.x_values.len()
        );

        let state = ChartState::new(figure, self.style.clone());
        eframe::run_native(
            &title,
            self.native_options(&title),
            Box::new(move |_cc| Ok(Box::new(ChartApp::new(state)))),
        )
        .map_err(|e| anyhow!("displaying chart '{title}': {e}"))
    }
}

impl ChartRenderer for NativeRenderer {
    fn render_absolute(&self, x_values: &[f64], series: &[Series], meta: &ChartMeta) -> Result<()> {
        self.show(Figure::new(meta, x_values, series))
    }

    fn render_speedup(
        &self,
        x_values: &[f64],
        speedup: &SpeedupResult,
        meta: &ChartMeta,
    ) -> Result<()> {
        self.show(Figure::new(meta, x_values, speedup.series()))
    }
}
