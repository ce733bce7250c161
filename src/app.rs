use eframe::egui;

use crate::state::ChartState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub state: ChartState,
}

impl ChartApp {
    pub fn new(state: ChartState) -> Self {
        Self { state }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and legend caption ----
        egui::TopBottomPanel::top("chart_header").show(ctx, |ui| {
            panels::header(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::line_chart(ui, &self.state);
        });
    }
}
