use eframe::egui::{Color32, RichText, Ui};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Header – chart title and captioned legend
// ---------------------------------------------------------------------------

/// Render the title line and the legend caption with one swatch per series.
pub fn header(ui: &mut Ui, state: &ChartState) {
    let meta = &state.figure.meta;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(meta.title.as_str());
    });

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong(meta.legend_title.as_str());
        ui.separator();
        for (label, color) in state.colors.legend_entries() {
            ui.label(RichText::new(format!("● {label}")).color(*color));
        }
    });

    let total: usize = state.figure.series.iter().map(|sr| sr.values.len()).sum();
    let drawn = state.drawn_point_count();
    if drawn < total {
        ui.label(
            RichText::new(format!("{} non-finite points not drawn", total - drawn))
                .color(Color32::RED),
        );
    }
}
