use eframe::egui::Ui;
use egui_plot::{Corner, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Line chart (central panel)
// ---------------------------------------------------------------------------

/// Render every series of the figure as a line with point markers.
pub fn line_chart(ui: &mut Ui, state: &ChartState) {
    let figure = &state.figure;
    let style = &state.style;

    Plot::new("line_chart")
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label(figure.meta.x_label.as_str())
        .y_axis_label(figure.meta.y_label.as_str())
        .show_grid(style.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for sr in &figure.series {
                let color = state.colors.color_for(&sr.label);
                let points = figure.plot_points(sr);

                // Line and markers share a name so the legend shows one entry.
                if style.marker_radius > 0.0 {
                    let markers = Points::new(PlotPoints::from(points.clone()))
                        .name(&sr.label)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(style.marker_radius);
                    plot_ui.points(markers);
                }

                let line = Line::new(PlotPoints::from(points))
                    .name(&sr.label)
                    .color(color)
                    .width(style.line_width);

                plot_ui.line(line);
            }
        });
}
