use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// First hue of the palette (a mid blue), in degrees.
const START_HUE: f32 = 210.0;

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (START_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series label → Color32
// ---------------------------------------------------------------------------

/// One colour per series, assigned in series order.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    entries: Vec<(String, Color32)>,
    default_color: Color32,
}

impl SeriesColors {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let palette = generate_palette(labels.len());
        let entries = labels
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.to_string(), c))
            .collect();

        SeriesColors {
            entries,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a series label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }

    /// Legend entries (label → colour) in series order.
    pub fn legend_entries(&self) -> &[(String, Color32)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn colours_follow_series_order() {
        let colors = SeriesColors::new(["Basic", "SIMD", "OMP"]);
        let palette = generate_palette(3);
        assert_eq!(colors.color_for("Basic"), palette[0]);
        assert_eq!(colors.color_for("OMP"), palette[2]);
        assert_eq!(colors.color_for("missing"), Color32::GRAY);

        let labels: Vec<&str> = colors
            .legend_entries()
            .iter()
            .map(|(l, _)| l.as_str())
            .collect();
        assert_eq!(labels, ["Basic", "SIMD", "OMP"]);
    }
}
