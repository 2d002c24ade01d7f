use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Species colour mapping
// ---------------------------------------------------------------------------

/// Fixed colour per species, used for checkbox labels, table cells and the
/// histogram bars.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    colors: [Color32; 3],
}

impl Default for SpeciesColors {
    fn default() -> Self {
        let palette = generate_palette(Species::ALL.len());
        let mut colors = [Color32::GRAY; 3];
        for (slot, c) in colors.iter_mut().zip(palette) {
            *slot = c;
        }
        SpeciesColors { colors }
    }
}

impl SpeciesColors {
    pub fn color_for(&self, species: Species) -> Color32 {
        let slot = Species::ALL
            .iter()
            .position(|s| *s == species)
            .unwrap_or(0);
        self.colors[slot]
    }
}
