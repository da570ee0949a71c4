use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Species colours
// ---------------------------------------------------------------------------

/// HSL hue (degrees) assigned to each species: blue, orange, green.
fn species_hue(species: Species) -> f32 {
    match species {
        Species::Setosa => 210.0,
        Species::Versicolor => 30.0,
        Species::Virginica => 120.0,
    }
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    let [r, g, b] =
        [rgb.red, rgb.green, rgb.blue].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgb(r, g, b)
}

/// One colour per label, shared by every chart and the sidebar.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: [Color32; 3],
}

impl ColorMap {
    pub fn color_for(&self, species: Species) -> Color32 {
        self.colors[species.code() as usize]
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap {
            colors: Species::ALL.map(|s| hsl_to_color32(Hsl::new(species_hue(s), 0.7, 0.5))),
        }
    }
}
