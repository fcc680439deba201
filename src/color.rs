use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
// Color mapping: type name → Color32
// ---------------------------------------------------------------------------

/// Assigns each type a distinct colour, stable for a given type set.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(types: &BTreeSet<String>) -> Self {
        let palette = generate_palette(types.len());
        let mapping = types.iter().cloned().zip(palette).collect();
        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for `ty`, grey if the type is unknown.
    pub fn color_for(&self, ty: &str) -> Color32 {
        self.mapping.get(ty).copied().unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_len() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(18).len(), 18);
    }

    #[test]
    fn test_known_and_unknown_types() {
        let types: BTreeSet<String> = ["Fire", "Water"].iter().map(|s| s.to_string()).collect();
        let map = ColorMap::new(&types);
        assert_ne!(map.color_for("Fire"), map.color_for("Water"));
        assert_eq!(map.color_for("Shadow"), Color32::GRAY);
    }
}
