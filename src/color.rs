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
// Shape → marker colour
// ---------------------------------------------------------------------------

/// Shapes with a fixed, recognisable colour assignment.
pub const NAMED_SHAPES: [(&str, Color32); 9] = [
    ("light", Color32::from_rgb(0xff, 0xf2, 0x0f)),
    ("circle", Color32::from_rgb(0x22, 0x21, 0xff)),
    ("sphere", Color32::from_rgb(0x97, 0xff, 0xfa)),
    ("disk", Color32::from_rgb(0x97, 0x00, 0xb3)),
    ("triangle", Color32::from_rgb(0x0a, 0xff, 0x0b)),
    ("cylinder", Color32::from_rgb(0xee, 0x10, 0x00)),
    ("fireball", Color32::from_rgb(0xff, 0x82, 0x19)),
    ("formation", Color32::from_rgb(0xff, 0x6e, 0xc9)),
    ("unknown", Color32::from_rgb(0x55, 0x55, 0x66)),
];

/// Look up the marker colour for a (lower-cased) shape name.
///
/// Shapes outside the fixed table get a stable hue from a generated palette
/// so that e.g. "chevron" and "teardrop" stay tellable apart.
pub fn shape_color(shape: &str) -> Color32 {
    for (name, color) in NAMED_SHAPES {
        if name == shape {
            return color;
        }
    }
    fallback_color(shape)
}

fn fallback_color(shape: &str) -> Color32 {
    const FALLBACK_HUES: usize = 12;
    let palette = generate_palette(FALLBACK_HUES);
    // FNV-1a over the name picks a stable palette slot.
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in shape.bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    palette[(hash % FALLBACK_HUES as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_shapes_use_the_fixed_table() {
        assert_eq!(shape_color("light"), Color32::from_rgb(0xff, 0xf2, 0x0f));
        assert_eq!(shape_color("unknown"), Color32::from_rgb(0x55, 0x55, 0x66));
    }

    #[test]
    fn fallback_is_stable_per_name() {
        assert_eq!(shape_color("chevron"), shape_color("chevron"));
    }

    #[test]
    fn palette_size_matches_request() {
        assert_eq!(generate_palette(7).len(), 7);
        assert!(generate_palette(0).is_empty());
    }
}
