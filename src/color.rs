use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Pastel blue and peach used for the first two categories.
const BASE_TONES: [Color32; 2] = [
    Color32::from_rgb(0xa2, 0xd5, 0xf2),
    Color32::from_rgb(0xff, 0xc3, 0xa0),
];

/// `n` chart colours: the two pastel base tones, then evenly spaced pastel
/// hues for any further categories.
pub fn chart_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| BASE_TONES.get(i).copied().unwrap_or_else(|| pastel(i, n)))
        .collect()
}

fn pastel(i: usize, n: usize) -> Color32 {
    let hue = (i as f32 / n as f32) * 360.0;
    let hsl = Hsl::new(hue, 0.65, 0.8);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_are_base_tones() {
        let colors = chart_palette(2);
        assert_eq!(colors[0], Color32::from_rgb(0xa2, 0xd5, 0xf2));
        assert_eq!(colors[1], Color32::from_rgb(0xff, 0xc3, 0xa0));
    }

    #[test]
    fn extra_categories_get_distinct_colors() {
        let colors = chart_palette(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[2], colors[3]);
        assert!(chart_palette(0).is_empty());
    }
}
