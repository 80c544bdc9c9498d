use crate::core::data::colour::Colour;

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts HSV to 8-bit RGB with rounding.
///
/// `hue` is in degrees and wraps, so 360 lands in the red sector.
/// `saturation` and `value` are in `[0, 1]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let hue = hue.rem_euclid(360.0);
    let chroma = value * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = match (hue / 60.0) as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Colour::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}
