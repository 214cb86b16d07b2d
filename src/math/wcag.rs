use crate::math::color::Rgb;
use crate::types::Situation;

/// Convert an sRGB channel (0-255) to its linear-light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG contrast ratio between two colors, in [1, 21].
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2, so which color is
/// foreground and which background never matters.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Minimum contrast ratio required for a situation (WCAG 1.4.3, level AA).
/// The language bucket never changes the number; it is carried on the
/// verdict for report segmentation only.
pub fn required_ratio(situation: Situation) -> f64 {
    match situation {
        Situation::A => 4.5,
        Situation::B => 3.0,
    }
}
