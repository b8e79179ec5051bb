//! White-or-black overlay selection via WCAG relative luminance.

use crate::color::InvalidColorError;

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

/// Pick the overlay color with the higher contrast ratio against `color`.
/// Ties favor black.
pub fn contrast_color(color: &str) -> Result<&'static str, InvalidColorError> {
    let l = luminance(color)?;
    let against_white = contrast_ratio(l, 1.0);
    let against_black = contrast_ratio(l, 0.0);
    Ok(if against_white > against_black {
        WHITE
    } else {
        BLACK
    })
}

/// Relative luminance of a `#`-prefixed hex color.
///
/// Channels are taken by position: chars 1-2, 3-4, and the final two.
/// Inputs longer than `#rrggbb` (an alpha suffix, say) are undefined; the
/// blue channel then reads from the trailing pair.
pub fn luminance(color: &str) -> Result<f64, InvalidColorError> {
    let r = channel(color, 1)?;
    let g = channel(color, 3)?;
    let b = channel(color, color.len().saturating_sub(2))?;
    Ok(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

fn channel(color: &str, start: usize) -> Result<u8, InvalidColorError> {
    color
        .get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .ok_or_else(|| InvalidColorError {
            input: color.to_string(),
        })
}

/// sRGB gamma expansion of a single channel.
fn linearize(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
