//! Tonal ramp generation: five tints, the base color, four shades, and a
//! background-blended variant for dark surfaces.

use serde::{Deserialize, Serialize};

use crate::color::{self, Hsv, InvalidColorError, Rgb};

const HUE_STEP: f64 = 2.0;
const SATURATION_STEP: f64 = 0.16;
const SATURATION_STEP2: f64 = 0.05;
const BRIGHTNESS_STEP1: f64 = 0.05;
const BRIGHTNESS_STEP2: f64 = 0.15;
const LIGHT_COLOR_COUNT: u32 = 5;
const DARK_COLOR_COUNT: u32 = 4;

pub const DEFAULT_DARK_BACKGROUND: &str = "#141414";

/// (patterns index, blend opacity) pairs for the dark theme, in output
/// order. Index 5 (the base color) is reused on purpose.
const DARK_COLOR_MAP: [(usize, f64); 10] = [
    (7, 0.15),
    (6, 0.25),
    (5, 0.30),
    (5, 0.45),
    (5, 0.65),
    (5, 0.85),
    (4, 0.90),
    (3, 0.95),
    (2, 0.97),
    (1, 0.98),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub theme: Theme,
    /// Blend background for [`Theme::Dark`]. Falls back to
    /// [`DEFAULT_DARK_BACKGROUND`]. Ignored by the default theme.
    pub background_color: Option<String>,
}

/// Generate the 10-step ramp for `input`.
///
/// Default theme: indices 0-4 are tints (lightest first), 5 is the base
/// color, 6-9 are shades. Dark theme: the same ramp re-mapped through
/// [`DARK_COLOR_MAP`], blending the background toward each picked step.
pub fn generate(input: &str, opts: &Options) -> Result<Vec<String>, InvalidColorError> {
    let base = color::parse(input)?;

    let mut patterns = Vec::with_capacity(10);
    for i in (1..=LIGHT_COLOR_COUNT).rev() {
        patterns.push(step(base, i, true));
    }
    patterns.push(base);
    for i in 1..=DARK_COLOR_COUNT {
        patterns.push(step(base, i, false));
    }

    if opts.theme == Theme::Dark {
        let background = color::parse(
            opts.background_color
                .as_deref()
                .unwrap_or(DEFAULT_DARK_BACKGROUND),
        )?;
        return Ok(DARK_COLOR_MAP
            .iter()
            .map(|&(index, opacity)| {
                color::mix(background, patterns[index], opacity * 100.0).to_hex()
            })
            .collect());
    }

    Ok(patterns.into_iter().map(Rgb::to_hex).collect())
}

fn step(base: Rgb, i: u32, light: bool) -> Rgb {
    let hsv = base.to_hsv();
    Hsv {
        h: step_hue(&hsv, i, light),
        s: step_saturation(&hsv, i, light),
        v: step_value(&hsv, i, light),
    }
    .to_rgb()
}

fn step_hue(hsv: &Hsv, i: u32, light: bool) -> f64 {
    let rounded = hsv.h.round();
    let delta = HUE_STEP * f64::from(i);
    // Warm hues drift toward warm, cool hues toward cool; tints and
    // shades move in opposite directions.
    let mut hue = if (60.0..=240.0).contains(&rounded) {
        if light { rounded - delta } else { rounded + delta }
    } else if light {
        rounded + delta
    } else {
        rounded - delta
    };
    if hue < 0.0 {
        hue += 360.0;
    } else if hue >= 360.0 {
        hue -= 360.0;
    }
    hue
}

fn step_saturation(hsv: &Hsv, i: u32, light: bool) -> f64 {
    // Grey colors keep their saturation.
    if hsv.h == 0.0 && hsv.s == 0.0 {
        return hsv.s;
    }
    let mut saturation = if light {
        hsv.s - SATURATION_STEP * f64::from(i)
    } else if i == DARK_COLOR_COUNT {
        hsv.s + SATURATION_STEP
    } else {
        hsv.s + SATURATION_STEP2 * f64::from(i)
    };
    if saturation > 1.0 {
        saturation = 1.0;
    }
    if light && i == LIGHT_COLOR_COUNT && saturation > 0.1 {
        saturation = 0.1;
    }
    if saturation < 0.06 {
        saturation = 0.06;
    }
    round2(saturation)
}

fn step_value(hsv: &Hsv, i: u32, light: bool) -> f64 {
    let value = if light {
        hsv.v + BRIGHTNESS_STEP1 * f64::from(i)
    } else {
        // No lower clamp; the RGB channel clamp absorbs negatives.
        hsv.v - BRIGHTNESS_STEP2 * f64::from(i)
    };
    round2(value.min(1.0))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
