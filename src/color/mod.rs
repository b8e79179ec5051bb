use thiserror::Error;

pub mod named;

/// A color string that cannot be resolved to an RGB triple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {input:?}")]
pub struct InvalidColorError {
    pub input: String,
}

impl InvalidColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// An sRGB triple, one byte per channel. No alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0,360), saturation and value in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from float channels, clamping to [0,255] before rounding.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let quantize = |c: f64| c.clamp(0.0, 255.0).round() as u8;
        Self {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }

    pub fn to_hsv(self) -> Hsv {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsv {
            h: h / 6.0 * 360.0,
            s,
            v,
        }
    }
}

impl Hsv {
    /// Inverse of [`Rgb::to_hsv`]. Out-of-range values (a negative value
    /// from a ramp step, say) are absorbed by the channel clamp.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0 * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = self.v * (1.0 - self.s);
        let q = self.v * (1.0 - f * self.s);
        let t = self.v * (1.0 - (1.0 - f) * self.s);

        let sector = sector as usize % 6;
        let r = [self.v, q, p, p, t, self.v][sector];
        let g = [t, self.v, self.v, q, p, p][sector];
        let b = [p, p, t, self.v, self.v, q][sector];

        Rgb::from_channels(r * 255.0, g * 255.0, b * 255.0)
    }
}

/// Parse a hex color (`#rrggbb`, `#rgb`, with or without `#`) or a CSS
/// named color. Case-insensitive; surrounding whitespace is ignored.
pub fn parse(input: &str) -> Result<Rgb, InvalidColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidColorError::new(input));
    }

    let (had_hash, body) = match trimmed.strip_prefix('#') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if let Some(rgb) = parse_hex(body) {
        return Ok(rgb);
    }
    if !had_hash {
        if let Some(rgb) = named::lookup(body) {
            return Ok(rgb);
        }
    }
    Err(InvalidColorError::new(input))
}

fn parse_hex(body: &str) -> Option<Rgb> {
    let expanded;
    let digits = match body.len() {
        6 => body,
        3 => {
            expanded = body
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>();
            &expanded
        }
        _ => return None,
    };
    let bytes = hex::decode(digits).ok()?;
    Some(Rgb::new(bytes[0], bytes[1], bytes[2]))
}

/// Per-channel linear interpolation from `from` toward `to`.
/// `amount` is on a 0-100 scale.
pub fn mix(from: Rgb, to: Rgb, amount: f64) -> Rgb {
    let p = amount / 100.0;
    let blend = |a: u8, b: u8| f64::from(a) + (f64::from(b) - f64::from(a)) * p;
    Rgb::from_channels(
        blend(from.r, to.r),
        blend(from.g, to.g),
        blend(from.b, to.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse("#b32aa9").unwrap(), Rgb::new(0xb3, 0x2a, 0xa9));
        assert_eq!(parse("B32AA9").unwrap(), Rgb::new(0xb3, 0x2a, 0xa9));
        assert_eq!(parse("  #1890FF ").unwrap(), Rgb::new(0x18, 0x90, 0xff));
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse("#fff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(parse("#111").unwrap(), Rgb::new(0x11, 0x11, 0x11));
        assert_eq!(parse("1a3").unwrap(), Rgb::new(0x11, 0xaa, 0x33));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse("white").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(parse("Rebeccapurple").unwrap(), Rgb::new(0x66, 0x33, 0x99));
        assert_eq!(parse("dodgerblue").unwrap(), Rgb::new(0x1e, 0x90, 0xff));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("").is_err());
        assert!(parse("#12345").is_err());
        assert!(parse("#ggg").is_err());
        assert!(parse("#white").is_err());
        assert!(parse("notacolor").is_err());
    }

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(Rgb::new(0xb3, 0x2a, 0xa9).to_hex(), "#b32aa9");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_from_channels_clamps() {
        assert_eq!(Rgb::from_channels(-12.0, 300.0, 127.5), Rgb::new(0, 255, 128));
    }

    #[test]
    fn test_hsv_known_values() {
        let hsv = Rgb::new(255, 0, 0).to_hsv();
        assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 1.0, 1.0));

        let hsv = Rgb::new(0, 255, 0).to_hsv();
        assert_eq!((hsv.h, hsv.s, hsv.v), (120.0, 1.0, 1.0));

        let hsv = Rgb::new(128, 128, 128).to_hsv();
        assert_eq!((hsv.h, hsv.s), (0.0, 0.0));
    }

    #[test]
    fn test_round_trip() {
        for hex in ["#b32aa9", "#1890ff", "#808080", "#ff0008", "#00ff7f", "#0d0d0e"] {
            let rgb = parse(hex).unwrap();
            let back = rgb.to_hsv().to_rgb();
            assert!(rgb.r.abs_diff(back.r) <= 1, "{hex}");
            assert!(rgb.g.abs_diff(back.g) <= 1, "{hex}");
            assert!(rgb.b.abs_diff(back.b) <= 1, "{hex}");
        }
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb::new(0x14, 0x14, 0x14);
        let b = Rgb::new(0xb3, 0x2a, 0xa9);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 100.0), b);
        assert_eq!(mix(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 50.0).r, 128);
    }
}
