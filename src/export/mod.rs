//! Presentation formatting for generated ramps: plain lines for shells,
//! the flat JSON array, and the keyed-object form (`"0"`, `"100"`, ...).

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::InvalidColorError;
use crate::palette::{self, Options, Theme};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One hex color per line.
    #[default]
    Lines,
    /// Flat JSON array.
    Json,
    /// JSON object keyed by weight (0, 100, 200, ...).
    Map,
}

/// A base color's light and dark ramps, keyed the way saved palettes are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub key: String,
    pub color: String,
    pub light: Vec<String>,
    pub dark: Vec<String>,
}

/// Uppercased `color-bgLight-bgDark` triple identifying a generated sheet.
pub fn palette_key(color: &str, bg_light: &str, bg_dark: &str) -> String {
    format!(
        "{}-{}-{}",
        color.to_uppercase(),
        bg_light.to_uppercase(),
        bg_dark.to_uppercase()
    )
}

/// Generate both ramps for `color`: the default ramp (the light surface
/// never feeds the algorithm) and the dark ramp blended over `bg_dark`.
pub fn sheet(color: &str, bg_light: &str, bg_dark: &str) -> Result<Sheet, InvalidColorError> {
    let light = palette::generate(color, &Options::default())?;
    let dark = palette::generate(
        color,
        &Options {
            theme: Theme::Dark,
            background_color: Some(bg_dark.to_string()),
        },
    )?;
    Ok(Sheet {
        key: palette_key(color, bg_light, bg_dark),
        color: color.to_string(),
        light,
        dark,
    })
}

pub fn render(palette: &[String], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Lines => Ok(palette.join("\n")),
        Format::Json => serde_json::to_string(palette).context("serialize palette"),
        Format::Map => {
            let mut map = Map::new();
            for (i, c) in palette.iter().enumerate() {
                map.insert((i * 100).to_string(), Value::String(c.clone()));
            }
            serde_json::to_string_pretty(&Value::Object(map)).context("serialize palette map")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_key() {
        assert_eq!(
            palette_key("#b32aa9", "#fff", "#111"),
            "#B32AA9-#FFF-#111"
        );
    }

    #[test]
    fn test_render_lines() {
        let palette = vec!["#aaaaaa".to_string(), "#bbbbbb".to_string()];
        assert_eq!(render(&palette, Format::Lines).unwrap(), "#aaaaaa\n#bbbbbb");
    }

    #[test]
    fn test_render_json_array() {
        let palette = vec!["#aaaaaa".to_string(), "#bbbbbb".to_string()];
        assert_eq!(
            render(&palette, Format::Json).unwrap(),
            r##"["#aaaaaa","#bbbbbb"]"##
        );
    }

    #[test]
    fn test_render_map_keys() {
        let palette: Vec<String> = (0..10).map(|i| format!("#0000{i:02}")).collect();
        let rendered = render(&palette, Format::Map).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 10);
        assert_eq!(obj["0"], "#000000");
        assert_eq!(obj["500"], "#000005");
        assert_eq!(obj["900"], "#000009");
    }

    #[test]
    fn test_sheet_matches_single_calls() {
        let s = sheet("#b32aa9", "#fff", "#111").unwrap();
        assert_eq!(s.key, "#B32AA9-#FFF-#111");
        assert_eq!(s.light, palette::generate("#b32aa9", &Options::default()).unwrap());
        assert_eq!(s.light.len(), 10);
        assert_eq!(s.dark.len(), 10);
        assert_ne!(s.light, s.dark);
    }

    #[test]
    fn test_sheet_invalid_background() {
        assert!(sheet("#b32aa9", "#fff", "bogus").is_err());
    }
}
