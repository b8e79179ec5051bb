//! Deterministic color-palette generation: a graduated tint ramp for light
//! surfaces, a background-blended shade ramp for dark ones, and a
//! luminance-based white/black overlay chooser.

pub mod color;
pub mod config;
pub mod contrast;
pub mod export;
pub mod palette;

pub use color::InvalidColorError;
pub use contrast::contrast_color;
pub use palette::generate;
