//! Style tokens for the step indicator.
//!
//! A [`StepStyle`] bundles every color and dimension the widget draws with:
//! - **Reached markers**: filled discs behind the steps already passed
//! - **Upcoming markers**: hollow outlined discs for steps not yet reached
//! - **Numerals**: the 1-based step numbers inside the discs
//! - **Connector**: the horizontal line threading the markers
//!
//! Colors are plain RGB so the core stays toolkit-agnostic; adapters convert
//! to whatever their paint system wants. Dimensions are in dp and resolve to
//! pixels through [`Density`](crate::Density).

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// Color and dimension tokens for one step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepStyle {
    /// Disc fill for the active step and every step before it
    pub active_background: Rgb,
    /// Disc fill for steps after the active one
    pub inactive_background: Rgb,
    /// Numeral color on reached discs
    pub active_text: Rgb,
    /// Numeral color on upcoming discs
    pub inactive_text: Rgb,
    /// Outline ring color on upcoming discs
    pub inactive_stroke: Rgb,
    /// Connector line color
    pub line: Rgb,
    /// Outline ring and connector thickness, in dp
    pub stroke_width_dp: f32,
    /// Numeral size, in dp
    pub text_size_dp: f32,
}

impl Default for StepStyle {
    fn default() -> Self {
        Self::material()
    }
}

impl StepStyle {
    /// Material-style palette: purple discs, white ink on reached steps,
    /// black ink and outlines on upcoming ones.
    pub fn material() -> Self {
        Self {
            // Reached discs: vivid purple
            active_background: Rgb(98, 0, 238),

            // Upcoming discs: white with a black outline ring
            inactive_background: Rgb::WHITE,
            inactive_stroke: Rgb::BLACK,

            // Numerals
            active_text: Rgb::WHITE,
            inactive_text: Rgb::BLACK,

            // Connector
            line: Rgb::BLACK,

            stroke_width_dp: 2.0,
            text_size_dp: 16.0,
        }
    }

    /// Dark-terminal palette: cyan discs and pale ink that read well on
    /// near-black backgrounds.
    pub fn terminal_dark() -> Self {
        Self {
            active_background: Rgb(0, 200, 200),
            inactive_background: Rgb(30, 30, 34),
            active_text: Rgb(10, 10, 12),
            inactive_text: Rgb(170, 170, 170),
            inactive_stroke: Rgb(100, 149, 237),
            line: Rgb(100, 149, 237),
            stroke_width_dp: 2.0,
            text_size_dp: 16.0,
        }
    }
}
