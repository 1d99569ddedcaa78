//! Stepline Core: windowed step-indicator widget logic, no backend attached.
//!
//! This crate contains everything about the widget except pixels:
//! - Sliding-window state machine over the step range
//! - Measurement against host layout constraints (exact / at-most /
//!   unspecified)
//! - Style tokens, density scaling, and precomputed paints
//! - The surface abstraction the render path paints through
//!
//! Backends implement [`Surface`] and hand it to
//! [`StepIndicator::render`]; the `stepline-tui` crate does this for
//! ratatui. The widget is single-threaded by construction: one `&mut`
//! owner updates it, rendering borrows it shared.

pub mod config;
pub mod indicator;
pub mod measure;
pub mod style;
pub mod surface;

pub use config::{ConfigError, StepIndicatorConfig};
pub use indicator::{StepIndicator, DEFAULT_SIDE_DP};
pub use measure::{Density, Measure, MeasuredSize};
pub use style::{Rgb, StepStyle};
pub use surface::{Paint, PaintStyle, Surface, TextBounds};

#[cfg(test)]
mod test_helpers;
