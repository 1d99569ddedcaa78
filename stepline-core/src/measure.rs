//! Measurement constraints, resolved sizes, and display density.

use serde::{Deserialize, Serialize};

/// A layout constraint for one axis, as handed down by the host.
///
/// Hosts decode whatever packed representation their toolkit uses into this
/// enum before calling [`measure`](crate::StepIndicator::measure). `Exact`
/// pins the axis, `AtMost` caps it, `Unspecified` lets the widget pick its
/// default dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// The axis must be exactly this many pixels.
    Exact(u32),
    /// The axis may be anything up to this many pixels.
    AtMost(u32),
    /// The host imposes no constraint.
    Unspecified,
}

/// The resolved pixel size produced by a measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasuredSize {
    pub width: u32,
    pub height: u32,
}

impl MeasuredSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Display density: how many physical pixels one density-independent point
/// (dp) covers.
///
/// Dimension defaults are authored in dp so the widget keeps the same
/// apparent size across surfaces. Terminal hosts usually derive a density
/// that makes the default height fill their dot grid; `BASELINE` maps
/// 1 dp to 1 px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density(pub f32);

impl Density {
    /// 1 dp == 1 px.
    pub const BASELINE: Density = Density(1.0);

    /// Converts a dp dimension to physical pixels at this density.
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}
