//! Step indicator state machine, measurement, and render path.
//!
//! [`StepIndicator`] is the whole widget minus the backend:
//! - Sliding-window state over the full step range (which steps are visible,
//!   which are reached)
//! - Measurement against host layout constraints
//! - The draw-call sequence (connector line, marker discs, numerals) emitted
//!   against a [`Surface`]
//!
//! The window has exactly two shapes. While the active step still fits in
//! the first windowful, the window stays anchored at step 0. Once the active
//! step moves past that, the window slides so the active step is always the
//! last visible slot. There is no intermediate scrolling and no animation.
//!
//! Single-writer: all mutation goes through `&mut self`, hosts re-render
//! from `&self`. Hosts poll [`revision`](StepIndicator::revision) to learn
//! whether an update was accepted since the last frame.

use crate::config::StepIndicatorConfig;
use crate::measure::{Density, Measure, MeasuredSize};
use crate::style::StepStyle;
use crate::surface::{Paint, Surface};

/// Default widget side length (both axes), in dp.
pub const DEFAULT_SIDE_DP: f32 = 45.0;

/// The six paints the render path draws with, computed up front.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PaintSet {
    line: Paint,
    active_background: Paint,
    inactive_background: Paint,
    outline: Paint,
    active_text: Paint,
    inactive_text: Paint,
}

impl PaintSet {
    fn compute(style: &StepStyle, density: Density) -> Self {
        let stroke_px = density.dp_to_px(style.stroke_width_dp);
        let text_px = density.dp_to_px(style.text_size_dp);
        Self {
            line: Paint::stroke(style.line, stroke_px),
            active_background: Paint::fill(style.active_background),
            inactive_background: Paint::fill(style.inactive_background),
            outline: Paint::stroke(style.inactive_stroke, stroke_px),
            active_text: Paint::text(style.active_text, text_px),
            inactive_text: Paint::text(style.inactive_text, text_px),
        }
    }
}

/// A windowed horizontal step indicator.
///
/// Steps are 0-based internally and numbered from 1 on screen. The visible
/// window is the half-open range `[current_min_indicator,
/// current_max_indicator)`; after any accepted update it spans exactly
/// `displayed_indicator` steps.
#[derive(Debug, Clone, PartialEq)]
pub struct StepIndicator {
    /// Total number of steps. Fixed.
    max_indicator: usize,
    /// Window width in steps. Fixed.
    displayed_indicator: usize,
    /// Current step, 0-based.
    active_indicator: usize,
    /// First visible step (inclusive).
    current_min_indicator: usize,
    /// One past the last visible step (exclusive).
    current_max_indicator: usize,

    style: StepStyle,
    density: Density,
    /// Default width in px at the current density.
    default_width: f32,
    /// Default height in px. Marker geometry keys off this, not the
    /// measured height.
    default_height: f32,
    /// Outline ring and connector thickness in px.
    stroke_width: f32,
    paints: PaintSet,

    /// Result of the most recent measure pass.
    measured: MeasuredSize,
    /// Bumped by every accepted update, never by rejections.
    revision: u64,
}

impl Default for StepIndicator {
    fn default() -> Self {
        Self::new(StepIndicatorConfig::default(), Density::BASELINE)
    }
}

impl StepIndicator {
    pub fn new(config: StepIndicatorConfig, density: Density) -> Self {
        let side = density.dp_to_px(DEFAULT_SIDE_DP);
        Self {
            max_indicator: config.max_indicator,
            displayed_indicator: config.displayed_indicator,
            active_indicator: 0,
            current_min_indicator: 0,
            current_max_indicator: config.displayed_indicator,
            style: config.style,
            density,
            default_width: side,
            default_height: side,
            stroke_width: density.dp_to_px(config.style.stroke_width_dp),
            paints: PaintSet::compute(&config.style, density),
            measured: MeasuredSize::default(),
            revision: 0,
        }
    }

    // ── Public API ─────────────────────────────────────────────────────

    /// Moves the active step to `indicator`, sliding the window when needed.
    ///
    /// Rejected (state untouched, returns `false`) when `indicator` is past
    /// the last step or below the first visible step. The second guard means
    /// stepping backward out of the current window is a no-op; backward
    /// moves only work within the visible range.
    ///
    /// Accepted updates bump [`revision`](Self::revision) even when
    /// `indicator` is already the active step.
    pub fn set_current_indicator(&mut self, indicator: isize) -> bool {
        if indicator >= self.max_indicator as isize
            || indicator < self.current_min_indicator as isize
        {
            return false;
        }
        let indicator = indicator as usize;

        self.active_indicator = indicator;
        if indicator < self.displayed_indicator {
            self.current_min_indicator = 0;
            self.current_max_indicator = self.displayed_indicator;
        } else {
            self.current_max_indicator = indicator + 1;
            self.current_min_indicator = self.current_max_indicator - self.displayed_indicator;
        }
        self.revision += 1;
        true
    }

    /// Resolves the widget size against one constraint per axis, stores it,
    /// and returns it. The render path draws into the stored width.
    ///
    /// Measuring never bumps the revision.
    pub fn measure(&mut self, width: Measure, height: Measure) -> MeasuredSize {
        self.measured = MeasuredSize::new(self.measure_width(width), self.measure_height(height));
        self.measured
    }

    /// Emits the widget's draw calls onto `surface`: connector line first,
    /// then marker discs, then numerals on top.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.draw_connector(surface);
        self.draw_markers(surface);
        self.draw_numerals(surface);
    }

    /// Rescales the widget to a new display density: default dimensions,
    /// stroke thickness, and paints are recomputed. Window state and the
    /// revision are untouched.
    pub fn set_density(&mut self, density: Density) {
        let side = density.dp_to_px(DEFAULT_SIDE_DP);
        self.density = density;
        self.default_width = side;
        self.default_height = side;
        self.stroke_width = density.dp_to_px(self.style.stroke_width_dp);
        self.paints = PaintSet::compute(&self.style, density);
    }

    pub fn max_indicator(&self) -> usize {
        self.max_indicator
    }

    pub fn displayed_indicator(&self) -> usize {
        self.displayed_indicator
    }

    pub fn active_indicator(&self) -> usize {
        self.active_indicator
    }

    pub fn current_min_indicator(&self) -> usize {
        self.current_min_indicator
    }

    pub fn current_max_indicator(&self) -> usize {
        self.current_max_indicator
    }

    pub fn style(&self) -> &StepStyle {
        &self.style
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn measured_size(&self) -> MeasuredSize {
        self.measured
    }

    /// Count of accepted updates so far. Hosts redraw when this moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ── Measurement ────────────────────────────────────────────────────

    fn measure_width(&self, constraint: Measure) -> u32 {
        match constraint {
            Measure::Exact(size) => size,
            Measure::AtMost(size) => {
                // Wrap content: one cell per visible slot minus the trailing
                // half cell the last marker does not need.
                let slots = self.displayed_indicator.max(1) as u32;
                let cell = size / slots;
                cell * (slots - 1) + cell / 2
            }
            Measure::Unspecified => self.default_width as u32,
        }
    }

    fn measure_height(&self, constraint: Measure) -> u32 {
        match constraint {
            Measure::Exact(size) => size,
            Measure::AtMost(size) => (self.default_height as u32).min(size),
            Measure::Unspecified => self.default_height as u32,
        }
    }

    // ── Render path ────────────────────────────────────────────────────

    /// Measured width split evenly into one cell per visible slot.
    fn cell_width(&self) -> u32 {
        self.measured.width / self.displayed_indicator.max(1) as u32
    }

    fn draw_connector(&self, surface: &mut dyn Surface) {
        let cell = self.cell_width() as f32;
        let y = self.default_height / 2.0;

        // Anchored window: the line starts under the first marker's center.
        // Slid window: the first visible marker is a continuation, so the
        // line runs from the left edge.
        let start_x = if self.active_indicator >= self.displayed_indicator {
            0.0
        } else {
            cell / 2.0
        };

        // The line overshoots the last marker unless the final step is
        // active, where it stops under the last marker's center.
        let end_x = if self.active_indicator + 1 == self.max_indicator {
            self.measured.width as f32 - cell / 2.0
        } else {
            self.measured.width as f32
        };

        surface.draw_line(start_x, y, end_x, y, &self.paints.line);
    }

    fn draw_markers(&self, surface: &mut dyn Surface) {
        let cell = self.cell_width();
        let cy = self.default_height / 2.0;
        let radius = self.default_height / 2.0;

        for step in self.current_min_indicator..self.current_max_indicator {
            let slot = (step - self.current_min_indicator) as u32;
            let cx = (cell * slot) as f32 + cell as f32 / 2.0;

            let fill = if step <= self.active_indicator {
                &self.paints.active_background
            } else {
                &self.paints.inactive_background
            };
            surface.draw_circle(cx, cy, radius, fill);

            // Upcoming markers get an outline ring, inset so the stroke
            // stays inside the disc.
            if step > self.active_indicator {
                surface.draw_circle(cx, cy, radius - self.stroke_width / 2.0, &self.paints.outline);
            }
        }
    }

    fn draw_numerals(&self, surface: &mut dyn Surface) {
        let cell = self.cell_width();
        let cy = self.default_height / 2.0;

        for step in self.current_min_indicator..self.current_max_indicator {
            let slot = (step - self.current_min_indicator) as u32;
            let label = (step + 1).to_string();

            let paint = if step <= self.active_indicator {
                &self.paints.active_text
            } else {
                &self.paints.inactive_text
            };

            // Center the glyph run on the marker center: the draw origin is
            // the baseline, so subtract the bounds' center offsets.
            let bounds = surface.text_bounds(&label, paint);
            let x = (cell * slot) as f32 + cell as f32 / 2.0 - bounds.center_x() as f32;
            let y = cy - bounds.center_y() as f32;
            surface.draw_text(&label, x, y, paint);
        }
    }
}
