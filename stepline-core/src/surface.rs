//! The drawing surface abstraction the render path paints through.
//!
//! [`StepIndicator::render`](crate::StepIndicator::render) emits primitive
//! draw calls (lines, circles, text runs) against a [`Surface`] trait object.
//! Adapters implement it for their backend; tests implement it with a
//! recorder. The widget never touches a real canvas directly.

use crate::style::Rgb;

/// Whether a paint fills shapes or strokes their outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// An immutable style record for one class of draw call.
///
/// Paints are computed once when the widget is constructed (and again when
/// the density changes) rather than per frame. A paint carries everything a
/// surface needs to honor the call: color, fill/stroke mode, stroke
/// thickness in px, and text size in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub text_size: f32,
}

impl Paint {
    /// A solid fill paint.
    pub fn fill(color: Rgb) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            text_size: 0.0,
        }
    }

    /// An outline paint with the given stroke thickness in px.
    pub fn stroke(color: Rgb, stroke_width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width,
            text_size: 0.0,
        }
    }

    /// A text paint with the given glyph size in px.
    ///
    /// Numerals render bold; surfaces that cannot synthesize weight ignore
    /// it.
    pub fn text(color: Rgb, text_size: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            text_size,
        }
    }
}

/// The tight bounding box of a text run, relative to its baseline origin.
///
/// Follows the convention of raster text APIs: the origin `(0, 0)` sits on
/// the baseline at the left edge of the run, `top` is negative (above the
/// baseline), `bottom` is zero or positive (descenders). Centering a run on
/// a point means subtracting `center_x()`/`center_y()` from that point to
/// get the draw origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Horizontal center offset from the draw origin. Floored integer
    /// midpoint, matching raster text APIs.
    pub fn center_x(&self) -> i32 {
        (self.left + self.right) >> 1
    }

    /// Vertical center offset from the baseline. Negative for runs that sit
    /// mostly above the baseline, which numerals do.
    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) >> 1
    }
}

/// A backend the widget can paint onto.
///
/// Coordinates are f32 pixels with the origin at the widget's top-left and
/// y growing downward. Implementations that use a different convention
/// (terminal dot grids, GL viewports) translate internally.
pub trait Surface {
    /// Draws a straight line segment between two points.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint);

    /// Draws a circle, filled or outlined per the paint's style.
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint);

    /// Draws a text run with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint);

    /// Measures the tight bounds of a text run under this paint.
    fn text_bounds(&mut self, text: &str, paint: &Paint) -> TextBounds;
}
