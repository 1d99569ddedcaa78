//! Canvas-backed surface: rasterizes widget draw calls onto a dot grid.
//!
//! The core widget paints in pixel space. Here one pixel is one canvas dot:
//! two-by-four dots per terminal cell under braille, one-by-two under half
//! blocks, one-by-one otherwise. Discs and rings are rasterized into point
//! clouds, the connector line goes through the canvas line shape, and
//! numerals ride the canvas label layer so they always land on top of the
//! dots.

use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Context, Line as CanvasLine, Points};
use stepline_core::{Paint, PaintStyle, Surface, TextBounds};
use unicode_width::UnicodeWidthStr;

use crate::palette;

/// Dot resolution of one terminal cell under a marker.
pub fn dots_per_cell(marker: Marker) -> (u32, u32) {
    match marker {
        Marker::Braille => (2, 4),
        Marker::HalfBlock => (1, 2),
        _ => (1, 1),
    }
}

/// A [`Surface`] over a canvas [`Context`].
///
/// Coordinate contract: the widget's pixel space has its origin at the
/// top-left with y growing downward; canvas y grows upward, so rows flip on
/// the way through. The canvas this paints into must have
/// `x_bounds = [0, dots_x - 1]` and `y_bounds = [0, dots_y - 1]`, which
/// makes one canvas unit exactly one dot. An optional
/// [`y_offset`](Self::y_offset) shifts every draw call down, for strips
/// shorter than the canvas.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    /// Terminal cells under the canvas.
    cells: (u16, u16),
    /// Dot resolution per cell.
    dot: (u32, u32),
    /// Total dots on each axis.
    dots: (u32, u32),
    /// Added to every incoming pixel y before rasterization.
    offset_y: f32,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, cells_x: u16, cells_y: u16, marker: Marker) -> Self {
        let dot = dots_per_cell(marker);
        Self {
            ctx,
            cells: (cells_x, cells_y),
            dot,
            dots: (u32::from(cells_x) * dot.0, u32::from(cells_y) * dot.1),
            offset_y: 0.0,
        }
    }

    /// Shifts everything painted through this surface down by `dy` pixels.
    pub fn y_offset(mut self, dy: f32) -> Self {
        self.offset_y = dy;
        self
    }

    /// Highest addressable canvas x coordinate.
    fn span_x(&self) -> f64 {
        f64::from(self.dots.0.saturating_sub(1))
    }

    /// Highest addressable canvas y coordinate.
    fn span_y(&self) -> f64 {
        f64::from(self.dots.1.saturating_sub(1))
    }

    /// Pixel y (downward) to canvas y (upward).
    fn flip(&self, y: f32) -> f64 {
        self.span_y() - f64::from(y)
    }

    /// Clamped dot-index bounding box around a circle.
    fn scan_bounds(&self, cx: f32, cy: f32, radius: f32) -> (u32, u32, u32, u32) {
        let x0 = (cx - radius).floor().max(0.0) as u32;
        let x1 = ((cx + radius).ceil().max(0.0) as u32).min(self.dots.0 - 1);
        let y0 = (cy - radius).floor().max(0.0) as u32;
        let y1 = ((cy + radius).ceil().max(0.0) as u32).min(self.dots.1 - 1);
        (x0, x1, y0, y1)
    }

    /// Dots whose centers fall inside the disc.
    fn disc_dots(&self, cx: f32, cy: f32, radius: f32) -> Vec<(f64, f64)> {
        let r2 = radius * radius;
        let (x0, x1, y0, y1) = self.scan_bounds(cx, cy, radius);
        let mut coords = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    coords.push((f64::from(x), self.span_y() - f64::from(y)));
                }
            }
        }
        coords
    }

    /// Dots whose centers fall within half a stroke of the circle's edge.
    fn ring_dots(&self, cx: f32, cy: f32, radius: f32, stroke_width: f32) -> Vec<(f64, f64)> {
        // Keep at least half a dot of band so hairline strokes still close.
        let half = (stroke_width / 2.0).max(0.5);
        let inner2 = (radius - half).max(0.0).powi(2);
        let outer2 = (radius + half).powi(2);
        let (x0, x1, y0, y1) = self.scan_bounds(cx, cy, radius + half);
        let mut coords = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;
                if d2 >= inner2 && d2 <= outer2 {
                    coords.push((f64::from(x), self.span_y() - f64::from(y)));
                }
            }
        }
        coords
    }

    /// Canvas coordinates that ratatui's label projection maps onto exactly
    /// the given cell. The projection spreads the bounds across `cells - 1`
    /// columns, so the anchor targets the cell's midpoint and saturates at
    /// the edges.
    fn label_anchor(&self, col: u16, row: u16) -> (f64, f64) {
        let x = if self.cells.0 <= 1 {
            0.0
        } else {
            let step = self.span_x() / f64::from(self.cells.0 - 1);
            ((f64::from(col) + 0.5) * step).min(self.span_x())
        };
        let y = if self.cells.1 <= 1 {
            self.span_y()
        } else {
            let step = self.span_y() / f64::from(self.cells.1 - 1);
            (self.span_y() - (f64::from(row) + 0.5) * step).max(0.0)
        };
        (x, y)
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) {
        if self.dots.0 == 0 || self.dots.1 == 0 {
            return;
        }
        let color = palette::to_color(paint.color);
        let (y1, y2) = (y1 + self.offset_y, y2 + self.offset_y);

        // One parallel pass per dot of stroke thickness, centered on the
        // path.
        let thickness = (paint.stroke_width.round() as i32).max(1);
        for pass in 0..thickness {
            let offset = (pass - (thickness - 1) / 2) as f32;
            let line = CanvasLine {
                x1: f64::from(x1).clamp(0.0, self.span_x()),
                y1: self.flip(y1 + offset).clamp(0.0, self.span_y()),
                x2: f64::from(x2).clamp(0.0, self.span_x()),
                y2: self.flip(y2 + offset).clamp(0.0, self.span_y()),
                color,
            };
            self.ctx.draw(&line);
        }
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        if radius <= 0.0 || self.dots.0 == 0 || self.dots.1 == 0 {
            return;
        }
        let cy = cy + self.offset_y;
        let coords = match paint.style {
            PaintStyle::Fill => self.disc_dots(cx, cy, radius),
            PaintStyle::Stroke => self.ring_dots(cx, cy, radius, paint.stroke_width),
        };
        self.ctx.draw(&Points {
            coords: &coords,
            color: palette::to_color(paint.color),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        if self.cells.0 == 0 || self.cells.1 == 0 || text.is_empty() {
            return;
        }
        let bounds = self.text_bounds(text, paint);
        let y = y + self.offset_y;

        // Column from the run's left edge, row from its vertical center.
        let col = ((x / self.dot.0 as f32).floor() as i64)
            .clamp(0, i64::from(self.cells.0) - 1) as u16;
        let center_y = y + bounds.center_y() as f32;
        let row = ((center_y / self.dot.1 as f32).floor() as i64)
            .clamp(0, i64::from(self.cells.1) - 1) as u16;

        let (ax, ay) = self.label_anchor(col, row);
        self.ctx
            .print(ax, ay, TextLine::styled(text.to_string(), palette::text_style(paint)));
    }

    fn text_bounds(&mut self, text: &str, _paint: &Paint) -> TextBounds {
        // Fixed-pitch font: the paint's size cannot change glyph metrics.
        // A run is `width` cells wide and one cell tall, on its baseline.
        let cells = UnicodeWidthStr::width(text) as i32;
        TextBounds::new(0, -(self.dot.1 as i32), cells * self.dot.0 as i32, 0)
    }
}
