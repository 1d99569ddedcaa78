//! Test helpers: a surface that records draw calls instead of painting.

use crate::surface::{Paint, Surface, TextBounds};

/// One recorded circle call.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub paint: Paint,
}

/// One recorded text call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub paint: Paint,
}

/// Every draw call a render pass can emit, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        paint: Paint,
    },
    Circle(CircleCmd),
    Text(TextCmd),
}

/// A surface that appends every call to `commands` so tests can assert on
/// exact geometry, colors, and ordering.
///
/// Text metrics are synthetic and fixed: every glyph advances 7 px and the
/// run sits 11 px above the baseline, so "1" measures (0, -11, 7, 0).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All line calls as `(x1, y1, x2, y2)`, in order.
    pub fn lines(&self) -> Vec<(f32, f32, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Line { x1, y1, x2, y2, .. } => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .collect()
    }

    /// All circle calls, in order.
    pub fn circles(&self) -> Vec<&CircleCmd> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    /// All text calls, in order.
    pub fn texts(&self) -> Vec<&TextCmd> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) {
        self.commands.push(DrawCmd::Line {
            x1,
            y1,
            x2,
            y2,
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::Circle(CircleCmd {
            cx,
            cy,
            radius,
            paint: *paint,
        }));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        self.commands.push(DrawCmd::Text(TextCmd {
            text: text.to_string(),
            x,
            y,
            paint: *paint,
        }));
    }

    fn text_bounds(&mut self, text: &str, _paint: &Paint) -> TextBounds {
        let advance = 7 * text.chars().count() as i32;
        TextBounds::new(0, -11, advance, 0)
    }
}
