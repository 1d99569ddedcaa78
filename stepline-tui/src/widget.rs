//! The ratatui step indicator widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use stepline_core::{Density, Measure, StepIndicator, DEFAULT_SIDE_DP};

use crate::canvas::{dots_per_cell, CanvasSurface};

/// Renders a [`StepIndicator`] onto a canvas dot grid.
///
/// The state lives outside the widget, Scrollbar-style: hosts own a
/// [`StepIndicator`], advance it through
/// [`set_current_indicator`](StepIndicator::set_current_indicator), and
/// render a fresh view each frame. Every frame the view measures the state
/// against the area's dot grid (an exact constraint on both axes) and then
/// paints it through a [`CanvasSurface`].
///
/// Unless a density is pinned with [`density`](Self::density), the dp scale
/// is fitted so the default marker side spans the area's height or one
/// visible slot's width, whichever is smaller. A strip shorter than the
/// area is centered vertically.
///
/// # Example
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
/// use stepline_core::StepIndicator;
/// use stepline_tui::StepIndicatorView;
///
/// let mut state = StepIndicator::default();
/// state.set_current_indicator(2);
///
/// let area = Rect::new(0, 0, 45, 11);
/// let mut buf = Buffer::empty(area);
/// StepIndicatorView::new().render(area, &mut buf, &mut state);
/// ```
pub struct StepIndicatorView<'a> {
    block: Option<Block<'a>>,
    marker: Marker,
    density: Option<Density>,
}

impl<'a> StepIndicatorView<'a> {
    pub fn new() -> Self {
        Self {
            block: None,
            marker: Marker::Braille,
            density: None,
        }
    }

    /// Surrounds the indicator with a block; the indicator draws in the
    /// block's inner area.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Dot resolution for the canvas. Braille by default.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Pins the dp scale instead of fitting the marker side to the area.
    pub fn density(mut self, density: Density) -> Self {
        self.density = Some(density);
        self
    }
}

impl Default for StepIndicatorView<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> StatefulWidget for StepIndicatorView<'a> {
    type State = StepIndicator;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            if let Some(block) = self.block {
                block.render(area, buf);
            }
            return;
        }

        let dot = dots_per_cell(self.marker);
        let px_width = u32::from(inner.width) * dot.0;
        let px_height = u32::from(inner.height) * dot.1;

        // The fitted side must not exceed one slot's share of the width, or
        // neighboring discs paint over each other.
        let density = self.density.unwrap_or_else(|| {
            let slots = state.displayed_indicator().max(1) as u32;
            let side = px_height.min(px_width / slots);
            Density(side as f32 / DEFAULT_SIDE_DP)
        });
        state.set_density(density);
        state.measure(Measure::Exact(px_width), Measure::Exact(px_height));

        // Center the painted strip when the side is shorter than the area.
        let side = density.dp_to_px(DEFAULT_SIDE_DP);
        let y_offset = ((px_height as f32 - side) / 2.0).max(0.0);

        let state = &*state;
        let marker = self.marker;
        let (cells_x, cells_y) = (inner.width, inner.height);
        let canvas = Canvas::default()
            .marker(marker)
            .x_bounds([0.0, f64::from(px_width.saturating_sub(1))])
            .y_bounds([0.0, f64::from(px_height.saturating_sub(1))])
            .paint(move |ctx| {
                let mut surface =
                    CanvasSurface::new(ctx, cells_x, cells_y, marker).y_offset(y_offset);
                state.render(&mut surface);
            });

        match self.block {
            Some(block) => canvas.block(block).render(area, buf),
            None => canvas.render(inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};
    use ratatui::widgets::Borders;

    fn buffer_content(buf: &Buffer, area: Rect) -> String {
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        content
    }

    fn render_state(state: &mut StepIndicator, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        StepIndicatorView::new().render(area, &mut buf, state);
        buf
    }

    #[test]
    fn numerals_land_on_center_row() {
        // 45 cells, 5 slots. Cells are 18 dots wide, so marker centers sit
        // on dots 9, 27, 45, 63, 81 and labels on columns 4, 13, 22, 31, 40.
        let mut state = StepIndicator::default();
        let buf = render_state(&mut state, 45, 11);

        for (col, numeral) in [(4, "1"), (13, "2"), (22, "3"), (31, "4"), (40, "5")] {
            assert_eq!(buf.cell((col, 5)).unwrap().symbol(), numeral);
        }
    }

    #[test]
    fn numerals_are_bold() {
        let mut state = StepIndicator::default();
        let buf = render_state(&mut state, 45, 11);
        assert!(buf.cell((4, 5)).unwrap().modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn numeral_ink_splits_at_active_step() {
        let mut state = StepIndicator::default();
        state.set_current_indicator(2);
        let buf = render_state(&mut state, 45, 11);

        // Material ink: white on reached discs, black on upcoming ones.
        for col in [4, 13, 22] {
            assert_eq!(buf.cell((col, 5)).unwrap().fg, Color::Rgb(255, 255, 255));
        }
        for col in [31, 40] {
            assert_eq!(buf.cell((col, 5)).unwrap().fg, Color::Rgb(0, 0, 0));
        }
    }

    #[test]
    fn discs_paint_the_row_behind_numerals() {
        let mut state = StepIndicator::default();
        let buf = render_state(&mut state, 45, 11);

        // Row above the numerals: braille dots from the first disc, in the
        // reached-disc purple.
        let cell = buf.cell((4, 4)).unwrap();
        assert_ne!(cell.symbol(), " ");
        assert_eq!(cell.fg, Color::Rgb(98, 0, 238));

        // Same row under the last (upcoming) disc: filled white.
        let cell = buf.cell((40, 4)).unwrap();
        assert_ne!(cell.symbol(), " ");
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn reached_disc_keeps_its_columns() {
        // Fitted discs tile the row at the slot pitch (18 dots at 45x11),
        // so the first disc's purple columns survive the white neighbors
        // drawn after it.
        let mut state = StepIndicator::default();
        let buf = render_state(&mut state, 45, 11);

        let purple: Vec<u16> = (0..45)
            .filter(|&x| buf.cell((x, 4)).unwrap().fg == Color::Rgb(98, 0, 238))
            .collect();
        assert_eq!(purple, (0..=8).collect::<Vec<u16>>());
    }

    #[test]
    fn window_slides_with_the_state() {
        let mut state = StepIndicator::default();
        state.set_current_indicator(5);
        let buf = render_state(&mut state, 45, 11);

        for (col, numeral) in [(4, "2"), (13, "3"), (22, "4"), (31, "5"), (40, "6")] {
            assert_eq!(buf.cell((col, 5)).unwrap().symbol(), numeral);
        }
        let content = buffer_content(&buf, buf.area);
        assert!(!content.contains('1'));
    }

    #[test]
    fn rejected_update_renders_identically() {
        let mut state = StepIndicator::default();
        state.set_current_indicator(5);
        let before = render_state(&mut state, 45, 11);

        // Step 0 fell out of the window; the update must not change a cell.
        assert!(!state.set_current_indicator(0));
        let after = render_state(&mut state, 45, 11);
        assert_eq!(before, after);
    }

    #[test]
    fn renders_inside_a_block() {
        let mut state = StepIndicator::default();
        let area = Rect::new(0, 0, 47, 13);
        let mut buf = Buffer::empty(area);
        StepIndicatorView::new()
            .block(Block::default().borders(Borders::ALL))
            .render(area, &mut buf, &mut state);

        // Border plus the usual layout shifted one cell in.
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "┌");
        assert_eq!(buf.cell((5, 6)).unwrap().symbol(), "1");
        assert_eq!(buf.cell((41, 6)).unwrap().symbol(), "5");
    }

    #[test]
    fn half_block_marker_renders_numerals() {
        let mut state = StepIndicator::default();
        let area = Rect::new(0, 0, 45, 22);
        let mut buf = Buffer::empty(area);
        StepIndicatorView::new()
            .marker(Marker::HalfBlock)
            .render(area, &mut buf, &mut state);

        // 9-dot cells, marker centers on dots 4, 13, 22, 31, 40.
        for (col, numeral) in [(4, "1"), (13, "2"), (22, "3"), (31, "4"), (40, "5")] {
            assert_eq!(buf.cell((col, 11)).unwrap().symbol(), numeral);
        }
    }

    #[test]
    fn pinned_density_keeps_markers_small() {
        let mut state = StepIndicator::default();
        let area = Rect::new(0, 0, 45, 11);
        let mut buf = Buffer::empty(area);
        StepIndicatorView::new()
            .density(Density(0.2))
            .render(area, &mut buf, &mut state);

        // The 9 dot strip centers in the 44 dot area, so the top and bottom
        // cell rows stay untouched.
        for row in [0u16, 9] {
            let content: String = (0..45)
                .map(|x| buf.cell((x, row)).unwrap().symbol().to_string())
                .collect();
            assert_eq!(content.trim(), "");
        }
    }

    #[test]
    fn zero_area_renders_nothing() {
        let mut state = StepIndicator::default();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StepIndicatorView::new().render(area, &mut buf, &mut state);
    }

    #[test]
    fn block_too_small_for_content_still_frames() {
        let mut state = StepIndicator::default();
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        StepIndicatorView::new()
            .block(Block::default().borders(Borders::ALL))
            .render(area, &mut buf, &mut state);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "┌");
    }
}
