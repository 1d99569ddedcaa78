//! Color bridging between core style tokens and ratatui.

use ratatui::style::{Color, Modifier, Style};
use stepline_core::{Paint, Rgb};

/// Converts a core RGB token to a terminal color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Terminal style for a text paint. Numerals carry the widget's single bold
/// text style; the paint's size is meaningless on a character grid.
pub fn text_style(paint: &Paint) -> Style {
    Style::default()
        .fg(to_color(paint.color))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rgb_tokens() {
        assert_eq!(to_color(Rgb(98, 0, 238)), Color::Rgb(98, 0, 238));
        assert_eq!(to_color(Rgb::WHITE), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn text_style_is_bold_ink() {
        let style = text_style(&Paint::text(Rgb::BLACK, 16.0));
        assert_eq!(style.fg, Some(Color::Rgb(0, 0, 0)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
