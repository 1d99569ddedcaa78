//! Stepline TUI: ratatui rendering for the windowed step indicator.
//!
//! Provides:
//! - [`StepIndicatorView`]: a `StatefulWidget` over a
//!   [`StepIndicator`](stepline_core::StepIndicator), Scrollbar-style
//! - [`CanvasSurface`]: the canvas-backed drawing surface, reusable by hosts
//!   that compose their own canvases
//! - Color bridging from core style tokens to terminal colors
//!
//! The default material palette assumes light ink on dark discs; on dark
//! terminals `StepStyle::terminal_dark` reads better.

pub mod canvas;
pub mod palette;
pub mod widget;

pub use canvas::CanvasSurface;
pub use palette::to_color;
pub use widget::StepIndicatorView;
