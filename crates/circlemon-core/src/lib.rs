pub mod action;
pub mod canvas;
pub mod color;
pub mod config;
pub mod gauge;
pub mod log;
pub mod opacity;
pub mod rect;
pub mod sampler;
pub mod shell;
pub mod usage;

pub use action::MenuAction;
pub use canvas::RenderStyle;
pub use color::Color;
pub use gauge::{ArcSegment, GaugeGeometry, GaugeVisual, Palette, Presentation, UsageLevel};
pub use opacity::Opacity;
pub use rect::Rect;
pub use sampler::{Sampler, UsageSource};
pub use shell::{ShellEffect, ShellState};
pub use usage::UsageSample;

/// A boxed error type for platform operations (counter reads, window
/// creation, tray registration).
pub type WidgetResult<T> = Result<T, Box<dyn std::error::Error>>;
