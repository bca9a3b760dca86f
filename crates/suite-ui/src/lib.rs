//! Terminal UI components for the suite console.
//!
//! Provides terminal detection, styled text, rounded panels, a console
//! handle over any writer/reader pair, and the [`DisplayManager`] that
//! renders every screen of the application.

pub mod console;
pub mod display;
pub mod panel;
pub mod styles;
pub mod terminal;

pub use console::Console;
pub use display::{DisplayManager, DisplayOptions, MessageKind};
pub use panel::{Align, Panel};
pub use styles::{Line, Span, Tone};
