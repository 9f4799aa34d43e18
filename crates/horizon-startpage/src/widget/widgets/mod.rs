//! Standard widgets for Horizon Startpage.
//!
//! This module provides the page's window widget and the content it hosts:
//!
//! - [`FloatingWindow`]: Draggable, minimizable, fullscreen-toggleable window
//! - [`Notepad`]: Free-form text area
//! - [`EmbeddedFrame`]: Opaque third-party page

mod embedded_frame;
mod floating_window;
mod notepad;

pub use embedded_frame::EmbeddedFrame;
pub use floating_window::{
    ButtonView, FloatingWindow, MinimizeBehavior, TitleBarButton, WindowFlags, WindowProps,
    WindowState, WindowView,
};
pub use notepad::{DEFAULT_PLACEHOLDER, Notepad};
