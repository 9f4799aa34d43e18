//! Widget system for Horizon Startpage.
//!
//! This module provides:
//!
//! - [`FloatingWindow`](widgets::FloatingWindow) and the contents it hosts
//! - [`WindowContent`] trait and [`ContentFactory`] for mounting content
//! - Pointer and keyboard events
//! - Presence (fade/scale) animation
//!
//! # Coordinate Systems
//!
//! - **Local coordinates**: Origin at the window frame's top-left corner
//! - **Global coordinates**: Viewport coordinates
//!
//! Windows render their views in global coordinates; events routed to a
//! window carry both.

pub mod animation;
mod content;
mod events;
pub mod widgets;

pub use content::{ContentFactory, EmptyContent, WindowContent};
pub use events::{
    EventBase, Key, KeyPressEvent, KeyboardModifiers, MouseButton, MouseMoveEvent,
    MousePressEvent, MouseReleaseEvent, WidgetEvent,
};
