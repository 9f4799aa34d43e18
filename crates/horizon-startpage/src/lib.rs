//! Horizon Startpage - a browser start page with floating windows.
//!
//! The page shows a clock, a search box and a quick-link bar, and hosts
//! draggable windows such as a notepad or an embedded login frame. Each
//! window can be dragged by its title bar, minimized, toggled fullscreen,
//! and closed; closing is only a request that the page answers.
//!
//! # Example
//!
//! ```
//! use horizon_startpage::StartPage;
//! use horizon_startpage::widget::MouseButton;
//! use horizon_startpage_core::{Point, Size};
//!
//! let mut page = StartPage::with_defaults(Size::new(1280.0, 800.0)).unwrap();
//!
//! // Drag the notepad by its title bar
//! page.mouse_press(MouseButton::Left, Point::new(30.0, 30.0));
//! page.mouse_move(Point::new(100.0, 50.0), MouseButton::Left.mask());
//! page.mouse_release(MouseButton::Left, Point::new(100.0, 50.0));
//!
//! let view = page.render();
//! assert_eq!(view.windows[0].1.frame.origin, Point::new(100.0, 50.0));
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod page;
pub mod shell;
pub mod widget;

pub use config::StartPageConfig;
pub use error::{Error, Result};
pub use host::{DispatchResult, HostOptions, InitialPosition, WidgetId, WidgetSpec, WindowHost};
pub use page::{PageView, StartPage};
pub use widget::widgets::{FloatingWindow, WindowProps};

pub use horizon_startpage_core::{Point, Rect, Signal, Size};
