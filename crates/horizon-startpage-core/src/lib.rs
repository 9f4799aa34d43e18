//! Core systems for Horizon Startpage.
//!
//! This crate provides the foundational pieces shared by the widget layer:
//!
//! - **Signal/Slot System**: Type-safe notification from widgets to their host
//! - **Geometry**: Points, sizes and rectangles in viewport pixels
//! - **Logging**: `tracing` target names for filtering by subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_startpage_core::Signal;
//!
//! // Create a signal that notifies when a window is closed
//! let close_requested = Signal::<()>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = close_requested.connect(|_| {
//!     println!("close requested");
//! });
//!
//! // Emit the signal
//! close_requested.emit(());
//!
//! // Disconnect when done
//! close_requested.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod logging;
pub mod signal;

pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionId, Signal};
