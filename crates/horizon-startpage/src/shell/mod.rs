//! Page shell around the hosted windows.
//!
//! - [`Clock`]: `"HH MM"` label
//! - [`SearchBox`]: Search input, focused on page mount
//! - [`QuickLinks`]: External link bar
//! - [`Launcher`]: Buttons that show hosted windows

mod clock;
mod links;
mod search;

pub use clock::Clock;
pub use links::{Launcher, QuickLink, QuickLinks};
pub use search::{SEARCH_PLACEHOLDER, SearchBox};
