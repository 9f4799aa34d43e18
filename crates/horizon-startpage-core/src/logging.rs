//! Logging facilities for Horizon Startpage.
//!
//! Horizon Startpage uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_startpage=debug")
//!     .init();
//! ```
//!
//! Event volume by level:
//!
//! - `trace`: signal emission, pointer drag moves
//! - `debug`: window state toggles, content mount/unmount
//! - `info`: host show/hide of widgets, configuration loading

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_startpage_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_startpage_core::signal";
    /// Floating window widget target.
    pub const WINDOW: &str = "horizon_startpage::window";
    /// Window content (mount/unmount) target.
    pub const CONTENT: &str = "horizon_startpage::content";
    /// Presence animation target.
    pub const ANIMATION: &str = "horizon_startpage::animation";
    /// Widget host target.
    pub const HOST: &str = "horizon_startpage::host";
    /// Page shell (clock, search, links) target.
    pub const SHELL: &str = "horizon_startpage::shell";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_startpage::config";
}
