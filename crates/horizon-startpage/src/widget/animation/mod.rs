//! Animation support for Horizon Startpage.
//!
//! This module provides easing functions and the presence (mount/unmount)
//! animation used by floating windows.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use horizon_startpage::widget::animation::{Easing, PresenceAnimation};
//!
//! let mut presence = PresenceAnimation::new(Easing::Linear, Duration::from_millis(200));
//! let start = Instant::now();
//! presence.enter(start);
//! let frame = presence.sample(start + Duration::from_millis(100));
//! assert!(frame.opacity > 0.0 && frame.opacity < 1.0);
//! ```

mod easing;
mod presence;

pub use easing::{Easing, ease, lerp_eased};
pub use presence::{
    HIDDEN_OPACITY, HIDDEN_SCALE, PresenceAnimation, PresencePhase, PresenceSample,
};
