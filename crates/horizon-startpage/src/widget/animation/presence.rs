//! Entry and exit animation for widgets appearing on the page.
//!
//! A widget fades and scales in when it is mounted (opacity 0 → 1, scale
//! 0.9 → 1) and does the reverse when its host starts an exit. Progress is
//! always sampled against an instant supplied by the caller, so the animation
//! owns no timer.

use std::time::{Duration, Instant};

use horizon_startpage_core::logging::targets;

use super::easing::{Easing, lerp_eased};

/// Opacity of a widget before its entry animation starts.
pub const HIDDEN_OPACITY: f32 = 0.0;

/// Scale of a widget before its entry animation starts.
pub const HIDDEN_SCALE: f32 = 0.9;

/// Direction of a presence animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresencePhase {
    /// Appearing after mount.
    #[default]
    Entering,
    /// Disappearing before unmount.
    Exiting,
}

/// A sampled frame of a presence animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceSample {
    /// Opacity from 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f32,
    /// Uniform scale around the widget's center.
    pub scale: f32,
}

impl PresenceSample {
    /// Fully shown.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Fully hidden.
    pub const HIDDEN: Self = Self {
        opacity: HIDDEN_OPACITY,
        scale: HIDDEN_SCALE,
    };
}

/// Fade/scale animation controller for mount and unmount.
#[derive(Debug, Clone)]
pub struct PresenceAnimation {
    /// Easing function for the animation.
    easing: Easing,
    /// Duration of one direction of the animation.
    duration: Duration,
    /// Which direction is playing.
    phase: PresencePhase,
    /// When the current phase started.
    started_at: Option<Instant>,
}

impl PresenceAnimation {
    /// Default duration of the fade/scale.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

    /// Create an animation with the given easing and duration.
    pub fn new(easing: Easing, duration: Duration) -> Self {
        Self {
            easing,
            duration,
            phase: PresencePhase::Entering,
            started_at: None,
        }
    }

    /// An animation that completes immediately in both directions.
    pub fn instant() -> Self {
        Self::new(Easing::Linear, Duration::ZERO)
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Get the animation duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Get the current phase.
    #[inline]
    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    /// Start the entry animation at `now`.
    pub fn enter(&mut self, now: Instant) {
        self.phase = PresencePhase::Entering;
        self.started_at = Some(now);
    }

    /// Start the exit animation at `now`.
    pub fn exit(&mut self, now: Instant) {
        tracing::trace!(target: targets::ANIMATION, duration_ms = self.duration.as_millis() as u64, "exit animation started");
        self.phase = PresencePhase::Exiting;
        self.started_at = Some(now);
    }

    /// Linear progress of the current phase, from 0.0 to 1.0.
    ///
    /// An animation that was never started counts as complete.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Check if the current phase is still playing at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.started_at.is_some() && self.progress(now) < 1.0
    }

    /// Check if an exit has been started.
    pub fn is_exiting(&self) -> bool {
        self.phase == PresencePhase::Exiting
    }

    /// Check if an exit animation has finished at `now`.
    pub fn is_exit_complete(&self, now: Instant) -> bool {
        self.is_exiting() && self.progress(now) >= 1.0
    }

    /// Sample opacity and scale at `now`.
    pub fn sample(&self, now: Instant) -> PresenceSample {
        let t = self.progress(now);
        let (from, to) = match self.phase {
            PresencePhase::Entering => (PresenceSample::HIDDEN, PresenceSample::SHOWN),
            PresencePhase::Exiting => (PresenceSample::SHOWN, PresenceSample::HIDDEN),
        };
        PresenceSample {
            opacity: lerp_eased(self.easing, from.opacity, to.opacity, t),
            scale: lerp_eased(self.easing, from.scale, to.scale, t),
        }
    }
}

impl Default for PresenceAnimation {
    fn default() -> Self {
        Self::new(Easing::default(), Self::DEFAULT_DURATION)
    }
}
