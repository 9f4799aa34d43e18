//! Digital clock label.
//!
//! The clock owns no timer. The page calls [`Clock::tick`] from whatever
//! drives it (once a second in the browser page) and redraws when the label
//! changes.

use chrono::Timelike;
use horizon_startpage_core::Signal;
use horizon_startpage_core::logging::targets;

/// A clock showing hours and minutes as `"HH MM"`.
pub struct Clock {
    label: String,

    /// Signal emitted when the label text changes.
    pub label_changed: Signal<String>,
}

impl Clock {
    /// Create a clock showing `time`.
    pub fn new<T: Timelike>(time: &T) -> Self {
        Self {
            label: Self::format_label(time),
            label_changed: Signal::new(),
        }
    }

    /// Create a clock showing the local time.
    pub fn now() -> Self {
        Self::new(&chrono::Local::now())
    }

    /// Format `time` as two-digit hours and minutes separated by a space.
    pub fn format_label<T: Timelike>(time: &T) -> String {
        format!("{:02} {:02}", time.hour(), time.minute())
    }

    /// Get the current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Update the label to `time`.
    ///
    /// Returns `true` if the label changed.
    pub fn tick<T: Timelike>(&mut self, time: &T) -> bool {
        let label = Self::format_label(time);
        if label == self.label {
            return false;
        }
        tracing::trace!(target: targets::SHELL, label = %label, "clock ticked");
        self.label = label.clone();
        self.label_changed.emit(label);
        true
    }

    /// Update the label to the local time.
    pub fn tick_now(&mut self) -> bool {
        self.tick(&chrono::Local::now())
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock").field("label", &self.label).finish()
    }
}
