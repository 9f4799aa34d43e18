//! Search input.

use horizon_startpage_core::Signal;
use horizon_startpage_core::logging::targets;

use crate::widget::{Key, KeyPressEvent};

/// Placeholder shown while the search box is empty.
pub const SEARCH_PLACEHOLDER: &str = "Suche...";

/// A single-line search input.
///
/// The page focuses it on mount; typing goes here whenever no window has
/// keyboard focus.
///
/// # Signals
///
/// - `text_changed(String)`: Emitted when the text changes
/// - `submitted(String)`: Emitted when Enter is pressed
pub struct SearchBox {
    text: String,
    placeholder: String,
    focused: bool,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
    /// Signal emitted when Enter is pressed.
    pub submitted: Signal<String>,
}

impl SearchBox {
    /// Create an empty, unfocused search box.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            focused: false,
            text_changed: Signal::new(),
            submitted: Signal::new(),
        }
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text.clone();
            self.text_changed.emit(new_text);
        }
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check if the search box has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Give or take keyboard focus.
    pub fn set_focus(&mut self, focused: bool) {
        if self.focused != focused {
            tracing::trace!(target: targets::SHELL, focused, "search focus changed");
            self.focused = focused;
        }
    }

    /// Handle a key press. Ignored unless focused.
    ///
    /// Returns `true` if the key was consumed.
    pub fn key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.focused {
            return false;
        }
        match event.key {
            Key::Backspace => {
                let mut text = self.text.clone();
                text.pop();
                self.set_text(text);
                true
            }
            Key::Enter => {
                tracing::debug!(target: targets::SHELL, query = %self.text, "search submitted");
                self.submitted.emit(self.text.clone());
                true
            }
            Key::Escape => {
                self.set_focus(false);
                true
            }
            _ if !event.text.is_empty() && !event.modifiers.is_command() => {
                let text = format!("{}{}", self.text, event.text);
                self.set_text(text);
                true
            }
            _ => false,
        }
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBox")
            .field("text", &self.text)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut search = SearchBox::new();
        assert!(!search.key_press(&KeyPressEvent::typed("a")));
        assert_eq!(search.text(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut search = SearchBox::new();
        search.set_focus(true);
        search.key_press(&KeyPressEvent::typed("r"));
        search.key_press(&KeyPressEvent::typed("s"));
        search.key_press(&KeyPressEvent::key(Key::Backspace));
        assert_eq!(search.text(), "r");
    }

    #[test]
    fn test_submit_emits_query() {
        use std::sync::Arc;
        use parking_lot::Mutex;

        let mut search = SearchBox::new();
        search.set_focus(true);
        search.set_text("rust");

        let queries = Arc::new(Mutex::new(Vec::new()));
        let queries_clone = queries.clone();
        search.submitted.connect(move |q| queries_clone.lock().push(q.clone()));

        assert!(search.key_press(&KeyPressEvent::key(Key::Enter)));
        assert_eq!(*queries.lock(), vec!["rust".to_string()]);
    }

    #[test]
    fn test_escape_drops_focus() {
        let mut search = SearchBox::new();
        search.set_focus(true);
        search.key_press(&KeyPressEvent::key(Key::Escape));
        assert!(!search.has_focus());
    }
}
