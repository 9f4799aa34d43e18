//! Notepad content.
//!
//! A plain multi-line text buffer. Its text lives only as long as the content
//! instance, so a window that unmounts its body on minimize discards it.

use std::any::Any;

use horizon_startpage_core::Size;
use horizon_startpage_core::logging::targets;

use crate::widget::content::WindowContent;
use crate::widget::events::{Key, KeyPressEvent, WidgetEvent};

/// Default placeholder shown while the notepad is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Notizen hier eingeben...";

/// A free-form text area.
#[derive(Debug, Clone, PartialEq)]
pub struct Notepad {
    text: String,
    placeholder: String,
    size: Size,
}

impl Notepad {
    /// Default notepad area (256 x 128 pixels).
    pub const DEFAULT_SIZE: Size = Size::new(256.0, 128.0);

    /// Create an empty notepad with the default placeholder.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the text area size using builder pattern.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the current text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append text at the end of the buffer.
    pub fn insert_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The text to draw: the buffer, or the placeholder while empty.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        match event.key {
            Key::Backspace => {
                self.text.pop();
                true
            }
            Key::Enter => {
                self.text.push('\n');
                true
            }
            _ if !event.text.is_empty() && !event.modifiers.is_command() => {
                self.text.push_str(&event.text);
                true
            }
            _ => false,
        }
    }
}

impl Default for Notepad {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowContent for Notepad {
    fn size_hint(&self) -> Size {
        self.size
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            _ => false,
        }
    }

    fn on_unmount(&mut self) {
        if !self.text.is_empty() {
            tracing::debug!(target: targets::CONTENT, chars = self.text.chars().count(), "notepad unmounted with unsaved text");
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// Ensure Notepad is Send + Sync
static_assertions::assert_impl_all!(Notepad: Send, Sync);
