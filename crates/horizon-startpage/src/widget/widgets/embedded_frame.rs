//! Embedded third-party frame content.
//!
//! The frame is a black box: its load and authentication status are never
//! observed. It only remembers where it was pointed and where it has
//! navigated since it was mounted, so a remount starts again from `src`.

use std::any::Any;

use horizon_startpage_core::Size;
use horizon_startpage_core::logging::targets;
use url::Url;

use crate::widget::content::WindowContent;

/// An embedded frame showing a remote page.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedFrame {
    src: Url,
    title: String,
    size: Size,
    history: Vec<Url>,
}

impl EmbeddedFrame {
    /// Default frame width in pixels.
    pub const DEFAULT_WIDTH: f32 = 800.0;

    /// Default frame height in pixels.
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Create a frame pointed at `src`.
    pub fn new(src: Url, title: impl Into<String>) -> Self {
        Self {
            src,
            title: title.into(),
            size: Size::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            history: Vec::new(),
        }
    }

    /// Set the frame height using builder pattern.
    pub fn with_height(mut self, height: f32) -> Self {
        self.size.height = height;
        self
    }

    /// Set the frame width using builder pattern.
    pub fn with_width(mut self, width: f32) -> Self {
        self.size.width = width;
        self
    }

    /// The URL the frame was created with.
    pub fn src(&self) -> &Url {
        &self.src
    }

    /// The frame's descriptive title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The URL currently displayed.
    pub fn current_url(&self) -> &Url {
        self.history.last().unwrap_or(&self.src)
    }

    /// Record a navigation inside the frame.
    pub fn navigate(&mut self, url: Url) {
        tracing::trace!(target: targets::CONTENT, url = %url, "frame navigated");
        self.history.push(url);
    }

    /// Number of navigations since mount.
    pub fn navigation_count(&self) -> usize {
        self.history.len()
    }
}

impl WindowContent for EmbeddedFrame {
    fn size_hint(&self) -> Size {
        self.size
    }

    fn on_mount(&mut self) {
        tracing::debug!(target: targets::CONTENT, src = %self.src, "frame loading");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// Ensure EmbeddedFrame is Send + Sync
static_assertions::assert_impl_all!(EmbeddedFrame: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn discord() -> EmbeddedFrame {
        let src = Url::parse("https://discord.com/login").expect("valid url");
        EmbeddedFrame::new(src, "Discord Login")
    }

    #[test]
    fn test_defaults() {
        let frame = discord();
        assert_eq!(frame.title(), "Discord Login");
        assert_eq!(frame.current_url().as_str(), "https://discord.com/login");
        assert_eq!(frame.size_hint(), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_navigation_history() {
        let mut frame = discord();
        let next = Url::parse("https://discord.com/channels/@me").expect("valid url");
        frame.navigate(next.clone());
        assert_eq!(frame.current_url(), &next);
        assert_eq!(frame.navigation_count(), 1);
        assert_eq!(frame.src().as_str(), "https://discord.com/login");
    }

    #[test]
    fn test_builder_size() {
        let frame = discord().with_width(640.0).with_height(480.0);
        assert_eq!(frame.size_hint(), Size::new(640.0, 480.0));
    }
}
