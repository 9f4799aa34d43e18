//! Quick-link bar and window launchers.

use horizon_startpage_core::Signal;
use horizon_startpage_core::logging::targets;
use url::Url;

use crate::host::WidgetId;

/// An external link shown in the quick-link bar.
///
/// Links always open in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    /// Button label.
    pub label: String,
    /// Link target.
    pub url: Url,
}

impl QuickLink {
    /// Create a new quick link.
    pub fn new(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            url,
        }
    }
}

/// The ordered quick-link bar.
///
/// # Signals
///
/// - `activated(Url)`: Emitted when a link is clicked
pub struct QuickLinks {
    links: Vec<QuickLink>,

    /// Signal emitted with the target of a clicked link.
    pub activated: Signal<Url>,
}

impl QuickLinks {
    /// Create a bar from links in display order.
    pub fn new(links: Vec<QuickLink>) -> Self {
        Self {
            links,
            activated: Signal::new(),
        }
    }

    /// Get all links in display order.
    pub fn links(&self) -> &[QuickLink] {
        &self.links
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if the bar is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Find a link by its label.
    pub fn find(&self, label: &str) -> Option<&QuickLink> {
        self.links.iter().find(|link| link.label == label)
    }

    /// Click the link at `index`.
    ///
    /// Returns the opened URL, or `None` if there is no such link.
    pub fn activate(&self, index: usize) -> Option<&Url> {
        let link = self.links.get(index)?;
        tracing::debug!(target: targets::SHELL, label = %link.label, url = %link.url, "quick link opened");
        self.activated.emit(link.url.clone());
        Some(&link.url)
    }
}

impl std::fmt::Debug for QuickLinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickLinks")
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}

/// A button that shows a hosted widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    /// Button label.
    pub label: String,
    /// Widget shown when the button is clicked.
    pub target: WidgetId,
}

impl Launcher {
    /// Create a launcher for `target`.
    pub fn new(label: impl Into<String>, target: WidgetId) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}
