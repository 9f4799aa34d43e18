//! Start page configuration.
//!
//! The page is described by a TOML document. Every field has a default, so an
//! empty document yields the stock page: a notepad open in the top-left
//! corner and a Discord login frame behind a launcher button.
//!
//! # Example
//!
//! ```
//! use horizon_startpage::config::StartPageConfig;
//!
//! let config = StartPageConfig::from_toml_str(r#"
//!     title_bar_height = 32.0
//!
//!     [[links]]
//!     label = "Docs"
//!     url = "https://docs.rs/"
//!
//!     [[windows]]
//!     title = "Scratch"
//!     open_at_start = true
//!     position = { x = 40.0, y = 40.0 }
//!     content = { kind = "notepad" }
//! "#).unwrap();
//!
//! assert_eq!(config.links.len(), 1);
//! assert_eq!(config.windows[0].title, "Scratch");
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_startpage_core::Point;
use horizon_startpage_core::logging::targets;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::host::{HostOptions, InitialPosition, WidgetSpec};
use crate::shell::QuickLink;
use crate::widget::ContentFactory;
use crate::widget::animation::{Easing, PresenceAnimation};
use crate::widget::widgets::{EmbeddedFrame, FloatingWindow, MinimizeBehavior, Notepad};

/// Top-level start page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartPageConfig {
    /// Title bar height of every window.
    pub title_bar_height: f32,
    /// What minimizing does to window content.
    pub minimize_behavior: MinimizeBehavior,
    /// Keep closed windows on screen until their exit animation finishes.
    pub defer_unmount: bool,
    /// Window entry/exit animation.
    pub animation: AnimationConfig,
    /// Quick-link bar, in display order.
    pub links: Vec<LinkConfig>,
    /// Hosted windows, in registration order.
    pub windows: Vec<WindowConfig>,
}

/// Window entry/exit animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of one direction, in milliseconds.
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
}

/// An entry in the quick-link bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Button label.
    pub label: String,
    /// Link target.
    pub url: String,
}

/// A hosted window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Title bar text; may be empty.
    #[serde(default)]
    pub title: String,
    /// Show the window when the page loads.
    #[serde(default)]
    pub open_at_start: bool,
    /// Label of a launcher button that shows the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher: Option<String>,
    /// Where the window appears when shown.
    pub position: PositionConfig,
    /// What the window shows.
    pub content: ContentConfig,
}

/// Window content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentConfig {
    /// A notepad.
    Notepad {
        /// Placeholder shown while empty.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// An embedded third-party page.
    Frame {
        /// Page URL.
        src: String,
        /// Descriptive title of the frame.
        title: String,
        /// Frame height in pixels.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
    },
}

/// Window position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionConfig {
    /// Fixed viewport pixels.
    Fixed { x: f32, y: f32 },
    /// Fraction of the viewport size.
    ViewportFraction { viewport_fraction: f32 },
}

// ============================================================================
// Defaults
// ============================================================================

impl Default for StartPageConfig {
    fn default() -> Self {
        Self {
            title_bar_height: FloatingWindow::DEFAULT_TITLE_BAR_HEIGHT,
            minimize_behavior: MinimizeBehavior::default(),
            defer_unmount: false,
            animation: AnimationConfig::default(),
            links: vec![
                LinkConfig::new("AI", "https://chat.openai.com/"),
                LinkConfig::new("YT", "https://www.youtube.com/"),
            ],
            windows: vec![
                WindowConfig {
                    title: String::new(),
                    open_at_start: true,
                    launcher: None,
                    position: PositionConfig::Fixed { x: 20.0, y: 20.0 },
                    content: ContentConfig::Notepad { placeholder: None },
                },
                WindowConfig {
                    title: "Discord".to_string(),
                    open_at_start: false,
                    launcher: Some("Discord".to_string()),
                    position: PositionConfig::ViewportFraction {
                        viewport_fraction: 0.25,
                    },
                    content: ContentConfig::Frame {
                        src: "https://discord.com/login".to_string(),
                        title: "Discord Login".to_string(),
                        height: Some(EmbeddedFrame::DEFAULT_HEIGHT),
                    },
                },
            ],
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: PresenceAnimation::DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::default(),
        }
    }
}

// ============================================================================
// Loading and Validation
// ============================================================================

impl StartPageConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(target: targets::CONFIG, path = %path.display(), windows = config.windows.len(), "configuration loaded");
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value the page would reject.
    pub fn validate(&self) -> Result<()> {
        if !self.title_bar_height.is_finite() || self.title_bar_height <= 0.0 {
            return Err(Error::invalid_value(
                "title_bar_height",
                format!("must be a positive number, got {}", self.title_bar_height),
            ));
        }

        for (index, link) in self.links.iter().enumerate() {
            link.to_quick_link(index)?;
        }

        for (index, window) in self.windows.iter().enumerate() {
            window.to_widget_spec(index)?;
            if let Some(label) = &window.launcher {
                if label.trim().is_empty() {
                    return Err(Error::invalid_value(
                        format!("windows[{index}].launcher"),
                        "launcher label must not be empty",
                    ));
                }
            }
        }

        Ok(())
    }

    /// Options for the window host.
    pub fn host_options(&self) -> HostOptions {
        HostOptions {
            title_bar_height: self.title_bar_height,
            minimize_behavior: self.minimize_behavior,
            presence: self.animation.to_presence(),
            defer_unmount: self.defer_unmount,
        }
    }
}

impl AnimationConfig {
    /// Build the presence animation template.
    pub fn to_presence(&self) -> PresenceAnimation {
        PresenceAnimation::new(self.easing, Duration::from_millis(self.duration_ms))
    }
}

impl LinkConfig {
    /// Create a link entry.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Parse into a quick link. `index` is used in error messages.
    pub fn to_quick_link(&self, index: usize) -> Result<QuickLink> {
        let url = Url::parse(&self.url)
            .map_err(|e| Error::invalid_url(format!("links[{index}].url"), &self.url, e))?;
        Ok(QuickLink::new(self.label.clone(), url))
    }
}

impl WindowConfig {
    /// Build the host's widget spec. `index` is used in error messages.
    pub fn to_widget_spec(&self, index: usize) -> Result<WidgetSpec> {
        let content = self.content.to_factory(index)?;
        let position = self.position.to_initial_position(index)?;
        Ok(WidgetSpec::new(self.title.clone(), content, position).with_open_at_start(self.open_at_start))
    }
}

impl ContentConfig {
    /// Build a content factory. `index` is used in error messages.
    pub fn to_factory(&self, index: usize) -> Result<ContentFactory> {
        match self {
            ContentConfig::Notepad { placeholder } => {
                let placeholder = placeholder.clone();
                Ok(ContentFactory::new(move || match &placeholder {
                    Some(text) => Notepad::new().with_placeholder(text.clone()),
                    None => Notepad::new(),
                }))
            }
            ContentConfig::Frame { src, title, height } => {
                let field = format!("windows[{index}].content.src");
                let url = Url::parse(src).map_err(|e| Error::invalid_url(&field, src, e))?;
                if url.cannot_be_a_base() {
                    return Err(Error::invalid_value(field, format!("'{src}' is not a page URL")));
                }

                let height = height.unwrap_or(EmbeddedFrame::DEFAULT_HEIGHT);
                if !height.is_finite() || height <= 0.0 {
                    return Err(Error::invalid_value(
                        format!("windows[{index}].content.height"),
                        format!("must be a positive number, got {height}"),
                    ));
                }

                let title = title.clone();
                Ok(ContentFactory::new(move || {
                    EmbeddedFrame::new(url.clone(), title.clone()).with_height(height)
                }))
            }
        }
    }
}

impl PositionConfig {
    /// Convert to a host position. `index` is used in error messages.
    pub fn to_initial_position(&self, index: usize) -> Result<InitialPosition> {
        match *self {
            PositionConfig::Fixed { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(Error::invalid_value(
                        format!("windows[{index}].position"),
                        "coordinates must be finite",
                    ));
                }
                Ok(InitialPosition::Fixed(Point::new(x, y)))
            }
            PositionConfig::ViewportFraction { viewport_fraction } => {
                if !viewport_fraction.is_finite() {
                    return Err(Error::invalid_value(
                        format!("windows[{index}].position.viewport_fraction"),
                        "must be finite",
                    ));
                }
                Ok(InitialPosition::ViewportFraction(viewport_fraction))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = StartPageConfig::from_toml_str("").unwrap();
        assert_eq!(config, StartPageConfig::default());
    }

    #[test]
    fn test_default_reproduces_stock_page() {
        let config = StartPageConfig::default();
        assert_eq!(config.title_bar_height, 36.0);
        assert_eq!(config.links[0], LinkConfig::new("AI", "https://chat.openai.com/"));
        assert_eq!(config.links[1], LinkConfig::new("YT", "https://www.youtube.com/"));

        let notepad = &config.windows[0];
        assert_eq!(notepad.title, "");
        assert!(notepad.open_at_start);
        assert_eq!(notepad.position, PositionConfig::Fixed { x: 20.0, y: 20.0 });

        let discord = &config.windows[1];
        assert_eq!(discord.title, "Discord");
        assert!(!discord.open_at_start);
        assert_eq!(discord.launcher.as_deref(), Some("Discord"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_windows() {
        let config = StartPageConfig::from_toml_str(
            r#"
            minimize_behavior = "preserve"
            defer_unmount = true

            [animation]
            duration_ms = 150
            easing = "ease-in-out"

            [[windows]]
            title = "Chat"
            launcher = "Chat"
            position = { viewport_fraction = 0.5 }
            content = { kind = "frame", src = "https://example.com/chat", title = "Chat", height = 480.0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.minimize_behavior, MinimizeBehavior::Preserve);
        assert!(config.defer_unmount);
        assert_eq!(config.animation.easing, Easing::EaseInOut);
        assert_eq!(
            config.windows[0].position,
            PositionConfig::ViewportFraction { viewport_fraction: 0.5 }
        );
        assert!(matches!(
            config.windows[0].content,
            ContentConfig::Frame { height: Some(h), .. } if h == 480.0
        ));
        // Tables left out keep their defaults; listed ones replace them
        assert_eq!(config.links.len(), 2);
        assert_eq!(config.windows.len(), 1);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = StartPageConfig::from_toml_str(
            r#"
            [[links]]
            label = "Broken"
            url = "not a url"
            "#,
        );
        assert!(matches!(result, Err(Error::InvalidUrl { ref field, .. }) if field == "links[0].url"));
    }

    #[test]
    fn test_invalid_title_bar_height() {
        let result = StartPageConfig::from_toml_str("title_bar_height = 0.0");
        assert!(matches!(result, Err(Error::InvalidValue { ref field, .. }) if field == "title_bar_height"));
    }

    #[test]
    fn test_parse_error() {
        let result = StartPageConfig::from_toml_str("title_bar_height = ");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = StartPageConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(StartPageConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_frame_factory_builds_frame() {
        let content = ContentConfig::Frame {
            src: "https://discord.com/login".to_string(),
            title: "Discord Login".to_string(),
            height: None,
        };
        let factory = content.to_factory(0).unwrap();
        let frame = factory.create();
        let frame = frame.as_any().downcast_ref::<EmbeddedFrame>().unwrap();
        assert_eq!(frame.src().as_str(), "https://discord.com/login");
        assert_eq!(frame.title(), "Discord Login");
    }
}
