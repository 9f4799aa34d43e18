//! The start page.
//!
//! [`StartPage`] puts the page shell (clock, search box, quick links, launcher
//! buttons) around a [`WindowHost`]. Keyboard input goes to the focused
//! window if there is one, and to the search box otherwise.

use std::time::Instant;

use chrono::Timelike;
use horizon_startpage_core::logging::targets;
use horizon_startpage_core::{Point, Size};

use crate::config::StartPageConfig;
use crate::error::Result;
use crate::host::{DispatchResult, HostOptions, WidgetId, WidgetSpec, WindowHost};
use crate::shell::{Clock, Launcher, QuickLink, QuickLinks, SearchBox};
use crate::widget::widgets::WindowView;
use crate::widget::{KeyPressEvent, MouseButton};

/// Everything needed to draw the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Clock label.
    pub clock: String,
    /// Search text.
    pub search_text: String,
    /// Search placeholder.
    pub search_placeholder: String,
    /// Whether the search box has keyboard focus.
    pub search_focused: bool,
    /// Quick links in display order.
    pub links: Vec<QuickLink>,
    /// Launcher button labels in display order.
    pub launchers: Vec<String>,
    /// Mounted windows in paint order.
    pub windows: Vec<(WidgetId, WindowView)>,
}

/// A start page: shell plus hosted windows.
pub struct StartPage {
    host: WindowHost,
    clock: Clock,
    search: SearchBox,
    links: QuickLinks,
    launchers: Vec<Launcher>,
}

impl StartPage {
    /// Create a page with no windows, showing the current local time.
    ///
    /// The search box is focused, as on page load.
    pub fn new(viewport: Size, options: HostOptions, links: Vec<QuickLink>) -> Self {
        let mut search = SearchBox::new();
        search.set_focus(true);

        Self {
            host: WindowHost::with_options(viewport, options),
            clock: Clock::now(),
            search,
            links: QuickLinks::new(links),
            launchers: Vec::new(),
        }
    }

    /// Build a page from configuration.
    pub fn from_config(config: &StartPageConfig, viewport: Size) -> Result<Self> {
        config.validate()?;

        let links = config
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| link.to_quick_link(index))
            .collect::<Result<Vec<_>>>()?;

        let mut page = Self::new(viewport, config.host_options(), links);
        for (index, window) in config.windows.iter().enumerate() {
            let spec = window.to_widget_spec(index)?;
            page.add_window(spec, window.launcher.clone());
        }

        tracing::info!(target: targets::SHELL, windows = page.host.len(), launchers = page.launchers.len(), "start page built");
        Ok(page)
    }

    /// The stock page.
    pub fn with_defaults(viewport: Size) -> Result<Self> {
        Self::from_config(&StartPageConfig::default(), viewport)
    }

    /// Register a window, optionally with a launcher button.
    pub fn add_window(&mut self, spec: WidgetSpec, launcher: Option<String>) -> WidgetId {
        let id = self.host.register(spec);
        if let Some(label) = launcher {
            self.launchers.push(Launcher::new(label, id));
        }
        id
    }

    // =========================================================================
    // Parts
    // =========================================================================

    /// Get the window host.
    pub fn host(&self) -> &WindowHost {
        &self.host
    }

    /// Get the window host mutably.
    pub fn host_mut(&mut self) -> &mut WindowHost {
        &mut self.host
    }

    /// Get the clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Get the search box.
    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    /// Get the search box mutably.
    pub fn search_mut(&mut self) -> &mut SearchBox {
        &mut self.search
    }

    /// Get the quick-link bar.
    pub fn links(&self) -> &QuickLinks {
        &self.links
    }

    /// Get the launcher buttons.
    pub fn launchers(&self) -> &[Launcher] {
        &self.launchers
    }

    /// Find the widget a launcher label shows.
    pub fn launcher_target(&self, label: &str) -> Option<WidgetId> {
        self.launchers
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.target)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Click the launcher with the given label.
    ///
    /// Returns `true` if a hidden window was shown.
    pub fn launch(&mut self, label: &str) -> bool {
        let Some(target) = self.launcher_target(label) else {
            tracing::debug!(target: targets::SHELL, label, "no such launcher");
            return false;
        };
        self.host.show(target)
    }

    /// Give keyboard focus to the search box.
    pub fn focus_search(&mut self) {
        self.host.clear_focus();
        self.search.set_focus(true);
    }

    /// Update the clock to `time`. Returns `true` if the label changed.
    pub fn tick_clock<T: Timelike>(&mut self, time: &T) -> bool {
        self.clock.tick(time)
    }

    /// Advance window animations to `now`. Returns the number of windows
    /// unmounted.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.host.tick(now)
    }

    /// Resize the page.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.host.set_viewport(viewport);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route a pointer press. A press on a window takes focus from the search box.
    pub fn mouse_press(&mut self, button: MouseButton, pos: Point) -> DispatchResult {
        let result = self.host.mouse_press(button, pos);
        if self.host.focused().is_some() {
            self.search.set_focus(false);
        }
        result
    }

    /// Route a pointer move.
    pub fn mouse_move(&mut self, pos: Point, buttons: u8) -> DispatchResult {
        self.host.mouse_move(pos, buttons)
    }

    /// Route a pointer release.
    pub fn mouse_release(&mut self, button: MouseButton, pos: Point) -> DispatchResult {
        self.host.mouse_release(button, pos)
    }

    /// Route a key press to the focused window, or to the search box.
    pub fn key_press(&mut self, event: KeyPressEvent) -> bool {
        if self.host.focused().is_some() {
            return self.host.key_press(event).was_handled();
        }
        self.search.key_press(&event)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the page as of now.
    pub fn render(&self) -> PageView {
        self.render_at(Instant::now())
    }

    /// Render the page, sampling window animations at `now`.
    pub fn render_at(&self, now: Instant) -> PageView {
        PageView {
            clock: self.clock.label().to_string(),
            search_text: self.search.text().to_string(),
            search_placeholder: self.search.placeholder().to_string(),
            search_focused: self.search.has_focus(),
            links: self.links.links().to_vec(),
            launchers: self.launchers.iter().map(|l| l.label.clone()).collect(),
            windows: self.host.render_at(now),
        }
    }
}

impl std::fmt::Debug for StartPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartPage")
            .field("host", &self.host)
            .field("clock", &self.clock)
            .field("search", &self.search)
            .field("launchers", &self.launchers)
            .finish_non_exhaustive()
    }
}
