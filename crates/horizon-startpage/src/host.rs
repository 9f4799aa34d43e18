//! Window host.
//!
//! The host owns every floating window on the page and the one piece of state
//! the windows cannot own themselves: whether each of them is shown. Windows
//! only *request* closing; the host answers by flipping the widget's visible
//! flag and dropping the window instance. Showing a widget again always
//! creates a fresh window at its initial position.
//!
//! Pointer and keyboard input enter through the host, which hit-tests the
//! visible windows, translates the pointer into window-local coordinates, and
//! then drains the close requests the dispatch produced.

use std::sync::Arc;
use std::time::Instant;

use horizon_startpage_core::logging::targets;
use horizon_startpage_core::{Point, Signal, Size};
use parking_lot::Mutex;
use slotmap::SlotMap;

use crate::widget::animation::PresenceAnimation;
use crate::widget::widgets::{FloatingWindow, MinimizeBehavior, WindowProps, WindowView};
use crate::widget::{
    ContentFactory, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};

slotmap::new_key_type! {
    /// Identifies a widget registered with a [`WindowHost`].
    pub struct WidgetId;
}

/// Where a window appears when it is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialPosition {
    /// A fixed offset in viewport pixels.
    Fixed(Point),
    /// A fraction of the viewport size on both axes.
    ViewportFraction(f32),
}

impl InitialPosition {
    /// Resolve to a point for the given viewport.
    pub fn resolve(&self, viewport: Size) -> Point {
        match *self {
            InitialPosition::Fixed(point) => point,
            InitialPosition::ViewportFraction(fraction) => {
                Point::new(viewport.width * fraction, viewport.height * fraction)
            }
        }
    }
}

impl From<Point> for InitialPosition {
    fn from(point: Point) -> Self {
        InitialPosition::Fixed(point)
    }
}

/// Definition of a widget the host can show.
#[derive(Debug, Clone)]
pub struct WidgetSpec {
    /// Window title.
    pub title: String,
    /// Creates the window's content.
    pub content: ContentFactory,
    /// Position each new window starts at.
    pub initial_position: InitialPosition,
    /// Whether the widget is shown as soon as it is registered.
    pub open_at_start: bool,
}

impl WidgetSpec {
    /// Create a spec that starts hidden.
    pub fn new(
        title: impl Into<String>,
        content: ContentFactory,
        initial_position: impl Into<InitialPosition>,
    ) -> Self {
        Self {
            title: title.into(),
            content,
            initial_position: initial_position.into(),
            open_at_start: false,
        }
    }

    /// Set whether the widget is shown on registration using builder pattern.
    pub fn with_open_at_start(mut self, open: bool) -> Self {
        self.open_at_start = open;
        self
    }
}

/// Options applied to every window the host creates.
#[derive(Debug, Clone)]
pub struct HostOptions {
    /// Title bar height of each window.
    pub title_bar_height: f32,
    /// What minimizing does to a window's content.
    pub minimize_behavior: MinimizeBehavior,
    /// Entry/exit animation template.
    pub presence: PresenceAnimation,
    /// Keep hidden windows mounted until their exit animation finishes.
    pub defer_unmount: bool,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            title_bar_height: FloatingWindow::DEFAULT_TITLE_BAR_HEIGHT,
            minimize_behavior: MinimizeBehavior::default(),
            presence: PresenceAnimation::default(),
            defer_unmount: false,
        }
    }
}

/// Result of dispatching an input event through the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// A window handled the event.
    Accepted,
    /// No window handled the event.
    Ignored,
}

impl DispatchResult {
    /// Check if the event was handled.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    fn from_handled(handled: bool) -> Self {
        if handled { Self::Accepted } else { Self::Ignored }
    }
}

struct HostedWidget {
    spec: WidgetSpec,
    visible: bool,
    /// Present while visible, and while an exit animation plays after hiding.
    window: Option<FloatingWindow>,
}

/// Owner of the page's floating windows and their visibility.
///
/// # Signals
///
/// - `visibility_changed((WidgetId, bool))`: Emitted when a widget is shown or hidden
pub struct WindowHost {
    widgets: SlotMap<WidgetId, HostedWidget>,
    /// Registration order; also paint order, back to front.
    order: Vec<WidgetId>,
    viewport: Size,
    options: HostOptions,
    /// Filled by the windows' close callbacks, drained after each dispatch.
    close_requests: Arc<Mutex<Vec<WidgetId>>>,
    /// Window receiving pointer events until the button is released.
    pointer_grab: Option<WidgetId>,
    hovered: Option<WidgetId>,
    focused: Option<WidgetId>,

    /// Signal emitted when a widget is shown or hidden.
    pub visibility_changed: Signal<(WidgetId, bool)>,
}

impl WindowHost {
    /// Create an empty host for the given viewport.
    pub fn new(viewport: Size) -> Self {
        Self::with_options(viewport, HostOptions::default())
    }

    /// Create an empty host with explicit window options.
    pub fn with_options(viewport: Size, options: HostOptions) -> Self {
        Self {
            widgets: SlotMap::with_key(),
            order: Vec::new(),
            viewport,
            options,
            close_requests: Arc::new(Mutex::new(Vec::new())),
            pointer_grab: None,
            hovered: None,
            focused: None,
            visibility_changed: Signal::new(),
        }
    }

    /// Get the window options.
    pub fn options(&self) -> &HostOptions {
        &self.options
    }

    // =========================================================================
    // Registration and Visibility
    // =========================================================================

    /// Register a widget, showing it right away if `open_at_start` is set.
    pub fn register(&mut self, spec: WidgetSpec) -> WidgetId {
        let open = spec.open_at_start;
        let title = spec.title.clone();
        let id = self.widgets.insert(HostedWidget {
            spec,
            visible: false,
            window: None,
        });
        self.order.push(id);
        tracing::debug!(target: targets::HOST, ?id, title = %title, "widget registered");

        if open {
            self.show(id);
        }
        id
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if no widgets are registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Registered widget ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.order.iter().copied()
    }

    /// Ids of visible widgets in registration order.
    pub fn visible_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.ids().filter(move |&id| self.is_visible(id))
    }

    /// Get the spec a widget was registered with.
    pub fn spec(&self, id: WidgetId) -> Option<&WidgetSpec> {
        self.widgets.get(id).map(|w| &w.spec)
    }

    /// Check if a widget is shown. Unknown ids are never visible.
    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|w| w.visible)
    }

    /// Check if a widget has a live window, including one that is animating out.
    pub fn is_mounted(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|w| w.window.is_some())
    }

    /// Show a widget with a fresh window.
    ///
    /// Returns `false` if the widget is unknown or already visible.
    pub fn show(&mut self, id: WidgetId) -> bool {
        let viewport = self.viewport;
        let options = &self.options;
        let Some(hosted) = self.widgets.get_mut(id) else {
            return false;
        };
        if hosted.visible {
            return false;
        }

        let position = hosted.spec.initial_position.resolve(viewport);
        let requests = self.close_requests.clone();
        let props = WindowProps::new(hosted.spec.title.clone(), hosted.spec.content.clone(), position)
            .with_on_close(move || requests.lock().push(id));

        let window = FloatingWindow::new(props)
            .with_viewport(viewport)
            .with_title_bar_height(options.title_bar_height)
            .with_minimize_behavior(options.minimize_behavior)
            .with_presence(options.presence.clone());

        // Replaces any window still animating out
        hosted.window = Some(window);
        hosted.visible = true;

        tracing::info!(target: targets::HOST, ?id, title = %hosted.spec.title, x = position.x, y = position.y, "widget shown");
        self.visibility_changed.emit((id, true));
        true
    }

    /// Hide a widget as of now.
    pub fn hide(&mut self, id: WidgetId) -> bool {
        self.hide_at(id, Instant::now())
    }

    /// Hide a widget, starting its exit animation at `now` when unmounting is
    /// deferred.
    ///
    /// Returns `false` if the widget is unknown or already hidden.
    pub fn hide_at(&mut self, id: WidgetId, now: Instant) -> bool {
        let defer = self.options.defer_unmount;
        let Some(hosted) = self.widgets.get_mut(id) else {
            return false;
        };
        if !hosted.visible {
            return false;
        }
        hosted.visible = false;

        if defer {
            if let Some(window) = hosted.window.as_mut() {
                window.begin_exit_at(now);
            }
        } else {
            hosted.window = None;
        }

        for slot in [&mut self.pointer_grab, &mut self.hovered, &mut self.focused] {
            if *slot == Some(id) {
                *slot = None;
            }
        }

        tracing::info!(target: targets::HOST, ?id, title = %hosted.spec.title, deferred = defer, "widget hidden");
        self.visibility_changed.emit((id, false));
        true
    }

    /// Hide every widget whose window asked to close since the last call.
    ///
    /// Returns the ids that were hidden.
    pub fn process_close_requests(&mut self) -> Vec<WidgetId> {
        let requests = std::mem::take(&mut *self.close_requests.lock());
        requests.into_iter().filter(|&id| self.hide(id)).collect()
    }

    /// Drop windows whose exit animation has finished at `now`.
    ///
    /// Returns the number of windows dropped.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut dropped = 0;
        for (id, hosted) in self.widgets.iter_mut() {
            let finished = !hosted.visible
                && hosted.window.as_ref().is_some_and(|w| w.is_exit_complete(now));
            if finished {
                hosted.window = None;
                dropped += 1;
                tracing::debug!(target: targets::HOST, ?id, "window unmounted after exit");
            }
        }
        dropped
    }

    // =========================================================================
    // Window Access
    // =========================================================================

    /// Get a widget's window, if it has one.
    pub fn window(&self, id: WidgetId) -> Option<&FloatingWindow> {
        self.widgets.get(id)?.window.as_ref()
    }

    /// Get a widget's window mutably, if it has one.
    pub fn window_mut(&mut self, id: WidgetId) -> Option<&mut FloatingWindow> {
        self.widgets.get_mut(id)?.window.as_mut()
    }

    /// Get the viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport for all windows.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        for hosted in self.widgets.values_mut() {
            if let Some(window) = hosted.window.as_mut() {
                window.set_viewport(viewport);
            }
        }
    }

    /// The window holding keyboard focus.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Drop keyboard focus from any window.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Topmost visible window whose frame contains `pos`.
    pub fn window_at(&self, pos: Point) -> Option<WidgetId> {
        self.order.iter().rev().copied().find(|&id| {
            self.widgets.get(id).is_some_and(|hosted| {
                hosted.visible
                    && hosted
                        .window
                        .as_ref()
                        .is_some_and(|w| w.frame_rect().contains(pos))
            })
        })
    }

    // =========================================================================
    // Input Dispatch
    // =========================================================================

    /// Route a pointer press at viewport position `pos`.
    pub fn mouse_press(&mut self, button: MouseButton, pos: Point) -> DispatchResult {
        let Some(id) = self.window_at(pos) else {
            self.focused = None;
            return DispatchResult::Ignored;
        };
        self.focused = Some(id);

        let handled = self.send(id, pos, |local| {
            WidgetEvent::MousePress(MousePressEvent::new(button, local, pos))
        });
        if handled {
            self.pointer_grab = Some(id);
        }
        self.process_close_requests();
        DispatchResult::from_handled(handled)
    }

    /// Route a pointer move to viewport position `pos` with `buttons` held.
    pub fn mouse_move(&mut self, pos: Point, buttons: u8) -> DispatchResult {
        let under = self.window_at(pos);
        if self.hovered != under {
            if let Some(previous) = self.hovered.and_then(|id| self.window_mut(id)) {
                previous.event(&mut WidgetEvent::Leave);
            }
            self.hovered = under;
        }

        let Some(id) = self.pointer_grab.or(under) else {
            return DispatchResult::Ignored;
        };
        let handled = self.send(id, pos, |local| {
            WidgetEvent::MouseMove(MouseMoveEvent::new(local, pos, buttons))
        });
        DispatchResult::from_handled(handled)
    }

    /// Route a pointer release at viewport position `pos`.
    pub fn mouse_release(&mut self, button: MouseButton, pos: Point) -> DispatchResult {
        let target = if button == MouseButton::Left {
            self.pointer_grab.take()
        } else {
            self.pointer_grab
        };
        let Some(id) = target.or_else(|| self.window_at(pos)) else {
            return DispatchResult::Ignored;
        };

        let handled = self.send(id, pos, |local| {
            WidgetEvent::MouseRelease(MouseReleaseEvent::new(button, local, pos))
        });
        self.process_close_requests();
        DispatchResult::from_handled(handled)
    }

    /// Route a key press to the focused window.
    pub fn key_press(&mut self, event: KeyPressEvent) -> DispatchResult {
        let Some(window) = self.focused.and_then(|id| self.window_mut(id)) else {
            return DispatchResult::Ignored;
        };
        let handled = window.event(&mut WidgetEvent::KeyPress(event));
        self.process_close_requests();
        DispatchResult::from_handled(handled)
    }

    fn send<F>(&mut self, id: WidgetId, pos: Point, make_event: F) -> bool
    where
        F: FnOnce(Point) -> WidgetEvent,
    {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        let local = pos.relative_to(window.frame_rect().origin);
        let mut event = make_event(local);
        window.event(&mut event)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render all mounted windows as of now.
    pub fn render(&self) -> Vec<(WidgetId, WindowView)> {
        self.render_at(Instant::now())
    }

    /// Render all mounted windows in paint order, sampling animations at `now`.
    ///
    /// Windows still animating out after being hidden are included.
    pub fn render_at(&self, now: Instant) -> Vec<(WidgetId, WindowView)> {
        self.order
            .iter()
            .filter_map(|&id| {
                let window = self.window(id)?;
                Some((id, window.view_at(now)))
            })
            .collect()
    }
}

impl std::fmt::Debug for WindowHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowHost")
            .field("widgets", &self.widgets.len())
            .field("viewport", &self.viewport)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

// Ensure WindowHost is Send + Sync
static_assertions::assert_impl_all!(WindowHost: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::EmptyContent;

    fn empty_spec(title: &str) -> WidgetSpec {
        WidgetSpec::new(
            title,
            ContentFactory::new(|| EmptyContent::new(Size::new(200.0, 100.0))),
            Point::new(10.0, 10.0),
        )
    }

    #[test]
    fn test_initial_position_resolve() {
        let viewport = Size::new(1200.0, 800.0);
        assert_eq!(
            InitialPosition::Fixed(Point::new(20.0, 20.0)).resolve(viewport),
            Point::new(20.0, 20.0)
        );
        assert_eq!(
            InitialPosition::ViewportFraction(0.25).resolve(viewport),
            Point::new(300.0, 200.0)
        );
    }

    #[test]
    fn test_register_respects_open_at_start() {
        let mut host = WindowHost::new(Size::new(800.0, 600.0));
        let open = host.register(empty_spec("open").with_open_at_start(true));
        let closed = host.register(empty_spec("closed"));

        assert!(host.is_visible(open));
        assert!(!host.is_visible(closed));
        assert!(host.window(closed).is_none());
        assert_eq!(host.visible_ids().collect::<Vec<_>>(), vec![open]);
    }

    #[test]
    fn test_show_twice_is_noop() {
        let mut host = WindowHost::new(Size::new(800.0, 600.0));
        let id = host.register(empty_spec("a"));
        assert!(host.show(id));
        assert!(!host.show(id));
        assert!(host.hide(id));
        assert!(!host.hide(id));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut host = WindowHost::new(Size::new(800.0, 600.0));
        let id = host.register(empty_spec("a"));

        let mut empty = WindowHost::new(Size::new(800.0, 600.0));
        assert!(!empty.show(id));
        assert!(!empty.hide(id));
        assert!(!empty.is_visible(id));
        assert!(empty.window(id).is_none());
    }

    #[test]
    fn test_window_at_prefers_later_windows() {
        let mut host = WindowHost::new(Size::new(800.0, 600.0));
        let a = host.register(empty_spec("a").with_open_at_start(true));
        let b = host.register(empty_spec("b").with_open_at_start(true));

        // Both frames start at (10, 10)
        assert_eq!(host.window_at(Point::new(50.0, 50.0)), Some(b));
        host.hide(b);
        assert_eq!(host.window_at(Point::new(50.0, 50.0)), Some(a));
        assert_eq!(host.window_at(Point::new(700.0, 500.0)), None);
    }

    #[test]
    fn test_visibility_signal() {
        let mut host = WindowHost::new(Size::new(800.0, 600.0));
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        host.visibility_changed
            .connect(move |&(id, visible)| events_clone.lock().push((id, visible)));

        let id = host.register(empty_spec("a"));
        host.show(id);
        host.hide(id);
        assert_eq!(*events.lock(), vec![(id, true), (id, false)]);
    }
}
