//! Floating window widget implementation.
//!
//! This module provides [`FloatingWindow`], a repositionable container with a
//! title bar that can be minimized, toggled fullscreen, and closed.
//!
//! The window holds no concept of "closed". Clicking the close button emits
//! [`FloatingWindow::close_requested`]; whoever created the window decides
//! whether to stop showing it.
//!
//! # Example
//!
//! ```
//! use horizon_startpage::widget::{ContentFactory, widgets::{FloatingWindow, Notepad, WindowProps}};
//! use horizon_startpage_core::{Point, Size};
//!
//! let props = WindowProps::new("Notes", ContentFactory::new(Notepad::new), Point::new(20.0, 20.0))
//!     .with_on_close(|| println!("close requested"));
//!
//! let mut window = FloatingWindow::new(props).with_viewport(Size::new(1280.0, 800.0));
//!
//! window.drag_to(Point::new(100.0, 50.0));
//! window.toggle_fullscreen();
//! assert_eq!(window.position(), Point::new(100.0, 50.0));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::sync::Arc;
use std::time::Instant;

use horizon_startpage_core::logging::targets;
use horizon_startpage_core::{Point, Rect, Signal, Size};
use serde::{Deserialize, Serialize};

use crate::widget::animation::PresenceAnimation;
use crate::widget::content::{ContentFactory, WindowContent};
use crate::widget::events::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, WidgetEvent,
};

// ============================================================================
// Window State
// ============================================================================

/// The state of a floating window.
///
/// `minimized` and `fullscreen` are independent: a window may be both, in
/// which case it fills the viewport with only its title bar drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowState {
    /// Top-left offset in viewport pixels. Frozen while fullscreen.
    pub position: Point,
    /// Whether the body is collapsed.
    pub minimized: bool,
    /// Whether the window fills the viewport.
    pub fullscreen: bool,
}

impl WindowState {
    /// Create a normal state anchored at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            minimized: false,
            fullscreen: false,
        }
    }
}

/// What happens to the content when a window is minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimizeBehavior {
    /// Drop the content on minimize and create a fresh instance on restore.
    /// Any state held by the content is lost.
    #[default]
    Unmount,
    /// Keep the content alive while minimized; it is only excluded from layout.
    Preserve,
}

// ============================================================================
// Window Flags
// ============================================================================

/// Flags that control which chrome a window carries.
///
/// These flags can be combined using bitwise OR operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowFlags(u8);

impl WindowFlags {
    /// No chrome at all.
    pub const NONE: WindowFlags = WindowFlags(0);

    /// Window has a title bar.
    pub const TITLE_BAR: WindowFlags = WindowFlags(1 << 0);

    /// Window has a minimize button.
    pub const MINIMIZE_BUTTON: WindowFlags = WindowFlags(1 << 1);

    /// Window has a fullscreen toggle button.
    pub const FULLSCREEN_BUTTON: WindowFlags = WindowFlags(1 << 2);

    /// Window has a close button.
    pub const CLOSE_BUTTON: WindowFlags = WindowFlags(1 << 3);

    /// Window can be dragged by its title bar.
    pub const MOVABLE: WindowFlags = WindowFlags(1 << 4);

    /// Default flags: title bar, all three buttons, movable.
    pub const DEFAULT: WindowFlags = WindowFlags(
        Self::TITLE_BAR.0
            | Self::MINIMIZE_BUTTON.0
            | Self::FULLSCREEN_BUTTON.0
            | Self::CLOSE_BUTTON.0
            | Self::MOVABLE.0,
    );

    /// Check if a flag is set.
    pub fn has(&self, flag: WindowFlags) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Check if the window has a title bar.
    pub fn has_title_bar(&self) -> bool {
        self.has(Self::TITLE_BAR)
    }

    /// Check if the window shows the given title bar button.
    ///
    /// Buttons live in the title bar, so none are shown without one.
    pub fn has_button(&self, button: TitleBarButton) -> bool {
        let flag = match button {
            TitleBarButton::Minimize => Self::MINIMIZE_BUTTON,
            TitleBarButton::Fullscreen => Self::FULLSCREEN_BUTTON,
            TitleBarButton::Close => Self::CLOSE_BUTTON,
        };
        self.has_title_bar() && self.has(flag)
    }

    /// Check if the window can be dragged.
    pub fn is_movable(&self) -> bool {
        self.has(Self::MOVABLE) && self.has_title_bar()
    }
}

impl BitOr for WindowFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        WindowFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for WindowFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for WindowFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        WindowFlags(self.0 & rhs.0)
    }
}

// ============================================================================
// Title Bar Button
// ============================================================================

/// A button in the window's title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleBarButton {
    Minimize,
    Fullscreen,
    Close,
}

impl TitleBarButton {
    /// All buttons in display order (left to right).
    pub const ALL: [TitleBarButton; 3] = [
        TitleBarButton::Minimize,
        TitleBarButton::Fullscreen,
        TitleBarButton::Close,
    ];

    /// The glyph drawn on the button.
    pub fn glyph(&self, fullscreen: bool) -> &'static str {
        match self {
            TitleBarButton::Minimize => "−",
            TitleBarButton::Fullscreen if fullscreen => "❐",
            TitleBarButton::Fullscreen => "□",
            TitleBarButton::Close => "×",
        }
    }
}

// ============================================================================
// Props and View
// ============================================================================

type CloseCallback = Arc<dyn Fn() + Send + Sync>;

/// Construction properties for a [`FloatingWindow`].
#[derive(Clone)]
pub struct WindowProps {
    /// Title shown in the title bar; may be empty.
    pub title: String,
    /// Creates the content each time the body mounts.
    pub content: ContentFactory,
    /// Invoked once per close click.
    pub on_close: Option<CloseCallback>,
    /// Position used at construction and never read again.
    pub initial_position: Point,
}

impl WindowProps {
    /// Create props without a close callback.
    pub fn new(title: impl Into<String>, content: ContentFactory, initial_position: Point) -> Self {
        Self {
            title: title.into(),
            content,
            on_close: None,
            initial_position,
        }
    }

    /// Set the close callback using builder pattern.
    pub fn with_on_close<F>(mut self, on_close: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(on_close));
        self
    }
}

impl fmt::Debug for WindowProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowProps")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("on_close", &self.on_close.is_some())
            .field("initial_position", &self.initial_position)
            .finish()
    }
}

/// A rendered title bar button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    /// Which button this is.
    pub button: TitleBarButton,
    /// Button rectangle in viewport coordinates.
    pub rect: Rect,
    /// Glyph drawn on the button.
    pub glyph: &'static str,
    /// Whether the pointer is over the button.
    pub hovered: bool,
    /// Whether the button is held down.
    pub pressed: bool,
}

/// Everything needed to draw a window, in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowView {
    /// Title text.
    pub title: String,
    /// Outer frame.
    pub frame: Rect,
    /// Title bar, if the window has one.
    pub title_bar: Option<Rect>,
    /// Title bar buttons in display order.
    pub buttons: Vec<ButtonView>,
    /// Content area; `None` while minimized.
    pub content: Option<Rect>,
    /// Mount generation of the content shown in `content`.
    pub content_generation: u64,
    /// Whether the window is minimized.
    pub minimized: bool,
    /// Whether the window fills the viewport.
    pub fullscreen: bool,
    /// Presence animation opacity.
    pub opacity: f32,
    /// Presence animation scale.
    pub scale: f32,
}

// ============================================================================
// FloatingWindow
// ============================================================================

/// A draggable, minimizable, fullscreen-toggleable window widget.
///
/// # Signals
///
/// - `close_requested()`: Emitted when the close button is clicked
/// - `minimized_changed(bool)`: Emitted when the body collapses or expands
/// - `fullscreen_changed(bool)`: Emitted when fullscreen is toggled
/// - `moved(Point)`: Emitted when a drag changes the position
/// - `title_changed(String)`: Emitted when the title changes
pub struct FloatingWindow {
    /// The window title.
    title: String,

    /// Window flags controlling chrome and behavior.
    flags: WindowFlags,

    /// Position, minimized and fullscreen state.
    state: WindowState,

    /// Size of the viewport the window lives in.
    viewport: Size,

    /// What minimizing does to the content.
    minimize_behavior: MinimizeBehavior,

    /// Creates content instances on mount.
    content_factory: ContentFactory,

    /// The mounted content, if any.
    content: Option<Box<dyn WindowContent>>,

    /// Incremented every time content is mounted.
    content_generation: u64,

    /// Title bar height.
    title_bar_height: f32,

    /// Button size.
    button_size: f32,

    /// Narrowest auto-sized frame.
    min_width: f32,

    /// Entry/exit animation.
    presence: PresenceAnimation,

    // Interaction state
    hovered_button: Option<TitleBarButton>,
    pressed_button: Option<TitleBarButton>,
    /// Whether the title bar is being dragged.
    dragging: bool,

    // Signals
    /// Signal emitted when close is requested.
    pub close_requested: Signal<()>,
    /// Signal emitted when the minimized flag changes.
    pub minimized_changed: Signal<bool>,
    /// Signal emitted when the fullscreen flag changes.
    pub fullscreen_changed: Signal<bool>,
    /// Signal emitted when the position changes.
    pub moved: Signal<Point>,
    /// Signal emitted when the title changes.
    pub title_changed: Signal<String>,
}

impl FloatingWindow {
    /// Height of the title bar unless configured otherwise.
    pub const DEFAULT_TITLE_BAR_HEIGHT: f32 = 36.0;

    /// Size of a title bar button.
    pub const DEFAULT_BUTTON_SIZE: f32 = 20.0;

    /// Narrowest auto-sized frame.
    pub const DEFAULT_MIN_WIDTH: f32 = 120.0;

    /// Create a window from its props and mount its content.
    ///
    /// The entry animation starts immediately.
    pub fn new(props: WindowProps) -> Self {
        let WindowProps {
            title,
            content,
            on_close,
            initial_position,
        } = props;

        let mut window = Self {
            title,
            flags: WindowFlags::DEFAULT,
            state: WindowState::new(initial_position),
            viewport: Size::ZERO,
            minimize_behavior: MinimizeBehavior::default(),
            content_factory: content,
            content: None,
            content_generation: 0,
            title_bar_height: Self::DEFAULT_TITLE_BAR_HEIGHT,
            button_size: Self::DEFAULT_BUTTON_SIZE,
            min_width: Self::DEFAULT_MIN_WIDTH,
            presence: PresenceAnimation::default(),
            hovered_button: None,
            pressed_button: None,
            dragging: false,
            close_requested: Signal::new(),
            minimized_changed: Signal::new(),
            fullscreen_changed: Signal::new(),
            moved: Signal::new(),
            title_changed: Signal::new(),
        };

        if let Some(on_close) = on_close {
            window.close_requested.connect(move |_| on_close());
        }

        window.mount_content();
        window.presence.enter(Instant::now());
        window
    }

    /// Set the viewport size using builder pattern.
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set flags using builder pattern.
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the minimize behavior using builder pattern.
    pub fn with_minimize_behavior(mut self, behavior: MinimizeBehavior) -> Self {
        self.minimize_behavior = behavior;
        self
    }

    /// Set the title bar height using builder pattern.
    pub fn with_title_bar_height(mut self, height: f32) -> Self {
        self.title_bar_height = height;
        self.button_size = self.button_size.min(height);
        self
    }

    /// Replace the presence animation and restart the entry from now.
    pub fn with_presence(mut self, presence: PresenceAnimation) -> Self {
        self.presence = presence;
        self.presence.enter(Instant::now());
        self
    }

    // =========================================================================
    // Title and Flags
    // =========================================================================

    /// Get the window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the window title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let new_title = title.into();
        if self.title != new_title {
            self.title = new_title.clone();
            self.title_changed.emit(new_title);
        }
    }

    /// Get the window flags.
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Set the window flags.
    pub fn set_flags(&mut self, flags: WindowFlags) {
        self.flags = flags;
        if !flags.is_movable() {
            self.dragging = false;
        }
    }

    /// Get the minimize behavior.
    pub fn minimize_behavior(&self) -> MinimizeBehavior {
        self.minimize_behavior
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Get the full window state.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Get the stored position.
    ///
    /// While fullscreen this is the frozen pre-fullscreen position, not the
    /// rendered origin.
    pub fn position(&self) -> Point {
        self.state.position
    }

    /// Check if the window is minimized.
    pub fn is_minimized(&self) -> bool {
        self.state.minimized
    }

    /// Check if the window is fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.state.fullscreen
    }

    /// Check if a title bar drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Get the viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Set the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Move the window so its top-left corner is at `point`.
    ///
    /// Returns `false` and leaves the position untouched while fullscreen or
    /// when the window is not movable.
    pub fn drag_to(&mut self, point: Point) -> bool {
        if self.state.fullscreen || !self.flags.is_movable() {
            return false;
        }
        if self.state.position != point {
            self.state.position = point;
            tracing::trace!(target: targets::WINDOW, x = point.x, y = point.y, "window dragged");
            self.moved.emit(point);
        }
        true
    }

    /// Set the minimized flag.
    pub fn set_minimized(&mut self, minimized: bool) {
        if self.state.minimized == minimized {
            return;
        }
        self.state.minimized = minimized;

        if minimized {
            if self.minimize_behavior == MinimizeBehavior::Unmount {
                self.unmount_content();
            }
        } else if self.content.is_none() {
            self.mount_content();
        }

        tracing::debug!(target: targets::WINDOW, title = %self.title, minimized, "minimized toggled");
        self.minimized_changed.emit(minimized);
    }

    /// Flip the minimized flag.
    pub fn toggle_minimized(&mut self) {
        self.set_minimized(!self.state.minimized);
    }

    /// Set the fullscreen flag. The stored position is never altered.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.state.fullscreen == fullscreen {
            return;
        }
        self.state.fullscreen = fullscreen;
        if fullscreen {
            self.dragging = false;
        }

        tracing::debug!(target: targets::WINDOW, title = %self.title, fullscreen, "fullscreen toggled");
        self.fullscreen_changed.emit(fullscreen);
    }

    /// Flip the fullscreen flag.
    pub fn toggle_fullscreen(&mut self) {
        self.set_fullscreen(!self.state.fullscreen);
    }

    /// Ask the owner to close this window.
    ///
    /// Emits `close_requested` exactly once, whatever the current state.
    pub fn request_close(&mut self) {
        tracing::debug!(target: targets::WINDOW, title = %self.title, "close requested");
        self.close_requested.emit(());
    }

    /// Perform the action of a title bar button.
    pub fn click(&mut self, button: TitleBarButton) {
        match button {
            TitleBarButton::Minimize => self.toggle_minimized(),
            TitleBarButton::Fullscreen => self.toggle_fullscreen(),
            TitleBarButton::Close => self.request_close(),
        }
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Get the mounted content.
    pub fn content(&self) -> Option<&dyn WindowContent> {
        self.content.as_deref()
    }

    /// Get the mounted content as a concrete type.
    pub fn content_as<T: WindowContent>(&self) -> Option<&T> {
        self.content.as_ref()?.as_any().downcast_ref::<T>()
    }

    /// Get the mounted content as a concrete type, mutably.
    pub fn content_as_mut<T: WindowContent>(&mut self) -> Option<&mut T> {
        self.content.as_mut()?.as_any_mut().downcast_mut::<T>()
    }

    /// Check if content is currently mounted.
    pub fn is_content_mounted(&self) -> bool {
        self.content.is_some()
    }

    /// How many times content has been mounted.
    pub fn content_generation(&self) -> u64 {
        self.content_generation
    }

    fn mount_content(&mut self) {
        let mut content = self.content_factory.create();
        content.on_mount();
        self.content = Some(content);
        self.content_generation += 1;
        tracing::debug!(target: targets::CONTENT, title = %self.title, generation = self.content_generation, "content mounted");
    }

    fn unmount_content(&mut self) {
        if let Some(mut content) = self.content.take() {
            content.on_unmount();
            tracing::debug!(target: targets::CONTENT, title = %self.title, generation = self.content_generation, "content unmounted");
        }
    }

    // =========================================================================
    // Presence
    // =========================================================================

    /// Get the presence animation.
    pub fn presence(&self) -> &PresenceAnimation {
        &self.presence
    }

    /// Start the exit animation now.
    pub fn begin_exit(&mut self) {
        self.begin_exit_at(Instant::now());
    }

    /// Start the exit animation at `now`.
    pub fn begin_exit_at(&mut self, now: Instant) {
        self.dragging = false;
        self.pressed_button = None;
        self.presence.exit(now);
    }

    /// Check if an exit animation has been started.
    pub fn is_exiting(&self) -> bool {
        self.presence.is_exiting()
    }

    /// Check if the exit animation has finished at `now`.
    pub fn is_exit_complete(&self, now: Instant) -> bool {
        self.presence.is_exit_complete(now)
    }

    // =========================================================================
    // Geometry Calculations
    // =========================================================================

    fn title_bar_extent(&self) -> f32 {
        if self.flags.has_title_bar() {
            self.title_bar_height
        } else {
            0.0
        }
    }

    /// Size of the frame when not fullscreen.
    pub fn natural_size(&self) -> Size {
        let title_bar = self.title_bar_extent();
        let hint = if self.state.minimized {
            None
        } else {
            self.content.as_ref().map(|c| c.size_hint())
        };

        match hint {
            Some(hint) => Size::new(hint.width.max(self.min_width), title_bar + hint.height),
            None => Size::new(self.min_width, title_bar),
        }
    }

    /// The outer frame in viewport coordinates.
    pub fn frame_rect(&self) -> Rect {
        if self.state.fullscreen {
            Rect::from_origin_size(Point::ZERO, self.viewport)
        } else {
            Rect::from_origin_size(self.state.position, self.natural_size())
        }
    }

    fn local_frame(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.frame_rect().size)
    }

    /// Get the title bar rectangle in local coordinates.
    fn title_bar_rect(&self) -> Option<Rect> {
        if !self.flags.has_title_bar() {
            return None;
        }
        Some(Rect::new(0.0, 0.0, self.frame_rect().width(), self.title_bar_height))
    }

    /// Get the content area rectangle in local coordinates.
    ///
    /// `None` while minimized.
    pub fn content_rect(&self) -> Option<Rect> {
        if self.state.minimized {
            return None;
        }
        let frame = self.frame_rect();
        let title_bar = self.title_bar_extent();
        Some(Rect::new(
            0.0,
            title_bar,
            frame.width(),
            (frame.height() - title_bar).max(0.0),
        ))
    }

    /// Get a title bar button rectangle in local coordinates.
    ///
    /// Buttons are packed from the right edge: close, fullscreen, minimize.
    fn button_rect(&self, button: TitleBarButton) -> Option<Rect> {
        if !self.flags.has_button(button) {
            return None;
        }

        let title_rect = self.title_bar_rect()?;
        let padding = (self.title_bar_height - self.button_size) / 2.0;

        let mut offset = padding;
        for other in TitleBarButton::ALL.iter().rev() {
            if *other == button {
                break;
            }
            if self.flags.has_button(*other) {
                offset += self.button_size + 2.0;
            }
        }

        Some(Rect::new(
            title_rect.width() - offset - self.button_size,
            padding,
            self.button_size,
            self.button_size,
        ))
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Check which button is at the given local position.
    fn hit_test_button(&self, pos: Point) -> Option<TitleBarButton> {
        TitleBarButton::ALL
            .into_iter()
            .find(|&button| self.button_rect(button).is_some_and(|r| r.contains(pos)))
    }

    /// Check if the local position is in the title bar drag area.
    fn is_in_title_bar_drag_area(&self, pos: Point) -> bool {
        self.title_bar_rect().is_some_and(|r| r.contains(pos)) && self.hit_test_button(pos).is_none()
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Handle an event in local coordinates.
    ///
    /// Returns `true` if the event was consumed; consumed events are also
    /// marked accepted.
    pub fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::Leave => {
                self.hovered_button = None;
                false
            }
            WidgetEvent::KeyPress(_) => self.forward_to_content(event),
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        let pos = event.local_pos;

        if let Some(button) = self.hit_test_button(pos) {
            self.pressed_button = Some(button);
            return true;
        }

        if self.is_in_title_bar_drag_area(pos) {
            if self.flags.is_movable() && !self.state.fullscreen {
                self.dragging = true;
                tracing::trace!(target: targets::WINDOW, title = %self.title, "drag started");
            }
            return true;
        }

        self.local_frame().contains(pos)
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        // A click completes only if released over the button it started on
        if let Some(button) = self.pressed_button.take() {
            if self.button_rect(button).is_some_and(|r| r.contains(event.local_pos)) {
                self.click(button);
            }
            return true;
        }

        if self.dragging {
            self.dragging = false;
            tracing::trace!(target: targets::WINDOW, title = %self.title, x = self.state.position.x, y = self.state.position.y, "drag ended");
            return true;
        }

        false
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        let hovered = self.hit_test_button(event.local_pos);
        let hover_changed = hovered != self.hovered_button;
        self.hovered_button = hovered;

        if self.dragging {
            if !event.is_button_pressed(MouseButton::Left) {
                // The release happened somewhere we never saw
                self.dragging = false;
                return hover_changed;
            }
            self.drag_to(event.global_pos);
            return true;
        }

        hover_changed
    }

    fn forward_to_content(&mut self, event: &mut WidgetEvent) -> bool {
        if self.state.minimized {
            return false;
        }
        match self.content.as_mut() {
            Some(content) => content.event(event),
            None => false,
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the window as of now.
    pub fn view(&self) -> WindowView {
        self.view_at(Instant::now())
    }

    /// Render the window, sampling the presence animation at `now`.
    ///
    /// The result depends only on the window state, the viewport, and `now`.
    pub fn view_at(&self, now: Instant) -> WindowView {
        let frame = self.frame_rect();
        let sample = self.presence.sample(now);

        let buttons = TitleBarButton::ALL
            .into_iter()
            .filter_map(|button| {
                let rect = self.button_rect(button)?;
                Some(ButtonView {
                    button,
                    rect: frame.map_from_local(rect),
                    glyph: button.glyph(self.state.fullscreen),
                    hovered: self.hovered_button == Some(button),
                    pressed: self.pressed_button == Some(button),
                })
            })
            .collect();

        WindowView {
            title: self.title.clone(),
            frame,
            title_bar: self.title_bar_rect().map(|r| frame.map_from_local(r)),
            buttons,
            content: self.content_rect().map(|r| frame.map_from_local(r)),
            content_generation: self.content_generation,
            minimized: self.state.minimized,
            fullscreen: self.state.fullscreen,
            opacity: sample.opacity,
            scale: sample.scale,
        }
    }
}

impl Drop for FloatingWindow {
    fn drop(&mut self) {
        self.unmount_content();
    }
}

impl fmt::Debug for FloatingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingWindow")
            .field("title", &self.title)
            .field("state", &self.state)
            .field("flags", &self.flags)
            .field("content_generation", &self.content_generation)
            .finish_non_exhaustive()
    }
}

// Ensure FloatingWindow is Send + Sync
static_assertions::assert_impl_all!(FloatingWindow: Send, Sync);
