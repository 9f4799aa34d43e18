//! Integration tests for the floating window widget.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use horizon_startpage::widget::animation::{Easing, PresenceAnimation};
use horizon_startpage::widget::widgets::{
    FloatingWindow, MinimizeBehavior, Notepad, TitleBarButton, WindowProps,
};
use horizon_startpage::widget::{
    ContentFactory, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};
use horizon_startpage_core::{Point, Rect, Size};
use parking_lot::Mutex;

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_startpage=trace")
        .with_test_writer()
        .try_init();
}

fn notepad_window(on_close: impl Fn() + Send + Sync + 'static) -> FloatingWindow {
    setup();
    let props = WindowProps::new("", ContentFactory::new(Notepad::new), Point::new(20.0, 20.0))
        .with_on_close(on_close);
    FloatingWindow::new(props).with_viewport(VIEWPORT)
}

fn counting_window() -> (FloatingWindow, Arc<AtomicUsize>) {
    let closes = Arc::new(AtomicUsize::new(0));
    let closes_clone = closes.clone();
    let window = notepad_window(move || {
        closes_clone.fetch_add(1, Ordering::SeqCst);
    });
    (window, closes)
}

fn to_local(window: &FloatingWindow, global: Point) -> Point {
    global.relative_to(window.frame_rect().origin)
}

fn press(window: &mut FloatingWindow, global: Point) -> bool {
    let local = to_local(window, global);
    window.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        local,
        global,
    )))
}

fn move_to(window: &mut FloatingWindow, global: Point) -> bool {
    let local = to_local(window, global);
    window.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(
        local,
        global,
        MouseButton::Left.mask(),
    )))
}

fn release(window: &mut FloatingWindow, global: Point) -> bool {
    let local = to_local(window, global);
    window.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        local,
        global,
    )))
}

fn button_center(window: &FloatingWindow, button: TitleBarButton) -> Point {
    window
        .view()
        .buttons
        .iter()
        .find(|b| b.button == button)
        .map(|b| b.rect.center())
        .expect("button is shown")
}

fn click(window: &mut FloatingWindow, button: TitleBarButton) {
    let center = button_center(window, button);
    press(window, center);
    release(window, center);
}

/// A point inside the title bar, clear of the buttons.
fn title_bar_grip(window: &FloatingWindow) -> Point {
    window.frame_rect().origin.offset(10.0, 10.0)
}

fn drag(window: &mut FloatingWindow, to: Point) {
    let grip = title_bar_grip(window);
    press(window, grip);
    move_to(window, to);
    release(window, to);
}

#[test]
fn test_drag_ends_at_pointer() {
    let (mut window, _) = counting_window();
    drag(&mut window, Point::new(100.0, 50.0));

    assert_eq!(window.position(), Point::new(100.0, 50.0));
    assert_eq!(window.view().frame.origin, Point::new(100.0, 50.0));
    assert!(!window.is_dragging());
}

#[test]
fn test_drag_follows_every_move() {
    let (mut window, _) = counting_window();
    let moves = Arc::new(Mutex::new(Vec::new()));
    let moves_clone = moves.clone();
    window.moved.connect(move |p| moves_clone.lock().push(*p));

    let grip = title_bar_grip(&window);
    press(&mut window, grip);
    move_to(&mut window, Point::new(60.0, 40.0));
    move_to(&mut window, Point::new(-30.0, 900.0));
    release(&mut window, Point::new(-30.0, 900.0));

    // Off-screen positions are not clamped
    assert_eq!(window.position(), Point::new(-30.0, 900.0));
    assert_eq!(
        *moves.lock(),
        vec![Point::new(60.0, 40.0), Point::new(-30.0, 900.0)]
    );
}

#[test]
fn test_press_on_body_does_not_drag() {
    let (mut window, _) = counting_window();
    assert!(press(&mut window, Point::new(40.0, 100.0)));
    move_to(&mut window, Point::new(300.0, 300.0));
    release(&mut window, Point::new(300.0, 300.0));
    assert_eq!(window.position(), Point::new(20.0, 20.0));
}

#[test]
fn test_fullscreen_round_trip_restores_position() {
    let (mut window, _) = counting_window();
    drag(&mut window, Point::new(333.5, 77.25));
    let before = window.position();

    window.toggle_fullscreen();
    window.toggle_fullscreen();

    assert_eq!(window.position(), before);
    assert_eq!(window.frame_rect().origin, before);
}

#[test]
fn test_fullscreen_fills_viewport() {
    let (mut window, _) = counting_window();
    click(&mut window, TitleBarButton::Fullscreen);

    let view = window.view();
    assert!(view.fullscreen);
    assert_eq!(view.frame, Rect::new(0.0, 0.0, 1280.0, 800.0));
    assert_eq!(view.content, Some(Rect::new(0.0, 36.0, 1280.0, 764.0)));
    assert_eq!(window.position(), Point::new(20.0, 20.0));

    let fullscreen = view
        .buttons
        .iter()
        .find(|b| b.button == TitleBarButton::Fullscreen)
        .expect("fullscreen button");
    assert_eq!(fullscreen.glyph, "❐");
}

#[test]
fn test_drag_ignored_while_fullscreen() {
    let (mut window, _) = counting_window();
    window.set_fullscreen(true);

    drag(&mut window, Point::new(500.0, 500.0));
    assert!(!window.drag_to(Point::new(1.0, 1.0)));
    assert_eq!(window.position(), Point::new(20.0, 20.0));
}

#[test]
fn test_entering_fullscreen_stops_drag() {
    let (mut window, _) = counting_window();
    let grip = title_bar_grip(&window);
    press(&mut window, grip);
    move_to(&mut window, Point::new(50.0, 50.0));
    assert!(window.is_dragging());

    window.set_fullscreen(true);
    move_to(&mut window, Point::new(300.0, 300.0));
    release(&mut window, Point::new(300.0, 300.0));

    assert!(!window.is_dragging());
    assert_eq!(window.position(), Point::new(50.0, 50.0));
}

#[test]
fn test_minimize_unmounts_content() {
    let (mut window, _) = counting_window();
    window.event(&mut WidgetEvent::KeyPress(KeyPressEvent::typed("x")));
    assert_eq!(window.content_as::<Notepad>().map(|n| n.text()), Some("x"));
    assert_eq!(window.content_generation(), 1);

    click(&mut window, TitleBarButton::Minimize);
    let view = window.view();
    assert!(view.minimized);
    assert_eq!(view.content, None);
    assert_eq!(view.frame.height(), 36.0);
    assert!(!window.is_content_mounted());

    click(&mut window, TitleBarButton::Minimize);
    assert!(!window.is_minimized());
    assert_eq!(window.content_generation(), 2);
    assert_eq!(window.content_as::<Notepad>().map(|n| n.text()), Some(""));
}

#[test]
fn test_minimize_preserve_keeps_content() {
    let (window, _) = counting_window();
    let mut window = window.with_minimize_behavior(MinimizeBehavior::Preserve);
    window.event(&mut WidgetEvent::KeyPress(KeyPressEvent::typed("keep")));

    window.toggle_minimized();
    assert!(window.is_content_mounted());
    assert_eq!(window.view().content, None);

    // Keys do not reach hidden content
    window.event(&mut WidgetEvent::KeyPress(KeyPressEvent::typed("!")));

    window.toggle_minimized();
    assert_eq!(window.content_generation(), 1);
    assert_eq!(window.content_as::<Notepad>().map(|n| n.text()), Some("keep"));
}

#[test]
fn test_minimized_and_fullscreen_are_independent() {
    let (mut window, _) = counting_window();
    window.toggle_minimized();
    window.toggle_fullscreen();

    let view = window.view();
    assert!(view.minimized && view.fullscreen);
    assert_eq!(view.frame, Rect::new(0.0, 0.0, 1280.0, 800.0));
    assert_eq!(view.content, None);

    window.toggle_fullscreen();
    assert!(window.is_minimized());
}

#[test]
fn test_close_once_per_click_in_every_state() {
    let (mut window, closes) = counting_window();

    click(&mut window, TitleBarButton::Close);
    window.set_minimized(true);
    click(&mut window, TitleBarButton::Close);
    window.set_fullscreen(true);
    click(&mut window, TitleBarButton::Close);
    window.set_minimized(false);
    click(&mut window, TitleBarButton::Close);

    assert_eq!(closes.load(Ordering::SeqCst), 4);
    // The window has no closed state of its own
    assert!(window.is_fullscreen());
}

#[test]
fn test_click_cancelled_when_released_elsewhere() {
    let (mut window, closes) = counting_window();
    let center = button_center(&window, TitleBarButton::Close);

    press(&mut window, center);
    assert!(window.view().buttons.iter().any(|b| b.pressed));
    release(&mut window, Point::new(30.0, 30.0));

    assert_eq!(closes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_state_signals() {
    let (mut window, _) = counting_window();
    let log = Arc::new(Mutex::new(Vec::new()));

    let log_min = log.clone();
    window
        .minimized_changed
        .connect(move |m| log_min.lock().push(format!("minimized={m}")));
    let log_full = log.clone();
    window
        .fullscreen_changed
        .connect(move |f| log_full.lock().push(format!("fullscreen={f}")));

    window.toggle_minimized();
    window.set_minimized(true);
    window.toggle_fullscreen();
    window.toggle_minimized();

    assert_eq!(
        *log.lock(),
        vec!["minimized=true", "fullscreen=true", "minimized=false"]
    );
}

#[test]
fn test_presence_animation() {
    let (window, _) = counting_window();
    let mut window =
        window.with_presence(PresenceAnimation::new(Easing::Linear, Duration::from_millis(100)));

    let later = Instant::now() + Duration::from_secs(1);
    let view = window.view_at(later);
    assert_eq!((view.opacity, view.scale), (1.0, 1.0));

    window.begin_exit_at(later);
    assert!(window.is_exiting());
    assert!(!window.is_exit_complete(later));

    let end = later + Duration::from_millis(100);
    assert!(window.is_exit_complete(end));
    let view = window.view_at(end);
    assert_eq!((view.opacity, view.scale), (0.0, 0.9));
}

#[test]
fn test_reference_scenario() {
    let (mut window, _) = counting_window();
    assert_eq!(window.position(), Point::new(20.0, 20.0));

    drag(&mut window, Point::new(100.0, 50.0));
    assert_eq!(window.view().frame.origin, Point::new(100.0, 50.0));

    click(&mut window, TitleBarButton::Fullscreen);
    assert_eq!(window.view().frame, Rect::new(0.0, 0.0, 1280.0, 800.0));
    assert_eq!(window.position(), Point::new(100.0, 50.0));

    click(&mut window, TitleBarButton::Fullscreen);
    assert_eq!(window.view().frame.origin, Point::new(100.0, 50.0));
}
