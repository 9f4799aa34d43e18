//! Integration tests for loading start page configuration.

use std::path::PathBuf;

use horizon_startpage::config::{ContentConfig, StartPageConfig};
use horizon_startpage::widget::widgets::{EmbeddedFrame, MinimizeBehavior, Notepad};
use horizon_startpage::{Error, StartPage};
use horizon_startpage_core::{Point, Size};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("horizon-startpage-{}-{name}", std::process::id()))
}

#[test]
fn test_load_from_file() {
    let path = temp_path("page.toml");
    std::fs::write(
        &path,
        r#"
        minimize_behavior = "preserve"

        [[windows]]
        title = "Notes"
        open_at_start = true
        position = { x = 64.0, y = 48.0 }
        content = { kind = "notepad", placeholder = "Write here" }
        "#,
    )
    .unwrap();

    let config = StartPageConfig::load(&path);
    std::fs::remove_file(&path).unwrap();
    let config = config.unwrap();

    let page = StartPage::from_config(&config, VIEWPORT).unwrap();
    let id = page.host().visible_ids().next().unwrap();
    let window = page.host().window(id).unwrap();

    assert_eq!(window.title(), "Notes");
    assert_eq!(window.position(), Point::new(64.0, 48.0));
    assert_eq!(window.minimize_behavior(), MinimizeBehavior::Preserve);
    assert_eq!(
        window.content_as::<Notepad>().map(|n| n.placeholder()),
        Some("Write here")
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let result = StartPageConfig::load(temp_path("does-not-exist.toml"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_invalid_frame_url_is_rejected() {
    let result = StartPageConfig::from_toml_str(
        r#"
        [[windows]]
        title = "Broken"
        position = { viewport_fraction = 0.25 }
        content = { kind = "frame", src = "discord.com/login", title = "Login" }
        "#,
    );
    match result {
        Err(Error::InvalidUrl { field, url, .. }) => {
            assert_eq!(field, "windows[0].content.src");
            assert_eq!(url, "discord.com/login");
        }
        other => panic!("expected invalid url, got {other:?}"),
    }
}

#[test]
fn test_from_config_revalidates() {
    let mut config = StartPageConfig::default();
    config.windows[1].content = ContentConfig::Frame {
        src: "https://discord.com/login".to_string(),
        title: "Discord Login".to_string(),
        height: Some(-1.0),
    };
    let result = StartPage::from_config(&config, VIEWPORT);
    assert!(matches!(result, Err(Error::InvalidValue { .. })));
}

#[test]
fn test_default_page_matches_stock_layout() {
    let page = StartPage::from_config(&StartPageConfig::default(), VIEWPORT).unwrap();

    let ids: Vec<_> = page.host().ids().collect();
    assert_eq!(ids.len(), 2);

    let notepad = page.host().window(ids[0]).unwrap();
    assert_eq!(notepad.title(), "");
    assert_eq!(notepad.position(), Point::new(20.0, 20.0));
    assert!(notepad.content_as::<Notepad>().is_some());

    assert!(!page.host().is_visible(ids[1]));
    assert_eq!(page.launcher_target("Discord"), Some(ids[1]));

    let spec = page.host().spec(ids[1]).unwrap();
    let content = spec.content.create();
    let frame = content.as_any().downcast_ref::<EmbeddedFrame>().unwrap();
    assert_eq!(frame.src().as_str(), "https://discord.com/login");
    assert_eq!(frame.title(), "Discord Login");
}
