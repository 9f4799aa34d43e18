//! Content hosted inside a floating window.
//!
//! A window never inspects its content. It only asks for a size hint, forwards
//! input, and decides when the content exists: content is created through a
//! [`ContentFactory`] each time the window mounts its body, and dropped when
//! the body unmounts.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use horizon_startpage_core::Size;

use super::events::WidgetEvent;

/// Content that can be mounted inside a floating window.
pub trait WindowContent: Any + Send + Sync {
    /// Preferred size of the content area, used for auto-sized layout.
    fn size_hint(&self) -> Size;

    /// Handle an input event forwarded by the window.
    ///
    /// Returns `true` if the event was consumed.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    /// Called once, right after the content is created by its window.
    fn on_mount(&mut self) {}

    /// Called once, right before the content is dropped by its window.
    fn on_unmount(&mut self) {}

    /// Get this content as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get this content as mutable `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Creates fresh content instances for a window.
///
/// Factories are cheap to clone; the host keeps one per registered widget and
/// hands a clone to every window it creates.
#[derive(Clone)]
pub struct ContentFactory {
    create: Arc<dyn Fn() -> Box<dyn WindowContent> + Send + Sync>,
}

impl ContentFactory {
    /// Create a factory from a constructor closure.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_startpage::widget::{ContentFactory, widgets::Notepad};
    ///
    /// let factory = ContentFactory::new(Notepad::new);
    /// let content = factory.create();
    /// assert!(content.as_any().is::<Notepad>());
    /// ```
    pub fn new<C, F>(create: F) -> Self
    where
        C: WindowContent,
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(move || Box::new(create()) as Box<dyn WindowContent>),
        }
    }

    /// Create a new content instance.
    pub fn create(&self) -> Box<dyn WindowContent> {
        (self.create)()
    }
}

impl fmt::Debug for ContentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentFactory").finish_non_exhaustive()
    }
}

/// Content with nothing in it; useful for windows that only show chrome.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmptyContent {
    size: Size,
}

impl EmptyContent {
    /// Create empty content occupying `size`.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl WindowContent for EmptyContent {
    fn size_hint(&self) -> Size {
        self.size
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_factory_creates_fresh_instances() {
        let created = Arc::new(AtomicUsize::new(0));
        let created_clone = created.clone();
        let factory = ContentFactory::new(move || {
            created_clone.fetch_add(1, Ordering::SeqCst);
            EmptyContent::new(Size::new(10.0, 10.0))
        });

        let a = factory.create();
        let b = factory.clone().create();
        assert_eq!(created.load(Ordering::SeqCst), 2);
        assert_eq!(a.size_hint(), b.size_hint());
    }

    #[test]
    fn test_downcast() {
        let factory = ContentFactory::new(|| EmptyContent::new(Size::new(4.0, 2.0)));
        let content = factory.create();
        let empty = content.as_any().downcast_ref::<EmptyContent>();
        assert_eq!(empty.map(|e| e.size_hint()), Some(Size::new(4.0, 2.0)));
    }
}
