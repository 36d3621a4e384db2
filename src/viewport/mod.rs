//! Viewport width tracking and the responsive filter panel.
//!
//! The presentation layer reports window resizes to a [`Viewport`]. Interested
//! parties subscribe and receive the new width; each subscription is a guard that
//! deregisters its listener when dropped or explicitly unsubscribed, so a torn-down
//! session never leaves a listener behind.
//!
//! [`FilterPanel`] is the one built-in consumer: it collapses the auxiliary filter
//! panel on narrow viewports and expands it on wide ones.
//!
//! # Example
//!
//! ```
//! use dinescope::viewport::Viewport;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let viewport = Viewport::new(1024);
//! let seen = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&seen);
//!
//! let subscription = viewport.subscribe(move |width| sink.set(width));
//! viewport.resize(480);
//! assert_eq!(seen.get(), 480);
//!
//! subscription.unsubscribe();
//! viewport.resize(800);
//! assert_eq!(seen.get(), 480);
//! assert_eq!(viewport.listener_count(), 0);
//! ```

mod panel;

pub use panel::{FilterPanel, DEFAULT_PANEL_BREAKPOINT};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(u32)>>;

#[derive(Default)]
struct Registry {
    width: u32,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Observable viewport width.
///
/// Single-threaded: cloning yields another handle to the same registry.
#[derive(Clone)]
pub struct Viewport {
    inner: Rc<RefCell<Registry>>,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                width,
                ..Registry::default()
            })),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.inner.borrow().width
    }

    /// Registers `listener`; it runs on every subsequent resize until the returned
    /// subscription is released.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, listener: impl FnMut(u32) + 'static) -> ResizeSubscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));

        tracing::debug!(listener_id = id, listeners = registry.listeners.len(), "resize listener registered");

        ResizeSubscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Updates the width and notifies listeners in registration order.
    ///
    /// Listeners may subscribe or unsubscribe while being notified; changes take
    /// effect from the next resize.
    pub fn resize(&self, width: u32) {
        let listeners: Vec<Listener> = {
            let mut registry = self.inner.borrow_mut();
            registry.width = width;
            registry.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };

        tracing::trace!(width, listeners = listeners.len(), "viewport resized");

        for listener in listeners {
            let mut notify = listener.borrow_mut();
            (*notify)(width);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.inner.borrow();
        f.debug_struct("Viewport")
            .field("width", &registry.width)
            .field("listeners", &registry.listeners.len())
            .finish()
    }
}

/// Registration guard returned by [`Viewport::subscribe`].
///
/// The listener is removed on [`unsubscribe`](Self::unsubscribe) or drop. Outliving
/// the viewport is harmless.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl ResizeSubscription {
    /// Removes the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    fn release(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Dropped outside the borrow: a listener may own subscriptions of its own.
        let removed = {
            let mut registry = registry.borrow_mut();
            let removed = registry
                .listeners
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|i| registry.listeners.remove(i));
            tracing::debug!(listener_id = self.id, listeners = registry.listeners.len(), "resize listener released");
            removed
        };
        drop(removed);
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
