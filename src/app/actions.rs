//! Actions representing side effects for the session runtime.
//!
//! The event handler never performs I/O. When an event calls for something
//! outside the state (fetching feeds, releasing a listener), the handler returns
//! an [`Action`] and the runtime carries it out.

/// Side effects to be executed by the session runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch the three feeds and report back with
    /// [`Event::CatalogLoaded`](crate::app::Event::CatalogLoaded) or
    /// [`Event::LoadFailed`](crate::app::Event::LoadFailed).
    LoadFeeds,

    /// Release the viewport resize subscription.
    ReleaseViewport,
}
