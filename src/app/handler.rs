//! Event handling and state transition logic.
//!
//! Every user interaction and lifecycle step reaches the state through
//! [`handle_event`]. Events are processed one at a time, in order, on a single
//! thread; each one either mutates [`AppState`] synchronously or asks the runtime
//! for a side effect via an [`Action`].
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `CatalogLoaded`, `LoadFailed`, `Unmount`
//! - **Filters**: `ToggleFood`, `SetFood`, `ToggleZone`, `SetZone`, `Search`, `ClearFilters`
//! - **Gallery**: `OpenGallery`, `OpenImage`, `CloseGallery`, `ShowPrev`, `ShowNext`,
//!   `TouchStart`, `TouchEnd`
//! - **Menu**: `OpenMenu`, `CloseMenu`
//! - **Layout**: `Resize`, `TogglePanel`
//!
//! # Example
//!
//! ```rust
//! use dinescope::{handle_event, Action, AppState, Event, Labels};
//!
//! let mut state = AppState::new(Labels::default(), 768);
//! let (_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert_eq!(actions, vec![Action::LoadFeeds]);
//! # Ok::<(), dinescope::CatalogError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::{CatalogError, Result};
use crate::feeds::Catalog;

/// Events triggered by user input or the session lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Session started; feeds should be loaded.
    Mount,
    /// All three feeds loaded and parsed by the host.
    ///
    /// The catalog is copied into the state. [`Session`](crate::Session) mounts
    /// its own loads directly.
    CatalogLoaded(Box<Catalog>),
    /// At least one feed failed; carries the cause for logging.
    LoadFailed(String),

    /// Adds or removes a food-type code from the multi-select.
    ToggleFood(String),
    /// Quick filter: selects exactly this food type.
    SetFood(String),
    /// Selects a zone, or clears it if already selected.
    ToggleZone(String),
    /// Quick filter: selects this zone.
    SetZone(String),
    /// Replaces the search text.
    Search(String),
    /// Resets food, zone and search together.
    ClearFilters,

    /// Opens the gallery on a record's banner images.
    OpenGallery {
        record_id: String,
        start: usize,
    },
    /// Opens the gallery on one image.
    OpenImage(String),
    CloseGallery,
    ShowPrev,
    ShowNext,
    /// A touch began at horizontal coordinate `x`.
    TouchStart {
        x: f32,
    },
    /// A touch ended at horizontal coordinate `x`.
    TouchEnd {
        x: f32,
    },

    /// Opens the menu modal for a record.
    OpenMenu(String),
    CloseMenu,

    /// Viewport width changed.
    Resize {
        width: u32,
    },
    /// User flipped the filter panel.
    TogglePanel,

    /// Session ending.
    Unmount,
}

impl Event {
    /// Variant name, for spans and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mount => "Mount",
            Self::CatalogLoaded(_) => "CatalogLoaded",
            Self::LoadFailed(_) => "LoadFailed",
            Self::ToggleFood(_) => "ToggleFood",
            Self::SetFood(_) => "SetFood",
            Self::ToggleZone(_) => "ToggleZone",
            Self::SetZone(_) => "SetZone",
            Self::Search(_) => "Search",
            Self::ClearFilters => "ClearFilters",
            Self::OpenGallery { .. } => "OpenGallery",
            Self::OpenImage(_) => "OpenImage",
            Self::CloseGallery => "CloseGallery",
            Self::ShowPrev => "ShowPrev",
            Self::ShowNext => "ShowNext",
            Self::TouchStart { .. } => "TouchStart",
            Self::TouchEnd { .. } => "TouchEnd",
            Self::OpenMenu(_) => "OpenMenu",
            Self::CloseMenu => "CloseMenu",
            Self::Resize { .. } => "Resize",
            Self::TogglePanel => "TogglePanel",
            Self::Unmount => "Unmount",
        }
    }
}

/// Processes an event, mutates state, and returns whether to re-render plus
/// any actions for the runtime.
///
/// # Errors
///
/// Reserved for runtime failures; state transitions themselves degrade to
/// no-ops instead of failing.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Mount => {
            tracing::debug!("session mounted, requesting feeds");
            Ok((false, vec![Action::LoadFeeds]))
        }
        Event::CatalogLoaded(catalog) => {
            state.mount(Ok(catalog.as_ref().clone()));
            Ok((true, vec![]))
        }
        Event::LoadFailed(cause) => {
            state.mount(Err(CatalogError::DataLoad(cause.clone())));
            Ok((true, vec![]))
        }
        Event::ToggleFood(_)
        | Event::SetFood(_)
        | Event::ToggleZone(_)
        | Event::SetZone(_)
        | Event::Search(_)
        | Event::ClearFilters => {
            let before = state.filter.clone();
            match event {
                Event::ToggleFood(code) => state.toggle_food_filter(code),
                Event::SetFood(code) => state.set_food_filter(code),
                Event::ToggleZone(code) => state.toggle_zone_filter(code),
                Event::SetZone(code) => state.set_zone_filter(code),
                Event::Search(text) => state.set_search(text),
                _ => state.clear_filters(),
            }

            let changed = state.filter != before;
            if changed {
                tracing::debug!(
                    food = ?state.filter.food,
                    zone = ?state.filter.zone,
                    search = %state.filter.search,
                    "filters updated"
                );
            }
            Ok((changed, vec![]))
        }
        Event::OpenGallery { .. }
        | Event::OpenImage(_)
        | Event::CloseGallery
        | Event::ShowPrev
        | Event::ShowNext
        | Event::TouchStart { .. }
        | Event::TouchEnd { .. } => {
            let before = state.gallery.clone();
            match event {
                Event::OpenGallery { record_id, start } => state.open_gallery(record_id, *start),
                Event::OpenImage(url) => state.open_image(url),
                Event::CloseGallery => state.close_gallery(),
                Event::ShowPrev => state.show_prev(),
                Event::ShowNext => state.show_next(),
                Event::TouchStart { x } => state.touch_start(*x),
                Event::TouchEnd { x } => {
                    let swipe = state.touch_end(*x);
                    tracing::trace!(?swipe, "touch gesture finished");
                }
                _ => {}
            }

            // Touch bookkeeping alone never needs a redraw.
            let changed = state.gallery.is_open() != before.is_open()
                || state.gallery.index() != before.index()
                || state.gallery.images() != before.images();
            Ok((changed, vec![]))
        }
        Event::OpenMenu(id) => {
            let before = state.modal.selected_id().map(String::from);
            state.open_menu(id);
            Ok((state.modal.selected_id() != before.as_deref(), vec![]))
        }
        Event::CloseMenu => {
            let was_open = state.modal.is_open();
            state.close_menu();
            Ok((was_open, vec![]))
        }
        Event::Resize { width } => Ok((state.panel.on_resize(*width), vec![])),
        Event::TogglePanel => {
            state.panel.toggle();
            Ok((true, vec![]))
        }
        Event::Unmount => {
            tracing::debug!("session unmounting");
            state.close_gallery();
            state.close_menu();
            Ok((false, vec![Action::ReleaseViewport]))
        }
    }
}
