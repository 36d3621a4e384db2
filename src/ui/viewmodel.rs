//! View model types representing renderable catalog state.
//!
//! These are immutable snapshots computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel). They
//! carry display-ready strings (lookup names resolved, keywords formatted,
//! fallbacks applied) and no behaviour; the presentation layer reads them and
//! sends user interactions back as [`Event`](crate::app::Event)s.

use crate::domain::record::GeoPoint;

/// Complete view of the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewModel {
    /// Visible records, in catalog order.
    pub cards: Vec<RecordCard>,

    /// Result counts.
    pub header: HeaderInfo,

    /// Food-type filter choices in feed order.
    pub food_chips: Vec<FilterChip>,

    /// Zone filter choices in feed order.
    pub zone_chips: Vec<FilterChip>,

    /// Search text as typed.
    pub search_query: String,

    /// Whether any filter narrows the result.
    pub filters_active: bool,

    /// Whether the auxiliary filter panel is collapsed.
    pub panel_collapsed: bool,

    /// Set when nothing is visible for a reason other than a load failure.
    pub empty_state: Option<EmptyState>,

    /// Open gallery, if any.
    pub gallery: Option<GalleryView>,

    /// Open menu modal, if any.
    pub menu_modal: Option<MenuModalView>,

    /// User-visible load error.
    pub error: Option<String>,
}

/// One record as shown in the result list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCard {
    pub id: String,

    /// Local display name, or the missing-name label.
    pub name: String,

    pub alt_name: Option<String>,

    /// Food-type display names; unknown codes appear as the fallback label.
    pub food_types: Vec<String>,

    /// Zone display name or fallback.
    pub zone: String,

    /// Keywords with `#` separators rendered as commas.
    pub keywords: String,

    /// First usable banner image.
    pub thumbnail: Option<String>,

    /// Number of usable banner images.
    pub image_count: usize,

    pub has_menu: bool,

    /// Coordinates for map links.
    pub location: Option<GeoPoint>,
}

/// Header counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    pub visible: usize,
    pub total: usize,
}

/// One selectable filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub code: String,
    pub label: String,
    pub active: bool,
}

/// Shown when the filtered list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Open gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub image_url: String,

    /// One-based position of the current image.
    pub position: usize,

    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Open menu modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModalView {
    pub title: String,
    pub entries: Vec<MenuLine>,
}

/// One menu line; missing descriptions are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub local: String,
    pub alternate: String,
}
