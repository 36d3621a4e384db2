//! Presentation-facing types.
//!
//! Rendering itself belongs to the host application. This layer only defines what
//! it gets to render:
//!
//! ```text
//! AppState → compute_viewmodel → CatalogViewModel → (host renderer)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Immutable view model snapshots

pub mod viewmodel;

pub use viewmodel::{
    CatalogViewModel, EmptyState, FilterChip, GalleryView, HeaderInfo, MenuLine, MenuModalView, RecordCard,
};
