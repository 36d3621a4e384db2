//! Application state and view model computation.
//!
//! This module defines [`AppState`], the single owner of everything a browsing
//! session knows: the loaded catalog, the load error (if any), the filter
//! selection, the gallery, the menu modal and the filter panel. It is the only
//! thing the event handler mutates.
//!
//! # Architecture
//!
//! `AppState` stores inputs only. Everything the presentation layer displays is
//! derived on demand: [`visible_records`](AppState::visible_records) runs the
//! filter over the catalog, and [`compute_viewmodel`](AppState::compute_viewmodel)
//! packages the whole screen into a [`CatalogViewModel`].
//!
//! # Example
//!
//! ```rust
//! use dinescope::feeds::Catalog;
//! use dinescope::{AppState, CodeEntry, Labels, Record};
//!
//! let catalog = Catalog::new(
//!     vec![Record::new("R1", "Bibimbap House").with_food_codes("F1")],
//!     vec![CodeEntry::new("F1", "Korean")],
//!     vec![],
//! );
//! let mut state = AppState::new(Labels::default(), 768);
//! state.mount(Ok(catalog));
//! state.toggle_food_filter("F1");
//! assert_eq!(state.visible_records().len(), 1);
//! ```

use super::filter::{visible_records, FilterState};
use super::gallery::{Gallery, Swipe};
use super::modal::DetailModal;
use crate::domain::error::Result;
use crate::domain::record::Record;
use crate::feeds::Catalog;
use crate::ui::viewmodel::{
    CatalogViewModel, EmptyState, FilterChip, GalleryView, HeaderInfo, MenuLine, MenuModalView, RecordCard,
};
use crate::viewport::FilterPanel;
use crate::Labels;

/// Central session state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded catalog; empty until mounted.
    pub catalog: Catalog,

    /// User-visible load error. While set, no records are visible.
    pub error_message: Option<String>,

    /// Current filter selection.
    pub filter: FilterState,

    /// Photo gallery.
    pub gallery: Gallery,

    /// Menu modal.
    pub modal: DetailModal,

    /// Responsive filter panel.
    pub panel: FilterPanel,

    /// Display labels and fallbacks.
    pub labels: Labels,
}

impl AppState {
    /// Creates an unmounted state with an empty catalog.
    #[must_use]
    pub fn new(labels: Labels, panel_breakpoint: u32) -> Self {
        let mut catalog = Catalog::empty();
        catalog.food_types.set_fallback(labels.unknown_food.clone());
        catalog.zones.set_fallback(labels.unknown_zone.clone());

        Self {
            catalog,
            error_message: None,
            filter: FilterState::new(),
            gallery: Gallery::new(),
            modal: DetailModal::new(),
            panel: FilterPanel::new(panel_breakpoint),
            labels,
        }
    }

    /// Installs the outcome of the initial catalog load.
    ///
    /// On success the catalog replaces the current one and any error is cleared.
    /// On failure the fixed load-error label is recorded and the cause logged;
    /// nothing retries.
    pub fn mount(&mut self, result: Result<Catalog>) {
        match result {
            Ok(mut catalog) => {
                catalog.food_types.set_fallback(self.labels.unknown_food.clone());
                catalog.zones.set_fallback(self.labels.unknown_zone.clone());

                tracing::debug!(
                    records = catalog.records.len(),
                    food_types = catalog.food_types.len(),
                    zones = catalog.zones.len(),
                    "catalog mounted"
                );

                self.catalog = catalog;
                self.error_message = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "catalog failed to load");
                self.error_message = Some(self.labels.load_error.clone());
            }
        }
    }

    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.error_message.is_some()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.catalog.records
    }

    /// Records passing the current filters, in catalog order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Record> {
        visible_records(&self.catalog.records, &self.filter, self.load_failed())
    }

    #[must_use]
    pub fn find_record(&self, id: &str) -> Option<&Record> {
        self.catalog.find(id)
    }

    #[must_use]
    pub fn food_type_name(&self, code: Option<&str>) -> &str {
        self.catalog.food_types.name_of(code)
    }

    #[must_use]
    pub fn zone_name(&self, code: Option<&str>) -> &str {
        self.catalog.zones.name_of(code)
    }

    /// Display names of a record's food types, unknown codes included as fallback.
    #[must_use]
    pub fn food_type_names(&self, record: &Record) -> Vec<String> {
        record
            .food_codes()
            .into_iter()
            .map(|code| self.food_type_name(Some(code)).to_string())
            .collect()
    }

    pub fn toggle_food_filter(&mut self, code: &str) {
        self.filter.toggle_food(code);
    }

    pub fn set_food_filter(&mut self, code: &str) {
        self.filter.set_food(code);
    }

    pub fn toggle_zone_filter(&mut self, code: &str) {
        self.filter.toggle_zone(code);
    }

    pub fn set_zone_filter(&mut self, code: &str) {
        self.filter.set_zone(code);
    }

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Opens the gallery on a record's banner images.
    ///
    /// Does nothing if the record is unknown or has no usable image.
    pub fn open_gallery(&mut self, record_id: &str, start: usize) {
        let Some(record) = self.catalog.find(record_id) else {
            tracing::debug!(record_id = %record_id, "gallery target not found");
            return;
        };
        let images = record.gallery_images();
        self.gallery.open(images, start);
    }

    /// Opens the gallery on a single image.
    pub fn open_image(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        self.gallery.open(vec![url.to_string()], 0);
    }

    pub fn close_gallery(&mut self) {
        self.gallery.close();
    }

    pub fn show_prev(&mut self) {
        self.gallery.show_prev();
    }

    pub fn show_next(&mut self) {
        self.gallery.show_next();
    }

    pub fn touch_start(&mut self, x: f32) {
        self.gallery.touch_start(x);
    }

    pub fn touch_end(&mut self, x: f32) -> Swipe {
        self.gallery.touch_end(x)
    }

    pub fn open_menu(&mut self, record_id: &str) {
        self.modal.open(record_id, &self.catalog.records);
    }

    pub fn close_menu(&mut self) {
        self.modal.close();
    }

    #[must_use]
    pub fn selected_menu_record(&self) -> Option<&Record> {
        self.modal.selected(&self.catalog.records)
    }

    #[must_use]
    pub fn menu_title(&self) -> String {
        self.modal.title(&self.catalog.records, &self.labels)
    }

    /// Computes the render-ready view of the whole screen.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dinescope::{AppState, CatalogError, Labels};
    ///
    /// let mut state = AppState::new(Labels::default(), 768);
    /// state.mount(Err(CatalogError::DataLoad("offline".into())));
    ///
    /// let vm = state.compute_viewmodel();
    /// assert!(vm.cards.is_empty());
    /// assert_eq!(vm.error.as_deref(), Some(Labels::default().load_error.as_str()));
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> CatalogViewModel {
        let visible = self.visible_records();
        let cards: Vec<RecordCard> = visible.iter().map(|r| self.compute_card(r)).collect();

        CatalogViewModel {
            header: self.compute_header(cards.len()),
            food_chips: self.compute_food_chips(),
            zone_chips: self.compute_zone_chips(),
            search_query: self.filter.search.clone(),
            filters_active: !self.filter.is_empty(),
            panel_collapsed: self.panel.is_collapsed(),
            empty_state: self.compute_empty_state(cards.is_empty()),
            cards,
            gallery: self.compute_gallery(),
            menu_modal: self.compute_menu_modal(),
            error: self.error_message.clone(),
        }
    }

    fn compute_card(&self, record: &Record) -> RecordCard {
        let images = record.gallery_images();

        RecordCard {
            id: record.id().to_string(),
            name: record
                .local_name()
                .filter(|n| !n.is_empty())
                .unwrap_or(self.labels.missing_name.as_str())
                .to_string(),
            alt_name: record.alt_name().map(String::from),
            food_types: self.food_type_names(record),
            zone: self.zone_name(record.zone_code()).to_string(),
            keywords: record.formatted_keywords(),
            thumbnail: images.first().cloned(),
            image_count: images.len(),
            has_menu: !record.menu.is_empty(),
            location: record.location(),
        }
    }

    fn compute_header(&self, visible: usize) -> HeaderInfo {
        HeaderInfo {
            visible,
            total: self.catalog.records.len(),
        }
    }

    fn compute_food_chips(&self) -> Vec<FilterChip> {
        self.catalog
            .food_types
            .entries()
            .iter()
            .map(|entry| FilterChip {
                code: entry.code.clone(),
                label: entry.display_name.clone(),
                active: self.filter.is_food_active(&entry.code),
            })
            .collect()
    }

    fn compute_zone_chips(&self) -> Vec<FilterChip> {
        self.catalog
            .zones
            .entries()
            .iter()
            .map(|entry| FilterChip {
                code: entry.code.clone(),
                label: entry.display_name.clone(),
                active: self.filter.is_zone_active(&entry.code),
            })
            .collect()
    }

    fn compute_empty_state(&self, nothing_visible: bool) -> Option<EmptyState> {
        if !nothing_visible || self.load_failed() {
            return None;
        }

        let labels = &self.labels;
        let total = self.catalog.records.len();
        if total == 0 {
            Some(EmptyState {
                message: labels.empty_catalog.clone(),
                subtitle: labels.empty_catalog_hint.clone(),
            })
        } else {
            Some(EmptyState {
                message: labels.no_matches.clone(),
                subtitle: labels.no_matches_hint.replace("{total}", &total.to_string()),
            })
        }
    }

    fn compute_gallery(&self) -> Option<GalleryView> {
        let (position, total) = self.gallery.position()?;
        Some(GalleryView {
            image_url: self.gallery.current_image()?.to_string(),
            position,
            total,
            has_prev: self.gallery.has_prev(),
            has_next: self.gallery.has_next(),
        })
    }

    fn compute_menu_modal(&self) -> Option<MenuModalView> {
        let record = self.selected_menu_record()?;
        Some(MenuModalView {
            title: self.menu_title(),
            entries: record
                .menu
                .iter()
                .map(|entry| MenuLine {
                    local: entry.local.clone().unwrap_or_default(),
                    alternate: entry.alternate.clone().unwrap_or_default(),
                })
                .collect(),
        })
    }
}
