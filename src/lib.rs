//! Dinescope: the headless core of a restaurant catalog browser.
//!
//! Dinescope loads a catalog of dining venues from three JSON feeds, lets the
//! presentation layer filter and search it, and drives the photo gallery and
//! menu modal that sit on top of the listing:
//! - All-or-nothing loading of records, food-type codes and zone codes
//! - Zone, food-type and free-text filtering that preserves catalog order
//! - Code lookup tables with display fallbacks
//! - A bounded photo gallery with swipe navigation
//! - A menu modal keyed by record id
//! - A responsive filter panel fed by viewport resize events
//!
//! Rendering is left to the host. Every frame is described by a
//! [`CatalogViewModel`] computed from [`AppState`].

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Session (lib.rs)                                   │  ← Lifecycle
//! │  - mount / dispatch / unmount                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, filters, gallery, menu modal     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Feeds         │   │ Viewport      │   │ UI            │
//! │ (feeds/)      │   │ (viewport/)   │   │ (ui/)         │
//! │ - JSON I/O    │   │ - Resize subs │   │ - View models │
//! │ - Catalog     │   │ - Panel       │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Records, code tables, errors (domain/)           │
//! │  - Path expansion (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a local OTLP JSON file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! data_dir = "~/catalog"
//! trace_level = "debug"
//! panel_breakpoint = 768
//!
//! [labels]
//! unknown_zone = "Other area"
//! ```
//!
//! # Example
//!
//! ```rust
//! use dinescope::{initialize, Config, Event};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("mainShortInfo.json"), r#"[
//!     {"DetailShortInfo": {"faciltId": "R1", "faciltNameCN": "Bibimbap House"},
//!      "foodTypeCds": "F1", "zoneType": "Z1"}
//! ]"#).unwrap();
//! std::fs::write(dir.path().join("faciltFoodType.json"),
//!     r#"[{"codeId": "F1", "codeNameCN": "Korean"}]"#).unwrap();
//! std::fs::write(dir.path().join("zoneKindCd.json"),
//!     r#"[{"codeId": "Z1", "codeNameCN": "Magic Land"}]"#).unwrap();
//!
//! let config = Config {
//!     data_dir: dir.path().display().to_string(),
//!     ..Default::default()
//! };
//! let mut session = initialize(&config)?;
//! session.send(Event::Search("bibim".into()))?;
//! assert_eq!(session.viewmodel().cards.len(), 1);
//! session.unmount();
//! # Ok::<(), dinescope::CatalogError>(())
//! ```

pub mod app;
pub mod domain;
pub mod feeds;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod viewport;

pub use app::{handle_event, Action, AppState, Event, FilterState, Gallery, Swipe};
pub use domain::{CatalogError, CodeEntry, CodeTable, Record, Result};
pub use ui::CatalogViewModel;

use crate::feeds::{load_catalog, DirectorySource, FeedFiles, FeedSource};
use crate::infrastructure::expand_tilde;
use crate::viewport::{ResizeSubscription, Viewport, DEFAULT_PANEL_BREAKPOINT};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Display strings used where data is missing or loading failed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Name shown for food-type codes missing from the lookup table.
    pub unknown_food: String,
    /// Name shown for zone codes missing from the lookup table.
    pub unknown_zone: String,
    /// Heading of the menu section.
    pub menu_title: String,
    /// Appended to the record name in the menu modal title.
    pub menu_title_suffix: String,
    /// Stand-in for a record without a local name.
    pub missing_name: String,
    /// The single message shown when any feed fails to load.
    pub load_error: String,
    /// Empty-state heading when the catalog has no records.
    pub empty_catalog: String,
    pub empty_catalog_hint: String,
    /// Empty-state heading when filters hide every record.
    pub no_matches: String,
    /// `{total}` is replaced with the catalog size.
    pub no_matches_hint: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            unknown_food: domain::UNKNOWN_FOOD.to_string(),
            unknown_zone: domain::UNKNOWN_ZONE.to_string(),
            menu_title: "Menu".to_string(),
            menu_title_suffix: " - Menu".to_string(),
            missing_name: "N/A".to_string(),
            load_error: "Unable to load data. Make sure all JSON files exist.".to_string(),
            empty_catalog: "No restaurants loaded".to_string(),
            empty_catalog_hint: "The catalog feed contained no entries".to_string(),
            no_matches: "No restaurants match the current filters".to_string(),
            no_matches_hint: "Clear filters to see all {total}".to_string(),
        }
    }
}

impl Labels {
    fn override_from(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "unknown_food" => &mut self.unknown_food,
            "unknown_zone" => &mut self.unknown_zone,
            "menu_title" => &mut self.menu_title,
            "menu_title_suffix" => &mut self.menu_title_suffix,
            "missing_name" => &mut self.missing_name,
            "load_error" => &mut self.load_error,
            "empty_catalog" => &mut self.empty_catalog,
            "empty_catalog_hint" => &mut self.empty_catalog_hint,
            "no_matches" => &mut self.no_matches,
            "no_matches_hint" => &mut self.no_matches_hint,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Session configuration.
///
/// Read from a TOML file, a string map handed over by an embedding host, or
/// built directly. Every key is optional.
///
/// # Example
///
/// ```toml
/// data_dir = "~/catalog"
/// records_file = "mainShortInfo.json"
/// food_types_file = "faciltFoodType.json"
/// zones_file = "zoneKindCd.json"
/// trace_level = "debug"
/// trace_dir = "~/.local/share/dinescope"
/// panel_breakpoint = 768
/// viewport_width = 1280
///
/// [labels]
/// load_error = "Catalog unavailable"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the three feed files. `~` expands to `$HOME`.
    /// Default: `"."`
    pub data_dir: String,

    /// Records feed file name. Default: `mainShortInfo.json`
    pub records_file: String,

    /// Food-type code feed file name. Default: `faciltFoodType.json`
    pub food_types_file: String,

    /// Zone code feed file name. Default: `zoneKindCd.json`
    pub zones_file: String,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the OTLP trace file. Default: `~/.local/share/dinescope`
    pub trace_dir: Option<String>,

    /// Widths below this collapse the filter panel. Default: 768
    pub panel_breakpoint: u32,

    /// Viewport width assumed at mount, before the host reports one. Default: 1280
    pub viewport_width: u32,

    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        let files = FeedFiles::default();
        Self {
            data_dir: ".".to_string(),
            records_file: files.records,
            food_types_file: files.food_types,
            zones_file: files.zones,
            trace_level: None,
            trace_dir: None,
            panel_breakpoint: DEFAULT_PANEL_BREAKPOINT,
            viewport_width: 1280,
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Unknown keys are ignored and unparseable numbers fall back to their
    /// defaults. Labels use `labels.<name>` keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dinescope::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/srv/catalog".to_string());
    /// map.insert("panel_breakpoint".to_string(), "wide".to_string());
    /// map.insert("labels.missing_name".to_string(), "(unnamed)".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_dir, "/srv/catalog");
    /// assert_eq!(config.panel_breakpoint, 768);
    /// assert_eq!(config.labels.missing_name, "(unnamed)");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();

        for (key, value) in map {
            match key.as_str() {
                "data_dir" => config.data_dir = value.clone(),
                "records_file" => config.records_file = value.clone(),
                "food_types_file" => config.food_types_file = value.clone(),
                "zones_file" => config.zones_file = value.clone(),
                "trace_level" => config.trace_level = Some(value.clone()),
                "trace_dir" => config.trace_dir = Some(value.clone()),
                "panel_breakpoint" => {
                    if let Ok(width) = value.trim().parse() {
                        config.panel_breakpoint = width;
                    }
                }
                "viewport_width" => {
                    if let Ok(width) = value.trim().parse() {
                        config.viewport_width = width;
                    }
                }
                other => {
                    let known = other
                        .strip_prefix("labels.")
                        .is_some_and(|label| config.labels.override_from(label, value));
                    if !known {
                        tracing::debug!(key = %other, "ignoring unknown config key");
                    }
                }
            }
        }

        config
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] on malformed TOML or mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Feed file names within [`data_path`](Self::data_path).
    #[must_use]
    pub fn feed_files(&self) -> FeedFiles {
        FeedFiles {
            records: self.records_file.clone(),
            food_types: self.food_types_file.clone(),
            zones: self.zones_file.clone(),
        }
    }

    /// Data directory with `~` expanded.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }
}

/// A mounted browsing session.
///
/// Owns the state, the viewport and the resize subscription feeding the filter
/// panel. Resize notifications are queued by the listener and applied by
/// [`pump`](Self::pump), so the listener never touches state directly.
///
/// Dropping a session unmounts it.
pub struct Session {
    state: AppState,
    viewport: Viewport,
    subscription: Option<ResizeSubscription>,
    pending: Rc<RefCell<VecDeque<Event>>>,
    source: Box<dyn FeedSource>,
    load_requested: bool,
}

impl Session {
    /// Mounts a session reading feeds from `config`'s data directory.
    ///
    /// # Errors
    ///
    /// Feed failures do not error; they leave the session in the load-error
    /// state. Errors come only from event handling.
    pub async fn mount(config: &Config) -> Result<Self> {
        let source = DirectorySource::new(config.data_path(), config.feed_files());
        Self::mount_with(config, Box::new(source)).await
    }

    /// Mounts a session over any feed source.
    ///
    /// # Errors
    ///
    /// See [`mount`](Self::mount).
    pub async fn mount_with(config: &Config, source: Box<dyn FeedSource>) -> Result<Self> {
        let viewport = Viewport::new(config.viewport_width);
        let pending = Rc::new(RefCell::new(VecDeque::new()));

        let queue = Rc::clone(&pending);
        let subscription = viewport.subscribe(move |width| {
            queue.borrow_mut().push_back(Event::Resize { width });
        });

        let mut session = Self {
            state: AppState::new(config.labels.clone(), config.panel_breakpoint),
            viewport,
            subscription: Some(subscription),
            pending,
            source,
            load_requested: false,
        };

        session.apply(&Event::Resize {
            width: config.viewport_width,
        })?;
        session.dispatch(Event::Mount).await?;
        Ok(session)
    }

    /// Handles one event, loading feeds if it asks for them.
    ///
    /// Returns whether the view should be re-rendered.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub async fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut render = self.apply(&event)?;
        if std::mem::take(&mut self.load_requested) {
            render |= self.load().await;
        }
        Ok(render)
    }

    /// Handles one event without waiting on I/O.
    ///
    /// A feed load requested here stays pending until the next
    /// [`dispatch`](Self::dispatch).
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn send(&mut self, event: Event) -> Result<bool> {
        self.apply(&event)
    }

    fn apply(&mut self, event: &Event) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.state, event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(render)
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::LoadFeeds => self.load_requested = true,
            Action::ReleaseViewport => {
                if let Some(subscription) = self.subscription.take() {
                    subscription.unsubscribe();
                    tracing::debug!("resize listener released");
                }
                self.pending.borrow_mut().clear();
            }
        }
    }

    // Mounts the loaded catalog in place; going through `Event::CatalogLoaded`
    // would copy it.
    async fn load(&mut self) -> bool {
        let result = load_catalog(self.source.as_ref()).await;
        self.state.mount(result);
        true
    }

    /// Applies queued resize notifications.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn pump(&mut self) -> Result<bool> {
        let mut render = false;
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else { break };
            render |= self.apply(&event)?;
        }
        Ok(render)
    }

    /// Reports a new viewport width and applies it.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn resize(&mut self, width: u32) -> Result<bool> {
        self.viewport.resize(width);
        self.pump()
    }

    /// Tears the session down, releasing the resize listener.
    ///
    /// Idempotent.
    pub fn unmount(&mut self) {
        if self.subscription.is_none() {
            return;
        }
        if let Err(e) = self.apply(&Event::Unmount) {
            tracing::warn!(error = %e, "unmount handler failed");
        }
        // Release even if the handler did not ask for it.
        self.execute(Action::ReleaseViewport);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn viewmodel(&self) -> CatalogViewModel {
        self.state.compute_viewmodel()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("mounted", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}

/// Starts tracing and mounts a session, blocking until the feeds are loaded.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the runtime cannot be built, and otherwise
/// whatever [`Session::mount`] returns.
///
/// # Example
///
/// ```rust
/// use dinescope::{initialize, Config};
///
/// let config = Config {
///     data_dir: "/nonexistent".to_string(),
///     ..Default::default()
/// };
/// let session = initialize(&config)?;
/// assert!(session.state().load_failed());
/// assert!(session.viewmodel().cards.is_empty());
/// # Ok::<(), dinescope::CatalogError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Session> {
    observability::init_tracing(config);
    tracing::debug!(data_dir = %config.data_dir, "initializing dinescope session");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(Session::mount(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::StaticSource;
    use futures_util::FutureExt;

    fn source() -> Box<dyn FeedSource> {
        Box::new(StaticSource::from_bodies(
            r#"[{"DetailShortInfo": {"faciltId": "R1", "faciltNameCN": "Bibimbap House"},
                 "foodTypeCds": "F1", "zoneType": "Z1", "keyword": "rice#spicy"}]"#,
            r#"[{"codeId": "F1", "codeNameCN": "Korean"}]"#,
            r#"[{"codeId": "Z1", "codeNameCN": "Magic Land"}]"#,
        ))
    }

    fn mounted(config: &Config) -> Session {
        Session::mount_with(config, source())
            .now_or_never()
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_labels_default() {
        let labels = Labels::default();
        assert_eq!(labels.missing_name, "N/A");
        assert_eq!(labels.menu_title_suffix, " - Menu");
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml_str(
            r#"
            data_dir = "/srv/catalog"
            panel_breakpoint = 600

            [labels]
            unknown_zone = "Elsewhere"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, "/srv/catalog");
        assert_eq!(config.panel_breakpoint, 600);
        assert_eq!(config.records_file, "mainShortInfo.json");
        assert_eq!(config.labels.unknown_zone, "Elsewhere");
        assert_eq!(config.labels.missing_name, "N/A");
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        let err = Config::from_toml_str("panel_breakpoint = \"wide\"").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_config_from_map() {
        let map: BTreeMap<String, String> = [
            ("zones_file", "zones.json"),
            ("viewport_width", " 500 "),
            ("labels.bogus", "x"),
            ("labels.no_matches", "Nothing matches"),
            ("trace_level", "debug"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.zones_file, "zones.json");
        assert_eq!(config.viewport_width, 500);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.feed_files().zones, "zones.json");
        assert_eq!(config.labels.no_matches, "Nothing matches");
    }

    #[test]
    fn test_session_mounts_and_filters() {
        let mut session = mounted(&Config::default());
        assert!(!session.state().load_failed());
        assert_eq!(session.state().records().len(), 1);

        assert!(session.send(Event::Search("SPICY".into())).unwrap());
        assert_eq!(session.viewmodel().cards.len(), 1);
        assert!(session.send(Event::SetZone("Z9".into())).unwrap());
        assert!(session.viewmodel().cards.is_empty());
    }

    #[test]
    fn test_session_load_failure() {
        let broken = Box::new(StaticSource::new().with(crate::feeds::Feed::Records, "[]"));
        let session = Session::mount_with(&Config::default(), broken)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert!(session.state().load_failed());
        let vm = session.viewmodel();
        assert!(vm.cards.is_empty());
        assert_eq!(vm.error.as_deref(), Some(Labels::default().load_error.as_str()));
    }

    #[test]
    fn test_remount_reloads_catalog() {
        let mut session = mounted(&Config::default());
        let first = session.state().catalog.loaded_at;

        let render = session.dispatch(Event::Mount).now_or_never().unwrap().unwrap();
        assert!(render);
        assert_eq!(session.state().records().len(), 1);
        assert!(session.state().catalog.loaded_at >= first);
        assert_eq!(session.state().zone_name(Some("Z1")), "Magic Land");
    }

    #[test]
    fn test_resize_feeds_panel() {
        let mut session = mounted(&Config::default());
        assert!(!session.state().panel.is_collapsed());

        assert!(session.resize(400).unwrap());
        assert!(session.state().panel.is_collapsed());

        session.viewport().resize(1000);
        assert!(session.state().panel.is_collapsed());
        assert!(session.pump().unwrap());
        assert!(!session.state().panel.is_collapsed());
    }

    #[test]
    fn test_unmount_releases_listener() {
        let mut session = mounted(&Config::default());
        let viewport = session.viewport().clone();
        assert_eq!(viewport.listener_count(), 1);

        session.unmount();
        assert!(!session.is_mounted());
        assert_eq!(viewport.listener_count(), 0);

        session.unmount();
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_drop_releases_listener() {
        let session = mounted(&Config::default());
        let viewport = session.viewport().clone();
        drop(session);
        assert_eq!(viewport.listener_count(), 0);
    }
}
