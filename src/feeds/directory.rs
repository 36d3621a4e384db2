//! Directory-backed feed source.
//!
//! Reads each feed from a JSON file inside one data directory using `tokio::fs`.
//! File names default to the ones the catalog was published with and can be
//! overridden through [`FeedFiles`].

use crate::domain::error::{CatalogError, Result};
use crate::feeds::source::{Feed, FeedSource};
use futures_util::future::BoxFuture;
use std::path::PathBuf;

/// File names of the three feeds within the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedFiles {
    pub records: String,
    pub food_types: String,
    pub zones: String,
}

impl Default for FeedFiles {
    fn default() -> Self {
        Self {
            records: Feed::Records.default_file().to_string(),
            food_types: Feed::FoodTypes.default_file().to_string(),
            zones: Feed::Zones.default_file().to_string(),
        }
    }
}

impl FeedFiles {
    #[must_use]
    pub fn file_for(&self, feed: Feed) -> &str {
        match feed {
            Feed::Records => &self.records,
            Feed::FoodTypes => &self.food_types,
            Feed::Zones => &self.zones,
        }
    }
}

/// Feed source reading JSON files from a directory.
///
/// # File Layout
///
/// ```text
/// <root>/
///   mainShortInfo.json     records
///   faciltFoodType.json    food-type codes
///   zoneKindCd.json        zone codes
/// ```
///
/// # Examples
///
/// ```no_run
/// use dinescope::feeds::{DirectorySource, FeedFiles};
/// use std::path::PathBuf;
///
/// let source = DirectorySource::new(PathBuf::from("/srv/catalog"), FeedFiles::default());
/// assert!(source.path_for(dinescope::feeds::Feed::Zones).ends_with("zoneKindCd.json"));
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    files: FeedFiles,
}

impl DirectorySource {
    pub fn new(root: PathBuf, files: FeedFiles) -> Self {
        Self { root, files }
    }

    /// Full path of the file backing `feed`.
    #[must_use]
    pub fn path_for(&self, feed: Feed) -> PathBuf {
        self.root.join(self.files.file_for(feed))
    }
}

impl FeedSource for DirectorySource {
    fn fetch(&self, feed: Feed) -> BoxFuture<'_, Result<String>> {
        let path = self.path_for(feed);

        Box::pin(async move {
            tracing::debug!(feed = %feed, path = ?path, "reading feed file");

            let body = tokio::fs::read_to_string(&path).await.map_err(|e| {
                CatalogError::DataLoad(format!("cannot read {feed} feed at {}: {e}", path.display()))
            })?;

            tracing::trace!(feed = %feed, bytes = body.len(), "feed file read");
            Ok(body)
        })
    }
}
