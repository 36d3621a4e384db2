//! Feed source abstraction.
//!
//! This module defines the [`FeedSource`] trait that abstracts over where the three
//! JSON feeds come from. The loader only needs the raw body of each feed; whether it
//! is read from disk, embedded in the binary or served some other way is up to the
//! implementation.

use crate::domain::error::Result;
use futures_util::future::BoxFuture;

/// Default file name of the records feed.
pub const RECORDS_FILE: &str = "mainShortInfo.json";

/// Default file name of the food-type feed.
pub const FOOD_TYPES_FILE: &str = "faciltFoodType.json";

/// Default file name of the zone feed.
pub const ZONES_FILE: &str = "zoneKindCd.json";

/// The three feeds that make up a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    /// Array of restaurant records.
    Records,
    /// Array of food-type code entries.
    FoodTypes,
    /// Array of zone code entries.
    Zones,
}

impl Feed {
    /// Short name used in logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::FoodTypes => "food types",
            Self::Zones => "zones",
        }
    }

    #[must_use]
    pub const fn default_file(self) -> &'static str {
        match self {
            Self::Records => RECORDS_FILE,
            Self::FoodTypes => FOOD_TYPES_FILE,
            Self::Zones => ZONES_FILE,
        }
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstraction over feed backends.
///
/// Each call fetches one feed body. Fetches are independent, so the loader issues
/// all three at once and joins them.
///
/// # Implementations
///
/// - [`DirectorySource`](crate::feeds::DirectorySource): reads JSON files from a directory
/// - [`StaticSource`](crate::feeds::StaticSource): serves bodies held in memory
///
/// # Examples
///
/// ```
/// use dinescope::feeds::{Feed, FeedSource, StaticSource};
/// use futures_util::FutureExt;
///
/// let source = StaticSource::new().with(Feed::Zones, "[]");
/// let body = source.fetch(Feed::Zones).now_or_never().unwrap()?;
/// assert_eq!(body, "[]");
/// # Ok::<(), dinescope::CatalogError>(())
/// ```
pub trait FeedSource: Send + Sync {
    /// Fetches the raw body of `feed`.
    ///
    /// # Errors
    ///
    /// Returns a data-load error if the feed is unavailable.
    fn fetch(&self, feed: Feed) -> BoxFuture<'_, Result<String>>;
}
