//! In-memory feed source.
//!
//! Holds feed bodies as strings. Useful when the catalog is embedded with
//! `include_str!` or assembled by a host application.

use crate::domain::error::{CatalogError, Result};
use crate::feeds::source::{Feed, FeedSource};
use futures_util::future::{self, BoxFuture};
use std::collections::HashMap;

/// Feed source serving bodies from memory.
///
/// A feed without a body fails to fetch, which fails the whole load.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    bodies: HashMap<Feed, String>,
}

impl StaticSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from the three feed bodies.
    pub fn from_bodies(
        records: impl Into<String>,
        food_types: impl Into<String>,
        zones: impl Into<String>,
    ) -> Self {
        Self::new()
            .with(Feed::Records, records)
            .with(Feed::FoodTypes, food_types)
            .with(Feed::Zones, zones)
    }

    /// Sets the body of `feed`.
    #[must_use]
    pub fn with(mut self, feed: Feed, body: impl Into<String>) -> Self {
        self.bodies.insert(feed, body.into());
        self
    }
}

impl FeedSource for StaticSource {
    fn fetch(&self, feed: Feed) -> BoxFuture<'_, Result<String>> {
        let result = self
            .bodies
            .get(&feed)
            .cloned()
            .ok_or_else(|| CatalogError::DataLoad(format!("{feed} feed is not available")));
        Box::pin(future::ready(result))
    }
}
