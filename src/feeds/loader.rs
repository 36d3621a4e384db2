//! Catalog loading: three feeds fetched together, all-or-nothing.
//!
//! The records, food-type and zone feeds are fetched concurrently and joined with
//! `try_join3`. If any fetch or parse fails the whole catalog is unavailable; a
//! partially loaded catalog is never returned. There are no retries and no timeout.

use crate::domain::error::{CatalogError, Result};
use crate::domain::lookup::{CodeEntry, CodeTable, UNKNOWN_FOOD, UNKNOWN_ZONE};
use crate::domain::record::Record;
use crate::feeds::source::{Feed, FeedSource};
use chrono::{DateTime, Utc};
use futures_util::future::try_join3;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use tracing::Instrument;

/// Fully loaded catalog data.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Records in feed order.
    pub records: Vec<Record>,

    /// Food-type lookup table.
    pub food_types: CodeTable,

    /// Zone lookup table.
    pub zones: CodeTable,

    /// When the catalog finished loading.
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Assembles a catalog from parsed feed contents.
    ///
    /// Records sharing an identifier are kept (order is significant for display)
    /// but reported, since lookups by id resolve to the first one.
    pub fn new(records: Vec<Record>, food_types: Vec<CodeEntry>, zones: Vec<CodeEntry>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                tracing::warn!(record_id = %record.id(), "duplicate record identifier in feed");
            }
        }

        Self {
            records,
            food_types: CodeTable::new(food_types, UNKNOWN_FOOD),
            zones: CodeTable::new(zones, UNKNOWN_ZONE),
            loaded_at: Utc::now(),
        }
    }

    /// Catalog with no records and empty lookup tables.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    /// Finds the first record with the given identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }
}

fn parse_feed<T: DeserializeOwned>(feed: Feed, body: &str) -> Result<Vec<T>> {
    serde_json::from_str(body).map_err(|source| CatalogError::Parse {
        feed: feed.name(),
        source,
    })
}

/// Loads the catalog from `source`.
///
/// # Errors
///
/// Returns the first fetch failure, or a parse error if any body is not a JSON
/// array of the expected shape.
///
/// # Examples
///
/// ```
/// use dinescope::feeds::{load_catalog, StaticSource};
/// use futures_util::FutureExt;
///
/// let source = StaticSource::from_bodies(
///     r#"[{"DetailShortInfo":{"faciltId":"R1"}}]"#,
///     r#"[{"codeId":"F1","codeNameCN":"Korean"}]"#,
///     "[]",
/// );
/// let catalog = load_catalog(&source).now_or_never().unwrap()?;
/// assert_eq!(catalog.records.len(), 1);
/// assert_eq!(catalog.food_types.name_of(Some("F1")), "Korean");
/// # Ok::<(), dinescope::CatalogError>(())
/// ```
pub async fn load_catalog(source: &dyn FeedSource) -> Result<Catalog> {
    async move {
        let (records_body, food_body, zone_body) = try_join3(
            source.fetch(Feed::Records),
            source.fetch(Feed::FoodTypes),
            source.fetch(Feed::Zones),
        )
        .await?;

        let records: Vec<Record> = parse_feed(Feed::Records, &records_body)?;
        let food_types: Vec<CodeEntry> = parse_feed(Feed::FoodTypes, &food_body)?;
        let zones: Vec<CodeEntry> = parse_feed(Feed::Zones, &zone_body)?;

        tracing::debug!(
            records = records.len(),
            food_types = food_types.len(),
            zones = zones.len(),
            "catalog loaded"
        );

        Ok(Catalog::new(records, food_types, zones))
    }
    .instrument(tracing::debug_span!("load_catalog"))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::StaticSource;
    use futures_util::FutureExt;

    fn load(source: &StaticSource) -> Result<Catalog> {
        load_catalog(source)
            .now_or_never()
            .expect("static source resolves immediately")
    }

    #[test]
    fn test_load_all_feeds() {
        let source = StaticSource::from_bodies(
            r#"[{"DetailShortInfo":{"faciltId":"R1"}},{"DetailShortInfo":{"faciltId":"R2"}}]"#,
            r#"[{"codeId":"F1","codeNameCN":"Korean"}]"#,
            r#"[{"codeId":"Z1","codeNameCN":"Magic Land"}]"#,
        );
        let catalog = load(&source).unwrap();
        assert_eq!(catalog.records.len(), 2);
        assert_eq!(catalog.zones.name_of(Some("Z1")), "Magic Land");
        assert_eq!(catalog.find("R2").map(Record::id), Some("R2"));
        assert!(catalog.find("R3").is_none());
    }

    #[test]
    fn test_missing_feed_fails_whole_load() {
        let source = StaticSource::new()
            .with(Feed::Records, "[]")
            .with(Feed::FoodTypes, "[]");
        let err = load(&source).unwrap_err();
        assert!(matches!(err, CatalogError::DataLoad(_)));
    }

    #[test]
    fn test_malformed_feed_fails_whole_load() {
        let source = StaticSource::from_bodies("[]", "{not json", "[]");
        let err = load(&source).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { feed: "food types", .. }));
    }

    #[test]
    fn test_null_values_do_not_fail_load() {
        let source = StaticSource::from_bodies(
            r#"[{"DetailShortInfo":{"faciltId":"R1"},"foodTypeCds":"F1","bannerImgList":["a.jpg",null]}]"#,
            r#"[{"codeId":"F1","codeNameCN":null},{"codeId":"F2","codeNameCN":"Noodles"}]"#,
            r#"[{"codeId":"Z1","codeNameCN":""}]"#,
        );
        let catalog = load(&source).unwrap();
        assert_eq!(catalog.food_types.name_of(Some("F1")), UNKNOWN_FOOD);
        assert_eq!(catalog.food_types.name_of(Some("F2")), "Noodles");
        assert_eq!(catalog.zones.name_of(Some("Z1")), UNKNOWN_ZONE);
        assert_eq!(catalog.records[0].gallery_images(), vec!["a.jpg"]);
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let catalog = Catalog::new(
            vec![Record::new("R1", "first"), Record::new("R1", "second")],
            vec![],
            vec![],
        );
        assert_eq!(catalog.records.len(), 2);
        assert_eq!(catalog.find("R1").and_then(Record::local_name), Some("first"));
    }
}
