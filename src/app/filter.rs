//! Filter state and the visible-record computation.
//!
//! A record is visible when it passes three independent checks:
//!
//! 1. **Zone**: no zone selected, or the record's zone equals the selection
//! 2. **Food**: no food types selected, or the record shares at least one code
//!    with the selection (OR across selected food types)
//! 3. **Search**: empty query, or the lowercased query is a substring of the
//!    record's local name, alternate name, keywords or menu text
//!
//! The checks are combined with AND. Output keeps the input order. When the
//! catalog failed to load nothing is visible, regardless of filters.

use crate::domain::record::Record;
use std::collections::BTreeSet;

/// The user's current filter selection.
///
/// Mutated only by explicit user actions; [`clear`](Self::clear) resets all
/// three parts together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected food-type codes (multi-select).
    pub food: BTreeSet<String>,

    /// Selected zone code (single-select).
    pub zone: Option<String>,

    /// Free-text search as typed.
    pub search: String,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `code` to the food selection, or removes it if already selected.
    pub fn toggle_food(&mut self, code: &str) {
        if !self.food.remove(code) {
            self.food.insert(code.to_string());
        }
    }

    /// Replaces the food selection with exactly `code`.
    pub fn set_food(&mut self, code: &str) {
        self.food.clear();
        self.food.insert(code.to_string());
    }

    /// Selects `code` as the zone, or clears the zone if it is already selected.
    pub fn toggle_zone(&mut self, code: &str) {
        if self.zone.as_deref() == Some(code) {
            self.zone = None;
        } else {
            self.zone = Some(code.to_string());
        }
    }

    /// Selects `code` as the zone unconditionally.
    pub fn set_zone(&mut self, code: &str) {
        self.zone = Some(code.to_string());
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Clears food, zone and search together.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_food_active(&self, code: &str) -> bool {
        self.food.contains(code)
    }

    #[must_use]
    pub fn is_zone_active(&self, code: &str) -> bool {
        self.zone.as_deref() == Some(code)
    }

    /// Returns `true` when no filter narrows the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.food.is_empty() && self.zone.is_none() && self.search.trim().is_empty()
    }

    /// Normalized search needle: trimmed and lowercased, `None` when blank.
    fn needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    fn zone_matches(&self, record: &Record) -> bool {
        self.zone
            .as_deref()
            .map_or(true, |zone| record.zone_code() == Some(zone))
    }

    fn food_matches(&self, record: &Record) -> bool {
        self.food.is_empty()
            || record
                .food_codes()
                .into_iter()
                .any(|code| self.food.contains(code))
    }

    /// Checks a record against all three predicates. `needle` comes from
    /// [`needle`](Self::needle), computed once per pass.
    fn admits(&self, record: &Record, needle: Option<&str>) -> bool {
        self.zone_matches(record)
            && self.food_matches(record)
            && needle.map_or(true, |n| search_matches(record, n))
    }
}

/// Case-insensitive substring test against the searchable text of a record.
///
/// `needle` must already be lowercased.
fn search_matches(record: &Record, needle: &str) -> bool {
    let fields = [record.local_name(), record.alt_name(), record.keywords()];

    fields
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(needle))
        || record.menu_text().to_lowercase().contains(needle)
}

/// Computes the records visible under `filter`.
///
/// Returns an empty list when `load_failed` is set. Otherwise returns the
/// matching records in their original order.
///
/// # Examples
///
/// ```
/// use dinescope::app::filter::{visible_records, FilterState};
/// use dinescope::Record;
///
/// let records = vec![Record::new("R1", "Bibimbap House").with_food_codes("F1,F2").with_zone("Z1")];
/// let mut filter = FilterState::new();
///
/// filter.toggle_food("F2");
/// assert_eq!(visible_records(&records, &filter, false).len(), 1);
///
/// filter.set_food("F3");
/// assert!(visible_records(&records, &filter, false).is_empty());
/// ```
#[must_use]
pub fn visible_records<'a>(records: &'a [Record], filter: &FilterState, load_failed: bool) -> Vec<&'a Record> {
    let _span = tracing::debug_span!("visible_records",
        total_records = records.len(),
        food_filters = filter.food.len(),
        zone = ?filter.zone,
        query_len = filter.search.len(),
        load_failed
    ).entered();

    if load_failed {
        return Vec::new();
    }

    let needle = filter.needle();

    let visible: Vec<&Record> = records
        .iter()
        .filter(|record| filter.admits(record, needle.as_deref()))
        .collect();

    tracing::debug!(visible_count = visible.len(), "filter applied");
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("R1", "Bibimbap House")
                .with_alt_name("비빔밥 하우스")
                .with_food_codes("F1,F2")
                .with_zone("Z1")
                .with_keywords("#rice#korean"),
            Record::new("R2", "Pizza Corner")
                .with_food_codes("F3")
                .with_zone("Z2")
                .with_menu_entry("Margherita PIZZA", "마르게리타"),
            Record::new("R3", "Noodle Stand")
                .with_food_codes(" F2 , F4 ")
                .with_zone("Z2"),
            Record::new("R4", "Snack Kiosk"),
        ]
    }

    fn ids<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_identity_when_no_filters() {
        let records = sample();
        let visible = visible_records(&records, &FilterState::new(), false);
        assert_eq!(ids(&visible), vec!["R1", "R2", "R3", "R4"]);
    }

    #[test]
    fn test_load_failure_hides_everything() {
        let records = sample();
        assert!(visible_records(&records, &FilterState::new(), true).is_empty());

        let mut filter = FilterState::new();
        filter.set_zone("Z1");
        assert!(visible_records(&records, &filter, true).is_empty());
    }

    #[test]
    fn test_zone_exact_match() {
        let records = sample();
        let mut filter = FilterState::new();
        filter.set_zone("Z2");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R2", "R3"]);
    }

    #[test]
    fn test_food_is_or_across_selection() {
        let records = sample();
        let mut filter = FilterState::new();
        filter.toggle_food("F3");
        filter.toggle_food("F4");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R2", "R3"]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let records = sample();
        let mut filter = FilterState::new();
        filter.toggle_food("F2");
        filter.set_zone("Z2");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R3"]);

        filter.set_search("bibimbap");
        assert!(visible_records(&records, &filter, false).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample();
        let mut lower = FilterState::new();
        lower.set_search("pizza");
        let mut upper = FilterState::new();
        upper.set_search("PIZZA");
        assert_eq!(
            ids(&visible_records(&records, &lower, false)),
            ids(&visible_records(&records, &upper, false))
        );
        assert_eq!(ids(&visible_records(&records, &lower, false)), vec!["R2"]);
    }

    #[test]
    fn test_search_covers_alt_name_keywords_and_menu() {
        let records = sample();
        let mut filter = FilterState::new();

        filter.set_search("하우스");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R1"]);

        filter.set_search("korean");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R1"]);

        filter.set_search("마르게리타");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R2"]);

        filter.set_search("  margherita  ");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R2"]);
    }

    #[test]
    fn test_search_spans_menu_entries() {
        let records = sample();
        let mut filter = FilterState::new();
        filter.set_search("pizza 마르");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R2"]);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let records = sample();
        let mut filter = FilterState::new();
        filter.set_search("   ");
        assert_eq!(visible_records(&records, &filter, false).len(), records.len());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_food_toggle_is_self_inverse() {
        let mut filter = FilterState::new();
        filter.toggle_food("F1");
        let before = filter.food.clone();
        filter.toggle_food("F2");
        filter.toggle_food("F2");
        assert_eq!(filter.food, before);
        filter.toggle_food("F1");
        assert!(filter.food.is_empty());
    }

    #[test]
    fn test_zone_toggle_is_self_inverse() {
        let mut filter = FilterState::new();
        filter.toggle_zone("Z1");
        filter.toggle_zone("Z1");
        assert_eq!(filter.zone, None);

        filter.set_zone("Z1");
        filter.toggle_zone("Z2");
        assert!(filter.is_zone_active("Z2"));
        filter.toggle_zone("Z2");
        assert_eq!(filter.zone, None);
    }

    #[test]
    fn test_set_replaces_selection() {
        let mut filter = FilterState::new();
        filter.toggle_food("F1");
        filter.toggle_food("F2");
        filter.set_food("F3");
        assert_eq!(filter.food.iter().collect::<Vec<_>>(), vec!["F3"]);

        filter.set_zone("Z1");
        filter.set_zone("Z1");
        assert!(filter.is_zone_active("Z1"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = FilterState::new();
        filter.toggle_food("F1");
        filter.set_zone("Z1");
        filter.set_search("rice");
        filter.clear();
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_all_predicates_combine() {
        let records = sample();
        let mut filter = FilterState::new();
        filter.toggle_food("F2");
        filter.set_search("noodle");
        assert_eq!(ids(&visible_records(&records, &filter, false)), vec!["R3"]);

        filter.set_zone("Z1");
        assert!(visible_records(&records, &filter, false).is_empty());
    }
}
