//! Menu detail modal state.
//!
//! The modal is either closed or showing one record's menu. It stores the record
//! identifier rather than a copy; the record is resolved against the loaded catalog
//! when needed.

use crate::domain::record::Record;
use crate::Labels;

/// Which record's menu, if any, is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    selected: Option<String>,
}

impl DetailModal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal on the record with identifier `id`.
    ///
    /// Does nothing if no record in `records` has that identifier.
    pub fn open(&mut self, id: &str, records: &[Record]) {
        if records.iter().any(|r| r.id() == id) {
            tracing::debug!(record_id = %id, "menu modal opened");
            self.selected = Some(id.to_string());
        } else {
            tracing::debug!(record_id = %id, "menu modal target not found");
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolves the selected record in `records`.
    #[must_use]
    pub fn selected<'a>(&self, records: &'a [Record]) -> Option<&'a Record> {
        let id = self.selected.as_deref()?;
        records.iter().find(|r| r.id() == id)
    }

    /// Modal title: the placeholder while closed, else `"{name}{suffix}"`.
    ///
    /// # Example
    ///
    /// ```
    /// use dinescope::app::modal::DetailModal;
    /// use dinescope::{Labels, Record};
    ///
    /// let records = vec![Record::new("R1", "Bibimbap House")];
    /// let labels = Labels::default();
    /// let mut modal = DetailModal::new();
    /// assert_eq!(modal.title(&records, &labels), "Menu");
    ///
    /// modal.open("R1", &records);
    /// assert_eq!(modal.title(&records, &labels), "Bibimbap House - Menu");
    /// ```
    #[must_use]
    pub fn title(&self, records: &[Record], labels: &Labels) -> String {
        match self.selected(records) {
            None => labels.menu_title.clone(),
            Some(record) => {
                let name = record
                    .local_name()
                    .filter(|n| !n.is_empty())
                    .unwrap_or(labels.missing_name.as_str());
                format!("{name}{}", labels.menu_title_suffix)
            }
        }
    }
}
