//! Domain layer for the catalog browser.
//!
//! Core data types, independent of how feeds are fetched or how the view model
//! is rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`record`]: Restaurant record model and its derived views
//! - [`lookup`]: Food-type and zone code tables
//!
//! # Examples
//!
//! ```
//! use dinescope::domain::{CodeEntry, CodeTable, Record};
//!
//! let foods = CodeTable::new(vec![CodeEntry::new("F1", "Korean")], "unknown");
//! let record = Record::new("R1", "Bibimbap House").with_food_codes("F1,F7");
//! let names: Vec<&str> = record
//!     .food_codes()
//!     .into_iter()
//!     .map(|code| foods.name_of(Some(code)))
//!     .collect();
//! assert_eq!(names, vec!["Korean", "unknown"]);
//! ```

pub mod error;
pub mod lookup;
pub mod record;

pub use error::{CatalogError, Result};
pub use lookup::{CodeEntry, CodeTable, UNKNOWN_FOOD, UNKNOWN_ZONE};
pub use record::{BannerImage, GeoPoint, MenuEntry, Record};
