//! Feed layer: where catalog JSON comes from and how it is loaded.
//!
//! # Modules
//!
//! - `source`: [`FeedSource`] trait and the [`Feed`] identifiers
//! - `directory`: JSON files in a data directory, read with `tokio::fs`
//! - `memory`: bodies held in memory
//! - `loader`: joins the three fetches and parses them into a [`Catalog`]

pub mod directory;
pub mod loader;
pub mod memory;
pub mod source;

pub use directory::{DirectorySource, FeedFiles};
pub use loader::{load_catalog, Catalog};
pub use memory::StaticSource;
pub use source::{Feed, FeedSource};
