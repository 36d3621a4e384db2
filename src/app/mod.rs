//! Application layer coordinating state, events, and actions.
//!
//! Sits between the session runtime (`lib.rs`) and the domain/feed layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Catalog Load ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Filter state and visible-record computation
//! - [`gallery`]: Photo gallery state machine with swipe navigation
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modal`]: Menu modal state
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod filter;
pub mod gallery;
pub mod handler;
pub mod modal;
pub mod state;

pub use actions::Action;
pub use filter::{visible_records, FilterState};
pub use gallery::{Gallery, Swipe, SWIPE_THRESHOLD};
pub use handler::{handle_event, Event};
pub use modal::DetailModal;
pub use state::AppState;
