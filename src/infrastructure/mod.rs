//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{default_trace_dir, expand_tilde, expand_tilde_with, home_dir};
