//! Path helpers for configuration values.
//!
//! Configured directories may be written relative to the user's home (`~/...`).
//! These helpers resolve them against `$HOME` and pick the default data location.

use std::path::PathBuf;

/// Returns the user's home directory from `$HOME`, if set and non-empty.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Expands a leading `~` against `home`.
///
/// Paths without a leading `~` (and `~user` forms) are returned unchanged, as
/// are all paths when `home` is `None`.
///
/// # Examples
///
/// ```
/// use dinescope::infrastructure::expand_tilde_with;
/// use std::path::{Path, PathBuf};
///
/// let home = Some(Path::new("/home/ana"));
/// assert_eq!(expand_tilde_with("~/feeds", home), PathBuf::from("/home/ana/feeds"));
/// assert_eq!(expand_tilde_with("~", home), PathBuf::from("/home/ana"));
/// assert_eq!(expand_tilde_with("/srv/feeds", home), PathBuf::from("/srv/feeds"));
/// assert_eq!(expand_tilde_with("~/feeds", None), PathBuf::from("~/feeds"));
/// ```
#[must_use]
pub fn expand_tilde_with(path: &str, home: Option<&std::path::Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Expands a leading `~` against `$HOME`.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, home_dir().as_deref())
}

/// Default directory for trace output: `~/.local/share/dinescope`.
///
/// Falls back to a relative `.dinescope` directory when `$HOME` is unset.
#[must_use]
pub fn default_trace_dir() -> PathBuf {
    home_dir().map_or_else(
        || PathBuf::from(".dinescope"),
        |home| home.join(".local").join("share").join("dinescope"),
    )
}
