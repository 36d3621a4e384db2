//! Responsive auxiliary filter panel.

/// Width below which the filter panel starts collapsed.
pub const DEFAULT_PANEL_BREAKPOINT: u32 = 768;

/// Collapse state of the auxiliary filter panel.
///
/// The panel follows the viewport: crossing the breakpoint collapses it (narrow)
/// or expands it (wide). A manual [`toggle`](Self::toggle) sticks until the next
/// crossing, so resizing within the same side of the breakpoint does not undo
/// the user's choice.
///
/// # Example
///
/// ```
/// use dinescope::viewport::FilterPanel;
///
/// let mut panel = FilterPanel::new(768);
/// panel.on_resize(1280);
/// assert!(!panel.is_collapsed());
///
/// panel.on_resize(600);
/// assert!(panel.is_collapsed());
///
/// panel.toggle();
/// panel.on_resize(640);
/// assert!(!panel.is_collapsed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    breakpoint: u32,
    narrow: Option<bool>,
    collapsed: bool,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_BREAKPOINT)
    }
}

impl FilterPanel {
    #[must_use]
    pub const fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            narrow: None,
            collapsed: false,
        }
    }

    /// Applies a new viewport width. Returns `true` if the collapse state changed.
    pub fn on_resize(&mut self, width: u32) -> bool {
        let narrow = width < self.breakpoint;
        if self.narrow == Some(narrow) {
            return false;
        }

        self.narrow = Some(narrow);
        let changed = self.collapsed != narrow;
        self.collapsed = narrow;

        if changed {
            tracing::debug!(width, collapsed = narrow, "filter panel crossed breakpoint");
        }
        changed
    }

    /// Flips the panel regardless of width.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_resize_sets_state() {
        let mut panel = FilterPanel::new(768);
        assert!(panel.on_resize(500));
        assert!(panel.is_collapsed());
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let mut panel = FilterPanel::new(768);
        panel.on_resize(768);
        assert!(!panel.is_collapsed());
        panel.on_resize(767);
        assert!(panel.is_collapsed());
    }

    #[test]
    fn test_manual_toggle_survives_same_side_resize() {
        let mut panel = FilterPanel::new(768);
        panel.on_resize(1024);
        panel.toggle();
        assert!(panel.is_collapsed());
        assert!(!panel.on_resize(900));
        assert!(panel.is_collapsed());
        assert!(!panel.on_resize(400));
        assert!(panel.is_collapsed());
        panel.on_resize(1200);
        assert!(!panel.is_collapsed());
    }
}
