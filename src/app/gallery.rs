//! Photo gallery state machine.
//!
//! # States
//!
//! - **Closed**: no images shown
//! - **Open**: a non-empty image list and a current index within bounds
//!
//! Navigation never wraps: `show_prev` at the first image and `show_next` at the
//! last image do nothing. Horizontal swipes navigate once they travel at least
//! [`SWIPE_THRESHOLD`] units; a rightward drag goes back, a leftward drag goes
//! forward.

/// Minimum horizontal travel for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// Outcome of a completed touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Travel below threshold, or no gesture was in progress.
    Ignored,
    /// Rightward drag; moved (or tried to move) to the previous image.
    Previous,
    /// Leftward drag; moved (or tried to move) to the next image.
    Next,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum View {
    #[default]
    Closed,
    Open { images: Vec<String>, index: usize },
}

/// Gallery state: which images are open, where, and any touch in progress.
///
/// # Example
///
/// ```
/// use dinescope::app::gallery::Gallery;
///
/// let mut gallery = Gallery::new();
/// gallery.open(vec!["a".into(), "b".into(), "c".into()], 5);
/// assert_eq!(gallery.index(), 2);
///
/// gallery.show_next();
/// assert_eq!(gallery.index(), 2);
///
/// gallery.show_prev();
/// assert_eq!(gallery.current_image(), Some("b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    view: View,
    touch_start: Option<f32>,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gallery on `images`, starting at `start` (clamped into range).
    ///
    /// Does nothing when `images` is empty. Any pending touch is discarded.
    pub fn open(&mut self, images: Vec<String>, start: usize) {
        if images.is_empty() {
            tracing::debug!("gallery open ignored, no images");
            return;
        }

        let index = start.min(images.len() - 1);
        tracing::debug!(image_count = images.len(), index, "gallery opened");

        self.view = View::Open { images, index };
        self.touch_start = None;
    }

    /// Closes the gallery, dropping its images.
    pub fn close(&mut self) {
        self.view = View::Closed;
        self.touch_start = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.view, View::Open { .. })
    }

    /// Current index; 0 while closed.
    #[must_use]
    pub fn index(&self) -> usize {
        match &self.view {
            View::Open { index, .. } => *index,
            View::Closed => 0,
        }
    }

    /// Images currently open; empty while closed.
    #[must_use]
    pub fn images(&self) -> &[String] {
        match &self.view {
            View::Open { images, .. } => images,
            View::Closed => &[],
        }
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        match &self.view {
            View::Open { images, index } => images.get(*index).map(String::as_str),
            View::Closed => None,
        }
    }

    /// One-based position and total, e.g. `(2, 5)`, while open.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match &self.view {
            View::Open { images, index } => Some((index + 1, images.len())),
            View::Closed => None,
        }
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        let images = self.images();
        images.len() > 1 && self.index() > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        let images = self.images();
        images.len() > 1 && self.index() < images.len() - 1
    }

    pub fn show_prev(&mut self) {
        if !self.has_prev() {
            return;
        }
        if let View::Open { index, .. } = &mut self.view {
            *index -= 1;
        }
    }

    pub fn show_next(&mut self) {
        if !self.has_next() {
            return;
        }
        if let View::Open { index, .. } = &mut self.view {
            *index += 1;
        }
    }

    /// Records the horizontal coordinate where a touch began.
    pub fn touch_start(&mut self, x: f32) {
        self.touch_start = Some(x);
    }

    /// Finishes a touch gesture at horizontal coordinate `x`.
    ///
    /// The recorded start is cleared whatever the outcome.
    pub fn touch_end(&mut self, x: f32) -> Swipe {
        let Some(start) = self.touch_start.take() else {
            return Swipe::Ignored;
        };

        let delta = x - start;
        if !delta.is_finite() || delta.abs() < SWIPE_THRESHOLD {
            tracing::trace!(delta, "swipe below threshold");
            return Swipe::Ignored;
        }

        if delta > 0.0 {
            self.show_prev();
            Swipe::Previous
        } else {
            self.show_next();
            Swipe::Next
        }
    }

    #[must_use]
    pub const fn pending_touch(&self) -> Option<f32> {
        self.touch_start
    }
}
