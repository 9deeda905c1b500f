//! Image gallery controller.

use std::num::NonZeroUsize;

/// Selected position within a fixed, non-empty image sequence.
///
/// The compact carousel (arrows and dots) and the expanded gallery
/// (thumbnails) both drive one `Gallery`; neither keeps its own index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: NonZeroUsize,
    index: usize,
}

impl Gallery {
    /// Create a gallery over `len` images, starting at the first.
    pub fn new(len: NonZeroUsize) -> Self {
        Self { len, index: 0 }
    }

    /// Create a gallery for `count` images; `None` when there are none.
    pub fn for_images(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self::new)
    }

    /// Currently selected index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Always `false`; a gallery has at least one image.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if `index` is the selected image.
    pub fn is_selected(&self, index: usize) -> bool {
        self.index == index
    }

    /// Advance one image, wrapping from the last to the first.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len();
        self.index
    }

    /// Go back one image, wrapping from the first to the last.
    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len() - 1) % self.len();
        self.index
    }

    /// Jump to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Dots and thumbnails only offer
    /// valid positions, so this is a caller bug.
    pub fn select_at(&mut self, index: usize) {
        assert!(
            index < self.len(),
            "gallery index {index} out of range for {} images",
            self.len()
        );
        self.index = index;
    }
}
