//! Viewport classification.

use serde::{Deserialize, Serialize};

/// Widths at or above this are laid out as desktop.
pub const DESKTOP_BREAKPOINT_PX: u32 = 768;

/// Layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

/// Viewport as reported by the host at decision time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Layout width in CSS pixels.
    pub width_px: u32,
}

impl Viewport {
    /// Create a viewport of the given width.
    pub fn new(width_px: u32) -> Self {
        Self { width_px }
    }

    /// Classify against [`DESKTOP_BREAKPOINT_PX`].
    pub fn class(&self) -> ViewportClass {
        if self.width_px >= DESKTOP_BREAKPOINT_PX {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        }
    }

    /// Check if this is a desktop layout.
    pub fn is_desktop(&self) -> bool {
        self.class() == ViewportClass::Desktop
    }
}
