#![forbid(unsafe_code)]

//! Viewport geometry and responsive breakpoints.

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport with only a width; height is irrelevant to breakpoints.
    #[inline]
    pub const fn from_width(width: u32) -> Self {
        Self::new(width, 0)
    }
}

/// Coarse device class derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

/// Width thresholds (inclusive upper bounds) for responsive layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Widths up to and including this value are [`DeviceClass::Mobile`] (default: 768).
    pub mobile_max: u32,
    /// Widths up to and including this value are [`DeviceClass::Tablet`] (default: 1024).
    pub tablet_max: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Breakpoints {
    /// The standard 768/1024 table.
    pub const DEFAULT: Self = Self {
        mobile_max: 768,
        tablet_max: 1024,
    };

    /// Classify a viewport width.
    #[must_use]
    pub const fn classify(&self, width: u32) -> DeviceClass {
        if width <= self.mobile_max {
            DeviceClass::Mobile
        } else if width <= self.tablet_max {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Items visible at once for a viewport width.
    ///
    /// Mobile shows 1, tablet shows 2, desktop shows `items_to_show`.
    /// The result is never zero.
    #[must_use]
    pub const fn items_per_view(&self, width: u32, items_to_show: usize) -> usize {
        match self.classify(width) {
            DeviceClass::Mobile => 1,
            DeviceClass::Tablet => 2,
            DeviceClass::Desktop => {
                if items_to_show == 0 {
                    1
                } else {
                    items_to_show
                }
            }
        }
    }
}

/// Number of pages needed to show `item_count` items, `items_per_view` at a time.
#[inline]
#[must_use]
pub const fn page_count(item_count: usize, items_per_view: usize) -> usize {
    if items_per_view == 0 {
        return 0;
    }
    item_count.div_ceil(items_per_view)
}
