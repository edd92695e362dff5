//! Paginated single-column feed: one item per full viewport page.
//!
//! ```
//! use zengrid::{FeedLayout, Size};
//!
//! let viewport = Size::new(390.0, 844.0);
//! let feed = FeedLayout::new();
//! assert_eq!(feed.measure(viewport, 3), 3.0 * 844.0);
//! assert_eq!(feed.place(2, viewport).unwrap().origin.y, 2.0 * 844.0);
//! assert_eq!(feed.page_at(900.0, viewport, 3), Some(1));
//! ```

use crate::error::LayoutError;
use crate::geometry::{Placement, Size, floor};

/// Full-page vertical list layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FeedLayout;

impl FeedLayout {
    pub fn new() -> Self {
        Self
    }

    /// Total content height: one viewport per item.
    pub fn measure(&self, viewport: Size, item_count: u64) -> f64 {
        if !usable(viewport) {
            return 0.0;
        }
        item_count as f64 * viewport.height
    }

    /// Page for `index`, covering the whole viewport.
    pub fn place(&self, index: i64, viewport: Size) -> Result<Placement, LayoutError> {
        if index < 0 {
            return Err(LayoutError::InvalidIndex(index));
        }
        if !usable(viewport) {
            return Ok(Placement::ZERO);
        }
        Ok(Placement::new(0.0, index as f64 * viewport.height, viewport))
    }

    /// Page whose top edge is at or above `offset`, clamped to the item range.
    ///
    /// `None` when there are no items or the viewport is degenerate.
    pub fn page_at(&self, offset: f64, viewport: Size, item_count: u64) -> Option<u64> {
        if item_count == 0 || !usable(viewport) || offset.is_nan() {
            return None;
        }
        let page = floor(offset / viewport.height);
        if page <= 0.0 {
            return Some(0);
        }
        let last = item_count - 1;
        // `as` saturates for out-of-range floats.
        Some((page as u64).min(last))
    }

    /// Scroll offset that brings `page` to the top of the viewport.
    pub fn offset_of(&self, page: u64, viewport: Size) -> f64 {
        if !usable(viewport) {
            return 0.0;
        }
        page as f64 * viewport.height
    }
}

fn usable(viewport: Size) -> bool {
    viewport.width.is_finite()
        && viewport.height.is_finite()
        && !viewport.is_empty()
}
