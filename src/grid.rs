//! Two-tier grid layout: a narrower first line, then uniform wider lines.
//!
//! Every item keeps the same aspect ratio. Item sizes are never supplied by
//! the caller; they follow from the container width, the per-line item
//! count, and the spacing:
//!
//! ```text
//!     first line (2 items)       subsequent lines (3 items)
//!     ┌────────┐ ┌────────┐      ┌─────┐ ┌─────┐ ┌─────┐
//!     │   0    │ │   1    │      │  2  │ │  3  │ │  4  │
//!     │        │ │        │      └─────┘ └─────┘ └─────┘
//!     └────────┘ └────────┘      ┌─────┐ ┌─────┐
//!                                │  5  │ │  6  │ ...
//! ```
//!
//! The first line is treated as a "virtual" line of the wider kind with
//! `diff = subsequent - first` leading slots missing, so index-to-line
//! mapping stays continuous across the change in item count.
//!
//! # Example
//!
//! ```
//! use zengrid::{AspectRatio, GridLayoutEngine};
//!
//! let ratio = AspectRatio::new(120.0, 214.0).unwrap();
//! let mut engine = GridLayoutEngine::new(ratio, 3.0, 2, 3).unwrap();
//!
//! // Two full-width halves on top, then rows of three.
//! assert_eq!(engine.measure(363.0, 2), 321.0);
//! assert_eq!(engine.measure(363.0, 5), 321.0 + 3.0 + 213.0);
//!
//! let p = engine.place(3, 363.0).unwrap();
//! assert_eq!((p.origin.x, p.origin.y), (122.0, 324.0));
//! assert_eq!(p.size.width, 119.0);
//! ```

use crate::error::{ConfigError, LayoutError};
use crate::geometry::{AspectRatio, Placement, Size, ceil, usable_width};

/// Per-line item counts and spacing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowSpec {
    first_row_item_count: u32,
    subsequent_row_item_count: u32,
    item_spacing: f64,
}

impl RowSpec {
    /// Validate and build a row spec.
    ///
    /// Both counts must be at least 1, `first ≤ subsequent`, and spacing must
    /// be finite and non-negative.
    pub fn new(
        first_row_item_count: u32,
        subsequent_row_item_count: u32,
        item_spacing: f64,
    ) -> Result<Self, LayoutError> {
        if first_row_item_count == 0 || subsequent_row_item_count == 0 {
            return Err(ConfigError::ZeroItemCount.into());
        }
        if first_row_item_count > subsequent_row_item_count {
            return Err(ConfigError::FirstRowWider.into());
        }
        if !(item_spacing.is_finite() && item_spacing >= 0.0) {
            return Err(ConfigError::NegativeSpacing.into());
        }
        Ok(Self {
            first_row_item_count,
            subsequent_row_item_count,
            item_spacing,
        })
    }

    /// Same item count on every line.
    pub fn uniform(items_per_row: u32, item_spacing: f64) -> Result<Self, LayoutError> {
        Self::new(items_per_row, items_per_row, item_spacing)
    }

    pub fn first_row_item_count(&self) -> u32 {
        self.first_row_item_count
    }

    pub fn subsequent_row_item_count(&self) -> u32 {
        self.subsequent_row_item_count
    }

    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    /// Slots missing from the first line relative to later lines.
    pub fn diff(&self) -> u32 {
        self.subsequent_row_item_count - self.first_row_item_count
    }
}

/// Item sizes computed for one container width.
///
/// Holds at most one width at a time; asking for any other width clears
/// both sizes. Not thread-safe: give each layout context its own cache.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutCache {
    width: Option<f64>,
    first_row_item_size: Option<Size>,
    subsequent_row_item_size: Option<Size>,
    refills: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width the cached sizes belong to, if any layout has run yet.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn first_row_item_size(&self) -> Option<Size> {
        self.first_row_item_size
    }

    pub fn subsequent_row_item_size(&self) -> Option<Size> {
        self.subsequent_row_item_size
    }

    /// How many times item sizes were recomputed.
    pub fn refills(&self) -> u64 {
        self.refills
    }

    /// Drop everything, as if freshly created. The refill count is kept.
    pub fn invalidate(&mut self) {
        self.width = None;
        self.first_row_item_size = None;
        self.subsequent_row_item_size = None;
    }
}

/// Stateless two-tier grid configuration.
///
/// Operations take the cache explicitly so the caller decides who owns it.
/// Use [`GridLayoutEngine`] to keep the two together.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    aspect_ratio: AspectRatio,
    rows: RowSpec,
}

impl GridLayout {
    pub fn new(aspect_ratio: AspectRatio, rows: RowSpec) -> Self {
        Self { aspect_ratio, rows }
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn rows(&self) -> RowSpec {
        self.rows
    }

    /// Total content height for `item_count` items.
    ///
    /// Returns 0 without touching the cache when the width is unknown or
    /// not positive, or when there are no items.
    pub fn measure(&self, cache: &mut LayoutCache, width: Option<f64>, item_count: u64) -> f64 {
        let Some(width) = usable_width(width) else {
            return 0.0;
        };
        if item_count == 0 {
            return 0.0;
        }
        let (first, next) = self.refresh(cache, width);
        let extra_lines = (self.line_count(item_count) - 1) as f64;
        first.height + extra_lines * self.rows.item_spacing + extra_lines * next.height
    }

    /// Position and size of the item at `index`.
    ///
    /// Degenerate widths give [`Placement::ZERO`].
    pub fn place(
        &self,
        cache: &mut LayoutCache,
        index: i64,
        width: Option<f64>,
    ) -> Result<Placement, LayoutError> {
        let Ok(index) = u64::try_from(index) else {
            return Err(LayoutError::InvalidIndex(index));
        };
        let Some(width) = usable_width(width) else {
            return Ok(Placement::ZERO);
        };
        let (first, next) = self.refresh(cache, width);
        Ok(self.place_with(index, first, next))
    }

    /// Placements for `0..item_count`, computed lazily from one cache fill.
    ///
    /// Empty when the width is degenerate.
    pub fn place_all<'a>(
        &'a self,
        cache: &mut LayoutCache,
        width: Option<f64>,
        item_count: u64,
    ) -> impl Iterator<Item = (u64, Placement)> + use<'a> {
        let (count, first, next) = match usable_width(width) {
            Some(w) if item_count > 0 => {
                let (first, next) = self.refresh(cache, w);
                (item_count, first, next)
            }
            _ => (0, Size::ZERO, Size::ZERO),
        };
        (0..count).map(move |i| (i, self.place_with(i, first, next)))
    }

    /// Number of lines `item_count` items occupy, counting the first line.
    ///
    /// Computed in 128-bit so every `u64` count fits.
    pub fn line_count(&self, item_count: u64) -> u128 {
        if item_count == 0 {
            return 0;
        }
        (u128::from(item_count) + u128::from(self.rows.diff()))
            .div_ceil(u128::from(self.rows.subsequent_row_item_count))
    }

    /// Line that holds `index`. Line 0 is the first line.
    pub fn line_of(&self, index: u64) -> u64 {
        if index < u64::from(self.rows.first_row_item_count) {
            0
        } else {
            (index + u64::from(self.rows.diff())) / u64::from(self.rows.subsequent_row_item_count)
        }
    }

    /// Size of one item on a line holding `items` items.
    fn item_size(&self, width: f64, items: u32) -> Size {
        let items = f64::from(items);
        let w = ((width - (items - 1.0) * self.rows.item_spacing) / items).max(0.0);
        Size::new(w, self.aspect_ratio.height_for_width(w))
    }

    /// Bring the cache in line with `width` and return both item sizes.
    fn refresh(&self, cache: &mut LayoutCache, width: f64) -> (Size, Size) {
        if cache.width != Some(width) {
            if let Some(old) = cache.width {
                log::trace!("grid width changed {old} -> {width}, clearing item sizes");
            }
            cache.invalidate();
            cache.width = Some(width);
        }

        let mut refilled = false;
        let first = match cache.first_row_item_size {
            Some(s) => s,
            None => {
                refilled = true;
                let s = self.item_size(width, self.rows.first_row_item_count);
                cache.first_row_item_size = Some(s);
                s
            }
        };
        let next = match cache.subsequent_row_item_size {
            Some(s) => s,
            None => {
                refilled = true;
                let s = self.item_size(width, self.rows.subsequent_row_item_count);
                cache.subsequent_row_item_size = Some(s);
                s
            }
        };
        if refilled {
            cache.refills += 1;
            log::trace!(
                "grid item sizes for width {width}: first {}x{}, subsequent {}x{}",
                first.width,
                first.height,
                next.width,
                next.height
            );
        }
        (first, next)
    }

    fn place_with(&self, index: u64, first: Size, next: Size) -> Placement {
        let spacing = self.rows.item_spacing;
        let first_count = u64::from(self.rows.first_row_item_count);
        if index < first_count {
            let x = (index % first_count) as f64 * (first.width + spacing);
            return Placement::new(x, 0.0, first);
        }

        let per_line = u64::from(self.rows.subsequent_row_item_count);
        // index ≤ i64::MAX and diff ≤ u32::MAX, so this cannot overflow.
        let adjusted = index + u64::from(self.rows.diff());
        let line = (adjusted / per_line) as f64;
        let x = (adjusted % per_line) as f64 * (next.width + spacing);
        let y = ceil(first.height + line * spacing + (line - 1.0) * next.height);
        Placement::new(x, y, next)
    }
}

/// A [`GridLayout`] bundled with the cache it owns.
///
/// Every operation takes `&mut self`; share it across threads only behind
/// a lock, or better, give each layout pass its own engine.
#[derive(Clone, Debug)]
pub struct GridLayoutEngine {
    layout: GridLayout,
    cache: LayoutCache,
}

impl GridLayoutEngine {
    /// Build an engine. See [`RowSpec::new`] for the rules.
    pub fn new(
        aspect_ratio: AspectRatio,
        item_spacing: f64,
        first_row_item_count: u32,
        subsequent_row_item_count: u32,
    ) -> Result<Self, LayoutError> {
        let rows = RowSpec::new(first_row_item_count, subsequent_row_item_count, item_spacing)?;
        Ok(Self::from_layout(GridLayout::new(aspect_ratio, rows)))
    }

    pub fn from_layout(layout: GridLayout) -> Self {
        Self {
            layout,
            cache: LayoutCache::new(),
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    /// Total content height. See [`GridLayout::measure`].
    pub fn measure(&mut self, width: impl Into<Option<f64>>, item_count: u64) -> f64 {
        self.layout.measure(&mut self.cache, width.into(), item_count)
    }

    /// Placement of one item. See [`GridLayout::place`].
    pub fn place(&mut self, index: i64, width: impl Into<Option<f64>>) -> Result<Placement, LayoutError> {
        self.layout.place(&mut self.cache, index, width.into())
    }

    /// Placements for every item. See [`GridLayout::place_all`].
    pub fn place_all(
        &mut self,
        width: impl Into<Option<f64>>,
        item_count: u64,
    ) -> impl Iterator<Item = (u64, Placement)> + '_ {
        self.layout.place_all(&mut self.cache, width.into(), item_count)
    }

    /// First-line item size at `width`, or zero for a degenerate width.
    pub fn first_row_item_size(&mut self, width: impl Into<Option<f64>>) -> Size {
        match usable_width(width.into()) {
            Some(w) => self.layout.refresh(&mut self.cache, w).0,
            None => Size::ZERO,
        }
    }

    /// Size of items after the first line at `width`, or zero for a degenerate width.
    pub fn subsequent_row_item_size(&mut self, width: impl Into<Option<f64>>) -> Size {
        match usable_width(width.into()) {
            Some(w) => self.layout.refresh(&mut self.cache, w).1,
            None => Size::ZERO,
        }
    }
}
