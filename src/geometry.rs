//! Value types shared by every layout in the crate.
//!
//! All coordinates are in layout points (the host UI's logical units), as
//! `f64`. Positions are relative to the layout's own origin; callers add the
//! container origin with [`Placement::translate`].

use crate::error::{ConfigError, LayoutError};

/// Rounds toward positive infinity without requiring `std`.
#[inline]
pub(crate) fn ceil(v: f64) -> f64 {
    num_traits::Float::ceil(v)
}

#[inline]
pub(crate) fn floor(v: f64) -> f64 {
    num_traits::Float::floor(v)
}

/// Width:height ratio of every item in a grid.
///
/// Both components are positive and finite. Only the quotient matters:
/// `AspectRatio::new(120.0, 214.0)` and `AspectRatio::new(60.0, 107.0)`
/// produce identical layouts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// Square items.
    pub const SQUARE: Self = Self {
        width: 1.0,
        height: 1.0,
    };

    /// Create a ratio. Fails when either side is zero, negative, or not finite.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(LayoutError::InvalidConfiguration(
                ConfigError::InvalidAspectRatio,
            ));
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    /// Height of an item of the given width, rounded up to a whole unit.
    pub fn height_for_width(self, width: f64) -> f64 {
        // Multiply first: 214 * 180 / 120 is exact where 214 / 120 * 180 may not be.
        ceil(self.height * width / self.width)
    }
}

/// A point in layout space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width × height in layout points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Where one item goes: top-left anchor plus proposed size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub origin: Point,
    pub size: Size,
}

impl Placement {
    /// Zero-size placement at the origin, returned for degenerate widths.
    pub const ZERO: Self = Self {
        origin: Point::ORIGIN,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, size: Size) -> Self {
        Self {
            origin: Point::new(x, y),
            size,
        }
    }

    /// Shift by a container origin.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Whether two placements share any interior area.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.origin.x < other.max_x()
            && other.origin.x < self.max_x()
            && self.origin.y < other.max_y()
            && other.origin.y < self.max_y()
    }
}

/// Container width as proposed by the host, or `None` when unknown.
///
/// Returns the width only if it can produce a layout.
pub(crate) fn usable_width(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}
