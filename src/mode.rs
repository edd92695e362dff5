//! List/grid mode switching and the scroll anchor kept across switches.
//!
//! The host reports two kinds of events: an item appearing in the feed, and
//! an item's frame moving while the grid scrolls. When the mode flips, the
//! anchor says which item to scroll to so the user stays where they were.
//!
//! ```
//! use zengrid::mode::{LayoutMode, ScrollAnchor};
//!
//! let mut anchor = ScrollAnchor::new();
//! anchor.item_appeared(7);
//! assert_eq!(anchor.toggle(), Some(7)); // now in grid, scroll to 7
//!
//! anchor.frame_moved(12, 4.0, -2.0); // item 12 crossed the top edge
//! assert_eq!(anchor.toggle(), Some(12)); // back to the feed at 12
//! assert_eq!(anchor.mode(), LayoutMode::List);
//! ```

use core::fmt;

/// Which layout the screen shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Paginated single-column feed.
    #[default]
    List,
    /// Two-tier photo grid.
    Grid,
}

impl LayoutMode {
    /// Button title for this mode.
    pub fn title(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Grid => "Grid",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Tracks the item to restore when the layout mode changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollAnchor {
    mode: LayoutMode,
    /// Last item that appeared in the feed.
    selected: u64,
    /// Last grid item whose frame crossed the viewport's top edge.
    crossed: Option<u64>,
}

impl ScrollAnchor {
    /// Start in list mode at item 0 with no grid crossing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn selected(&self) -> u64 {
        self.selected
    }

    pub fn crossed(&self) -> Option<u64> {
        self.crossed
    }

    /// A feed page became visible. Ignored in grid mode.
    pub fn item_appeared(&mut self, index: u64) {
        if self.mode == LayoutMode::List {
            self.selected = index;
        }
    }

    /// A grid cell's frame moved from `old_min_y` to `new_min_y`, measured
    /// from the viewport's top edge. Records the item when it crosses that
    /// edge in either direction. Ignored in list mode.
    pub fn frame_moved(&mut self, index: u64, old_min_y: f64, new_min_y: f64) {
        if self.mode != LayoutMode::Grid {
            return;
        }
        if crosses_top_edge(old_min_y, new_min_y) {
            log::trace!("grid item {index} crossed the top edge ({old_min_y} -> {new_min_y})");
            self.crossed = Some(index);
        }
    }

    /// Flip the mode and return the item to scroll to, if any.
    ///
    /// Entering the grid returns the last feed item; entering the feed
    /// returns the last grid item that crossed the top edge.
    pub fn toggle(&mut self) -> Option<u64> {
        self.mode.toggle();
        let target = match self.mode {
            LayoutMode::Grid => Some(self.selected),
            LayoutMode::List => self.crossed,
        };
        log::debug!("layout mode -> {}, scroll target {target:?}", self.mode);
        target
    }
}

/// Scrolled up past the edge (`> 0` to `≤ 0`) or back down (`< 0` to `≥ 0`).
fn crosses_top_edge(old_min_y: f64, new_min_y: f64) -> bool {
    (old_min_y > 0.0 && new_min_y <= 0.0) || (old_min_y < 0.0 && new_min_y >= 0.0)
}
