//! Layout geometry for a photo feed that switches between a paginated list
//! and a two-tier grid.
//!
//! Pure geometry: no rendering, no allocations on the layout path, `no_std`
//! compatible.
//!
//! # Modules
//!
//! - [`grid`] — two-tier aspect-ratio grid (narrow first line, wider lines after)
//! - [`feed`] — one-item-per-page vertical feed
//! - [`stages`] — zoom stage table by device class and orientation
//! - [`mode`] — list/grid toggle and the scroll anchor kept across switches
//! - [`geometry`] — points, sizes, placements, aspect ratios
//! - `svg` — SVG visualization of a grid (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod feed;
pub mod geometry;
pub mod grid;
pub mod mode;
pub mod stages;
#[cfg(feature = "svg")]
pub mod svg;

pub use error::{ConfigError, LayoutError};
pub use feed::FeedLayout;
pub use geometry::{AspectRatio, Placement, Point, Size};
pub use grid::{GridLayout, GridLayoutEngine, LayoutCache, RowSpec};
pub use mode::{LayoutMode, ScrollAnchor};
pub use stages::{DeviceClass, Orientation, ZoomStages};
