//! Zoom stages: preset column counts by device class and orientation.
//!
//! A pinch gesture steps through the stage list; the selected stage becomes
//! the grid's subsequent-line item count. The table is a pure function of
//! an explicit `(DeviceClass, Orientation)` pair so it never queries a live
//! device.
//!
//! ```
//! use zengrid::stages::{DeviceClass, Orientation, ZoomStages};
//!
//! let stages = ZoomStages::new(DeviceClass::Phone, Orientation::Landscape);
//! assert_eq!(stages.as_slice(), &[4, 6, 8, 9]);
//! assert_eq!(stages.stage_at(-1), 4);
//! assert_eq!(stages.stage_at(99), 9);
//! ```

/// Device form factor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    #[default]
    Phone,
    Pad,
}

/// Device orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Orientation implied by viewport dimensions. Square counts as portrait.
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

const PAD_LANDSCAPE: &[u32] = &[4, 6, 10, 14, 18];
const PAD_PORTRAIT: &[u32] = &[4, 6, 8, 10, 12];
const PHONE_LANDSCAPE: &[u32] = &[4, 6, 8, 9];
const PHONE_PORTRAIT: &[u32] = &[1, 2, 4, 6, 8];

/// Column counts for a device, in zoom order (fewest columns first).
pub fn stages_for(device: DeviceClass, orientation: Orientation) -> &'static [u32] {
    match (device, orientation) {
        (DeviceClass::Pad, Orientation::Landscape) => PAD_LANDSCAPE,
        (DeviceClass::Pad, Orientation::Portrait) => PAD_PORTRAIT,
        (DeviceClass::Phone, Orientation::Landscape) => PHONE_LANDSCAPE,
        (DeviceClass::Phone, Orientation::Portrait) => PHONE_PORTRAIT,
    }
}

/// A non-empty, ordered list of zoom stages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoomStages {
    stages: &'static [u32],
}

impl ZoomStages {
    /// Built-in table for a device.
    pub fn new(device: DeviceClass, orientation: Orientation) -> Self {
        Self {
            stages: stages_for(device, orientation),
        }
    }

    /// Custom table. Returns `None` for an empty list.
    pub fn from_slice(stages: &'static [u32]) -> Option<Self> {
        if stages.is_empty() {
            None
        } else {
            Some(Self { stages })
        }
    }

    pub fn as_slice(&self) -> &'static [u32] {
        self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the table has no stages (never true for a constructed table).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Fewest columns.
    pub fn first(&self) -> u32 {
        self.stages[0]
    }

    /// Most columns.
    pub fn last(&self) -> u32 {
        self.stages[self.stages.len() - 1]
    }

    /// Clamp any index into `0..len`.
    pub fn clamp_index(&self, index: i64) -> usize {
        let max = self.stages.len() - 1;
        usize::try_from(index).map_or(0, |i| i.min(max))
    }

    /// Stage at `index`; below range gives the first stage, above range the last.
    pub fn stage_at(&self, index: i64) -> u32 {
        self.stages[self.clamp_index(index)]
    }

    /// Index reached by moving `steps` stages from `index`, clamped.
    ///
    /// Positive steps zoom out (more columns).
    pub fn step(&self, index: i64, steps: i64) -> usize {
        let from = self.clamp_index(index) as i64;
        self.clamp_index(from.saturating_add(steps))
    }

    /// Index of the stage closest to `columns`; ties go to the smaller stage.
    pub fn nearest_index(&self, columns: u32) -> usize {
        let mut best = 0;
        for (i, &s) in self.stages.iter().enumerate() {
            if s.abs_diff(columns) < self.stages[best].abs_diff(columns) {
                best = i;
            }
        }
        best
    }
}
