use serde::{Deserialize, Serialize};

use crate::core::{ContinuousScale, SeriesColumns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Pointer position in chart pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub kind: PointerKind,
}

impl PointerEvent {
    #[must_use]
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Mouse,
        }
    }

    #[must_use]
    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Touch,
        }
    }
}

/// Sample found for one series under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverValue {
    pub name: String,
    pub index: usize,
    /// Raw y of the sample; NaN when the sample itself is a gap.
    pub value: f64,
}

/// Payload delivered to hover listeners on every pointer move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEvent {
    /// Domain x under the pointer (unix seconds for time scales).
    pub time: f64,
    pub pointer: PointerEvent,
    /// One entry per series with data, in series order.
    pub values: Vec<HoverValue>,
}

/// X-ordered lookup table for one series.
///
/// Lookups assume `x` is sorted ascending, as supplied by the caller; an
/// unsorted series still answers but without nearest-sample guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitTestIndex {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl HitTestIndex {
    /// Returns `None` for a series without samples.
    #[must_use]
    pub fn from_columns(name: impl Into<String>, columns: &SeriesColumns) -> Option<Self> {
        if columns.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            x: columns.x.clone(),
            y: columns.y.clone(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Leftmost index in `[0, len - 1]` whose x is `>= time`, clamped to the
    /// last index when every x is smaller.
    #[must_use]
    pub fn lookup_time(&self, time: f64) -> Option<HoverValue> {
        let last = self.x.len().checked_sub(1)?;
        let index = self.x[..last].partition_point(|&x| x < time);
        Some(HoverValue {
            name: self.name.clone(),
            index,
            value: self.y[index],
        })
    }

    #[must_use]
    pub fn lookup_pixel(&self, pixel: f64, x_scale: ContinuousScale) -> Option<HoverValue> {
        self.lookup_time(x_scale.invert(pixel))
    }
}
