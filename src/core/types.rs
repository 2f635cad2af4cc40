use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::ChartResult;

/// Outer pixel size of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Default sample shape: `x` is a temporal (unix seconds) or ordinal key,
/// `y` the signed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }
}

/// Samples that know how to expose their own x/y values.
///
/// Used by the default accessors; arbitrary sample types can instead be
/// rendered with explicit closures through `Accessors`.
pub trait HorizonSample {
    fn x_value(&self) -> f64;
    fn y_value(&self) -> f64;
}

impl HorizonSample for DataPoint {
    fn x_value(&self) -> f64 {
        self.x
    }

    fn y_value(&self) -> f64 {
        self.y
    }
}

impl HorizonSample for (f64, f64) {
    fn x_value(&self) -> f64 {
        self.0
    }

    fn y_value(&self) -> f64 {
        self.1
    }
}

impl HorizonSample for [f64; 2] {
    fn x_value(&self) -> f64 {
        self[0]
    }

    fn y_value(&self) -> f64 {
        self[1]
    }
}
