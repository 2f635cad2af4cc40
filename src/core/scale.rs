use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Mapping family used by a `ContinuousScale`.
///
/// `Time` maps like `Linear` over unix seconds; it differs only in how ticks
/// are placed and labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleKind {
    #[default]
    Linear,
    Time,
    /// Sign-preserving square-root transform.
    Sqrt,
}

impl ScaleKind {
    fn transform(self, value: f64) -> f64 {
        match self {
            Self::Linear | Self::Time => value,
            Self::Sqrt => value.signum() * value.abs().sqrt(),
        }
    }

    fn untransform(self, value: f64) -> f64 {
        match self {
            Self::Linear | Self::Time => value,
            Self::Sqrt => value.signum() * value * value,
        }
    }
}

/// Where a degenerate domain places its values inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneratePlacement {
    /// `range.0`; the baseline of a y scale.
    #[default]
    RangeStart,
    /// Halfway along the range, as used for the shared x scale.
    Midpoint,
}

/// Monotonic mapping from a value domain onto a pixel range, with inverse.
///
/// A degenerate domain (`start == end`) maps every value to one pixel chosen
/// by `DegeneratePlacement` and inverts every pixel to `domain.0`; it never
/// divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale {
    kind: ScaleKind,
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    degenerate: DegeneratePlacement,
}

impl ContinuousScale {
    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidConfig(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidConfig(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            kind,
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            degenerate: DegeneratePlacement::RangeStart,
        })
    }

    #[must_use]
    pub fn with_degenerate_placement(mut self, placement: DegeneratePlacement) -> Self {
        self.degenerate = placement;
        self
    }

    #[must_use]
    pub fn degenerate_placement(self) -> DegeneratePlacement {
        self.degenerate
    }

    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Linear, domain, range)
    }

    pub fn time(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Time, domain, range)
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.kind.transform(self.domain_start) == self.kind.transform(self.domain_end)
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// Non-finite inputs propagate as NaN rather than failing; callers that
    /// emit geometry filter them beforehand.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let t0 = self.kind.transform(self.domain_start);
        let t1 = self.kind.transform(self.domain_end);
        if t0 == t1 {
            return match self.degenerate {
                DegeneratePlacement::RangeStart => self.range_start,
                DegeneratePlacement::Midpoint => (self.range_start + self.range_end) / 2.0,
            };
        }

        let normalized = (self.kind.transform(value) - t0) / (t1 - t0);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let t0 = self.kind.transform(self.domain_start);
        let t1 = self.kind.transform(self.domain_end);
        if t0 == t1 || self.range_start == self.range_end {
            return self.domain_start;
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.kind.untransform(t0 + normalized * (t1 - t0))
    }
}
