use std::fmt;
use std::ops::Range;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Named series of samples. The engine only ever borrows `data`.
///
/// `data: None` and an empty vector both mean "no data": the series still
/// takes a row but produces no geometry and no hit-test index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<S> {
    pub name: String,
    #[serde(default)]
    pub data: Option<Vec<S>>,
}

impl<S> Series<S> {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<S>) -> Self {
        Self {
            name: name.into(),
            data: Some(data),
        }
    }

    #[must_use]
    pub fn without_data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: None,
        }
    }

    /// Returns the samples when there is at least one.
    #[must_use]
    pub fn samples(&self) -> Option<&[S]> {
        self.data.as_deref().filter(|data| !data.is_empty())
    }
}

/// Which side of the baseline a band stream represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandSign {
    Positive,
    Negative,
}

impl BandSign {
    pub const ALL: [Self; 2] = [Self::Positive, Self::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for BandSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-series columns derived from the samples on every render.
///
/// All vectors are index aligned with the source samples. For every defined
/// index `positive[i] - negative[i] == y[i]` and at most one of the two is
/// non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesColumns {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub defined: Vec<bool>,
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

impl SeriesColumns {
    /// Extracts columns through the given accessors.
    ///
    /// Without a `defined` predicate an index is defined when neither x nor
    /// y is NaN. Indices with a non-finite x or y are always gaps.
    pub fn extract<S>(
        samples: &[S],
        x: &dyn Fn(&S) -> f64,
        y: &dyn Fn(&S) -> f64,
        defined: Option<&dyn Fn(&S, usize) -> bool>,
    ) -> Self {
        let xs: Vec<f64> = samples.iter().map(x).collect();
        let ys: Vec<f64> = samples.iter().map(y).collect();

        let defined = samples
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                let accepted = match defined {
                    Some(predicate) => predicate(sample, index),
                    None => !xs[index].is_nan() && !ys[index].is_nan(),
                };
                accepted && xs[index].is_finite() && ys[index].is_finite()
            })
            .collect();

        let positive = ys.iter().map(|&v| if v >= 0.0 { v } else { 0.0 }).collect();
        let negative = ys.iter().map(|&v| if v < 0.0 { -v } else { 0.0 }).collect();

        Self {
            x: xs,
            y: ys,
            defined,
            positive,
            negative,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn values(&self, sign: BandSign) -> &[f64] {
        match sign {
            BandSign::Positive => &self.positive,
            BandSign::Negative => &self.negative,
        }
    }

    /// `max(|min(y)|, max(y))` over finite values, or NaN when there are none.
    #[must_use]
    pub fn magnitude_max(&self) -> f64 {
        let finite = || self.y.iter().copied().filter(|v| v.is_finite());
        match (
            finite().map(OrderedFloat).min(),
            finite().map(OrderedFloat).max(),
        ) {
            (Some(min), Some(max)) => min.0.abs().max(max.0),
            _ => f64::NAN,
        }
    }

    /// Finite x extent over all samples, ignoring definedness.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let finite = || self.x.iter().copied().filter(|v| v.is_finite());
        Some((
            finite().map(OrderedFloat).min()?.0,
            finite().map(OrderedFloat).max()?.0,
        ))
    }

    /// Maximal index ranges where every sample is defined.
    #[must_use]
    pub fn defined_runs(&self) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start = None;
        for (index, &is_defined) in self.defined.iter().enumerate() {
            match (is_defined, start) {
                (true, None) => start = Some(index),
                (false, Some(run_start)) => {
                    runs.push(run_start..index);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(run_start) = start {
            runs.push(run_start..self.defined.len());
        }
        runs
    }
}
