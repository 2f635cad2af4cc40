use std::fmt;

use crate::core::{HorizonSample, SeriesColumns};

type ValueFn<'a, S> = Box<dyn Fn(&S) -> f64 + 'a>;
type DefinedFn<'a, S> = Box<dyn Fn(&S, usize) -> bool + 'a>;

/// Value extraction for arbitrary sample types.
///
/// The `defined` predicate is fixed at construction and shared by every
/// series of a render call.
pub struct Accessors<'a, S> {
    x: ValueFn<'a, S>,
    y: ValueFn<'a, S>,
    defined: Option<DefinedFn<'a, S>>,
}

impl<'a, S> Accessors<'a, S> {
    #[must_use]
    pub fn new(x: impl Fn(&S) -> f64 + 'a, y: impl Fn(&S) -> f64 + 'a) -> Self {
        Self {
            x: Box::new(x),
            y: Box::new(y),
            defined: None,
        }
    }

    /// Replaces the default "x and y are not NaN" gap rule.
    #[must_use]
    pub fn with_defined(mut self, defined: impl Fn(&S, usize) -> bool + 'a) -> Self {
        self.defined = Some(Box::new(defined));
        self
    }

    #[must_use]
    pub fn has_defined(&self) -> bool {
        self.defined.is_some()
    }

    #[must_use]
    pub fn extract(&self, samples: &[S]) -> SeriesColumns {
        let defined = self
            .defined
            .as_ref()
            .map(|predicate| &**predicate as &dyn Fn(&S, usize) -> bool);
        SeriesColumns::extract(samples, &*self.x, &*self.y, defined)
    }
}

impl<'a, S: HorizonSample + 'a> Default for Accessors<'a, S> {
    fn default() -> Self {
        Self::new(S::x_value, S::y_value)
    }
}

impl<S> fmt::Debug for Accessors<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors")
            .field("has_defined", &self.defined.is_some())
            .finish_non_exhaustive()
    }
}
