use serde::{Deserialize, Serialize};

/// Minimum ramp length; fewer bands than this pick the darker end of a ramp.
pub const MIN_RAMP_COLORS: usize = 3;

/// Vertical stacking and color indexing for the band copies of one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandLayout {
    pub bands: usize,
    pub size: f64,
}

impl BandLayout {
    #[must_use]
    pub fn new(bands: usize, size: f64) -> Self {
        Self { bands, size }
    }

    /// Number of colors each ramp must provide.
    #[must_use]
    pub fn required_ramp_len(self) -> usize {
        self.bands.max(MIN_RAMP_COLORS)
    }

    /// Ramp index used by band `band` (0 = closest to the baseline).
    #[must_use]
    pub fn color_index(self, band: usize) -> usize {
        band + MIN_RAMP_COLORS.saturating_sub(self.bands)
    }

    /// Downward translation applied to band `band`.
    #[must_use]
    pub fn offset(self, band: usize) -> f64 {
        band as f64 * self.size
    }
}
