use serde::{Deserialize, Serialize};

use crate::core::{BandLayout, CurveKind, ScaleKind};
use crate::error::{ChartError, ChartResult};
use crate::render::{BandPalette, ColorScheme};

/// Outer margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }
}

/// Public horizon chart configuration.
///
/// Serializable so host applications can persist chart setup; every field
/// has a default, so `{}` is a valid JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonConfig {
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_width")]
    pub width: f64,
    /// Outer height of one series row.
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_bands")]
    pub bands: usize,
    /// Separation between adjacent rows.
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_x_kind")]
    pub x_kind: ScaleKind,
    #[serde(default)]
    pub x_domain: Option<(f64, f64)>,
    #[serde(default)]
    pub x_range: Option<(f64, f64)>,
    #[serde(default)]
    pub y_kind: ScaleKind,
    /// Shared y domain; each series uses its own when unset.
    #[serde(default)]
    pub y_domain: Option<(f64, f64)>,
    #[serde(default)]
    pub y_range: Option<(f64, f64)>,
    #[serde(default)]
    pub curve: CurveKind,
    #[serde(default)]
    pub colors: ColorScheme,
    #[serde(default = "default_show_axis")]
    pub show_axis: bool,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            width: default_width(),
            size: default_size(),
            bands: default_bands(),
            padding: default_padding(),
            x_kind: default_x_kind(),
            x_domain: None,
            x_range: None,
            y_kind: ScaleKind::Linear,
            y_domain: None,
            y_range: None,
            curve: CurveKind::Linear,
            colors: ColorScheme::default(),
            show_axis: default_show_axis(),
        }
    }
}

impl HorizonConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margins = Margins {
            top,
            right,
            bottom,
            left,
        };
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the outer height of a single row.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_bands(mut self, bands: usize) -> Self {
        self.bands = bands;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_x_kind(mut self, kind: ScaleKind) -> Self {
        self.x_kind = kind;
        self
    }

    #[must_use]
    pub fn with_x_domain(mut self, start: f64, end: f64) -> Self {
        self.x_domain = Some((start, end));
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, left: f64, right: f64) -> Self {
        self.x_range = Some((left, right));
        self
    }

    #[must_use]
    pub fn with_y_kind(mut self, kind: ScaleKind) -> Self {
        self.y_kind = kind;
        self
    }

    /// Makes every series share one y domain.
    #[must_use]
    pub fn with_y_domain(mut self, min: f64, max: f64) -> Self {
        self.y_domain = Some((min, max));
        self
    }

    /// Sets the `[bottom, top]` pixel range of the y scale.
    #[must_use]
    pub fn with_y_range(mut self, bottom: f64, top: f64) -> Self {
        self.y_range = Some((bottom, top));
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_show_axis(mut self, show_axis: bool) -> Self {
        self.show_axis = show_axis;
        self
    }

    /// Total chart height for `series_count` rows.
    #[must_use]
    pub fn height_for(&self, series_count: usize) -> f64 {
        series_count as f64 * self.size + self.margins.top + self.margins.bottom
    }

    /// Validates the configuration and fills in derived defaults.
    pub fn resolve(&self) -> ChartResult<ResolvedConfig> {
        if self.bands == 0 {
            return Err(ChartError::InvalidBandCount { bands: self.bands });
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "width must be finite and > 0, got {}",
                self.width
            )));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "size must be finite and > 0, got {}",
                self.size
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 || self.padding >= self.size {
            return Err(ChartError::InvalidConfig(format!(
                "padding must be in [0, size), got {}",
                self.padding
            )));
        }
        for (side, value) in [
            ("top", self.margins.top),
            ("right", self.margins.right),
            ("bottom", self.margins.bottom),
            ("left", self.margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{side} margin must be finite and >= 0, got {value}"
                )));
            }
        }
        if self.x_kind == ScaleKind::Sqrt {
            return Err(ChartError::InvalidConfig(
                "sqrt scales are only supported on the y axis".to_owned(),
            ));
        }
        for (name, pair) in [
            ("x_domain", self.x_domain),
            ("x_range", self.x_range),
            ("y_domain", self.y_domain),
            ("y_range", self.y_range),
        ] {
            if let Some((start, end)) = pair {
                if !start.is_finite() || !end.is_finite() {
                    return Err(ChartError::InvalidConfig(format!(
                        "{name} bounds must be finite"
                    )));
                }
            }
        }

        let layout = BandLayout::new(self.bands, self.size);
        let palette = self.colors.resolve(layout)?;

        let x_range = self
            .x_range
            .unwrap_or((self.margins.left, self.width - self.margins.right));
        let y_range = self.y_range.unwrap_or((
            self.size,
            self.size - self.bands as f64 * (self.size - self.padding),
        ));

        Ok(ResolvedConfig {
            margins: self.margins,
            width: self.width,
            size: self.size,
            padding: self.padding,
            layout,
            x_kind: self.x_kind,
            x_domain: self.x_domain,
            x_range,
            y_kind: self.y_kind,
            y_domain: self.y_domain,
            y_range,
            curve: self.curve,
            palette,
            show_axis: self.show_axis,
        })
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Validated configuration with every derived default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub margins: Margins,
    pub width: f64,
    pub size: f64,
    pub padding: f64,
    pub layout: BandLayout,
    pub x_kind: ScaleKind,
    pub x_domain: Option<(f64, f64)>,
    pub x_range: (f64, f64),
    pub y_kind: ScaleKind,
    pub y_domain: Option<(f64, f64)>,
    pub y_range: (f64, f64),
    pub curve: CurveKind,
    pub palette: BandPalette,
    pub show_axis: bool,
}

impl ResolvedConfig {
    #[must_use]
    pub fn height_for(&self, series_count: usize) -> f64 {
        series_count as f64 * self.size + self.margins.top + self.margins.bottom
    }
}

fn default_width() -> f64 {
    640.0
}

fn default_size() -> f64 {
    25.0
}

fn default_bands() -> usize {
    3
}

fn default_padding() -> f64 {
    1.0
}

fn default_x_kind() -> ScaleKind {
    ScaleKind::Time
}

fn default_show_axis() -> bool {
    true
}
