use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AreaPath, BandSign, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{ClipRect, Color, LinePrimitive, TextPrimitive};

/// One translated, colored reference to a sign layer's shared path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandInstance {
    pub band: usize,
    pub translate_y: f64,
    pub fill: Color,
}

/// Area shape of one sign plus the band copies that reuse it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignLayer {
    pub sign: BandSign,
    pub path_id: String,
    pub path: AreaPath,
    pub instances: SmallVec<[BandInstance; 4]>,
}

/// Everything drawn for one series with data.
///
/// Coordinates inside the row are relative to `(0, translate_y)`; the clip
/// window shows exactly one row-height slice of the stacked band copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub series_index: usize,
    pub name: String,
    pub translate_y: f64,
    pub clip_id: String,
    pub clip: ClipRect,
    pub positive: SignLayer,
    pub negative: SignLayer,
    pub label: TextPrimitive,
}

impl SeriesRow {
    #[must_use]
    pub fn layer(&self, sign: BandSign) -> &SignLayer {
        match sign {
            BandSign::Positive => &self.positive,
            BandSign::Negative => &self.negative,
        }
    }
}

/// Tick mark and label on the top x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub line: LinePrimitive,
    pub label: TextPrimitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayer {
    pub translate_y: f64,
    pub ticks: Vec<AxisTick>,
}

/// Backend-agnostic description of a whole horizon chart.
///
/// `ruler` is the interactive pointer guide; exports leave it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonScene {
    pub viewport: Viewport,
    pub font_family: String,
    pub font_size_px: f64,
    pub rows: Vec<SeriesRow>,
    pub axis: Option<AxisLayer>,
    pub ruler: LinePrimitive,
}

impl HorizonScene {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for row in &self.rows {
            if !row.translate_y.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "row `{}` offset must be finite",
                    row.name
                )));
            }
            row.clip.validate()?;
            row.label.validate()?;
            for layer in [&row.positive, &row.negative] {
                for instance in &layer.instances {
                    if !instance.translate_y.is_finite() {
                        return Err(ChartError::InvalidData(
                            "band offset must be finite".to_owned(),
                        ));
                    }
                    instance.fill.validate()?;
                }
            }
        }

        if let Some(axis) = &self.axis {
            for tick in &axis.ticks {
                tick.line.validate()?;
                tick.label.validate()?;
            }
        }

        self.ruler.validate()
    }

    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.positive.instances.len() + row.negative.instances.len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize scene: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse scene json: {e}")))
    }
}
