use std::fmt;

use tracing::{debug, trace, warn};

use crate::core::{ContinuousScale, HorizonSample, Series, SeriesColumns, Viewport};
use crate::error::ChartResult;
use crate::interaction::{HitTestIndex, HoverEvent, HoverValue, PointerEvent};
use crate::render::{
    Color, HorizonScene, LinePrimitive, Renderer, SvgRenderer, export_data_uri,
};

use super::axis::build_axis;
use super::band_geometry::{RowInput, build_series_row};
use super::scale_builder::{build_x_scale, build_y_scale};
use super::{Accessors, ChartNamespace, HorizonConfig};

const ROOT_FONT_FAMILY: &str = "sans-serif";
const ROOT_FONT_SIZE_PX: f64 = 10.0;
const RULER_START_X: f64 = 0.5;

pub type HoverListener = Box<dyn FnMut(&HoverEvent)>;

/// Renders `series` with the default accessors of their sample type and a
/// fresh namespace token.
pub fn render<S: HorizonSample>(
    series: &[Series<S>],
    config: &HorizonConfig,
) -> ChartResult<HorizonChart> {
    render_with(
        series,
        config,
        &Accessors::default(),
        ChartNamespace::next(),
    )
}

/// Renders `series` with explicit accessors and namespace.
pub fn render_with<S>(
    series: &[Series<S>],
    config: &HorizonConfig,
    accessors: &Accessors<'_, S>,
    namespace: ChartNamespace,
) -> ChartResult<HorizonChart> {
    let config = config.resolve()?;

    let columns: Vec<Option<SeriesColumns>> = series
        .iter()
        .map(|serie| serie.samples().map(|samples| accessors.extract(samples)))
        .collect();
    let x_scale = build_x_scale(&config, &columns)?;

    let mut rows = Vec::with_capacity(series.len());
    let mut indexes = Vec::with_capacity(series.len());
    for (series_index, (serie, columns)) in series.iter().zip(&columns).enumerate() {
        let Some(columns) = columns else {
            warn!(
                series = series_index,
                name = serie.name.as_str(),
                "series has no data; leaving its row empty"
            );
            continue;
        };

        let y_scale = build_y_scale(&config, columns)?;
        rows.push(build_series_row(
            &config,
            &namespace,
            RowInput {
                series_index,
                name: &serie.name,
                columns,
                x_scale,
                y_scale,
            },
        )?);
        indexes.extend(HitTestIndex::from_columns(serie.name.as_str(), columns));
    }

    let height = config.height_for(series.len());
    let axis = config.show_axis.then(|| build_axis(&config, x_scale));
    let scene = HorizonScene {
        viewport: Viewport::new(config.width, height),
        font_family: ROOT_FONT_FAMILY.to_owned(),
        font_size_px: ROOT_FONT_SIZE_PX,
        rows,
        axis,
        ruler: LinePrimitive::new(RULER_START_X, 0.0, RULER_START_X, height, 1.0, Color::BLACK)
            .with_dash(1.0, 1.0),
    };

    debug!(
        series = series.len(),
        rows = scene.rows.len(),
        width = config.width,
        height,
        bands = config.layout.bands,
        namespace = namespace.token(),
        "rendered horizon chart"
    );

    Ok(HorizonChart {
        scene,
        x_scale,
        indexes,
        namespace,
        listener: None,
    })
}

/// Root visual returned by `render`: the scene plus everything pointer
/// handling needs.
pub struct HorizonChart {
    scene: HorizonScene,
    x_scale: ContinuousScale,
    indexes: Vec<HitTestIndex>,
    namespace: ChartNamespace,
    listener: Option<HoverListener>,
}

impl HorizonChart {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.scene.viewport.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.scene.viewport.height
    }

    #[must_use]
    pub fn scene(&self) -> &HorizonScene {
        &self.scene
    }

    #[must_use]
    pub fn x_scale(&self) -> ContinuousScale {
        self.x_scale
    }

    #[must_use]
    pub fn namespace(&self) -> &ChartNamespace {
        &self.namespace
    }

    /// One index per series with data, in series order.
    #[must_use]
    pub fn hit_test_indexes(&self) -> &[HitTestIndex] {
        &self.indexes
    }

    /// Registers the listener called on every pointer move, replacing any
    /// previous one.
    pub fn on_hover(&mut self, listener: impl FnMut(&HoverEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Drops the hover listener; later pointer moves still update the ruler.
    pub fn clear_hover(&mut self) {
        self.listener = None;
    }

    /// Moves the ruler to the pointer and reports the sample under it for
    /// every series.
    pub fn pointer_move(&mut self, event: PointerEvent) -> HoverEvent {
        if event.x.is_finite() {
            self.scene.ruler.x1 = event.x;
            self.scene.ruler.x2 = event.x;
        }

        let hover = HoverEvent {
            time: self.x_scale.invert(event.x),
            pointer: event,
            values: self.values_at(event.x),
        };
        trace!(
            pointer_x = event.x,
            time = hover.time,
            values = hover.values.len(),
            "pointer moved"
        );

        if let Some(listener) = self.listener.as_mut() {
            listener(&hover);
        }
        hover
    }

    /// Samples under pixel `x`, without touching the ruler or listener.
    #[must_use]
    pub fn values_at(&self, x: f64) -> Vec<HoverValue> {
        self.indexes
            .iter()
            .filter_map(|index| index.lookup_pixel(x, self.x_scale))
            .collect()
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) -> ChartResult<()> {
        renderer.render(&self.scene)
    }

    /// Current SVG markup, ruler included.
    pub fn to_svg(&self) -> ChartResult<String> {
        let mut renderer = SvgRenderer::new();
        renderer.render(&self.scene)?;
        Ok(renderer.into_markup())
    }

    pub fn export_data_uri(&self) -> ChartResult<String> {
        export_data_uri(&self.scene)
    }
}

impl fmt::Debug for HorizonChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HorizonChart")
            .field("scene", &self.scene)
            .field("x_scale", &self.x_scale)
            .field("indexes", &self.indexes)
            .field("namespace", &self.namespace)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
