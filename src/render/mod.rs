mod export;
mod null_renderer;
mod primitives;
mod scene;
mod scheme;
mod svg;

pub use export::{SVG_DATA_URI_PREFIX, export_data_uri, export_svg};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ClipRect, Color, LinePrimitive, TextHAlign, TextHalo, TextPrimitive, TextVAlign,
};
pub use scene::{AxisLayer, AxisTick, BandInstance, HorizonScene, SeriesRow, SignLayer};
pub use scheme::{BandPalette, ColorScheme, SCHEME_MAX_COLORS, SCHEME_MIN_COLORS, SchemeName};
pub use svg::{RULER_CLASS, SvgRenderStats, SvgRenderer, scene_to_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `HorizonScene`, so drawing code
/// never touches scales, accessors or pointer state.
pub trait Renderer {
    fn render(&mut self, scene: &HorizonScene) -> ChartResult<()>;
}
