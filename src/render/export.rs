use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use crate::error::ChartResult;
use crate::render::{HorizonScene, scene_to_svg};

pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standalone SVG markup of the scene with interactive elements removed.
pub fn export_svg(scene: &HorizonScene) -> ChartResult<String> {
    scene.validate()?;
    scene_to_svg(scene, false)
}

/// Encodes the exported markup as a `data:` URI.
pub fn export_data_uri(scene: &HorizonScene) -> ChartResult<String> {
    let markup = export_svg(scene)?;
    let encoded = utf8_percent_encode(&markup, URI_COMPONENT).to_string();
    debug!(
        markup_len = markup.len(),
        encoded_len = encoded.len(),
        "exported horizon scene"
    );
    Ok(format!("{SVG_DATA_URI_PREFIX}{encoded}"))
}
