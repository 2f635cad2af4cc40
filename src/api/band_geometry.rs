use smallvec::SmallVec;
use tracing::trace;

use crate::core::{BandSign, ContinuousScale, SeriesColumns, build_area_path};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    BandInstance, ClipRect, Color, SeriesRow, SignLayer, TextHAlign, TextPrimitive, TextVAlign,
};

use super::{ChartNamespace, ResolvedConfig};

const LABEL_INSET_PX: f64 = 5.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;
const LABEL_HALO_WIDTH_PX: f64 = 3.0;

/// Scales and identity of one series row.
pub(crate) struct RowInput<'a> {
    pub series_index: usize,
    pub name: &'a str,
    pub columns: &'a SeriesColumns,
    pub x_scale: ContinuousScale,
    pub y_scale: ContinuousScale,
}

pub(crate) fn build_series_row(
    config: &ResolvedConfig,
    namespace: &ChartNamespace,
    input: RowInput<'_>,
) -> ChartResult<SeriesRow> {
    let index = input.series_index;
    let positive = build_sign_layer(config, namespace, &input, BandSign::Positive)?;
    let negative = build_sign_layer(config, namespace, &input, BandSign::Negative)?;

    trace!(
        series = index,
        name = input.name,
        samples = input.columns.len(),
        runs = positive.path.subpath_count(),
        "built series row"
    );

    Ok(SeriesRow {
        series_index: index,
        name: input.name.to_owned(),
        translate_y: index as f64 * config.size + config.margins.top,
        clip_id: namespace.clip_id(index),
        clip: ClipRect {
            x: 0.0,
            y: config.padding,
            width: config.width,
            height: config.size - config.padding,
        },
        positive,
        negative,
        label: TextPrimitive::new(
            input.name,
            config.margins.left + LABEL_INSET_PX,
            (config.size + config.padding) / 2.0,
            LABEL_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Left,
        )
        .with_v_align(TextVAlign::Middle)
        .with_bold(true)
        .with_halo(Color::WHITE, LABEL_HALO_WIDTH_PX),
    })
}

fn build_sign_layer(
    config: &ResolvedConfig,
    namespace: &ChartNamespace,
    input: &RowInput<'_>,
    sign: BandSign,
) -> ChartResult<SignLayer> {
    let path = build_area_path(
        input.columns,
        input.columns.values(sign),
        input.x_scale,
        input.y_scale,
        config.curve,
    );

    let layout = config.layout;
    let instances = (0..layout.bands)
        .map(|band| -> ChartResult<BandInstance> {
            let fill = config.palette.band_color(sign, band).ok_or_else(|| {
                ChartError::ColorRampTooShort {
                    sign,
                    required: layout.required_ramp_len(),
                    actual: config.palette.ramp(sign).len(),
                }
            })?;
            Ok(BandInstance {
                band,
                translate_y: layout.offset(band),
                fill,
            })
        })
        .collect::<ChartResult<SmallVec<[BandInstance; 4]>>>()?;

    Ok(SignLayer {
        sign,
        path_id: namespace.path_id(input.series_index, sign),
        path,
        instances,
    })
}
