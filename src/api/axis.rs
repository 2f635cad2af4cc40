use crate::core::ContinuousScale;
use crate::render::{AxisLayer, AxisTick, Color, LinePrimitive, TextHAlign, TextPrimitive};

use super::ResolvedConfig;

const PIXELS_PER_TICK: f64 = 80.0;
const EDGE_EXCLUSION_PX: f64 = 10.0;
const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const TICK_FONT_SIZE_PX: f64 = 10.0;
const MAX_TICK_COUNT: usize = 1000;

/// Top x axis at `margin_top`.
///
/// Ticks whose position falls within 10px of either chart edge are dropped
/// since they would be clipped. The requested tick count is capped at
/// `MAX_TICK_COUNT` whatever the width.
pub(crate) fn build_axis(config: &ResolvedConfig, x_scale: ContinuousScale) -> AxisLayer {
    let count = ((config.width / PIXELS_PER_TICK) as usize).min(MAX_TICK_COUNT);
    let ticks = x_scale
        .ticks(count)
        .into_iter()
        .filter_map(|value| {
            let x = x_scale.apply(value);
            if !x.is_finite() || x < EDGE_EXCLUSION_PX || x > config.width - EDGE_EXCLUSION_PX {
                return None;
            }
            Some(AxisTick {
                value,
                line: LinePrimitive::new(x, 0.0, x, -TICK_SIZE_PX, 1.0, Color::BLACK),
                label: TextPrimitive::new(
                    x_scale.tick_label(value, count),
                    x,
                    -(TICK_SIZE_PX + TICK_PADDING_PX),
                    TICK_FONT_SIZE_PX,
                    Color::BLACK,
                    TextHAlign::Center,
                ),
            })
        })
        .collect();

    AxisLayer {
        translate_y: config.margins.top,
        ticks,
    }
}
