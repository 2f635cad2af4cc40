use crate::core::{ContinuousScale, DegeneratePlacement, SeriesColumns};
use crate::error::ChartResult;

use super::ResolvedConfig;

/// Shared x scale: the configured domain, or the finite x extent across
/// every series; `[0, 0]` when no series has a finite x. A single distinct
/// x lands at the middle of the range.
pub(crate) fn build_x_scale(
    config: &ResolvedConfig,
    columns: &[Option<SeriesColumns>],
) -> ChartResult<ContinuousScale> {
    let domain = config.x_domain.unwrap_or_else(|| {
        columns
            .iter()
            .flatten()
            .filter_map(SeriesColumns::x_extent)
            .reduce(|(lo, hi), (start, end)| (lo.min(start), hi.max(end)))
            .unwrap_or((0.0, 0.0))
    });
    Ok(ContinuousScale::new(config.x_kind, domain, config.x_range)?
        .with_degenerate_placement(DegeneratePlacement::Midpoint))
}

/// Per-series y scale over `[0, max(|min|, max)]` unless a shared domain
/// is configured.
pub(crate) fn build_y_scale(
    config: &ResolvedConfig,
    columns: &SeriesColumns,
) -> ChartResult<ContinuousScale> {
    let domain = config.y_domain.unwrap_or_else(|| {
        let y_max = columns.magnitude_max();
        if y_max.is_finite() {
            (0.0, y_max)
        } else {
            (0.0, 0.0)
        }
    });
    ContinuousScale::new(config.y_kind, domain, config.y_range)
}
