pub mod area;
pub mod bands;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;

pub use area::{AreaPath, CurveKind, PathCommand, build_area_path, format_coord};
pub use bands::{BandLayout, MIN_RAMP_COLORS};
pub use scale::{ContinuousScale, DegeneratePlacement, ScaleKind};
pub use series::{BandSign, Series, SeriesColumns};
pub use types::{DataPoint, HorizonSample, Viewport};
