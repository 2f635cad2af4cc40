mod accessors;
mod axis;
mod band_geometry;
mod chart;
mod config;
mod namespace;
mod scale_builder;

pub use accessors::Accessors;
pub use chart::{HorizonChart, HoverListener, render, render_with};
pub use config::{HorizonConfig, Margins, ResolvedConfig};
pub use namespace::ChartNamespace;
