//! horizon-rs: horizon chart geometry.
//!
//! A horizon chart folds a signed series into a few overlapping color bands
//! per sign. Each series row reuses two area shapes (positive and negative),
//! stacked at vertical offsets and clipped to one row height, so deeper
//! values read as darker colors.
//!
//! The crate keeps a strict split: `core` holds scales, decomposition and
//! path math, `api` resolves configuration and assembles an immutable
//! `HorizonScene`, `interaction` answers pointer lookups, and `render`
//! turns scenes into SVG markup or data URIs.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Accessors, ChartNamespace, HorizonChart, HorizonConfig, render, render_with};
pub use error::{ChartError, ChartResult};
