use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{ContinuousScale, SeriesColumns};

/// Interpolation between consecutive samples of an area's top line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveKind {
    #[default]
    Linear,
    /// Value changes halfway between samples.
    Step,
    /// Value changes at the previous sample.
    StepBefore,
    /// Value changes at the next sample.
    StepAfter,
    /// Cubic Hermite spline that preserves monotonicity in y for x-ordered
    /// samples.
    MonotoneX,
    /// Uniform cubic B-spline; passes through the first and last sample
    /// only.
    Basis,
}

impl CurveKind {
    fn step_position(self) -> Option<f64> {
        match self {
            Self::Step => Some(0.5),
            Self::StepBefore => Some(0.0),
            Self::StepAfter => Some(1.0),
            Self::Linear | Self::MonotoneX | Self::Basis => None,
        }
    }
}

/// Pixel-space path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

/// Filled area between a baseline and a top line, one closed sub-path per
/// run of defined samples.
///
/// `runs` holds the sample index range behind each sub-path, in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaPath {
    pub commands: Vec<PathCommand>,
    pub runs: Vec<Range<usize>>,
}

impl AreaPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.runs.len()
    }

    /// Serializes the commands as SVG path data (`M0,1L2,3Z`).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 12);
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { x, y } => {
                    out.push_str(&format!("M{},{}", format_coord(x), format_coord(y)));
                }
                PathCommand::LineTo { x, y } => {
                    out.push_str(&format!("L{},{}", format_coord(x), format_coord(y)));
                }
                PathCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    out.push_str(&format!(
                        "C{},{},{},{},{},{}",
                        format_coord(x1),
                        format_coord(y1),
                        format_coord(x2),
                        format_coord(y2),
                        format_coord(x),
                        format_coord(y)
                    ));
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}

/// Shortest round-trip rendering of a coordinate with `-0` folded into `0`.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

/// Builds the area path of one sign stream of a series.
///
/// The top line follows `values` (already rectified to `>= 0`) and the
/// baseline sits at `y_scale.apply(0.0)`. Undefined samples break the path;
/// no segment bridges a gap.
#[must_use]
pub fn build_area_path(
    columns: &SeriesColumns,
    values: &[f64],
    x_scale: ContinuousScale,
    y_scale: ContinuousScale,
    curve: CurveKind,
) -> AreaPath {
    let baseline = y_scale.apply(0.0);
    let runs = columns.defined_runs();
    let mut commands = Vec::new();

    for run in &runs {
        let top: Vec<(f64, f64)> = run
            .clone()
            .map(|index| (x_scale.apply(columns.x[index]), y_scale.apply(values[index])))
            .collect();
        let bottom: Vec<(f64, f64)> = top.iter().rev().map(|&(x, _)| (x, baseline)).collect();

        trace_line(&top, curve, false, &mut commands);
        trace_line(&bottom, curve, true, &mut commands);
        commands.push(PathCommand::Close);
    }

    AreaPath { commands, runs }
}

/// Appends one line of an area. The top line opens the sub-path; the
/// baseline continues it, running right to left.
fn trace_line(
    points: &[(f64, f64)],
    curve: CurveKind,
    baseline: bool,
    out: &mut Vec<PathCommand>,
) {
    let Some(&(x, y)) = points.first() else {
        return;
    };
    out.push(if baseline {
        PathCommand::LineTo { x, y }
    } else {
        PathCommand::MoveTo { x, y }
    });

    match curve {
        CurveKind::Linear => {
            out.extend(points[1..].iter().map(|&(x, y)| PathCommand::LineTo { x, y }));
        }
        CurveKind::Step | CurveKind::StepBefore | CurveKind::StepAfter => {
            let t = curve.step_position().unwrap_or(0.5);
            // The baseline mirrors the step position so the area closes exactly.
            trace_step(points, if baseline { 1.0 - t } else { t }, out);
        }
        CurveKind::MonotoneX => trace_monotone_x(points, out),
        CurveKind::Basis => trace_basis(points, out),
    }
}

fn trace_step(points: &[(f64, f64)], t: f64, out: &mut Vec<PathCommand>) {
    let (mut prev_x, mut prev_y) = points[0];
    for &(x, y) in &points[1..] {
        if t <= 0.0 {
            out.push(PathCommand::LineTo { x: prev_x, y });
            out.push(PathCommand::LineTo { x, y });
        } else {
            let mid_x = prev_x * (1.0 - t) + x * t;
            out.push(PathCommand::LineTo {
                x: mid_x,
                y: prev_y,
            });
            out.push(PathCommand::LineTo { x: mid_x, y });
        }
        prev_x = x;
        prev_y = y;
    }

    if 0.0 < t && t < 1.0 && points.len() > 1 {
        out.push(PathCommand::LineTo {
            x: prev_x,
            y: prev_y,
        });
    }
}

fn trace_basis(points: &[(f64, f64)], out: &mut Vec<PathCommand>) {
    match points {
        [] | [_] => {}
        [_, (x, y)] => out.push(PathCommand::LineTo { x: *x, y: *y }),
        [first, second, rest @ ..] => {
            out.push(PathCommand::LineTo {
                x: (5.0 * first.0 + second.0) / 6.0,
                y: (5.0 * first.1 + second.1) / 6.0,
            });
            let (mut a, mut b) = (*first, *second);
            for &c in rest {
                out.push(basis_segment(a, b, c));
                a = b;
                b = c;
            }
            out.push(basis_segment(a, b, b));
            out.push(PathCommand::LineTo { x: b.0, y: b.1 });
        }
    }
}

fn basis_segment(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> PathCommand {
    PathCommand::CurveTo {
        x1: (2.0 * a.0 + b.0) / 3.0,
        y1: (2.0 * a.1 + b.1) / 3.0,
        x2: (a.0 + 2.0 * b.0) / 3.0,
        y2: (a.1 + 2.0 * b.1) / 3.0,
        x: (a.0 + 4.0 * b.0 + c.0) / 6.0,
        y: (a.1 + 4.0 * b.1 + c.1) / 6.0,
    }
}

fn trace_monotone_x(points: &[(f64, f64)], out: &mut Vec<PathCommand>) {
    let mut points = points.to_vec();
    points.dedup();

    match points.as_slice() {
        [] | [_] => {}
        [_, (x, y)] => out.push(PathCommand::LineTo { x: *x, y: *y }),
        _ => {
            let mut tangent = 0.0;
            for (i, window) in points.windows(3).enumerate() {
                let next = monotone_tangent(window[0], window[1], window[2]);
                let start = if i == 0 {
                    secant_tangent(window[0], window[1], next)
                } else {
                    tangent
                };
                out.push(hermite_segment(window[0], window[1], start, next));
                tangent = next;
            }
            let (a, b) = (points[points.len() - 2], points[points.len() - 1]);
            out.push(hermite_segment(a, b, tangent, secant_tangent(a, b, tangent)));
        }
    }
}

/// Tangent at `b` bounded so the segments on either side cannot overshoot
/// (Steffen's method). Zero at local extrema.
fn monotone_tangent(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    let h0 = b.0 - a.0;
    let h1 = c.0 - b.0;
    let s0 = (b.1 - a.1) / nonzero_width(h0, h1);
    let s1 = (c.1 - b.1) / nonzero_width(h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    if s0.is_nan() || s1.is_nan() || p.is_nan() {
        return 0.0;
    }

    let sign = |v: f64| if v < 0.0 { -1.0 } else { 1.0 };
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_nan() || tangent == 0.0 {
        0.0
    } else {
        tangent
    }
}

fn nonzero_width(width: f64, other: f64) -> f64 {
    if width != 0.0 {
        width
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

/// End tangent of a segment from its secant and the tangent at the other end.
fn secant_tangent(a: (f64, f64), b: (f64, f64), tangent: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        tangent
    } else {
        (3.0 * (b.1 - a.1) / h - tangent) / 2.0
    }
}

fn hermite_segment(a: (f64, f64), b: (f64, f64), t0: f64, t1: f64) -> PathCommand {
    let dx = (b.0 - a.0) / 3.0;
    PathCommand::CurveTo {
        x1: a.0 + dx,
        y1: a.1 + dx * t0,
        x2: b.0 - dx,
        y2: b.1 - dx * t1,
        x: b.0,
        y: b.1,
    }
}
