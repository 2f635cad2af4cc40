use std::fmt::{self, Write as _};

use crate::core::format_coord;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, HorizonScene, LinePrimitive, Renderer, SeriesRow, SignLayer, TextHAlign,
    TextPrimitive, TextVAlign,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const ROOT_STYLE: &str = "max-width: 100%; height: auto; height: intrinsic;";

/// Ruler elements carry this class so exports can recognize them.
pub const RULER_CLASS: &str = "rule";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rows_drawn: usize,
    pub instances_drawn: usize,
    pub ticks_drawn: usize,
}

/// Serializes scenes to standalone SVG markup.
///
/// Each sign path is written once under `<defs>`; band copies are `<use>`
/// references with their own translation and fill.
#[derive(Debug)]
pub struct SvgRenderer {
    include_ruler: bool,
    markup: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            include_ruler: true,
            markup: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that leaves interactive ruler elements out of the markup.
    #[must_use]
    pub fn without_ruler() -> Self {
        Self {
            include_ruler: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> String {
        self.markup
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &HorizonScene) -> ChartResult<()> {
        scene.validate()?;
        self.markup = scene_to_svg(scene, self.include_ruler)?;
        self.last_stats = SvgRenderStats {
            rows_drawn: scene.rows.len(),
            instances_drawn: scene.instance_count(),
            ticks_drawn: scene.axis.as_ref().map_or(0, |axis| axis.ticks.len()),
        };
        Ok(())
    }
}

/// Writes the scene as SVG markup without validating it first.
pub fn scene_to_svg(scene: &HorizonScene, include_ruler: bool) -> ChartResult<String> {
    let mut out = String::with_capacity(1024 + scene.rows.len() * 512);
    write_scene(&mut out, scene, include_ruler)
        .map_err(|_| ChartError::InvalidData("failed to write svg markup".to_owned()))?;
    Ok(out)
}

fn write_scene(out: &mut String, scene: &HorizonScene, include_ruler: bool) -> fmt::Result {
    let width = format_coord(scene.viewport.width);
    let height = format_coord(scene.viewport.height);
    write!(
        out,
        "<svg xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0,0,{width},{height}\" style=\"{ROOT_STYLE}\" font-family=\"{}\" font-size=\"{}\">",
        escape_xml(&scene.font_family),
        format_coord(scene.font_size_px)
    )?;

    for row in &scene.rows {
        write_row(out, row)?;
    }

    if let Some(axis) = &scene.axis {
        write!(
            out,
            "<g transform=\"translate(0,{})\" fill=\"none\" text-anchor=\"middle\">",
            format_coord(axis.translate_y)
        )?;
        for tick in &axis.ticks {
            out.push_str("<g class=\"tick\">");
            write_line(out, &tick.line, None)?;
            write_text(out, &tick.label)?;
            out.push_str("</g>");
        }
        out.push_str("</g>");
    }

    if include_ruler {
        write_line(out, &scene.ruler, Some(RULER_CLASS))?;
    }

    out.push_str("</svg>");
    Ok(())
}

fn write_row(out: &mut String, row: &SeriesRow) -> fmt::Result {
    let clip_id = escape_xml(&row.clip_id);
    write!(
        out,
        "<g transform=\"translate(0,{})\" clip-path=\"url(#{clip_id})\"><defs>",
        format_coord(row.translate_y)
    )?;
    write!(
        out,
        "<clipPath id=\"{clip_id}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath>",
        format_coord(row.clip.x),
        format_coord(row.clip.y),
        format_coord(row.clip.width),
        format_coord(row.clip.height)
    )?;
    for layer in [&row.positive, &row.negative] {
        write!(
            out,
            "<path id=\"{}\" d=\"{}\"/>",
            escape_xml(&layer.path_id),
            layer.path.to_svg_path_data()
        )?;
    }
    out.push_str("</defs>");

    for layer in [&row.positive, &row.negative] {
        write_layer(out, layer)?;
    }
    write_text(out, &row.label)?;
    out.push_str("</g>");
    Ok(())
}

fn write_layer(out: &mut String, layer: &SignLayer) -> fmt::Result {
    let href = escape_xml(&layer.path_id);
    out.push_str("<g>");
    for instance in &layer.instances {
        write!(out, "<use fill=\"{}\"", instance.fill.to_hex())?;
        write_opacity(out, "fill-opacity", instance.fill)?;
        write!(
            out,
            " transform=\"translate(0,{})\" xlink:href=\"#{href}\"/>",
            format_coord(instance.translate_y)
        )?;
    }
    out.push_str("</g>");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive, class: Option<&str>) -> fmt::Result {
    out.push_str("<line");
    if let Some(class) = class {
        write!(out, " class=\"{}\"", escape_xml(class))?;
    }
    write!(out, " stroke=\"{}\"", line.color.to_hex())?;
    write_opacity(out, "stroke-opacity", line.color)?;
    if line.stroke_width != 1.0 {
        write!(out, " stroke-width=\"{}\"", format_coord(line.stroke_width))?;
    }
    if let Some((dash, gap)) = line.dash {
        write!(
            out,
            " stroke-dasharray=\"{},{}\"",
            format_coord(dash),
            format_coord(gap)
        )?;
    }
    write!(
        out,
        " x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
        format_coord(line.x1),
        format_coord(line.y1),
        format_coord(line.x2),
        format_coord(line.y2)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"{anchor}\"",
        format_coord(text.x),
        format_coord(text.y)
    )?;
    if text.v_align == TextVAlign::Middle {
        out.push_str(" dy=\"0.35em\"");
    }
    write!(
        out,
        " fill=\"{}\" font-size=\"{}px\"",
        text.color.to_hex(),
        format_coord(text.font_size_px)
    )?;
    write_opacity(out, "fill-opacity", text.color)?;
    if text.bold {
        out.push_str(" font-weight=\"bold\"");
    }
    if let Some(halo) = text.halo {
        write!(
            out,
            " stroke-width=\"{}\" stroke=\"{}\" paint-order=\"stroke\"",
            format_coord(halo.width),
            halo.color.to_hex()
        )?;
    }
    write!(out, ">{}</text>", escape_xml(&text.text))
}

fn write_opacity(out: &mut String, attribute: &str, color: Color) -> fmt::Result {
    if color.alpha < 1.0 {
        write!(out, " {attribute}=\"{}\"", format_coord(color.alpha))?;
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
