use horizon_rs::api::{Accessors, ChartNamespace, render_with};
use horizon_rs::core::{ScaleKind, Series};
use horizon_rs::render::{
    HorizonScene, NullRenderer, Renderer, SVG_DATA_URI_PREFIX, SvgRenderer, export_data_uri,
    export_svg,
};
use horizon_rs::{HorizonChart, HorizonConfig};
use percent_encoding::percent_decode_str;

fn chart(token: &str) -> HorizonChart {
    let series = vec![Series::new(
        "A & B",
        vec![(0.0, 5.0), (10.0, -3.0), (20.0, f64::NAN), (30.0, 8.0)],
    )];
    let config = HorizonConfig::default()
        .with_width(300.0)
        .with_x_kind(ScaleKind::Linear);
    render_with(&series, &config, &Accessors::default(), ChartNamespace::new(token))
        .expect("render")
}

#[test]
fn svg_root_carries_size_and_font_attributes() {
    let markup = chart("svg").to_svg().expect("svg");

    assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(markup.contains("xmlns:xlink=\"http://www.w3.org/1999/xlink\""));
    assert!(markup.contains("width=\"300\" height=\"45\" viewBox=\"0,0,300,45\""));
    assert!(markup.contains("style=\"max-width: 100%; height: auto; height: intrinsic;\""));
    assert!(markup.contains("font-family=\"sans-serif\" font-size=\"10\""));
    assert!(markup.ends_with("</svg>"));
}

#[test]
fn rows_define_each_path_once_and_reuse_it() {
    let markup = chart("svg").to_svg().expect("svg");

    assert!(markup.contains(
        "<g transform=\"translate(0,20)\" clip-path=\"url(#0-svg-clip-0)\"><defs>\
         <clipPath id=\"0-svg-clip-0\"><rect x=\"0\" y=\"1\" width=\"300\" height=\"24\"/></clipPath>"
    ));
    assert!(markup.contains(
        "<path id=\"0-svg-path-positive-0\" d=\"M0,-20L100,25L100,25L0,25ZM300,-47L300,25Z\"/>"
    ));
    assert_eq!(markup.matches("<path ").count(), 2);
    assert_eq!(markup.matches("xlink:href=\"#0-svg-path-positive-0\"").count(), 3);
    assert_eq!(markup.matches("xlink:href=\"#0-svg-path-negative-0\"").count(), 3);
    assert!(markup.contains("<use fill=\"#e5f5e0\" transform=\"translate(0,0)\""));
    assert!(markup.contains("<use fill=\"#3182bd\" transform=\"translate(0,50)\""));
}

#[test]
fn labels_are_escaped_and_haloed() {
    let markup = chart("svg").to_svg().expect("svg");

    assert!(markup.contains(
        "<text x=\"5\" y=\"13\" text-anchor=\"start\" dy=\"0.35em\" fill=\"#000000\" \
         font-size=\"12px\" font-weight=\"bold\" stroke-width=\"3\" stroke=\"#ffffff\" \
         paint-order=\"stroke\">A &amp; B</text>"
    ));
}

#[test]
fn axis_drops_ticks_near_the_edges() {
    let chart = chart("axis");
    let axis = chart.scene().axis.as_ref().expect("axis");

    assert_eq!(axis.translate_y, 20.0);
    let values: Vec<f64> = axis.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![10.0, 20.0]);
    assert_eq!(axis.ticks[0].label.text, "10");
    assert_eq!(axis.ticks[0].line.y2, -6.0);

    let markup = chart.to_svg().expect("svg");
    assert!(markup.contains("<g class=\"tick\"><line stroke=\"#000000\" x1=\"100\" y1=\"0\" x2=\"100\" y2=\"-6\"/>"));
}

#[test]
fn axis_tick_count_stays_bounded_for_huge_widths() {
    let series = vec![Series::new("wide", vec![(0.0, 1.0), (30.0, 2.0)])];
    let config = HorizonConfig::default()
        .with_width(1.0e8)
        .with_x_kind(ScaleKind::Linear);
    let chart = horizon_rs::render(&series, &config).expect("render");

    let axis = chart.scene().axis.as_ref().expect("axis");
    assert!(!axis.ticks.is_empty());
    assert!(axis.ticks.len() < 5_000, "{} ticks", axis.ticks.len());
}

#[test]
fn axis_can_be_hidden() {
    let series = vec![Series::new("a", vec![(0.0, 1.0), (1.0, 2.0)])];
    let config = HorizonConfig::default().with_show_axis(false);
    let chart = horizon_rs::render(&series, &config).expect("render");

    assert!(chart.scene().axis.is_none());
    assert!(!chart.to_svg().expect("svg").contains("class=\"tick\""));
}

#[test]
fn time_axis_uses_calendar_ticks() {
    let hour = 3_600.0;
    let samples: Vec<(f64, f64)> = (0..=8).map(|h| (h as f64 * hour, 1.0)).collect();
    let chart = horizon_rs::render(&[Series::new("t", samples)], &HorizonConfig::default())
        .expect("render");

    let axis = chart.scene().axis.as_ref().expect("axis");
    assert_eq!(axis.ticks.len(), 7);
    assert_eq!(axis.ticks[0].label.text, "01 AM");
    assert_eq!(axis.ticks[0].line.x1, 80.0);
}

#[test]
fn ruler_is_interactive_only() {
    let chart = chart("ruler");

    let live = chart.to_svg().expect("svg");
    assert!(live.contains(
        "<line class=\"rule\" stroke=\"#000000\" stroke-dasharray=\"1,1\" x1=\"0.5\" y1=\"0\" x2=\"0.5\" y2=\"45\"/>"
    ));

    let exported = export_svg(chart.scene()).expect("export");
    assert!(!exported.contains("class=\"rule\""));

    let mut without_ruler = SvgRenderer::without_ruler();
    without_ruler.render(chart.scene()).expect("render");
    assert_eq!(without_ruler.markup(), exported);
}

#[test]
fn data_uri_percent_encodes_exported_markup() {
    let chart = chart("uri");
    let uri = chart.export_data_uri().expect("uri");

    assert!(uri.starts_with(SVG_DATA_URI_PREFIX));
    let payload = &uri[SVG_DATA_URI_PREFIX.len()..];
    assert!(payload.starts_with("%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22"));
    assert!(!payload.contains('<'));
    assert!(!payload.contains(' '));

    let decoded = percent_decode_str(payload).decode_utf8().expect("utf8");
    assert_eq!(decoded, export_svg(chart.scene()).expect("export"));
    assert_eq!(export_data_uri(chart.scene()).expect("uri"), uri);
}

#[test]
fn svg_renderer_reports_stats() {
    let chart = chart("stats");
    let mut renderer = SvgRenderer::new();
    chart.draw(&mut renderer).expect("draw");

    let stats = renderer.last_stats();
    assert_eq!(stats.rows_drawn, 1);
    assert_eq!(stats.instances_drawn, 6);
    assert_eq!(stats.ticks_drawn, 2);
}

#[test]
fn null_renderer_validates_and_counts() {
    let chart = chart("null");
    let mut renderer = NullRenderer::default();
    chart.draw(&mut renderer).expect("draw");

    assert_eq!(renderer.last_row_count, 1);
    assert_eq!(renderer.last_instance_count, 6);
    assert_eq!(renderer.last_text_count, 3);
}

#[test]
fn invalid_scene_is_rejected_by_renderers() {
    let mut scene = chart("bad").scene().clone();
    scene.ruler.x1 = f64::NAN;

    assert!(NullRenderer::default().render(&scene).is_err());
    assert!(SvgRenderer::new().render(&scene).is_err());
    assert!(export_data_uri(&scene).is_err());
}

#[test]
fn scene_json_round_trip() {
    let scene = chart("json").scene().clone();
    let json = scene.to_json_pretty().expect("serialize");
    let parsed = HorizonScene::from_json_str(&json).expect("parse");
    assert_eq!(parsed, scene);
}
