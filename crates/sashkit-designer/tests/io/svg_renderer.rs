use sashkit_core::{HorizontalOpening, OpeningOptions, Point, Rect, WindowSpec, WindowType};
use sashkit_designer::primitives::{Outline, Primitive, Role, Style};
use sashkit_designer::svg_renderer::{path_data, polyline_path_data, render_primitive};
use sashkit_designer::{render_svg, render_window, SvgOptions};

#[test]
fn test_render_empty_document() {
    let svg = render_svg(&[], &SvgOptions::default());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"0 0 900 700\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_arched_frame_uses_arc_command() {
    let spec = WindowSpec::default();
    let svg = render_svg(&render_window(&spec), &SvgOptions::for_spec(&spec));
    assert!(svg.contains("<g transform=\"translate(250 100)\">"));
    assert!(svg.contains("M 0 400 L 0 60 A 175 60 0 0 1 350 60 L 350 400 Z"));
    assert!(svg.contains("A 165 50 0 0 1 340 60"));
    assert!(svg.contains(">350 mm</text>"));
    assert!(svg.contains("transform=\"rotate(-90"));
}

#[test]
fn test_flattened_outline_has_no_arcs() {
    let spec = WindowSpec::default();
    let options = SvgOptions {
        flatten_arcs: true,
        ..SvgOptions::for_spec(&spec)
    };
    let svg = render_svg(&render_window(&spec), &options);
    assert!(!svg.contains(" A "));
    assert!(svg.contains("<path d=\"M 0 400 L 0 60 L "));
}

#[test]
fn test_fit_to_content_view_box() {
    let primitives = vec![Primitive::rect(
        Role::Frame,
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Style::filled("#fff", "#000", 2.0),
    )];
    let options = SvgOptions {
        origin: Point::new(10.0, 20.0),
        fit_to_content: true,
        padding: 5.0,
        ..SvgOptions::default()
    };
    let svg = render_svg(&primitives, &options);
    assert!(svg.contains("width=\"110\" height=\"60\" viewBox=\"5 15 110 60\""));
}

#[test]
fn test_rect_attributes() {
    let primitive = Primitive::rect(
        Role::Handle,
        Rect::new(340.0, 220.0, 10.0, 10.0),
        Style::fill_only("#888888").with_corner_radius(2.5),
    );
    assert_eq!(
        render_primitive(&primitive, &SvgOptions::default()),
        "<rect x=\"340\" y=\"220\" width=\"10\" height=\"10\" rx=\"2.5\" ry=\"2.5\" fill=\"#888888\"/>"
    );
}

#[test]
fn test_dashed_line_attributes() {
    let spec = WindowSpec {
        window_type: WindowType::Normal,
        opening: OpeningOptions {
            horizontal: HorizontalOpening::Right,
            ..OpeningOptions::default()
        },
        ..WindowSpec::default()
    };
    let svg = render_svg(&render_window(&spec), &SvgOptions::default());
    assert!(svg.contains("stroke-dasharray=\"7 7\""));
    assert!(svg.contains("stroke-width=\"0.4\""));
}

#[test]
fn test_path_data_inserts_arc_start() {
    let outline = Outline::new()
        .move_to(Point::new(0.0, 10.0))
        .upper_half_ellipse(Point::new(20.0, 5.0), 10.0, 5.0)
        .close();
    assert_eq!(
        path_data(&outline),
        "M 0 10 L 10 5 A 10 5 0 0 1 30 5 Z"
    );
}

#[test]
fn test_polyline_path_data() {
    assert_eq!(polyline_path_data(&[]), "");
    assert_eq!(
        polyline_path_data(&[Point::new(0.0, 0.0), Point::new(1.5, 2.0)]),
        "M 0 0 L 1.5 2 Z"
    );
}

#[test]
fn test_text_is_escaped() {
    let primitive = Primitive::new(
        Role::Dimension,
        sashkit_designer::Shape::Text {
            position: Point::new(0.0, 0.0),
            content: "<b>".to_string(),
            font_size: 14.0,
            rotation: 0.0,
            anchor: sashkit_designer::TextAnchor::Start,
        },
        Style::fill_only("#000"),
    );
    let svg = render_primitive(&primitive, &SvgOptions::default());
    assert!(svg.contains("&lt;b&gt;"));
    assert!(svg.contains("text-anchor=\"start\""));
    assert!(!svg.contains("rotate("));
}
