use sashkit_core::{
    ArcType, BaseOptions, BaseType, GeometryError, HorizontalOpening, MuntinOptions,
    OpeningOptions, TraverseOptions, VerticalOpening, WindowSpec, WindowType,
};
use sashkit_designer::pipeline::STAGES;
use sashkit_designer::primitives::Role;
use sashkit_designer::{diagnose, render_window};

fn full_featured() -> WindowSpec {
    WindowSpec {
        arc_type: ArcType::Semicircular,
        base: BaseOptions {
            kind: BaseType::Glazed,
            ..BaseOptions::default()
        },
        muntins: MuntinOptions {
            enabled: true,
            ..MuntinOptions::default()
        },
        traverses: TraverseOptions {
            enabled: true,
            count_x: 2,
            count_y: 2,
            width: 8.0,
        },
        opening: OpeningOptions {
            horizontal: HorizontalOpening::Left,
            vertical: VerticalOpening::Down,
        },
        ..WindowSpec::default()
    }
}

#[test]
fn test_stage_names() {
    let names: Vec<&str> = STAGES.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "frame",
            "glazing",
            "base_panel",
            "muntins",
            "traverses",
            "miter_lines",
            "openings",
            "dimensions"
        ]
    );
}

#[test]
fn test_full_featured_render() {
    let primitives = render_window(&full_featured());
    let count = |role: Role| primitives.iter().filter(|p| p.role == role).count();
    assert_eq!(count(Role::Frame), 1);
    assert_eq!(count(Role::Glazing), 1);
    assert_eq!(count(Role::BasePanel), 1);
    assert_eq!(count(Role::BaseInset), 1);
    assert_eq!(count(Role::Traverse), 4);
    assert_eq!(count(Role::TraverseCore), 4);
    assert_eq!(count(Role::Crossing), 4);
    assert_eq!(count(Role::Muntin), 4);
    assert_eq!(count(Role::Miter), 2);
    assert_eq!(count(Role::Opening), 4);
    assert_eq!(count(Role::Handle), 1);
    // Frame and base band, both axes
    assert_eq!(count(Role::Dimension), 16);
}

#[test]
fn test_repeated_renders_identical() {
    let spec = full_featured();
    let first = render_window(&spec);
    let second = render_window(&spec);
    assert_eq!(first, second);
}

#[test]
fn test_collapsed_window_renders() {
    let spec = WindowSpec {
        width: 10.0,
        height: 10.0,
        inner_margin: 10.0,
        ..full_featured()
    };
    let issues = diagnose(&spec);
    assert_eq!(issues.len(), 3);
    assert!(matches!(issues[2], GeometryError::DegenerateArc { .. }));

    let primitives = render_window(&spec);
    assert!(primitives.iter().all(|p| p.is_finite()));
    assert!(primitives.iter().all(|p| p.role != Role::Traverse));
    assert!(primitives.iter().all(|p| p.role != Role::Muntin));
    assert!(primitives.iter().all(|p| p.role != Role::Opening));
}

#[test]
fn test_normal_window_roles() {
    let spec = WindowSpec {
        window_type: WindowType::Normal,
        ..WindowSpec::default()
    };
    let primitives = render_window(&spec);
    let miters = primitives.iter().filter(|p| p.role == Role::Miter).count();
    assert_eq!(miters, 4);
}
