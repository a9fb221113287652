use sashkit_core::{
    ArcType, BaseOptions, BaseType, MuntinOptions, TraverseOptions, WindowSpec, WindowType,
};
use sashkit_designer::bars::{
    bar_centers, crossing_patches, horizontal_bar_quad, muntins, traverses, vertical_bar_quad,
};
use sashkit_designer::primitives::{Role, Shape};
use sashkit_designer::{ArcBoundary, WindowLayout};

const EPSILON: f64 = 1e-9;

fn traverse_spec(window_type: WindowType, count_x: u32, count_y: u32) -> WindowSpec {
    WindowSpec {
        window_type,
        traverses: TraverseOptions {
            enabled: true,
            count_x,
            count_y,
            width: 6.0,
        },
        ..WindowSpec::default()
    }
}

#[test]
fn test_spacing_law_holds_for_all_counts() {
    for count in 1..=10u32 {
        let centers = bar_centers(10.0, 330.0, count);
        assert_eq!(centers.len(), count as usize);
        let step = 330.0 / (count as f64 + 1.0);
        assert!(centers[0] > 10.0);
        assert!(*centers.last().unwrap() < 340.0);
        for pair in centers.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < EPSILON);
        }
    }
}

#[test]
fn test_zero_counts_produce_nothing() {
    let spec = WindowSpec {
        muntins: MuntinOptions {
            enabled: true,
            count_x: 0,
            count_y: 0,
            stroke_width: 2.0,
        },
        ..traverse_spec(WindowType::Arched, 0, 0)
    };
    let layout = WindowLayout::from_spec(&spec);
    assert!(muntins(&spec, &layout).is_empty());
    assert!(traverses(&spec, &layout).is_empty());
}

#[test]
fn test_two_by_one_traverses_on_normal_window() {
    let spec = traverse_spec(WindowType::Normal, 2, 1);
    let layout = WindowLayout::from_spec(&spec);
    let primitives = traverses(&spec, &layout);
    let crossings = primitives
        .iter()
        .filter(|p| p.role == Role::Crossing)
        .count();
    assert_eq!(crossings, 2);
    assert_eq!(crossing_patches(&spec, &layout).len(), 2);
}

#[test]
fn test_horizontal_traverse_above_apex_omitted() {
    let boundary = ArcBoundary::new(10.0, 330.0, 50.0);
    // Both edges above the apex
    assert!(horizontal_bar_quad(&boundary, 4.0, 6.0, 390.0).is_none());
    // Bottom edge dips under the apex
    let quad = horizontal_bar_quad(&boundary, 9.0, 6.0, 390.0).unwrap();
    assert_eq!(quad[2].x, quad[3].x);
    assert!(quad[1].x > quad[0].x);
}

#[test]
fn test_disabled_families() {
    let spec = WindowSpec::default();
    let layout = WindowLayout::from_spec(&spec);
    assert!(muntins(&spec, &layout).is_empty());
    assert!(traverses(&spec, &layout).is_empty());
}

#[test]
fn test_vertical_traverse_bottom_is_glazing_line() {
    let spec = traverse_spec(WindowType::Arched, 2, 0);
    let layout = WindowLayout::from_spec(&spec);
    let boundary = layout.boundary();
    for x in bar_centers(layout.margin, layout.inner_width, 2) {
        let quad = vertical_bar_quad(boundary, x, 10.0, layout.glazing_bottom()).unwrap();
        assert_eq!(quad[2].y, 390.0);
        assert_eq!(quad[3].y, 390.0);
        assert!(quad[0].y >= boundary.apex_y());
    }
}

#[test]
fn test_muntins_stay_inside_glazing() {
    let spec = WindowSpec {
        arc_type: ArcType::Semicircular,
        muntins: MuntinOptions {
            enabled: true,
            count_x: 4,
            count_y: 6,
            stroke_width: 1.0,
        },
        ..WindowSpec::default()
    };
    let layout = WindowLayout::from_spec(&spec);
    let boundary = layout.boundary();
    let lines = muntins(&spec, &layout);
    assert_eq!(lines.len(), 10);
    for line in &lines {
        if let Shape::Line { from, to } = &line.shape {
            for p in [from, to] {
                assert!(p.x >= layout.margin - EPSILON);
                assert!(p.x <= layout.margin + layout.inner_width + EPSILON);
                assert!(p.y >= boundary.arc_y(p.x, 0.0) - 1e-6);
                assert!(p.y <= layout.glazing_bottom() + EPSILON);
            }
        } else {
            panic!("muntins are lines");
        }
    }
}

#[test]
fn test_wide_traverses_stay_inside_flat_glazing() {
    let spec = WindowSpec {
        window_type: WindowType::Normal,
        width: 300.0,
        height: 120.0,
        traverses: TraverseOptions {
            enabled: true,
            count_x: 0,
            count_y: 10,
            width: 20.0,
        },
        ..WindowSpec::default()
    };
    let layout = WindowLayout::from_spec(&spec);
    let bars: Vec<_> = traverses(&spec, &layout)
        .into_iter()
        .filter(|p| p.role == Role::Traverse)
        .collect();
    assert_eq!(bars.len(), 10);
    for bar in &bars {
        let bounds = bar.bounds().unwrap();
        assert!(bounds.y >= layout.margin - EPSILON);
        assert!(bounds.bottom() <= layout.glazing_bottom() + EPSILON);
        // Every flat-window bar spans the whole glazing width
        assert!((bounds.x - layout.margin).abs() < EPSILON);
        assert!((bounds.width - layout.inner_width).abs() < EPSILON);
    }
}

#[test]
fn test_vertical_traverses_stop_above_tall_base() {
    let spec = WindowSpec {
        arc_type: ArcType::Semicircular,
        base: BaseOptions {
            kind: BaseType::Solid,
            height: 305.0,
            ..BaseOptions::default()
        },
        traverses: TraverseOptions {
            enabled: true,
            count_x: 10,
            count_y: 0,
            width: 6.0,
        },
        ..WindowSpec::default()
    };
    let layout = WindowLayout::from_spec(&spec);
    assert_eq!(layout.glazing_bottom(), 85.0);
    let bars = traverses(&spec, &layout);
    assert!(!bars.is_empty());
    for bar in &bars {
        let bounds = bar.bounds().unwrap();
        assert!(
            bounds.bottom() <= layout.glazing_bottom() + EPSILON,
            "{:?} reaches into the base panel",
            bar
        );
    }
}
