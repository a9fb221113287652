use sashkit_core::{ArcType, WindowSpec, WindowType};
use sashkit_designer::arc::{arc_height_for, ArcBoundary, ArcProfile};

const EPSILON: f64 = 1e-9;

fn boundary_for(arc_type: ArcType) -> ArcBoundary {
    let spec = WindowSpec {
        arc_type,
        ..WindowSpec::default()
    };
    ArcProfile::from_spec(&spec).boundary
}

#[test]
fn test_shallow_arc_height_rule() {
    // height * 0.15 wins on tall windows
    assert!((arc_height_for(350.0, 400.0, ArcType::Shallow) - 60.0).abs() < EPSILON);
    // width * 0.25 wins on narrow ones
    assert!((arc_height_for(100.0, 400.0, ArcType::Shallow) - 25.0).abs() < EPSILON);
}

#[test]
fn test_arc_height_clamped() {
    assert_eq!(arc_height_for(-10.0, 400.0, ArcType::Semicircular), 0.0);
    assert_eq!(arc_height_for(540.0, 200.0, ArcType::Semicircular), 200.0);
    assert_eq!(arc_height_for(f64::NAN, 200.0, ArcType::Shallow), 0.0);
}

#[test]
fn test_width_non_decreasing_down_to_baseline() {
    for arc_type in [ArcType::Shallow, ArcType::Semicircular] {
        let boundary = boundary_for(arc_type);
        let apex = boundary.apex_y();
        let baseline = boundary.baseline_y();
        let steps = 200;
        let mut previous = boundary.arc_width_at_y(apex);
        for i in 1..=steps {
            let y = apex + (baseline - apex) * i as f64 / steps as f64;
            let width = boundary.arc_width_at_y(y);
            assert!(width + EPSILON >= previous, "{:?} y={}", arc_type, y);
            previous = width;
        }
        assert_eq!(previous, boundary.inner_width());
        assert_eq!(boundary.arc_width_at_y(baseline + 50.0), boundary.inner_width());
    }
}

#[test]
fn test_arc_width_continuous() {
    let boundary = boundary_for(ArcType::Semicircular);
    let apex = boundary.apex_y();
    let baseline = boundary.baseline_y();
    // Largest jump between samples 0.01 apart stays small away from the apex
    let mut y = apex + 1.0;
    while y < baseline + 1.0 {
        let a = boundary.arc_width_at_y(y);
        let b = boundary.arc_width_at_y(y + 0.01);
        assert!((b - a).abs() < 1.0, "jump at y={}", y);
        y += 0.01;
    }
}

#[test]
fn test_arc_y_symmetric() {
    let boundary = boundary_for(ArcType::Shallow);
    let cx = boundary.center_x();
    for dx in [5.0, 40.0, 120.0, 164.0] {
        let left = boundary.arc_y(cx - dx, 0.0);
        let right = boundary.arc_y(cx + dx, 0.0);
        assert!((left - right).abs() < EPSILON);
    }
}

#[test]
fn test_normal_window_boundary_is_flat() {
    let spec = WindowSpec {
        window_type: WindowType::Normal,
        arc_type: ArcType::Semicircular,
        ..WindowSpec::default()
    };
    let boundary = ArcProfile::from_spec(&spec).boundary;
    assert!(boundary.is_flat());
    for x in [0.0, 10.0, 175.0, 340.0, 500.0] {
        assert_eq!(boundary.arc_y(x, 0.0), 10.0);
    }
    assert_eq!(boundary.arc_width_at_y(9.0), 0.0);
}
