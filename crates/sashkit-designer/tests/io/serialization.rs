use sashkit_core::{TraverseOptions, WindowSpec};
use sashkit_designer::primitives::{to_json, Primitive};
use sashkit_designer::render_window;

#[test]
fn test_primitive_list_json() {
    let spec = WindowSpec {
        traverses: TraverseOptions {
            enabled: true,
            ..TraverseOptions::default()
        },
        ..WindowSpec::default()
    };
    let primitives = render_window(&spec);
    let json = to_json(&primitives).unwrap();

    assert!(json.contains("\"role\": \"frame\""));
    assert!(json.contains("\"type\": \"outline\""));
    assert!(json.contains("\"cmd\": \"ellipse\""));
    assert!(json.contains("\"role\": \"crossing\""));

    let parsed: Vec<Primitive> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), primitives.len());
    for (a, b) in parsed.iter().zip(&primitives) {
        assert_eq!(a.role, b.role);
        assert_eq!(a.style, b.style);
    }
}

#[test]
fn test_window_spec_json() {
    let spec = WindowSpec::default();
    let json = serde_json::to_string(&spec).unwrap();
    assert!(json.contains("\"window_type\":\"arched\""));
    let parsed: WindowSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, spec);
}
