use sashkit_core::{BaseOptions, BaseType, Rect, WindowSpec, WindowType};
use sashkit_designer::primitives::Role;
use sashkit_designer::{render_window, BasePanel, WindowLayout};

fn spec_with(kind: BaseType) -> WindowSpec {
    WindowSpec {
        base: BaseOptions {
            kind,
            height: 80.0,
            margin: 15.0,
            glazed_margin: 10.0,
            stroke_width: 2.0,
        },
        ..WindowSpec::default()
    }
}

#[test]
fn test_solid_base_scenario() {
    let spec = spec_with(BaseType::Solid);
    assert_eq!(spec.base.effective_margin(), 0.0);
    let layout = WindowLayout::from_spec(&spec);
    let panel = BasePanel::build(&spec, &layout).unwrap();
    assert_eq!(panel.inset, panel.band);
}

#[test]
fn test_glazed_panel_strip() {
    let spec = spec_with(BaseType::Glazed);
    let layout = WindowLayout::from_spec(&spec);
    let panel = BasePanel::build(&spec, &layout).unwrap();
    assert_eq!(panel.band, Rect::new(10.0, 310.0, 330.0, 80.0));
    assert_eq!(panel.inset, Rect::new(10.0, 310.0, 330.0, 10.0));
}

#[test]
fn test_base_shortens_glazing_not_arc() {
    let plain = WindowLayout::from_spec(&WindowSpec::default());
    let based = WindowLayout::from_spec(&spec_with(BaseType::Margined));
    assert_eq!(plain.boundary(), based.boundary());
    assert_eq!(based.glazing_bottom(), plain.glazing_bottom() - 80.0);
}

#[test]
fn test_base_on_normal_window() {
    let spec = WindowSpec {
        window_type: WindowType::Normal,
        ..spec_with(BaseType::Margined)
    };
    let primitives = render_window(&spec);
    let band = primitives
        .iter()
        .find(|p| p.role == Role::BasePanel)
        .unwrap();
    assert_eq!(band.style.fill.as_deref(), Some("#ffffff"));
    assert_eq!(band.style.stroke_width, 2.0);
    assert_eq!(
        primitives
            .iter()
            .filter(|p| p.role == Role::BaseInset)
            .count(),
        1
    );
}
