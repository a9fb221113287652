//! Base panel beneath the glazing
//!
//! The band always spans the inner width and sits on the bottom margin. What
//! goes inside it depends on the variant:
//! - margined: a frame-colored inset, recessed by the panel margin
//! - solid: the same inset with the margin forced to zero
//! - glazed: the band is glass, with a solid strip along its top

use sashkit_core::{BaseType, Rect, WindowSpec};
use serde::{Deserialize, Serialize};

use crate::layout::WindowLayout;
use crate::primitives::{Primitive, Role, Style};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasePanel {
    pub kind: BaseType,
    pub band: Rect,
    /// Recessed inset, or the top strip for glazed panels
    pub inset: Rect,
}

impl BasePanel {
    /// `None` when the window has no base panel.
    pub fn build(spec: &WindowSpec, layout: &WindowLayout) -> Option<Self> {
        if !spec.base.is_present() {
            return None;
        }

        let band = Rect::new(
            layout.margin,
            layout.height - layout.margin - layout.base_height,
            layout.inner_width,
            layout.base_height,
        );

        let inset = match spec.base.kind {
            BaseType::Glazed => Rect::new(
                band.x,
                band.y,
                band.width,
                spec.base.glazed_margin.min(band.height),
            ),
            _ => band.inset(spec.base.effective_margin()),
        };

        Some(Self {
            kind: spec.base.kind,
            band,
            inset,
        })
    }

    pub fn to_primitives(&self, spec: &WindowSpec) -> Vec<Primitive> {
        let palette = &spec.palette;
        let stroke_width = spec.base.effective_stroke_width();

        let (band_fill, inset_fill) = match self.kind {
            BaseType::Glazed => (&palette.glazing, &palette.frame),
            _ => (&palette.base, &palette.frame),
        };

        let mut primitives = Vec::with_capacity(2);
        if !self.band.is_empty() {
            primitives.push(Primitive::rect(
                Role::BasePanel,
                self.band,
                Style::filled(band_fill, &palette.stroke, stroke_width),
            ));
        }
        if !self.inset.is_empty() {
            primitives.push(Primitive::rect(
                Role::BaseInset,
                self.inset,
                Style::filled(inset_fill, &palette.stroke, stroke_width),
            ));
        }
        primitives
    }
}

/// Render stage: base panel band and inset.
pub fn base_panel(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    BasePanel::build(spec, layout)
        .map(|panel| panel.to_primitives(spec))
        .unwrap_or_default()
}
