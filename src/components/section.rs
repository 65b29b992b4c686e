use crate::animation::ease::Ease;
use crate::components::label::Label;
use crate::components::progress_ring::ProgressRing;
use crate::foundation::color::Color;
use crate::scene::model::{Node, Paint, Shape};
use crate::scene::palette;
use crate::scenes::{DESIGN_W, SceneCtx};
use crate::text::style::TextStyle;

/// Left edge of the header row.
pub const HEADER_LEFT: f64 = 60.0;
/// Top edge of the header row.
pub const HEADER_TOP: f64 = 48.0;
/// Top edge of the corner progress ring.
pub const RING_TOP: f64 = 40.0;
/// Distance of the corner progress ring from the right edge.
pub const RING_RIGHT: f64 = 60.0;

const CHIP: f64 = 36.0;
const GAP: f64 = 16.0;

/// Opacity of the header row: eased in over the first 20 frames.
pub fn header_progress(cx: &SceneCtx) -> f64 {
    cx.progress(0.0, 20.0, Ease::OutCubic)
}

/// Section header: a numbered gradient chip followed by a muted label, sliding in from the left.
pub fn section_header(cx: &SceneCtx, number: &str, label: &str, chip: [Color; 2]) -> Node {
    let p = header_progress(cx);

    let chip_node = Node::fill(
        Shape::RoundedRect {
            w: CHIP,
            h: CHIP,
            radius: 10.0,
        },
        Paint::linear(135.0, &chip),
    );
    let num_style = TextStyle::heading(16.0, Color::WHITE).weight(800);
    let num = Label::new(number, num_style)
        .centered(CHIP)
        .build(cx)
        .at(0.0, (CHIP - num_style.line_px()) / 2.0);

    let label_style = TextStyle::body(14.0, palette::TEXT_MUTED)
        .weight(500)
        .tracking_px(1.0);
    let text = Label::new(label, label_style)
        .build(cx)
        .at(CHIP + GAP, (CHIP - label_style.line_px()) / 2.0);

    Node::group(vec![chip_node, num, text])
        .at(HEADER_LEFT + (1.0 - p) * -20.0, HEADER_TOP)
        .with_opacity(p)
        .named("section")
}

/// Places `ring` in the top-right corner, fading with the header row.
pub fn corner_ring(cx: &SceneCtx, ring: &ProgressRing<'_>) -> Node {
    let r = ring.size / 2.0;
    Node::group(vec![ring.node(cx)])
        .at(DESIGN_W - RING_RIGHT - r, RING_TOP + r)
        .with_opacity(header_progress(cx))
        .named("corner-ring")
}

#[cfg(test)]
#[path = "../../tests/unit/components/section.rs"]
mod tests;
