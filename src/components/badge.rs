use crate::animation::interp::Tween;
use crate::animation::proc::{SpringConfig, spring};
use crate::components::label::Label;
use crate::foundation::color::Color;
use crate::foundation::core::Affine;
use crate::scene::model::{Node, Paint, Shape, ShapeNode, StrokeStyle};
use crate::scenes::SceneCtx;
use crate::text::style::TextStyle;

const PAD_X: f64 = 20.0;
const PAD_Y: f64 = 8.0;
const DOT: f64 = 8.0;
const GAP: f64 = 10.0;

/// Frosted uppercase pill with a colored dot, scaling in on a spring after `delay_s`.
///
/// The returned node is centered on its local origin.
pub fn glass_badge(cx: &SceneCtx, text: &str, color: Color, delay_s: f64, font_size: f64) -> Node {
    let style = TextStyle::body(font_size, color).weight(600).tracking_px(2.0);
    let upper = text.to_uppercase();
    let label = Label::new(&upper, style);
    let (tw, th) = label.approx_size();
    let h = th + PAD_Y * 2.0;
    let w = PAD_X * 2.0 + DOT + GAP + tw;

    let delay = cx.frames(delay_s) as f64;
    let local = cx.f() - delay;
    let scale = spring(local, cx.fps, SpringConfig::default());
    let opacity = Tween::unit(0.0, 8.0).at(local);

    let pill = Node::shape(ShapeNode {
        shape: Shape::RoundedRect {
            w,
            h,
            radius: h / 2.0,
        },
        fill: Some(Paint::Solid(Color::WHITE.with_alpha(0.06))),
        stroke: Some(StrokeStyle {
            color: Color::WHITE.with_alpha(0.12),
            width: 1.0,
        }),
    });
    let dot = Node::fill(Shape::Ellipse { w: DOT, h: DOT }, Paint::Solid(color))
        .at(PAD_X, (h - DOT) / 2.0);
    let text = label
        .build(cx)
        .at(PAD_X + DOT + GAP, (h - style.line_px()) / 2.0);

    Node::group(vec![pill, dot, text])
        .at(-w / 2.0, -h / 2.0)
        .then(Affine::scale(scale.max(0.0)))
        .with_opacity(opacity)
        .named("badge")
}

#[cfg(test)]
#[path = "../../tests/unit/components/badge.rs"]
mod tests;
