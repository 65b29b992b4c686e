use crate::foundation::color::Color;
use crate::scene::model::{Node, Paint, Shape, ShapeNode, StrokeStyle};
use kurbo::Shape as _;

/// Rounded card with a fill and an optional hairline border, anchored at its top-left corner.
pub fn panel(w: f64, h: f64, radius: f64, fill: Paint, border: Option<Color>) -> Node {
    Node::shape(ShapeNode {
        shape: Shape::RoundedRect { w, h, radius },
        fill: Some(fill),
        stroke: border.map(|color| StrokeStyle { color, width: 1.0 }),
    })
}

/// Rounded rectangle with per-corner radii `[top_left, top_right, bottom_right, bottom_left]`.
pub fn rounded_corners(w: f64, h: f64, radii: [f64; 4]) -> Shape {
    let [tl, tr, br, bl] = radii;
    let rect = kurbo::Rect::new(0.0, 0.0, w.max(0.0), h.max(0.0));
    let rr = kurbo::RoundedRect::from_rect(rect, kurbo::RoundedRectRadii::new(tl, tr, br, bl));
    Shape::Path(rr.to_path(0.1))
}

/// Square tile with a tinted fill and border, as used behind icons.
pub fn icon_tile(size: f64, radius: f64, color: Color, fill_alpha: u8, border_alpha: u8) -> Node {
    panel(
        size,
        size,
        radius,
        Paint::Solid(color.with_alpha_byte(fill_alpha)),
        Some(color.with_alpha_byte(border_alpha)),
    )
}
