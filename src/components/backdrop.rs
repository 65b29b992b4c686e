use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point};
use crate::scene::model::{GradientStop, Node, Paint, Shape};
use crate::scene::palette;
use crate::scenes::{DESIGN_H, DESIGN_W};
use kurbo::Shape as _;

fn full_rect() -> Shape {
    Shape::Rect {
        w: DESIGN_W,
        h: DESIGN_H,
    }
}

/// Full-canvas background filled with `paint`.
pub fn backdrop(paint: Paint) -> Node {
    Node::fill(full_rect(), paint).named("backdrop")
}

/// Elliptical glow of `inner` at `center` (fractions of the canvas) fading into the page color
/// at 70% of the way to the farthest corner.
pub fn radial_backdrop(center: Point, inner: Color) -> Node {
    backdrop(Paint::Radial {
        center,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: inner,
            },
            GradientStop {
                offset: 0.7,
                color: palette::BG,
            },
        ],
    })
}

/// Square line grid with `spacing` px cells, scaled about the canvas center.
pub fn line_grid(spacing: f64, color: Color, scale: f64) -> Node {
    let spacing = spacing.max(4.0);
    let pad = spacing * 2.0;
    let mut path = BezPath::new();
    let mut x = -pad;
    while x <= DESIGN_W + pad {
        path.extend(kurbo::Rect::new(x, -pad, x + 1.0, DESIGN_H + pad).path_elements(0.1));
        x += spacing;
    }
    let mut y = -pad;
    while y <= DESIGN_H + pad {
        path.extend(kurbo::Rect::new(-pad, y, DESIGN_W + pad, y + 1.0).path_elements(0.1));
        y += spacing;
    }
    Node::fill(Shape::Path(path), Paint::Solid(color))
        .scaled_about(scale, DESIGN_W / 2.0, DESIGN_H / 2.0)
        .named("grid")
}

/// Dot lattice: a 1px dot in the top-left corner of every `spacing` px cell.
pub fn dot_grid(spacing: f64, color: Color) -> Node {
    let spacing = spacing.max(4.0);
    let mut path = BezPath::new();
    let mut y = 1.0;
    while y < DESIGN_H {
        let mut x = 1.0;
        while x < DESIGN_W {
            path.extend(kurbo::Circle::new((x, y), 1.0).path_elements(0.1));
            x += spacing;
        }
        y += spacing;
    }
    Node::fill(Shape::Path(path), Paint::Solid(color)).named("grid")
}

/// Horizontal gradient bar across the top edge, revealed left to right.
pub fn top_bar(progress: f64, height: f64, colors: &[Color]) -> Node {
    let w = DESIGN_W * progress.clamp(0.0, 1.0);
    Node::fill(Shape::Rect { w, h: height }, Paint::linear(90.0, colors)).named("top-bar")
}

#[cfg(test)]
#[path = "../../tests/unit/components/backdrop.rs"]
mod tests;
