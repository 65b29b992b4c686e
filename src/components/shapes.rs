//! Slow-moving decorative shapes scattered behind scene content.

use std::f64::consts::{PI, TAU};

use crate::animation::proc::Oscillator;
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point};
use crate::scene::model::{Node, Paint, Shape};
use crate::scenes::{DESIGN_H, DESIGN_W, SceneCtx};

/// Outline family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Regular hexagon.
    Hexagon,
    /// Filled disc.
    Circle,
    /// Equilateral triangle.
    Triangle,
    /// Square rotated 45 degrees.
    Diamond,
    /// Stroked circle.
    Ring,
    /// Five-pointed star.
    Star,
    /// Plus sign.
    Cross,
}

/// How the shape moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Continuous rotation: `speed * 30` degrees per second.
    Rotate,
    /// Scale pulse of +/-8% at `speed` cycles per second.
    Breathe,
}

/// CSS-style placement of a square box inside the design canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pin {
    /// Offsets from the top and left edges.
    TopLeft(f64, f64),
    /// Offsets from the top and right edges.
    TopRight(f64, f64),
    /// Offsets from the bottom and left edges.
    BottomLeft(f64, f64),
    /// Offsets from the bottom and right edges.
    BottomRight(f64, f64),
}

impl Pin {
    /// Center of a `size` x `size` box placed by this pin.
    pub fn center(self, size: f64) -> Point {
        let h = size / 2.0;
        match self {
            Self::TopLeft(top, left) => Point::new(left + h, top + h),
            Self::TopRight(top, right) => Point::new(DESIGN_W - right - h, top + h),
            Self::BottomLeft(bottom, left) => Point::new(left + h, DESIGN_H - bottom - h),
            Self::BottomRight(bottom, right) => {
                Point::new(DESIGN_W - right - h, DESIGN_H - bottom - h)
            }
        }
    }
}

/// One decorative shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientShape {
    /// Outline.
    pub kind: ShapeKind,
    /// Movement.
    pub motion: Motion,
    /// Bounding box edge length.
    pub size: f64,
    /// Fill (or stroke, for rings) color.
    pub color: Color,
    /// Motion speed factor.
    pub speed: f64,
    /// Overall opacity.
    pub opacity: f64,
    /// Placement.
    pub pin: Pin,
}

const ROTATE_DEG_PER_SEC: f64 = 30.0;
const BREATHE_AMPLITUDE: f64 = 0.08;
const RING_STROKE: f64 = 3.0;

impl AmbientShape {
    /// Rotation in radians at `secs`.
    pub fn rotation(&self, secs: f64) -> f64 {
        match self.motion {
            Motion::Rotate => (secs * self.speed * ROTATE_DEG_PER_SEC).to_radians(),
            Motion::Breathe => 0.0,
        }
    }

    /// Scale factor at `secs`.
    pub fn scale(&self, secs: f64) -> f64 {
        match self.motion {
            Motion::Rotate => 1.0,
            Motion::Breathe => Oscillator::new(1.0, BREATHE_AMPLITUDE, TAU * self.speed).at(secs),
        }
    }

    /// Display node at the current frame.
    pub fn node(&self, cx: &SceneCtx) -> Node {
        let secs = cx.secs();
        let r = self.size / 2.0;
        let shape = match self.kind {
            ShapeKind::Ring => Node::stroke(
                Shape::Path(circle_path(r - RING_STROKE / 2.0)),
                self.color,
                RING_STROKE,
            ),
            kind => Node::fill(Shape::Path(outline(kind, r)), Paint::Solid(self.color)),
        };
        let c = self.pin.center(self.size);
        shape
            .then(Affine::rotate(self.rotation(secs)))
            .then(Affine::scale(self.scale(secs)))
            .then(Affine::translate(c.to_vec2()))
            .with_opacity(self.opacity)
    }
}

fn circle_path(r: f64) -> BezPath {
    use kurbo::Shape as _;
    kurbo::Circle::new(Point::ORIGIN, r.max(0.0)).to_path(0.1)
}

fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

fn regular(n: usize, r: f64) -> BezPath {
    polygon((0..n).map(|i| {
        let a = -PI / 2.0 + TAU * i as f64 / n as f64;
        Point::new(r * a.cos(), r * a.sin())
    }))
}

fn outline(kind: ShapeKind, r: f64) -> BezPath {
    match kind {
        ShapeKind::Hexagon => regular(6, r),
        ShapeKind::Triangle => regular(3, r),
        ShapeKind::Diamond => regular(4, r),
        ShapeKind::Circle | ShapeKind::Ring => circle_path(r),
        ShapeKind::Star => polygon((0..10).map(|i| {
            let a = -PI / 2.0 + PI * i as f64 / 5.0;
            let rr = if i % 2 == 0 { r } else { r * 0.45 };
            Point::new(rr * a.cos(), rr * a.sin())
        })),
        ShapeKind::Cross => {
            let t = r * 0.3;
            polygon(
                [
                    (-t, -r),
                    (t, -r),
                    (t, -t),
                    (r, -t),
                    (r, t),
                    (t, t),
                    (t, r),
                    (-t, r),
                    (-t, t),
                    (-r, t),
                    (-r, -t),
                    (-t, -t),
                ]
                .map(|(x, y)| Point::new(x, y)),
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/shapes.rs"]
mod tests;
