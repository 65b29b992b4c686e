//! Retained display list produced by scenes for one frame.
//!
//! Nodes carry a local transform and opacity; world transforms and opacities are the product
//! along the path from the root. Geometry is anchored at the node's local origin.

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Vec2};
use crate::scene::icons::IconId;
use crate::text::reveal::RevealedText;
use crate::text::style::{TextAlign, TextStyle};

/// A node of the per-frame display list.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Optional lookup name.
    pub name: Option<String>,
    /// Local transform relative to the parent.
    pub transform: Affine,
    /// Local opacity multiplier.
    pub opacity: f64,
    /// Payload.
    pub kind: NodeKind,
}

/// Node payload.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Children drawn in order (later on top).
    Group(Vec<Node>),
    /// Filled and/or stroked geometry.
    Shape(ShapeNode),
    /// Text run with per-unit reveal state.
    Text(TextNode),
    /// Inline vector icon.
    Icon(IconNode),
    /// Soft radial glow.
    Glow(GlowNode),
}

/// Geometry anchored at the local origin.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle `(0,0)..(w,h)`.
    Rect {
        /// Width.
        w: f64,
        /// Height.
        h: f64,
    },
    /// Rounded rectangle `(0,0)..(w,h)`; radius is clamped to half the shorter side.
    RoundedRect {
        /// Width.
        w: f64,
        /// Height.
        h: f64,
        /// Corner radius.
        radius: f64,
    },
    /// Ellipse inscribed in `(0,0)..(w,h)`.
    Ellipse {
        /// Width.
        w: f64,
        /// Height.
        h: f64,
    },
    /// Arbitrary path in local coordinates.
    Path(BezPath),
}

/// Color stop of a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Offset in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

/// Fill paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid(Color),
    /// Linear gradient across the shape's bounding box.
    Linear {
        /// CSS angle: 0deg points up, 90deg points right.
        angle_deg: f64,
        /// Stops in increasing offset order.
        stops: Vec<GradientStop>,
    },
    /// Elliptical radial gradient across the shape's bounding box.
    Radial {
        /// Center as a fraction of the bounding box.
        center: Point,
        /// Stops in increasing offset order; offset 1 reaches the farthest box corner.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Linear gradient from evenly spaced colors.
    pub fn linear(angle_deg: f64, colors: &[Color]) -> Self {
        Self::Linear {
            angle_deg,
            stops: even_stops(colors),
        }
    }

    /// Radial gradient from evenly spaced colors.
    pub fn radial(center: Point, colors: &[Color]) -> Self {
        Self::Radial {
            center,
            stops: even_stops(colors),
        }
    }
}

fn even_stops(colors: &[Color]) -> Vec<GradientStop> {
    let n = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| GradientStop {
            offset: i as f64 / n,
            color,
        })
        .collect()
}

/// Outline stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Width in design pixels.
    pub width: f64,
}

/// Geometry with paint.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeNode {
    /// Geometry.
    pub shape: Shape,
    /// Fill, if any.
    pub fill: Option<Paint>,
    /// Stroke, if any.
    pub stroke: Option<StrokeStyle>,
}

/// Text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Typography.
    pub style: TextStyle,
    /// Wrap width; `None` sets a single line.
    pub width: Option<f64>,
    /// Line alignment inside the box.
    pub align: TextAlign,
    /// Units with their per-frame state.
    pub revealed: RevealedText,
    /// Strike-through line color, if struck.
    pub strike: Option<Color>,
}

/// Icon reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconNode {
    /// Which icon.
    pub icon: IconId,
    /// Edge length of the square icon box.
    pub size: f64,
    /// Stroke color.
    pub color: Color,
}

/// Soft circular glow centered on the local origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowNode {
    /// Radius of the solid core.
    pub radius: f64,
    /// Gaussian blur radius applied to the core.
    pub blur: f64,
    /// Core color.
    pub color: Color,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            kind,
        }
    }

    /// Group of children.
    pub fn group(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Group(children))
    }

    /// Filled shape.
    pub fn fill(shape: Shape, paint: Paint) -> Self {
        Self::new(NodeKind::Shape(ShapeNode {
            shape,
            fill: Some(paint),
            stroke: None,
        }))
    }

    /// Stroked shape without fill.
    pub fn stroke(shape: Shape, color: Color, width: f64) -> Self {
        Self::new(NodeKind::Shape(ShapeNode {
            shape,
            fill: None,
            stroke: Some(StrokeStyle { color, width }),
        }))
    }

    /// Shape with explicit fill and stroke.
    pub fn shape(shape: ShapeNode) -> Self {
        Self::new(NodeKind::Shape(shape))
    }

    /// Text run.
    pub fn text(text: TextNode) -> Self {
        Self::new(NodeKind::Text(text))
    }

    /// Icon in a `size` x `size` box anchored at the local origin.
    pub fn icon(icon: IconId, size: f64, color: Color) -> Self {
        Self::new(NodeKind::Icon(IconNode { icon, size, color }))
    }

    /// Glow centered at the local origin.
    pub fn glow(radius: f64, blur: f64, color: Color) -> Self {
        Self::new(NodeKind::Glow(GlowNode {
            radius,
            blur,
            color,
        }))
    }

    /// Set the lookup name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Pre-multiply a translation.
    pub fn at(self, x: f64, y: f64) -> Self {
        self.then(Affine::translate(Vec2::new(x, y)))
    }

    /// Apply `a` after the current local transform.
    pub fn then(mut self, a: Affine) -> Self {
        self.transform = a * self.transform;
        self
    }

    /// Multiply local opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity *= opacity.clamp(0.0, 1.0);
        self
    }

    /// Scale uniformly about `(cx, cy)` in local coordinates (applied after the current transform).
    pub fn scaled_about(self, s: f64, cx: f64, cy: f64) -> Self {
        self.then(Affine::scale_about(s, Point::new(cx, cy)))
    }

    /// Children when this is a group.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Group(c) => c,
            _ => &[],
        }
    }

    /// Depth-first search by name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    /// Visit every node depth-first with its world transform and opacity.
    pub fn visit(&self, parent: Affine, parent_opacity: f64, f: &mut dyn FnMut(&Node, Affine, f64)) {
        let world = parent * self.transform;
        let opacity = parent_opacity * self.opacity;
        f(self, world, opacity);
        for c in self.children() {
            c.visit(world, opacity, f);
        }
    }

    /// Number of nodes in the subtree.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }

    /// Text of every text node in the subtree, in draw order.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.visit(Affine::IDENTITY, 1.0, &mut |n, _, _| {
            if let NodeKind::Text(t) = &n.kind {
                out.push(t.revealed.joined());
            }
        });
        out
    }

    /// World-space translation of this node's origin when nested under `parent`.
    pub fn origin_in(&self, parent: Affine) -> Point {
        (parent * self.transform) * Point::ORIGIN
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
