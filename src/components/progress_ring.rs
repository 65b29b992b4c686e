use std::f64::consts::{FRAC_PI_2, TAU};

use crate::animation::ease::Ease;
use crate::components::label::Label;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2};
use crate::scene::model::{Node, Shape};
use crate::scene::palette;
use crate::scenes::SceneCtx;
use crate::text::style::TextStyle;
use kurbo::Shape as _;

/// Circular progress indicator. The node is centered on its local origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRing<'a> {
    /// Target fill fraction in `[0, 1]`.
    pub value: f64,
    /// Outer diameter.
    pub size: f64,
    /// Stroke thickness.
    pub thickness: f64,
    /// Arc color.
    pub color: Color,
    /// Track color behind the arc.
    pub track: Color,
    /// Centered caption such as `"2/4"`.
    pub label: Option<&'a str>,
    /// Fill animation length in seconds.
    pub duration_s: f64,
    /// Delay before filling starts, in seconds.
    pub delay_s: f64,
}

impl<'a> ProgressRing<'a> {
    /// Corner-sized ring with a faint track of the arc color and a one second fill.
    pub fn new(value: f64, color: Color, label: Option<&'a str>, delay_s: f64) -> Self {
        Self {
            value,
            size: 48.0,
            thickness: 3.0,
            color,
            track: color.with_alpha(0.12),
            label,
            duration_s: 1.0,
            delay_s,
        }
    }

    /// Filled fraction at the current frame.
    pub fn fraction(&self, cx: &SceneCtx) -> f64 {
        let start = cx.frames(self.delay_s) as f64;
        let len = (cx.frames(self.duration_s) as f64).max(1.0);
        self.value.clamp(0.0, 1.0) * cx.progress(start, len, Ease::OutCubic)
    }

    /// Display node at the current frame.
    pub fn node(&self, cx: &SceneCtx) -> Node {
        let r = (self.size - self.thickness) / 2.0;
        let mut children = vec![
            Node::stroke(
                Shape::Path(kurbo::Circle::new(Point::ORIGIN, r).to_path(0.1)),
                self.track,
                self.thickness,
            )
            .named("ring-track"),
        ];

        let f = self.fraction(cx);
        if f > 0.0 {
            let arc = kurbo::Arc::new(Point::ORIGIN, Vec2::new(r, r), -FRAC_PI_2, TAU * f, 0.0);
            children.push(
                Node::stroke(Shape::Path(arc.to_path(0.1)), self.color, self.thickness)
                    .named("ring-arc"),
            );
        }

        if let Some(text) = self.label {
            let style = TextStyle::body(11.0, palette::TEXT_MUTED).weight(600);
            children.push(
                Label::new(text, style)
                    .centered(self.size)
                    .build(cx)
                    .at(-self.size / 2.0, -style.line_px() / 2.0),
            );
        }

        Node::group(children).named("progress-ring")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/progress_ring.rs"]
mod tests;
