use crate::foundation::color::Color;
use crate::scene::model::{Node, TextNode};
use crate::scenes::SceneCtx;
use crate::text::metrics::approx_layout;
use crate::text::reveal::TextReveal;
use crate::text::style::{TextAlign, TextStyle};

/// Builder for text nodes. The node's local origin is the top-left of its text box.
#[derive(Clone, Copy, Debug)]
pub struct Label<'a> {
    text: &'a str,
    style: TextStyle,
    reveal: TextReveal,
    width: Option<f64>,
    align: TextAlign,
    strike: Option<Color>,
}

impl<'a> Label<'a> {
    /// Static, unwrapped, start-aligned text.
    pub fn new(text: &'a str, style: TextStyle) -> Self {
        Self {
            text,
            style,
            reveal: TextReveal::Static,
            width: None,
            align: TextAlign::Start,
            strike: None,
        }
    }

    /// Animate with `reveal`.
    pub fn reveal(mut self, reveal: TextReveal) -> Self {
        self.reveal = reveal;
        self
    }

    /// Wrap at `width`.
    pub fn wrap(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Align lines inside the box.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Centered text in a box of `width`.
    pub fn centered(self, width: f64) -> Self {
        self.wrap(width).align(TextAlign::Center)
    }

    /// Strike through with `color` when given.
    pub fn strike(mut self, color: Option<Color>) -> Self {
        self.strike = color;
        self
    }

    /// Estimated `(width, height)` of the laid-out box.
    pub fn approx_size(&self) -> (f64, f64) {
        let l = approx_layout(self.text, &self.style, self.width, self.align);
        (l.width, l.height.max(self.style.line_px()))
    }

    /// Estimated `(width, height)` shrunk to the widest line, as a box with a max width would be.
    pub fn approx_fit(&self) -> (f64, f64) {
        let l = approx_layout(self.text, &self.style, self.width, self.align);
        (l.content_width(), l.height.max(self.style.line_px()))
    }

    /// Build the node at the current frame.
    pub fn build(self, cx: &SceneCtx) -> Node {
        Node::text(TextNode {
            style: self.style,
            width: self.width,
            align: self.align,
            revealed: cx.reveal(self.text, self.reveal),
            strike: self.strike,
        })
    }
}
