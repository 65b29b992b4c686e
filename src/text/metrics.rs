//! Font-independent advance estimates.
//!
//! Scenes size pills, bubbles and cards before any font is loaded, so they need widths that
//! do not depend on which face ends up rasterizing the text. The estimates are tuned to
//! humanist sans faces and are deliberately a little generous.

use crate::foundation::core::Fps;
use crate::text::layout::{Measure, TextLayout, layout_units};
use crate::text::reveal::{TextReveal, reveal_units};
use crate::text::style::{TextAlign, TextStyle};

/// Advance of one character in em at regular weight.
fn char_em(c: char) -> f64 {
    match c {
        ' ' => 0.27,
        'i' | 'l' | 'j' | '.' | ',' | '\'' | '!' | '|' | ':' | ';' | 'I' => 0.26,
        'f' | 't' | 'r' | '(' | ')' | '-' | '/' => 0.36,
        'm' | 'w' => 0.84,
        'M' | 'W' | '@' | '%' => 0.9,
        '0'..='9' => 0.58,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii_lowercase() => 0.54,
        c if c.is_whitespace() => 0.27,
        _ => 0.7,
    }
}

fn weight_factor(weight: u16) -> f64 {
    1.0 + (f64::from(weight) - 400.0) / 1000.0 * 0.15
}

/// Estimated advance of `text` in design pixels.
pub fn approx_width(text: &str, style: &TextStyle) -> f64 {
    let em: f64 = text.chars().map(char_em).sum();
    em * style.size * weight_factor(style.weight) + style.letter_spacing * text.chars().count() as f64
}

/// [`Measure`] backed by [`approx_width`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMeasure;

impl Measure for ApproxMeasure {
    // Layout adds letter spacing per unit itself.
    fn advance(&mut self, text: &str, style: &TextStyle) -> f64 {
        approx_width(
            text,
            &TextStyle {
                letter_spacing: 0.0,
                ..*style
            },
        )
    }
}

/// Estimated static layout of `text`, used for sizing containers.
pub fn approx_layout(
    text: &str,
    style: &TextStyle,
    max_width: Option<f64>,
    align: TextAlign,
) -> TextLayout {
    let revealed = reveal_units(text, TextReveal::Static, 0, Fps::whole(30));
    layout_units(&revealed, style, max_width, align, &mut ApproxMeasure)
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
