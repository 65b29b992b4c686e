use crate::text::reveal::{Granularity, RevealedText};
use crate::text::style::{TextAlign, TextStyle};

/// Advance-width oracle for a single-line run of text.
pub trait Measure {
    /// Advance width of `text` set in `style`, excluding letter spacing.
    fn advance(&mut self, text: &str, style: &TextStyle) -> f64;
}

/// Position of one reveal unit inside the text box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedUnit {
    /// Index into [`RevealedText::units`].
    pub index: usize,
    /// Line number.
    pub line: usize,
    /// Left edge relative to the text box.
    pub x: f64,
    /// Advance width including letter spacing.
    pub width: f64,
}

/// A wrapped line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineBox {
    /// Left edge after alignment.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Content width.
    pub width: f64,
}

/// Result of laying out a revealed text run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    /// Placed units (spacers included).
    pub units: Vec<PlacedUnit>,
    /// Wrapped lines, top to bottom.
    pub lines: Vec<LineBox>,
    /// Box width (the wrap width when given, else the widest line).
    pub width: f64,
    /// Box height (`lines * line height`).
    pub height: f64,
}

impl TextLayout {
    /// Width of the widest line.
    pub fn content_width(&self) -> f64 {
        self.lines.iter().map(|l| l.width).fold(0.0, f64::max)
    }
}

/// A breakable group: consecutive units that must stay on one line.
struct Cluster {
    units: Vec<(usize, f64)>,
    width: f64,
}

/// Lay out `text` with greedy line breaking at word boundaries.
///
/// Words that are wider than `max_width` on their own are placed on a line of their own and
/// overflow rather than being split.
pub fn layout_units(
    text: &RevealedText,
    style: &TextStyle,
    max_width: Option<f64>,
    align: TextAlign,
    measure: &mut dyn Measure,
) -> TextLayout {
    let spacing = style.letter_spacing;
    let space = {
        let with = measure.advance("x x", style);
        let without = measure.advance("xx", style);
        (with - without).max(0.0) + spacing
    };
    let mut unit_width = |s: &str| measure.advance(s, style) + spacing * s.chars().count() as f64;

    let mut clusters = Vec::<Cluster>::new();
    match text.granularity {
        Granularity::Words => {
            for (i, u) in text.units.iter().enumerate() {
                let w = unit_width(&u.text);
                clusters.push(Cluster {
                    units: vec![(i, w)],
                    width: w,
                });
            }
        }
        Granularity::Chars => {
            let mut cur: Option<Cluster> = None;
            for (i, u) in text.units.iter().enumerate() {
                if u.is_space {
                    clusters.extend(cur.take());
                    continue;
                }
                let w = unit_width(&u.text);
                let c = cur.get_or_insert_with(|| Cluster {
                    units: Vec::new(),
                    width: 0.0,
                });
                c.units.push((i, w));
                c.width += w;
            }
            clusters.extend(cur);
        }
    }

    // Greedy fill.
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut line_widths: Vec<f64> = Vec::new();
    for (ci, c) in clusters.iter().enumerate() {
        let fits = match (line_widths.last(), max_width) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(lw), Some(mw)) => lw + space + c.width <= mw + 1e-6,
        };
        if !fits {
            lines.push(Vec::new());
            line_widths.push(-space);
        }
        if let (Some(line), Some(lw)) = (lines.last_mut(), line_widths.last_mut()) {
            *lw += space + c.width;
            line.push(ci);
        }
    }

    let box_width = max_width.unwrap_or_else(|| line_widths.iter().copied().fold(0.0, f64::max));
    let line_px = style.line_px();

    let mut out = TextLayout {
        units: Vec::new(),
        lines: Vec::with_capacity(lines.len()),
        width: box_width,
        height: line_px * lines.len() as f64,
    };

    for (li, (line, lw)) in lines.iter().zip(&line_widths).enumerate() {
        let x0 = match align {
            TextAlign::Start => 0.0,
            TextAlign::Center => (box_width - lw) * 0.5,
            TextAlign::End => box_width - lw,
        };
        out.lines.push(LineBox {
            x: x0,
            y: line_px * li as f64,
            width: *lw,
        });

        let mut x = x0;
        for (k, &ci) in line.iter().enumerate() {
            if k > 0 {
                x += space;
            }
            for &(index, width) in &clusters[ci].units {
                out.units.push(PlacedUnit {
                    index,
                    line: li,
                    x,
                    width,
                });
                x += width;
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
