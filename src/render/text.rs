//! Shaping of reveal units with Parley.
//!
//! Each unit (a word or a character) is shaped on its own so that it can be drawn with its own
//! opacity, rise and scale. Shaped units are cached by text and style.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::error::{ReelError, ReelResult};
use crate::text::fonts::FontBook;
use crate::text::layout::Measure;
use crate::text::metrics::ApproxMeasure;
use crate::text::style::{FontRole, TextStyle};

/// Shaped units kept before the cache is reset.
const SHAPE_CACHE_CAP: usize = 4096;

/// A single-line shaped run.
pub struct ShapedUnit {
    /// Parley layout with one line.
    pub layout: parley::Layout<()>,
    /// Advance width including letter spacing.
    pub width: f64,
    /// Natural line height of the run.
    pub height: f64,
}

struct RoleFace {
    family: String,
    font: vello_cpu::peniko::FontData,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ShapeKey {
    text: String,
    role: FontRole,
    size_bits: u64,
    spacing_bits: u64,
}

/// Parley contexts plus the registered faces of a [`FontBook`].
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    heading: Option<RoleFace>,
    body: Option<RoleFace>,
    cache: HashMap<ShapeKey, Arc<ShapedUnit>>,
}

impl TextEngine {
    /// Register the faces of `fonts`. Roles without a usable face are left empty.
    pub fn new(fonts: &FontBook) -> Self {
        let mut engine = Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            heading: None,
            body: None,
            cache: HashMap::new(),
        };
        for role in FontRole::ALL {
            let Some(face) = fonts.face(role) else {
                continue;
            };
            match engine.register(face.bytes.as_slice()) {
                Ok(family) => {
                    let font = vello_cpu::peniko::FontData::new(
                        vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
                        0,
                    );
                    let slot = match role {
                        FontRole::Heading => &mut engine.heading,
                        FontRole::Body => &mut engine.body,
                    };
                    *slot = Some(RoleFace { family, font });
                }
                Err(e) => tracing::warn!(?role, error = %e, "font face could not be registered"),
            }
        }
        engine
    }

    fn register(&mut self, bytes: &[u8]) -> ReelResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ReelError::render("no font families registered from font bytes"))?;
        Ok(self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ReelError::render("registered font family has no name"))?
            .to_string())
    }

    fn role_face(&self, role: FontRole) -> Option<&RoleFace> {
        match role {
            FontRole::Heading => self.heading.as_ref(),
            FontRole::Body => self.body.as_ref(),
        }
    }

    /// Glyph source for `role`.
    pub fn font(&self, role: FontRole) -> Option<&vello_cpu::peniko::FontData> {
        self.role_face(role).map(|f| &f.font)
    }

    /// Shape `text` as a single line; `None` when the role has no face.
    pub fn shape(&mut self, text: &str, style: &TextStyle) -> Option<Arc<ShapedUnit>> {
        let family = self.role_face(style.role)?.family.clone();
        if !style.size.is_finite() || style.size <= 0.0 {
            return None;
        }

        let key = ShapeKey {
            text: text.to_owned(),
            role: style.role,
            size_bits: style.size.to_bits(),
            spacing_bits: style.letter_spacing.to_bits(),
        };
        if let Some(hit) = self.cache.get(&key) {
            return Some(hit.clone());
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size as f32));
        if style.letter_spacing != 0.0 {
            builder.push_default(parley::style::StyleProperty::LetterSpacing(
                style.letter_spacing as f32,
            ));
        }
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let unit = Arc::new(ShapedUnit {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
            layout,
        });
        if self.cache.len() >= SHAPE_CACHE_CAP {
            self.cache.clear();
        }
        self.cache.insert(key, unit.clone());
        Some(unit)
    }
}

impl Measure for TextEngine {
    fn advance(&mut self, text: &str, style: &TextStyle) -> f64 {
        match self.shape(text, style) {
            Some(unit) => {
                (unit.width - style.letter_spacing * text.chars().count() as f64).max(0.0)
            }
            None => ApproxMeasure.advance(text, style),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
