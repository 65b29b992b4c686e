use crate::foundation::color::Color;

/// Which configured typeface a run of text uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Display face for titles and numbers.
    Heading,
    /// Running text face.
    Body,
}

impl FontRole {
    /// Both roles, in lookup order.
    pub const ALL: [Self; 2] = [Self::Heading, Self::Body];

    /// Preferred family name for this role.
    pub fn preferred_family(self) -> &'static str {
        match self {
            Self::Heading => "Manrope",
            Self::Body => "Inter",
        }
    }
}

/// Horizontal alignment of wrapped lines inside the text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Flush right.
    End,
}

/// Typographic parameters of a text node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Typeface role.
    pub role: FontRole,
    /// Font size in design pixels.
    pub size: f64,
    /// CSS-like weight (400 regular, 700 bold).
    pub weight: u16,
    /// Fill color.
    pub color: Color,
    /// Line height as a multiple of `size`.
    pub line_height: f64,
    /// Extra advance after every character, in design pixels.
    pub letter_spacing: f64,
}

impl TextStyle {
    /// Body text at `size` with regular weight.
    pub fn body(size: f64, color: Color) -> Self {
        Self {
            role: FontRole::Body,
            size,
            weight: 400,
            color,
            line_height: 1.4,
            letter_spacing: 0.0,
        }
    }

    /// Heading text at `size` with bold weight.
    pub fn heading(size: f64, color: Color) -> Self {
        Self {
            role: FontRole::Heading,
            size,
            weight: 700,
            color,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }

    /// Replace the weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Replace the line height multiplier.
    pub fn line_height(mut self, lh: f64) -> Self {
        self.line_height = lh;
        self
    }

    /// Letter spacing expressed in em.
    pub fn tracking_em(mut self, em: f64) -> Self {
        self.letter_spacing = em * self.size;
        self
    }

    /// Letter spacing in design pixels.
    pub fn tracking_px(mut self, px: f64) -> Self {
        self.letter_spacing = px;
        self
    }

    /// Line box height in design pixels.
    pub fn line_px(&self) -> f64 {
        self.size * self.line_height
    }
}
