//! Inline stroke icons (24x24 grid, 2px round strokes).
//!
//! Icons ship as SVG fragments so rendering needs no network or icon-font service. They are
//! referred to by `lucide:<name>` identifiers.

use crate::foundation::color::Color;
use crate::foundation::error::{ReelError, ReelResult};

/// Known icon identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    /// Presentation board.
    Presentation,
    /// Clock face.
    Clock,
    /// Two people.
    Users,
    /// One person.
    User,
    /// Award ribbon.
    Award,
    /// Check mark in a circle.
    CircleCheck,
    /// Cross in a circle.
    CircleX,
    /// Question mark in a circle.
    HelpCircle,
    /// Light bulb.
    Lightbulb,
    /// Ear.
    Ear,
    /// Speech bubble.
    MessageSquare,
    /// Heart with handshake.
    HeartHandshake,
    /// Concentric target.
    Target,
    /// Shield with check mark.
    ShieldCheck,
    /// Check mark.
    Check,
    /// Right arrow.
    ArrowRight,
}

impl IconId {
    /// Every icon.
    pub const ALL: [Self; 16] = [
        Self::Presentation,
        Self::Clock,
        Self::Users,
        Self::User,
        Self::Award,
        Self::CircleCheck,
        Self::CircleX,
        Self::HelpCircle,
        Self::Lightbulb,
        Self::Ear,
        Self::MessageSquare,
        Self::HeartHandshake,
        Self::Target,
        Self::ShieldCheck,
        Self::Check,
        Self::ArrowRight,
    ];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Presentation => "presentation",
            Self::Clock => "clock",
            Self::Users => "users",
            Self::User => "user",
            Self::Award => "award",
            Self::CircleCheck => "circle-check",
            Self::CircleX => "circle-x",
            Self::HelpCircle => "help-circle",
            Self::Lightbulb => "lightbulb",
            Self::Ear => "ear",
            Self::MessageSquare => "message-square",
            Self::HeartHandshake => "heart-handshake",
            Self::Target => "target",
            Self::ShieldCheck => "shield-check",
            Self::Check => "check",
            Self::ArrowRight => "arrow-right",
        }
    }

    /// Parse `lucide:<name>` (the prefix is optional).
    pub fn parse(id: &str) -> ReelResult<Self> {
        let name = id.strip_prefix("lucide:").unwrap_or(id);
        let alias = match name {
            "check-circle" | "circle-check-big" => "circle-check",
            "x-circle" => "circle-x",
            "circle-help" | "circle-question-mark" => "help-circle",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|i| i.name() == alias)
            .ok_or_else(|| ReelError::validation(format!("unknown icon \"{id}\"")))
    }

    fn body(self) -> &'static str {
        match self {
            Self::Presentation => {
                r#"<path d="M2 3h20"/><path d="M21 3v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V3"/><path d="m7 21 5-5 5 5"/>"#
            }
            Self::Clock => {
                r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#
            }
            Self::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Self::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Self::Award => {
                r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#
            }
            Self::CircleCheck => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
            Self::CircleX => {
                r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#
            }
            Self::HelpCircle => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#
            }
            Self::Lightbulb => {
                r#"<path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/><path d="M9 18h6"/><path d="M10 22h4"/>"#
            }
            Self::Ear => {
                r#"<path d="M6 8.5a6.5 6.5 0 1 1 13 0c0 6-6 6-6 10a3.5 3.5 0 1 1-7 0"/><path d="M15 8.5a2.5 2.5 0 0 0-5 0v1a2 2 0 1 1 0 4"/>"#
            }
            Self::MessageSquare => {
                r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#
            }
            Self::HeartHandshake => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/><path d="M12 5 9.04 7.96a2.17 2.17 0 0 0 0 3.08c.82.82 2.13.85 3 .07l2.07-1.9a2.82 2.82 0 0 1 3.79 0l2.96 2.66"/><path d="m18 15-2-2"/><path d="m15 18-2-2"/>"#
            }
            Self::Target => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
            }
            Self::ShieldCheck => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
            }
            Self::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        }
    }

    /// Standalone SVG document drawing this icon in `color`.
    pub fn svg_markup(self, color: Color) -> String {
        let [r, g, b, _] = color.to_rgba8();
        let a = color.a.clamp(0.0, 1.0);
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#{r:02x}{g:02x}{b:02x}" stroke-opacity="{a:.4}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"##,
            self.body()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/icons.rs"]
mod tests;
