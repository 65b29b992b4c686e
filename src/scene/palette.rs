//! Brand palette shared by every scene.

use crate::foundation::color::Color;

/// Deep navy page background.
pub const BG: Color = Color::rgb8(0x0A, 0x16, 0x28);
/// Primary blue.
pub const PRIMARY: Color = Color::rgb8(0x3B, 0x82, 0xF6);
/// Lighter primary blue.
pub const PRIMARY_LIGHT: Color = Color::rgb8(0x60, 0xA5, 0xFA);
/// Emerald accent, also used for "correct".
pub const ACCENT: Color = Color::rgb8(0x10, 0xB9, 0x81);
/// Amber accent.
pub const ACCENT_YELLOW: Color = Color::rgb8(0xF5, 0x9E, 0x0B);
/// Red, used for "wrong".
pub const DANGER: Color = Color::rgb8(0xEF, 0x44, 0x44);
/// Violet accent.
pub const PURPLE: Color = Color::rgb8(0x8B, 0x5C, 0xF6);
/// Primary text.
pub const TEXT: Color = Color::rgb8(0xF8, 0xFA, 0xFC);
/// Secondary text.
pub const TEXT_MUTED: Color = Color::rgb8(0x94, 0xA3, 0xB8);
/// Card surface.
pub const SURFACE: Color = Color::rgb8(0x1E, 0x29, 0x3B);
/// Raised card surface and borders.
pub const SURFACE_LIGHT: Color = Color::rgb8(0x33, 0x41, 0x55);
