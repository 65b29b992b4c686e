//! Opening title card.

use crate::animation::ease::Ease;
use crate::animation::proc::Oscillator;
use crate::components::backdrop::{line_grid, radial_backdrop, top_bar};
use crate::components::badge::glass_badge;
use crate::components::label::Label;
use crate::components::shapes::{AmbientShape, Motion, Pin, ShapeKind};
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Point};
use crate::scene::icons::IconId;
use crate::scene::model::{Node, Paint, Shape};
use crate::scene::palette;
use crate::scenes::{DESIGN_H, DESIGN_W, Scene, SceneCtx, SceneId, fade_in_chars, fade_in_words};
use crate::text::style::TextStyle;

const TITLE: &str = "Effective Workplace Communication";
const SUBTITLE: &str = "Building stronger teams through clear, respectful dialogue";
const BADGE: &str = "Employee Training Program";

const ICON: f64 = 72.0;
const GAP: f64 = 24.0;
const DIVIDER_H: f64 = 3.0;

/// Slow breathing scale of the background grid.
const GRID_PULSE: Oscillator = Oscillator::new(1.0, 0.03, 1.5);

/// One entry of the bottom info row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoItem {
    /// Leading icon.
    pub icon: IconId,
    /// Caption.
    pub label: &'static str,
}

/// Facts shown under the title.
pub const INFO_ITEMS: [InfoItem; 3] = [
    InfoItem {
        icon: IconId::Clock,
        label: "15 min",
    },
    InfoItem {
        icon: IconId::Users,
        label: "All Teams",
    },
    InfoItem {
        icon: IconId::Award,
        label: "Certificate",
    },
];

const SHAPES: [AmbientShape; 4] = [
    AmbientShape {
        kind: ShapeKind::Hexagon,
        motion: Motion::Rotate,
        size: 200.0,
        color: palette::PRIMARY,
        speed: 0.15,
        opacity: 0.08,
        pin: Pin::TopLeft(80.0, 100.0),
    },
    AmbientShape {
        kind: ShapeKind::Circle,
        motion: Motion::Breathe,
        size: 280.0,
        color: palette::ACCENT,
        speed: 0.4,
        opacity: 0.06,
        pin: Pin::BottomRight(120.0, 80.0),
    },
    AmbientShape {
        kind: ShapeKind::Triangle,
        motion: Motion::Rotate,
        size: 120.0,
        color: palette::PRIMARY_LIGHT,
        speed: 0.2,
        opacity: 0.05,
        pin: Pin::TopRight(200.0, 200.0),
    },
    AmbientShape {
        kind: ShapeKind::Diamond,
        motion: Motion::Breathe,
        size: 100.0,
        color: palette::PRIMARY,
        speed: 0.3,
        opacity: 0.07,
        pin: Pin::BottomLeft(200.0, 250.0),
    },
];

/// Title card: icon, badge, headline, divider and subtitle stacked in the middle of the frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitleScene;

impl TitleScene {
    /// `(scale, rotation in degrees)` of the presentation icon.
    pub fn icon_motion(cx: &SceneCtx) -> (f64, f64) {
        let scale = cx.progress(8.0, 20.0, Ease::out_back(1.4));
        let rot = -180.0 + 180.0 * cx.progress(8.0, 20.0, Ease::OutCubic);
        (scale, rot)
    }

    /// Divider width in design pixels.
    pub fn divider_width(cx: &SceneCtx) -> f64 {
        320.0 * cx.progress(20.0, 30.0, Ease::OutCubic)
    }

    fn center_column(&self, cx: &SceneCtx) -> Node {
        let title = Label::new(
            TITLE,
            TextStyle::heading(68.0, palette::TEXT)
                .weight(800)
                .line_height(1.1),
        )
        .reveal(fade_in_words(0.12, 0.7, 12))
        .centered(900.0);
        let subtitle = Label::new(SUBTITLE, TextStyle::body(22.0, palette::TEXT_MUTED))
            .reveal(fade_in_chars(0.02, 0.5, 35))
            .centered(600.0);
        let badge = glass_badge(cx, BADGE, palette::PRIMARY, 0.3, 13.0);

        let (_, title_h) = title.approx_size();
        let (_, sub_h) = subtitle.approx_size();
        let badge_h = 13.0 * 1.4 + 16.0;
        let icon_block = ICON + 8.0;
        let total = icon_block + badge_h + title_h + DIVIDER_H + sub_h + GAP * 4.0;
        let cx_mid = DESIGN_W / 2.0;
        let mut y = (DESIGN_H - total) / 2.0;

        let (scale, rot) = Self::icon_motion(cx);
        let icon = Node::icon(IconId::Presentation, ICON, palette::PRIMARY)
            .at(-ICON / 2.0, -ICON / 2.0)
            .then(Affine::rotate(rot.to_radians()))
            .then(Affine::scale(scale.max(0.0)))
            .at(cx_mid, y + ICON / 2.0)
            .named("title-icon");
        y += icon_block + GAP;

        let badge = badge.at(cx_mid, y + badge_h / 2.0);
        y += badge_h + GAP;

        let title = title
            .build(cx)
            .at(cx_mid - 450.0, y)
            .named("title-text");
        y += title_h + GAP;

        let dw = Self::divider_width(cx);
        let divider = Node::fill(
            Shape::RoundedRect {
                w: dw,
                h: DIVIDER_H,
                radius: 1.5,
            },
            Paint::linear(
                90.0,
                &[
                    Color::TRANSPARENT,
                    palette::PRIMARY,
                    palette::ACCENT,
                    Color::TRANSPARENT,
                ],
            ),
        )
        .at(cx_mid - dw / 2.0, y)
        .named("divider");
        y += DIVIDER_H + GAP;

        let subtitle = subtitle.build(cx).at(cx_mid - 300.0, y).named("subtitle");

        Node::group(vec![icon, badge, title, divider, subtitle])
    }

    fn info_row(&self, cx: &SceneCtx) -> Node {
        let opacity = cx.tween([60.0, 80.0], [0.0, 1.0]);
        let dy = 20.0 * (1.0 - cx.progress(60.0, 20.0, Ease::OutCubic));
        let style = TextStyle::body(15.0, palette::TEXT_MUTED).weight(500);
        let row_h = style.line_px().max(20.0);

        let widths: Vec<f64> = INFO_ITEMS
            .iter()
            .map(|it| 20.0 + 10.0 + Label::new(it.label, style).approx_size().0)
            .collect();
        let total = widths.iter().sum::<f64>() + 48.0 * (INFO_ITEMS.len() - 1) as f64;

        let mut x = (DESIGN_W - total) / 2.0;
        let mut items = Vec::with_capacity(INFO_ITEMS.len());
        for (i, (it, w)) in INFO_ITEMS.iter().zip(&widths).enumerate() {
            let start = 65.0 + 5.0 * i as f64;
            let item_opacity = cx.tween([start, start + 15.0], [0.0, 1.0]);
            items.push(
                Node::group(vec![
                    Node::icon(it.icon, 20.0, palette::PRIMARY_LIGHT).at(0.0, (row_h - 20.0) / 2.0),
                    Label::new(it.label, style)
                        .build(cx)
                        .at(30.0, (row_h - style.line_px()) / 2.0),
                ])
                .at(x, 0.0)
                .with_opacity(item_opacity),
            );
            x += w + 48.0;
        }

        Node::group(items)
            .at(0.0, DESIGN_H - 60.0 - row_h + dy)
            .with_opacity(opacity)
            .named("info-row")
    }
}

impl Scene for TitleScene {
    fn id(&self) -> SceneId {
        SceneId::Title
    }

    fn build(&self, cx: &SceneCtx) -> Node {
        let bar = cx.progress(0.0, 40.0, Ease::OutCubic);

        let mut children = vec![
            radial_backdrop(Point::new(0.5, 0.4), Color::rgb8(0x1a, 0x27, 0x44)),
            top_bar(bar, 4.0, &[palette::PRIMARY, palette::ACCENT]),
        ];
        children.extend(SHAPES.iter().map(|s| s.node(cx)));
        children.push(line_grid(
            60.0,
            palette::PRIMARY.with_alpha(0.03),
            GRID_PULSE.at(cx.secs()),
        ));
        children.push(self.center_column(cx));
        children.push(self.info_row(cx));
        Node::group(children).named("title")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/title.rs"]
mod tests;
