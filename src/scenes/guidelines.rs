//! Four best-practice cards.

use crate::animation::ease::Ease;
use crate::animation::proc::Oscillator;
use crate::components::backdrop::{line_grid, radial_backdrop};
use crate::components::label::Label;
use crate::components::panel::{icon_tile, panel};
use crate::components::progress_ring::ProgressRing;
use crate::components::section::{corner_ring, section_header};
use crate::components::shapes::{AmbientShape, Motion, Pin, ShapeKind};
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Point};
use crate::scene::icons::IconId;
use crate::scene::model::{Node, Paint, Shape};
use crate::scene::palette;
use crate::scenes::{DESIGN_W, Scene, SceneCtx, SceneId, fade_in_chars, fade_in_words};
use crate::text::style::{TextAlign, TextStyle};

/// One guideline card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guideline {
    /// Tile icon.
    pub icon: IconId,
    /// Card title.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Icon and accent bar color.
    pub color: Color,
}

/// Cards, left to right.
pub const GUIDELINES: [Guideline; 4] = [
    Guideline {
        icon: IconId::Ear,
        title: "Active Listening",
        description: "Give full attention, avoid interrupting, and acknowledge what others say before responding.",
        color: palette::PRIMARY,
    },
    Guideline {
        icon: IconId::MessageSquare,
        title: "Clear Messaging",
        description: "Be specific, avoid jargon when possible, and confirm understanding with follow-up questions.",
        color: palette::ACCENT,
    },
    Guideline {
        icon: IconId::HeartHandshake,
        title: "Empathy First",
        description: "Consider perspectives, show respect for different viewpoints, and create psychological safety.",
        color: palette::PURPLE,
    },
    Guideline {
        icon: IconId::Target,
        title: "Stay Solutions-Focused",
        description: "Address issues constructively, propose actionable steps, and celebrate progress together.",
        color: palette::ACCENT_YELLOW,
    },
];

const HEADING: &str = "Best Practices for Every Day";
const SUBHEADING: &str =
    "Apply these four principles to build a healthier, more productive workplace.";

const TOP: f64 = 120.0;
const SIDE: f64 = 60.0;
const CARD_GAP: f64 = 20.0;
const CARD_W: f64 = (DESIGN_W - SIDE * 2.0 - CARD_GAP * 3.0) / 4.0;
const CARD_PAD_X: f64 = 24.0;
const CARD_PAD_Y: f64 = 28.0;
const TILE: f64 = 48.0;

const CARD_FLOAT: Oscillator = Oscillator::new(0.0, 2.0, 1.5);

const SHAPES: [AmbientShape; 2] = [
    AmbientShape {
        kind: ShapeKind::Cross,
        motion: Motion::Rotate,
        size: 200.0,
        color: palette::PURPLE,
        speed: 0.08,
        opacity: 0.04,
        pin: Pin::TopLeft(60.0, 80.0),
    },
    AmbientShape {
        kind: ShapeKind::Diamond,
        motion: Motion::Breathe,
        size: 150.0,
        color: palette::PRIMARY,
        speed: 0.25,
        opacity: 0.05,
        pin: Pin::BottomRight(100.0, 120.0),
    },
];

/// Guidelines grid: heading, subheading and a row of four cards that pop in and float.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuidelinesScene;

impl GuidelinesScene {
    /// Entrance delay of card `i`, in frames.
    pub fn card_delay(cx: &SceneCtx, i: usize) -> i64 {
        cx.frames(1.0 + 0.4 * i as f64)
    }

    /// Entrance of card `i` (OutBack, may overshoot 1).
    pub fn card_progress(cx: &SceneCtx, i: usize) -> f64 {
        cx.progress(Self::card_delay(cx, i) as f64, 20.0, Ease::out_back(1.2))
    }

    /// Idle vertical float of card `i` in design pixels.
    pub fn card_float(cx: &SceneCtx, i: usize) -> f64 {
        let t = cx.fps.frames_to_secs((cx.frame - Self::card_delay(cx, i)) as f64);
        CARD_FLOAT.phase(i as f64).at(t)
    }

    fn card(&self, cx: &SceneCtx, i: usize, g: &Guideline, h: f64) -> Node {
        let e = Self::card_progress(cx, i);
        let inner_w = CARD_W - CARD_PAD_X * 2.0;

        let title_style = TextStyle::heading(18.0, palette::TEXT)
            .weight(700)
            .line_height(1.3);
        let title = Label::new(g.title, title_style).wrap(inner_w);
        let (_, title_h) = title.approx_size();
        let desc = Label::new(
            g.description,
            TextStyle::body(13.0, palette::TEXT_MUTED).line_height(1.6),
        )
        .wrap(inner_w);

        let number = format!("{:02}", i + 1);
        let number_style = TextStyle::heading(42.0, palette::SURFACE_LIGHT)
            .weight(800)
            .line_height(1.0);

        let bar = Node::fill(
            Shape::Rect { w: CARD_W, h: 3.0 },
            Paint::linear(90.0, &[g.color, g.color.with_alpha_byte(0x66)]),
        )
        .then(Affine::scale_non_uniform(e.clamp(0.0, 1.0), 1.0))
        .with_opacity(e)
        .named("accent-bar");

        let mut y = CARD_PAD_Y;
        let tile = Node::group(vec![
            icon_tile(TILE, 14.0, g.color, 0x18, 0x28),
            Node::icon(g.icon, 24.0, g.color).at(12.0, 12.0),
        ])
        .at(CARD_PAD_X, y);
        y += TILE + 14.0;
        let title = title.build(cx).at(CARD_PAD_X, y).named("card-title");
        y += title_h + 14.0;
        let desc = desc.build(cx).at(CARD_PAD_X, y);

        let body = Node::group(vec![
            panel(
                CARD_W,
                h,
                18.0,
                Paint::linear(
                    145.0,
                    &[palette::SURFACE, palette::SURFACE.with_alpha_byte(0xcc)],
                ),
                Some(palette::SURFACE_LIGHT),
            ),
            bar,
            Label::new(&number, number_style)
                .wrap(80.0)
                .align(TextAlign::End)
                .build(cx)
                .at(CARD_W - 16.0 - 80.0, 16.0),
            tile,
            title,
            desc,
        ]);

        let dy = (1.0 - e) * 30.0 + Self::card_float(cx, i);
        body.at(0.0, dy)
            .with_opacity(e)
            .named(format!("card-{}", i + 1))
    }

    fn card_height() -> f64 {
        let inner_w = CARD_W - CARD_PAD_X * 2.0;
        GUIDELINES
            .iter()
            .map(|g| {
                let t = TextStyle::heading(18.0, palette::TEXT)
                    .weight(700)
                    .line_height(1.3);
                let d = TextStyle::body(13.0, palette::TEXT_MUTED).line_height(1.6);
                let (_, th) = Label::new(g.title, t).wrap(inner_w).approx_size();
                let (_, dh) = Label::new(g.description, d).wrap(inner_w).approx_size();
                CARD_PAD_Y * 2.0 + TILE + 14.0 + th + 14.0 + dh
            })
            .fold(0.0, f64::max)
    }
}

impl Scene for GuidelinesScene {
    fn id(&self) -> SceneId {
        SceneId::Guidelines
    }

    fn build(&self, cx: &SceneCtx) -> Node {
        let heading_style = TextStyle::heading(38.0, palette::TEXT).weight(700);
        let sub_style = TextStyle::body(17.0, palette::TEXT_MUTED);
        let sub = Label::new(SUBHEADING, sub_style)
            .reveal(fade_in_chars(0.015, 0.4, 18))
            .wrap(600.0);
        let (_, sub_h) = sub.approx_size();

        let mut y = TOP;
        let heading = Label::new(HEADING, heading_style)
            .reveal(fade_in_words(0.1, 0.6, 8))
            .build(cx)
            .at(SIDE, y)
            .named("heading");
        y += heading_style.line_px() + 28.0;
        let sub = sub.build(cx).at(SIDE, y).named("subheading");
        y += sub_h + 28.0 + 12.0;

        let h = Self::card_height();
        let cards = Node::group(
            GUIDELINES
                .iter()
                .enumerate()
                .map(|(i, g)| {
                    self.card(cx, i, g, h)
                        .at(SIDE + i as f64 * (CARD_W + CARD_GAP), y)
                })
                .collect(),
        )
        .named("cards");

        let ring = ProgressRing::new(0.75, palette::PURPLE, Some("3/4"), 0.3);
        let mut children = vec![radial_backdrop(
            Point::new(0.7, 0.3),
            Color::rgb8(0x11, 0x1d, 0x33),
        )];
        children.extend(SHAPES.iter().map(|s| s.node(cx)));
        children.extend([
            line_grid(48.0, palette::PRIMARY.with_alpha(0.02), 1.0),
            section_header(
                cx,
                "03",
                "KEY GUIDELINES",
                [palette::PURPLE, palette::PURPLE.with_alpha_byte(0xcc)],
            ),
            corner_ring(cx, &ring),
            heading,
            sub,
            cards,
        ]);
        Node::group(children).named("guidelines")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/guidelines.rs"]
mod tests;
