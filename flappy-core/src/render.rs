//! Painting a session onto any RGB565 draw target.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{
            FONT_6X10,
            FONT_10X20,
        },
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{
        Circle,
        PrimitiveStyle,
        Rectangle,
    },
    text::{
        Baseline,
        Text,
        renderer::TextRenderer,
    },
};

use crate::{
    Config,
    GameState,
    Session,
};

const OUTLINE_WIDTH: i32 = 2;
const PANEL_SIZE: Size = Size::new(120, 100);
/// Score line offset from the panel top while lost.
const PANEL_SCORE_Y: i32 = 30;
const LOST_MESSAGE: &str = "You lost! Press A to reset";
const LOST_MESSAGE_WRAP: u32 = 101;

/// 8-bit RGB to RGB565, dropping the low bits.
const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb565,
    pub outline: Rgb565,
    pub pipe: Rgb565,
    pub ball: Rgb565,
    pub panel: Rgb565,
    pub text: Rgb565,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        background: rgb(0, 80, 110),
        outline: Rgb565::BLACK,
        pipe: rgb(0, 80, 0),
        ball: rgb(150, 150, 0),
        panel: rgb(50, 50, 50),
        text: rgb(200, 200, 200),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Draw one full frame: background, pipes, ball, then the score, with the
/// loss panel and message on top while the session is lost.
pub fn render<D>(session: &Session, theme: &Theme, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let config = session.config();
    let lost = session.state() == GameState::Lost;

    target.clear(theme.background)?;

    let outline = PrimitiveStyle::with_fill(theme.outline);
    let fill = PrimitiveStyle::with_fill(theme.pipe);
    for pipe in session.track().pipes() {
        if let Some(rect) = pipe.inflate(OUTLINE_WIDTH).to_rectangle() {
            rect.into_styled(outline).draw(target)?;
        }
        if let Some(rect) = pipe.to_rectangle() {
            rect.into_styled(fill).draw(target)?;
        }
    }

    let diameter = (2 * config.ball_radius + 1) as u32;
    Circle::with_center(session.ball().position, diameter)
        .into_styled(PrimitiveStyle::with_fill(theme.ball))
        .draw(target)?;

    if lost {
        panel(config)
            .into_styled(PrimitiveStyle::with_fill(theme.panel))
            .draw(target)?;
    }

    let mut score = heapless::String::<12>::new();
    // u32::MAX has 10 digits
    let _ = write!(score, "{}", session.score());
    let score_style = MonoTextStyle::new(&FONT_10X20, theme.text);
    let origin = score_origin(config, lost, text_width(&score, &score_style));
    Text::with_baseline(&score, origin, score_style, Baseline::Top).draw(target)?;

    if lost {
        let message_style = MonoTextStyle::new(&FONT_6X10, theme.text);
        let origin = Point::new(config.width / 2 - 50, config.half_height());
        draw_wrapped(target, LOST_MESSAGE, origin, LOST_MESSAGE_WRAP, &message_style)?;
    }

    Ok(())
}

/// The dimmed box shown after a loss, centred on the playfield.
pub fn panel(config: &Config) -> Rectangle {
    let top_left = Point::new(
        config.width / 2 - PANEL_SIZE.width as i32 / 2,
        config.half_height() - PANEL_SIZE.height as i32 / 2,
    );
    Rectangle::new(top_left, PANEL_SIZE)
}

/// Top-left of the score text: centred horizontally, at the top of the screen
/// while playing and inside the panel while lost.
pub fn score_origin(config: &Config, lost: bool, text_width: u32) -> Point {
    let y = if lost {
        panel(config).top_left.y + PANEL_SCORE_Y
    } else {
        0
    };
    Point::new(config.width / 2 - text_width as i32 / 2, y)
}

fn text_width<S: TextRenderer>(text: &str, style: &S) -> u32 {
    style
        .measure_string(text, Point::zero(), Baseline::Top)
        .bounding_box
        .size
        .width
}

/// Draw `text` starting at `origin`, breaking lines between words so that no
/// line is wider than `wrap_width`. A single word wider than that gets a line
/// of its own.
fn draw_wrapped<D, S>(
    target: &mut D,
    text: &str,
    origin: Point,
    wrap_width: u32,
    style: &S,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    S: TextRenderer<Color = Rgb565> + Clone,
{
    let line_height = style.line_height() as i32;
    let mut y = origin.y;
    let mut line: Option<(usize, usize)> = None;
    let mut offset = 0;

    for word in text.split(' ') {
        let start = offset;
        let end = start + word.len();
        offset = end + 1;
        if word.is_empty() {
            continue;
        }

        line = match line {
            Some((line_start, line_end))
                if text_width(&text[line_start..end], style) > wrap_width =>
            {
                Text::with_baseline(
                    &text[line_start..line_end],
                    Point::new(origin.x, y),
                    style.clone(),
                    Baseline::Top,
                )
                .draw(target)?;
                y += line_height;
                Some((start, end))
            }
            Some((line_start, _)) => Some((line_start, end)),
            None => Some((start, end)),
        };
    }

    if let Some((line_start, line_end)) = line {
        Text::with_baseline(
            &text[line_start..line_end],
            Point::new(origin.x, y),
            style.clone(),
            Baseline::Top,
        )
        .draw(target)?;
    }
    Ok(())
}
