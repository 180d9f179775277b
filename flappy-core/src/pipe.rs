//! Pipe rectangles.

use embedded_graphics::{
    prelude::*,
    primitives::Rectangle,
};

/// One half of a gap pair.
///
/// Kept in signed pixels rather than as a [`Rectangle`]: a top pipe's height
/// goes negative when the gap is pushed above the playfield, and scrolled
/// pipes have negative x before they are recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pipe {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Pipe {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column right of the pipe.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row below the pipe.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Fully past the left edge of the playfield.
    pub const fn is_off_screen(&self) -> bool {
        self.right() <= 0
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.y >= self.y && point.x < self.right() && point.y < self.bottom()
    }

    /// Grow by `by` pixels on every side.
    #[must_use]
    pub const fn inflate(&self, by: i32) -> Self {
        Self::new(self.x - by, self.y - by, self.width + 2 * by, self.height + 2 * by)
    }

    /// The drawable area, or `None` for an empty pipe.
    pub fn to_rectangle(&self) -> Option<Rectangle> {
        let width = u32::try_from(self.width).ok().filter(|w| *w > 0)?;
        let height = u32::try_from(self.height).ok().filter(|h| *h > 0)?;
        Some(Rectangle::new(Point::new(self.x, self.y), Size::new(width, height)))
    }
}
