//! Off-screen RGB565 framebuffer.

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

/// A row-major pixel buffer that frames are painted into before the whole
/// buffer is pushed to the panel in one transfer.
pub struct Framebuffer<'a> {
    buf: &'a mut [Rgb565],
    size: Size,
}

impl<'a> Framebuffer<'a> {
    /// Wrap `buf` as rows of `width` pixels. Trailing pixels that do not fill a
    /// whole row are left unused.
    pub fn new(buf: &'a mut [Rgb565], width: u32) -> Self {
        let height = if width == 0 {
            0
        } else {
            buf.len() as u32 / width
        };
        Self {
            buf,
            size: Size::new(width, height),
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).map(|i| self.buf[i])
    }

    /// All pixels, row by row, ready for `fill_contiguous`.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb565> + '_ {
        self.buf[..self.area()].iter().copied()
    }

    fn area(&self) -> usize {
        (self.size.width * self.size.height) as usize
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok().filter(|x| *x < self.size.width)?;
        let y = u32::try_from(point.y).ok().filter(|y| *y < self.size.height)?;
        Some((y * self.size.width + x) as usize)
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.buf[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let width = self.size.width as usize;
        for y in area.rows() {
            let row = y as usize * width;
            let start = row + area.top_left.x as usize;
            self.buf[start..start + area.size.width as usize].fill(color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let area = self.area();
        self.buf[..area].fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use embedded_graphics::primitives::PrimitiveStyle;

    use super::*;

    #[test]
    fn height_follows_buffer_length() {
        let mut buf = vec![Rgb565::BLACK; 10 * 4 + 3];
        let fb = Framebuffer::new(&mut buf, 10);
        assert_eq!(fb.size(), Size::new(10, 4));
        assert_eq!(fb.pixels().count(), 40);
    }

    #[test]
    fn rectangles_are_clipped() {
        let mut buf = vec![Rgb565::BLACK; 8 * 8];
        let mut fb = Framebuffer::new(&mut buf, 8);
        let Ok(()) = Rectangle::new(Point::new(-2, 6), Size::new(4, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut fb);

        assert_eq!(fb.pixel(Point::new(0, 6)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(1, 7)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(2, 7)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(0, 5)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(0, 8)), None);
    }

    #[test]
    fn stray_pixels_are_dropped() {
        let mut buf = vec![Rgb565::BLACK; 4 * 4];
        let mut fb = Framebuffer::new(&mut buf, 4);
        let Ok(()) = fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(4, 0), Rgb565::RED),
            Pixel(Point::new(3, 3), Rgb565::GREEN),
        ]);
        assert_eq!(fb.pixels().filter(|c| *c != Rgb565::BLACK).count(), 1);
        assert_eq!(fb.pixel(Point::new(3, 3)), Some(Rgb565::GREEN));
    }

    #[test]
    fn clear_fills_everything() {
        let mut buf = vec![Rgb565::BLACK; 6 * 3];
        let mut fb = Framebuffer::new(&mut buf, 6);
        let Ok(()) = fb.clear(Rgb565::BLUE);
        assert!(fb.pixels().all(|c| c == Rgb565::BLUE));
    }
}
