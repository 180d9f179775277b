//! Double-buffered output: frames are painted into RAM, then flipped to the
//! panel in one DMA-backed transfer so the player never sees a half-drawn
//! frame.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};
use flappy_core::Framebuffer;
use static_cell::ConstStaticCell;

use crate::{
    BacklightResources,
    Display,
};

/// Panel width in the landscape orientation the display is set up with.
pub const WIDTH: u32 = 320;
/// Panel height in the landscape orientation the display is set up with.
pub const HEIGHT: u32 = 170;
const PIXELS: usize = (WIDTH * HEIGHT) as usize;

// Lives in .bss rather than being built on the task stack.
static FRAMEBUFFER: ConstStaticCell<[Rgb565; PIXELS]> =
    ConstStaticCell::new([Rgb565::BLACK; PIXELS]);

/// The display, its backlight and the frame being drawn.
pub struct Screen<'a> {
    display: Display<'a>,
    backlight: Output<'static>,
    buffer: &'static mut [Rgb565; PIXELS],
}

impl<'a> Screen<'a> {
    /// Takes the one static framebuffer; a second call panics.
    pub fn new(display: Display<'a>, backlight: BacklightResources<'static>) -> Self {
        Self {
            display,
            backlight: Output::new(backlight.led, Level::High, OutputConfig::default()),
            buffer: FRAMEBUFFER.take(),
        }
    }

    /// The off-screen frame to paint on.
    pub fn canvas(&mut self) -> Framebuffer<'_> {
        Framebuffer::new(&mut self.buffer[..], WIDTH)
    }

    /// Push the off-screen frame to the panel.
    pub fn present(&mut self) -> Result<(), <Display<'a> as DrawTarget>::Error> {
        let area = Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT));
        self.display
            .fill_contiguous(&area, self.buffer.iter().copied())
    }

    pub fn backlight_on(&mut self) {
        self.backlight.set_high();
    }

    pub fn backlight_off(&mut self) {
        self.backlight.set_low();
    }

    pub fn is_backlight_on(&self) -> bool {
        self.backlight.is_set_high()
    }
}
