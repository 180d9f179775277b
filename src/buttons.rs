//! The badge's nine push buttons.
//!
//! D-pad (up/down/left/right), A, B, Start, Select and the joystick click.
//! All but Select pull up and read low while pressed.

use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};
use flappy_core::ActiveLow;

use crate::ButtonResources;

pub struct Buttons {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub left: Input<'static>,
    pub right: Input<'static>,
    pub stick: Input<'static>,
    pub a: Input<'static>,
    pub b: Input<'static>,
    pub start: Input<'static>,
    pub select: Input<'static>,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            up: Input::new(res.up, pull_up),
            down: Input::new(res.down, pull_up),
            left: Input::new(res.left, pull_up),
            right: Input::new(res.right, pull_up),
            stick: Input::new(res.stick, pull_up),
            a: Input::new(res.a, pull_up),
            b: Input::new(res.b, pull_up),
            start: Input::new(res.start, pull_up),
            select: Input::new(res.select, InputConfig::default().with_pull(Pull::Down)),
        }
    }
}

impl Buttons {
    /// Button A as the game's action button, read raw every frame.
    pub fn action(&mut self) -> ActiveLow<&mut Input<'static>> {
        ActiveLow(&mut self.a)
    }
}
