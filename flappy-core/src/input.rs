//! The action button.

use embedded_hal::digital::InputPin;

/// Something that can tell whether the action control is held right now.
///
/// The session does not latch edges: a button held down reads `true` on every
/// frame and flaps on every frame.
pub trait ActionButton {
    fn read(&mut self) -> bool;
}

impl<B: ActionButton + ?Sized> ActionButton for &mut B {
    fn read(&mut self) -> bool {
        (**self).read()
    }
}

/// A fixed reading, for demos and tests.
impl ActionButton for bool {
    fn read(&mut self) -> bool {
        *self
    }
}

/// A pulled-up push button that shorts the pin to ground when pressed.
///
/// A failed pin read counts as released.
#[derive(Debug)]
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> ActionButton for ActiveLow<P> {
    fn read(&mut self) -> bool {
        self.0.is_low().unwrap_or(false)
    }
}
