//! Frame divider for the world tick.

/// Counts frames and admits one world tick every `divider` frames.
///
/// The ball moves every frame; the pipes and the score only move on admitted
/// frames, so the world scrolls at a fraction of the display rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickGate {
    counter: u8,
    divider: u8,
}

impl TickGate {
    /// A divider of zero behaves like one (every frame admitted).
    pub const fn new(divider: u8) -> Self {
        Self {
            counter: 0,
            divider: if divider == 0 { 1 } else { divider },
        }
    }

    /// Count one frame. `true` when the counter wraps.
    pub const fn admit(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.divider {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_every_second_frame() {
        let mut gate = TickGate::new(2);
        let admitted: [bool; 6] = core::array::from_fn(|_| gate.admit());
        assert_eq!(admitted, [false, true, false, true, false, true]);
    }

    #[test]
    fn divider_one_and_zero_admit_everything() {
        for divider in [0, 1] {
            let mut gate = TickGate::new(divider);
            assert!((0..10).all(|_| gate.admit()));
        }
    }

    #[test]
    fn larger_divider() {
        let mut gate = TickGate::new(3);
        let count = (0..30).filter(|_| gate.admit()).count();
        assert_eq!(count, 10);
    }
}
