//! # flappy-badge
//!
//! Board support for running the flappy game on the Disobey 2026 badge.
//!
//! Only the peripherals the game touches are wired up:
//! - **Display**: 320×170 ST7789 LCD over SPI with DMA
//! - **Screen**: an off-screen framebuffer plus the backlight, flipped to the
//!   display once per frame
//! - **Buttons**: the nine active-low inputs; A is the action button
//!
//! The game rules live in `flappy-core`; the binary in `src/main.rs` glues
//! the two together.
//!
//! ```rust,ignore
//! let peripherals = flappy_badge::init();
//! let resources = flappy_badge::split_resources!(peripherals);
//!
//! let display: flappy_badge::Display = resources.display.into();
//! let screen = flappy_badge::Screen::new(display, resources.backlight);
//! let buttons: flappy_badge::Buttons = resources.buttons.into();
//! ```

#![no_std]

mod buttons;
mod display;
pub mod screen;

pub use buttons::Buttons;
pub use display::Display;
use esp_hal::{
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    rom,
};
pub use screen::Screen;

/// StaticCell helper: moves a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            dc: GPIO15,
            rst: GPIO7,
            sck: GPIO4,
            cs: GPIO6,
            miso: GPIO16,
            mosi: GPIO5,
            spi: SPI2,
            dma: DMA_CH0,
        },
        backlight: BacklightResources<'d> {
            led: GPIO19,
        },
        buttons: ButtonResources<'d> {
            up: GPIO11,
            down: GPIO1,
            left: GPIO21,
            right: GPIO2,
            stick: GPIO14,
            a: GPIO13,
            b: GPIO38,
            start: GPIO12,
            select: GPIO45,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// The ESP32-S3 cannot jump straight to the PLL frequency from the boot
/// clock; select the PLL source first, then the CPU period.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Bring the chip up at full speed and return the raw peripheral set.
///
/// Call once at the top of `main`, then split the peripherals with
/// [`split_resources!`]. Failures here are fatal and end in the panic handler.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}
