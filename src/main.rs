//! Flappy game for the Disobey 2026 badge.
//!
//! - Tap A to flap, hold it to keep climbing
//! - Stay inside the gaps, off the floor and off the ceiling
//! - Press A after a crash to start the next round
//!
//! One loop iteration is one frame: read A, step the session, paint the frame
//! into RAM, flip it to the panel, then sleep until the next frame.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use flappy_badge::*;
use flappy_core::{
    Config,
    Regeneration,
    Session,
    Theme,
    render,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

const FRAME_MS: u64 = 10;

/// The default tuning squeezed onto the 170px-tall panel. Pipes are only
/// regenerated when one leaves the screen so the list stays a fixed size on
/// the heap.
const BADGE_CONFIG: Config = Config::new()
    .with_playfield(screen::WIDTH as i32, screen::HEIGHT as i32)
    .with_gap(35, -45, 45)
    .with_regeneration(Regeneration::OnRemoval);

#[embassy_executor::task]
async fn game_task(screen: &'static mut Screen<'static>, buttons: &'static mut Buttons) {
    info!("Flappy game task started");
    screen.backlight_on();

    let mut session = Session::new(BADGE_CONFIG);
    let mut action = buttons.action();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        if let Some(transition) = session.frame(&mut action) {
            info!("{}", transition);
        }

        let Ok(()) = render(&session, &Theme::DEFAULT, &mut screen.canvas());
        if let Err(err) = screen.present() {
            panic!("display write failed: {:?}", err);
        }

        Timer::after(frame).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = flappy_badge::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let display: Display<'static> = resources.display.into();
    let screen = mk_static!(Screen<'static>, Screen::new(display, resources.backlight));
    let buttons = mk_static!(Buttons, resources.buttons.into());

    spawner.must_spawn(game_task(screen, buttons));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
