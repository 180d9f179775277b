//! # flappy-core
//!
//! Hardware-independent engine for a one-button flappy game.
//!
//! A ball falls under gravity at a fixed column while gap-pipes scroll in from
//! the right; tapping the action button flaps the ball upwards. Everything
//! here is plain data and arithmetic, so it runs unchanged on the badge and in
//! host tests:
//!
//! - [`PipeGenerator`] / [`PipeTrack`]: procedural gap pairs, scrolling and
//!   recycling
//! - [`Ball`]: gravity, fall-speed clamp and flap impulse
//! - [`collision`]: floor, ceiling and pipe checks
//! - [`Session`]: the PLAYING/LOST state machine that runs one frame at a time
//! - [`render`]: paints a session onto any `embedded-graphics` RGB565 target,
//!   typically a [`Framebuffer`]
//!
//! ## Frame loop
//!
//! ```
//! use flappy_core::{Config, Framebuffer, Session, Theme, render};
//! use embedded_graphics::pixelcolor::Rgb565;
//! use embedded_graphics::prelude::*;
//!
//! let config = Config::new();
//! let mut session = Session::new(config);
//! let mut pixels = vec![Rgb565::BLACK; (config.width * config.height) as usize];
//!
//! let mut button = false;
//! for _ in 0..3 {
//!     session.frame(&mut button);
//!     let mut canvas = Framebuffer::new(&mut pixels, config.width as u32);
//!     let Ok(()) = render(&session, &Theme::DEFAULT, &mut canvas);
//!     // push `canvas.pixels()` to the panel here
//! }
//! ```
//!
//! ## Features
//!
//! - `defmt`: log state changes through `defmt` and derive `defmt::Format` on
//!   the public types.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// This mod MUST go first, so that the others see its macros.
mod fmt;

mod ball;
pub mod collision;
mod config;
mod frame;
mod gate;
mod generator;
mod input;
mod pipe;
mod render;
mod session;
mod track;

pub use ball::Ball;
pub use config::{
    Config,
    Regeneration,
};
pub use frame::Framebuffer;
pub use gate::TickGate;
pub use generator::PipeGenerator;
pub use input::{
    ActionButton,
    ActiveLow,
};
pub use pipe::Pipe;
pub use render::{
    Theme,
    panel,
    render,
    score_origin,
};
pub use session::{
    GameState,
    Session,
    Transition,
};
pub use track::PipeTrack;
