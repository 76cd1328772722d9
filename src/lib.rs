#![cfg_attr(not(test), no_std)]

// This must go first so the logging macros are visible to the other modules
#[macro_use]
mod fmt;

pub mod animations;
pub mod colour;
pub mod config;
pub mod drivers;
pub mod droplet;
pub mod maths;
pub mod render;
pub mod rng;
pub mod scheduler;
#[cfg(feature = "esp32c3")]
pub mod tasks;

pub use animations::WaterTorture;
pub use config::{ConfigError, DropletConfig};
pub use drivers::neopixel::{AsyncLedStrip, LedStrip, Strip};
pub use droplet::{Droplet, DropletState};
pub use rng::RandomSource;
pub use scheduler::RespawnScheduler;

/// The animation update interval in milliseconds
pub const ANIMATION_UPDATE: u64 = 10;

/// The default colour for the droplet (blue)
pub const DEFAULT_COLOUR: [u8; 3] = [0, 0, 255];

/// The number of LEDs in the string we are driving
pub const LED_STRING_SIZE: usize = 30;

/// The longest strip a droplet can be attached to. Keeps the fixed point offset of the far end
/// plus any velocity well inside an `i32`.
pub const MAX_STRIP_LEN: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RgbBrightness {
    Low = 10,
    Medium = 100,
    High = 200,
    Max = 255,
}
