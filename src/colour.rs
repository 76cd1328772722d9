//! Fixed point colour blending.
//!
//! Everything here works on whole 8 bit channels:
//! - [`scale`] dims a colour by an amplitude out of 256
//! - [`add_clipped_to`] lays light on top of a pixel, saturating at full brightness
//! - [`luma`] gives the perceived brightness used to decide when a droplet has finished swelling

use crate::maths::scale8;
use smart_leds::RGB8;

/// Amplitude that leaves a colour untouched
pub const FULL_AMPLITUDE: u16 = 256;

/// Multiplies a channel by `amplitude / 256`, taking the high byte of the 16 bit product
pub fn mult(value: u8, amplitude: u16) -> u8 {
    ((value as u32 * amplitude.min(FULL_AMPLITUDE) as u32) >> 8) as u8
}

/// Scales every channel of `colour` by `amplitude / 256`.
///
/// # Arguments
/// * `colour` - The colour to dim
/// * `amplitude` - 0 is black, 256 returns the colour unchanged. Larger values are treated as 256.
pub fn scale(colour: RGB8, amplitude: u16) -> RGB8 {
    if amplitude == 0 {
        return RGB8::default();
    }
    RGB8::new(
        mult(colour.r, amplitude),
        mult(colour.g, amplitude),
        mult(colour.b, amplitude),
    )
}

pub fn clip(v: i16) -> u8 {
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}

/// Adds two channels, clipping at 255
pub fn add_clipped(left: u8, right: u8) -> u8 {
    clip(left as i16 + right as i16)
}

/// Adds `colour` onto `pixel` channel by channel, clipping each at 255
pub fn add_clipped_to(pixel: &mut RGB8, colour: RGB8) {
    pixel.r = add_clipped(pixel.r, colour.r);
    pixel.g = add_clipped(pixel.g, colour.g);
    pixel.b = add_clipped(pixel.b, colour.b);
}

/// Perceived brightness, weighting green over red over blue (54/183/18 out of 255)
pub fn luma(colour: RGB8) -> u8 {
    scale8(colour.r, 54) + scale8(colour.g, 183) + scale8(colour.b, 18)
}
