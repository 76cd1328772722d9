// Fixed point

/// Number of fractional bits in a droplet offset or velocity
pub const FRACTION_BITS: u32 = 8;

/// One whole pixel in fixed point
pub const ONE: i32 = 1 << FRACTION_BITS;

const FRACTION_MASK: i32 = ONE - 1;

/// Converts a whole pixel index to fixed point
pub const fn to_fixed(pixel: usize) -> i32 {
    (pixel as i32) << FRACTION_BITS
}

/// The whole pixel part of a fixed point value. Negative values map to pixel 0.
pub const fn whole(value: i32) -> usize {
    if value < 0 {
        0
    } else {
        (value >> FRACTION_BITS) as usize
    }
}

/// The sub-pixel part of a fixed point value, 0..256
pub const fn fraction(value: i32) -> u16 {
    (value & FRACTION_MASK) as u16
}

// 8 bit scaling

/// Scales `value` by `scale / 256`, never dropping a non zero scale to nothing for full values.
/// `scale8(255, 255) == 255`.
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}
