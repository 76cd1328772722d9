/// Source of the uniform random draws used when a droplet respawns. Pass a seeded generator or a
/// scripted stub to make the schedule reproducible.
pub trait RandomSource {
    /// A uniform draw over the whole `u8` range
    fn random8(&mut self) -> u8;
    /// A uniform draw over the whole `u16` range
    fn random16(&mut self) -> u16;
}

impl RandomSource for fastrand::Rng {
    fn random8(&mut self) -> u8 {
        self.u8(..)
    }

    fn random16(&mut self) -> u16 {
        self.u16(..)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn random8(&mut self) -> u8 {
        (**self).random8()
    }

    fn random16(&mut self) -> u16 {
        (**self).random16()
    }
}
