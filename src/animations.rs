//! The water torture animation: one droplet at a time swelling, falling and splashing on an LED
//! strip, with a random pause between droplets.
//!
//! [`WaterTorture`] owns everything one animation needs: the droplet, its respawn schedule, the
//! strip it draws on and the random source. Call [`WaterTorture::animate`] once per frame.

use crate::{
    config::{ConfigError, DropletConfig},
    drivers::neopixel::Strip,
    droplet::Droplet,
    rng::RandomSource,
    scheduler::RespawnScheduler,
};

pub struct WaterTorture<S: Strip, R: RandomSource> {
    droplet: Droplet,
    scheduler: RespawnScheduler,
    strip: S,
    rng: R,
}

impl<S: Strip, R: RandomSource> WaterTorture<S, R> {
    /// Creates an animation drawing on `strip`.
    ///
    /// # Arguments
    /// * `config` - Tuning for the droplet and the pauses between droplets
    /// * `strip` - The strip to draw on. It is blanked when the animation is dropped.
    /// * `rng` - Random source for the pause lengths and whether a droplet swells first
    pub fn new(config: &DropletConfig, strip: S, rng: R) -> Result<Self, ConfigError> {
        let droplet = Droplet::new(config, strip.len())?;
        info!("Water torture attached to {} LEDs", strip.len());
        Ok(Self {
            droplet,
            scheduler: RespawnScheduler::new(config),
            strip,
            rng,
        })
    }

    /// Moves the animation to another strip, returning the previous one as it was left.
    pub fn attach(&mut self, strip: S) -> Result<S, ConfigError> {
        self.droplet.attach(strip.len())?;
        self.scheduler.reset();
        info!("Water torture attached to {} LEDs", strip.len());
        Ok(core::mem::replace(&mut self.strip, strip))
    }

    /// Runs one frame: maybe spawn a droplet, step it, draw it on a cleared buffer and send the
    /// buffer to the strip.
    pub fn animate(&mut self) -> Result<(), S::Error> {
        self.advance();
        self.strip.show()
    }

    /// Everything [`WaterTorture::animate`] does except sending the buffer. Async drivers call
    /// this and then flush the strip themselves.
    pub fn advance(&mut self) {
        self.scheduler.tick(&mut self.droplet, &mut self.rng);
        self.strip.clear();
        self.droplet.step_and_draw(self.strip.pixels());
    }

    pub fn is_active(&self) -> bool {
        self.droplet.is_active()
    }

    pub fn droplet(&self) -> &Droplet {
        &self.droplet
    }

    pub fn droplet_mut(&mut self) -> &mut Droplet {
        &mut self.droplet
    }

    pub fn scheduler(&self) -> &RespawnScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut RespawnScheduler {
        &mut self.scheduler
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }
}

impl<S: Strip, R: RandomSource> Drop for WaterTorture<S, R> {
    /// Go dark on the way out
    fn drop(&mut self) {
        info!("Water torture stopping, blanking {} LEDs", self.strip.len());
        self.strip.clear();
        if self.strip.show().is_err() {
            warn!("Failed to blank the strip");
        }
    }
}
