use crate::{
    config::DropletConfig,
    droplet::{Droplet, DropletState},
    rng::RandomSource,
};

/// Counts down the pause between droplets and starts a new one once the pause is over and the
/// previous droplet is spent. Tick it before stepping the droplet so a new droplet is drawn in the
/// same frame it appears.
#[derive(Debug, Clone)]
pub struct RespawnScheduler {
    /// Ticks left before the next droplet may appear
    pause_ticks: u16,
    pause_min: u16,
    pause_span: u16,
    swell_chance: u8,
}

impl RespawnScheduler {
    /// `config` is expected to have passed [`DropletConfig::validate`]
    pub fn new(config: &DropletConfig) -> Self {
        Self {
            pause_ticks: 1,
            pause_min: config.pause_min,
            pause_span: config.pause_span.max(1),
            swell_chance: config.swell_chance,
        }
    }

    /// Runs one tick of the schedule.
    ///
    /// # Returns
    /// True if a new droplet was spawned this tick
    pub fn tick<R: RandomSource>(&mut self, droplet: &mut Droplet, rng: &mut R) -> bool {
        if self.pause_ticks > 0 {
            self.pause_ticks -= 1;
            return false;
        }
        if droplet.is_active() {
            return false;
        }

        self.pause_ticks = self.pause_min.saturating_add(rng.random16() % self.pause_span);
        let state = if rng.random8() < self.swell_chance {
            DropletState::Swelling
        } else {
            DropletState::Falling
        };
        debug!(
            "New droplet {}, next pause {} ticks",
            state, self.pause_ticks
        );
        droplet.respawn(state);
        true
    }

    /// Back to the state after attaching a strip: the next droplet may spawn after one tick
    pub fn reset(&mut self) {
        self.pause_ticks = 1;
    }

    pub fn pause_ticks(&self) -> u16 {
        self.pause_ticks
    }

    pub fn set_pause_ticks(&mut self, ticks: u16) {
        self.pause_ticks = ticks;
    }
}
