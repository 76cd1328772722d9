//! The droplet state machine.
//!
//! ```text
//! Waiting -> Swelling
//!    ^          |
//!    |          v
//! Bouncing <- Falling
//! ```
//!
//! A new droplet either swells at pixel 0 before falling, or starts falling straight away. It
//! accelerates down the strip until it passes the far end, where it reflects back up with a third
//! of its speed and a dimmer colour. Passing the far end a second time spends the droplet and it
//! waits for the respawn scheduler.

use smart_leds::RGB8;

use crate::{
    colour::{luma, scale},
    config::{ConfigError, DropletConfig, validate_strip_len},
    maths::to_fixed,
};

/// Luma at or below which a swelling droplet lets go
const SWELL_EXIT_LUMA: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DropletState {
    /// Dark. Waiting to appear
    Waiting,
    /// Building up at pixel 0
    Swelling,
    /// Falling down the strip
    Falling,
    /// Splash!
    Bouncing,
}

#[derive(Debug, Clone)]
pub struct Droplet {
    state: DropletState,
    /// Fixed point offset from pixel 0 while falling or bouncing
    fall_offset: i32,
    /// Frames spent swelling, also the swell brightness ramp
    swell_frame: u16,
    velocity: i32,
    gravity: i32,
    initial_velocity: i32,
    collision_damping: i32,
    collision_scaling: u16,
    reverse_direction: bool,
    colour: RGB8,
    base_colour: RGB8,
    strip_len: usize,
    max_pixel: usize,
}

impl Droplet {
    /// Creates a swelling droplet attached to a strip of `strip_len` LEDs.
    ///
    /// # Arguments
    /// * `config` - Tuning for the droplet, checked with [`DropletConfig::validate`]
    /// * `strip_len` - Number of LEDs on the strip the droplet falls down
    pub fn new(config: &DropletConfig, strip_len: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut droplet = Self {
            state: DropletState::Swelling,
            fall_offset: 0,
            swell_frame: 0,
            velocity: config.initial_velocity,
            gravity: config.gravity,
            initial_velocity: config.initial_velocity,
            collision_damping: config.collision_damping,
            collision_scaling: config.collision_scaling,
            reverse_direction: config.reverse_direction,
            colour: config.base_colour,
            base_colour: config.base_colour,
            strip_len: 0,
            max_pixel: 0,
        };
        droplet.attach(strip_len)?;
        Ok(droplet)
    }

    /// Binds the droplet to a strip of `strip_len` LEDs, putting it back at the top with no speed.
    /// The state and colour are kept.
    pub fn attach(&mut self, strip_len: usize) -> Result<(), ConfigError> {
        validate_strip_len(strip_len)?;
        self.strip_len = strip_len;
        self.max_pixel = strip_len.saturating_sub(1);
        self.fall_offset = 0;
        self.swell_frame = 0;
        self.velocity = 0;
        Ok(())
    }

    /// Advances the simulation by one tick. Nothing is drawn.
    pub fn step(&mut self) {
        match self.state {
            DropletState::Falling | DropletState::Bouncing => self.fall(),
            DropletState::Swelling => self.swell(),
            DropletState::Waiting => {}
        }
    }

    fn swell(&mut self) {
        self.swell_frame = self.swell_frame.saturating_add(1);
        let luma = luma(self.colour) as i32;
        if luma <= SWELL_EXIT_LUMA || luma - (self.swell_frame / 2) as i32 <= SWELL_EXIT_LUMA {
            trace!("Droplet let go after {} frames", self.swell_frame);
            self.set_state(DropletState::Falling);
            self.fall_offset = 0;
        }
    }

    fn fall(&mut self) {
        self.fall_offset = self.fall_offset.saturating_add(self.velocity);
        self.velocity = self.velocity.saturating_add(self.gravity);

        let max_offset = self.max_offset();
        if self.fall_offset > max_offset {
            if self.state == DropletState::Bouncing {
                // Second collision, the droplet is spent. It stays dark at the far end.
                self.fall_offset = max_offset;
                self.set_state(DropletState::Waiting);
            } else {
                let overshoot = self.fall_offset - max_offset;
                self.fall_offset = (max_offset - overshoot).max(0);
                self.velocity = self.velocity.saturating_neg() / self.collision_damping;
                self.colour = scale(self.colour, self.collision_scaling);
                self.set_state(DropletState::Bouncing);
            }
        } else if self.fall_offset < 0 {
            self.fall_offset = 0;
        }
    }

    /// Puts the droplet back at the top with its base colour, ready to swell or fall.
    pub fn respawn(&mut self, state: DropletState) {
        self.colour = self.base_colour;
        self.fall_offset = 0;
        self.swell_frame = 0;
        self.velocity = self.initial_velocity;
        self.set_state(state);
    }

    /// A droplet is active in every state except [`DropletState::Waiting`]
    pub fn is_active(&self) -> bool {
        self.state != DropletState::Waiting
    }

    /// Fixed point offset of the far end of the strip
    pub fn max_offset(&self) -> i32 {
        to_fixed(self.max_pixel)
    }

    pub fn state(&self) -> DropletState {
        self.state
    }

    pub fn set_state(&mut self, state: DropletState) {
        if state != self.state {
            debug!("Droplet {} -> {}", self.state, state);
        }
        self.state = state;
    }

    /// The colour currently being drawn. Dims after the first impact.
    pub fn colour(&self) -> RGB8 {
        self.colour
    }

    /// Sets the colour and makes it the colour every new droplet starts with
    pub fn set_colour(&mut self, colour: RGB8) {
        self.base_colour = colour;
        self.colour = colour;
    }

    pub fn base_colour(&self) -> RGB8 {
        self.base_colour
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: i32) {
        self.velocity = velocity;
    }

    pub fn gravity(&self) -> i32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: i32) {
        self.gravity = gravity;
    }

    pub fn fall_offset(&self) -> i32 {
        self.fall_offset
    }

    /// Places the droplet. The offset is clamped to the strip.
    pub fn set_fall_offset(&mut self, offset: i32) {
        self.fall_offset = offset.clamp(0, self.max_offset());
    }

    pub fn swell_frame(&self) -> u16 {
        self.swell_frame
    }

    pub fn reverse_direction(&self) -> bool {
        self.reverse_direction
    }

    pub fn set_reverse_direction(&mut self, reverse: bool) {
        self.reverse_direction = reverse;
    }

    pub fn strip_len(&self) -> usize {
        self.strip_len
    }

    /// Index of the last pixel on the strip, 0 for an empty strip
    pub fn max_pixel(&self) -> usize {
        self.max_pixel
    }
}
