//! Tuning for a droplet and its respawn schedule.

use core::fmt;

use smart_leds::RGB8;

use crate::{DEFAULT_COLOUR, MAX_STRIP_LEN, maths::ONE};

/// Largest gravity magnitude accepted, in fixed point pixels per tick per tick
pub const MAX_GRAVITY: i32 = ONE;

/// Largest initial velocity magnitude accepted, in fixed point pixels per tick
pub const MAX_INITIAL_VELOCITY: i32 = 16 * ONE;

/// Everything that can be tuned on a droplet. The defaults reproduce the classic water torture
/// effect: a blue drop swelling at the top of the strip before falling and splashing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropletConfig {
    /// Colour the droplet is restored to each time it respawns
    pub base_colour: RGB8,
    /// Added to the velocity every tick while falling or bouncing
    pub gravity: i32,
    /// Velocity given to a freshly spawned droplet
    pub initial_velocity: i32,
    /// Fall from the far end of the strip towards pixel 0
    pub reverse_direction: bool,
    /// The velocity is divided by this after the first impact
    pub collision_damping: i32,
    /// Amplitude (out of 256) the colour is scaled by after the first impact
    pub collision_scaling: u16,
    /// Shortest pause between droplets, in ticks
    pub pause_min: u16,
    /// Number of different pause lengths, so pauses fall in `pause_min..pause_min + pause_span`
    pub pause_span: u16,
    /// A new droplet swells first when an 8 bit random draw is below this, otherwise it falls
    /// straight away
    pub swell_chance: u8,
}

impl Default for DropletConfig {
    fn default() -> Self {
        Self {
            base_colour: RGB8::from(DEFAULT_COLOUR),
            gravity: 8,
            initial_velocity: 0,
            reverse_direction: false,
            collision_damping: 3,
            collision_scaling: 40,
            pause_min: 200,
            pause_span: 500,
            swell_chance: 96,
        }
    }
}

impl DropletConfig {
    /// Checks every option is inside the range the fixed point maths can handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collision_damping <= 0 {
            return Err(ConfigError::DampingOutOfRange(self.collision_damping));
        }
        if self.collision_scaling > 256 {
            return Err(ConfigError::ScalingOutOfRange(self.collision_scaling));
        }
        if self.pause_span == 0 {
            return Err(ConfigError::ZeroPauseSpan);
        }
        if self.pause_min.checked_add(self.pause_span - 1).is_none() {
            return Err(ConfigError::PauseRangeOverflow);
        }
        if !(-MAX_GRAVITY..=MAX_GRAVITY).contains(&self.gravity) {
            return Err(ConfigError::GravityOutOfRange(self.gravity));
        }
        if !(-MAX_INITIAL_VELOCITY..=MAX_INITIAL_VELOCITY).contains(&self.initial_velocity) {
            return Err(ConfigError::VelocityOutOfRange(self.initial_velocity));
        }
        Ok(())
    }
}

/// Checks a strip can be driven by a droplet
pub fn validate_strip_len(len: usize) -> Result<(), ConfigError> {
    if len > MAX_STRIP_LEN {
        Err(ConfigError::StripTooLong(len))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Collision damping must be positive so a bounce reverses and slows the droplet
    DampingOutOfRange(i32),
    /// Collision scaling above 256 would brighten the droplet
    ScalingOutOfRange(u16),
    /// An empty pause range has nothing to pick from
    ZeroPauseSpan,
    /// The longest pause does not fit in 16 bits
    PauseRangeOverflow,
    GravityOutOfRange(i32),
    VelocityOutOfRange(i32),
    StripTooLong(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DampingOutOfRange(d) => {
                write!(f, "collision damping {d} must be above zero")
            }
            ConfigError::ScalingOutOfRange(s) => {
                write!(f, "collision scaling {s} is above 256")
            }
            ConfigError::ZeroPauseSpan => write!(f, "pause span must be non zero"),
            ConfigError::PauseRangeOverflow => write!(f, "pause range does not fit in 16 bits"),
            ConfigError::GravityOutOfRange(g) => {
                write!(f, "gravity {g} is outside -{MAX_GRAVITY}..={MAX_GRAVITY}")
            }
            ConfigError::VelocityOutOfRange(v) => write!(
                f,
                "initial velocity {v} is outside -{MAX_INITIAL_VELOCITY}..={MAX_INITIAL_VELOCITY}"
            ),
            ConfigError::StripTooLong(len) => {
                write!(f, "strip of {len} LEDs is longer than {MAX_STRIP_LEN}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(DropletConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_options() {
        let config = DropletConfig {
            collision_damping: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DampingOutOfRange(0)));

        let config = DropletConfig {
            collision_damping: -3,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DampingOutOfRange(-3)));

        let config = DropletConfig {
            collision_scaling: 257,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ScalingOutOfRange(257)));

        let config = DropletConfig {
            pause_span: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPauseSpan));

        let config = DropletConfig {
            pause_min: u16::MAX,
            pause_span: 2,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PauseRangeOverflow));

        let config = DropletConfig {
            gravity: -1000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::GravityOutOfRange(-1000)));
    }

    #[test]
    fn zero_gravity_is_allowed() {
        let config = DropletConfig {
            gravity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn strip_len_bounds() {
        assert!(validate_strip_len(0).is_ok());
        assert!(validate_strip_len(MAX_STRIP_LEN).is_ok());
        assert_eq!(
            validate_strip_len(MAX_STRIP_LEN + 1),
            Err(ConfigError::StripTooLong(MAX_STRIP_LEN + 1))
        );
    }

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(
            ConfigError::ScalingOutOfRange(300).to_string(),
            "collision scaling 300 is above 256"
        );
    }
}
