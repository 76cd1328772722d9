//! Drawing a droplet into a pixel buffer.
//!
//! Light is always added on top of whatever the buffer already holds, so clear the buffer first
//! if the droplet should be the only thing on the strip.

use smart_leds::RGB8;

use crate::{
    colour::{FULL_AMPLITUDE, add_clipped_to, scale},
    droplet::{Droplet, DropletState},
    maths::{fraction, whole},
};

impl Droplet {
    /// Performs one step and draws the result
    pub fn step_and_draw(&mut self, pixels: &mut [RGB8]) {
        self.step();
        self.draw(pixels);
    }

    /// Renders the droplet into `pixels` without changing the simulation.
    ///
    /// A falling or bouncing droplet between two pixels is split across both of them in
    /// proportion to its sub-pixel offset. A bouncing droplet also lights the last pixel at full
    /// colour for the splash. A swelling droplet brightens pixel 0 as it grows.
    pub fn draw(&self, pixels: &mut [RGB8]) {
        match self.state() {
            DropletState::Falling | DropletState::Bouncing => {
                let offset = self.fall_offset();
                let pixel = whole(offset);
                let remainder = fraction(offset);

                self.add_to(pixels, pixel, scale(self.colour(), FULL_AMPLITUDE - remainder));
                if remainder != 0 {
                    self.add_to(pixels, pixel + 1, scale(self.colour(), remainder));
                }

                if self.state() == DropletState::Bouncing {
                    self.add_to(pixels, self.max_pixel(), self.colour());
                }
            }
            DropletState::Swelling => {
                self.add_to(pixels, 0, scale(self.colour(), self.swell_frame()));
            }
            DropletState::Waiting => {}
        }
    }

    /// Maps a pixel counted from where the droplet starts onto the buffer
    fn physical_index(&self, pixel: usize) -> Option<usize> {
        if self.reverse_direction() {
            self.max_pixel().checked_sub(pixel)
        } else {
            Some(pixel)
        }
    }

    fn add_to(&self, pixels: &mut [RGB8], pixel: usize, colour: RGB8) {
        if let Some(led) = self
            .physical_index(pixel)
            .and_then(|index| pixels.get_mut(index))
        {
            add_clipped_to(led, colour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DropletConfig;

    const BLUE: RGB8 = RGB8::new(0, 0, 255);

    fn droplet(state: DropletState, strip_len: usize) -> Droplet {
        let mut droplet = Droplet::new(&DropletConfig::default(), strip_len).unwrap();
        droplet.set_state(state);
        droplet
    }

    #[test]
    fn whole_pixel_lights_one_led() {
        let mut d = droplet(DropletState::Falling, 10);
        d.set_fall_offset(3 << 8);
        let mut pixels = [RGB8::default(); 10];
        d.draw(&mut pixels);
        for (i, p) in pixels.iter().enumerate() {
            assert_eq!(*p, if i == 3 { BLUE } else { RGB8::default() });
        }
    }

    #[test]
    fn bounce_lights_splash() {
        let mut d = droplet(DropletState::Bouncing, 10);
        d.set_colour(RGB8::new(0, 0, 100));
        d.set_fall_offset(2 << 8);
        let mut pixels = [RGB8::default(); 10];
        d.draw(&mut pixels);
        assert_eq!(pixels[2], RGB8::new(0, 0, 100));
        assert_eq!(pixels[9], RGB8::new(0, 0, 100));
    }

    #[test]
    fn bounce_at_the_end_adds_up() {
        let mut d = droplet(DropletState::Bouncing, 10);
        d.set_colour(RGB8::new(0, 0, 200));
        d.set_fall_offset(d.max_offset());
        let mut pixels = [RGB8::default(); 10];
        d.draw(&mut pixels);
        assert_eq!(pixels[9], RGB8::new(0, 0, 255));
    }

    #[test]
    fn swelling_ramps_pixel_zero() {
        let mut d = droplet(DropletState::Swelling, 10);
        d.set_colour(RGB8::new(255, 255, 255));
        for _ in 0..128 {
            d.step();
        }
        let mut pixels = [RGB8::default(); 10];
        d.draw(&mut pixels);
        assert_eq!(pixels[0], RGB8::new(127, 127, 127));
        assert!(pixels[1..].iter().all(|p| *p == RGB8::default()));
    }

    #[test]
    fn waiting_draws_nothing() {
        let d = droplet(DropletState::Waiting, 10);
        let mut pixels = [RGB8::new(1, 2, 3); 10];
        d.draw(&mut pixels);
        assert!(pixels.iter().all(|p| *p == RGB8::new(1, 2, 3)));
    }

    #[test]
    fn reverse_direction_mirrors() {
        let mut d = droplet(DropletState::Bouncing, 10);
        d.set_reverse_direction(true);
        d.set_fall_offset(0x0140);
        let mut pixels = [RGB8::default(); 10];
        d.draw(&mut pixels);
        assert_eq!(pixels[8], scale(BLUE, 192));
        assert_eq!(pixels[7], scale(BLUE, 64));
        assert_eq!(pixels[0], BLUE);
    }

    #[test]
    fn short_buffer_is_not_overrun() {
        let mut d = droplet(DropletState::Bouncing, 10);
        d.set_fall_offset(0x0880);
        let mut pixels = [RGB8::default(); 9];
        d.draw(&mut pixels);
        assert_eq!(pixels[8], scale(BLUE, 128));
        d.draw(&mut []);
    }

    #[test]
    fn step_and_draw_steps_first() {
        let mut d = droplet(DropletState::Falling, 10);
        d.set_fall_offset(0);
        d.set_velocity(0x80);
        let mut pixels = [RGB8::default(); 10];
        d.step_and_draw(&mut pixels);
        assert_eq!(pixels[0], scale(BLUE, 128));
        assert_eq!(pixels[1], scale(BLUE, 128));
    }
}
