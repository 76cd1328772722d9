pub mod neopixel;
