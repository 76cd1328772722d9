use crate::RgbBrightness;
use smart_leds::{RGB8, SmartLedsWrite, SmartLedsWriteAsync};

/// A strip of LEDs with a pixel buffer that can be cleared, drawn into and sent to the hardware
pub trait Strip {
    /// Error reported by the hardware when sending the buffer
    type Error;

    /// The pixel buffer, one entry per LED
    fn pixels(&mut self) -> &mut [RGB8];

    /// Number of LEDs on the strip
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets every pixel in the buffer to black. Nothing is sent to the hardware.
    fn clear(&mut self) {
        self.pixels().fill(RGB8::default());
    }

    /// Sends the current buffer to the LEDs
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// Drives a buffer borrowed from the caller through any [`SmartLedsWrite`] driver
pub struct LedStrip<'a, W> {
    writer: W,
    pixels: &'a mut [RGB8],
    /// Global brightness from 0 (off) to 255 (max brightness)
    brightness: u8,
}

impl<'a, W> LedStrip<'a, W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Create a new strip.
    ///
    /// # Parameters
    /// * `writer` - The driver that sends colours down the wire
    /// * `pixels` - The buffer to draw into, one entry per LED
    pub fn new(writer: W, pixels: &'a mut [RGB8]) -> Self {
        Self {
            writer,
            pixels,
            brightness: RgbBrightness::Max as u8,
        }
    }

    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> Strip for LedStrip<'_, W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn pixels(&mut self) -> &mut [RGB8] {
        &mut *self.pixels
    }

    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.writer.write(corrected(&*self.pixels, self.brightness))
    }
}

/// Drives a buffer borrowed from the caller through a [`SmartLedsWriteAsync`] driver. Use
/// [`AsyncLedStrip::flush`] from async code. [`Strip::show`] blocks on the same write and is what
/// blanks the strip on teardown.
pub struct AsyncLedStrip<'a, W> {
    writer: W,
    pixels: &'a mut [RGB8],
    brightness: u8,
}

impl<'a, W> AsyncLedStrip<'a, W>
where
    W: SmartLedsWriteAsync<Color = RGB8>,
{
    pub fn new(writer: W, pixels: &'a mut [RGB8]) -> Self {
        Self {
            writer,
            pixels,
            brightness: RgbBrightness::Max as u8,
        }
    }

    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Sends the current buffer to the LEDs
    pub async fn flush(&mut self) -> Result<(), W::Error> {
        self.writer
            .write(corrected(&*self.pixels, self.brightness))
            .await
    }
}

impl<W> Strip for AsyncLedStrip<'_, W>
where
    W: SmartLedsWriteAsync<Color = RGB8>,
{
    type Error = W::Error;

    fn pixels(&mut self) -> &mut [RGB8] {
        &mut *self.pixels
    }

    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        embassy_futures::block_on(self.flush())
    }
}

/// Applies gamma correction and the global brightness on the way out. The buffer itself is left
/// as drawn so additive blending keeps working on linear values.
fn corrected(pixels: &[RGB8], brightness: u8) -> impl Iterator<Item = RGB8> + '_ {
    smart_leds::brightness(smart_leds::gamma(pixels.iter().cloned()), brightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keeps every frame it is asked to send
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for Recorder {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    /// Async driver that keeps every frame it is asked to send
    #[derive(Default)]
    struct AsyncRecorder {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWriteAsync for AsyncRecorder {
        type Error = ();
        type Color = RGB8;

        async fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn async_flush_sends_the_buffer() {
        let mut pixels = [RGB8::default(); 2];
        let mut strip = AsyncLedStrip::new(AsyncRecorder::default(), &mut pixels);
        strip.pixels()[0] = RGB8::new(0, 255, 0);
        embassy_futures::block_on(strip.flush()).unwrap();
        assert_eq!(
            strip.writer().frames,
            vec![vec![RGB8::new(0, 255, 0), RGB8::default()]]
        );
    }

    #[test]
    fn async_show_blocks_on_the_same_write() {
        let mut pixels = [RGB8::new(7, 7, 7); 3];
        let mut strip = AsyncLedStrip::new(AsyncRecorder::default(), &mut pixels);
        strip.clear();
        strip.show().unwrap();
        assert_eq!(strip.writer().frames, vec![vec![RGB8::default(); 3]]);
        assert_eq!(strip.len(), 3);
    }

    #[test]
    fn show_sends_the_buffer() {
        let mut pixels = [RGB8::default(); 3];
        let mut strip = LedStrip::new(Recorder::default(), &mut pixels);
        strip.pixels()[1] = RGB8::new(255, 0, 255);
        strip.show().unwrap();
        assert_eq!(
            strip.writer().frames,
            vec![vec![
                RGB8::default(),
                RGB8::new(255, 0, 255),
                RGB8::default()
            ]]
        );
    }

    #[test]
    fn show_leaves_the_buffer_alone() {
        let mut pixels = [RGB8::new(128, 128, 128); 2];
        let mut strip = LedStrip::new(Recorder::default(), &mut pixels)
            .with_brightness(RgbBrightness::Medium as u8);
        strip.show().unwrap();
        assert_eq!(strip.pixels()[0], RGB8::new(128, 128, 128));
        let sent = strip.writer().frames[0][0];
        assert!(sent.r < 128);
    }

    #[test]
    fn clear_blanks_without_sending() {
        let mut pixels = [RGB8::new(9, 9, 9); 4];
        let mut strip = LedStrip::new(Recorder::default(), &mut pixels);
        strip.clear();
        assert!(strip.pixels().iter().all(|p| *p == RGB8::default()));
        assert!(strip.writer().frames.is_empty());
        assert_eq!(strip.len(), 4);
    }
}
