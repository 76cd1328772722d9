use embassy_time::{Duration, Instant, Ticker};
use esp_hal::{
    Async,
    peripherals::{GPIO2, RNG},
    rmt::ChannelCreator,
    rng::Rng,
};
use esp_hal_smartled::{SmartLedsAdapterAsync, smart_led_buffer};
use smart_leds::RGB8;

use crate::{
    ANIMATION_UPDATE, AsyncLedStrip, DropletConfig, LED_STRING_SIZE, RgbBrightness, WaterTorture,
};

/// Runs the water torture animation on the LED strip, one frame every [`ANIMATION_UPDATE`]
/// milliseconds.
///
/// # Parameters
/// * `rmt_channel` - RMT channel that generates the WS2812 waveform
/// * `pin` - The GPIO pin to which the LED strip is connected
/// * `rng` - Hardware RNG used to seed the droplet schedule
#[embassy_executor::task]
pub async fn handle_water_torture(
    rmt_channel: ChannelCreator<Async, 0>,
    pin: GPIO2<'static>,
    rng: RNG<'static>,
) {
    let neopixel = SmartLedsAdapterAsync::new(rmt_channel, pin, smart_led_buffer!(LED_STRING_SIZE));
    let mut pixels = [RGB8::default(); LED_STRING_SIZE];
    let strip =
        AsyncLedStrip::new(neopixel, &mut pixels).with_brightness(RgbBrightness::Medium as u8);

    // Mix the hardware RNG with the boot time so every power up gets a different schedule
    let mut trng = Rng::new(rng);
    let seed = ((trng.random() as u64) << 32) ^ Instant::now().as_ticks();

    let mut animation = match WaterTorture::new(
        &DropletConfig::default(),
        strip,
        fastrand::Rng::with_seed(seed),
    ) {
        Ok(animation) => animation,
        Err(_e) => {
            warn!("WATER_TORTURE: Invalid droplet configuration {}", _e);
            return;
        }
    };

    info!("WATER_TORTURE: Animating {} LEDs", LED_STRING_SIZE);
    let mut ticker = Ticker::every(Duration::from_millis(ANIMATION_UPDATE));
    loop {
        animation.advance();
        if animation.strip_mut().flush().await.is_err() {
            warn!("WATER_TORTURE: Failed to update LED strip");
        }
        ticker.next().await;
    }
}
