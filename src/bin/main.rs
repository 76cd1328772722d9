#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use defmt::info;
use embassy_executor::Spawner;
use esp_hal::{Config, clock::CpuClock, rmt::Rmt, time::Rate, timer::systimer::SystemTimer};
use panic_rtt_target as _;
use water_torture::tasks::handle_water_torture;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    #[cfg(all(feature = "rtt", feature = "defmt"))]
    rtt_target::rtt_init_defmt!();

    let peripherals = esp_hal::init(Config::default().with_cpu_clock(CpuClock::max()));
    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    let rmt = Rmt::new(peripherals.RMT, Rate::from_mhz(80))
        .expect("Failed to initialise RMT0")
        .into_async();

    // Start the LED animation task
    spawner
        .spawn(handle_water_torture(
            rmt.channel0,
            peripherals.GPIO2,
            peripherals.RNG,
        ))
        .expect("Failed to spawn water torture task");

    info!("MAIN: Water torture running");
}
