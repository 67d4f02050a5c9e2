use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;

use ssd1306_direct::{BinaryColor, DisplayError, Pins, Ssd1306, DEFAULT_ADDRESS, FONT_5X7};

/// Turn a driver argument error into something `main` can return
fn check(result: Result<(), DisplayError>, what: &str) -> anyhow::Result<()> {
    result.map_err(|e| anyhow::anyhow!("{} failed: {:?}", what, e))
}

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    log::info!(
        "Configuring I2C on SDA={} SCL={} at 400 kHz",
        Pins::SDA,
        Pins::SCL
    );
    let config = I2cConfig::new().baudrate(400.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        pins.gpio21, // Pins::SDA
        pins.gpio22, // Pins::SCL
        &config,
    )?;

    let mut display = Ssd1306::new(i2c, DEFAULT_ADDRESS, FONT_5X7);
    if let Err(e) = display.init() {
        log::error!("Display init failed: {:?}", e);
        return Err(anyhow::anyhow!("Display init failed: {:?}", e));
    }
    display.set_brightness(0x7F);

    // The panel is mounted in portrait: every string takes 7 columns (8 inverse)
    // and the 64 rows run across it.
    check(display.set_column(0), "Title position")?;
    check(display.draw_string("STATUS", false), "Title")?;
    check(
        display.draw_horizontal_line(0, 64, 9, BinaryColor::On),
        "Separator",
    )?;

    check(display.set_column(12), "Menu position")?;
    check(display.draw_string("> Start", true), "Selected entry")?;
    check(display.draw_string("  Setup", false), "Entry")?;
    check(display.draw_string("  Info", false), "Entry")?;

    check(display.draw_vertical_line(40, 110, 63), "Scroll bar")?;
    check(
        display.draw_horizontal_line(0, 64, 112, BinaryColor::On),
        "Footer separator",
    )?;

    let mut uptime = 0u32;
    loop {
        check(display.set_column(118), "Uptime position")?;
        check(
            display.draw_string(&format!("UP {:>5}s", uptime), false),
            "Uptime",
        )?;

        let diagnostics = display.diagnostics();
        if diagnostics.failed_transactions > 0 {
            log::warn!(
                "{} failed I2C transactions, last: {:?}",
                diagnostics.failed_transactions,
                diagnostics.last_error
            );
            display.reset_diagnostics();
        }

        FreeRtos::delay_ms(1000);
        uptime = uptime.wrapping_add(1);
    }
}
