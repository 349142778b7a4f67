#![no_std]
#![no_main]

mod board;
mod fault;
mod io;
mod tasks;
mod usb;

use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::time::Hertz as TimeHertz;
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use tiltlink::config::{PollerConfig, TransmitConfig};
use tiltlink::context::Context;
use tiltlink::sensor::Accelerometer;
use {defmt_rtt as _, panic_probe as _};

use crate::board::Board;
use crate::io::{Led, SensorBus, UsbPacketSink};
use crate::tasks::indicator_task::indicator_task;
use crate::tasks::sensor_task::sensor_task;
use crate::tasks::transmit_task::transmit_task;

// ── Shared queues ────────────────────────────────────────────────────────────
static CONTEXT: StaticCell<Context> = StaticCell::new();

// ── Interrupt bindings ───────────────────────────────────────────────────────
bind_interrupts!(struct Irqs {
    I2C1_EV => embassy_stm32::i2c::EventInterruptHandler<peripherals::I2C1>;
    I2C1_ER => embassy_stm32::i2c::ErrorInterruptHandler<peripherals::I2C1>;
});

// ── Main ─────────────────────────────────────────────────────────────────────
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // 1. Board init (96 MHz PLL, 48 MHz USB)
    let board = Board::init();
    let p = board.p;
    defmt::info!("tiltlink starting");

    let poller_config = PollerConfig::default();
    if poller_config.validate().is_err() {
        fault::halt("poller thresholds inverted");
    }
    let ctx: &'static Context = CONTEXT.init(Context::new());

    // 2. USB CDC-ACM (DM=PA11, DP=PA12)
    let (usb_dev, usb_serial) = usb::init(p.USB_OTG_FS, p.PA12, p.PA11);
    if spawner.spawn(usb::usb_task(usb_dev)).is_err() {
        fault::halt("usb task spawn");
    }

    // 3. I2C1 @ 400 kHz — LSM303DLHC (SCL=PB6, SDA=PB9)
    let i2c = I2c::new(
        p.I2C1,
        p.PB6, p.PB9,
        Irqs,
        p.DMA1_CH7,
        p.DMA1_CH0,
        TimeHertz(400_000),
        Default::default(),
    );
    let mut accel = Accelerometer::new(SensorBus::new(i2c));
    if accel.init().is_err() {
        fault::halt("accelerometer init");
    }

    // 4. User button (PA0, high when pressed) and LEDs (PD12..PD15)
    let button = Input::new(p.PA0.degrade(), Pull::None);
    let green = Output::new(p.PD12.degrade(), Level::Low, Speed::Low);
    let mut orange = Output::new(p.PD13.degrade(), Level::Low, Speed::Low);
    let red = Output::new(p.PD14.degrade(), Level::Low, Speed::Low);
    let blue = Output::new(p.PD15.degrade(), Level::Low, Speed::Low);

    // 5. Spawn tasks
    if spawner
        .spawn(sensor_task(
            ctx,
            poller_config,
            button,
            accel,
            Led::new(green),
            Led::new(blue),
        ))
        .is_err()
    {
        fault::halt("sensor task spawn");
    }

    if spawner
        .spawn(transmit_task(
            ctx,
            UsbPacketSink::new(usb_serial),
            TransmitConfig::default(),
        ))
        .is_err()
    {
        fault::halt("transmit task spawn");
    }

    if spawner.spawn(indicator_task(ctx, Led::new(red))).is_err() {
        fault::halt("indicator task spawn");
    }

    defmt::info!("tasks running");

    // 6. Main task: heartbeat @ 1 Hz
    loop {
        orange.toggle();
        Timer::after(Duration::from_millis(500)).await;
    }
}
