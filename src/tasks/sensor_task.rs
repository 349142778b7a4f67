use embassy_executor::task;
use embassy_futures::yield_now;
use embassy_stm32::gpio::{AnyPin, Input};
use embassy_time::Timer;
use tiltlink::config::PollerConfig;
use tiltlink::context::Context;
use tiltlink::indicator::OutputLine;
use tiltlink::poller::{Emission, SensorPoller};
use tiltlink::sensor::Accelerometer;

use crate::io::{Led, SensorBus};

/// Sensor poller — button, accelerometer and direction change detection.
///
/// Runs forever. Paced by `PollerConfig`: 10 ms while transmitting, a bare
/// yield while disabled.
#[task]
pub async fn sensor_task(
    ctx: &'static Context,
    config: PollerConfig,
    button: Input<'static, AnyPin>,
    mut accel: Accelerometer<SensorBus>,
    mut enabled_led: Led,
    mut direction_led: Led,
) {
    let mut poller = SensorPoller::new(config);

    loop {
        let pressed = button.is_high();

        // A failed read counts as a zero reading, which sits in the dead zone.
        let measurement = match accel.read_axis(config.axis) {
            Ok(m) => m,
            Err(_) => {
                defmt::debug!("accelerometer read failed");
                0
            }
        };

        let outcome = poller.poll(pressed, measurement, &ctx.outbound);

        enabled_led.set_level(outcome.enabled_led);
        if let Some(on) = outcome.direction_led {
            direction_led.set_level(on);
        }
        if let Some(Emission::Queued(packet)) = outcome.emitted {
            defmt::debug!("queued {}", packet.direction());
        }

        match outcome.delay_ms {
            Some(ms) => Timer::after_millis(ms).await,
            None => yield_now().await,
        }
    }
}
