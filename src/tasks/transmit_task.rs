use embassy_executor::task;
use embassy_time::Timer;
use tiltlink::config::TransmitConfig;
use tiltlink::context::Context;
use tiltlink::transmit::{Delivery, TransmitWorker};

use crate::io::UsbPacketSink;

/// Transmit worker — drains the outbound queue into USB CDC.
#[task]
pub async fn transmit_task(ctx: &'static Context, sink: UsbPacketSink, config: TransmitConfig) {
    let mut worker = TransmitWorker::new(&ctx.outbound, sink);

    loop {
        if let Delivery::Sent(packet) = worker.forward_next().await {
            defmt::trace!("sent {:#x}", packet.to_word());
        }
        Timer::after_millis(config.pacing_ms).await;
    }
}
