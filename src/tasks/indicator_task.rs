use embassy_executor::task;
use tiltlink::context::Context;
use tiltlink::indicator::IndicatorController;

use crate::io::Led;

/// Indicator LED driven by host "ON"/"OFF" commands.
#[task]
pub async fn indicator_task(ctx: &'static Context, led: Led) {
    let mut controller = IndicatorController::new(&ctx.commands, led);

    loop {
        if let Some(cmd) = controller.handle_next().await {
            defmt::info!("indicator {}", cmd);
        }
    }
}
