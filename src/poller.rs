//! Sensor poller state machine.
//!
//! One call to [`SensorPoller::poll`] is one loop iteration of the sensor
//! task: button edge, mode, hysteresis, change detection and enqueue. The
//! task owns the I/O; this type only decides.

use crate::config::PollerConfig;
use crate::debounce::EdgeDetector;
use crate::direction::{Hysteresis, TransmitMode};
use crate::packet::{Direction, Packet};
use crate::queue::OutboundQueue;

/// What happened to a packet produced by a direction change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum Emission {
    Queued(Packet),
    Dropped(Packet),
}

/// Result of one poll iteration, applied to the board by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub struct PollOutcome {
    pub mode: TransmitMode,
    /// Level for the "transmission enabled" LED.
    pub enabled_led: bool,
    /// New level for the direction LED, when a threshold was crossed.
    pub direction_led: Option<bool>,
    pub emitted: Option<Emission>,
    /// Pause before the next iteration; `None` only yields.
    pub delay_ms: Option<u64>,
}

pub struct SensorPoller {
    config: PollerConfig,
    button: EdgeDetector,
    mode: TransmitMode,
    hysteresis: Hysteresis,
    committed: Option<Direction>,
    dropped: u32,
}

impl SensorPoller {
    /// Starts disabled with no committed direction, so the first enabled
    /// iteration announces the pending direction to the host.
    pub fn new(config: PollerConfig) -> Self {
        Self {
            config,
            button: EdgeDetector::new(),
            mode: TransmitMode::Disabled,
            hysteresis: Hysteresis::new(&config),
            committed: None,
            dropped: 0,
        }
    }

    /// Starts disabled with `committed` already sent and pending.
    pub fn with_committed(config: PollerConfig, committed: Direction) -> Self {
        let mut poller = Self::new(config);
        poller.hysteresis = Hysteresis::with_pending(&config, committed);
        poller.committed = Some(committed);
        poller
    }

    pub fn poll(&mut self, pressed: bool, measurement: i16, queue: &OutboundQueue) -> PollOutcome {
        if self.button.sample(pressed) {
            self.mode.toggle();
            log_info!("transmit mode toggled, enabled={}", self.mode.is_enabled());
        }

        if !self.mode.is_enabled() {
            return PollOutcome {
                mode: self.mode,
                enabled_led: false,
                direction_led: None,
                emitted: None,
                delay_ms: self.config.idle_delay(),
            };
        }

        let direction_led = self
            .hysteresis
            .update(measurement)
            .map(|d| d == Direction::Reverse);

        let pending = self.hysteresis.pending();
        let emitted = if self.committed != Some(pending) {
            let packet = Packet::new(pending);
            // Committed even when the queue refuses the packet.
            self.committed = Some(pending);
            if queue.try_enqueue(packet) {
                Some(Emission::Queued(packet))
            } else {
                self.dropped = self.dropped.wrapping_add(1);
                log_warn!("outbound queue full, dropped packets={}", self.dropped);
                Some(Emission::Dropped(packet))
            }
        } else {
            None
        };

        PollOutcome {
            mode: self.mode,
            enabled_led: true,
            direction_led,
            emitted,
            delay_ms: Some(self.config.active_delay()),
        }
    }

    pub fn mode(&self) -> TransmitMode {
        self.mode
    }

    pub fn committed(&self) -> Option<Direction> {
        self.committed
    }

    pub fn pending(&self) -> Direction {
        self.hysteresis.pending()
    }

    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
