use crate::error::ConfigError;
use crate::sensor::Axis;

/// Outbound packet slots between the poller and the transmit worker.
pub const OUTBOUND_CAPACITY: usize = 10;
/// Pending indicator commands.
pub const COMMAND_CAPACITY: usize = 4;
/// Longest indicator command accepted, in bytes.
pub const COMMAND_LEN: usize = 16;

/// Sensor poller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub struct PollerConfig {
    /// Readings at or below this select reverse.
    pub reverse_threshold: i16,
    /// Readings at or above this select forward.
    pub forward_threshold: i16,
    /// Delay after each iteration while transmission is enabled.
    pub active_interval_ms: u64,
    /// Delay after each iteration while transmission is disabled.
    /// `None` keeps the busy poll: the task only yields to the executor.
    pub idle_interval_ms: Option<u64>,
    /// Accelerometer axis that drives the direction.
    pub axis: Axis,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            reverse_threshold: -500,
            forward_threshold: 1500,
            active_interval_ms: 10,
            idle_interval_ms: None,
            axis: Axis::X,
        }
    }
}

impl PollerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reverse_threshold >= self.forward_threshold {
            return Err(ConfigError::InvertedThresholds {
                reverse: self.reverse_threshold,
                forward: self.forward_threshold,
            });
        }
        Ok(())
    }

    pub fn active_delay(&self) -> u64 {
        self.active_interval_ms
    }

    pub fn idle_delay(&self) -> Option<u64> {
        self.idle_interval_ms
    }
}

/// Transmit worker tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub struct TransmitConfig {
    /// Pause after every send attempt.
    pub pacing_ms: u64,
}

impl Default for TransmitConfig {
    fn default() -> Self {
        Self { pacing_ms: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_constants() {
        let cfg = PollerConfig::default();
        assert_eq!(cfg.reverse_threshold, -500);
        assert_eq!(cfg.forward_threshold, 1500);
        assert_eq!(cfg.active_delay(), 10);
        assert_eq!(cfg.idle_delay(), None);
        assert_eq!(TransmitConfig::default().pacing_ms, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let cfg = PollerConfig {
            reverse_threshold: 200,
            forward_threshold: 200,
            ..PollerConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvertedThresholds {
                reverse: 200,
                forward: 200
            })
        );
    }
}
