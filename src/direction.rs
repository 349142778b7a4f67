use crate::config::PollerConfig;
use crate::packet::Direction;

/// Whether direction packets are produced. Flipped by the user button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum TransmitMode {
    #[default]
    Disabled,
    Enabled,
}

impl TransmitMode {
    pub fn toggle(&mut self) {
        *self = match self {
            TransmitMode::Disabled => TransmitMode::Enabled,
            TransmitMode::Enabled => TransmitMode::Disabled,
        };
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, TransmitMode::Enabled)
    }
}

/// Two-threshold direction selector with a dead zone between them.
#[derive(Debug, Clone, Copy)]
pub struct Hysteresis {
    reverse_threshold: i16,
    forward_threshold: i16,
    pending: Direction,
}

impl Hysteresis {
    pub fn new(config: &PollerConfig) -> Self {
        Self {
            reverse_threshold: config.reverse_threshold,
            forward_threshold: config.forward_threshold,
            pending: Direction::Forward,
        }
    }

    pub fn with_pending(config: &PollerConfig, pending: Direction) -> Self {
        Self {
            pending,
            ..Self::new(config)
        }
    }

    /// Applies one reading. Returns the direction newly selected by a
    /// threshold, or `None` when the reading sat in the dead zone.
    pub fn update(&mut self, measurement: i16) -> Option<Direction> {
        let selected = if measurement <= self.reverse_threshold {
            Direction::Reverse
        } else if measurement >= self.forward_threshold {
            Direction::Forward
        } else {
            return None;
        };
        self.pending = selected;
        Some(selected)
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hysteresis() -> Hysteresis {
        Hysteresis::new(&PollerConfig::default())
    }

    #[test]
    fn mode_toggles_both_ways() {
        let mut mode = TransmitMode::default();
        assert_eq!(mode, TransmitMode::Disabled);
        mode.toggle();
        assert!(mode.is_enabled());
        mode.toggle();
        assert!(!mode.is_enabled());
    }

    #[test]
    fn thresholds_are_inclusive() {
        let mut h = hysteresis();
        assert_eq!(h.update(-500), Some(Direction::Reverse));
        assert_eq!(h.update(1500), Some(Direction::Forward));
        assert_eq!(h.update(-499), None);
        assert_eq!(h.update(1499), None);
        assert_eq!(h.pending(), Direction::Forward);
    }

    #[test]
    fn dead_zone_holds_pending_direction() {
        let mut h = hysteresis();
        h.update(i16::MIN);
        for m in [-499, 0, 700, 1499, 3] {
            h.update(m);
            assert_eq!(h.pending(), Direction::Reverse);
        }
        h.update(i16::MAX);
        for m in [1499, -499, 0] {
            h.update(m);
            assert_eq!(h.pending(), Direction::Forward);
        }
    }

    #[test]
    fn seeded_pending_holds_in_dead_zone() {
        let mut h = Hysteresis::with_pending(&PollerConfig::default(), Direction::Reverse);
        assert_eq!(h.update(0), None);
        assert_eq!(h.pending(), Direction::Reverse);
    }

    #[test]
    fn starts_forward() {
        assert_eq!(hysteresis().pending(), Direction::Forward);
    }
}
