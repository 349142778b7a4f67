/// Edge-armed button detector.
///
/// A press is reported once when the input goes to the pressed level while
/// armed. The detector re-arms only after it has seen the released level.
/// There is no hold-time filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum EdgeDetector {
    #[default]
    Armed,
    Disarmed,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        EdgeDetector::Armed
    }

    /// Feeds one sample of the input level. Returns `true` on a press edge.
    pub fn sample(&mut self, pressed: bool) -> bool {
        match (*self, pressed) {
            (EdgeDetector::Armed, true) => {
                *self = EdgeDetector::Disarmed;
                true
            }
            (EdgeDetector::Disarmed, false) => {
                *self = EdgeDetector::Armed;
                false
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, EdgeDetector::Armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_press_fires_once() {
        let mut det = EdgeDetector::new();
        let edges = [true, true, true, true]
            .iter()
            .filter(|&&level| det.sample(level))
            .count();
        assert_eq!(edges, 1);
        assert!(!det.is_armed());
    }

    #[test]
    fn release_rearms() {
        let mut det = EdgeDetector::new();
        assert!(det.sample(true));
        assert!(!det.sample(false));
        assert!(det.is_armed());
        assert!(det.sample(true));
    }

    #[test]
    fn released_level_never_fires() {
        let mut det = EdgeDetector::new();
        for _ in 0..5 {
            assert!(!det.sample(false));
        }
        assert!(det.is_armed());
    }
}
