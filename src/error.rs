//! Error types of the core library.
//!
//! None of these ever reach the host. Operational errors are counted and
//! logged by the task that hits them, initialization errors halt the board.

/// Rejected poller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum ConfigError {
    InvertedThresholds { reverse: i16, forward: i16 },
}

/// Accelerometer access failure, wrapping the bus error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum SensorError<E> {
    Bus(E),
}

impl<E> From<E> for SensorError<E> {
    fn from(e: E) -> Self {
        SensorError::Bus(e)
    }
}

/// Indicator command that could not be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum CommandError {
    TooLong(usize),
    NotUtf8,
    QueueFull,
}
