//! Bounded queues between tasks.
//!
//! Both queues drop the newest item when full: the producer never waits and
//! nothing already queued is evicted.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;

use crate::config::{COMMAND_CAPACITY, COMMAND_LEN, OUTBOUND_CAPACITY};
use crate::error::CommandError;
use crate::packet::Packet;

/// Packets from the sensor poller to the transmit worker.
pub struct OutboundQueue {
    chan: Channel<CriticalSectionRawMutex, Packet, OUTBOUND_CAPACITY>,
}

impl OutboundQueue {
    pub const fn new() -> Self {
        Self {
            chan: Channel::new(),
        }
    }

    /// Non-blocking. `false` means the queue was full and `packet` is gone.
    pub fn try_enqueue(&self, packet: Packet) -> bool {
        self.chan.try_send(packet).is_ok()
    }

    /// Waits until a packet is available, without timeout.
    pub async fn dequeue(&self) -> Packet {
        self.chan.receive().await
    }

    pub fn len(&self) -> usize {
        self.chan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chan.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chan.is_full()
    }
}

impl Default for OutboundQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub type Command = String<COMMAND_LEN>;

/// Short text commands for the indicator controller.
///
/// The USB receive path does not feed this queue yet; whatever ends up
/// reading host commands submits them here.
pub struct CommandQueue {
    chan: Channel<CriticalSectionRawMutex, Command, COMMAND_CAPACITY>,
}

impl CommandQueue {
    pub const fn new() -> Self {
        Self {
            chan: Channel::new(),
        }
    }

    pub fn try_submit(&self, text: &str) -> Result<(), CommandError> {
        let mut cmd = Command::new();
        cmd.push_str(text)
            .map_err(|_| CommandError::TooLong(text.len()))?;
        self.chan
            .try_send(cmd)
            .map_err(|_| CommandError::QueueFull)
    }

    /// Submits a receive buffer holding a null-terminated string. Bytes after
    /// the first NUL are ignored; a buffer without NUL is taken whole.
    pub fn submit_bytes(&self, buf: &[u8]) -> Result<(), CommandError> {
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        let text = core::str::from_utf8(&buf[..end]).map_err(|_| CommandError::NotUtf8)?;
        self.try_submit(text)
    }

    pub async fn next(&self) -> Command {
        self.chan.receive().await
    }

    pub fn len(&self) -> usize {
        self.chan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chan.is_empty()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Direction;
    use embassy_futures::block_on;

    #[test]
    fn fifo_order() {
        let q = OutboundQueue::new();
        assert!(q.try_enqueue(Packet::new(Direction::Reverse)));
        assert!(q.try_enqueue(Packet::new(Direction::Forward)));
        assert_eq!(block_on(q.dequeue()).direction(), Direction::Reverse);
        assert_eq!(block_on(q.dequeue()).direction(), Direction::Forward);
        assert!(q.is_empty());
    }

    #[test]
    fn full_queue_rejects_without_touching_contents() {
        let q = OutboundQueue::new();
        for i in 0..OUTBOUND_CAPACITY {
            let d = if i % 2 == 0 {
                Direction::Forward
            } else {
                Direction::Reverse
            };
            assert!(q.try_enqueue(Packet::new(d)));
        }
        assert!(q.is_full());

        assert!(!q.try_enqueue(Packet::new(Direction::Reverse)));
        assert_eq!(q.len(), OUTBOUND_CAPACITY);

        for i in 0..OUTBOUND_CAPACITY {
            let expected = if i % 2 == 0 {
                Direction::Forward
            } else {
                Direction::Reverse
            };
            assert_eq!(block_on(q.dequeue()).direction(), expected);
        }
        assert!(q.is_empty());
    }

    #[test]
    fn commands_round_trip_in_order() {
        let q = CommandQueue::new();
        q.try_submit("ON").unwrap();
        q.try_submit("OFF").unwrap();
        assert_eq!(block_on(q.next()).as_str(), "ON");
        assert_eq!(block_on(q.next()).as_str(), "OFF");
    }

    #[test]
    fn command_bytes_stop_at_nul() {
        let q = CommandQueue::new();
        q.submit_bytes(b"OFF\0garbage").unwrap();
        q.submit_bytes(b"ON").unwrap();
        assert_eq!(block_on(q.next()).as_str(), "OFF");
        assert_eq!(block_on(q.next()).as_str(), "ON");
    }

    #[test]
    fn command_rejections() {
        let q = CommandQueue::new();
        assert_eq!(
            q.try_submit("THIS COMMAND IS FAR TOO LONG"),
            Err(CommandError::TooLong(28))
        );
        assert_eq!(q.submit_bytes(&[0xFF, 0xFE, 0]), Err(CommandError::NotUtf8));
        for _ in 0..COMMAND_CAPACITY {
            q.try_submit("ON").unwrap();
        }
        assert_eq!(q.try_submit("OFF"), Err(CommandError::QueueFull));
        assert_eq!(q.len(), COMMAND_CAPACITY);
    }
}
