use crate::packet::Packet;
use crate::queue::OutboundQueue;

/// Serial transport that accepts encoded packets.
#[allow(async_fn_in_trait)]
pub trait PacketSink {
    type Error;

    async fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum Delivery {
    Sent(Packet),
    Failed(Packet),
}

/// Moves packets from the outbound queue to the transport, once each.
pub struct TransmitWorker<'a, S> {
    queue: &'a OutboundQueue,
    sink: S,
    sent: u32,
    failed: u32,
}

impl<'a, S: PacketSink> TransmitWorker<'a, S> {
    pub fn new(queue: &'a OutboundQueue, sink: S) -> Self {
        Self {
            queue,
            sink,
            sent: 0,
            failed: 0,
        }
    }

    /// Waits for the next packet and hands it to the sink. A failed send is
    /// counted and forgotten.
    pub async fn forward_next(&mut self) -> Delivery {
        let packet = self.queue.dequeue().await;
        match self.sink.send(&packet.to_bytes()).await {
            Ok(()) => {
                self.sent = self.sent.wrapping_add(1);
                log_debug!("packet sent (sent={})", self.sent);
                Delivery::Sent(packet)
            }
            Err(_) => {
                self.failed = self.failed.wrapping_add(1);
                log_warn!("send failed, packet lost (failed={})", self.failed);
                Delivery::Failed(packet)
            }
        }
    }

    pub fn sent(&self) -> u32 {
        self.sent
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Direction;
    use embassy_futures::block_on;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Vec<u8>>,
        refuse: bool,
    }

    impl PacketSink for RecordingSink {
        type Error = ();

        async fn send(&mut self, bytes: &[u8]) -> Result<(), ()> {
            if self.refuse {
                return Err(());
            }
            self.frames.push(bytes.to_vec());
            Ok(())
        }
    }

    #[test]
    fn forwards_in_queue_order() {
        let q = OutboundQueue::new();
        q.try_enqueue(Packet::new(Direction::Reverse));
        q.try_enqueue(Packet::new(Direction::Forward));

        let mut worker = TransmitWorker::new(&q, RecordingSink::default());
        block_on(worker.forward_next());
        block_on(worker.forward_next());

        assert_eq!(worker.sent(), 2);
        assert_eq!(
            worker.sink.frames,
            vec![vec![0xAB, 0xAA, 0xFC, 0xFF], vec![0xAB, 0xAA, 0xCF, 0xCC]]
        );
    }

    #[test]
    fn failed_send_is_not_retried() {
        let q = OutboundQueue::new();
        q.try_enqueue(Packet::new(Direction::Forward));
        q.try_enqueue(Packet::new(Direction::Reverse));

        let mut worker = TransmitWorker::new(
            &q,
            RecordingSink {
                refuse: true,
                ..RecordingSink::default()
            },
        );
        assert_eq!(
            block_on(worker.forward_next()),
            Delivery::Failed(Packet::new(Direction::Forward))
        );

        worker.sink.refuse = false;
        assert_eq!(
            block_on(worker.forward_next()),
            Delivery::Sent(Packet::new(Direction::Reverse))
        );
        assert_eq!((worker.sent(), worker.failed()), (1, 1));
        assert_eq!(worker.sink.frames.len(), 1);
        assert!(q.is_empty());
    }
}
