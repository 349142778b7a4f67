use crate::queue::{CommandQueue, OutboundQueue};

/// Queues shared by the firmware tasks.
///
/// Built once at startup and handed to every task as `&'static Context`.
pub struct Context {
    pub outbound: OutboundQueue,
    pub commands: CommandQueue,
}

impl Context {
    pub const fn new() -> Self {
        Self {
            outbound: OutboundQueue::new(),
            commands: CommandQueue::new(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::{Direction, Packet};

    #[test]
    fn queues_are_independent() {
        let ctx = Context::new();
        assert!(ctx.outbound.try_enqueue(Packet::new(Direction::Forward)));
        assert!(ctx.commands.is_empty());
        ctx.commands.try_submit("ON").unwrap();
        assert_eq!(ctx.outbound.len(), 1);
        assert_eq!(ctx.commands.len(), 1);
    }
}
