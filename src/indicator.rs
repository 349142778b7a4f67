use crate::queue::CommandQueue;

/// Host commands understood by the indicator LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum IndicatorCommand {
    On,
    Off,
}

impl IndicatorCommand {
    /// Exact, case sensitive match.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "ON" => Some(IndicatorCommand::On),
            "OFF" => Some(IndicatorCommand::Off),
            _ => None,
        }
    }

    pub fn level(self) -> bool {
        matches!(self, IndicatorCommand::On)
    }
}

/// A binary output line.
pub trait OutputLine {
    fn set_level(&mut self, high: bool);
}

pub struct IndicatorController<'a, O> {
    commands: &'a CommandQueue,
    output: O,
}

impl<'a, O: OutputLine> IndicatorController<'a, O> {
    pub fn new(commands: &'a CommandQueue, output: O) -> Self {
        Self { commands, output }
    }

    /// Waits for one command and applies it. Unknown payloads are ignored.
    pub async fn handle_next(&mut self) -> Option<IndicatorCommand> {
        let text = self.commands.next().await;
        let command = IndicatorCommand::parse(&text)?;
        self.output.set_level(command.level());
        Some(command)
    }
}
