use super::{Command, CommandProvider};

/// Silent operator console for controller tests and scripted sessions.
///
/// Takes are driven through `begin_take`, `stop` and the other direct
/// controller methods instead of polled commands.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl CommandProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        Ok(None)
    }
}
