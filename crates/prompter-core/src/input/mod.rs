//! Operator command abstraction.

mod mock;

pub use mock::MockInput;

use crate::settings::ScrollSpeed;

/// Logical commands consumed by the playback controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    BeginTake,
    Stop,
    /// Abort a running countdown.
    Cancel,
    Faster,
    Slower,
    SetSpeed(ScrollSpeed),
    /// Leave the prompter and go back to script editing.
    Back,
    Download,
}

/// Polled command provider.
pub trait CommandProvider {
    type Error;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error>;
}
