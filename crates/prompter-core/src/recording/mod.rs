//! Narration capture abstraction consumed by the playback controller.

mod mock;

use core::fmt;

pub use mock::MockRecorder;

/// Observable lifecycle of a capture session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordingStatus {
    Inactive,
    Recording,
    Stopped,
}

/// Reasons a capture session could not start.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaptureError {
    PermissionDenied,
    DeviceUnavailable,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("microphone permission denied"),
            Self::DeviceUnavailable => f.write_str("no capture device available"),
        }
    }
}

/// Finished recording handed out after [`RecordingSession::stop`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Artifact<'a> {
    pub bytes: &'a [u8],
    pub mime: &'a str,
}

impl Artifact<'_> {
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Capture collaborator driven by the controller.
///
/// Implementations own the device stream. The controller only issues
/// commands and reads status and the final artifact.
pub trait RecordingSession {
    /// Acquire the capture device and begin recording.
    ///
    /// On failure nothing stays acquired and the status remains `Inactive`.
    fn start(&mut self) -> Result<(), CaptureError>;

    /// Release the device and finalize the artifact. No-op unless recording.
    fn stop(&mut self);

    /// Drop any finished artifact and return to `Inactive`.
    fn discard(&mut self);

    fn status(&self) -> RecordingStatus;

    fn artifact(&self) -> Option<Artifact<'_>>;
}

impl<T> RecordingSession for &mut T
where
    T: RecordingSession + ?Sized,
{
    fn start(&mut self) -> Result<(), CaptureError> {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn discard(&mut self) {
        (**self).discard()
    }

    fn status(&self) -> RecordingStatus {
        (**self).status()
    }

    fn artifact(&self) -> Option<Artifact<'_>> {
        (**self).artifact()
    }
}
