use super::{Artifact, CaptureError, RecordingSession, RecordingStatus};

const MOCK_AUDIO: &[u8] = b"RIFF\0\0\0\0WAVEmock";
const MOCK_MIME: &str = "audio/wav";

/// In-memory capture session for tests and hardware-free runs.
///
/// Counts every command it receives and every device acquire/release so
/// callers can check the controller never leaks a stream.
#[derive(Debug, Clone, Copy)]
pub struct MockRecorder {
    status: RecordingStatus,
    failure: Option<CaptureError>,
    has_artifact: bool,
    pub start_calls: u32,
    pub stop_calls: u32,
    pub discard_calls: u32,
    pub acquired: u32,
    pub released: u32,
}

impl MockRecorder {
    pub const fn new() -> Self {
        Self {
            status: RecordingStatus::Inactive,
            failure: None,
            has_artifact: false,
            start_calls: 0,
            stop_calls: 0,
            discard_calls: 0,
            acquired: 0,
            released: 0,
        }
    }

    /// A recorder whose every `start` fails with `error`.
    pub const fn failing(error: CaptureError) -> Self {
        let mut recorder = Self::new();
        recorder.failure = Some(error);
        recorder
    }

    pub const fn device_open(&self) -> bool {
        self.acquired > self.released
    }
}

impl Default for MockRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSession for MockRecorder {
    fn start(&mut self) -> Result<(), CaptureError> {
        self.start_calls = self.start_calls.saturating_add(1);
        if self.status == RecordingStatus::Recording {
            return Ok(());
        }
        if let Some(error) = self.failure {
            return Err(error);
        }

        self.acquired = self.acquired.saturating_add(1);
        self.status = RecordingStatus::Recording;
        self.has_artifact = false;
        Ok(())
    }

    fn stop(&mut self) {
        self.stop_calls = self.stop_calls.saturating_add(1);
        if self.status != RecordingStatus::Recording {
            return;
        }

        self.released = self.released.saturating_add(1);
        self.status = RecordingStatus::Stopped;
        self.has_artifact = true;
    }

    fn discard(&mut self) {
        self.discard_calls = self.discard_calls.saturating_add(1);
        if self.status == RecordingStatus::Recording {
            self.released = self.released.saturating_add(1);
        }
        self.status = RecordingStatus::Inactive;
        self.has_artifact = false;
    }

    fn status(&self) -> RecordingStatus {
        self.status
    }

    fn artifact(&self) -> Option<Artifact<'_>> {
        self.has_artifact.then_some(Artifact {
            bytes: MOCK_AUDIO,
            mime: MOCK_MIME,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_idempotent_and_yields_artifact() {
        let mut recorder = MockRecorder::new();
        recorder.stop();
        assert_eq!(recorder.status(), RecordingStatus::Inactive);
        assert!(recorder.artifact().is_none());

        recorder.start().unwrap();
        recorder.stop();
        recorder.stop();
        assert_eq!(recorder.status(), RecordingStatus::Stopped);
        assert_eq!(recorder.artifact().map(|a| a.mime), Some("audio/wav"));
        assert_eq!((recorder.acquired, recorder.released), (1, 1));
    }

    #[test]
    fn failed_start_acquires_nothing() {
        let mut recorder = MockRecorder::failing(CaptureError::DeviceUnavailable);
        assert_eq!(recorder.start(), Err(CaptureError::DeviceUnavailable));
        assert_eq!(recorder.status(), RecordingStatus::Inactive);
        assert!(!recorder.device_open());
    }

    #[test]
    fn discard_releases_an_open_device() {
        let mut recorder = MockRecorder::new();
        recorder.start().unwrap();
        recorder.discard();
        assert_eq!(recorder.status(), RecordingStatus::Inactive);
        assert!(!recorder.device_open());
    }
}
