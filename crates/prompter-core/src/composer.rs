//! Maps playback and capture state to the operator affordances.

use crate::{app::Phase, recording::RecordingStatus};

/// Which controls the front end should offer right now.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Controls {
    pub start: bool,
    pub stop: bool,
    pub speed: bool,
    pub download: bool,
    pub back: bool,
    pub cancel: bool,
}

pub fn compose(phase: Phase, recording: RecordingStatus, has_artifact: bool) -> Controls {
    let recording_active = recording == RecordingStatus::Recording;
    let settled = matches!(phase, Phase::Idle | Phase::Stopped);

    Controls {
        start: settled && !recording_active,
        stop: phase == Phase::Scrolling && recording_active,
        speed: settled,
        download: phase == Phase::Stopped && has_artifact,
        back: match phase {
            Phase::CountingDown => false,
            Phase::Scrolling => !recording_active,
            Phase::Idle | Phase::Stopped => true,
        },
        cancel: phase == Phase::CountingDown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_offers_start_speed_and_back() {
        let controls = compose(Phase::Idle, RecordingStatus::Inactive, false);
        assert_eq!(
            controls,
            Controls {
                start: true,
                speed: true,
                back: true,
                ..Controls::default()
            }
        );
    }

    #[test]
    fn countdown_locks_everything_but_cancel() {
        let controls = compose(Phase::CountingDown, RecordingStatus::Inactive, false);
        assert_eq!(
            controls,
            Controls {
                cancel: true,
                ..Controls::default()
            }
        );
    }

    #[test]
    fn scrolling_offers_only_stop() {
        let controls = compose(Phase::Scrolling, RecordingStatus::Recording, false);
        assert_eq!(
            controls,
            Controls {
                stop: true,
                ..Controls::default()
            }
        );
    }

    #[test]
    fn scrolling_without_capture_allows_back() {
        let controls = compose(Phase::Scrolling, RecordingStatus::Inactive, false);
        assert_eq!(
            controls,
            Controls {
                back: true,
                ..Controls::default()
            }
        );
    }

    #[test]
    fn stopped_offers_download_only_with_artifact() {
        let with_artifact = compose(Phase::Stopped, RecordingStatus::Stopped, true);
        assert!(with_artifact.start && with_artifact.speed && with_artifact.back);
        assert!(with_artifact.download);
        assert!(!with_artifact.stop);

        let without_artifact = compose(Phase::Stopped, RecordingStatus::Stopped, false);
        assert!(!without_artifact.download);
    }
}
