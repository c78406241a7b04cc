//! Playback controller: countdown, word pacing and capture coordination.

use core::fmt;

use log::{debug, info, warn};

use crate::{
    composer::{Controls, compose},
    input::{Command, CommandProvider},
    observer::{Observers, StateObserver},
    projector::Projection,
    recording::{Artifact, CaptureError, RecordingSession, RecordingStatus},
    render::{ElapsedClock, READY_PLACEHOLDER, Screen},
    script::Script,
    settings::{PrompterConfig, ScrollSpeed},
};

pub const MAX_OBSERVERS: usize = 4;

const SECOND_MS: u64 = 1_000;
const TENTHS_PER_WORD_MS: u64 = 10 * SECOND_MS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Externally visible phase of the playback session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    CountingDown,
    Scrolling,
    Stopped,
}

/// User-visible message attached to the session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice {
    CaptureUnavailable(CaptureError),
    CountdownCancelled,
    EmptyScript,
    InputUnavailable,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaptureUnavailable(err) => write!(f, "Recording could not start: {}", err),
            Self::CountdownCancelled => f.write_str("Countdown cancelled"),
            Self::EmptyScript => f.write_str("Script has no words"),
            Self::InputUnavailable => f.write_str("Input error: check command source"),
        }
    }
}

/// Work the front end has to carry out on the controller's behalf.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppRequest {
    ReturnToEditor,
    SaveArtifact,
}

/// Outcome of a speed command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpeedUpdate {
    Applied(ScrollSpeed),
    /// The request was outside the configured range; the bound was used.
    Clamped(ScrollSpeed),
    Unchanged,
    /// Counting down or scrolling; pacing of the running take is fixed.
    Locked,
    /// Not a finite rate.
    Rejected,
}

/// Coherent copy of the controller state at one instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub countdown_remaining: Option<u8>,
    pub current_word: Option<usize>,
    pub word_count: usize,
    pub elapsed_seconds: u32,
    pub speed: ScrollSpeed,
    pub recording: RecordingStatus,
    pub has_artifact: bool,
    pub notice: Option<Notice>,
}

impl Snapshot {
    pub fn controls(&self) -> Controls {
        compose(self.phase, self.recording, self.has_artifact)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum StopReason {
    EndOfScript,
    EmptyScript,
    Operator,
}

/// Periodic schedules live inside the phase that owns them, so leaving a
/// phase drops its timers and no stale firing can reach the next one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Idle,
    CountingDown {
        remaining: u8,
        step: Cadence,
    },
    Scrolling {
        word_advance: Cadence,
        elapsed: Cadence,
    },
    Stopped,
}

pub struct PlaybackController<'a, RS, IN, OB = fn(&Snapshot)>
where
    RS: RecordingSession,
    IN: CommandProvider,
    OB: StateObserver,
{
    script: Script<'a>,
    recorder: RS,
    input: IN,
    config: PrompterConfig,
    speed: ScrollSpeed,
    ui: UiState,
    current_word: Option<usize>,
    elapsed_seconds: u32,
    notice: Option<Notice>,
    request: Option<AppRequest>,
    observers: Observers<OB, MAX_OBSERVERS>,
    pending_redraw: bool,
    published_in_tick: bool,
    words_since_drain: u32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("transitions.rs");
include!("cadence.rs");
