//! Screen view models handed to front-end renderers.

use core::fmt;

use crate::{
    app::Notice, composer::Controls, projector::Projection, recording::Artifact,
    settings::ScrollSpeed,
};

pub const READY_PLACEHOLDER: &str = "Press record to begin";

/// Elapsed recording time split for a `mm:ss` display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ElapsedClock {
    pub minutes: u32,
    pub seconds: u8,
}

impl ElapsedClock {
    pub const fn from_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            seconds: (total % 60) as u8,
        }
    }
}

impl fmt::Display for ElapsedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// App-level view model consumed by the front-end renderer.
pub enum Screen<'a> {
    Ready {
        placeholder: &'a str,
        word_count: usize,
        speed: ScrollSpeed,
        notice: Option<Notice>,
        controls: Controls,
    },
    Countdown {
        remaining: u8,
        speed: ScrollSpeed,
        controls: Controls,
    },
    Prompter {
        projection: Projection<'a>,
        elapsed: ElapsedClock,
        speed: ScrollSpeed,
        controls: Controls,
    },
    Finished {
        projection: Projection<'a>,
        elapsed: ElapsedClock,
        speed: ScrollSpeed,
        artifact: Option<Artifact<'a>>,
        notice: Option<Notice>,
        controls: Controls,
    },
}

impl Screen<'_> {
    pub const fn controls(&self) -> Controls {
        match self {
            Self::Ready { controls, .. }
            | Self::Countdown { controls, .. }
            | Self::Prompter { controls, .. }
            | Self::Finished { controls, .. } => *controls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_clock_pads_minutes_and_seconds() {
        assert_eq!(format!("{}", ElapsedClock::from_seconds(0)), "00:00");
        assert_eq!(format!("{}", ElapsedClock::from_seconds(61)), "01:01");
        assert_eq!(format!("{}", ElapsedClock::from_seconds(3_599)), "59:59");
        assert_eq!(format!("{}", ElapsedClock::from_seconds(6_000)), "100:00");
    }
}
