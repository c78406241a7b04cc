//! Pacing configuration for the prompter.

use core::fmt;

/// Scroll rate in tenths of a word per second.
///
/// Whole tenths keep the pacing arithmetic in integers; `20` is two words per
/// second.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ScrollSpeed(u16);

impl ScrollSpeed {
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    /// Rounds to the nearest tenth. Non-finite rates have no speed.
    ///
    /// Negative rates map to zero and are expected to be clamped by
    /// [`PrompterConfig::clamp_speed`].
    pub fn from_words_per_second(words_per_second: f32) -> Option<Self> {
        if !words_per_second.is_finite() {
            return None;
        }

        // `as` saturates, so negative rates land on 0 and huge ones on u16::MAX.
        Some(Self((words_per_second * 10.0 + 0.5) as u16))
    }

    pub const fn tenths(self) -> u16 {
        self.0
    }

    pub fn words_per_second(self) -> f32 {
        self.0 as f32 / 10.0
    }
}

impl fmt::Display for ScrollSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} words/sec", self.0 / 10, self.0 % 10)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrompterConfig {
    pub speed: ScrollSpeed,
    pub min_speed: ScrollSpeed,
    pub max_speed: ScrollSpeed,
    /// Increment applied by the faster/slower commands.
    pub speed_step: ScrollSpeed,
    pub countdown_seconds: u8,
}

impl Default for PrompterConfig {
    fn default() -> Self {
        Self {
            speed: ScrollSpeed::from_tenths(20),
            min_speed: ScrollSpeed::from_tenths(5),
            max_speed: ScrollSpeed::from_tenths(100),
            speed_step: ScrollSpeed::from_tenths(1),
            countdown_seconds: 3,
        }
    }
}

impl PrompterConfig {
    /// Orders the bounds, keeps every rate positive and pulls `speed` into range.
    pub fn normalized(mut self) -> Self {
        if self.max_speed < self.min_speed {
            core::mem::swap(&mut self.max_speed, &mut self.min_speed);
        }
        self.min_speed = self.min_speed.max(ScrollSpeed::from_tenths(1));
        self.max_speed = self.max_speed.max(self.min_speed);
        self.speed_step = self.speed_step.max(ScrollSpeed::from_tenths(1));
        self.speed = self.clamp_speed(self.speed);
        self.countdown_seconds = self.countdown_seconds.max(1);
        self
    }

    pub fn clamp_speed(&self, speed: ScrollSpeed) -> ScrollSpeed {
        speed.clamp(self.min_speed, self.max_speed)
    }

    pub fn step_speed(&self, speed: ScrollSpeed, faster: bool) -> ScrollSpeed {
        let step = self.speed_step.tenths();
        let next = if faster {
            speed.tenths().saturating_add(step)
        } else {
            speed.tenths().saturating_sub(step)
        };
        self.clamp_speed(ScrollSpeed::from_tenths(next))
    }
}
