use std::path::PathBuf;

use clap::Parser;
use log::warn;
use prompter_core::settings::{PrompterConfig, ScrollSpeed};

#[derive(Parser, Debug)]
#[command(name = "prompter", about = "Terminal teleprompter that records narration")]
pub(super) struct Args {
    /// Script file to load; starts the session right away when it has words.
    pub script: Option<PathBuf>,

    /// Scroll speed in words per second.
    #[arg(long, env = "PROMPTER_SPEED", default_value_t = 2.0)]
    pub speed: f32,

    /// Countdown before each take, in seconds.
    #[arg(long, env = "PROMPTER_COUNTDOWN", default_value_t = 3)]
    pub countdown: u8,

    /// Where `download` writes the recording.
    #[arg(long, env = "PROMPTER_OUTPUT", default_value = "teleprompter_recording.wav")]
    pub output: PathBuf,
}

impl Args {
    pub(super) fn prompter_config(&self) -> PrompterConfig {
        let mut config = PrompterConfig {
            countdown_seconds: self.countdown,
            ..PrompterConfig::default()
        };

        match ScrollSpeed::from_words_per_second(self.speed) {
            Some(speed) => config.speed = speed,
            None => warn!("config: ignoring non-finite speed {}", self.speed),
        }

        config.normalized()
    }
}
