use std::{
    io::BufRead,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel, signal::Signal};
use log::{debug, info, warn};
use prompter_core::{
    input::{Command, CommandProvider},
    settings::ScrollSpeed,
};

const LINE_QUEUE_DEPTH: usize = 16;

/// Lines typed on stdin, in order.
pub(super) static LINES: Channel<CriticalSectionRawMutex, String, LINE_QUEUE_DEPTH> =
    Channel::new();
/// Raised on `quit` or when stdin reaches end of file.
pub(super) static QUIT: Signal<CriticalSectionRawMutex, ()> = Signal::new();

static READ_FAILED: AtomicBool = AtomicBool::new(false);

pub(super) fn spawn_stdin_reader() {
    let spawned = thread::Builder::new()
        .name("stdin".into())
        .spawn(|| {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => embassy_futures::block_on(LINES.send(line)),
                    Err(err) => {
                        warn!("stdin: read failed: {}", err);
                        READ_FAILED.store(true, Ordering::Release);
                        return;
                    }
                }
            }
            info!("stdin: closed");
            QUIT.signal(());
        });

    if let Err(err) = spawned {
        warn!("stdin: reader thread failed to start: {}", err);
        READ_FAILED.store(true, Ordering::Release);
    }
}

pub(super) fn quit_requested() -> bool {
    QUIT.signaled()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Line {
    Command(Command),
    Quit,
}

pub(super) fn parse_line(line: &str) -> Option<Line> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?.to_ascii_lowercase();

    let command = match keyword.as_str() {
        "start" | "s" | "record" => Command::BeginTake,
        "stop" | "x" => Command::Stop,
        "faster" | "+" => Command::Faster,
        "slower" | "-" => Command::Slower,
        "cancel" | "c" => Command::Cancel,
        "back" | "b" | "edit" => Command::Back,
        "download" | "d" => Command::Download,
        "quit" | "q" => return Some(Line::Quit),
        "speed" => {
            let value = parts.next()?.parse::<f32>().ok()?;
            Command::SetSpeed(ScrollSpeed::from_words_per_second(value)?)
        }
        _ => return None,
    };

    Some(Line::Command(command))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct StdinFailed;

/// Operator commands read from the terminal during a session.
pub(super) struct TerminalCommands {
    _private: (),
}

impl TerminalCommands {
    pub(super) const fn new() -> Self {
        Self { _private: () }
    }
}

impl CommandProvider for TerminalCommands {
    type Error = StdinFailed;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        if READ_FAILED.swap(false, Ordering::AcqRel) {
            return Err(StdinFailed);
        }

        while let Ok(line) = LINES.try_receive() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line) {
                Some(Line::Command(command)) => return Ok(Some(command)),
                Some(Line::Quit) => {
                    QUIT.signal(());
                    return Ok(None);
                }
                None => {
                    warn!("input: unrecognized command {:?}", line.trim());
                    debug!(
                        "input: commands are start, stop, faster, slower, speed <wps>, cancel, back, download, quit"
                    );
                }
            }
        }

        Ok(None)
    }
}
