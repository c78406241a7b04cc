use std::{
    fmt::Write as _,
    io::{self, Write as _},
};

use log::{debug, warn};
use prompter_core::{
    composer::Controls,
    projector::{Projection, ScrollBehavior, ScrollTracker, WordClass},
    render::Screen,
};

const WORDS_BEFORE: usize = 6;
const WORDS_AFTER: usize = 10;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const STYLE_PAST: &str = "\x1b[2m";
const STYLE_ACTIVE: &str = "\x1b[1;7m";
const STYLE_RESET: &str = "\x1b[0m";

/// Draws controller screens as ANSI text on stdout.
pub(super) struct TerminalRenderer {
    scroll: ScrollTracker,
}

impl TerminalRenderer {
    pub(super) const fn new() -> Self {
        Self {
            scroll: ScrollTracker::new(),
        }
    }

    pub(super) fn render(&mut self, screen: Screen<'_>) {
        let frame = self.frame(screen);
        let mut stdout = io::stdout().lock();
        if let Err(err) = stdout
            .write_all(frame.as_bytes())
            .and_then(|()| stdout.flush())
        {
            warn!("render: stdout write failed: {}", err);
        }
    }

    fn frame(&mut self, screen: Screen<'_>) -> String {
        let mut out = String::new();

        match screen {
            Screen::Ready {
                placeholder,
                word_count,
                speed,
                notice,
                controls,
            } => {
                self.scroll.reset();
                out.push_str(CLEAR_SCREEN);
                let _ = writeln!(out, "{}", placeholder);
                let _ = writeln!(out, "script: {} words  speed: {}", word_count, speed);
                if let Some(notice) = notice {
                    let _ = writeln!(out, "! {}", notice);
                }
                push_controls(&mut out, controls);
            }
            Screen::Countdown {
                remaining,
                speed,
                controls,
            } => {
                let _ = writeln!(out, "  {} ...  ({})", remaining, speed);
                push_controls(&mut out, controls);
            }
            Screen::Prompter {
                projection,
                elapsed,
                speed,
                controls,
            } => {
                let Some(target) = self.scroll.observe(projection.active()) else {
                    let _ = writeln!(out, "[REC {}]", elapsed);
                    return out;
                };
                debug!("render: scroll to word {} ({:?})", target.index, target.behavior);

                if target.behavior == ScrollBehavior::Instant {
                    out.push_str(CLEAR_SCREEN);
                }
                let _ = writeln!(out, "[REC {}] {}", elapsed, speed);
                push_window(&mut out, projection);
                push_controls(&mut out, controls);
            }
            Screen::Finished {
                projection,
                elapsed,
                speed,
                artifact,
                notice,
                controls,
            } => {
                let _ = self.scroll.observe(projection.active());
                let _ = writeln!(out, "-- stopped at {} ({}) --", elapsed, speed);
                push_window(&mut out, projection);
                if let Some(notice) = notice {
                    let _ = writeln!(out, "! {}", notice);
                }
                match artifact {
                    Some(artifact) => {
                        let _ = writeln!(out, "recording: {} bytes {}", artifact.len(), artifact.mime);
                    }
                    None => {
                        let _ = writeln!(out, "recording: none");
                    }
                }
                push_controls(&mut out, controls);
            }
        }

        out
    }
}

fn push_window(out: &mut String, projection: Projection<'_>) {
    let mut line = String::new();
    for word in projection.window(WORDS_BEFORE, WORDS_AFTER) {
        if !line.is_empty() {
            line.push(' ');
        }
        match word.class {
            WordClass::Past => {
                let _ = write!(line, "{}{}{}", STYLE_PAST, word.text, STYLE_RESET);
            }
            WordClass::Active => {
                let _ = write!(line, "{}{}{}", STYLE_ACTIVE, word.text, STYLE_RESET);
            }
            WordClass::Pending => line.push_str(word.text),
        }
    }
    let _ = writeln!(out, "  {}", line);
}

fn push_controls(out: &mut String, controls: Controls) {
    let hints = [
        (controls.start, "start"),
        (controls.stop, "stop"),
        (controls.cancel, "cancel"),
        (controls.speed, "faster/slower/speed <wps>"),
        (controls.download, "download"),
        (controls.back, "back"),
    ];

    let mut first = true;
    out.push('>');
    for (_, label) in hints.iter().filter(|(enabled, _)| *enabled) {
        out.push_str(if first { " " } else { " | " });
        out.push_str(label);
        first = false;
    }
    out.push_str(" | quit\n");
}

#[cfg(test)]
mod tests {
    use prompter_core::{render::ElapsedClock, script::Script, settings::ScrollSpeed};

    use super::*;

    fn prompter_screen(projection: Projection<'_>) -> Screen<'_> {
        Screen::Prompter {
            projection,
            elapsed: ElapsedClock::from_seconds(2),
            speed: ScrollSpeed::from_tenths(20),
            controls: Controls {
                stop: true,
                ..Controls::default()
            },
        }
    }

    #[test]
    fn prompter_frame_highlights_the_active_word() {
        let script = Script::new("alpha beta gamma");
        let mut renderer = TerminalRenderer::new();

        let frame = renderer.frame(prompter_screen(Projection::new(script, Some(1))));
        assert!(frame.contains("[REC 00:02]"));
        assert!(frame.contains(&format!("{}beta{}", STYLE_ACTIVE, STYLE_RESET)));
        assert!(frame.contains(&format!("{}alpha{}", STYLE_PAST, STYLE_RESET)));
        assert!(frame.contains("gamma"));
        assert!(frame.contains("> stop | quit"));
    }

    #[test]
    fn unchanged_word_only_refreshes_the_clock() {
        let script = Script::new("alpha beta gamma");
        let mut renderer = TerminalRenderer::new();

        let _ = renderer.frame(prompter_screen(Projection::new(script, Some(0))));
        let frame = renderer.frame(prompter_screen(Projection::new(script, Some(0))));
        assert_eq!(frame, "[REC 00:02]\n");
    }

    #[test]
    fn controls_line_lists_enabled_actions() {
        let mut out = String::new();
        push_controls(
            &mut out,
            Controls {
                start: true,
                speed: true,
                back: true,
                ..Controls::default()
            },
        );
        assert_eq!(out, "> start | faster/slower/speed <wps> | back | quit\n");
    }
}
