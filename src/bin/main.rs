use std::path::Path;

use clap::Parser;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use env_logger::Env;
use log::{debug, info, warn};
use prompter_core::{
    app::{AppRequest, Phase, PlaybackController, Snapshot, TickResult},
    recording::Artifact,
    script::Script,
    settings::PrompterConfig,
};

use capture::MicrophoneRecorder;
use editor::ScriptDraft;
use renderer::TerminalRenderer;
use terminal::TerminalCommands;

#[path = "main/capture.rs"]
mod capture;
#[path = "main/cli.rs"]
mod cli;
#[path = "main/editor.rs"]
mod editor;
#[path = "main/renderer.rs"]
mod renderer;
#[path = "main/terminal.rs"]
mod terminal;

const TICK_INTERVAL_MS: u64 = 5;
const REPORT_INTERVAL_SECS: u64 = 5;

enum SessionExit {
    Edit,
    Quit,
}

fn log_snapshot(snapshot: &Snapshot) {
    debug!(
        "state: phase={:?} word={:?}/{} elapsed={}s recording={:?}",
        snapshot.phase,
        snapshot.current_word,
        snapshot.word_count,
        snapshot.elapsed_seconds,
        snapshot.recording
    );
}

fn save_artifact(artifact: Option<Artifact<'_>>, output: &Path) {
    let Some(artifact) = artifact else {
        warn!("download: no recording available");
        return;
    };

    match std::fs::write(output, artifact.bytes) {
        Ok(()) => info!(
            "download: wrote {} bytes ({}) to {}",
            artifact.len(),
            artifact.mime,
            output.display()
        ),
        Err(err) => warn!("download: failed to write {}: {}", output.display(), err),
    }
}

async fn run_session(
    text: &str,
    recorder: &mut MicrophoneRecorder,
    config: PrompterConfig,
    output: &Path,
) -> SessionExit {
    let mut app: PlaybackController<'_, &mut MicrophoneRecorder, TerminalCommands> =
        PlaybackController::new(Script::new(text), recorder, TerminalCommands::new(), config);
    if app.subscribe(log_snapshot).is_err() {
        warn!("observer registry full; state changes will not be logged");
    }

    info!(
        "session: {} words at {}; type `start` to record",
        app.script().word_count(),
        app.speed()
    );

    let mut renderer = TerminalRenderer::new();
    let loop_start = Instant::now();
    let mut report_start = Instant::now();
    let mut report_words: u64 = 0;

    loop {
        let now_ms = loop_start.elapsed().as_millis();
        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_screen(|screen| renderer.render(screen));
        }

        match app.take_request() {
            Some(AppRequest::ReturnToEditor) => return SessionExit::Edit,
            Some(AppRequest::SaveArtifact) => save_artifact(app.artifact(), output),
            None => {}
        }

        if terminal::quit_requested() {
            match app.phase() {
                Phase::CountingDown => {
                    let _ = app.cancel();
                }
                Phase::Scrolling => {
                    let _ = app.stop();
                }
                Phase::Idle | Phase::Stopped => {}
            }
            return SessionExit::Quit;
        }

        report_words = report_words.saturating_add(app.drain_word_updates() as u64);
        let elapsed = report_start.elapsed();
        if elapsed >= Duration::from_secs(REPORT_INTERVAL_SECS) {
            if app.phase() == Phase::Scrolling {
                let elapsed_ms = elapsed.as_millis().max(1);
                let wps_x100 = report_words * 100_000 / elapsed_ms;
                info!(
                    "effective_wps={}.{:02} words={} elapsed_ms={}",
                    wps_x100 / 100,
                    wps_x100 % 100,
                    report_words,
                    elapsed_ms
                );
            }
            report_words = 0;
            report_start = Instant::now();
        }

        Timer::after_millis(TICK_INTERVAL_MS).await;
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let args = cli::Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = args.prompter_config();
    info!(
        "prompter: speed={} range={}..{} countdown={}s output={}",
        config.speed,
        config.min_speed,
        config.max_speed,
        config.countdown_seconds,
        args.output.display()
    );

    if !capture::CAPTURE_AVAILABLE {
        warn!("capture: built without the `microphone` feature; takes cannot record audio");
    }

    terminal::spawn_stdin_reader();

    let mut recorder = MicrophoneRecorder::new();
    let mut draft = ScriptDraft::default();
    let mut submit_loaded = false;
    if let Some(path) = args.script.as_deref() {
        match draft.load(path) {
            Ok(words) => {
                info!("script: loaded {} words from {}", words, path.display());
                submit_loaded = true;
            }
            Err(err) => warn!("script: failed to read {}: {}", path.display(), err),
        }
    }

    loop {
        let submitted = if submit_loaded {
            submit_loaded = false;
            draft.submit()
        } else {
            None
        };

        let text = match submitted {
            Some(text) => text,
            None => match editor::compose(&mut draft).await {
                Some(text) => text,
                None => break,
            },
        };

        match run_session(&text, &mut recorder, config, &args.output).await {
            SessionExit::Edit => info!("editor: returning to script"),
            SessionExit::Quit => break,
        }
    }

    info!("prompter: bye");
    std::process::exit(0);
}
