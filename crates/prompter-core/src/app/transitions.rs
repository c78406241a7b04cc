impl<'a, RS, IN, OB> PlaybackController<'a, RS, IN, OB>
where
    RS: RecordingSession,
    IN: CommandProvider,
    OB: StateObserver,
{
    fn enter_countdown(&mut self, now_ms: u64) -> bool {
        if !matches!(self.ui, UiState::Idle | UiState::Stopped) {
            debug!("take: begin ignored during {:?}", self.phase());
            return false;
        }

        self.recorder.discard();
        self.current_word = None;
        self.elapsed_seconds = 0;
        self.notice = None;

        let remaining = self.config.countdown_seconds;
        self.ui = UiState::CountingDown {
            remaining,
            step: Cadence::every_second(now_ms),
        };
        info!(
            "take: countdown started remaining={}s speed={} words={}",
            remaining,
            self.speed,
            self.script.word_count()
        );
        self.pending_redraw = true;
        true
    }

    fn enter_scrolling(&mut self, started_ms: u64) {
        self.ui = UiState::Idle;
        self.pending_redraw = true;

        if let Err(err) = self.recorder.start() {
            warn!("take: capture unavailable ({}); back to idle", err);
            self.current_word = None;
            self.notice = Some(Notice::CaptureUnavailable(err));
            return;
        }

        self.ui = UiState::Scrolling {
            word_advance: Cadence::per_word(started_ms, self.speed),
            elapsed: Cadence::every_second(started_ms),
        };
        info!("take: recording started at {}ms", started_ms);

        if self.script.is_empty() {
            self.notice = Some(Notice::EmptyScript);
            self.finish_take(StopReason::EmptyScript);
            return;
        }

        self.advance_word();
    }

    fn finish_take(&mut self, reason: StopReason) {
        self.recorder.stop();
        self.ui = UiState::Stopped;
        info!(
            "take: stopped reason={:?} word={:?}/{} elapsed={}s",
            reason,
            self.current_word,
            self.script.word_count(),
            self.elapsed_seconds
        );
        self.pending_redraw = true;
    }

    fn stop_take(&mut self) -> bool {
        if !matches!(self.ui, UiState::Scrolling { .. }) {
            debug!("take: stop ignored during {:?}", self.phase());
            return false;
        }

        self.finish_take(StopReason::Operator);
        true
    }

    fn cancel_countdown(&mut self) -> bool {
        if !matches!(self.ui, UiState::CountingDown { .. }) {
            debug!("take: cancel ignored during {:?}", self.phase());
            return false;
        }

        self.ui = UiState::Idle;
        self.notice = Some(Notice::CountdownCancelled);
        info!("take: countdown cancelled");
        self.pending_redraw = true;
        true
    }

    fn return_to_editor(&mut self) -> bool {
        if !self.controls().back {
            debug!("take: back ignored during {:?}", self.phase());
            return false;
        }

        if self.recorder.status() == RecordingStatus::Recording {
            self.recorder.stop();
        }
        self.recorder.discard();

        self.ui = UiState::Idle;
        self.current_word = None;
        self.elapsed_seconds = 0;
        self.notice = None;
        self.request = Some(AppRequest::ReturnToEditor);
        self.pending_redraw = true;
        true
    }
}
