impl<'a, RS, IN, OB> PlaybackController<'a, RS, IN, OB>
where
    RS: RecordingSession,
    IN: CommandProvider,
    OB: StateObserver,
{
    pub fn new(script: Script<'a>, recorder: RS, input: IN, config: PrompterConfig) -> Self {
        let config = config.normalized();

        Self {
            script,
            recorder,
            input,
            speed: config.speed,
            config,
            ui: UiState::Idle,
            current_word: None,
            elapsed_seconds: 0,
            notice: None,
            request: None,
            observers: Observers::new(),
            pending_redraw: true,
            published_in_tick: false,
            words_since_drain: 0,
        }
    }

    /// Applies queued commands and every schedule firing due by `now_ms`.
    ///
    /// Observers see each intermediate state, including the ones replayed
    /// when a late tick catches up on several firings.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.published_in_tick = false;
        self.process_inputs(now_ms);
        self.publish_step();

        match self.ui {
            UiState::CountingDown { .. } => self.tick_countdown(now_ms),
            UiState::Scrolling { .. } => self.tick_scrolling(now_ms),
            UiState::Idle | UiState::Stopped => {}
        }

        self.publish_step();
        if core::mem::take(&mut self.published_in_tick) {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Applies one command immediately, outside the polled input path.
    pub fn command(&mut self, command: Command, now_ms: u64) -> TickResult {
        self.apply_command(command, now_ms);
        self.publish()
    }

    /// Starts the countdown for a new take. Ignored while a take is running.
    pub fn begin_take(&mut self, now_ms: u64) -> bool {
        let started = self.enter_countdown(now_ms);
        self.publish();
        started
    }

    pub fn stop(&mut self) -> bool {
        let stopped = self.stop_take();
        self.publish();
        stopped
    }

    pub fn cancel(&mut self) -> bool {
        let cancelled = self.cancel_countdown();
        self.publish();
        cancelled
    }

    pub fn back(&mut self) -> bool {
        let left = self.return_to_editor();
        self.publish();
        left
    }

    pub fn set_speed(&mut self, speed: ScrollSpeed) -> SpeedUpdate {
        let update = self.update_speed(speed);
        self.publish();
        update
    }

    pub fn set_words_per_second(&mut self, words_per_second: f32) -> SpeedUpdate {
        if self.speed_locked() {
            return SpeedUpdate::Locked;
        }
        match ScrollSpeed::from_words_per_second(words_per_second) {
            Some(speed) => self.set_speed(speed),
            None => SpeedUpdate::Rejected,
        }
    }

    pub fn adjust_speed(&mut self, faster: bool) -> SpeedUpdate {
        let update = self.step_speed(faster);
        self.publish();
        update
    }

    /// Registers an observer. Returns it back when the registry is full.
    pub fn subscribe(&mut self, observer: OB) -> Result<(), OB> {
        self.observers.subscribe(observer)
    }

    pub fn take_request(&mut self) -> Option<AppRequest> {
        self.request.take()
    }

    pub fn drain_word_updates(&mut self) -> u32 {
        let count = self.words_since_drain;
        self.words_since_drain = 0;
        count
    }

    pub fn phase(&self) -> Phase {
        match self.ui {
            UiState::Idle => Phase::Idle,
            UiState::CountingDown { .. } => Phase::CountingDown,
            UiState::Scrolling { .. } => Phase::Scrolling,
            UiState::Stopped => Phase::Stopped,
        }
    }

    pub fn countdown_remaining(&self) -> Option<u8> {
        match self.ui {
            UiState::CountingDown { remaining, .. } => Some(remaining),
            _ => None,
        }
    }

    pub const fn current_word(&self) -> Option<usize> {
        self.current_word
    }

    pub const fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub const fn speed(&self) -> ScrollSpeed {
        self.speed
    }

    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub const fn script(&self) -> Script<'a> {
        self.script
    }

    pub const fn config(&self) -> &PrompterConfig {
        &self.config
    }

    pub fn recording_status(&self) -> RecordingStatus {
        self.recorder.status()
    }

    pub fn artifact(&self) -> Option<Artifact<'_>> {
        self.recorder.artifact()
    }

    pub const fn recorder(&self) -> &RS {
        &self.recorder
    }

    pub fn controls(&self) -> Controls {
        compose(
            self.phase(),
            self.recorder.status(),
            self.recorder.artifact().is_some(),
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            countdown_remaining: self.countdown_remaining(),
            current_word: self.current_word,
            word_count: self.script.word_count(),
            elapsed_seconds: self.elapsed_seconds,
            speed: self.speed,
            recording: self.recorder.status(),
            has_artifact: self.recorder.artifact().is_some(),
            notice: self.notice,
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let controls = self.controls();
        let speed = self.speed;

        match self.ui {
            UiState::Idle => f(Screen::Ready {
                placeholder: READY_PLACEHOLDER,
                word_count: self.script.word_count(),
                speed,
                notice: self.notice,
                controls,
            }),
            UiState::CountingDown { remaining, .. } => f(Screen::Countdown {
                remaining,
                speed,
                controls,
            }),
            UiState::Scrolling { .. } => f(Screen::Prompter {
                projection: Projection::new(self.script, self.current_word),
                elapsed: ElapsedClock::from_seconds(self.elapsed_seconds),
                speed,
                controls,
            }),
            UiState::Stopped => f(Screen::Finished {
                projection: Projection::new(self.script, self.current_word),
                elapsed: ElapsedClock::from_seconds(self.elapsed_seconds),
                speed,
                artifact: self.recorder.artifact(),
                notice: self.notice,
                controls,
            }),
        }
    }

    fn publish_step(&mut self) {
        if self.publish() == TickResult::RenderRequested {
            self.published_in_tick = true;
        }
    }

    fn publish(&mut self) -> TickResult {
        if !self.pending_redraw {
            return TickResult::NoRender;
        }

        self.pending_redraw = false;
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
        TickResult::RenderRequested
    }
}
