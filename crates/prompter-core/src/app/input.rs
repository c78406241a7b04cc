impl<'a, RS, IN, OB> PlaybackController<'a, RS, IN, OB>
where
    RS: RecordingSession,
    IN: CommandProvider,
    OB: StateObserver,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_command() {
                Ok(Some(command)) => self.apply_command(command, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: command provider failed; dropping pending input");
                    self.notice = Some(Notice::InputUnavailable);
                    self.pending_redraw = true;
                    break;
                }
            }
        }
    }

    fn apply_command(&mut self, command: Command, now_ms: u64) {
        debug!("input: {:?} in phase {:?}", command, self.phase());

        match command {
            Command::BeginTake => {
                let _ = self.enter_countdown(now_ms);
            }
            Command::Stop => {
                let _ = self.stop_take();
            }
            Command::Cancel => {
                let _ = self.cancel_countdown();
            }
            Command::Faster => {
                let _ = self.step_speed(true);
            }
            Command::Slower => {
                let _ = self.step_speed(false);
            }
            Command::SetSpeed(speed) => {
                let _ = self.update_speed(speed);
            }
            Command::Back => {
                let _ = self.return_to_editor();
            }
            Command::Download => self.request_download(),
        }
    }

    fn speed_locked(&self) -> bool {
        matches!(
            self.ui,
            UiState::CountingDown { .. } | UiState::Scrolling { .. }
        )
    }

    fn update_speed(&mut self, requested: ScrollSpeed) -> SpeedUpdate {
        if self.speed_locked() {
            debug!("speed: change to {} locked during {:?}", requested, self.phase());
            return SpeedUpdate::Locked;
        }

        let applied = self.config.clamp_speed(requested);
        let changed = applied != self.speed;
        if changed {
            self.speed = applied;
            self.pending_redraw = true;
            debug!("speed: set to {}", applied);
        }

        if applied != requested {
            SpeedUpdate::Clamped(applied)
        } else if changed {
            SpeedUpdate::Applied(applied)
        } else {
            SpeedUpdate::Unchanged
        }
    }

    fn step_speed(&mut self, faster: bool) -> SpeedUpdate {
        if self.speed_locked() {
            return SpeedUpdate::Locked;
        }
        let next = self.config.step_speed(self.speed, faster);
        self.update_speed(next)
    }

    fn request_download(&mut self) {
        if !self.controls().download {
            debug!("download: no artifact in phase {:?}", self.phase());
            return;
        }
        self.request = Some(AppRequest::SaveArtifact);
    }
}
