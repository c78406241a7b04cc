impl<'a, RS, IN, OB> PlaybackController<'a, RS, IN, OB>
where
    RS: RecordingSession,
    IN: CommandProvider,
    OB: StateObserver,
{
    fn tick_countdown(&mut self, now_ms: u64) {
        loop {
            let UiState::CountingDown {
                remaining,
                mut step,
            } = self.ui
            else {
                return;
            };

            if !step.is_due(now_ms) {
                return;
            }
            let due_ms = step.fire();

            if remaining > 1 {
                self.ui = UiState::CountingDown {
                    remaining: remaining - 1,
                    step,
                };
                debug!("take: countdown remaining={}", remaining - 1);
                self.pending_redraw = true;
                self.publish_step();
                continue;
            }

            // Anchor scrolling to the countdown deadline, not to a late tick.
            self.enter_scrolling(due_ms);
            self.tick_scrolling(now_ms);
            return;
        }
    }

    fn tick_scrolling(&mut self, now_ms: u64) {
        loop {
            let UiState::Scrolling {
                mut word_advance,
                mut elapsed,
            } = self.ui
            else {
                return;
            };

            let elapsed_due_ms = elapsed.next_due_ms();
            let word_due_ms = word_advance.next_due_ms();

            // Overdue firings replay in time order; on a tie the clock goes first.
            if elapsed_due_ms <= now_ms && elapsed_due_ms <= word_due_ms {
                elapsed.fire();
                self.ui = UiState::Scrolling {
                    word_advance,
                    elapsed,
                };
                self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
                self.pending_redraw = true;
                self.publish_step();
            } else if word_due_ms <= now_ms {
                word_advance.fire();
                self.ui = UiState::Scrolling {
                    word_advance,
                    elapsed,
                };
                self.advance_word();
            } else {
                return;
            }
        }
    }

    fn advance_word(&mut self) {
        let Some(last_index) = self.script.last_index() else {
            self.finish_take(StopReason::EmptyScript);
            return;
        };

        let next = self
            .current_word
            .map_or(0, |index| index.saturating_add(1))
            .min(last_index);

        if self.current_word != Some(next) {
            self.current_word = Some(next);
            self.words_since_drain = self.words_since_drain.saturating_add(1);
            self.pending_redraw = true;
        }

        if next == last_index {
            self.finish_take(StopReason::EndOfScript);
        } else {
            self.publish_step();
        }
    }
}
