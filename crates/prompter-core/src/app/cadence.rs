/// Anchored periodic schedule.
///
/// Due times are `anchor + n * span / divisor`, computed from the anchor each
/// time so fractional periods never accumulate drift.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Cadence {
    anchor_ms: u64,
    fired: u64,
    span_ms: u64,
    divisor: u64,
}

impl Cadence {
    const fn every_second(anchor_ms: u64) -> Self {
        Self {
            anchor_ms,
            fired: 0,
            span_ms: SECOND_MS,
            divisor: 1,
        }
    }

    /// One firing per word at `speed`.
    fn per_word(anchor_ms: u64, speed: ScrollSpeed) -> Self {
        Self {
            anchor_ms,
            fired: 0,
            span_ms: TENTHS_PER_WORD_MS,
            divisor: speed.tenths().max(1) as u64,
        }
    }

    fn next_due_ms(&self) -> u64 {
        let offset = self.fired.saturating_add(1).saturating_mul(self.span_ms) / self.divisor;
        self.anchor_ms.saturating_add(offset)
    }

    fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.next_due_ms()
    }

    /// Consumes the pending firing and returns its due time.
    fn fire(&mut self) -> u64 {
        let due_ms = self.next_due_ms();
        self.fired = self.fired.saturating_add(1);
        due_ms
    }
}
