// crates/citygrid-core/src/debounce.rs

/// Timer-based coalescing of search input.
///
/// Time is supplied by the caller in milliseconds, so the same logic runs
/// under a browser clock, a terminal loop or a test. Every [`input`] restarts
/// the timer; [`poll`] hands out the latest term once the timer has run for
/// `delay_ms` without another input.
///
/// [`input`]: Debouncer::input
/// [`poll`]: Debouncer::poll
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    pending: Option<Pending>,
    cancelled: bool,
}

#[derive(Debug, Clone)]
struct Pending {
    term: String,
    fires_at: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Debouncer {
            delay_ms,
            pending: None,
            cancelled: false,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a new input value and restarts the timer.
    ///
    /// Ignored after [`Debouncer::cancel`].
    pub fn input(&mut self, term: impl Into<String>, now_ms: u64) {
        if self.cancelled {
            return;
        }
        self.pending = Some(Pending {
            term: term.into(),
            fires_at: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// Returns the pending term if its timer has elapsed, consuming it.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        match &self.pending {
            Some(p) if now_ms >= p.fires_at => self.pending.take().map(|p| p.term),
            _ => None,
        }
    }

    /// When the pending timer fires, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.fires_at)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending timer for good (teardown).
    pub fn cancel(&mut self) {
        self.pending = None;
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_quiet_period() {
        let mut d = Debouncer::new(300);
        d.input("ber", 0);
        assert_eq!(d.poll(299), None);
        assert_eq!(d.poll(300).as_deref(), Some("ber"));
        assert_eq!(d.poll(1_000), None);
    }

    #[test]
    fn rapid_inputs_coalesce() {
        let mut d = Debouncer::new(300);
        d.input("b", 0);
        d.input("be", 100);
        d.input("ber", 250);
        assert_eq!(d.poll(400), None);
        assert_eq!(d.deadline(), Some(550));
        assert_eq!(d.poll(550).as_deref(), Some("ber"));
    }

    #[test]
    fn cancel_stops_everything() {
        let mut d = Debouncer::new(300);
        d.input("ber", 0);
        d.cancel();
        assert_eq!(d.poll(10_000), None);
        d.input("lin", 10_000);
        assert!(!d.is_pending());
        assert!(d.is_cancelled());
    }
}
