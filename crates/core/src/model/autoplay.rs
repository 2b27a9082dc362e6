/// Overdue fires replayed by a single catch-up before older ones are skipped.
pub const MAX_CATCH_UP_FIRES: u64 = 256;

/// Repeating autoplay timer expressed as a deadline on the caller's clock.
///
/// Mirrors an interval timer: `start` arms it one full interval from now,
/// each fire re-arms it one interval after the fire time, and `stop`
/// disarms it. Time spent stopped never counts toward the next fire.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval_ms: u64,
    next_fire_ms: Option<u64>,
}

impl Autoplay {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_fire_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.next_fire_ms.is_some()
    }

    /// Deadline of the next fire, if armed.
    pub fn next_fire(&self) -> Option<u64> {
        self.next_fire_ms
    }

    /// Arm the timer. No-op when already running.
    pub fn start(&mut self, now_ms: u64) {
        if self.next_fire_ms.is_none() {
            self.next_fire_ms = Some(now_ms.saturating_add(self.interval_ms));
        }
    }

    pub fn stop(&mut self) {
        self.next_fire_ms = None;
    }

    /// Consume the pending fire if it is due at or before `now_ms` and
    /// re-arm. Returns the instant the fire was scheduled for.
    ///
    /// A fire whose successor would fall past the end of the clock disarms
    /// the timer.
    pub fn fire_if_due(&mut self, now_ms: u64) -> Option<u64> {
        let due = self.next_fire_ms.filter(|&at| at <= now_ms)?;
        self.next_fire_ms = due.checked_add(self.interval_ms);
        Some(due)
    }

    /// Drop overdue fires so that at most `keep` remain due at `now_ms`.
    /// The schedule keeps its phase. Returns how many fires were skipped.
    pub fn skip_missed(&mut self, now_ms: u64, keep: u64) -> u64 {
        let Some(next) = self.next_fire_ms.filter(|&at| at <= now_ms) else {
            return 0;
        };
        let overdue = (now_ms - next) / self.interval_ms + 1;
        let skipped = overdue.saturating_sub(keep.max(1));
        // skipped * interval never exceeds now_ms - next.
        self.next_fire_ms = Some(next + skipped * self.interval_ms);
        skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut timer = Autoplay::new(4000);
        timer.start(0);
        assert_eq!(timer.fire_if_due(3999), None);
        assert_eq!(timer.fire_if_due(4000), Some(4000));
        assert_eq!(timer.fire_if_due(4000), None);
        assert_eq!(timer.next_fire(), Some(8000));
    }

    #[test]
    fn catches_up_one_fire_at_a_time() {
        let mut timer = Autoplay::new(1000);
        timer.start(0);
        let mut fires = Vec::new();
        while let Some(at) = timer.fire_if_due(3500) {
            fires.push(at);
        }
        assert_eq!(fires, vec![1000, 2000, 3000]);
    }

    #[test]
    fn fire_at_end_of_clock_disarms() {
        let mut timer = Autoplay::new(1000);
        timer.start(u64::MAX - 10);
        assert_eq!(timer.next_fire(), Some(u64::MAX));
        assert_eq!(timer.fire_if_due(u64::MAX), Some(u64::MAX));
        assert!(!timer.is_running());
        assert_eq!(timer.fire_if_due(u64::MAX), None);
    }

    #[test]
    fn skip_missed_keeps_the_latest_fires() {
        let mut timer = Autoplay::new(1000);
        timer.start(0);
        assert_eq!(timer.skip_missed(10_500, 3), 7);
        let mut fires = Vec::new();
        while let Some(at) = timer.fire_if_due(10_500) {
            fires.push(at);
        }
        assert_eq!(fires, vec![8000, 9000, 10_000]);
        assert_eq!(timer.next_fire(), Some(11_000));
    }

    #[test]
    fn skip_missed_leaves_a_short_backlog_alone() {
        let mut timer = Autoplay::new(1000);
        timer.start(0);
        assert_eq!(timer.skip_missed(999, 3), 0);
        assert_eq!(timer.skip_missed(2500, 3), 0);
        assert_eq!(timer.next_fire(), Some(1000));
    }

    #[test]
    fn restart_begins_a_full_interval() {
        let mut timer = Autoplay::new(1000);
        timer.start(0);
        timer.stop();
        assert!(!timer.is_running());
        timer.start(5300);
        assert_eq!(timer.next_fire(), Some(6300));
    }

    #[test]
    fn start_is_idempotent() {
        let mut timer = Autoplay::new(1000);
        timer.start(0);
        timer.start(700);
        assert_eq!(timer.next_fire(), Some(1000));
    }
}
