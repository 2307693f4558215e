use web_time::Instant;

/// Seconds counter for the running game, advanced by the host's one second tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GameTimer {
    started_at: Option<Instant>,
    base_secs: u64,
    elapsed_secs: u64,
}

impl GameTimer {
    pub fn start(&mut self, now: Instant) {
        self.resume(now, 0);
    }

    /// Keeps counting from a previously saved value.
    pub fn resume(&mut self, now: Instant, elapsed_secs: u64) {
        self.started_at = Some(now);
        self.base_secs = elapsed_secs;
        self.elapsed_secs = elapsed_secs;
    }

    /// Freezes the counter, returning the final value.
    pub fn stop(&mut self, now: Instant) -> u64 {
        self.tick(now);
        self.started_at = None;
        self.elapsed_secs
    }

    /// Refreshes the counter, `None` once stopped.
    pub fn tick(&mut self, now: Instant) -> Option<u64> {
        let started_at = self.started_at?;
        self.elapsed_secs = self.base_secs + now.saturating_duration_since(started_at).as_secs();
        Some(self.elapsed_secs)
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn counts_whole_seconds_until_stopped() {
        let start = Instant::now();
        let mut timer = GameTimer::default();

        timer.start(start);
        assert_eq!(timer.tick(start + Duration::from_millis(2500)), Some(2));
        assert_eq!(timer.stop(start + Duration::from_secs(7)), 7);

        assert!(!timer.is_running());
        assert_eq!(timer.tick(start + Duration::from_secs(60)), None);
        assert_eq!(timer.elapsed_secs(), 7);
    }

    #[test]
    fn resume_continues_from_saved_value() {
        let start = Instant::now();
        let mut timer = GameTimer::default();

        timer.resume(start, 40);

        assert_eq!(timer.elapsed_secs(), 40);
        assert_eq!(timer.tick(start + Duration::from_secs(3)), Some(43));
    }
}
