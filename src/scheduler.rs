use std::time::{Duration, Instant};

/// Deadline-based clock driving the simulation at a fixed cadence.
///
/// The clock owns no timer thread; the event loop asks how long it may
/// sleep (`until_due`) and whether a tick is owed (`fire_if_due`). Arming
/// replaces any previous schedule outright, so a shortened interval takes
/// effect immediately instead of after the already-scheduled firing.
/// Every method takes `now` explicitly, which keeps the clock testable
/// without real time passing.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickClock {
    /// Creates a cancelled clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interval: Duration::ZERO,
            deadline: None,
        }
    }

    /// Schedules the next firing `interval` after `now`, replacing any
    /// previous schedule.
    pub fn arm(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.deadline = Some(now + interval);
    }

    /// Stops firing until the next `arm`.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true while a firing is scheduled.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time remaining until the next firing, `Duration::ZERO` when already
    /// due, `None` when cancelled.
    #[must_use]
    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consumes one due firing and schedules the next one `interval` after
    /// `now`. Returns false while cancelled or not yet due.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        self.deadline = Some(now + self.interval);
        true
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickClock;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn a_new_clock_never_fires() {
        let mut clock = TickClock::new();
        let now = Instant::now();

        assert!(!clock.is_armed());
        assert_eq!(clock.until_due(now), None);
        assert!(!clock.fire_if_due(now + Duration::from_secs(60)));
    }

    #[test]
    fn armed_clock_fires_exactly_at_the_deadline() {
        let mut clock = TickClock::new();
        let t0 = Instant::now();
        clock.arm(INTERVAL, t0);

        assert!(!clock.fire_if_due(t0));
        assert!(!clock.fire_if_due(t0 + INTERVAL - Duration::from_millis(1)));
        assert_eq!(
            clock.until_due(t0 + Duration::from_millis(50)),
            Some(Duration::from_millis(150))
        );
        assert!(clock.fire_if_due(t0 + INTERVAL));
    }

    #[test]
    fn firing_schedules_the_next_tick() {
        let mut clock = TickClock::new();
        let t0 = Instant::now();
        clock.arm(INTERVAL, t0);

        assert!(clock.fire_if_due(t0 + INTERVAL));
        // One firing per due period.
        assert!(!clock.fire_if_due(t0 + INTERVAL));
        assert!(clock.fire_if_due(t0 + INTERVAL + INTERVAL));
    }

    #[test]
    fn rearming_replaces_the_schedule() {
        let mut clock = TickClock::new();
        let t0 = Instant::now();
        clock.arm(INTERVAL, t0);

        // Speed-up: a shorter interval re-based at t0 + 100ms.
        let rearm_at = t0 + Duration::from_millis(100);
        clock.arm(Duration::from_millis(60), rearm_at);

        assert!(!clock.fire_if_due(rearm_at + Duration::from_millis(59)));
        assert!(clock.fire_if_due(rearm_at + Duration::from_millis(60)));
    }

    #[test]
    fn cancel_suspends_delivery_until_rearmed() {
        let mut clock = TickClock::new();
        let t0 = Instant::now();
        clock.arm(INTERVAL, t0);

        clock.cancel();
        assert!(!clock.is_armed());
        assert!(!clock.fire_if_due(t0 + Duration::from_secs(60)));

        let resume_at = t0 + Duration::from_secs(120);
        clock.arm(INTERVAL, resume_at);
        assert!(clock.fire_if_due(resume_at + INTERVAL));
    }

    #[test]
    fn until_due_is_zero_once_overdue() {
        let mut clock = TickClock::new();
        let t0 = Instant::now();
        clock.arm(INTERVAL, t0);

        assert_eq!(
            clock.until_due(t0 + INTERVAL + Duration::from_millis(30)),
            Some(Duration::ZERO)
        );
    }
}
