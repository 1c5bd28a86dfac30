use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Pending<V> {
    value: V,
    deadline: Instant,
}

/// Single-slot debouncer driven by caller-supplied instants.
///
/// `value()` is the committed value. Callers feed input through `update` and
/// call `poll` whenever their clock advances; `deadline()` tells them how long
/// they may sleep.
#[derive(Debug, Clone)]
pub struct Debouncer<V> {
    committed: V,
    pending: Option<Pending<V>>,
    delay: Duration,
}

impl<V: PartialEq> Debouncer<V> {
    pub fn new(initial: V, delay: Duration) -> Self {
        Self {
            committed: initial,
            pending: None,
            delay,
        }
    }

    /// The committed value.
    pub fn value(&self) -> &V {
        &self.committed
    }

    /// The most recent input: the pending value if one is armed, else the committed one.
    pub fn latest(&self) -> &V {
        self.pending
            .as_ref()
            .map(|pending| &pending.value)
            .unwrap_or(&self.committed)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Record new input at `now`, replacing any pending value.
    ///
    /// Returns `true` if the committed value changed, which only happens
    /// here when the delay is zero.
    pub fn update(&mut self, value: V, now: Instant) -> bool {
        if self.delay.is_zero() {
            self.pending = None;
            return self.commit(value);
        }
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
        false
    }

    /// Change the delay. A pending value is re-armed with the new delay from `now`.
    ///
    /// Returns `true` if the committed value changed.
    pub fn set_delay(&mut self, delay: Duration, now: Instant) -> bool {
        self.delay = delay;
        match self.pending.take() {
            Some(pending) => self.update(pending.value, now),
            None => false,
        }
    }

    /// Commit the pending value if its deadline has passed.
    ///
    /// Returns `true` if the committed value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(pending) if pending.deadline <= now => self.commit(pending.value),
            still_waiting => {
                self.pending = still_waiting;
                false
            }
        }
    }

    /// Drop the pending value without committing it. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn commit(&mut self, value: V) -> bool {
        if self.committed == value {
            return false;
        }
        self.committed = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(200);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_commits_after_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);

        assert!(!debouncer.update("john".to_string(), t0));
        assert_eq!(debouncer.value(), "");
        assert_eq!(debouncer.latest(), "john");
        assert_eq!(debouncer.deadline(), Some(t0 + DELAY));

        assert!(!debouncer.poll(t0 + ms(199)));
        assert_eq!(debouncer.value(), "");

        assert!(debouncer.poll(t0 + ms(200)));
        assert_eq!(debouncer.value(), "john");
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_rapid_updates_surface_only_last_value_once() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);
        let mut commits = Vec::new();

        for (i, text) in ["j", "jo", "joh", "john"].iter().enumerate() {
            let now = t0 + ms(i as u64 * 50);
            debouncer.update(text.to_string(), now);
            if debouncer.poll(now) {
                commits.push(debouncer.value().clone());
            }
        }

        let last_update = t0 + ms(150);
        for step in 0..=10 {
            if debouncer.poll(last_update + ms(step * 50)) {
                commits.push(debouncer.value().clone());
            }
        }

        assert_eq!(commits, vec!["john".to_string()]);
    }

    #[test]
    fn test_update_rearms_deadline() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(0, DELAY);

        debouncer.update(1, t0);
        debouncer.update(2, t0 + ms(150));

        assert!(!debouncer.poll(t0 + ms(200)));
        assert_eq!(debouncer.deadline(), Some(t0 + ms(350)));
        assert!(debouncer.poll(t0 + ms(350)));
        assert_eq!(*debouncer.value(), 2);
    }

    #[test]
    fn test_zero_delay_commits_immediately() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), Duration::ZERO);

        assert!(debouncer.update("a".to_string(), t0));
        assert_eq!(debouncer.value(), "a");
        assert!(debouncer.deadline().is_none());
    }

    #[test]
    fn test_set_delay_rearms_from_change() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);

        debouncer.update("a".to_string(), t0);
        debouncer.set_delay(ms(500), t0 + ms(100));

        assert_eq!(debouncer.deadline(), Some(t0 + ms(600)));
        assert!(!debouncer.poll(t0 + ms(300)));
        assert!(debouncer.poll(t0 + ms(600)));
    }

    #[test]
    fn test_set_delay_to_zero_flushes_pending() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);

        debouncer.update("a".to_string(), t0);
        assert!(debouncer.set_delay(Duration::ZERO, t0 + ms(10)));
        assert_eq!(debouncer.value(), "a");
    }

    #[test]
    fn test_cancel_never_commits() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);

        debouncer.update("a".to_string(), t0);
        assert!(debouncer.cancel());
        assert!(!debouncer.poll(t0 + ms(1_000)));
        assert_eq!(debouncer.value(), "");
        assert!(!debouncer.cancel());
    }

    #[test]
    fn test_returning_to_committed_value_is_not_a_change() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DELAY);

        debouncer.update("a".to_string(), t0);
        debouncer.update(String::new(), t0 + ms(50));

        assert!(!debouncer.poll(t0 + ms(250)));
        assert!(!debouncer.is_pending());
    }
}
