//! Single-handle recurring timer for autoplay.
//!
//! Arming always cancels the previous handle, so a carousel can never have two
//! schedules racing to advance it. Ticks carry the id they were armed with and
//! a tick from a canceled handle is rejected by [`AutoplayTimer::fire`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    id: TimerId,
    interval: u64,
    due_at: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoplayTimer {
    armed: Option<Armed>,
    issued: u64,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any outstanding handle and schedules a fresh one `interval` ms from `now`.
    pub fn arm(&mut self, now: u64, interval: u64) -> TimerId {
        self.cancel();
        self.issued += 1;
        let id = TimerId(self.issued);
        let interval = interval.max(1);
        self.armed = Some(Armed { id, interval, due_at: now.saturating_add(interval) });
        id
    }

    pub fn cancel(&mut self) -> Option<TimerId> {
        self.armed.take().map(|armed| armed.id)
    }

    /// The live handle and its due time, if it is due at `now`.
    pub fn due(&self, now: u64) -> Option<(TimerId, u64)> {
        self.armed
            .filter(|armed| armed.due_at <= now)
            .map(|armed| (armed.id, armed.due_at))
    }

    /// Accepts a tick for `id` and schedules the next one. Stale ids are rejected.
    /// A next tick past the end of the clock disarms the timer.
    pub fn fire(&mut self, id: TimerId) -> bool {
        let Some(armed) = self.armed.as_mut().filter(|armed| armed.id == id) else {
            return false;
        };
        match armed.due_at.checked_add(armed.interval) {
            Some(next) => armed.due_at = next,
            None => self.armed = None,
        }
        true
    }

    pub fn deadline(&self) -> Option<u64> {
        self.armed.map(|armed| armed.due_at)
    }

    pub fn id(&self) -> Option<TimerId> {
        self.armed.map(|armed| armed.id)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn pending(&self) -> usize {
        usize::from(self.armed.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_replaces_previous_handle() {
        let mut timer = AutoplayTimer::new();
        let first = timer.arm(0, 3000);
        let second = timer.arm(100, 3000);

        assert_ne!(first, second);
        assert_eq!(timer.pending(), 1);
        assert_eq!(timer.deadline(), Some(3100));
        assert!(!timer.fire(first));
    }

    #[test]
    fn fire_reschedules_by_one_interval() {
        let mut timer = AutoplayTimer::new();
        let id = timer.arm(0, 3000);

        assert_eq!(timer.due(2999), None);
        assert_eq!(timer.due(3000), Some((id, 3000)));
        assert!(timer.fire(id));
        assert_eq!(timer.deadline(), Some(6000));
    }

    #[test]
    fn cancel_leaves_nothing_pending() {
        let mut timer = AutoplayTimer::new();
        let id = timer.arm(0, 500);

        assert_eq!(timer.cancel(), Some(id));
        assert_eq!(timer.cancel(), None);
        assert_eq!(timer.due(10_000), None);
        assert!(!timer.fire(id));
    }

    #[test]
    fn huge_interval_saturates_instead_of_overflowing() {
        let mut timer = AutoplayTimer::new();
        let id = timer.arm(100, u64::MAX);
        assert_eq!(timer.deadline(), Some(u64::MAX));
        assert_eq!(timer.due(u64::MAX - 1), None);

        assert_eq!(timer.due(u64::MAX), Some((id, u64::MAX)));
        assert!(timer.fire(id));
        assert!(!timer.is_armed());
    }
}
