//! Single-shot deadline timers owned one-per-controller.

/// A single pending deadline evaluated by `tick(now_ms)` calls.
///
/// Arming replaces any previous schedule and cancelling clears it, so a
/// controller owning one of these cannot accumulate stale timers: there
/// is at most one pending fire at any time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SingleShot {
    fire_at_ms: Option<u64>,
}

impl SingleShot {
    pub const fn idle() -> Self {
        Self { fire_at_ms: None }
    }

    /// Schedule (or reschedule) the deadline at `now_ms + delay_ms`.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.fire_at_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.fire_at_ms = None;
    }

    pub const fn is_armed(&self) -> bool {
        self.fire_at_ms.is_some()
    }

    /// Consume the deadline if it has elapsed. Returns `true` at most
    /// once per `arm`.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.fire_at_ms {
            Some(at) if now_ms >= at => {
                self.fire_at_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_arm() {
        let mut timer = SingleShot::idle();
        timer.arm(0, 500);

        assert!(!timer.fire(499));
        assert!(timer.fire(500));
        assert!(!timer.fire(501));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearm_replaces_pending_deadline() {
        let mut timer = SingleShot::idle();
        timer.arm(0, 500);
        timer.arm(100, 500);

        assert!(!timer.fire(500));
        assert!(timer.fire(600));
    }

    #[test]
    fn cancel_clears_schedule() {
        let mut timer = SingleShot::idle();
        timer.arm(0, 10);
        timer.cancel();

        assert!(!timer.fire(u64::MAX));
    }
}
