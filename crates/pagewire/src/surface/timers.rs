//! Timer APIs
//!
//! setInterval against a virtual millisecond clock. The host advances the
//! clock; due ticks fire one at a time in due order so a handler may add or
//! clear timers between firings. Due times saturate at `u64::MAX`.

use std::collections::BTreeMap;

use super::UnitId;

/// Timer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub(crate) u32);

/// Interval entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub owner: UnitId,
    pub delay_ms: u64,
    /// Clock value at which the timer next fires
    pub due_at: u64,
}

/// Timer manager
#[derive(Debug, Default)]
pub struct TimerManager {
    timers: BTreeMap<TimerId, Timer>,
    now_ms: u64,
    next_id: u32,
}

impl TimerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Add an interval
    pub fn set_interval(&mut self, owner: UnitId, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // A zero-delay interval would never let the clock move
        let delay_ms = delay_ms.max(1);
        self.timers.insert(id, Timer {
            id,
            owner,
            delay_ms,
            due_at: self.now_ms.saturating_add(delay_ms),
        });
        id
    }

    /// Clear a timer
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn get(&self, id: TimerId) -> Option<&Timer> {
        self.timers.get(&id)
    }

    /// Fire the earliest interval due at or before `deadline`.
    ///
    /// Moves the clock to the timer's due time and reschedules it. Returns
    /// `None` (clock at `deadline`) once nothing else is due. A timer whose
    /// next due time would pass `u64::MAX` fires once more at `u64::MAX`
    /// and is then dropped.
    pub fn fire_next(&mut self, deadline: u64) -> Option<Timer> {
        let next = self
            .timers
            .values()
            .filter(|t| t.due_at <= deadline)
            .min_by_key(|t| (t.due_at, t.id))
            .copied();

        let Some(timer) = next else {
            self.now_ms = self.now_ms.max(deadline);
            return None;
        };

        self.now_ms = self.now_ms.max(timer.due_at);
        match timer.due_at.checked_add(timer.delay_ms) {
            Some(due_at) => {
                if let Some(t) = self.timers.get_mut(&timer.id) {
                    t.due_at = due_at;
                }
            }
            None => {
                tracing::debug!(timer = ?timer.id, "interval reached the end of the clock");
                self.timers.remove(&timer.id);
            }
        }
        Some(timer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timers: &mut TimerManager, deadline: u64) -> Vec<(TimerId, u64)> {
        let mut fired = Vec::new();
        while let Some(t) = timers.fire_next(deadline) {
            fired.push((t.id, timers.now()));
        }
        fired
    }

    #[test]
    fn test_interval_fires_each_period() {
        let mut timers = TimerManager::new();
        let id = timers.set_interval(UnitId::Carousel, 5000);

        assert!(drain(&mut timers, 4999).is_empty());
        assert_eq!(timers.now(), 4999);
        assert_eq!(drain(&mut timers, 15_000), vec![(id, 5000), (id, 10_000), (id, 15_000)]);
        assert_eq!(timers.get(id).map(|t| t.due_at), Some(20_000));
    }

    #[test]
    fn test_due_order_then_id() {
        let mut timers = TimerManager::new();
        let slow = timers.set_interval(UnitId::Carousel, 30);
        let fast = timers.set_interval(UnitId::Modal, 20);
        let tie = timers.set_interval(UnitId::Tabs, 30);

        let order: Vec<_> = drain(&mut timers, 30).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![fast, slow, tie]);
    }

    #[test]
    fn test_clear() {
        let mut timers = TimerManager::new();
        let id = timers.set_interval(UnitId::Carousel, 5);
        assert!(timers.clear(id));
        assert!(!timers.clear(id));
        assert!(drain(&mut timers, 50).is_empty());
    }

    #[test]
    fn test_zero_interval_clamped() {
        let mut timers = TimerManager::new();
        timers.set_interval(UnitId::Carousel, 0);
        assert_eq!(drain(&mut timers, 3).len(), 3);
    }

    #[test]
    fn test_huge_interval_saturates() {
        let mut timers = TimerManager::new();
        let id = timers.set_interval(UnitId::Carousel, u64::MAX);

        assert_eq!(drain(&mut timers, u64::MAX), vec![(id, u64::MAX)]);
        assert_eq!(timers.now(), u64::MAX);
        assert!(timers.get(id).is_none());
    }

    #[test]
    fn test_interval_near_end_of_clock() {
        let mut timers = TimerManager::new();
        drain(&mut timers, u64::MAX - 10);
        let id = timers.set_interval(UnitId::Carousel, 20);
        assert_eq!(timers.get(id).map(|t| t.due_at), Some(u64::MAX));

        assert_eq!(drain(&mut timers, u64::MAX), vec![(id, u64::MAX)]);
        assert!(timers.get(id).is_none());
    }
}
