//! Cancellable deadline timers driven by the host tick.
//!
//! Timers never fire on their own; [`TimerSet::pop_due`] hands back every
//! timer whose deadline has passed, earliest first. Each timer carries the
//! generation of the transition that scheduled it so stale work can be
//! dropped when a newer transition starts.

use heapless::Vec;

use crate::render::Edge;

pub const MAX_TIMERS: usize = 64;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerKind {
    /// Release the transition lock.
    Settle,
    /// Reveal one entrance element of the active slide.
    Reveal { element: u8 },
    /// End the boundary pulse on a prev/next control.
    BoundaryPulse(Edge),
    /// Clear the live-region announcement.
    AnnouncementExpiry,
}

impl TimerKind {
    /// Timers that belong to one slide transition.
    pub const fn transition_scoped(self) -> bool {
        matches!(self, Self::Settle | Self::Reveal { .. })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timer {
    pub kind: TimerKind,
    pub due_ms: u64,
    pub generation: u32,
}

#[derive(Clone, Debug, Default)]
pub struct TimerSet {
    timers: Vec<Timer, MAX_TIMERS>,
}

impl TimerSet {
    pub const fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Returns `false` when the set is full and the timer was dropped.
    pub fn schedule(&mut self, kind: TimerKind, due_ms: u64, generation: u32) -> bool {
        self.timers
            .push(Timer {
                kind,
                due_ms,
                generation,
            })
            .is_ok()
    }

    /// Remove every timer matching `predicate`; returns how many were removed.
    pub fn cancel_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Timer) -> bool,
    {
        let before = self.timers.len();
        self.timers.retain(|timer| !predicate(timer));
        before - self.timers.len()
    }

    /// Drop transition-scoped timers scheduled by any generation other than `generation`.
    pub fn cancel_stale(&mut self, generation: u32) -> usize {
        self.cancel_where(|timer| timer.kind.transition_scoped() && timer.generation != generation)
    }

    pub fn cancel_kind(&mut self, kind: TimerKind) -> usize {
        self.cancel_where(|timer| timer.kind == kind)
    }

    /// Remove and return the earliest timer due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Timer> {
        let (position, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= now_ms)
            .min_by_key(|(_, timer)| timer.due_ms)?;

        Some(self.timers.swap_remove(position))
    }

    pub fn is_pending<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Timer) -> bool,
    {
        self.timers.iter().any(|timer| predicate(timer))
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.iter().map(|timer| timer.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_due_timers_in_deadline_order() {
        let mut timers = TimerSet::new();
        assert!(timers.schedule(TimerKind::AnnouncementExpiry, 1_000, 1));
        assert!(timers.schedule(TimerKind::Settle, 300, 1));
        assert!(timers.schedule(TimerKind::Reveal { element: 0 }, 50, 1));

        assert_eq!(timers.pop_due(40), None);
        assert_eq!(
            timers.pop_due(400).map(|t| t.kind),
            Some(TimerKind::Reveal { element: 0 })
        );
        assert_eq!(timers.pop_due(400).map(|t| t.kind), Some(TimerKind::Settle));
        assert_eq!(timers.pop_due(400), None);
        assert_eq!(timers.next_due_ms(), Some(1_000));
    }

    #[test]
    fn stale_transition_timers_are_cancelled() {
        let mut timers = TimerSet::new();
        timers.schedule(TimerKind::Reveal { element: 3 }, 350, 1);
        timers.schedule(TimerKind::BoundaryPulse(Edge::End), 200, 1);
        timers.schedule(TimerKind::Reveal { element: 0 }, 450, 2);

        assert_eq!(timers.cancel_stale(2), 1);
        assert_eq!(timers.len(), 2);
        assert!(timers.is_pending(|t| t.kind == TimerKind::BoundaryPulse(Edge::End)));
        assert!(!timers.is_pending(|t| t.generation == 1 && t.kind.transition_scoped()));
    }

    #[test]
    fn full_set_rejects_new_timers() {
        let mut timers = TimerSet::new();
        for i in 0..MAX_TIMERS {
            assert!(timers.schedule(TimerKind::Settle, i as u64, 0));
        }
        assert!(!timers.schedule(TimerKind::Settle, 0, 0));
        assert_eq!(timers.cancel_kind(TimerKind::Settle), MAX_TIMERS);
        assert!(timers.is_empty());
    }
}
