// ABOUTME: Cancellable scheduled tasks driving the mock async behaviour (coach replies, form checks)

use crate::app::state::Route;
use std::time::{Duration, Instant};

/// Opaque handle returned by `schedule`, used to cancel a pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// Deferred effect applied when a timer elapses. Actions carry enough context
/// for the receiver to re-validate that the originating state is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Append the canned coach reply to the transcript.
    CoachReply,
    /// Move the form checker to Complete, but only if `generation` still
    /// matches the current run (a stop/restart invalidates older runs).
    FormCheckComplete { generation: u64 },
}

#[derive(Debug)]
struct TimerEntry {
    id: u64,
    scope: Route,
    fire_at: Instant,
    action: TimerAction,
}

/// Single-owner timer queue polled from the event loop. Every pending task is
/// scoped to the route that registered it, so page teardown can cancel its
/// timers without knowing what they were for.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        scope: Route,
        delay: Duration,
        action: TimerAction,
        now: Instant,
    ) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            scope,
            fire_at: now + delay,
            action,
        });
        TimerHandle(id)
    }

    /// Cancel a single pending task. Cancelling an already-fired or unknown
    /// handle is a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|entry| entry.id != handle.0);
    }

    /// Cancel every pending task registered by `scope`. Called on navigation
    /// away so a dead page can never receive a late callback.
    pub fn cancel_scope(&mut self, scope: Route) {
        self.entries.retain(|entry| entry.scope != scope);
    }

    /// Remove and return every action whose deadline has passed, ordered by
    /// deadline then by scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let mut due: Vec<TimerEntry> = Vec::new();
        let mut remaining: Vec<TimerEntry> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.fire_at <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by(|a, b| a.fire_at.cmp(&b.fire_at).then(a.id.cmp(&b.id)));
        due.into_iter().map(|entry| entry.action).collect()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn test_drain_due_returns_nothing_before_deadline() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        queue.schedule(Route::Coach, DELAY, TimerAction::CoachReply, now);

        assert!(queue.drain_due(now).is_empty());
        assert!(queue.drain_due(now + Duration::from_millis(999)).is_empty());
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_drain_due_fires_in_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        queue.schedule(
            Route::FormChecker,
            Duration::from_millis(3000),
            TimerAction::FormCheckComplete { generation: 1 },
            now,
        );
        queue.schedule(Route::Coach, DELAY, TimerAction::CoachReply, now);
        queue.schedule(
            Route::Coach,
            DELAY,
            TimerAction::CoachReply,
            now + Duration::from_millis(200),
        );

        let actions = queue.drain_due(now + Duration::from_millis(3000));
        assert_eq!(
            actions,
            vec![
                TimerAction::CoachReply,
                TimerAction::CoachReply,
                TimerAction::FormCheckComplete { generation: 1 },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_removes_pending_task() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        let handle = queue.schedule(Route::Coach, DELAY, TimerAction::CoachReply, now);

        queue.cancel(handle);
        assert!(queue.drain_due(now + DELAY).is_empty());

        // Cancelling again is a no-op.
        queue.cancel(handle);
    }

    #[test]
    fn test_cancel_scope_only_touches_that_route() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        queue.schedule(Route::Coach, DELAY, TimerAction::CoachReply, now);
        queue.schedule(
            Route::FormChecker,
            DELAY,
            TimerAction::FormCheckComplete { generation: 1 },
            now,
        );

        queue.cancel_scope(Route::Coach);

        let actions = queue.drain_due(now + DELAY);
        assert_eq!(actions, vec![TimerAction::FormCheckComplete { generation: 1 }]);
    }
}
