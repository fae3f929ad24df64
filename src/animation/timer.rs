use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::foundation::core::TimeMs;

/// Interval between successive node activations within one sequencer.
pub const TICK_INTERVAL_MS: u64 = 1000;
/// Start-delay step between successive sequencers in a run-all orchestration.
pub const STAGGER_INTERVAL_MS: u64 = 500;
/// How long the aggregate run-all flag stays raised after the last sequencer
/// is scheduled to start.
pub const SETTLE_MS: u64 = 3000;

/// Deferred work item fired by the engine's timer pump.
///
/// Events carry generation/run tokens so work scheduled before a reset is
/// discarded on arrival rather than resurrecting cleared state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TimerEvent {
    /// Activate the next node of one pattern's sequencer.
    Tick { pattern_id: String, generation: u64 },
    /// Staggered start of one pattern during a run-all orchestration.
    StartPattern { pattern_id: String, run: u64 },
    /// The run-all settle window elapsed.
    SettleExpired { run: u64 },
}

#[derive(Debug, PartialEq, Eq)]
struct PendingTimer {
    deadline: TimeMs,
    seq: u64, // schedule order; ties on deadline fire FIFO
    event: TimerEvent,
}

impl Ord for PendingTimer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.deadline, self.seq).cmp(&(other.deadline, other.seq))
    }
}

impl PartialOrd for PendingTimer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Deterministic virtual-time timer queue.
///
/// Single-threaded and cooperative: nothing fires between pumps, and events
/// with equal deadlines fire in the order they were scheduled.
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    next_seq: u64,
    pending: BinaryHeap<Reverse<PendingTimer>>,
}

impl TimerQueue {
    /// Schedule `event` to fire once `now >= deadline`.
    pub(crate) fn schedule(&mut self, deadline: TimeMs, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(PendingTimer {
            deadline,
            seq,
            event,
        }));
    }

    /// Pop the next event due at or before `now`, together with its original
    /// deadline so follow-up work can be scheduled relative to it.
    pub(crate) fn pop_due(&mut self, now: TimeMs) -> Option<(TimeMs, TimerEvent)> {
        if self.pending.peek().is_some_and(|t| t.0.deadline <= now) {
            self.pending.pop().map(|t| (t.0.deadline, t.0.event))
        } else {
            None
        }
    }

    /// Drop every pending event.
    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }
}
