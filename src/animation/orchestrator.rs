use crate::animation::timer::{
    SETTLE_MS, STAGGER_INTERVAL_MS, TICK_INTERVAL_MS, TimerEvent, TimerQueue,
};
use crate::foundation::core::TimeMs;

/// Coordinates a staggered "run all" across several sequencers.
///
/// The orchestrator only schedules starts; it never mutates sequencer state
/// directly. Sequencer `i` starts `i * STAGGER_INTERVAL_MS` after `run_all`.
/// A single aggregate flag is held raised for a settle window past the last
/// scheduled start so UI controls do not flicker as sequencers finish at
/// staggered times; the flag is a smoothing convenience, not a correctness
/// signal. Events from a superseded run token are discarded.
#[derive(Debug, Default)]
pub struct RunAllOrchestrator {
    run: u64,
    settling: bool,
}

impl RunAllOrchestrator {
    /// Schedule staggered starts for `pattern_ids` and raise the aggregate
    /// flag until the settle window elapses.
    pub(crate) fn run_all(&mut self, pattern_ids: &[String], now: TimeMs, timers: &mut TimerQueue) {
        self.run += 1;
        if pattern_ids.is_empty() {
            self.settling = false;
            return;
        }
        for (i, pattern_id) in pattern_ids.iter().enumerate() {
            timers.schedule(
                now.after(i as u64 * STAGGER_INTERVAL_MS),
                TimerEvent::StartPattern {
                    pattern_id: pattern_id.clone(),
                    run: self.run,
                },
            );
        }
        timers.schedule(
            now.after(pattern_ids.len() as u64 * TICK_INTERVAL_MS + SETTLE_MS),
            TimerEvent::SettleExpired { run: self.run },
        );
        self.settling = true;
    }

    /// Whether a staggered start belongs to the current run.
    pub(crate) fn accepts(&self, run: u64) -> bool {
        run == self.run
    }

    /// Lower the aggregate flag once the current run's settle window elapses.
    pub(crate) fn on_settle_expired(&mut self, run: u64) {
        if run == self.run {
            self.settling = false;
        }
    }

    /// Invalidate pending starts and lower the aggregate flag immediately.
    pub(crate) fn reset_all(&mut self) {
        self.run += 1;
        self.settling = false;
    }

    /// Aggregate run-all flag (see type docs).
    pub fn is_settling(&self) -> bool {
        self.settling
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/orchestrator.rs"]
mod tests;
