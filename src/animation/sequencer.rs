use std::collections::{BTreeMap, BTreeSet};

use crate::animation::timer::{TICK_INTERVAL_MS, TimerEvent, TimerQueue};
use crate::foundation::core::TimeMs;

#[derive(Clone, Debug, serde::Serialize)]
/// Live animation state for one displayed pattern.
///
/// Created lazily the first time a pattern is animated, cleared on reset,
/// destroyed when the pattern is deselected.
pub struct FlowState {
    /// Owning pattern id.
    pub pattern_id: String,
    /// Whether a run is in progress.
    pub is_animating: bool,
    /// Count of nodes activated so far in the current run.
    pub current_step: usize,
    /// Nodes activated so far; grows monotonically during a run.
    pub active_nodes: BTreeSet<String>,
    /// 1-based activation order per node; never decreases once set.
    pub node_steps: BTreeMap<String, usize>,
}

impl FlowState {
    fn new(pattern_id: String) -> Self {
        Self {
            pattern_id,
            is_animating: false,
            current_step: 0,
            active_nodes: BTreeSet::new(),
            node_steps: BTreeMap::new(),
        }
    }

    fn clear(&mut self) {
        self.is_animating = false;
        self.current_step = 0;
        self.active_nodes.clear();
        self.node_steps.clear();
    }
}

/// Per-pattern animation driver.
///
/// Plays the pattern's nodes one at a time, in array order, on a fixed
/// cadence of [`TICK_INTERVAL_MS`]. The node order is captured at
/// construction so a catalog change mid-run cannot disturb an active
/// animation. States are `Idle -> Running -> Idle`; completion is simply the
/// transition back to idle, not a distinct state.
///
/// Every scheduled tick carries the generation current at schedule time;
/// [`Sequencer::reset`] bumps the generation, so a tick that fires afterwards
/// is recognized as stale and discarded. Cancellation is a guarantee, not
/// best effort.
#[derive(Debug)]
pub struct Sequencer {
    order: Vec<String>,
    state: FlowState,
    generation: u64,
}

impl Sequencer {
    /// Build an idle sequencer for `pattern_id` animating `order`.
    pub fn new(pattern_id: impl Into<String>, order: Vec<String>) -> Self {
        Self {
            order,
            state: FlowState::new(pattern_id.into()),
            generation: 0,
        }
    }

    /// Live animation state, readable at any time.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Whether a run is in progress.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// Begin a run: clear state and schedule activation of the first node at
    /// `now`. No-op (returns `false`) while already running or when the node
    /// list is empty; the UI is expected to disable the control, but the
    /// sequencer rejects re-entry regardless.
    pub(crate) fn start(&mut self, now: TimeMs, timers: &mut TimerQueue) -> bool {
        if self.state.is_animating {
            tracing::debug!(pattern_id = %self.state.pattern_id, "start ignored: already running");
            return false;
        }
        if self.order.is_empty() {
            tracing::debug!(pattern_id = %self.state.pattern_id, "start ignored: no nodes");
            return false;
        }
        self.generation += 1;
        self.state.clear();
        self.state.is_animating = true;
        timers.schedule(
            now,
            TimerEvent::Tick {
                pattern_id: self.state.pattern_id.clone(),
                generation: self.generation,
            },
        );
        true
    }

    /// Handle one scheduled tick: activate the next node in array order and
    /// schedule the following tick, or return to idle after the last node.
    /// Ticks from a superseded generation are discarded.
    pub(crate) fn on_tick(&mut self, generation: u64, now: TimeMs, timers: &mut TimerQueue) {
        if generation != self.generation || !self.state.is_animating {
            tracing::debug!(pattern_id = %self.state.pattern_id, generation, "stale tick discarded");
            return;
        }
        let Some(node_id) = self.order.get(self.state.current_step) else {
            // Order shrank out from under a run; stop silently.
            self.state.is_animating = false;
            return;
        };
        self.state.current_step += 1;
        self.state
            .node_steps
            .insert(node_id.clone(), self.state.current_step);
        self.state.active_nodes.insert(node_id.clone());

        if self.state.current_step == self.order.len() {
            self.state.is_animating = false;
        } else {
            timers.schedule(
                now.after(TICK_INTERVAL_MS),
                TimerEvent::Tick {
                    pattern_id: self.state.pattern_id.clone(),
                    generation: self.generation,
                },
            );
        }
    }

    /// Cancel any pending tick and clear all state. Valid from any state;
    /// idempotent when already idle.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;
