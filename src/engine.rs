use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    animation::orchestrator::RunAllOrchestrator,
    animation::sequencer::{FlowState, Sequencer},
    animation::timer::{TimerEvent, TimerQueue},
    catalog::model::Catalog,
    foundation::core::{Canvas, Rect, TimeMs},
    geometry::edge::{EdgePath, edge_path},
    layout::planner::plan,
    selection::SelectionSet,
};

/// Comparison engine: selection, per-pattern layout, and animation control.
///
/// One engine instance drives the whole comparison surface. It owns the
/// [`SelectionSet`], one [`Sequencer`] per selected pattern (created lazily
/// on first start), a layout cache refreshed on canvas-size change, and the
/// virtual-time timer queue. The catalog is read-only shared input; the
/// engine never writes to it.
///
/// All scheduled work (node activations, staggered starts, the run-all
/// settle window) fires inside [`FlowEngine::advance_to`]. Nothing else reads
/// a clock, which makes every animation fully reproducible under test.
///
/// Control operations are silent no-ops when their preconditions do not hold
/// (unknown id, empty node list, re-entrant start); inputs come from a
/// trusted static catalog, so there is nothing actionable to report.
pub struct FlowEngine {
    catalog: Arc<Catalog>,
    canvas: Canvas,
    now: TimeMs,
    selection: SelectionSet,
    sequencers: BTreeMap<String, Sequencer>,
    layouts: BTreeMap<String, BTreeMap<String, Rect>>,
    timers: TimerQueue,
    orchestrator: RunAllOrchestrator,
}

impl FlowEngine {
    /// Build an engine over `catalog` with nothing selected.
    pub fn new(catalog: Arc<Catalog>, canvas: Canvas) -> Self {
        Self {
            catalog,
            canvas,
            now: TimeMs(0),
            selection: SelectionSet::default(),
            sequencers: BTreeMap::new(),
            layouts: BTreeMap::new(),
            timers: TimerQueue::default(),
            orchestrator: RunAllOrchestrator::default(),
        }
    }

    /// Build an engine with the first two catalog patterns pre-selected,
    /// matching the default comparison view.
    pub fn with_default_selection(catalog: Arc<Catalog>, canvas: Canvas) -> Self {
        let mut engine = Self::new(catalog.clone(), canvas);
        for pattern in catalog.patterns().iter().take(2) {
            let id = pattern.id.clone();
            engine.select(&id);
        }
        engine
    }

    /// Current virtual-timeline instant.
    pub fn now(&self) -> TimeMs {
        self.now
    }

    /// Add `pattern_id` to the comparison set. Evicts the oldest selection
    /// beyond the cap of three. No-op for unknown or already-selected ids.
    pub fn select(&mut self, pattern_id: &str) {
        let Some(pattern) = self.catalog.get(pattern_id) else {
            tracing::debug!(pattern_id, "select ignored: unknown pattern");
            return;
        };
        let node_ids: Vec<String> = pattern.nodes.iter().map(|n| n.id.clone()).collect();
        if let Some(evicted) = self.selection.select(pattern_id) {
            self.sequencers.remove(&evicted);
            self.layouts.remove(&evicted);
        }
        self.layouts
            .entry(pattern_id.to_string())
            .or_insert_with(|| plan(&node_ids, self.canvas));
    }

    /// Remove `pattern_id` from the comparison set, destroying its flow
    /// state and cached layout. No-op when not selected.
    pub fn deselect(&mut self, pattern_id: &str) {
        if self.selection.deselect(pattern_id) {
            self.sequencers.remove(pattern_id);
            self.layouts.remove(pattern_id);
        }
    }

    /// Selected pattern ids in selection order (oldest first).
    pub fn selected(&self) -> Vec<&str> {
        self.selection.ids().collect()
    }

    /// Replace the canvas and recompute every cached layout.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        for (pattern_id, layout) in &mut self.layouts {
            if let Some(pattern) = self.catalog.get(pattern_id) {
                let node_ids: Vec<String> =
                    pattern.nodes.iter().map(|n| n.id.clone()).collect();
                *layout = plan(&node_ids, canvas);
            }
        }
    }

    /// Cached layout for a selected pattern.
    pub fn layout(&self, pattern_id: &str) -> Option<&BTreeMap<String, Rect>> {
        self.layouts.get(pattern_id)
    }

    /// Routed edge curves for a selected pattern, computed from the cached
    /// layout. Edges whose endpoints are missing or degenerate are skipped.
    pub fn edge_paths(&self, pattern_id: &str) -> Vec<EdgePath> {
        let (Some(pattern), Some(layout)) =
            (self.catalog.get(pattern_id), self.layouts.get(pattern_id))
        else {
            return Vec::new();
        };
        pattern
            .edges
            .iter()
            .filter_map(|edge| {
                let from = layout.get(&edge.from)?;
                let to = layout.get(&edge.to)?;
                edge_path(*from, *to)
            })
            .collect()
    }

    /// Live animation state for a pattern, if it has ever been started.
    pub fn flow_state(&self, pattern_id: &str) -> Option<&FlowState> {
        self.sequencers.get(pattern_id).map(Sequencer::state)
    }

    /// Start the animation for one selected pattern. No-op while running,
    /// when the pattern has no nodes, or when it is not selected.
    pub fn start(&mut self, pattern_id: &str) {
        let now = self.now;
        self.start_at(pattern_id, now);
    }

    /// Reset one pattern's animation to the empty state, cancelling any
    /// pending tick. No-op when the pattern has never been started.
    pub fn reset(&mut self, pattern_id: &str) {
        if let Some(seq) = self.sequencers.get_mut(pattern_id) {
            seq.reset();
        }
    }

    /// Start every selected pattern, staggering starts by a fixed interval
    /// in selection order.
    pub fn run_all(&mut self) {
        let ids: Vec<String> = self.selection.ids().map(str::to_string).collect();
        self.orchestrator.run_all(&ids, self.now, &mut self.timers);
    }

    /// Reset every sequencer and lower the run-all flag immediately.
    pub fn reset_all(&mut self) {
        self.orchestrator.reset_all();
        for seq in self.sequencers.values_mut() {
            seq.reset();
        }
        // Every pending event is now stale; drop them instead of letting the
        // pump discard them one by one.
        self.timers.clear();
    }

    /// Whether any sequencer is mid-run.
    pub fn is_any_running(&self) -> bool {
        self.sequencers.values().any(Sequencer::is_animating)
    }

    /// Aggregate run-all flag, held raised for a settle window past the last
    /// staggered start (UI smoothing; see [`RunAllOrchestrator`]).
    pub fn is_run_all_active(&self) -> bool {
        self.orchestrator.is_settling()
    }

    /// Advance the virtual clock to `now`, firing every scheduled event due
    /// at or before it, in deadline order. Follow-up work is scheduled
    /// relative to each event's own deadline, so a large jump plays the
    /// full cadence in one call. Instants earlier than the current time
    /// pump nothing: the timeline never moves backwards.
    #[tracing::instrument(skip(self))]
    pub fn advance_to(&mut self, now: TimeMs) {
        if now < self.now {
            return;
        }
        while let Some((at, event)) = self.timers.pop_due(now) {
            match event {
                TimerEvent::Tick {
                    pattern_id,
                    generation,
                } => {
                    if let Some(seq) = self.sequencers.get_mut(&pattern_id) {
                        seq.on_tick(generation, at, &mut self.timers);
                    }
                }
                TimerEvent::StartPattern { pattern_id, run } => {
                    if self.orchestrator.accepts(run) {
                        self.start_at(&pattern_id, at);
                    }
                }
                TimerEvent::SettleExpired { run } => {
                    self.orchestrator.on_settle_expired(run);
                }
            }
        }
        self.now = now;
    }

    // Lazily create the pattern's sequencer and start it at `at`. Silent
    // no-op when the pattern is not selected or vanished from the catalog.
    fn start_at(&mut self, pattern_id: &str, at: TimeMs) {
        if !self.selection.contains(pattern_id) {
            tracing::debug!(pattern_id, "start ignored: pattern not selected");
            return;
        }
        if !self.sequencers.contains_key(pattern_id) {
            let Some(pattern) = self.catalog.get(pattern_id) else {
                return;
            };
            let order: Vec<String> = pattern.nodes.iter().map(|n| n.id.clone()).collect();
            self.sequencers
                .insert(pattern_id.to_string(), Sequencer::new(pattern_id, order));
        }
        if let Some(seq) = self.sequencers.get_mut(pattern_id) {
            seq.start(at, &mut self.timers);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
