use super::*;
use crate::animation::timer::{SETTLE_MS, STAGGER_INTERVAL_MS, TICK_INTERVAL_MS};
use crate::catalog::model::{Edge, Node, Pattern};
use crate::foundation::core::Point;

fn pattern(id: &str, nodes: &[&str]) -> Pattern {
    Pattern {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        nodes: nodes
            .iter()
            .map(|n| Node {
                id: n.to_string(),
                label: n.to_string(),
                kind: Default::default(),
            })
            .collect(),
        edges: nodes
            .windows(2)
            .map(|w| Edge {
                from: w[0].to_string(),
                to: w[1].to_string(),
            })
            .collect(),
    }
}

fn catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::from_patterns(vec![
            pattern("alpha", &["a1", "a2", "a3"]),
            pattern("beta", &["b1", "b2"]),
            pattern("gamma", &["g1"]),
            pattern("delta", &["d1", "d2"]),
            pattern("hollow", &[]),
        ])
        .unwrap(),
    )
}

fn engine() -> FlowEngine {
    FlowEngine::new(
        catalog(),
        Canvas {
            width: 600,
            height: 200,
        },
    )
}

#[test]
fn default_selection_takes_the_first_two_patterns() {
    let engine = FlowEngine::with_default_selection(
        catalog(),
        Canvas {
            width: 600,
            height: 200,
        },
    );
    assert_eq!(engine.selected(), ["alpha", "beta"]);
    assert!(engine.layout("alpha").is_some());
    assert!(engine.layout("beta").is_some());
}

#[test]
fn selection_caps_at_three_and_evicts_oldest_state() {
    let mut engine = engine();
    engine.select("alpha");
    engine.start("alpha");
    engine.select("beta");
    engine.select("gamma");
    engine.select("delta");
    assert_eq!(engine.selected(), ["beta", "gamma", "delta"]);
    assert!(engine.flow_state("alpha").is_none(), "evicted state destroyed");
    assert!(engine.layout("alpha").is_none());
}

#[test]
fn select_unknown_pattern_is_a_noop() {
    let mut engine = engine();
    engine.select("nope");
    assert!(engine.selected().is_empty());
}

#[test]
fn deselect_destroys_flow_state_and_layout() {
    let mut engine = engine();
    engine.select("alpha");
    engine.start("alpha");
    engine.advance_to(TimeMs(0));
    assert!(engine.flow_state("alpha").is_some());

    engine.deselect("alpha");
    assert!(engine.flow_state("alpha").is_none());
    assert!(engine.layout("alpha").is_none());
    assert!(engine.selected().is_empty());
}

#[test]
fn set_canvas_refreshes_cached_layouts() {
    let mut engine = engine();
    engine.select("gamma");
    let before = engine.layout("gamma").unwrap()["g1"];
    engine.set_canvas(Canvas {
        width: 1200,
        height: 400,
    });
    let after = engine.layout("gamma").unwrap()["g1"];
    assert_ne!(before.origin(), after.origin());
    assert_eq!(after.origin(), Point::new(550.0, 170.0));
}

#[test]
fn start_animates_to_completion_on_the_virtual_clock() {
    let mut engine = engine();
    engine.select("alpha");
    engine.start("alpha");
    assert!(engine.is_any_running());

    engine.advance_to(TimeMs(0));
    let state = engine.flow_state("alpha").unwrap();
    assert_eq!(state.current_step, 1);
    assert!(state.active_nodes.contains("a1"));

    engine.advance_to(TimeMs(2 * TICK_INTERVAL_MS));
    let state = engine.flow_state("alpha").unwrap();
    assert_eq!(state.current_step, 3);
    assert!(!state.is_animating);
    assert!(!engine.is_any_running());
    assert_eq!(state.node_steps["a1"], 1);
    assert_eq!(state.node_steps["a2"], 2);
    assert_eq!(state.node_steps["a3"], 3);
}

#[test]
fn start_is_a_noop_for_unselected_or_empty_patterns() {
    let mut engine = engine();
    engine.start("alpha"); // not selected
    assert!(engine.flow_state("alpha").is_none());

    engine.select("hollow"); // zero nodes
    engine.start("hollow");
    engine.advance_to(TimeMs(10 * TICK_INTERVAL_MS));
    assert!(!engine.is_any_running());
    assert!(engine.flow_state("hollow").is_none_or(|s| !s.is_animating));
}

#[test]
fn run_all_staggers_starts_in_selection_order() {
    let mut engine = engine();
    engine.select("alpha");
    engine.select("beta");
    engine.select("delta");
    engine.run_all();
    assert!(engine.is_run_all_active());

    // Sequencer i starts no earlier than i * STAGGER_INTERVAL_MS.
    engine.advance_to(TimeMs(0));
    assert!(engine.flow_state("alpha").unwrap().is_animating);
    assert!(engine.flow_state("beta").is_none());

    engine.advance_to(TimeMs(STAGGER_INTERVAL_MS));
    assert!(engine.flow_state("beta").unwrap().is_animating);
    assert!(engine.flow_state("delta").is_none());

    engine.advance_to(TimeMs(2 * STAGGER_INTERVAL_MS));
    assert!(engine.flow_state("delta").unwrap().is_animating);
}

#[test]
fn run_all_settle_flag_outlives_the_animations() {
    let mut engine = engine();
    engine.select("gamma"); // one node: finishes on its first tick
    engine.run_all();
    engine.advance_to(TimeMs(TICK_INTERVAL_MS));
    assert!(!engine.is_any_running());
    assert!(engine.is_run_all_active(), "flag held through settle window");

    engine.advance_to(TimeMs(TICK_INTERVAL_MS + SETTLE_MS));
    assert!(!engine.is_run_all_active());
}

#[test]
fn reset_all_stops_everything_immediately() {
    let mut engine = engine();
    engine.select("alpha");
    engine.select("beta");
    engine.run_all();
    engine.advance_to(TimeMs(STAGGER_INTERVAL_MS));
    assert!(engine.is_any_running());

    engine.reset_all();
    assert!(!engine.is_any_running());
    assert!(!engine.is_run_all_active());
    let state = engine.flow_state("alpha").unwrap();
    assert_eq!(state.current_step, 0);
    assert!(state.active_nodes.is_empty());

    // Nothing left pending: a later advance changes no state.
    engine.advance_to(TimeMs(60_000));
    assert!(!engine.is_any_running());
    assert_eq!(engine.flow_state("alpha").unwrap().current_step, 0);
}

#[test]
fn reset_single_pattern_cancels_its_pending_tick() {
    let mut engine = engine();
    engine.select("alpha");
    engine.start("alpha");
    engine.advance_to(TimeMs(0));
    engine.reset("alpha");

    engine.advance_to(TimeMs(10 * TICK_INTERVAL_MS));
    let state = engine.flow_state("alpha").unwrap();
    assert_eq!(state.current_step, 0);
    assert!(state.node_steps.is_empty());
}

#[test]
fn clock_never_moves_backwards() {
    let mut engine = engine();
    engine.select("alpha");
    engine.start("alpha");
    engine.advance_to(TimeMs(TICK_INTERVAL_MS));
    assert_eq!(engine.now(), TimeMs(TICK_INTERVAL_MS));
    engine.advance_to(TimeMs(0));
    assert_eq!(engine.now(), TimeMs(TICK_INTERVAL_MS));
    assert_eq!(engine.flow_state("alpha").unwrap().current_step, 2);
}

#[test]
fn edge_paths_follow_the_cached_layout() {
    let mut engine = engine();
    engine.select("alpha");
    let paths = engine.edge_paths("alpha");
    assert_eq!(paths.len(), 2);
    let layout = engine.layout("alpha").unwrap();
    let mid = paths[0].midpoint;
    assert!(mid.x > layout["a1"].x0);
    assert!(mid.x < layout["a2"].x0);

    assert!(engine.edge_paths("beta").is_empty(), "not selected");
}
