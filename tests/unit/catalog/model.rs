use std::collections::BTreeSet;

use super::*;

fn node(id: &str, kind: NodeKind) -> Node {
    Node {
        id: id.to_string(),
        label: id.to_string(),
        kind,
    }
}

fn pattern(id: &str, node_ids: &[&str]) -> Pattern {
    Pattern {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        nodes: node_ids
            .iter()
            .map(|n| node(n, NodeKind::Agent))
            .collect(),
        edges: vec![],
    }
}

#[test]
fn valid_catalog_loads_and_preserves_order() {
    let catalog =
        Catalog::from_patterns(vec![pattern("a", &["n1"]), pattern("b", &["n1", "n2"])]).unwrap();
    let ids: Vec<_> = catalog.patterns().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!(catalog.get("b").is_some());
    assert!(catalog.get("z").is_none());
}

#[test]
fn duplicate_pattern_ids_are_rejected() {
    let err = Catalog::from_patterns(vec![pattern("a", &["n1"]), pattern("a", &["n1"])])
        .unwrap_err();
    assert!(err.to_string().contains("duplicate pattern id"));
}

#[test]
fn duplicate_node_ids_within_a_pattern_are_rejected() {
    let err = Catalog::from_patterns(vec![pattern("a", &["n1", "n1"])]).unwrap_err();
    assert!(err.to_string().contains("duplicate node id"));
}

#[test]
fn edges_must_reference_known_nodes() {
    let mut p = pattern("a", &["n1", "n2"]);
    p.edges.push(Edge {
        from: "n1".to_string(),
        to: "ghost".to_string(),
    });
    let err = Catalog::from_patterns(vec![p]).unwrap_err();
    assert!(err.to_string().contains("unknown node"));
}

#[test]
fn json_catalog_round_trip_with_defaults() {
    let catalog = Catalog::from_json_str(
        r#"[{
            "id": "react-agent",
            "name": "ReAct Agent",
            "nodes": [
                {"id": "n1", "label": "Input", "kind": "input"},
                {"id": "n2", "label": "Reason", "kind": "llm"},
                {"id": "n3", "label": "Act", "kind": "tool"}
            ],
            "edges": [{"from": "n1", "to": "n2"}, {"from": "n2", "to": "n3"}]
        }]"#,
    )
    .unwrap();
    let p = catalog.get("react-agent").unwrap();
    assert_eq!(p.description, "");
    assert_eq!(p.nodes[2].kind, NodeKind::Tool);
    assert_eq!(p.edges.len(), 2);
}

#[test]
fn unknown_node_kind_falls_back_to_agent() {
    let catalog = Catalog::from_json_str(
        r#"[{"id": "p", "name": "P", "nodes": [{"id": "n1", "label": "N", "kind": "quantum"}]}]"#,
    )
    .unwrap();
    assert_eq!(catalog.get("p").unwrap().nodes[0].kind, NodeKind::Agent);
}

#[test]
fn node_kind_accent_colors_are_distinct() {
    let kinds = [
        NodeKind::Agent,
        NodeKind::Input,
        NodeKind::Output,
        NodeKind::Llm,
        NodeKind::Memory,
        NodeKind::Tool,
        NodeKind::Reflection,
        NodeKind::Rag,
        NodeKind::Planner,
        NodeKind::Evaluator,
        NodeKind::Router,
    ];
    let colors: BTreeSet<_> = kinds.iter().map(|k| k.accent_color()).collect();
    assert_eq!(colors.len(), kinds.len());
    assert!(colors.iter().all(|c| c.starts_with('#') && c.len() == 7));
}

#[test]
fn malformed_json_reports_serde_error() {
    let err = Catalog::from_json_str("not json").unwrap_err();
    assert!(err.to_string().starts_with("serialization error"));
}
