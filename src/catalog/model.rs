use std::collections::BTreeSet;

use crate::foundation::error::{FlowError, FlowResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One workflow diagram (agent architecture) in the content catalog.
///
/// Patterns are pure, read-only data supplied by the external catalog. The
/// engine never creates or mutates them; it only reads node order for layout
/// and animation, and edges for optional edge rendering.
pub struct Pattern {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Short description shown alongside the diagram.
    #[serde(default)]
    pub description: String,
    /// Diagram stages in canonical order. Array order is the animation order;
    /// it is not derived from edge topology.
    pub nodes: Vec<Node>,
    /// Directed data-flow connections. May be empty; a pattern with nodes but
    /// no edges still lays out and animates.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One stage/box in a pattern's diagram.
pub struct Node {
    /// Identifier, unique within the owning pattern.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Capability tag used for feature extraction and color selection only;
    /// layout and animation ignore it.
    #[serde(default)]
    pub kind: NodeKind,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
/// Closed set of node capability tags.
///
/// Unknown tags in catalog data deserialize to [`NodeKind::Agent`], so the
/// color and feature mappings over this enum stay exhaustive.
pub enum NodeKind {
    /// Generic agent stage (default and fallback for unknown tags).
    #[default]
    Agent,
    /// User or upstream input.
    Input,
    /// Final output stage.
    Output,
    /// LLM inference call.
    Llm,
    /// Conversation or long-term memory.
    Memory,
    /// External tool invocation.
    Tool,
    /// Self-reflection / critique stage.
    Reflection,
    /// Retrieval-augmented generation stage.
    Rag,
    /// Planning stage.
    Planner,
    /// Output evaluation stage.
    Evaluator,
    /// Routing / dispatch stage.
    Router,
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "input" => Self::Input,
            "output" => Self::Output,
            "llm" => Self::Llm,
            "memory" => Self::Memory,
            "tool" => Self::Tool,
            "reflection" => Self::Reflection,
            "rag" => Self::Rag,
            "planner" => Self::Planner,
            "evaluator" => Self::Evaluator,
            "router" => Self::Router,
            _ => Self::Agent,
        }
    }
}

impl NodeKind {
    /// Accent color (hex) used by renderers for this kind of node.
    ///
    /// Purely decorative; exhaustive so adding a kind forces a color choice.
    pub fn accent_color(self) -> &'static str {
        match self {
            NodeKind::Agent => "#64748b",
            NodeKind::Input => "#0ea5e9",
            NodeKind::Output => "#14b8a6",
            NodeKind::Llm => "#3b82f6",
            NodeKind::Memory => "#8b5cf6",
            NodeKind::Tool => "#ec4899",
            NodeKind::Reflection => "#d97706",
            NodeKind::Rag => "#16a34a",
            NodeKind::Planner => "#f59e0b",
            NodeKind::Evaluator => "#ef4444",
            NodeKind::Router => "#6366f1",
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Directed connection between two nodes of the same pattern.
pub struct Edge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
}

#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(transparent)]
/// Ordered, read-only collection of patterns.
///
/// Deliberately not `Deserialize`: loading goes through
/// [`Catalog::from_json_str`] so an unvalidated catalog cannot exist.
///
/// Construction validates the invariants the engine relies on: pattern ids
/// are unique across the catalog, node ids are unique within each pattern
/// (so per-node step maps cannot collide), and edge endpoints resolve.
pub struct Catalog {
    patterns: Vec<Pattern>,
}

impl Catalog {
    /// Build a catalog from pattern records, validating invariants.
    pub fn from_patterns(patterns: Vec<Pattern>) -> FlowResult<Self> {
        let catalog = Self { patterns };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of pattern records.
    pub fn from_json_str(json: &str) -> FlowResult<Self> {
        let patterns: Vec<Pattern> =
            serde_json::from_str(json).map_err(|e| FlowError::serde(e.to_string()))?;
        Self::from_patterns(patterns)
    }

    /// All patterns in catalog order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Look up a pattern by id.
    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    fn validate(&self) -> FlowResult<()> {
        let mut pattern_ids = BTreeSet::new();
        for pattern in &self.patterns {
            if pattern.id.is_empty() {
                return Err(FlowError::validation("pattern id must be non-empty"));
            }
            if !pattern_ids.insert(pattern.id.as_str()) {
                return Err(FlowError::validation(format!(
                    "duplicate pattern id '{}'",
                    pattern.id
                )));
            }
            let mut node_ids = BTreeSet::new();
            for node in &pattern.nodes {
                if node.id.is_empty() {
                    return Err(FlowError::validation(format!(
                        "pattern '{}' has a node with an empty id",
                        pattern.id
                    )));
                }
                if !node_ids.insert(node.id.as_str()) {
                    return Err(FlowError::validation(format!(
                        "pattern '{}' has duplicate node id '{}'",
                        pattern.id, node.id
                    )));
                }
            }
            for edge in &pattern.edges {
                for endpoint in [&edge.from, &edge.to] {
                    if !node_ids.contains(endpoint.as_str()) {
                        return Err(FlowError::validation(format!(
                            "pattern '{}' edge references unknown node '{}'",
                            pattern.id, endpoint
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
