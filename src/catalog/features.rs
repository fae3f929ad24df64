use crate::catalog::model::{NodeKind, Pattern};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Architecture family inferred from a pattern's identifier.
pub enum ArchitectureFamily {
    /// Reason-then-act loop.
    ReAct,
    /// Code-executing agent.
    CodeAct,
    /// Self-critique / refinement loop.
    SelfReflection,
    /// Retrieval-augmented pipeline.
    RagBased,
    /// Anything else.
    Custom,
}

impl ArchitectureFamily {
    fn infer(pattern_id: &str) -> Self {
        if pattern_id.contains("react") {
            Self::ReAct
        } else if pattern_id.contains("codeact") {
            Self::CodeAct
        } else if pattern_id.contains("reflection") {
            Self::SelfReflection
        } else if pattern_id.contains("rag") {
            Self::RagBased
        } else {
            Self::Custom
        }
    }

    /// Short display label for comparison tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::ReAct => "ReAct",
            Self::CodeAct => "CodeAct",
            Self::SelfReflection => "Self-Reflection",
            Self::RagBased => "RAG-based",
            Self::Custom => "Custom",
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Summary statistics for one pattern, consumed by the read-only comparison
/// panel. Derived entirely from the pattern's node list; holds no state.
pub struct PatternFeatures {
    /// Node count, used as a rough complexity proxy.
    pub complexity: usize,
    /// Whether any node carries a memory capability.
    pub has_memory: bool,
    /// Whether any node carries a reflection capability.
    pub has_reflection: bool,
    /// Whether any node carries a tool capability.
    pub has_tools: bool,
    /// Whether any node carries a retrieval capability.
    pub has_rag: bool,
    /// Inferred architecture family.
    pub architecture: ArchitectureFamily,
    /// First word of the display name.
    pub primary_capability: String,
    /// Distinct node kinds in first-appearance order.
    pub node_kinds: Vec<NodeKind>,
    /// Edge count.
    pub edge_count: usize,
}

impl PatternFeatures {
    /// Derive features from a pattern. Pure; safe to call per render.
    pub fn extract(pattern: &Pattern) -> Self {
        let mut node_kinds = Vec::new();
        for node in &pattern.nodes {
            if !node_kinds.contains(&node.kind) {
                node_kinds.push(node.kind);
            }
        }
        let has = |kind: NodeKind| pattern.nodes.iter().any(|n| n.kind == kind);
        Self {
            complexity: pattern.nodes.len(),
            has_memory: has(NodeKind::Memory),
            has_reflection: has(NodeKind::Reflection),
            has_tools: has(NodeKind::Tool),
            has_rag: has(NodeKind::Rag),
            architecture: ArchitectureFamily::infer(&pattern.id),
            primary_capability: pattern
                .name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
            node_kinds,
            edge_count: pattern.edges.len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/features.rs"]
mod tests;
