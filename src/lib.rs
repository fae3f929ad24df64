//! Patternflow is a deterministic layout and animation engine for comparing
//! agent workflow diagrams side by side.
//!
//! Given a read-only catalog of patterns (named node/edge graphs), the engine
//! places each pattern's nodes inside a fixed canvas, routes curved
//! directional edges between node boundaries, and drives a discrete per-node
//! step animation across one or several independently-animating diagrams.
//!
//! # Pipeline overview
//!
//! 1. **Select**: up to three patterns enter the comparison set (FIFO-capped)
//! 2. **Layout**: `plan(node_ids, canvas) -> Map<id, Rect>` (pure, strategy by count)
//! 3. **Route**: `edge_path(from, to) -> EdgePath` (boundary-anchored Beziers)
//! 4. **Animate**: [`Sequencer`]s activate nodes on a fixed cadence; the
//!    [`RunAllOrchestrator`] staggers several at once
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: layout and routing are pure; animation runs
//!   on a virtual clock the host advances explicitly, never wall time.
//! - **Silent no-ops over errors**: control inputs come from a trusted static
//!   catalog, so invalid transitions are well-defined no-ops; `Result` appears
//!   only at the catalog-loading boundary.
//! - **Read-only catalog**: patterns are never copied mutably or written back.
//!
//! Rendering is out of scope: consumers draw the returned rectangles and
//! [`kurbo::BezPath`]s with whatever surface they like.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod catalog;
mod engine;
mod foundation;
mod geometry;
mod layout;
mod selection;

pub use animation::orchestrator::RunAllOrchestrator;
pub use animation::sequencer::{FlowState, Sequencer};
pub use animation::timer::{SETTLE_MS, STAGGER_INTERVAL_MS, TICK_INTERVAL_MS};
pub use catalog::features::{ArchitectureFamily, PatternFeatures};
pub use catalog::model::{Catalog, Edge, Node, NodeKind, Pattern};
pub use engine::FlowEngine;
pub use foundation::core::{BezPath, Canvas, Point, Rect, TimeMs, Vec2};
pub use foundation::error::{FlowError, FlowResult};
pub use geometry::edge::{ARROW_SIZE, EdgePath, MAX_CONTROL_OFFSET, edge_path};
pub use layout::planner::{
    CANVAS_PADDING, MIN_NODE_SPACING, NODE_HEIGHT, NODE_WIDTH, plan,
};
pub use selection::{MAX_SELECTED, SelectionSet};
