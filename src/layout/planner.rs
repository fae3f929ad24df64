use std::collections::BTreeMap;

use crate::foundation::core::{Canvas, Rect};

/// Fixed node rectangle width in pixels.
pub const NODE_WIDTH: f64 = 100.0;
/// Fixed node rectangle height in pixels.
pub const NODE_HEIGHT: f64 = 60.0;
/// Padding margin kept between node rectangles and the canvas border.
pub const CANVAS_PADDING: f64 = 20.0;
/// Minimum horizontal gap between adjacent nodes in the flow strategy.
pub const MIN_NODE_SPACING: f64 = 25.0;

/// Vertical offset alternated across successive flow-strategy nodes so a row
/// does not read as a single straight line.
const FLOW_Y_OFFSET: f64 = 20.0;

/// Place node rectangles inside the canvas without overlap.
///
/// Node rectangles have a fixed `NODE_WIDTH x NODE_HEIGHT` footprint
/// regardless of canvas size or node count. The placement strategy adapts to
/// the count `n`:
///
/// - `n == 1`: the single rectangle is centered.
/// - `2 <= n <= 4`: flow strategy, a left-to-right row with even spacing and
///   an alternating small vertical offset.
/// - `n > 4`: grid strategy, `min(3, ceil(sqrt(n)))` columns with each node
///   centered in its cell.
///
/// Every coordinate is clamped into `[CANVAS_PADDING, dim - node - CANVAS_PADDING]`
/// with the lower bound winning, so a canvas smaller than one node footprint
/// still yields rectangles (possibly extending past the right/bottom border)
/// rather than an error. Pure and deterministic: identical inputs give
/// bit-identical output.
#[tracing::instrument(skip(node_ids), fields(n = node_ids.len()))]
pub fn plan(node_ids: &[String], canvas: Canvas) -> BTreeMap<String, Rect> {
    let mut layout = BTreeMap::new();
    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let n = node_ids.len();
    if n == 0 {
        return layout;
    }

    let avail_w = width - CANVAS_PADDING * 2.0;
    let avail_h = height - CANVAS_PADDING * 2.0;

    if n == 1 {
        layout.insert(
            node_ids[0].clone(),
            node_rect((width - NODE_WIDTH) / 2.0, (height - NODE_HEIGHT) / 2.0),
        );
    } else if n <= 4 {
        // Flow strategy: one row, spacing grows with spare width.
        let total_node_w = n as f64 * NODE_WIDTH;
        let total_spacing = (MIN_NODE_SPACING * (n as f64 - 1.0)).max(avail_w - total_node_w);
        let spacing = total_spacing / (n as f64 - 1.0);
        for (i, id) in node_ids.iter().enumerate() {
            let x = CANVAS_PADDING + i as f64 * (NODE_WIDTH + spacing);
            let y_offset = if i % 2 == 0 { 0.0 } else { FLOW_Y_OFFSET };
            let y = (height - NODE_HEIGHT) / 2.0 + y_offset;
            layout.insert(
                id.clone(),
                node_rect(clamp_axis(x, width, NODE_WIDTH), clamp_axis(y, height, NODE_HEIGHT)),
            );
        }
    } else {
        // Grid strategy, capped at three columns.
        let cols = 3.min((n as f64).sqrt().ceil() as usize).max(1);
        let rows = n.div_ceil(cols);
        let col_spacing = avail_w / cols as f64;
        let row_spacing = avail_h / rows as f64;
        for (i, id) in node_ids.iter().enumerate() {
            let col = i % cols;
            let row = i / cols;
            let x = CANVAS_PADDING + col as f64 * col_spacing + (col_spacing - NODE_WIDTH) / 2.0;
            let y = CANVAS_PADDING + row as f64 * row_spacing + (row_spacing - NODE_HEIGHT) / 2.0;
            layout.insert(
                id.clone(),
                node_rect(clamp_axis(x, width, NODE_WIDTH), clamp_axis(y, height, NODE_HEIGHT)),
            );
        }
    }
    layout
}

fn node_rect(x: f64, y: f64) -> Rect {
    Rect::new(x, y, x + NODE_WIDTH, y + NODE_HEIGHT)
}

// Lower bound applied last: on a too-small canvas the padding origin wins and
// the rectangle extends past the far border.
fn clamp_axis(v: f64, dim: f64, node_dim: f64) -> f64 {
    v.min(dim - node_dim - CANVAS_PADDING).max(CANVAS_PADDING)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/planner.rs"]
mod tests;
