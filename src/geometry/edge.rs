use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Chevron arm length of the directional arrow glyph, in pixels.
pub const ARROW_SIZE: f64 = 8.0;
/// Cap on the horizontal Bezier control-point offset for long edges.
pub const MAX_CONTROL_OFFSET: f64 = 60.0;

#[derive(Clone, Debug)]
/// A routed directional edge between two node rectangles.
pub struct EdgePath {
    /// Cubic Bezier from the source boundary to the target boundary.
    pub curve: BezPath,
    /// Two-segment chevron glyph centered on [`EdgePath::midpoint`].
    pub arrow: BezPath,
    /// Midpoint of the straight line between the boundary anchor points.
    pub midpoint: Point,
}

/// Route a curved edge between two node rectangles.
///
/// Anchor points sit on the rectangle boundaries, not the centers: each
/// center is offset by half its own rectangle's width/height along the
/// center-to-center unit vector. The curve is a cubic Bezier whose control
/// points are offset horizontally from the endpoints by
/// `min(MAX_CONTROL_OFFSET, distance / 3)`, capping curvature on long edges
/// while keeping it proportional on short ones.
///
/// The arrow glyph is rotated to the straight center-line angle rather than
/// the exact Bezier tangent; it is a decoration, not a navigational cue.
///
/// Returns `None` when the centers coincide (degenerate zero-length edge).
pub fn edge_path(from: Rect, to: Rect) -> Option<EdgePath> {
    let from_center = from.center();
    let to_center = to.center();

    let delta = to_center - from_center;
    let distance = delta.hypot();
    if distance == 0.0 {
        return None;
    }
    let dir = delta / distance;

    let start = from_center
        + Vec2::new(dir.x * from.width() / 2.0, dir.y * from.height() / 2.0);
    let end = to_center - Vec2::new(dir.x * to.width() / 2.0, dir.y * to.height() / 2.0);

    let control_offset = MAX_CONTROL_OFFSET.min(distance / 3.0);
    let mut curve = BezPath::new();
    curve.move_to(start);
    curve.curve_to(
        Point::new(start.x + control_offset, start.y),
        Point::new(end.x - control_offset, end.y),
        end,
    );

    let midpoint = start.midpoint(end);
    let angle = delta.y.atan2(delta.x);
    let mut arrow = BezPath::new();
    for wing in [-std::f64::consts::FRAC_PI_6, std::f64::consts::FRAC_PI_6] {
        arrow.move_to(midpoint);
        arrow.line_to(Point::new(
            midpoint.x - ARROW_SIZE * (angle + wing).cos(),
            midpoint.y - ARROW_SIZE * (angle + wing).sin(),
        ));
    }

    Some(EdgePath {
        curve,
        arrow,
        midpoint,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/edge.rs"]
mod tests;
