pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// An instant on the engine's virtual timeline, in milliseconds.
///
/// The engine does not read wall-clock time. The host drives the timeline by
/// calling [`crate::FlowEngine::advance_to`] with monotonically increasing
/// instants; all scheduled work fires during those calls.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct TimeMs(
    /// Milliseconds since timeline start.
    pub u64,
);

impl TimeMs {
    /// This instant shifted forward by `ms` milliseconds (saturating).
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}
