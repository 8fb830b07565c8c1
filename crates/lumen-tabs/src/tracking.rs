//! Pointer tracking regions

use lumen_geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An area that reports pointer hover for the tab it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingRegion {
    pub rect: Rect,
}

impl TrackingRegion {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}
