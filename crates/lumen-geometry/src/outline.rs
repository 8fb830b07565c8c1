//! Closed polygonal outline

use serde::{Deserialize, Serialize};

use crate::rect::{Point, Rect};

/// A closed path made of straight segments. The last vertex joins back to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    vertices: Vec<Point>,
}

impl Outline {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Fewer than three vertices cannot enclose an area.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Smallest rectangle enclosing every vertex.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::ZERO;
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.vertices[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Even-odd membership test (ray cast towards +x).
    pub fn contains(&self, point: Point) -> bool {
        if self.is_empty() {
            return false;
        }

        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let crossing_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < crossing_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
